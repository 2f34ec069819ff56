// ============================================================================
// BigInt Value Type
// Arbitrary-precision unsigned integer stored as 9-digit decimal limb groups
// ============================================================================

use super::errors::{CodecError, CodecResult};
use crate::utils::{chunk_digit_groups, count_digits, group_to_u32};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Limb storage; operands up to 36 digits stay inline.
pub(crate) type LimbVec = SmallVec<[u32; 4]>;

/// Arbitrary-precision unsigned integer, parsed from and rendered to a
/// decimal string.
///
/// The magnitude is an ordered sequence of u32 limbs, most-significant limb
/// first. Each limb encodes a fixed group of [`GROUP_WIDTH`](Self::GROUP_WIDTH)
/// decimal digits of the source string, except the leading limb, which
/// encodes whatever remains after the full groups are cut from the
/// least-significant end.
///
/// Values are immutable once constructed: parsing and addition both produce
/// new values and never touch their inputs, so sharing across threads needs
/// no synchronization.
///
/// # Example
/// ```
/// use decimal_bigint::codec::BigInt;
///
/// let value = BigInt::from_decimal_str("123456789000000001")?;
/// assert_eq!(value.digit_count(), 18);
/// assert_eq!(value.limb_count(), 2);
/// assert_eq!(value.to_string(), "123456789000000001");
/// # Ok::<(), decimal_bigint::codec::CodecError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Decimal digit groups, most-significant limb first; never empty
    magnitude: LimbVec,
    /// Total decimal digits in the source (or result) string
    digit_count: usize,
}

impl BigInt {
    /// Decimal digits per limb. 9 keeps limb arithmetic inside u32: the worst
    /// per-position sum is `999_999_999 + 999_999_999 + 1`, which still fits.
    pub const GROUP_WIDTH: usize = 9;

    /// `10^GROUP_WIDTH`, the positional weight of one limb
    pub const GROUP_RADIX: u32 = 1_000_000_000;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a decimal string.
    ///
    /// Accepts exactly the strings matching `^[0-9]+$`: one or more ASCII
    /// digits, no sign, no decimal point, no separators. Redundant leading
    /// zeros are accepted and preserved through rendering.
    ///
    /// # Errors
    /// - `InvalidFormat` if the input is empty or contains a non-digit
    /// - `GroupConversionFailed` if a digit group overflows the limb type;
    ///   unreachable unless `GROUP_WIDTH` is raised past what u32 holds
    pub fn from_decimal_str(text: &str) -> CodecResult<Self> {
        if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
            tracing::debug!(len = text.len(), "rejected non-decimal input");
            return Err(CodecError::InvalidFormat);
        }

        let mut magnitude = LimbVec::new();
        for group in chunk_digit_groups(text, Self::GROUP_WIDTH) {
            let limb = group_to_u32(group).ok_or(CodecError::GroupConversionFailed)?;
            magnitude.push(limb);
        }

        Ok(Self {
            magnitude,
            digit_count: text.len(),
        })
    }

    /// The value zero, as the single limb `0`.
    #[inline]
    pub fn zero() -> Self {
        Self {
            magnitude: smallvec![0],
            digit_count: 1,
        }
    }

    /// Create from a native u64 (at most 20 digits, three limbs).
    pub fn from_u64(value: u64) -> Self {
        let radix = u64::from(Self::GROUP_RADIX);
        let mut magnitude = LimbVec::new();
        let mut rest = value;
        loop {
            magnitude.insert(0, (rest % radix) as u32);
            rest /= radix;
            if rest == 0 {
                break;
            }
        }

        let digit_count = count_digits(magnitude[0]) + Self::GROUP_WIDTH * (magnitude.len() - 1);
        Self {
            magnitude,
            digit_count,
        }
    }

    /// Assemble a value from already-grouped limbs. The caller guarantees the
    /// representation invariants: non-empty, every limb below `GROUP_RADIX`,
    /// and `digit_count` consistent with the leading limb.
    #[inline]
    pub(crate) fn from_parts(magnitude: LimbVec, digit_count: usize) -> Self {
        debug_assert!(!magnitude.is_empty());
        debug_assert!(magnitude.iter().all(|&limb| limb < Self::GROUP_RADIX));
        Self {
            magnitude,
            digit_count,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total decimal digits in the value, as counted at construction time.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Number of limbs in the magnitude.
    #[inline]
    pub fn limb_count(&self) -> usize {
        self.magnitude.len()
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.iter().all(|&limb| limb == 0)
    }

    /// Limbs, most-significant first; for the addition engine.
    #[inline]
    pub(crate) fn limbs(&self) -> &[u32] {
        &self.magnitude
    }

    /// Render to an owned decimal string. Same output as `Display`.
    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }

    /// Digit width of the leading limb: whatever the full 9-digit groups
    /// leave over from the recorded digit count.
    fn head_width(&self) -> usize {
        self.digit_count - Self::GROUP_WIDTH * (self.magnitude.len() - 1)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl std::str::FromStr for BigInt {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for BigInt {
    /// Renders the leading limb at its recorded head width and every other
    /// limb zero-padded to the full group width, so the output reproduces the
    /// parsed string exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head_width = self.head_width();
        for (index, limb) in self.magnitude.iter().enumerate() {
            let width = if index == 0 { head_width } else { Self::GROUP_WIDTH };
            write!(f, "{:0>width$}", limb, width = width)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BigInt({}, digits={}, limbs={})",
            self,
            self.digit_count,
            self.magnitude.len()
        )
    }
}

// ============================================================================
// Serde (string representation at API boundaries)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;

        let text = String::deserialize(deserializer)?;
        Self::from_decimal_str(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
