// ============================================================================
// Addition Engine
// Carry-propagating addition over decimal limb sequences
// ============================================================================

use crate::codec::{BigInt, LimbVec};
use crate::utils::count_digits;
use smallvec::smallvec;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Add two values, producing a new one; the operands are left untouched.
///
/// The longer magnitude drives the walk. Positions run from the
/// least-significant limb upward, and the shorter operand's limb for a
/// position is looked up by its offset from the least-significant end,
/// never by raw index, since the operands may differ in limb count and the
/// leading limbs may differ in digit width. Positions the shorter operand
/// does not cover contribute zero.
///
/// Total for all well-formed values: the worst per-position sum fits u32
/// (see [`BigInt::GROUP_WIDTH`]), and a final carry simply grows the
/// magnitude by one leading limb.
///
/// # Example
/// ```
/// use decimal_bigint::codec::BigInt;
/// use decimal_bigint::engine::add;
///
/// let a = BigInt::from_decimal_str("999999999")?;
/// let b = BigInt::from_decimal_str("1")?;
/// assert_eq!(add(&a, &b).to_string(), "1000000000");
/// # Ok::<(), decimal_bigint::codec::CodecError>(())
/// ```
pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
    let (lhs, rhs) = if a.limb_count() >= b.limb_count() {
        (a.limbs(), b.limbs())
    } else {
        (b.limbs(), a.limbs())
    };

    let mut magnitude: LimbVec = smallvec![0; lhs.len()];
    let mut carry = false;

    for offset in 0..lhs.len() {
        let index = lhs.len() - 1 - offset;

        let lhs_limb = lhs[index];
        let rhs_limb = if offset < rhs.len() {
            rhs[rhs.len() - 1 - offset]
        } else {
            0
        };

        let mut sum = lhs_limb + rhs_limb + u32::from(carry);

        // A sum wider than the group overflows into the next position.
        carry = count_digits(sum) > BigInt::GROUP_WIDTH;
        if carry {
            sum %= BigInt::GROUP_RADIX;
        }

        magnitude[index] = sum;
    }

    if carry {
        magnitude.insert(0, 1);
        tracing::trace!(limbs = magnitude.len(), "final carry extended magnitude");
    }

    // The digit count comes from the result's own leading limb, not from the
    // operands: a carry can add a digit.
    let digit_count = count_digits(magnitude[0]) + BigInt::GROUP_WIDTH * (magnitude.len() - 1);
    BigInt::from_parts(magnitude, digit_count)
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: &BigInt) -> BigInt {
        add(self, rhs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: BigInt) -> BigInt {
        add(&self, &rhs)
    }
}

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = add(self, rhs);
    }
}

impl AddAssign for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt) {
        *self = add(self, &rhs);
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, value| add(&acc, &value))
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, value| add(&acc, value))
    }
}

// ============================================================================
// Tests
// ============================================================================
