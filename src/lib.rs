// ============================================================================
// Decimal BigInt Library
// Arbitrary-precision unsigned integer addition over decimal strings
// ============================================================================

//! # Decimal BigInt
//!
//! Arbitrary-precision unsigned integer addition over decimal-string input.
//!
//! A value is parsed from a string matching `^[0-9]+$` into 9-digit decimal
//! groups stored as u32 limbs, added with grade-school carry propagation,
//! and rendered back to a decimal string.
//!
//! ## Features
//!
//! - **Exact round-trip**: `render(parse(s)) == s` for every accepted input
//! - **Significance-aligned addition** across operands of unequal limb count
//! - **Immutable values**: operations never mutate their inputs, so values
//!   are freely shareable across threads
//! - **String serialization** behind the optional `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use decimal_bigint::prelude::*;
//!
//! let a = BigInt::from_decimal_str("123456789000000001")?;
//! let b = BigInt::from_decimal_str("999")?;
//!
//! let total = add(&a, &b);
//! assert_eq!(total.to_string(), "123456789000001000");
//! assert_eq!(total.digit_count(), 18);
//!
//! // Operator sugar over the same engine
//! let doubled = &total + &total;
//! assert_eq!(doubled.to_string(), "246913578000002000");
//! # Ok::<(), CodecError>(())
//! ```

pub mod codec;
pub mod engine;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{BigInt, CodecError, CodecResult};
    pub use crate::engine::add;
}
