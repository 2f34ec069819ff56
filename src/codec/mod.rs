// ============================================================================
// Decimal Codec Module
// Conversion between decimal strings and 9-digit u32 limb groups
// ============================================================================
//
// This module provides:
// - BigInt: arbitrary-precision unsigned integer stored as decimal limbs
// - CodecError: error types for parsing
//
// Design principles:
// - Values are immutable once constructed
// - Validation is a single byte-class pass, no per-call regex
// - Rendering round-trips every accepted input, leading zeros included

mod big_int;
mod errors;

pub use big_int::BigInt;
pub use errors::{CodecError, CodecResult};

pub(crate) use big_int::LimbVec;
