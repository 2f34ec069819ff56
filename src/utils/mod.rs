// ============================================================================
// Utilities Module
// Thin digit-string helpers consumed by the codec and the addition engine
// ============================================================================

mod digits;

pub use digits::{chunk_digit_groups, count_digits, group_to_u32};
