// ============================================================================
// Addition Engine Module
// Carry-propagating addition over limb sequences
// ============================================================================
//
// The engine walks limb positions from the least-significant end, pairing
// limbs by significance rather than by raw index, so operands of unequal
// limb count and unequal head width line up correctly. It depends on the
// codec only to read limbs and assemble the result.

mod adder;

pub use adder::add;
