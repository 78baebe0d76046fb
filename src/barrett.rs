//! Barrett-style reduction parameters.
//!
//! Only the precomputed reciprocal constant is produced here; the
//! reduction itself is out of scope.

use num_bigint::BigUint;

/// Shift used for the reciprocal: twice the 384-bit operand width plus
/// four guard bits.
pub const RECIPROCAL_SHIFT: u32 = 2 * 384 + 4;

/// Compute the reduction parameter `floor(2^772 / x)`.
///
/// # Panics
///
/// Panics if `x` is zero.
pub fn reduction_parameter(x: &BigUint) -> BigUint {
    (BigUint::from(1u8) << RECIPROCAL_SHIFT) / x
}
