//! 120-bit limb decomposition of large integers.
//!
//! Arithmetic circuits represent 384-bit field elements as four 120-bit
//! limbs; this module produces and renders that representation.

use core::fmt;
use num_bigint::BigUint;

/// Number of limbs in a decomposition.
pub const LIMB_COUNT: usize = 4;

/// Width of each limb in bits.
pub const LIMB_BITS: u32 = 120;

/// A large integer decomposed into four 120-bit limbs.
///
/// Limbs are ordered least-significant first, the order the circuits
/// consume them in. Decomposing a value of `2^480` or above silently
/// discards the high-order bits: exactly [`LIMB_COUNT`] limbs are kept.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Limbs([BigUint; LIMB_COUNT]);

impl Limbs {
    /// Decompose `x` into 120-bit limbs:
    ///
    /// ```text
    /// limb[i] = (x >> 120·i) mod 2^120,  i = 0..3
    /// ```
    pub fn from_uint(x: &BigUint) -> Self {
        let mask = (BigUint::from(1u8) << LIMB_BITS) - 1u8;
        Self(core::array::from_fn(|i| {
            (x >> (LIMB_BITS * i as u32)) & &mask
        }))
    }

    /// Reassemble the decomposed value:
    ///
    /// ```text
    /// limb[0] + limb[1]·2^120 + limb[2]·2^240 + limb[3]·2^360
    /// ```
    pub fn to_uint(&self) -> BigUint {
        self.0
            .iter()
            .rev()
            .fold(BigUint::from(0u8), |acc, limb| (acc << LIMB_BITS) + limb)
    }

    /// Borrow the limbs, least significant first.
    pub fn as_array(&self) -> &[BigUint; LIMB_COUNT] {
        &self.0
    }
}

// Renders the limbs as a bracketed list of unpadded lowercase hex
// values, e.g. `[0x26e0…, 0xa3e7…, 0xf068…, 0x1d1c64]`.
impl fmt::Display for Limbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, limb) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{limb:#x}")?;
        }
        f.write_str("]")
    }
}
