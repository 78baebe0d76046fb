//! brainpoolP384r1 domain parameters (RFC 5639).
//!
//! The values are carried verbatim as opaque big-endian byte strings;
//! no curve arithmetic is performed and nothing is validated.

use hex_literal::hex;
use num_bigint::BigUint;

/// Field modulus `p`.
pub const MODULUS: [u8; 48] =
    hex!("8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b412b1da197fb71123acd3a729901d1a71874700133107ec53");

/// Curve coefficient `a`.
pub const EQUATION_A: [u8; 48] =
    hex!("7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f8aa5814a503ad4eb04a8c7dd22ce2826");

/// Curve coefficient `b`.
pub const EQUATION_B: [u8; 48] =
    hex!("04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11");

/// Base point x-coordinate.
pub const GENERATOR_X: [u8; 48] =
    hex!("1d1c64f068cf45ffa2a63a81b7c13f6b8847a3e77ef14fe3db7fcafe0cbd10e8e826e03436d646aaef87b2e247d4af1e");

/// Base point y-coordinate.
pub const GENERATOR_Y: [u8; 48] =
    hex!("8abe1d7520f9c2a45cb1eb8e95cfd55262b70b29feec5864e19c054ff99129280e4646217791811142820341263c5315");

/// Base point order `n`.
pub const ORDER: [u8; 48] =
    hex!("8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b31f166e6cac0425a7cf3ab6af6b7fc3103b883202e9046565");

/// Field modulus `p` as an arbitrary-precision integer.
pub fn modulus() -> BigUint {
    BigUint::from_bytes_be(&MODULUS)
}

/// Curve coefficient `a` as an arbitrary-precision integer.
pub fn equation_a() -> BigUint {
    BigUint::from_bytes_be(&EQUATION_A)
}

/// Curve coefficient `b` as an arbitrary-precision integer.
pub fn equation_b() -> BigUint {
    BigUint::from_bytes_be(&EQUATION_B)
}

/// Base point x-coordinate as an arbitrary-precision integer.
pub fn generator_x() -> BigUint {
    BigUint::from_bytes_be(&GENERATOR_X)
}

/// Base point y-coordinate as an arbitrary-precision integer.
pub fn generator_y() -> BigUint {
    BigUint::from_bytes_be(&GENERATOR_Y)
}

/// Base point order `n` as an arbitrary-precision integer.
pub fn order() -> BigUint {
    BigUint::from_bytes_be(&ORDER)
}
