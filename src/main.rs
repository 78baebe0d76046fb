//! Prints the brainpoolP384r1 circuit constants.
//!
//! One line per value, in a fixed order: the limb decompositions of Gx,
//! Gy, a, b, p, `floor(2^772 / p)`, n, `floor(2^772 / n)`, then the
//! sample digest's byte values.

use bp384_limbgen::{BigUint, Limbs, SAMPLE_DIGEST_HEX, barrett, r1};

fn print_limbs(x: &BigUint) {
    println!("{}", Limbs::from_uint(x));
}

fn main() -> Result<(), hex::FromHexError> {
    print_limbs(&r1::generator_x());
    print_limbs(&r1::generator_y());

    print_limbs(&r1::equation_a());
    print_limbs(&r1::equation_b());

    let p = r1::modulus();
    print_limbs(&p);
    print_limbs(&barrett::reduction_parameter(&p));

    let n = r1::order();
    print_limbs(&n);
    print_limbs(&barrett::reduction_parameter(&n));

    println!("{:?}", hex::decode(SAMPLE_DIGEST_HEX)?);
    Ok(())
}
