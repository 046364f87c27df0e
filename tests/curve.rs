use gg20_tss::curve::{generator, Point, Scalar};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
}

#[test]
fn order_times_generator_is_identity() {
    let order_hex = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
    let n = Scalar::from_biguint(hex(order_hex));
    // n mod q == 0, so n*G is the identity regardless of reduction.
    assert!(generator().scalar_mul(&n).is_identity());
}

#[test]
fn known_scalar_multiple_matches_reference_point() {
    let e = Scalar::from_biguint((BigUint::from(1u32) << 240) + (BigUint::from(1u32) << 31));
    let expected = Point::new(
        hex("9577FF57C8234558F293DF502CA4F09CBC65A6572C842B39B366F21717945116"),
        hex("10B49C67FA9365AD7B90DAB070BE339A1DAF9052373EC30FFAE4F72D5E66D053"),
    )
    .unwrap();

    assert_eq!(generator().scalar_mul(&e), expected);
}

#[test]
fn scalar_mul_reduces_mod_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let k = Scalar::random_nonzero(&mut rng);
    let order_hex = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
    let k_plus_order = Scalar::from_biguint(k.value() + hex(order_hex));
    assert_eq!(generator().scalar_mul(&k), generator().scalar_mul(&k_plus_order));
}

#[test]
fn scalar_mul_distributes_over_addition() {
    let mut rng = StdRng::seed_from_u64(11);
    let k1 = Scalar::random_nonzero(&mut rng);
    let k2 = Scalar::random_nonzero(&mut rng);

    let lhs = generator().scalar_mul(&k1.add(&k2));
    let rhs = generator().scalar_mul(&k1).add(&generator().scalar_mul(&k2));
    assert_eq!(lhs, rhs);
}

#[test]
fn point_not_on_curve_is_rejected() {
    assert!(Point::new(BigUint::from(1u32), BigUint::from(1u32)).is_err());
}
