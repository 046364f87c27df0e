use gg20_tss::field::FieldElement;
use num_bigint::BigUint;

#[test]
fn add_sub_are_inverse() {
    let a = FieldElement::from_biguint(BigUint::from(123456789u64));
    let b = FieldElement::from_biguint(BigUint::from(987654321u64));
    assert_eq!(a.add(&b).sub(&b), a);
}

#[test]
fn inverse_of_nonzero_round_trips() {
    let a = FieldElement::from_biguint(BigUint::from(42u32));
    let inv = a.inverse().unwrap();
    assert_eq!(a.mul(&inv), FieldElement::one());
}

#[test]
fn inverse_of_zero_fails() {
    assert!(FieldElement::zero().inverse().is_err());
}

#[test]
fn sqrt_of_square_recovers_a_root() {
    let a = FieldElement::from_biguint(BigUint::from(9999u32));
    let square = a.mul(&a);
    let root = square.sqrt().expect("a square always has a root");
    assert_eq!(root.mul(&root), square);
}

#[test]
fn negation_round_trips() {
    let a = FieldElement::from_biguint(BigUint::from(17u32));
    assert_eq!(a.neg().neg(), a);
    assert!(a.add(&a.neg()).is_zero());
}
