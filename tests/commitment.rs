use gg20_tss::commitment::{commit, verify};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn commitment_opens_with_its_own_decommitment() {
    let mut rng = StdRng::seed_from_u64(1);
    let values = vec![BigUint::from(1u32), BigUint::from(2u32), BigUint::from(3u32)];

    let result = commit(&values, true, &mut rng);
    assert!(verify(&result.commitment, &result.decommitment).is_ok());
}

#[test]
fn commitment_without_randomness_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(2);
    let values = vec![BigUint::from(42u32)];

    let a = commit(&values, false, &mut rng);
    let b = commit(&values, false, &mut rng);
    assert_eq!(a.commitment, b.commitment);
}

#[test]
fn tampered_decommitment_fails_to_verify() {
    let mut rng = StdRng::seed_from_u64(3);
    let values = vec![BigUint::from(7u32)];

    let mut result = commit(&values, true, &mut rng);
    result.decommitment[0] = BigUint::from(8u32);

    assert!(verify(&result.commitment, &result.decommitment).is_err());
}
