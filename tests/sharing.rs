use gg20_tss::curve::Scalar;
use gg20_tss::sharing::{recover, split};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn all_shares_recover_the_secret() {
    let mut rng = StdRng::seed_from_u64(1234);
    let secret = Scalar::from_u64(1234);

    let shares = split(&secret, 3, 6, &mut rng).unwrap();
    let recovered = recover(&shares, 3).unwrap();

    assert_eq!(recovered, secret);
}

#[test]
fn any_threshold_subset_recovers_the_secret() {
    let mut rng = StdRng::seed_from_u64(5678);
    let secret = Scalar::from_u64(1234);

    let shares = split(&secret, 3, 6, &mut rng).unwrap();

    let first_three = &shares[0..3];
    assert_eq!(recover(first_three, 3).unwrap(), secret);

    let last_three = &shares[3..6];
    assert_eq!(recover(last_three, 3).unwrap(), secret);

    let scattered = vec![shares[1].clone(), shares[3].clone(), shares[5].clone()];
    assert_eq!(recover(&scattered, 3).unwrap(), secret);
}

#[test]
fn fewer_than_threshold_shares_is_rejected() {
    let mut rng = StdRng::seed_from_u64(9012);
    let secret = Scalar::from_u64(1234);

    let shares = split(&secret, 4, 8, &mut rng).unwrap();
    let insufficient = &shares[0..3];

    assert!(recover(insufficient, 4).is_err());
}

#[test]
fn sub_threshold_shares_reconstruct_a_wrong_value() {
    // Spec E3/property 4: fewer than `threshold` shares don't just get
    // rejected by the length gate, they actively interpolate the wrong
    // point when taken at face value — the secret sits on a
    // degree-(threshold - 1) polynomial, so any 2 of its 6 shares lie on
    // infinitely many lower-degree polynomials other than the true one.
    let mut rng = StdRng::seed_from_u64(3456);
    let secret = Scalar::from_u64(1234);

    let shares = split(&secret, 3, 6, &mut rng).unwrap();
    let two_shares = &shares[0..2];

    let wrongly_recovered = recover(two_shares, 2).unwrap();
    assert_ne!(wrongly_recovered, secret);
}

#[test]
fn split_rejects_threshold_above_party_size() {
    let mut rng = StdRng::seed_from_u64(1);
    let secret = Scalar::from_u64(1);
    assert!(split(&secret, 5, 3, &mut rng).is_err());
}

#[test]
fn recover_rejects_duplicate_indices() {
    let mut rng = StdRng::seed_from_u64(2);
    let secret = Scalar::from_u64(1);
    let shares = split(&secret, 2, 4, &mut rng).unwrap();
    let duplicated = vec![shares[0].clone(), shares[0].clone()];

    assert!(recover(&duplicated, 2).is_err());
}
