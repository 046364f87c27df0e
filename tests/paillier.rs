use gg20_tss::paillier::generate_key_pair;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn encrypt_then_decrypt_round_trips() {
    let mut rng = StdRng::seed_from_u64(128);
    let (public, private) = generate_key_pair(128, &mut rng);

    let message: BigUint = "503871685875809544500323809344413608".parse().unwrap();
    let ciphertext = public.encrypt(&message, &mut rng).unwrap();

    assert_ne!(ciphertext.0, message);
    assert_eq!(private.decrypt(&ciphertext).unwrap(), message);
}

#[test]
fn homomorphic_add_matches_plaintext_sum() {
    let mut rng = StdRng::seed_from_u64(256);
    let (public, private) = generate_key_pair(128, &mut rng);

    let a = BigUint::from(5u32);
    let b = BigUint::from(6u32);

    let encrypted_a = public.encrypt(&a, &mut rng).unwrap();
    let sum = public.homomorphic_add(&encrypted_a, &b, &mut rng).unwrap();

    assert_eq!(private.decrypt(&sum).unwrap(), BigUint::from(11u32));
}

#[test]
fn homomorphic_multiply_matches_plaintext_product() {
    let mut rng = StdRng::seed_from_u64(512);
    let (public, private) = generate_key_pair(128, &mut rng);

    let message = BigUint::from(25u32);
    let constant = BigUint::from(11u32);

    let encrypted = public.encrypt(&message, &mut rng).unwrap();
    let product = public.homomorphic_multiply(&encrypted, &constant);

    assert_eq!(private.decrypt(&product).unwrap(), BigUint::from(275u32));
}

#[test]
fn plaintext_too_large_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1024);
    let (public, _private) = generate_key_pair(128, &mut rng);

    let too_large = &public.n + BigUint::from(1u32);
    assert!(public.encrypt(&too_large, &mut rng).is_err());
}
