mod support;

use std::collections::HashSet;

use gg20_tss::curve::{ecdsa_verify, Scalar};
use gg20_tss::protocol::Parameters;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run_signing_session(
    signer_ids: &[u16],
    message: Scalar,
    parameters: &Parameters,
    participants: &mut std::collections::HashMap<u16, gg20_tss::protocol::Participant>,
    network: &mut support::Network,
    rng: &mut StdRng,
) {
    let signer_set: HashSet<u16> = signer_ids.iter().copied().collect();

    for &id in signer_ids {
        participants
            .get_mut(&id)
            .unwrap()
            .prepare_for_signing(message.clone(), signer_set.clone(), rng)
            .unwrap();
    }
    for &id in signer_ids {
        participants.get_mut(&id).unwrap().sign(network, rng).unwrap();
    }
    network.drain(participants, rng);
}

#[test]
fn signature_from_first_quorum_verifies_under_joint_key() {
    let mut rng = StdRng::seed_from_u64(5001);
    // (n=4, t=3): any 3 signers form the threshold quorum, per spec E1.
    let parameters = Parameters::new(4, 2);

    let (mut participants, mut network) = support::run_keygen(&parameters, &mut rng);
    let public_key = participants[&1].public_key().unwrap();

    let message_digest = b"gg20 end-to-end signing fixture";
    let z = Scalar::from_hash_digest(message_digest);

    run_signing_session(&[1, 2, 3], z, &parameters, &mut participants, &mut network, &mut rng);

    let signature = participants[&1].signature().unwrap();
    assert!(ecdsa_verify(&public_key, message_digest, &signature));

    for &id in &[2u16, 3] {
        let other_signature = participants[&id].signature().unwrap();
        assert_eq!(other_signature.r, signature.r);
        assert_eq!(other_signature.s, signature.s);
    }
}

#[test]
fn signature_from_a_different_quorum_verifies_under_the_same_key() {
    let mut rng = StdRng::seed_from_u64(5002);
    let parameters = Parameters::new(4, 2);

    let (mut participants, mut network) = support::run_keygen(&parameters, &mut rng);
    let public_key = participants[&1].public_key().unwrap();

    let message_digest = b"a second, disjoint quorum";
    let z = Scalar::from_hash_digest(message_digest);

    run_signing_session(&[2, 3, 4], z, &parameters, &mut participants, &mut network, &mut rng);

    let signature = participants[&2].signature().unwrap();
    assert!(ecdsa_verify(&public_key, message_digest, &signature));
}

#[test]
fn signature_is_unavailable_until_every_signer_contributes() {
    let mut rng = StdRng::seed_from_u64(5003);
    let parameters = Parameters::new(3, 1);

    let (mut participants, _network) = support::run_keygen(&parameters, &mut rng);

    let signer_set: HashSet<u16> = [1u16, 2].into_iter().collect();
    let z = Scalar::from_u64(123456);

    participants
        .get_mut(&1)
        .unwrap()
        .prepare_for_signing(z.clone(), signer_set.clone(), &mut rng)
        .unwrap();
    // Only one participant prepares; without the other, signature() on it
    // must report the missing contribution rather than panicking.
    assert!(participants[&1].signature().is_err());
}
