mod support;

use gg20_tss::protocol::Parameters;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn joint_public_key_is_consistent_across_participants() {
    let mut rng = StdRng::seed_from_u64(4001);
    let parameters = Parameters::new(4, 2);

    let (participants, _network) = support::run_keygen(&parameters, &mut rng);

    let expected = participants[&1].public_key().unwrap();
    for id in 2..=parameters.party_size {
        assert_eq!(participants[&id].public_key().unwrap(), expected);
    }
}

#[test]
fn public_key_is_not_available_before_all_contributions_arrive() {
    use gg20_tss::protocol::Participant;

    let parameters = Parameters::new(3, 1);
    let lone = Participant::new(1, parameters);
    assert!(lone.public_key().is_err());
}
