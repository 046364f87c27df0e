//! Synchronous same-process fan-out transport for exercising a set of
//! [`Participant`]s end-to-end, per spec.md §4.7 ("the test harness
//! supplies synchronous same-process fan-out").

use std::collections::{HashMap, VecDeque};

use gg20_tss::protocol::{Message, Participant, Parameters, Transport};
use rand::rngs::StdRng;

/// Queues every broadcast/send call; `drain` then feeds each participant
/// its messages in FIFO order until the queue is empty.
pub struct Network {
    party_size: u16,
    inbox: VecDeque<(u16, u16, Message)>,
}

impl Network {
    pub fn new(party_size: u16) -> Self {
        Network {
            party_size,
            inbox: VecDeque::new(),
        }
    }

    pub fn drain(&mut self, participants: &mut HashMap<u16, Participant>, rng: &mut StdRng) {
        while let Some((sender_id, recipient_id, message)) = self.inbox.pop_front() {
            participants
                .get_mut(&recipient_id)
                .expect("recipient is one of the constructed participants")
                .receive_message(sender_id, message, self, rng)
                .expect("test harness only drives well-formed protocol runs");
        }
    }
}

impl Transport for Network {
    fn broadcast(&mut self, sender_id: u16, message: Message) {
        for recipient_id in 1..=self.party_size {
            self.inbox.push_back((sender_id, recipient_id, message.clone()));
        }
    }

    fn send(&mut self, sender_id: u16, recipient_id: u16, message: Message) {
        self.inbox.push_back((sender_id, recipient_id, message));
    }
}

/// Builds `party_size` participants sharing `parameters` and runs keygen
/// to completion.
pub fn run_keygen(parameters: &Parameters, rng: &mut StdRng) -> (HashMap<u16, Participant>, Network) {
    let mut participants = HashMap::new();
    for id in 1..=parameters.party_size {
        participants.insert(id, Participant::new(id, parameters.clone()));
    }

    let mut network = Network::new(parameters.party_size);
    for id in 1..=parameters.party_size {
        participants
            .get_mut(&id)
            .unwrap()
            .key_gen(&mut network, rng)
            .expect("keygen should not fail in a well-formed test run");
    }
    network.drain(&mut participants, rng);

    (participants, network)
}
