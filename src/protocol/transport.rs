//! The communication capability the core consumes, per spec.md §4.7.
//!
//! Mirrors `pytss/gg20.py`'s `CommunicationDelegate` ABC: a transport
//! need only guarantee, per ordered `(sender, receiver)` pair, in-order
//! delivery of that pair's stream (spec.md §5). No other delivery
//! guarantee is required from implementers.

use super::message::Message;

/// Broadcast and point-to-point message delivery, injected into every
/// [`Participant`](super::Participant).
pub trait Transport {
    /// Delivers `message` to every participant, including the sender.
    fn broadcast(&mut self, sender_id: u16, message: Message);

    /// Delivers `message` to exactly `recipient_id`.
    fn send(&mut self, sender_id: u16, recipient_id: u16, message: Message);
}
