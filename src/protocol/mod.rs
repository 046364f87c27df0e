//! The GG20 threshold-ECDSA protocol: message taxonomy, transport
//! abstraction, parameters, and the [`Participant`] state machine.
//!
//! Grounded directly on `pytss/gg20.py`, the only reference available for
//! this exact round/message shape; Rust-ified with `thiserror` error
//! enums, `log` instrumentation, and `HashMap`/`HashSet` bookkeeping in
//! place of Python dataclasses and dicts.

mod error;
mod message;
mod participant;
mod params;
mod state;
mod transport;

pub use error::ParticipantError;
pub use message::Message;
pub use params::Parameters;
pub use participant::Participant;
pub use state::{KeyGenState, SigningState};
pub use transport::Transport;
