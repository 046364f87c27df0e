use thiserror::Error;

use crate::curve::{CurveError, ScalarError};
use crate::field::FieldError;
use crate::paillier::PaillierError;
use crate::sharing::SharingError;

/// Errors a [`Participant`](super::Participant) can produce, either from
/// protocol misuse or from a downstream arithmetic layer.
///
/// Per `SPEC_FULL.md §7.5`, protocol violations the reference
/// implementation silently ignores (duplicate messages, messages outside
/// the expected phase, unknown senders, missing contributions at
/// assembly time) are surfaced here instead of discarded.
#[derive(Debug, Error)]
pub enum ParticipantError {
    #[error("already received a {phase} message from party {sender_id}")]
    DuplicateMessage { sender_id: u16, phase: &'static str },

    #[error("received a {phase} message from party {sender_id} outside the expected phase")]
    UnexpectedPhase { sender_id: u16, phase: &'static str },

    #[error("message from unrecognized party {sender_id}")]
    UnknownSender { sender_id: u16 },

    #[error("{what} is not yet available: missing contribution from {missing_count} part(ies)")]
    MissingContribution {
        what: &'static str,
        missing_count: usize,
    },

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Scalar(#[from] ScalarError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Sharing(#[from] SharingError),

    #[error(transparent)]
    Paillier(#[from] PaillierError),
}
