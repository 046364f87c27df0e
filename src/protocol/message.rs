//! The GG20 message taxonomy, transport-level.
//!
//! Variant names and fields follow the message table in
//! `SPEC_FULL.md §2`/spec.md §6, which in turn generalizes
//! `pytss/gg20.py`'s `KeyGenBroadcast`/`KeyGenP2P`/`MtoAP2P1`/
//! `MtoAP2P1Response`/`MtoAP2P2`/`MtoAP2P2Response`/
//! `SigningPostMtoABroadcast`/`SigningShare` dataclasses.

use crate::curve::{Point, Scalar};
use crate::paillier::{PaillierCiphertext, PaillierPublicKey};

/// A single protocol message, tagged by phase and carried either via
/// broadcast or point-to-point send.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Keygen, broadcast: own public share and Paillier public key.
    KeyGenBroadcast {
        y: Point,
        paillier_public_key: PaillierPublicKey,
    },
    /// Keygen, p2p: one Shamir share of the sender's secret key share.
    KeyGenP2P { shamir_share: Scalar },
    /// Signing, p2p: MtA instance 1 (k * gamma), initiator -> receiver.
    MtAP2P1 { encrypted_k: PaillierCiphertext },
    /// Signing, p2p: MtA instance 1 response, receiver -> initiator.
    MtAP2P1Response { cipher_b: PaillierCiphertext },
    /// Signing, p2p: MtA instance 2 (k * w), initiator -> receiver.
    MtAP2P2 { encrypted_k: PaillierCiphertext },
    /// Signing, p2p: MtA instance 2 response, receiver -> initiator.
    MtAP2P2Response { cipher_b: PaillierCiphertext },
    /// Signing, broadcast: local delta share and Gamma_i, once both MtA
    /// instances have completed in both roles.
    PostMtABroadcast { delta_i: Scalar, gamma_elliptic: Point },
    /// Signing, broadcast: local signature share.
    SigningShare { share: Scalar },
}

impl Message {
    /// A short tag for the message's kind, used in protocol-error messages.
    pub fn phase_tag(&self) -> &'static str {
        match self {
            Message::KeyGenBroadcast { .. } => "KeyGenBroadcast",
            Message::KeyGenP2P { .. } => "KeyGenP2P",
            Message::MtAP2P1 { .. } => "MtAP2P1",
            Message::MtAP2P1Response { .. } => "MtAP2P1Response",
            Message::MtAP2P2 { .. } => "MtAP2P2",
            Message::MtAP2P2Response { .. } => "MtAP2P2Response",
            Message::PostMtABroadcast { .. } => "PostMtABroadcast",
            Message::SigningShare { .. } => "SigningShare",
        }
    }
}
