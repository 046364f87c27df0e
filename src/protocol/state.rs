//! Per-participant protocol state, per spec.md §3 /
//! `pytss/gg20.py::KeyGenState`/`SigningState`.

use std::collections::{HashMap, HashSet};

use crate::curve::{Point, Scalar};
use crate::paillier::{PaillierPrivateKey, PaillierPublicKey};
use crate::sharing::ShamirShare;

/// Long-lived keygen state. Created empty at construction, populated by
/// [`key_gen`](super::Participant::key_gen), and reused across many
/// signing sessions.
#[derive(Default)]
pub struct KeyGenState {
    pub paillier_public_key: Option<PaillierPublicKey>,
    pub paillier_private_key: Option<PaillierPrivateKey>,

    /// This participant's additive share `x_i` of the joint private key.
    pub secret_key_share: Option<Scalar>,
    /// The Shamir shares of `secret_key_share`, one per participant.
    pub secret_key_shamir_shares: Vec<ShamirShare>,

    /// `y_i = x_i * G`, this participant's public component.
    pub y: Option<Point>,

    /// This participant's `(t, n)` share `x_i*` of the *joint* private key,
    /// i.e. the sum of every Shamir share sent to it.
    pub x: Option<Scalar>,
    /// `X_i = x_i* * G`.
    pub big_x: Option<Point>,

    pub other_y_by_id: HashMap<u16, Point>,
    pub other_shamir_shares_by_id: HashMap<u16, Scalar>,
    pub other_paillier_public_keys_by_id: HashMap<u16, PaillierPublicKey>,
}

/// Per-signing-session state. Created fresh by
/// [`prepare_for_signing`](super::Participant::prepare_for_signing) and
/// discarded once the signature is assembled.
pub struct SigningState {
    pub message: Scalar,
    pub signer_ids: HashSet<u16>,

    /// `w_i`: this participant's `(t, t+1)` reshare of the joint key,
    /// restricted to `signer_ids`.
    pub w: Scalar,
    /// `k_i`: signing nonce.
    pub k: Scalar,
    /// `gamma_i`: multiplicative mask.
    pub gamma: Scalar,
    /// `Gamma_i = gamma_i * G`.
    pub gamma_elliptic: Point,
    /// `Gamma = sum_j Gamma_j`, accumulated from `PostMtABroadcast`.
    pub gamma_elliptic_summation: Option<Point>,

    /// MtA instance 1 (operand `k_i * gamma_j`): this participant as
    /// initiator (`alpha_ij`) and as receiver (`beta_ij`).
    pub mta_alpha_1: HashMap<u16, Scalar>,
    pub mta_beta_1: HashMap<u16, Scalar>,
    /// MtA instance 2 (operand `k_i * w_j`): initiator (`mu_ij`) and
    /// receiver (`nu_ij`).
    pub mta_mu_2: HashMap<u16, Scalar>,
    pub mta_nu_2: HashMap<u16, Scalar>,

    pub delta_i: Option<Scalar>,
    pub delta: Option<Scalar>,
    pub delta_by_id: HashMap<u16, Scalar>,

    pub sigma_i: Option<Scalar>,
    pub little_r: Option<Scalar>,

    pub s_by_id: HashMap<u16, Scalar>,
}

impl SigningState {
    /// Number of p2p counterparties this participant runs MtA with: every
    /// other signer.
    pub fn mta_counterparty_count(&self) -> usize {
        self.signer_ids.len().saturating_sub(1)
    }

    /// Whether both MtA-2 roles have heard from every counterparty, the
    /// trigger to move on to delta/sigma aggregation.
    pub fn finished_mta_2(&self) -> bool {
        let expected = self.mta_counterparty_count();
        self.mta_nu_2.len() == expected && self.mta_mu_2.len() == expected
    }
}
