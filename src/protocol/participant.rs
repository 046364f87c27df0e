//! The GG20 participant state machine, per spec.md §4.8 /
//! `pytss/gg20.py::Participant`.
//!
//! Security note: this implements semi-honest GG20 only. There are no
//! zero-knowledge range proofs over Paillier ciphertexts and no proof of
//! Paillier-key well-formedness — a malicious counterparty can break
//! confidentiality or correctness. See `SPEC_FULL.md §7.3`.

use num_bigint::BigUint;
use num_traits::One;
use rand_core::{CryptoRng, RngCore};

use crate::bigint;
use crate::curve::{generator, Scalar, Signature};
use crate::paillier;
use crate::protocol::error::ParticipantError;
use crate::protocol::message::Message;
use crate::protocol::params::Parameters;
use crate::protocol::state::{KeyGenState, SigningState};
use crate::protocol::transport::Transport;
use crate::sharing;

use std::collections::HashSet;

/// A single party in a GG20 keygen/signing run.
///
/// A `Participant` is a passive object: it only acts in response to
/// `key_gen`/`prepare_for_signing`/`sign` calls and incoming messages fed
/// through [`receive_message`](Self::receive_message). All outbound
/// traffic goes through the injected [`Transport`].
pub struct Participant {
    id: u16,
    parameters: Parameters,
    key_gen_state: KeyGenState,
    signing_state: Option<SigningState>,
}

impl Participant {
    pub fn new(id: u16, parameters: Parameters) -> Self {
        Participant {
            id,
            parameters,
            key_gen_state: KeyGenState::default(),
            signing_state: None,
        }
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    /// Starts a keygen session: generates this participant's Paillier
    /// keypair and secret share, then fans the contributions out via
    /// `transport`.
    pub fn key_gen(
        &mut self,
        transport: &mut impl Transport,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<(), ParticipantError> {
        log::debug!("participant {}: generating key", self.id);

        let (paillier_public_key, paillier_private_key) =
            paillier::generate_key_pair(self.parameters.paillier_security_parameter, rng);

        let secret_key_share = Scalar::random_nonzero(rng);
        let shares = sharing::split(
            &secret_key_share,
            self.parameters.threshold + 1,
            self.parameters.party_size,
            rng,
        )?;

        let y = generator().scalar_mul(&secret_key_share);

        self.key_gen_state.paillier_public_key = Some(paillier_public_key.clone());
        self.key_gen_state.paillier_private_key = Some(paillier_private_key);
        self.key_gen_state.secret_key_share = Some(secret_key_share);
        self.key_gen_state.secret_key_shamir_shares = shares.clone();
        self.key_gen_state.y = Some(y.clone());

        transport.broadcast(
            self.id,
            Message::KeyGenBroadcast {
                y,
                paillier_public_key,
            },
        );

        for share in &shares {
            transport.send(
                self.id,
                share.index,
                Message::KeyGenP2P {
                    shamir_share: share.value.clone(),
                },
            );
        }

        Ok(())
    }

    /// The joint public key, once every participant's `KeyGenBroadcast`
    /// has arrived.
    pub fn public_key(&self) -> Result<crate::curve::Point, ParticipantError> {
        let expected = self.parameters.party_size as usize;
        let got = self.key_gen_state.other_y_by_id.len();
        if got != expected {
            return Err(ParticipantError::MissingContribution {
                what: "joint public key",
                missing_count: expected - got,
            });
        }

        Ok(self
            .key_gen_state
            .other_y_by_id
            .values()
            .fold(crate::curve::Point::Identity, |acc, y| acc.add(y)))
    }

    /// Initializes a fresh signing session over `message` with the given
    /// signer set. Computes this participant's `(t+1, t+1)` reshare `w_i`
    /// and samples its nonce/mask.
    pub fn prepare_for_signing(
        &mut self,
        message: Scalar,
        signer_ids: HashSet<u16>,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<(), ParticipantError> {
        if self.signing_state.is_some() {
            return Err(ParticipantError::UnexpectedPhase {
                sender_id: self.id,
                phase: "prepare_for_signing called while a signing session is already active",
            });
        }

        log::debug!("participant {}: preparing signing parameters", self.id);

        let x_star = self
            .key_gen_state
            .x
            .clone()
            .ok_or(ParticipantError::MissingContribution {
                what: "joint key share (keygen incomplete)",
                missing_count: 1,
            })?;

        let own_id_scalar = Scalar::from_u64(self.id as u64);
        let mut w = x_star;
        for &j in &signer_ids {
            if j == self.id {
                continue;
            }
            let j_scalar = Scalar::from_u64(j as u64);
            let denominator = j_scalar.sub(&own_id_scalar);
            let inverse = denominator
                .inverse()
                .expect("distinct signer ids guarantee a nonzero denominator");
            w = w.mul(&j_scalar).mul(&inverse);
        }

        let k = Scalar::random_nonzero(rng);
        let gamma = Scalar::random_nonzero(rng);
        let gamma_elliptic = generator().scalar_mul(&gamma);

        self.signing_state = Some(SigningState {
            message,
            signer_ids,
            w,
            k,
            gamma,
            gamma_elliptic,
            gamma_elliptic_summation: None,
            mta_alpha_1: Default::default(),
            mta_beta_1: Default::default(),
            mta_mu_2: Default::default(),
            mta_nu_2: Default::default(),
            delta_i: None,
            delta: None,
            delta_by_id: Default::default(),
            sigma_i: None,
            little_r: None,
            s_by_id: Default::default(),
        });

        Ok(())
    }

    /// Initiator role: encrypts `k_i` and kicks off both MtA instances
    /// with every other signer.
    pub fn sign(
        &mut self,
        transport: &mut impl Transport,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<(), ParticipantError> {
        let state = self
            .signing_state
            .as_ref()
            .ok_or(ParticipantError::UnexpectedPhase {
                sender_id: self.id,
                phase: "sign called before prepare_for_signing",
            })?;

        log::debug!("participant {}: beginning MtA sequences", self.id);

        let k = state.k.clone();
        let signer_ids = state.signer_ids.clone();

        let public_key = self
            .key_gen_state
            .paillier_public_key
            .clone()
            .expect("own Paillier keypair is generated before any signing session starts");

        let encrypted_k = public_key.encrypt(k.value(), rng)?;

        for participant_id in signer_ids {
            if participant_id == self.id {
                continue;
            }
            transport.send(
                self.id,
                participant_id,
                Message::MtAP2P1 {
                    encrypted_k: encrypted_k.clone(),
                },
            );
            transport.send(
                self.id,
                participant_id,
                Message::MtAP2P2 {
                    encrypted_k: encrypted_k.clone(),
                },
            );
        }

        Ok(())
    }

    /// Feeds an incoming message into the state machine, synchronously
    /// running it to completion (possibly emitting further outbound
    /// messages via `transport`).
    pub fn receive_message(
        &mut self,
        sender_id: u16,
        message: Message,
        transport: &mut impl Transport,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<(), ParticipantError> {
        match message {
            Message::KeyGenBroadcast {
                y,
                paillier_public_key,
            } => {
                if self.key_gen_state.other_y_by_id.contains_key(&sender_id) {
                    return Err(ParticipantError::DuplicateMessage {
                        sender_id,
                        phase: "KeyGenBroadcast",
                    });
                }
                self.key_gen_state.other_y_by_id.insert(sender_id, y);
                self.key_gen_state
                    .other_paillier_public_keys_by_id
                    .insert(sender_id, paillier_public_key);
                Ok(())
            }

            Message::KeyGenP2P { shamir_share } => {
                if self
                    .key_gen_state
                    .other_shamir_shares_by_id
                    .contains_key(&sender_id)
                {
                    return Err(ParticipantError::DuplicateMessage {
                        sender_id,
                        phase: "KeyGenP2P",
                    });
                }
                self.key_gen_state
                    .other_shamir_shares_by_id
                    .insert(sender_id, shamir_share);

                if self.key_gen_state.other_shamir_shares_by_id.len()
                    == self.parameters.party_size as usize
                {
                    let x = self
                        .key_gen_state
                        .other_shamir_shares_by_id
                        .values()
                        .fold(Scalar::zero(), |acc, s| acc.add(s));
                    self.key_gen_state.big_x = Some(generator().scalar_mul(&x));
                    self.key_gen_state.x = Some(x);
                }
                Ok(())
            }

            Message::MtAP2P1 { encrypted_k } => {
                let state = self.signing_state.as_mut().ok_or(ParticipantError::UnexpectedPhase {
                    sender_id,
                    phase: "MtAP2P1 arrived before prepare_for_signing",
                })?;
                if state.mta_beta_1.contains_key(&sender_id) {
                    return Err(ParticipantError::DuplicateMessage {
                        sender_id,
                        phase: "MtAP2P1",
                    });
                }

                let sender_pk = self
                    .key_gen_state
                    .other_paillier_public_keys_by_id
                    .get(&sender_id)
                    .ok_or(ParticipantError::UnknownSender { sender_id })?
                    .clone();

                let (beta_prime, beta) =
                    sample_mta_mask(&self.parameters, rng);
                let cipher_b_left = sender_pk.homomorphic_multiply(&encrypted_k, state.gamma.value());
                let cipher_b = sender_pk.homomorphic_add(&cipher_b_left, &beta_prime, rng)?;

                state.mta_beta_1.insert(sender_id, beta);
                transport.send(self.id, sender_id, Message::MtAP2P1Response { cipher_b });
                Ok(())
            }

            Message::MtAP2P1Response { cipher_b } => {
                let state = self.signing_state.as_mut().ok_or(ParticipantError::UnexpectedPhase {
                    sender_id,
                    phase: "MtAP2P1Response arrived outside a signing session",
                })?;
                if state.mta_alpha_1.contains_key(&sender_id) {
                    return Err(ParticipantError::DuplicateMessage {
                        sender_id,
                        phase: "MtAP2P1Response",
                    });
                }

                let private_key = self
                    .key_gen_state
                    .paillier_private_key
                    .as_ref()
                    .expect("own Paillier keypair is generated before any signing session starts");
                let decrypted = private_key.decrypt(&cipher_b)?;
                state.mta_alpha_1.insert(sender_id, Scalar::from_biguint(decrypted));
                Ok(())
            }

            Message::MtAP2P2 { encrypted_k } => {
                let state = self.signing_state.as_mut().ok_or(ParticipantError::UnexpectedPhase {
                    sender_id,
                    phase: "MtAP2P2 arrived before prepare_for_signing",
                })?;
                if state.mta_nu_2.contains_key(&sender_id) {
                    return Err(ParticipantError::DuplicateMessage {
                        sender_id,
                        phase: "MtAP2P2",
                    });
                }

                let sender_pk = self
                    .key_gen_state
                    .other_paillier_public_keys_by_id
                    .get(&sender_id)
                    .ok_or(ParticipantError::UnknownSender { sender_id })?
                    .clone();

                let (beta_prime, beta) = sample_mta_mask(&self.parameters, rng);
                let cipher_b_left = sender_pk.homomorphic_multiply(&encrypted_k, state.w.value());
                let cipher_b = sender_pk.homomorphic_add(&cipher_b_left, &beta_prime, rng)?;

                state.mta_nu_2.insert(sender_id, beta);
                transport.send(self.id, sender_id, Message::MtAP2P2Response { cipher_b });

                if self
                    .signing_state
                    .as_ref()
                    .expect("just populated above")
                    .finished_mta_2()
                {
                    self.continue_signing_post_mta(transport);
                }
                Ok(())
            }

            Message::MtAP2P2Response { cipher_b } => {
                let state = self.signing_state.as_mut().ok_or(ParticipantError::UnexpectedPhase {
                    sender_id,
                    phase: "MtAP2P2Response arrived outside a signing session",
                })?;
                if state.mta_mu_2.contains_key(&sender_id) {
                    return Err(ParticipantError::DuplicateMessage {
                        sender_id,
                        phase: "MtAP2P2Response",
                    });
                }

                let private_key = self
                    .key_gen_state
                    .paillier_private_key
                    .as_ref()
                    .expect("own Paillier keypair is generated before any signing session starts");
                let decrypted = private_key.decrypt(&cipher_b)?;
                self.signing_state
                    .as_mut()
                    .expect("checked above")
                    .mta_mu_2
                    .insert(sender_id, Scalar::from_biguint(decrypted));

                if self
                    .signing_state
                    .as_ref()
                    .expect("just populated above")
                    .finished_mta_2()
                {
                    self.continue_signing_post_mta(transport);
                }
                Ok(())
            }

            Message::PostMtABroadcast { delta_i, gamma_elliptic } => {
                let state = match self.signing_state.as_mut() {
                    Some(state) => state,
                    // Not every participant joins every signing session;
                    // a bystander silently ignores broadcasts from one.
                    None => return Ok(()),
                };
                if state.delta_by_id.contains_key(&sender_id) {
                    return Err(ParticipantError::DuplicateMessage {
                        sender_id,
                        phase: "PostMtABroadcast",
                    });
                }

                state.gamma_elliptic_summation = Some(match state.gamma_elliptic_summation.take() {
                    Some(acc) => acc.add(&gamma_elliptic),
                    None => gamma_elliptic,
                });
                state.delta_by_id.insert(sender_id, delta_i);

                if state.delta_by_id.len() == state.signer_ids.len() {
                    let delta = state.delta_by_id.values().fold(Scalar::zero(), |acc, d| acc.add(d));
                    state.delta = Some(delta);
                    self.produce_signature(transport)?;
                }
                Ok(())
            }

            Message::SigningShare { share } => {
                let state = match self.signing_state.as_mut() {
                    Some(state) => state,
                    None => return Ok(()),
                };
                if state.s_by_id.contains_key(&sender_id) {
                    return Err(ParticipantError::DuplicateMessage {
                        sender_id,
                        phase: "SigningShare",
                    });
                }
                state.s_by_id.insert(sender_id, share);
                Ok(())
            }
        }
    }

    fn continue_signing_post_mta(&mut self, transport: &mut impl Transport) {
        log::debug!(
            "participant {}: signing continuing after both MtA instances",
            self.id
        );

        let state = self
            .signing_state
            .as_mut()
            .expect("called only once a signing session is active");

        let mut delta_i = state.k.mul(&state.gamma);
        for alpha in state.mta_alpha_1.values() {
            delta_i = delta_i.add(alpha);
        }
        for beta in state.mta_beta_1.values() {
            delta_i = delta_i.add(beta);
        }

        let mut sigma_i = state.k.mul(&state.w);
        for mu in state.mta_mu_2.values() {
            sigma_i = sigma_i.add(mu);
        }
        for nu in state.mta_nu_2.values() {
            sigma_i = sigma_i.add(nu);
        }

        state.delta_i = Some(delta_i.clone());
        state.sigma_i = Some(sigma_i);
        let gamma_elliptic = state.gamma_elliptic.clone();

        transport.broadcast(
            self.id,
            Message::PostMtABroadcast {
                delta_i,
                gamma_elliptic,
            },
        );
    }

    fn produce_signature(&mut self, transport: &mut impl Transport) -> Result<(), ParticipantError> {
        log::debug!("participant {}: completing signature round", self.id);

        let state = self
            .signing_state
            .as_mut()
            .expect("called only once delta has just been computed");

        let delta = state
            .delta
            .clone()
            .expect("caller just set delta before calling produce_signature");
        let delta_inv = delta.inverse()?;
        let gamma_sum = state
            .gamma_elliptic_summation
            .clone()
            .expect("accumulated incrementally while processing PostMtABroadcast");

        let big_r = gamma_sum.scalar_mul(&delta_inv);
        let r_x = big_r
            .x()
            .expect("R is the point at infinity only with negligible probability");
        let little_r = Scalar::from_biguint(r_x.value().clone());

        let s_i = state
            .message
            .mul(&state.k)
            .add(&little_r.mul(state.sigma_i.as_ref().expect("sigma_i computed alongside delta_i")));

        state.little_r = Some(little_r);
        state.s_by_id.insert(self.id, s_i.clone());

        transport.broadcast(self.id, Message::SigningShare { share: s_i });
        Ok(())
    }

    /// The assembled signature, once every signer's `SigningShare` has
    /// arrived.
    pub fn signature(&self) -> Result<Signature, ParticipantError> {
        let state = self
            .signing_state
            .as_ref()
            .ok_or(ParticipantError::MissingContribution {
                what: "signature (no active signing session)",
                missing_count: 1,
            })?;

        if state.s_by_id.len() != state.signer_ids.len() {
            return Err(ParticipantError::MissingContribution {
                what: "signature shares",
                missing_count: state.signer_ids.len() - state.s_by_id.len(),
            });
        }

        let r = state
            .little_r
            .clone()
            .expect("little_r is set before s_by_id can reach full size");
        let s = state.s_by_id.values().fold(Scalar::zero(), |acc, s| acc.add(s));

        Ok(Signature { r, s })
    }
}

/// Samples the MtA receiver's mask: `beta' ~ U[1, 2^(5*security_parameter))`
/// and `beta = -beta' mod q`.
fn sample_mta_mask(
    parameters: &Parameters,
    rng: &mut (impl RngCore + CryptoRng),
) -> (BigUint, Scalar) {
    let bound = BigUint::one() << (5 * parameters.security_parameter) as usize;
    let beta_prime = bigint::random_below(rng, &BigUint::one(), &bound);
    let beta = Scalar::from_biguint(beta_prime.clone()).neg();
    (beta_prime, beta)
}
