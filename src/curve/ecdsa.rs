//! Reference single-key ECDSA over secp256k1.
//!
//! Not part of the threshold protocol itself: this is the algebraic
//! target the distributed signature is checked against, and the source
//! of deterministic test fixtures, mirroring
//! `pytss/elliptic_curve.py`'s `PrivateKey`/`Signature`.

use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

use crate::curve::{generator, Point, Scalar, SECP256K1_ORDER};

/// Errors produced by reference sign/verify.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EcdsaError {
    /// The ephemeral nonce `k` or its inverse happened to be zero; caller
    /// should resample `k` and retry.
    #[error("degenerate nonce, resample k")]
    DegenerateNonce,
}

/// An ECDSA signature `(r, s)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    pub r: Scalar,
    pub s: Scalar,
}

/// A single-party secp256k1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    secret: Scalar,
    public: Point,
}

impl PrivateKey {
    /// Samples a fresh random key.
    pub fn generate(rng: &mut (impl RngCore + CryptoRng)) -> Self {
        let secret = Scalar::random_nonzero(rng);
        PrivateKey::from_scalar(secret)
    }

    /// Builds a key from an existing secret scalar.
    pub fn from_scalar(secret: Scalar) -> Self {
        let public = generator().scalar_mul(&secret);
        PrivateKey { secret, public }
    }

    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    pub fn public_key(&self) -> &Point {
        &self.public
    }

    /// Signs a message digest, retrying with a fresh nonce on the
    /// negligible-probability degenerate cases.
    pub fn sign(&self, digest: &[u8], rng: &mut (impl RngCore + CryptoRng)) -> Signature {
        loop {
            let k = Scalar::random_nonzero(rng);
            if let Ok(sig) = self.try_sign_with_nonce(digest, &k) {
                return sig;
            }
        }
    }

    fn try_sign_with_nonce(&self, digest: &[u8], k: &Scalar) -> Result<Signature, EcdsaError> {
        let r_point = generator().scalar_mul(k);
        let r = match r_point.x() {
            Some(x) => Scalar::from_biguint(x.value().clone()),
            None => return Err(EcdsaError::DegenerateNonce),
        };
        if r.is_zero() {
            return Err(EcdsaError::DegenerateNonce);
        }

        let z = Scalar::from_hash_digest(digest);
        let k_inv = k.inverse().map_err(|_| EcdsaError::DegenerateNonce)?;
        let s = k_inv.mul(&z.add(&r.mul(&self.secret)));
        if s.is_zero() {
            return Err(EcdsaError::DegenerateNonce);
        }

        Ok(Signature { r, s })
    }
}

/// Verifies a signature against a public key and message digest.
pub fn verify(public_key: &Point, digest: &[u8], signature: &Signature) -> bool {
    if signature.r.is_zero() || signature.s.is_zero() {
        return false;
    }

    let z = Scalar::from_hash_digest(digest);
    let s_inv = match signature.s.inverse() {
        Ok(inv) => inv,
        Err(_) => return false,
    };

    let u1 = z.mul(&s_inv);
    let u2 = signature.r.mul(&s_inv);

    let point = generator().scalar_mul(&u1).add(&public_key.scalar_mul(&u2));
    match point.x() {
        Some(x) => {
            let x_mod_q = Scalar::from_biguint(x.value().clone() % &*SECP256K1_ORDER);
            x_mod_q == signature.r
        }
        None => false,
    }
}
