//! SHA-256 hash commitments over a list of big integers.
//!
//! Grounded on `pytss/commitment.py`/`common_crypto.py::sha256_values`: the
//! values are joined as decimal-ASCII strings separated by `#`, hashed with
//! SHA-256, and the digest read back as a big-endian integer.

use num_bigint::BigUint;
use num_traits::One;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::bigint;

/// Errors produced by commitment verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    /// The decommitment does not reproduce the committed digest.
    #[error("decommitment does not match the commitment")]
    Mismatch,
}

/// A commitment together with the decommitment (opening) needed to verify it.
#[derive(Debug, Clone)]
pub struct HashCommitment {
    pub commitment: BigUint,
    pub decommitment: Vec<BigUint>,
}

/// Hashes a list of values, joined as decimal-ASCII strings separated by
/// `#`, returning the digest as a big-endian integer.
pub fn sha256_values(values: &[BigUint]) -> BigUint {
    let joined = values
        .iter()
        .map(|v| v.to_str_radix(10))
        .collect::<Vec<_>>()
        .join("#");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    let digest = hasher.finalize();
    BigUint::from_bytes_be(&digest)
}

/// Commits to `values`. When `with_randomness` is set, a fresh 256-bit
/// blinding value is appended before hashing and carried in the
/// decommitment, matching `hash_commitment(values, with_randomness=True)`.
pub fn commit(
    values: &[BigUint],
    with_randomness: bool,
    rng: &mut (impl RngCore + CryptoRng),
) -> HashCommitment {
    let mut decommitment = values.to_vec();
    if with_randomness {
        decommitment.push(bigint::random_uint_below(rng, &(BigUint::one() << 256usize)));
    }

    HashCommitment {
        commitment: sha256_values(&decommitment),
        decommitment,
    }
}

/// Verifies that `decommitment` opens to `commitment`.
pub fn verify(commitment: &BigUint, decommitment: &[BigUint]) -> Result<(), CommitmentError> {
    if &sha256_values(decommitment) == commitment {
        Ok(())
    } else {
        Err(CommitmentError::Mismatch)
    }
}
