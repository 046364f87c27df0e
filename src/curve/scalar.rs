//! The curve's scalar ring: integers mod the secp256k1 order `q`.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

use crate::bigint;
use crate::curve::SECP256K1_ORDER;

/// Errors produced by scalar arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// Attempted to invert the additive identity.
    #[error("zero has no multiplicative inverse mod the curve order")]
    NotCoprime,
}

/// An integer mod the curve order `q`, always kept reduced into `[0, q)`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scalar {
    value: BigUint,
}

impl Scalar {
    pub fn zero() -> Self {
        Scalar { value: BigUint::zero() }
    }

    pub fn one() -> Self {
        Scalar { value: BigUint::one() }
    }

    pub fn from_biguint(value: BigUint) -> Self {
        Scalar { value: value % &*SECP256K1_ORDER }
    }

    pub fn from_u64(value: u64) -> Self {
        Scalar::from_biguint(BigUint::from(value))
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Samples a uniformly random nonzero scalar in `[1, q)`.
    pub fn random_nonzero(rng: &mut (impl RngCore + CryptoRng)) -> Self {
        loop {
            let candidate = bigint::random_uint_below(rng, &SECP256K1_ORDER);
            if !candidate.is_zero() {
                return Scalar { value: candidate };
            }
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Scalar::from_biguint(&self.value + &other.value)
    }

    pub fn sub(&self, other: &Self) -> Self {
        let q = &*SECP256K1_ORDER;
        Scalar::from_biguint(&self.value + q - &other.value)
    }

    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Scalar::from_biguint(&*SECP256K1_ORDER - &self.value)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Scalar::from_biguint(&self.value * &other.value)
    }

    pub fn inverse(&self) -> Result<Self, ScalarError> {
        if self.is_zero() {
            return Err(ScalarError::NotCoprime);
        }
        bigint::mod_inverse(&self.value, &SECP256K1_ORDER)
            .map(|value| Scalar { value })
            .map_err(|_| ScalarError::NotCoprime)
    }

    pub fn div(&self, other: &Self) -> Result<Self, ScalarError> {
        Ok(self.mul(&other.inverse()?))
    }

    /// Interprets a big-endian message digest as a scalar, per the usual
    /// ECDSA convention of reducing an oversized hash mod `q`.
    pub fn from_hash_digest(digest: &[u8]) -> Self {
        Scalar::from_biguint(BigUint::from_bytes_be(digest))
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{})", self.value.to_str_radix(16))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.value.to_str_radix(16))
    }
}
