use std::collections::HashSet;

use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

use crate::curve::Scalar;

/// Errors produced by secret splitting/recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharingError {
    /// `threshold` is zero or exceeds `party_size`.
    #[error("invalid threshold {threshold} for {party_size} parties")]
    InvalidThreshold { threshold: u16, party_size: u16 },

    /// Fewer than `threshold` shares were supplied for recovery.
    #[error("need at least {needed} shares to recover, got {got}")]
    InsufficientShares { needed: u16, got: u16 },

    /// Two shares carry the same party index.
    #[error("duplicate share index {index}")]
    DuplicateShareIndex { index: u16 },

    /// A share index of zero was supplied (index 0 is reserved — it is
    /// where the secret itself lives on the polynomial).
    #[error("share index must be non-zero")]
    ZeroShareIndex,
}

/// A single Shamir share: a party index `x` in `[1, n]` and the
/// polynomial's evaluation `y = f(x)` at that index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShamirShare {
    pub index: u16,
    pub value: Scalar,
}

/// Splits `secret` into `party_size` shares such that any `threshold` of
/// them reconstruct it, and no `threshold - 1` of them reveal anything.
///
/// Builds a random degree-`(threshold - 1)` polynomial with `secret` as
/// its constant term and evaluates it at `x = 1, 2, ..., party_size`.
pub fn split(
    secret: &Scalar,
    threshold: u16,
    party_size: u16,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<Vec<ShamirShare>, SharingError> {
    if threshold == 0 || threshold > party_size {
        return Err(SharingError::InvalidThreshold {
            threshold,
            party_size,
        });
    }

    let mut coefficients = Vec::with_capacity(threshold as usize);
    coefficients.push(secret.clone());
    for _ in 1..threshold {
        coefficients.push(Scalar::random_nonzero(rng));
    }

    let shares = (1..=party_size)
        .map(|index| ShamirShare {
            index,
            value: evaluate_polynomial(&coefficients, index),
        })
        .collect();

    Ok(shares)
}

/// Evaluates the polynomial with the given coefficients (low-degree
/// first) at `x` via Horner's method.
fn evaluate_polynomial(coefficients: &[Scalar], x: u16) -> Scalar {
    let x_scalar = Scalar::from_u64(x as u64);
    let mut result = Scalar::zero();
    for coeff in coefficients.iter().rev() {
        result = result.mul(&x_scalar).add(coeff);
    }
    result
}

/// Recovers the secret from a set of at least `threshold` shares via
/// Lagrange interpolation at `x = 0`.
pub fn recover(shares: &[ShamirShare], threshold: u16) -> Result<Scalar, SharingError> {
    if shares.len() < threshold as usize {
        return Err(SharingError::InsufficientShares {
            needed: threshold,
            got: shares.len() as u16,
        });
    }

    let mut seen = HashSet::new();
    for share in shares {
        if share.index == 0 {
            return Err(SharingError::ZeroShareIndex);
        }
        if !seen.insert(share.index) {
            return Err(SharingError::DuplicateShareIndex { index: share.index });
        }
    }

    let used = &shares[..threshold as usize];
    let mut secret = Scalar::zero();

    for (i, share_i) in used.iter().enumerate() {
        let mut numerator = Scalar::one();
        let mut denominator = Scalar::one();

        for (j, share_j) in used.iter().enumerate() {
            if i == j {
                continue;
            }
            let xi = Scalar::from_u64(share_i.index as u64);
            let xj = Scalar::from_u64(share_j.index as u64);

            numerator = numerator.mul(&xj);
            denominator = denominator.mul(&xj.sub(&xi));
        }

        // denominator is nonzero because share indices are unique, so
        // `inverse()` cannot fail here.
        let lagrange_coefficient = numerator
            .div(&denominator)
            .expect("distinct share indices guarantee a nonzero denominator");

        secret = secret.add(&share_i.value.mul(&lagrange_coefficient));
    }

    Ok(secret)
}
