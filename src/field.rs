//! Prime field arithmetic over the secp256k1 base field `F_p`.
//!
//! `FieldElement` is the scalar type `Point` coordinates live in. It is
//! deliberately separate from `curve::Scalar` (which reduces mod the curve
//! *order* `q`, not the field prime `p`) even though the two share an
//! implementation shape — this mirrors the distinction the reference
//! implementation (`pytss/elliptic_curve.py`) draws between `FieldElement`
//! and plain `int` values mod `N`.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;

use crate::bigint;
use crate::curve::SECP256K1_P;

/// Errors produced by field arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Attempted to invert zero.
    #[error("zero has no multiplicative inverse")]
    NotCoprime,
}

/// An element of `F_p`, always reduced into `[0, p)`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldElement {
    value: BigUint,
}

impl FieldElement {
    /// The additive identity.
    pub fn zero() -> Self {
        FieldElement {
            value: BigUint::zero(),
        }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        FieldElement {
            value: BigUint::one(),
        }
    }

    /// Builds a field element from any non-negative integer, reducing mod `p`.
    pub fn from_biguint(value: BigUint) -> Self {
        FieldElement {
            value: value % &*SECP256K1_P,
        }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn add(&self, other: &Self) -> Self {
        FieldElement::from_biguint(&self.value + &other.value)
    }

    pub fn sub(&self, other: &Self) -> Self {
        let p = &*SECP256K1_P;
        let lhs = &self.value + p;
        FieldElement::from_biguint(lhs - &other.value)
    }

    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        FieldElement::from_biguint(&*SECP256K1_P - &self.value)
    }

    pub fn mul(&self, other: &Self) -> Self {
        FieldElement::from_biguint(&self.value * &other.value)
    }

    /// Scalar multiplication by a plain (unreduced) integer.
    pub fn mul_u64(&self, scalar: u64) -> Self {
        FieldElement::from_biguint(&self.value * scalar)
    }

    /// Exponentiation by a non-negative integer exponent.
    pub fn pow(&self, exponent: &BigUint) -> Self {
        FieldElement {
            value: bigint::mod_pow(&self.value, exponent, &SECP256K1_P),
        }
    }

    /// Multiplicative inverse via Fermat's little theorem (`p` is prime).
    pub fn inverse(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::NotCoprime);
        }
        let exponent = &*SECP256K1_P - BigUint::from(2u32);
        Ok(self.pow(&exponent))
    }

    pub fn div(&self, other: &Self) -> Result<Self, FieldError> {
        Ok(self.mul(&other.inverse()?))
    }

    /// Modular square root via Tonelli–Shanks.
    ///
    /// Returns `None` for quadratic non-residues, `Some(0)` only when
    /// `self` is genuinely zero (see Open Question 2 / `SPEC_FULL.md §7`).
    pub fn sqrt(&self) -> Option<Self> {
        bigint::mod_sqrt(&self.value, &SECP256K1_P).map(|value| FieldElement { value })
    }
}

impl From<BigUint> for FieldElement {
    fn from(value: BigUint) -> Self {
        FieldElement::from_biguint(value)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{})", self.value.to_str_radix(16))
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.value.to_str_radix(16))
    }
}
