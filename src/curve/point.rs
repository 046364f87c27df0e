//! Affine Weierstrass points on secp256k1 and the group law.
//!
//! The add/double/scalar-mul formulas follow `pytss/elliptic_curve.py`'s
//! `Point.__add__`/`__rmul__` (identity handling, inverse handling,
//! doubling, double-and-add), rebuilt over `FieldElement` instead of
//! Python's arbitrary-precision `int`.

use thiserror::Error;

use crate::curve::{Scalar, SECP256K1_A, SECP256K1_B};
use crate::field::FieldElement;

/// Errors produced by curve point construction/arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The given `(x, y)` pair does not satisfy `y^2 = x^3 + a*x + b`.
    #[error("point ({x}, {y}) is not on the curve")]
    NotOnCurve { x: String, y: String },
}

/// A point on secp256k1: either the point at infinity, or an affine
/// `(x, y)` pair satisfying the curve equation.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    Identity,
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    /// Builds an affine point, checking curve membership.
    pub fn new(x: impl Into<FieldElement>, y: impl Into<FieldElement>) -> Result<Self, CurveError> {
        let x = x.into();
        let y = y.into();
        if !Self::satisfies_curve_equation(&x, &y) {
            return Err(CurveError::NotOnCurve {
                x: x.to_string(),
                y: y.to_string(),
            });
        }
        Ok(Point::Affine { x, y })
    }

    fn satisfies_curve_equation(x: &FieldElement, y: &FieldElement) -> bool {
        let a = FieldElement::from(SECP256K1_A.clone());
        let b = FieldElement::from(SECP256K1_B.clone());
        let lhs = y.mul(y);
        let rhs = x.mul(x).mul(x).add(&a.mul(x)).add(&b);
        lhs == rhs
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Point addition, handling the identity and doubling special cases.
    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (Point::Identity, p) | (p, Point::Identity) => p.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                if x1 == x2 {
                    if y1 == &y2.neg() {
                        return Point::Identity;
                    }
                    return self.double();
                }

                let slope = y2.sub(y1).div(&x2.sub(x1)).expect("x1 != x2 checked above");
                let x3 = slope.mul(&slope).sub(x1).sub(x2);
                let y3 = slope.mul(&x1.sub(&x3)).sub(y1);
                Point::Affine { x: x3, y: y3 }
            }
        }
    }

    /// Point doubling.
    pub fn double(&self) -> Self {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => {
                if y.is_zero() {
                    return Point::Identity;
                }
                let three = FieldElement::one().add(&FieldElement::one()).add(&FieldElement::one());
                let two = FieldElement::one().add(&FieldElement::one());
                let a = FieldElement::from(SECP256K1_A.clone());

                let numerator = three.mul(x).mul(x).add(&a);
                let denominator = two.mul(y);
                let slope = numerator.div(&denominator).expect("y != 0 checked above");

                let x3 = slope.mul(&slope).sub(x).sub(x);
                let y3 = slope.mul(&x.sub(&x3)).sub(y);
                Point::Affine { x: x3, y: y3 }
            }
        }
    }

    /// Scalar multiplication via double-and-add.
    ///
    /// Not constant-time; side-channel hardening is out of scope (see
    /// `SPEC_FULL.md §8`).
    pub fn scalar_mul(&self, scalar: &Scalar) -> Self {
        let mut result = Point::Identity;
        let mut addend = self.clone();
        let mut n = scalar.value().clone();
        let one = num_bigint::BigUint::from(1u32);

        while !num_traits::Zero::is_zero(&n) {
            if &n & &one == one {
                result = result.add(&addend);
            }
            addend = addend.double();
            n = n >> 1u32;
        }
        result
    }

    pub fn neg(&self) -> Self {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: y.neg(),
            },
        }
    }
}

