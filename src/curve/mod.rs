//! secp256k1 curve arithmetic: domain parameters, [`Scalar`], [`Point`].
//!
//! The group law lives in [`point`]; [`Scalar`] is the group's scalar ring
//! (integers mod the curve order `q`), kept distinct from `field::FieldElement`
//! (integers mod the field prime `p`) exactly as spec.md §3 distinguishes
//! "Scalar" from "FieldElement".

mod ecdsa;
mod point;
mod scalar;

pub use ecdsa::{verify as ecdsa_verify, EcdsaError, PrivateKey, Signature};
pub use point::{CurveError, Point};
pub use scalar::{Scalar, ScalarError};

use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// secp256k1 field prime `p = 2^256 - 2^32 - 977`.
pub static SECP256K1_P: Lazy<BigUint> = Lazy::new(|| {
    hex_to_biguint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F")
});

/// secp256k1 curve coefficient `a = 0`.
pub static SECP256K1_A: Lazy<BigUint> = Lazy::new(BigUint::default);

/// secp256k1 curve coefficient `b = 7`.
pub static SECP256K1_B: Lazy<BigUint> = Lazy::new(|| BigUint::from(7u32));

/// secp256k1 generator point x-coordinate.
pub static SECP256K1_GX: Lazy<BigUint> = Lazy::new(|| {
    hex_to_biguint("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798")
});

/// secp256k1 generator point y-coordinate.
pub static SECP256K1_GY: Lazy<BigUint> = Lazy::new(|| {
    hex_to_biguint("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8")
});

/// secp256k1 group order `q`.
pub static SECP256K1_ORDER: Lazy<BigUint> = Lazy::new(|| {
    hex_to_biguint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141")
});

fn hex_to_biguint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("static secp256k1 constant is valid hex")
}

/// Returns the secp256k1 generator point `G`.
pub fn generator() -> Point {
    Point::new(SECP256K1_GX.clone(), SECP256K1_GY.clone()).expect("G is on the curve by construction")
}
