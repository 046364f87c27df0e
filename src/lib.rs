//! Threshold ECDSA over secp256k1 implementing GG20
//! (Gennaro–Goldfeder 2020, eprint 2020/540).
//!
//! A set of `n` parties jointly generates an ECDSA keypair such that the
//! private key never exists in one place; any `t + 1` of them can later
//! produce a valid signature interactively without ever reconstructing
//! it. This crate implements the protocol's semi-honest core: there are
//! no zero-knowledge range proofs over Paillier ciphertexts and no proof
//! of Paillier-key well-formedness, so it does not defend against an
//! actively malicious counterparty. See [`protocol::Participant`]'s
//! documentation for the exact security boundary.
//!
//! # Module overview
//!
//! - [`bigint`]
//!   Arbitrary-precision modular arithmetic: extended Euclid, modular
//!   inverse, modular exponentiation, modular square root.
//!
//! - [`primes`]
//!   Miller–Rabin primality testing and k-bit prime sampling, used by
//!   Paillier keygen.
//!
//! - [`field`]
//!   `FieldElement`, integers mod the secp256k1 field prime.
//!
//! - [`curve`]
//!   `Scalar` (mod the curve order), `Point` and the group law, plus a
//!   reference single-key ECDSA sign/verify used for test fixtures.
//!
//! - [`sharing`]
//!   Shamir secret sharing over `Z_q`: split and Lagrange-interpolated
//!   recovery.
//!
//! - [`paillier`]
//!   Paillier keygen/encrypt/decrypt and the two homomorphisms that
//!   back multiplicative-to-additive (MtA) share conversion.
//!
//! - [`commitment`]
//!   SHA-256 hash commitment over a list of integers.
//!
//! - [`protocol`]
//!   The message taxonomy, transport abstraction, and the
//!   [`protocol::Participant`] state machine that drives keygen and
//!   signing.
//!
//! # Design goals
//!
//! - Explicit, auditable arithmetic: no black-box curve or bignum crate
//!   stands in for the algorithms this library exists to implement.
//! - The cryptographic RNG is always an injected capability
//!   (`rand_core::RngCore + CryptoRng`), never owned by this crate.
//! - Every fallible operation returns a `Result` with a module-local
//!   `thiserror` error enum; `protocol::ParticipantError` wraps every
//!   downstream error so callers driving a `Participant` match on one
//!   top-level type.

pub mod bigint;
pub mod commitment;
pub mod curve;
pub mod field;
pub mod paillier;
pub mod primes;
pub mod protocol;
pub mod sharing;
