//! Paillier additively-homomorphic encryption.
//!
//! Grounded on `pytss/paillier.py`: keygen samples two `bits/2`-bit primes
//! `p, q`, sets `n = p*q`, `g = n + 1`, `lambda = phi(n) = (p-1)(q-1)`,
//! `mu = lambda^-1 mod n`. Encryption samples a fresh blinding factor `r`
//! on every call (Open Question 1 — see `SPEC_FULL.md §7.1` — resolved in
//! favor of per-call sampling rather than a key-fixed `r`).

mod core;

pub use core::{PaillierCiphertext, PaillierError, PaillierPrivateKey, PaillierPublicKey};
