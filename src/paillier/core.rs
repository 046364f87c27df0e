use num_bigint::BigUint;
use num_traits::One;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

use crate::bigint;
use crate::primes;

/// Errors produced by Paillier key generation, encryption and decryption.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaillierError {
    /// The plaintext is not smaller than the modulus `n`.
    #[error("plaintext is too large for this key's modulus")]
    PlaintextTooLarge,

    /// A ciphertext was not a unit mod `n^2` (outside `[0, n^2)` or not
    /// coprime with `n`).
    #[error("ciphertext is invalid for this key")]
    InvalidCiphertext,

    /// The two keys in a homomorphic operation have different moduli.
    #[error("ciphertexts belong to different Paillier keys")]
    MismatchedKeys,
}

/// A Paillier ciphertext: an element of `Z*_{n^2}`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaillierCiphertext(pub BigUint);

/// A Paillier public key `(n, g)`, with `g = n + 1` (the standard choice
/// that makes encryption a single modular exponentiation plus a linear
/// term — see `pytss/paillier.py::PaillierPublicKey`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaillierPublicKey {
    pub n: BigUint,
    pub g: BigUint,
    pub bits: u32,
    n_squared: BigUint,
}

/// A Paillier private key: the factorization `(p, q)` reduced to
/// `(lambda, mu)` for decryption, plus the public modulus needed to
/// decrypt without reconstructing the public key separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaillierPrivateKey {
    pub n: BigUint,
    lambda: BigUint,
    mu: BigUint,
    n_squared: BigUint,
}

impl PaillierPublicKey {
    fn from_n(n: BigUint, bits: u32) -> Self {
        let g = &n + BigUint::one();
        let n_squared = &n * &n;
        PaillierPublicKey {
            n,
            g,
            bits,
            n_squared,
        }
    }

    /// Encrypts `plaintext`, sampling a fresh random blinding factor `r`
    /// coprime with `n` on every call.
    pub fn encrypt(
        &self,
        plaintext: &BigUint,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<PaillierCiphertext, PaillierError> {
        if plaintext >= &self.n {
            return Err(PaillierError::PlaintextTooLarge);
        }

        let r = self.sample_blinding_factor(rng);

        // c = g^m * r^n mod n^2
        let gm = bigint::mod_pow(&self.g, plaintext, &self.n_squared);
        let rn = bigint::mod_pow(&r, &self.n, &self.n_squared);
        let c = (&gm * &rn) % &self.n_squared;

        Ok(PaillierCiphertext(c))
    }

    fn sample_blinding_factor(&self, rng: &mut (impl RngCore + CryptoRng)) -> BigUint {
        loop {
            let r = bigint::random_below(rng, &BigUint::one(), &self.n);
            if num_integer::Integer::gcd(&r, &self.n) == BigUint::one() {
                return r;
            }
        }
    }

    /// Homomorphic addition of a plaintext into a ciphertext:
    /// `E(a) ⊕ b = E(a) * E(b) mod n^2 = E(a + b)`.
    ///
    /// Encrypts `plaintext` with a fresh blinding factor internally, so
    /// this needs an RNG just like [`encrypt`](Self::encrypt).
    pub fn homomorphic_add(
        &self,
        ciphertext: &PaillierCiphertext,
        plaintext: &BigUint,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<PaillierCiphertext, PaillierError> {
        let encrypted_plaintext = self.encrypt(plaintext, rng)?;
        Ok(PaillierCiphertext(
            (&ciphertext.0 * &encrypted_plaintext.0) % &self.n_squared,
        ))
    }

    /// Homomorphic scalar multiplication of a ciphertext's plaintext:
    /// `E(a) ⊗ k = E(a * k)`.
    pub fn homomorphic_multiply(&self, ciphertext: &PaillierCiphertext, k: &BigUint) -> PaillierCiphertext {
        PaillierCiphertext(bigint::mod_pow(&ciphertext.0, k, &self.n_squared))
    }
}

impl PaillierPrivateKey {
    /// Decrypts a ciphertext produced under the matching public key.
    pub fn decrypt(&self, ciphertext: &PaillierCiphertext) -> Result<BigUint, PaillierError> {
        if ciphertext.0 >= self.n_squared {
            return Err(PaillierError::InvalidCiphertext);
        }

        let c_lambda = bigint::mod_pow(&ciphertext.0, &self.lambda, &self.n_squared);
        let l = l_function(&c_lambda, &self.n);
        Ok((l * &self.mu) % &self.n)
    }
}

/// `L(x) = (x - 1) / n`, the standard Paillier decryption helper —
/// `pytss/paillier.py::PaillierPrivateKey._l_function`.
fn l_function(x: &BigUint, n: &BigUint) -> BigUint {
    (x - BigUint::one()) / n
}

/// Generates a fresh Paillier key pair with an `n` of exactly `bits` bits
/// (two `bits/2`-bit prime factors, retried until the product itself
/// lands on `bits` bits), matching `pytss/paillier.py::generate_key_pair`'s
/// `while n_len != size` retry loop.
pub fn generate_key_pair(
    bits: u32,
    rng: &mut (impl RngCore + CryptoRng),
) -> (PaillierPublicKey, PaillierPrivateKey) {
    let half_bits = bits / 2;

    let (p, q, n) = loop {
        let p = primes::prime_of_n_bits(half_bits, rng);
        let q = primes::prime_of_n_bits(half_bits, rng);
        if p == q {
            continue;
        }
        let n = &p * &q;
        if n.bits() as u32 == bits {
            break (p, q, n);
        }
    };

    let n_squared = &n * &n;
    let lambda = (&p - BigUint::one()) * (&q - BigUint::one());
    let mu = bigint::mod_inverse(&lambda, &n).expect("lambda is coprime with n for distinct primes p, q");

    let public = PaillierPublicKey::from_n(n.clone(), bits);
    let private = PaillierPrivateKey {
        n,
        lambda,
        mu,
        n_squared,
    };

    (public, private)
}
