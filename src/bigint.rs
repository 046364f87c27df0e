//! Arbitrary-precision modular arithmetic.
//!
//! The GG20 core needs one consistent place for big-integer plumbing:
//! extended Euclid, modular inverse, modular exponentiation and modular
//! square root. Everything above this module (fields, curve scalars,
//! Paillier) is built in terms of [`num_bigint::BigUint`] and the helpers
//! below rather than rolling fixed-width integers, because Paillier moduli
//! run to several thousand bits — far past what a `U256`/`U512` style type
//! could hold.
//!
//! This module is intentionally small: it is a toolbox, not a type. Each
//! higher layer (`field`, `curve::Scalar`, `paillier`) owns its own modulus
//! and wraps these free functions rather than inheriting a generic "modular
//! integer" type, mirroring how the reference implementation keeps
//! `FieldElement` and Paillier's plaintext space as distinct concepts even
//! though both ultimately reduce a `BigUint`.

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

/// Errors produced by the modular arithmetic helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// `gcd(a, m) != 1`, so no modular inverse exists.
    #[error("{a} has no inverse mod {m}: gcd is not 1")]
    NotCoprime { a: String, m: String },
}

/// Result of the extended Euclidean algorithm: `bezout_x * a + bezout_y * b == gcd`.
#[derive(Debug, Clone)]
pub struct ExtendedEuclid {
    pub bezout_x: BigInt,
    pub bezout_y: BigInt,
    pub gcd: BigInt,
}

/// Extended Euclidean algorithm.
///
/// Follows the iterative formulation: starting from `(old_r, r) = (a, b)`
/// and `(old_s, s) = (1, 0)`, `(old_t, t) = (0, 1)`, repeatedly divides and
/// swaps until the remainder reaches zero.
pub fn extended_euclid(a: &BigInt, b: &BigInt) -> ExtendedEuclid {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let new_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, new_r);

        let new_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, new_s);

        let new_t = &old_t - &quotient * &t;
        old_t = std::mem::replace(&mut t, new_t);
    }

    ExtendedEuclid {
        bezout_x: old_s,
        bezout_y: old_t,
        gcd: old_r,
    }
}

/// Reduces a (possibly negative) `BigInt` into `[0, modulus)`.
pub fn reduce_mod(value: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus = BigInt::from(modulus.clone());
    let reduced = value.mod_floor(&modulus);
    reduced
        .to_biguint()
        .expect("mod_floor against a positive modulus is never negative")
}

/// Computes `a^-1 mod m` via the extended Euclidean algorithm.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, BigIntError> {
    let ee = extended_euclid(&BigInt::from(a.clone()), &BigInt::from(m.clone()));
    if ee.gcd != BigInt::one() && ee.gcd != -BigInt::one() {
        return Err(BigIntError::NotCoprime {
            a: a.to_string(),
            m: m.to_string(),
        });
    }
    Ok(reduce_mod(&ee.bezout_x, m))
}

/// Computes `base^exp mod modulus`.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// Tonelli–Shanks modular square root.
///
/// Returns `None` when `a` is a quadratic non-residue mod the (odd, prime)
/// `p`; callers should not confuse this with `a == 0`, which returns
/// `Some(0)` (see Open Question 2 in `SPEC_FULL.md`).
pub fn mod_sqrt(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    if a.is_zero() {
        return Some(BigUint::zero());
    }
    if p.is_one() {
        return None;
    }

    let two = BigUint::from(2u32);
    if legendre_symbol(a, p) != 1 {
        return None;
    }

    // p == 3 (mod 4) fast path.
    let three_mod_four = &(p % BigUint::from(4u32)) == &BigUint::from(3u32);
    if three_mod_four {
        let exp = (p + BigUint::one()) / BigUint::from(4u32);
        return Some(mod_pow(a, &exp, p));
    }

    // General Tonelli-Shanks: write p - 1 = q * 2^s with q odd.
    let mut q = p - BigUint::one();
    let mut s = 0u32;
    while (&q % &two).is_zero() {
        q /= &two;
        s += 1;
    }

    // Find a quadratic non-residue z.
    let mut z = BigUint::from(2u32);
    while legendre_symbol(&z, p) != -1 {
        z += BigUint::one();
    }

    let mut m = s;
    let mut c = mod_pow(&z, &q, p);
    let mut t = mod_pow(a, &q, p);
    let mut r = mod_pow(a, &((&q + BigUint::one()) / &two), p);

    loop {
        if t.is_one() {
            return Some(r);
        }

        let mut i = 0u32;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = (&t2i * &t2i) % p;
            i += 1;
            if i == m {
                return None;
            }
        }

        let exp = BigUint::one() << (m - i - 1);
        let b = mod_pow(&c, &exp, p);

        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }
}

/// Legendre symbol `(a / p)` for an odd prime `p`, computed as
/// `a^((p-1)/2) mod p` mapped to `{-1, 0, 1}`.
fn legendre_symbol(a: &BigUint, p: &BigUint) -> i32 {
    if a.is_zero() {
        return 0;
    }
    let exp = (p - BigUint::one()) / BigUint::from(2u32);
    let r = mod_pow(a, &exp, p);
    if r.is_one() {
        1
    } else {
        -1
    }
}

/// Samples a uniformly random integer in `[low, high)`.
pub fn random_below(rng: &mut (impl RngCore + CryptoRng), low: &BigUint, high: &BigUint) -> BigUint {
    debug_assert!(low < high);
    let span = high - low;
    low + rng.gen_biguint_below(&span)
}

/// Samples a uniformly random integer in `[0, bound)`.
pub fn random_uint_below(rng: &mut (impl RngCore + CryptoRng), bound: &BigUint) -> BigUint {
    rng.gen_biguint_below(bound)
}

/// Samples a uniformly random odd `n`-bit integer (top and bottom bit set).
pub fn random_odd_of_bits(rng: &mut (impl RngCore + CryptoRng), bits: u32) -> BigUint {
    let candidate = rng.gen_biguint(bits as u64);
    let top_bit = BigUint::one() << (bits - 1) as usize;
    candidate | &top_bit | BigUint::one()
}

/// Whether `value` fits the sign convention used by [`reduce_mod`] — exposed
/// for callers that need to assert non-negativity after custom arithmetic.
pub fn is_negative(value: &BigInt) -> bool {
    value.is_negative()
}

pub(crate) fn bit_length(value: &BigUint) -> u64 {
    value.bits()
}

pub(crate) fn sign_of(value: &BigInt) -> Sign {
    value.sign()
}
