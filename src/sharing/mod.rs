//! Shamir secret sharing over the curve's scalar ring `Z_q`.
//!
//! Generalizes the teacher's GF(256) byte-oriented scheme (`Share`,
//! `split`/`combine` in `recovery::sss`) to a single big-integer secret
//! shared over `Z_q`, following `pytss/secret_sharing.py`'s
//! `split_into_shares`/`recover_secret`: a degree-`(threshold - 1)`
//! polynomial with the secret as its constant term, evaluated at each
//! party's index, recovered via Lagrange interpolation at zero.

mod core;

pub use core::{recover, split, ShamirShare, SharingError};
