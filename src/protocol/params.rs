//! Protocol configuration, per spec.md §6 and `pytss/gg20.py::Parameters`.

/// Party-independent configuration shared by every [`Participant`](super::Participant)
/// in a run.
#[derive(Clone, Debug)]
pub struct Parameters {
    /// Bits of statistical security for MtA masking (spec default 256).
    pub security_parameter: u32,
    /// Bits of the Paillier modulus (spec default 2048; reference
    /// implementation's literal default is 3072 — see `DESIGN.md`).
    pub paillier_security_parameter: u32,
    /// Total number of parties `n`.
    pub party_size: u16,
    /// Signing threshold `t`: any `t + 1` parties can sign.
    pub threshold: u16,
}

impl Parameters {
    /// Builds parameters with the spec's stated defaults for the security
    /// parameters.
    pub fn new(party_size: u16, threshold: u16) -> Self {
        Parameters {
            security_parameter: 256,
            paillier_security_parameter: 2048,
            party_size,
            threshold,
        }
    }
}
