//! Shared types used across DIMPREP.
//! Currently only `Polarization`, the fixed set of radar bands a terrain-corrected
//! gamma0 BEAM-DIMAP product is expected to carry.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Polarization {
    Vh,
    Vv,
}

impl Polarization {
    /// Fixed band order used when assembling the descriptor (vh first, vv second).
    pub const ALL: [Polarization; 2] = [Polarization::Vh, Polarization::Vv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarization::Vh => "vh",
            Polarization::Vv => "vv",
        }
    }

    /// File name of this band inside the `.data` sidecar directory,
    /// following the SNAP naming convention for gamma0 output.
    pub fn band_filename(&self) -> String {
        format!("Gamma0_{}.img", self.as_str().to_uppercase())
    }
}

impl std::fmt::Display for Polarization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
