//! # Materials
//!
//! Material property definitions for reinforced-concrete design.
//!
//! Stresses are in MPa (N/mm²) throughout. For the ACI variant `fc_mpa` is
//! the specified cylinder strength f'c; for the ECP variant it is the
//! characteristic cube strength fcu. The engine does not convert between
//! the two - supply the strength the selected code expects.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::materials::{MaterialProperties, SteelGrade};
//!
//! let mat = MaterialProperties::new(SteelGrade::G420.fy_mpa(), 25.0);
//! assert!(mat.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Material pair for a flexural design: reinforcement yield strength and
/// concrete strength.
///
/// ## JSON Example
///
/// ```json
/// { "fy_mpa": 420.0, "fc_mpa": 25.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Steel yield strength fy (MPa)
    pub fy_mpa: f64,

    /// Concrete strength (MPa): f'c for ACI, fcu for ECP
    pub fc_mpa: f64,
}

impl MaterialProperties {
    /// Create a new material pair
    pub fn new(fy_mpa: f64, fc_mpa: f64) -> Self {
        Self { fy_mpa, fc_mpa }
    }

    /// Validate that both strengths are strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        if self.fy_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "fy_mpa",
                self.fy_mpa.to_string(),
                "Steel yield strength must be positive",
            ));
        }
        if self.fc_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "fc_mpa",
                self.fc_mpa.to_string(),
                "Concrete strength must be positive",
            ));
        }
        Ok(())
    }
}

/// Standard reinforcement steel grades by yield strength.
///
/// Covers the common grades used with both code variants (e.g. 240/360 for
/// mild/high-grade Egyptian steel, 420 for ASTM Grade 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SteelGrade {
    /// fy = 240 MPa (mild steel)
    G240,
    /// fy = 280 MPa
    G280,
    /// fy = 350 MPa
    G350,
    /// fy = 400 MPa
    G400,
    /// fy = 420 MPa (ASTM Grade 60)
    #[default]
    G420,
    /// fy = 460 MPa
    G460,
    /// fy = 500 MPa
    G500,
}

impl SteelGrade {
    /// All standard grades for UI selection
    pub const ALL: [SteelGrade; 7] = [
        SteelGrade::G240,
        SteelGrade::G280,
        SteelGrade::G350,
        SteelGrade::G400,
        SteelGrade::G420,
        SteelGrade::G460,
        SteelGrade::G500,
    ];

    /// Yield strength in MPa
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::G240 => 240.0,
            SteelGrade::G280 => 280.0,
            SteelGrade::G350 => 350.0,
            SteelGrade::G400 => 400.0,
            SteelGrade::G420 => 420.0,
            SteelGrade::G460 => 460.0,
            SteelGrade::G500 => 500.0,
        }
    }

    /// Get display name (e.g., "fy 420")
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::G240 => "fy 240",
            SteelGrade::G280 => "fy 280",
            SteelGrade::G350 => "fy 350",
            SteelGrade::G400 => "fy 400",
            SteelGrade::G420 => "fy 420",
            SteelGrade::G460 => "fy 460",
            SteelGrade::G500 => "fy 500",
        }
    }

    /// Match a yield strength to a standard grade, if one exists
    pub fn from_fy_mpa(fy_mpa: f64) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|g| (g.fy_mpa() - fy_mpa).abs() < 0.5)
            .copied()
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
