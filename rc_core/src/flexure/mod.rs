//! # Flexural Design Engine
//!
//! Computes the flexural reinforcement requirement for a rectangular
//! reinforced-concrete section under a factored moment, for either of two
//! code formulations:
//!
//! - [`aci`] - ACI 318 ultimate-strength design (rectangular stress block,
//!   strain-based ductility classification, strength-reduction factor)
//! - [`ecp`] - ECP 203 C1-J method (empirical section-capacity and
//!   lever-arm coefficients)
//!
//! Both follow the pattern used throughout this crate:
//!
//! - `FlexureInput` - input parameters (JSON-serializable)
//! - `DesignResult` - calculation results (JSON-serializable)
//! - `design(input, code) -> Result<DesignResult, CalcError>` - pure function
//!
//! All lengths are mm, stresses MPa, and moments kN·m at the boundary
//! (converted to N·mm internally, once).
//!
//! ## Example
//!
//! ```rust
//! use rc_core::flexure::{design, CodeVariant, FlexureInput, SectionGeometry};
//! use rc_core::materials::MaterialProperties;
//!
//! let input = FlexureInput {
//!     label: "S-1".to_string(),
//!     material: MaterialProperties::new(420.0, 25.0),
//!     geometry: SectionGeometry::new(1000.0, 150.0, 20.0),
//!     mu_knm: 13.7,
//! };
//!
//! let result = design(&input, CodeVariant::Aci).unwrap();
//! assert!(result.is_safe);
//! println!("As = {:.1} mm²", result.required_steel_area_mm2);
//! ```

pub mod aci;
pub mod ecp;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProperties;

/// Rectangular section geometry.
///
/// The effective depth is derived, not stored: `d = h - cover`. It must be
/// strictly positive before any calculation proceeds.
///
/// ## JSON Example
///
/// ```json
/// { "width_mm": 1000.0, "total_depth_mm": 150.0, "cover_mm": 20.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Section width b (mm)
    pub width_mm: f64,

    /// Total section depth h (mm)
    pub total_depth_mm: f64,

    /// Concrete cover to the centroid of the tension steel (mm)
    pub cover_mm: f64,
}

impl SectionGeometry {
    /// Create a new section geometry
    pub fn new(width_mm: f64, total_depth_mm: f64, cover_mm: f64) -> Self {
        Self {
            width_mm,
            total_depth_mm,
            cover_mm,
        }
    }

    /// Effective depth d = h - cover (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        self.total_depth_mm - self.cover_mm
    }

    /// Validate the geometry.
    ///
    /// Width and total depth must be positive, cover non-negative, and the
    /// derived effective depth strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        if self.width_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_mm",
                self.width_mm.to_string(),
                "Section width must be positive",
            ));
        }
        if self.total_depth_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "total_depth_mm",
                self.total_depth_mm.to_string(),
                "Section depth must be positive",
            ));
        }
        if self.cover_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover cannot be negative",
            ));
        }
        let d = self.effective_depth_mm();
        if d <= 0.0 {
            return Err(CalcError::invalid_geometry(
                format!(
                    "effective depth is non-positive ({:.1} mm = {:.1} - {:.1})",
                    d, self.total_depth_mm, self.cover_mm
                ),
                "Increase the total depth or reduce the cover",
            ));
        }
        Ok(())
    }
}

/// Input parameters for a flexural design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "S-1",
///   "material": { "fy_mpa": 420.0, "fc_mpa": 25.0 },
///   "geometry": { "width_mm": 1000.0, "total_depth_mm": 150.0, "cover_mm": 20.0 },
///   "mu_knm": 13.7
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexureInput {
    /// User label for this section (e.g., "S-1", "Slab strip at grid B")
    pub label: String,

    /// Steel and concrete strengths
    pub material: MaterialProperties,

    /// Rectangular section dimensions
    pub geometry: SectionGeometry,

    /// Factored (ultimate) bending moment Mu (kN·m)
    pub mu_knm: f64,
}

impl FlexureInput {
    /// Validate all inputs. Fails fast; no partial results downstream.
    pub fn validate(&self) -> CalcResult<()> {
        self.material.validate()?;
        self.geometry.validate()?;
        if self.mu_knm <= 0.0 {
            return Err(CalcError::invalid_input(
                "mu_knm",
                self.mu_knm.to_string(),
                "Factored moment must be positive",
            ));
        }
        Ok(())
    }
}

/// Design-code variant selecting which closed-form procedure applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CodeVariant {
    /// ACI 318 ultimate-strength design
    #[default]
    Aci,
    /// ECP 203 C1-J method
    Ecp,
}

impl CodeVariant {
    /// All variants for UI selection
    pub const ALL: [CodeVariant; 2] = [CodeVariant::Aci, CodeVariant::Ecp];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeVariant::Aci => "ACI 318",
            CodeVariant::Ecp => "ECP 203",
        }
    }
}

impl std::fmt::Display for CodeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which requirement produced the final steel area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoverningCriterion {
    /// Flexural strength demand governed
    Calculated,
    /// Code minimum reinforcement governed
    Minimum,
}

/// Ductility classification of the designed section.
///
/// The ACI procedure classifies by net tensile strain (first three
/// variants); the ECP procedure classifies by the x/d ratio (last two).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionClass {
    /// εs >= 0.005: ductile, φ = 0.90 (ACI)
    TensionControlled,
    /// 0.002 <= εs < 0.005: φ interpolated (ACI)
    Transition,
    /// εs < 0.002: brittle, φ = 0.65 (ACI)
    CompressionControlled,
    /// x/d <= 0.45: ductile (ECP)
    UnderReinforced,
    /// x/d > 0.45: brittle (ECP)
    OverReinforced,
}

impl SectionClass {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionClass::TensionControlled => "Tension Controlled",
            SectionClass::Transition => "Transition Zone",
            SectionClass::CompressionControlled => "Compression Controlled",
            SectionClass::UnderReinforced => "Under-Reinforced",
            SectionClass::OverReinforced => "Over-Reinforced",
        }
    }

    /// Whether this classification satisfies the code's ductility demand
    pub fn is_ductile(&self) -> bool {
        matches!(
            self,
            SectionClass::TensionControlled
                | SectionClass::Transition
                | SectionClass::UnderReinforced
        )
    }
}

impl std::fmt::Display for SectionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Results from a flexural design.
///
/// Variant-specific quantities are `Option`s: `steel_strain` and `phi` are
/// reported by the ACI procedure, `depth_ratio`, `c1`, and `j` by the ECP
/// procedure. Everything else is common.
///
/// ## JSON Example (ACI)
///
/// ```json
/// {
///   "code": "Aci",
///   "effective_depth_mm": 130.0,
///   "calculated_steel_area_mm2": 284.9,
///   "minimum_steel_area_mm2": 433.33,
///   "required_steel_area_mm2": 433.33,
///   "governing": "Minimum",
///   "stress_block_depth_mm": 8.56,
///   "neutral_axis_depth_mm": 10.08,
///   "steel_strain": 0.0357,
///   "phi": 0.9,
///   "depth_ratio": null,
///   "c1": null,
///   "j": null,
///   "classification": "TensionControlled",
///   "moment_capacity_knm": 20.59,
///   "is_safe": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignResult {
    /// Code variant that produced this result
    pub code: CodeVariant,

    /// Effective depth d = h - cover (mm)
    pub effective_depth_mm: f64,

    /// Steel area demanded by flexural strength alone (mm²)
    pub calculated_steel_area_mm2: f64,

    /// Code minimum reinforcement As,min (mm²)
    pub minimum_steel_area_mm2: f64,

    /// Final required steel area = max(calculated, minimum) (mm²)
    pub required_steel_area_mm2: f64,

    /// Which requirement governed the final area
    pub governing: GoverningCriterion,

    /// Equivalent stress-block depth recomputed from the final steel area:
    /// `a` for ACI, `x` for ECP (mm)
    pub stress_block_depth_mm: f64,

    /// Neutral-axis depth (mm): c = a/β1 for ACI; equal to the block depth
    /// x for ECP (the C1-J charts work directly in x)
    pub neutral_axis_depth_mm: f64,

    /// Net tensile steel strain εs at ultimate (ACI only)
    pub steel_strain: Option<f64>,

    /// Strength-reduction factor φ used for the capacity (ACI only)
    pub phi: Option<f64>,

    /// Ductility ratio x/d (ECP only)
    pub depth_ratio: Option<f64>,

    /// Section-capacity coefficient C1 (ECP only)
    pub c1: Option<f64>,

    /// Lever-arm coefficient J, after the J_max clamp (ECP only)
    pub j: Option<f64>,

    /// Ductility classification
    pub classification: SectionClass,

    /// Design moment capacity with the final steel area (kN·m):
    /// φMn for ACI, Mu_capacity for ECP
    pub moment_capacity_knm: f64,

    /// Overall verdict: ductility, capacity >= demand, and minimum steel
    /// all satisfied
    pub is_safe: bool,
}

/// Result of re-checking a section with a *provided* steel area (e.g. a
/// chosen rebar arrangement) instead of the computed requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidedSteelCheck {
    /// The steel area that was checked (mm²)
    pub provided_area_mm2: f64,

    /// Stress-block depth for the provided area (mm)
    pub stress_block_depth_mm: f64,

    /// Ductility classification with the provided area
    pub classification: SectionClass,

    /// Moment capacity with the provided area (kN·m)
    pub moment_capacity_knm: f64,

    /// Capacity >= demand, ductility satisfied, and provided >= minimum
    pub is_safe: bool,
}

/// Run the flexural design for the selected code variant.
///
/// This is a pure function: for fixed inputs the result is deterministic
/// and bit-identical across invocations.
///
/// # Returns
///
/// * `Ok(DesignResult)` - required steel area, classification, capacity
/// * `Err(CalcError)` - the violated physical constraint (no partial result)
pub fn design(input: &FlexureInput, code: CodeVariant) -> CalcResult<DesignResult> {
    match code {
        CodeVariant::Aci => aci::design(input),
        CodeVariant::Ecp => ecp::design(input),
    }
}

/// Re-check the section with a provided steel area.
///
/// Used by rebar selection: once bars are chosen, the block depth,
/// classification, and capacity are recomputed for the provided area and
/// compared against the demand and the code minimum. Shares the back-half
/// of the design procedure with [`design`], so a check with the required
/// area reproduces the design capacity exactly.
pub fn verify_provided_steel(
    input: &FlexureInput,
    code: CodeVariant,
    provided_area_mm2: f64,
) -> CalcResult<ProvidedSteelCheck> {
    if provided_area_mm2 <= 0.0 {
        return Err(CalcError::invalid_input(
            "provided_area_mm2",
            provided_area_mm2.to_string(),
            "Provided steel area must be positive",
        ));
    }
    match code {
        CodeVariant::Aci => aci::verify_provided_steel(input, provided_area_mm2),
        CodeVariant::Ecp => ecp::verify_provided_steel(input, provided_area_mm2),
    }
}
