//! # ECP 203 C1-J Flexural Design
//!
//! Singly-reinforced rectangular section design by the Egyptian code's
//! C1-J chart coefficients. C1 measures how much section there is relative
//! to the demand; J is the resulting lever-arm ratio.
//!
//! ## Procedure
//!
//! 1. `C1 = d·sqrt(fcu·b / Mu)` (all in mm, N, MPa; Mu in N·mm).
//! 2. Ductility gate: C1 below [`C1_MIN`] means no singly-reinforced
//!    solution exists. The design fails; the caller must deepen/widen the
//!    section or add compression steel (out of scope here).
//! 3. `J = min((0.5 + sqrt(0.25 - 1/(0.9·C1²))) / 1.15, J_MAX)`.
//! 4. `As,calc = Mu / (fy·J·d)`, then `As,min = max(0.6/fy, 0.0015)·b·d`
//!    and take the larger.
//! 5. Recompute the block depth from the final area,
//!    `x = As·fy / (0.67·fcu·b)`, and re-check `x/d <=` [`X_OVER_D_LIMIT`].
//! 6. `Mu,capacity = As·fy·(d - 0.4·x)`.
//!
//! The material safety factor γs is embedded in the 1/1.15 inside J; the
//! block-depth and capacity formulas use the plain (unfactored-fy) forms.
//! All coefficients are named constants below.

use crate::errors::{CalcError, CalcResult};
use crate::units::{KiloNewtonMeters, NewtonMillimeters};

use super::{
    CodeVariant, DesignResult, FlexureInput, GoverningCriterion, ProvidedSteelCheck, SectionClass,
};

/// Minimum C1 for a singly-reinforced section
pub const C1_MIN: f64 = 2.76;

/// Upper bound on the lever-arm coefficient J (the chart plateau)
pub const J_MAX: f64 = 0.826;

/// Maximum ductile x/d ratio
pub const X_OVER_D_LIMIT: f64 = 0.45;

/// Minimum flexural reinforcement As,min = max(0.6/fy, 0.0015)·b·d.
pub fn minimum_steel_area_mm2(fy_mpa: f64, width_mm: f64, d_mm: f64) -> f64 {
    let ratio = (0.6 / fy_mpa).max(0.0015);
    ratio * width_mm * d_mm
}

/// Block depth, ductility ratio, classification, and capacity for a given
/// steel area. Shared between `design` and `verify_provided_steel`.
struct SteelCheck {
    x_mm: f64,
    depth_ratio: f64,
    classification: SectionClass,
    capacity_knm: f64,
}

fn check_steel_area(input: &FlexureInput, as_mm2: f64) -> SteelCheck {
    let fy = input.material.fy_mpa;
    let fcu = input.material.fc_mpa;
    let b = input.geometry.width_mm;
    let d = input.geometry.effective_depth_mm();

    let x_mm = as_mm2 * fy / (0.67 * fcu * b);
    let depth_ratio = x_mm / d;
    let classification = if depth_ratio <= X_OVER_D_LIMIT {
        SectionClass::UnderReinforced
    } else {
        SectionClass::OverReinforced
    };

    let capacity_nmm = NewtonMillimeters(as_mm2 * fy * (d - 0.4 * x_mm));
    let capacity: KiloNewtonMeters = capacity_nmm.into();

    SteelCheck {
        x_mm,
        depth_ratio,
        classification,
        capacity_knm: capacity.0,
    }
}

/// Design the section per ECP 203.
pub fn design(input: &FlexureInput) -> CalcResult<DesignResult> {
    input.validate()?;

    let fy = input.material.fy_mpa;
    let fcu = input.material.fc_mpa;
    let b = input.geometry.width_mm;
    let d = input.geometry.effective_depth_mm();
    let mu: NewtonMillimeters = KiloNewtonMeters(input.mu_knm).into();

    let c1 = d * (fcu * b / mu.0).sqrt();
    if c1 < C1_MIN {
        return Err(CalcError::over_reinforced(
            c1,
            C1_MIN,
            "No singly-reinforced solution exists; increase the depth or width, \
             use a higher concrete strength, or add compression steel",
        ));
    }

    let term = 0.25 - 1.0 / (0.9 * c1 * c1);
    if term < 0.0 {
        // Cannot occur once C1 >= C1_MIN, but the gate constants are
        // independent and the check stays.
        return Err(CalcError::section_too_small(
            "ECP 203",
            format!(
                "lever-arm term is negative (C1 = {c1:.3}); the section cannot develop Mu = {:.1} kN·m",
                input.mu_knm
            ),
            "Increase the depth or width, or use a higher concrete strength",
        ));
    }
    let j = ((0.5 + term.sqrt()) / 1.15).min(J_MAX);

    let as_calculated = mu.0 / (fy * j * d);
    let as_min = minimum_steel_area_mm2(fy, b, d);

    let (as_final, governing) = if as_min > as_calculated {
        (as_min, GoverningCriterion::Minimum)
    } else {
        (as_calculated, GoverningCriterion::Calculated)
    };

    // Ductility re-check and capacity use the FINAL area's block depth.
    let check = check_steel_area(input, as_final);

    let is_safe = check.depth_ratio <= X_OVER_D_LIMIT
        && check.capacity_knm >= input.mu_knm
        && as_final >= as_min;

    Ok(DesignResult {
        code: CodeVariant::Ecp,
        effective_depth_mm: d,
        calculated_steel_area_mm2: as_calculated,
        minimum_steel_area_mm2: as_min,
        required_steel_area_mm2: as_final,
        governing,
        stress_block_depth_mm: check.x_mm,
        neutral_axis_depth_mm: check.x_mm,
        steel_strain: None,
        phi: None,
        depth_ratio: Some(check.depth_ratio),
        c1: Some(c1),
        j: Some(j),
        classification: check.classification,
        moment_capacity_knm: check.capacity_knm,
        is_safe,
    })
}

/// Re-check the section with a provided steel area (chosen bars).
pub fn verify_provided_steel(
    input: &FlexureInput,
    provided_area_mm2: f64,
) -> CalcResult<ProvidedSteelCheck> {
    input.validate()?;

    let as_min = minimum_steel_area_mm2(
        input.material.fy_mpa,
        input.geometry.width_mm,
        input.geometry.effective_depth_mm(),
    );
    let check = check_steel_area(input, provided_area_mm2);

    let is_safe = check.depth_ratio <= X_OVER_D_LIMIT
        && check.capacity_knm >= input.mu_knm
        && provided_area_mm2 >= as_min;

    Ok(ProvidedSteelCheck {
        provided_area_mm2,
        stress_block_depth_mm: check.x_mm,
        classification: check.classification,
        moment_capacity_knm: check.capacity_knm,
        is_safe,
    })
}
