//! # Rebar Catalog and Bar Selection
//!
//! Standard reinforcement bar diameters with the usual designer's lookup
//! table of cumulative areas for 1..9 bars, plus the bookkeeping that picks
//! a bar arrangement for a required steel area.
//!
//! Cumulative entries are rounded to the whole mm², matching the published
//! design tables (4Φ16 = 804 mm², not 804.25). The per-bar area stays exact
//! for the bar-count ceiling.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::rebar::{RebarDiameter, catalog};
//!
//! let provided = catalog().provided_area_mm2(RebarDiameter::D16, 4).unwrap();
//! assert_eq!(provided, 804.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::flexure::SectionGeometry;

/// Maximum number of bars per layer covered by the catalog
pub const MAX_BARS: u32 = 9;

/// Absolute minimum clear spacing between bars (mm); the governing minimum
/// is `max(25, diameter)`
pub const MIN_CLEAR_SPACING_MM: f64 = 25.0;

/// Standard reinforcement bar diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RebarDiameter {
    /// Φ10 (78.5 mm²/bar)
    D10,
    /// Φ12 (113.1 mm²/bar)
    D12,
    /// Φ14 (153.9 mm²/bar)
    D14,
    /// Φ16 (201.1 mm²/bar)
    #[default]
    D16,
    /// Φ18 (254.5 mm²/bar)
    D18,
    /// Φ20 (314.2 mm²/bar)
    D20,
    /// Φ22 (380.1 mm²/bar)
    D22,
    /// Φ25 (490.9 mm²/bar)
    D25,
    /// Φ28 (615.8 mm²/bar)
    D28,
    /// Φ32 (804.2 mm²/bar)
    D32,
}

impl RebarDiameter {
    /// All standard diameters, smallest first
    pub const ALL: [RebarDiameter; 10] = [
        RebarDiameter::D10,
        RebarDiameter::D12,
        RebarDiameter::D14,
        RebarDiameter::D16,
        RebarDiameter::D18,
        RebarDiameter::D20,
        RebarDiameter::D22,
        RebarDiameter::D25,
        RebarDiameter::D28,
        RebarDiameter::D32,
    ];

    /// Nominal diameter in mm
    pub fn diameter_mm(&self) -> f64 {
        match self {
            RebarDiameter::D10 => 10.0,
            RebarDiameter::D12 => 12.0,
            RebarDiameter::D14 => 14.0,
            RebarDiameter::D16 => 16.0,
            RebarDiameter::D18 => 18.0,
            RebarDiameter::D20 => 20.0,
            RebarDiameter::D22 => 22.0,
            RebarDiameter::D25 => 25.0,
            RebarDiameter::D28 => 28.0,
            RebarDiameter::D32 => 32.0,
        }
    }

    /// Exact cross-sectional area of one bar, π·d²/4 (mm²)
    pub fn area_mm2(&self) -> f64 {
        let d = self.diameter_mm();
        std::f64::consts::PI * d * d / 4.0
    }

    /// Get display name (e.g., "Φ16")
    pub fn display_name(&self) -> &'static str {
        match self {
            RebarDiameter::D10 => "Φ10",
            RebarDiameter::D12 => "Φ12",
            RebarDiameter::D14 => "Φ14",
            RebarDiameter::D16 => "Φ16",
            RebarDiameter::D18 => "Φ18",
            RebarDiameter::D20 => "Φ20",
            RebarDiameter::D22 => "Φ22",
            RebarDiameter::D25 => "Φ25",
            RebarDiameter::D28 => "Φ28",
            RebarDiameter::D32 => "Φ32",
        }
    }
}

impl std::fmt::Display for RebarDiameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Read-only lookup of cumulative bar areas, diameter -> [area of 1 bar,
/// area of 2 bars, .., area of 9 bars], in whole mm².
#[derive(Debug, Clone)]
pub struct RebarCatalog {
    areas: HashMap<RebarDiameter, [f64; MAX_BARS as usize]>,
}

impl RebarCatalog {
    fn builtin() -> Self {
        let mut areas = HashMap::new();
        for dia in RebarDiameter::ALL {
            let one = dia.area_mm2();
            let mut row = [0.0; MAX_BARS as usize];
            for (i, slot) in row.iter_mut().enumerate() {
                *slot = (one * (i + 1) as f64).round();
            }
            areas.insert(dia, row);
        }
        Self { areas }
    }

    /// Cumulative area for `count` bars of `diameter` (mm²).
    ///
    /// `count` must be in 1..=9.
    pub fn provided_area_mm2(&self, diameter: RebarDiameter, count: u32) -> CalcResult<f64> {
        if count == 0 || count > MAX_BARS {
            return Err(CalcError::invalid_input(
                "count",
                count.to_string(),
                format!("Bar count must be between 1 and {MAX_BARS}"),
            ));
        }
        let row = self.areas.get(&diameter).ok_or_else(|| {
            CalcError::calculation_failed(
                "rebar_catalog",
                format!("diameter {diameter} missing from catalog"),
            )
        })?;
        Ok(row[(count - 1) as usize])
    }

    /// Smallest bar count of `diameter` whose cumulative area covers
    /// `required_area_mm2`, or None if even 9 bars fall short.
    pub fn bars_for_area(&self, diameter: RebarDiameter, required_area_mm2: f64) -> Option<u32> {
        let count = (required_area_mm2 / diameter.area_mm2()).ceil() as u32;
        let count = count.max(1);
        if count > MAX_BARS {
            None
        } else {
            Some(count)
        }
    }
}

/// The built-in catalog (constructed once, never mutated).
pub fn catalog() -> &'static RebarCatalog {
    static CATALOG: Lazy<RebarCatalog> = Lazy::new(RebarCatalog::builtin);
    &CATALOG
}

// ============================================================================
// SELECTION
// ============================================================================

/// One candidate bar arrangement for a required steel area.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameter": "D16",
///   "count": 4,
///   "provided_area_mm2": 804.0,
///   "excess_percent": 14.86,
///   "clear_spacing_mm": 45.33,
///   "spacing_ok": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebarOption {
    /// Bar diameter
    pub diameter: RebarDiameter,

    /// Number of bars (1..=9)
    pub count: u32,

    /// Cumulative provided area from the catalog (mm²)
    pub provided_area_mm2: f64,

    /// Over-provision relative to the requirement (%)
    pub excess_percent: f64,

    /// Clear spacing between bars in one layer (mm); None for a single bar
    pub clear_spacing_mm: Option<f64>,

    /// Whether the clear spacing meets `max(25, diameter)`; a single bar
    /// always passes
    pub spacing_ok: bool,
}

impl RebarOption {
    /// Get display name (e.g., "4Φ16")
    pub fn display_name(&self) -> String {
        format!("{}{}", self.count, self.diameter)
    }
}

impl std::fmt::Display for RebarOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Clear spacing between `count` bars of `diameter` in one layer of the
/// section, or None for a single bar.
pub fn clear_spacing_mm(
    geometry: &SectionGeometry,
    diameter: RebarDiameter,
    count: u32,
) -> Option<f64> {
    if count < 2 {
        return None;
    }
    let usable = geometry.width_mm - 2.0 * geometry.cover_mm;
    Some((usable - count as f64 * diameter.diameter_mm()) / (count - 1) as f64)
}

/// Enumerate the feasible bar arrangements for a required area.
///
/// For each standard diameter: bar count is the ceiling of required over
/// one-bar area, capped at 9 (diameters needing more are skipped); the
/// provided area is the catalog's cumulative entry; the spacing check
/// applies `max(25, diameter)` for two or more bars.
pub fn options_for(
    required_area_mm2: f64,
    geometry: &SectionGeometry,
) -> CalcResult<Vec<RebarOption>> {
    if required_area_mm2 <= 0.0 {
        return Err(CalcError::invalid_input(
            "required_area_mm2",
            required_area_mm2.to_string(),
            "Required steel area must be positive",
        ));
    }
    geometry.validate()?;

    let cat = catalog();
    let mut options = Vec::new();
    for dia in RebarDiameter::ALL {
        let Some(count) = cat.bars_for_area(dia, required_area_mm2) else {
            continue;
        };
        let provided = cat.provided_area_mm2(dia, count)?;
        let excess_percent = (provided - required_area_mm2) / required_area_mm2 * 100.0;

        let spacing = clear_spacing_mm(geometry, dia, count);
        let spacing_ok = match spacing {
            None => true,
            Some(s) => s >= MIN_CLEAR_SPACING_MM.max(dia.diameter_mm()),
        };

        options.push(RebarOption {
            diameter: dia,
            count,
            provided_area_mm2: provided,
            excess_percent,
            clear_spacing_mm: spacing,
            spacing_ok,
        });
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_bar_areas() {
        assert!((RebarDiameter::D16.area_mm2() - 201.1).abs() < 0.05);
        assert!((RebarDiameter::D10.area_mm2() - 78.5).abs() < 0.05);
        assert!((RebarDiameter::D32.area_mm2() - 804.2).abs() < 0.05);
    }

    #[test]
    fn test_catalog_cumulative_entries() {
        let cat = catalog();
        assert_eq!(cat.provided_area_mm2(RebarDiameter::D16, 1).unwrap(), 201.0);
        assert_eq!(cat.provided_area_mm2(RebarDiameter::D16, 4).unwrap(), 804.0);
        assert_eq!(cat.provided_area_mm2(RebarDiameter::D12, 9).unwrap(), 1018.0);
    }

    #[test]
    fn test_catalog_rejects_bad_count() {
        let cat = catalog();
        assert!(cat.provided_area_mm2(RebarDiameter::D16, 0).is_err());
        assert!(cat.provided_area_mm2(RebarDiameter::D16, 10).is_err());
    }

    #[test]
    fn test_bars_for_area() {
        let cat = catalog();
        // ceil(700 / 201.06) = 4
        assert_eq!(cat.bars_for_area(RebarDiameter::D16, 700.0), Some(4));
        // 9Φ10 = 707 mm² covers 700; 10 would be needed for more
        assert_eq!(cat.bars_for_area(RebarDiameter::D10, 700.0), Some(9));
        assert_eq!(cat.bars_for_area(RebarDiameter::D10, 720.0), None);
        // Tiny requirement still gets one bar
        assert_eq!(cat.bars_for_area(RebarDiameter::D25, 10.0), Some(1));
    }

    #[test]
    fn test_reference_selection_700mm2() {
        // Table check: 700 mm² with Φ16 -> 4 bars, 804 mm², ~14.86% over
        let geometry = SectionGeometry::new(250.0, 500.0, 25.0);
        let options = options_for(700.0, &geometry).unwrap();
        let phi16 = options
            .iter()
            .find(|o| o.diameter == RebarDiameter::D16)
            .unwrap();
        assert_eq!(phi16.count, 4);
        assert_eq!(phi16.provided_area_mm2, 804.0);
        assert!((phi16.excess_percent - 14.86).abs() < 0.01);
        assert_eq!(phi16.display_name(), "4Φ16");
    }

    #[test]
    fn test_clear_spacing() {
        // (250 - 2·25 - 4·16) / 3 = 45.33 mm
        let geometry = SectionGeometry::new(250.0, 500.0, 25.0);
        let spacing = clear_spacing_mm(&geometry, RebarDiameter::D16, 4).unwrap();
        assert!((spacing - 136.0 / 3.0).abs() < 1e-9);

        // Single bar has no spacing constraint
        assert!(clear_spacing_mm(&geometry, RebarDiameter::D16, 1).is_none());
    }

    #[test]
    fn test_spacing_check_fails_in_narrow_section() {
        // (150 - 2·40 - 4·16) / 3 = 2 mm < 25 mm
        let geometry = SectionGeometry::new(150.0, 500.0, 40.0);
        let options = options_for(700.0, &geometry).unwrap();
        let phi16 = options
            .iter()
            .find(|o| o.diameter == RebarDiameter::D16)
            .unwrap();
        assert!(!phi16.spacing_ok);
    }

    #[test]
    fn test_spacing_minimum_is_diameter_for_large_bars() {
        // 2Φ32 in a 250 wide section with 25 cover: spacing = 136 mm >= 32
        let geometry = SectionGeometry::new(250.0, 500.0, 25.0);
        let options = options_for(1500.0, &geometry).unwrap();
        let phi32 = options
            .iter()
            .find(|o| o.diameter == RebarDiameter::D32)
            .unwrap();
        assert_eq!(phi32.count, 2);
        assert!(phi32.spacing_ok);
    }

    #[test]
    fn test_options_skip_infeasible_diameters() {
        // 2000 mm² cannot be covered by 9Φ10 (707) or 9Φ12 (1018)
        let geometry = SectionGeometry::new(400.0, 700.0, 40.0);
        let options = options_for(2000.0, &geometry).unwrap();
        assert!(!options.iter().any(|o| o.diameter == RebarDiameter::D10));
        assert!(!options.iter().any(|o| o.diameter == RebarDiameter::D12));
        assert!(options.iter().any(|o| o.diameter == RebarDiameter::D20));
        assert!(options.iter().all(|o| o.provided_area_mm2 >= 2000.0));
    }

    #[test]
    fn test_options_reject_non_positive_requirement() {
        let geometry = SectionGeometry::new(250.0, 500.0, 25.0);
        assert!(options_for(0.0, &geometry).is_err());
    }

    #[test]
    fn test_option_serialization() {
        let geometry = SectionGeometry::new(250.0, 500.0, 25.0);
        let options = options_for(700.0, &geometry).unwrap();
        let json = serde_json::to_string(&options).unwrap();
        let roundtrip: Vec<RebarOption> = serde_json::from_str(&json).unwrap();
        assert_eq!(options.len(), roundtrip.len());
    }
}
