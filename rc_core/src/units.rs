//! # Unit Types
//!
//! Type-safe wrappers for the engineering units used by the engine. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The engine uses one fixed, internally consistent unit system
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Convention (Fixed)
//!
//! All internal calculations are done in millimeters, newtons, and
//! megapascals (1 MPa = 1 N/mm²). Bending moments cross the API boundary in
//! kN·m and are converted to N·mm exactly once on entry:
//!
//! - Length: millimeters (mm)
//! - Area: square millimeters (mm²)
//! - Stress: megapascals (MPa = N/mm²)
//! - Moment: kilonewton-meters (kN·m) externally, newton-millimeters (N·mm)
//!   internally (1 kN·m = 10⁶ N·mm)
//!
//! ## Example
//!
//! ```rust
//! use rc_core::units::{KiloNewtonMeters, NewtonMillimeters};
//!
//! let mu = KiloNewtonMeters(13.7);
//! let mu_nmm: NewtonMillimeters = mu.into();
//! assert_eq!(mu_nmm.0, 13.7e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length and Area Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (1 MPa = 1 N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-meters (external/reporting unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Moment in newton-millimeters (internal calculation unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<KiloNewtonMeters> for NewtonMillimeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimeters> for KiloNewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KiloNewtonMeters(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(Megapascals);
impl_arithmetic!(KiloNewtonMeters);
impl_arithmetic!(NewtonMillimeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knm_to_nmm() {
        let mu = KiloNewtonMeters(13.7);
        let nmm: NewtonMillimeters = mu.into();
        assert_eq!(nmm.0, 13_700_000.0);
    }

    #[test]
    fn test_nmm_to_knm() {
        let nmm = NewtonMillimeters(20.59e6);
        let knm: KiloNewtonMeters = nmm.into();
        assert!((knm.0 - 20.59).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(150.0);
        let b = Millimeters(20.0);
        assert_eq!((a - b).0, 130.0);
        assert_eq!((a + b).0, 170.0);
        assert_eq!((a * 2.0).0, 300.0);
        assert_eq!((a / 2.0).0, 75.0);
    }

    #[test]
    fn test_serialization() {
        let d = Millimeters(130.0);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "130.0");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(d, roundtrip);
    }
}
