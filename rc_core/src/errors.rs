//! # Error Types
//!
//! Structured error types for rc_core. Every failure names the physical
//! constraint that was violated and, where it helps, what remedial change
//! to the section would clear it. Errors are detected eagerly: no partial
//! `DesignResult` is ever produced.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Section width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive scalar, negative cover, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Section geometry is unusable (effective depth <= 0)
    #[error("Invalid geometry: {reason}. {suggestion}")]
    InvalidGeometry { reason: String, suggestion: String },

    /// Moment demand exceeds what the section/material can resist before
    /// any reinforcement is selected (negative discriminant / J-term)
    #[error("Section too small for {code} design: {reason}. {suggestion}")]
    SectionTooSmall {
        code: String,
        reason: String,
        suggestion: String,
    },

    /// ECP ductility gate failed: no singly-reinforced solution exists
    #[error("Over-reinforced section: C1 = {c1:.3} is below the minimum {c1_min:.2}. {suggestion}")]
    OverReinforced {
        c1: f64,
        c1_min: f64,
        suggestion: String,
    },

    /// Internal numerical guard tripped (should be unreachable with
    /// validated inputs)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(reason: impl Into<String>, suggestion: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            reason: reason.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a SectionTooSmall error
    pub fn section_too_small(
        code: impl Into<String>,
        reason: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        CalcError::SectionTooSmall {
            code: code.into(),
            reason: reason.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create an OverReinforced error
    pub fn over_reinforced(c1: f64, c1_min: f64, suggestion: impl Into<String>) -> Self {
        CalcError::OverReinforced {
            c1,
            c1_min,
            suggestion: suggestion.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::SectionTooSmall { .. } => "SECTION_TOO_SMALL",
            CalcError::OverReinforced { .. } => "OVER_REINFORCED",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}
