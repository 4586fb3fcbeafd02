//! # rc_core - Reinforced-Concrete Flexural Design Engine
//!
//! `rc_core` computes the flexural reinforcement requirement for rectangular
//! reinforced-concrete sections under two design codes (ACI 318
//! ultimate-strength design and the ECP 203 C1-J method), then helps pick a
//! standard rebar arrangement that satisfies the requirement. All inputs and
//! outputs are JSON-serializable, making it ideal for integration with AI
//! assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the violated constraint
//! - **One Unit System**: mm / N / MPa internally, moments in kN·m at the
//!   boundary, converted exactly once
//!
//! ## Quick Start
//!
//! ```rust
//! use rc_core::flexure::{design, CodeVariant, FlexureInput, SectionGeometry};
//! use rc_core::materials::MaterialProperties;
//! use rc_core::rebar::options_for;
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
//!
//! let bars = options_for(result.required_steel_area_mm2, &input.geometry).unwrap();
//! assert!(!bars.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`flexure`] - The design engine (ACI and ECP procedures)
//! - [`rebar`] - Bar catalog and arrangement selection
//! - [`materials`] - Material properties and standard steel grades
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod flexure;
pub mod materials;
pub mod rebar;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use flexure::{design, CodeVariant, DesignResult, FlexureInput, SectionGeometry};
pub use materials::MaterialProperties;
