//! # slab_core - One-Way Slab Design Engine
//!
//! `slab_core` designs simply supported one-way reinforced concrete slabs to
//! BS 8110-1 or Eurocode 2. All inputs and outputs are JSON-serializable, and
//! the calculation is a pure function of its input.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `compute` takes an input and returns a result; no globals
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Every formula is registered with its code reference
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::{compute, DesignInput, DesignCode};
//! use slab_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let input = DesignInput::new(4.0, 150.0, 3.5, 2.0, ConcreteGrade::C25, SteelGrade::Fy460, 20.0)
//!     .with_code(DesignCode::Bs8110);
//!
//! let result = compute(&input).unwrap();
//! let design = result.reinforcement().unwrap();
//! assert_eq!(design.arrangement.selected.designation(), "Y8 @ 125");
//!
//! // Serialize for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("singly_reinforced"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The slab design pipeline and bar detailing
//! - [`request`] - Boundary request/response records
//! - [`settings`] - Calculator settings and practical input limits
//! - [`report`] - Step-by-step text and Markdown reports
//! - [`equations`] - Formula functions and the equation registry
//! - [`materials`] - Concrete, steel and bar catalogs
//! - [`loads`] - Load cases and ULS combinations
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod design_code;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod report;
pub mod request;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute, compute_traced, DesignInput, DesignResult, FlexuralDesign};
pub use design_code::DesignCode;
pub use errors::{CalcError, CalcResult};
pub use report::CalculationReport;
pub use request::{respond, respond_with, respond_with_traced, DesignRequest, DesignResponse};
pub use settings::{CalculatorSettings, InputLimits};
