//! # Slab Calculations
//!
//! The one-way slab design follows the pattern:
//!
//! - [`DesignInput`] - Input parameters (JSON-serializable)
//! - [`DesignResult`] - Calculation results (JSON-serializable)
//! - `compute(input) -> Result<DesignResult, CalcError>` - Pure calculation function
//!
//! ## Modules
//!
//! - [`slab`] - Loads, flexure, deflection and shear for a simply supported strip
//! - [`detailing`] - Bar size and spacing selection

pub mod detailing;
pub mod slab;

pub use detailing::{select_reinforcement, BarArrangement, BarOption};
pub use slab::{
    compute, compute_traced, DeflectionCheck, DesignInput, DesignResult, FlexuralDesign,
    ReinforcementDesign, ShearCheck, DEFAULT_BAR_DIAMETER_MM, STRIP_WIDTH_MM,
};
