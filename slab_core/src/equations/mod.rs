//! # Slab Design Equations
//!
//! Every formula used in a one-way slab design lives here as a small pure
//! function. Having equations in one place enables:
//! - Easy verification against BS 8110 and Eurocode 2 clauses
//! - Documentation of assumptions and units
//! - Consistent implementation across both code bases
//!
//! ## Modules
//!
//! - [`flexure`] - Moment, shear force, effective depth, K, lever arm, steel areas
//! - [`checks`] - Span/depth deflection control and concrete shear resistance
//! - [`registry`] - Equation metadata and tracking for the report appendix
//!
//! ## Units
//!
//! Loads in kN/m², spans in m, section dimensions in mm, stresses in N/mm².
//! Every quantity is per 1000 mm strip of slab.

pub mod checks;
pub mod flexure;
pub mod registry;

pub use flexure::{
    bs8110_minimum_steel,
    ec2_minimum_steel,
    effective_depth,
    k_factor,
    lever_arm_cap,
    lever_arm_uncapped,
    required_steel_area,
    simply_supported_udl_moment,
    simply_supported_udl_shear,
};

pub use checks::{
    bs8110_concrete_shear_stress,
    bs8110_max_shear_stress,
    bs8110_modification_factor,
    bs8110_service_stress,
    ec2_basic_span_depth,
    ec2_concrete_shear_stress,
    ec2_steel_stress_factor,
    shear_stress,
    BS8110_BASIC_SPAN_DEPTH_SIMPLY_SUPPORTED,
    EC2_STRUCTURAL_FACTOR_SIMPLY_SUPPORTED,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
    slab_design_equations,
};
