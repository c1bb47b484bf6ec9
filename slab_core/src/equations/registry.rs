//! # Equation Registry
//!
//! Central registry of every formula applied in a slab design.
//! Each equation has metadata including code references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for the report appendix and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use slab_core::equations::registry::{Equation, EquationTracker};
//!
//! // Track equation usage during calculation
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::UniformLoadMaxMoment, "Midspan moment");
//!
//! // Get metadata for the appendix
//! let meta = Equation::UniformLoadMaxMoment.metadata();
//! assert_eq!(meta.formula_plain, "M = wL^2/8");
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a code of practice or standard text.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// BS 8110 Structural use of concrete
    BS8110 {
        part: u8,
        reference: &'static str,
    },
    /// BS EN 1992-1-1 Eurocode 2
    EC2 {
        reference: &'static str,
    },
    /// BS EN 1990 Basis of structural design
    EN1990 {
        reference: &'static str,
    },
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Fundamental mechanics or geometry (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::BS8110 { part, reference } => {
                format!("BS 8110-{}:1997 {}", part, reference)
            }
            CodeReference::EC2 { reference } => format!("BS EN 1992-1-1 {}", reference),
            CodeReference::EN1990 { reference } => format!("BS EN 1990 {}", reference),
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::BS8110 { .. } => "BS 8110",
            CodeReference::EC2 { .. } => "EC2",
            CodeReference::EN1990 { .. } => "EN 1990",
            CodeReference::Roarks { .. } => "Roark's",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Ultimate load combinations
    Loads,
    /// Internal forces (moment, shear)
    InternalForces,
    /// Effective depth
    SectionGeometry,
    /// K factor, lever arm, steel area
    Flexure,
    /// Minimum areas and bar spacing
    Detailing,
    /// Span/effective depth checks
    Deflection,
    /// Concrete shear resistance
    Shear,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Loads => "Loads",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::SectionGeometry => "Section Geometry",
            EquationCategory::Flexure => "Flexure",
            EquationCategory::Detailing => "Detailing",
            EquationCategory::Deflection => "Deflection",
            EquationCategory::Shear => "Shear",
        }
    }

    /// Sort order for the appendix (lower = earlier), following calculation order
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Loads => 1,
            EquationCategory::InternalForces => 2,
            EquationCategory::SectionGeometry => 3,
            EquationCategory::Flexure => 4,
            EquationCategory::Detailing => 5,
            EquationCategory::Deflection => 6,
            EquationCategory::Shear => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "M", "d", "fck")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kN·m/m", "mm", "N/mm²")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a design equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Maximum Moment for Uniform Load")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping in appendix
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in one-way slab design.
///
/// Each variant maps to a specific formula with full metadata.
/// This enum is the primary interface for equation tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Loads
    // -------------------------------------------------------------------------
    /// w = 1.4G + 1.6Q
    Bs8110UltimateLoad,
    /// w = 1.35G + 1.5Q
    Ec2UltimateLoad,

    // -------------------------------------------------------------------------
    // Internal forces
    // -------------------------------------------------------------------------
    /// M = wL²/8
    UniformLoadMaxMoment,
    /// V = wL/2
    UniformLoadSupportShear,

    // -------------------------------------------------------------------------
    // Section
    // -------------------------------------------------------------------------
    /// d = h - c - Ø/2
    EffectiveDepth,

    // -------------------------------------------------------------------------
    // Flexure
    // -------------------------------------------------------------------------
    /// K = M/(bd²fck)
    KFactor,
    /// z = d[0.5 + √(0.25 - K/1.134)] ≤ 0.95d
    LeverArm,
    /// As = M/(0.87 fy z)
    RequiredTensionSteel,

    // -------------------------------------------------------------------------
    // Detailing
    // -------------------------------------------------------------------------
    /// As,min = 0.0013bh
    Bs8110MinimumSteel,
    /// As,min = 0.26 fctm/fyk bd ≥ 0.0013bd
    Ec2MinimumSteel,
    /// s = 1000 Ab / As
    BarSpacing,
    /// s ≤ min(3h, 400)
    MaximumBarSpacing,

    // -------------------------------------------------------------------------
    // Deflection
    // -------------------------------------------------------------------------
    /// MF = 0.55 + (477 - fs)/(120(0.9 + M/bd²))
    Bs8110ModificationFactor,
    /// L/d ≤ 20 × MF
    Bs8110SpanDepthCheck,
    /// Expression 7.16 basic span/depth
    Ec2BasicSpanDepth,
    /// L/d ≤ basic × (500/fyk)(As,prov/As,req)
    Ec2SpanDepthCheck,

    // -------------------------------------------------------------------------
    // Shear
    // -------------------------------------------------------------------------
    /// v = V/(bd)
    ShearStress,
    /// vc per BS 8110 Table 3.8
    Bs8110ConcreteShear,
    /// vRd,c per EC2 6.2
    Ec2ConcreteShear,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::Bs8110UltimateLoad => EquationMetadata {
                name: "BS 8110 Ultimate Load",
                description: "Factored area load for dead and imposed actions",
                formula_plain: "w = 1.4G + 1.6Q",
                reference: CodeReference::BS8110 { part: 1, reference: "Table 2.1" },
                variables: vec![
                    Variable::new("w", "Ultimate area load", "kN/m²"),
                    Variable::new("G", "Characteristic dead load", "kN/m²"),
                    Variable::new("Q", "Characteristic imposed load", "kN/m²"),
                ],
                assumptions: vec!["Dead and imposed load only, no wind"],
                category: EquationCategory::Loads,
                source_module: "loads/combinations.rs",
                source_function: "bs8110_uls_combination",
            },

            Equation::Ec2UltimateLoad => EquationMetadata {
                name: "EC2 Ultimate Load",
                description: "Factored area load for persistent design situations",
                formula_plain: "w = 1.35G + 1.5Q",
                reference: CodeReference::EN1990 { reference: "Expression 6.10 (UK NA)" },
                variables: vec![
                    Variable::new("w", "Ultimate area load", "kN/m²"),
                    Variable::new("G", "Characteristic permanent action", "kN/m²"),
                    Variable::new("Q", "Characteristic variable action", "kN/m²"),
                ],
                assumptions: vec!["Single variable action", "Expression 6.10 rather than 6.10a/b"],
                category: EquationCategory::Loads,
                source_module: "loads/combinations.rs",
                source_function: "ec2_uls_combination",
            },

            Equation::UniformLoadMaxMoment => EquationMetadata {
                name: "Maximum Moment for Uniform Load",
                description: "Midspan moment of a simply supported strip under full-span uniform load",
                formula_plain: "M = wL^2/8",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("M", "Design moment per metre width", "kN·m/m"),
                    Variable::new("w", "Ultimate area load", "kN/m²"),
                    Variable::new("L", "Effective span", "m"),
                ],
                assumptions: vec!["Simply supported (pin-roller)", "Uniform load over full span"],
                category: EquationCategory::InternalForces,
                source_module: "equations/flexure.rs",
                source_function: "simply_supported_udl_moment",
            },

            Equation::UniformLoadSupportShear => EquationMetadata {
                name: "Support Shear for Uniform Load",
                description: "End reaction of a simply supported strip under full-span uniform load",
                formula_plain: "V = wL/2",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("V", "Design shear per metre width", "kN/m"),
                    Variable::new("w", "Ultimate area load", "kN/m²"),
                    Variable::new("L", "Effective span", "m"),
                ],
                assumptions: vec!["Shear taken at the support face"],
                category: EquationCategory::InternalForces,
                source_module: "equations/flexure.rs",
                source_function: "simply_supported_udl_shear",
            },

            Equation::EffectiveDepth => EquationMetadata {
                name: "Effective Depth",
                description: "Depth from compression face to the centroid of the tension bars",
                formula_plain: "d = h - c - Ø/2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("h", "Overall slab thickness", "mm"),
                    Variable::new("c", "Nominal cover to main bars", "mm"),
                    Variable::new("Ø", "Assumed main bar diameter", "mm"),
                ],
                assumptions: vec!["Single layer of bottom bars"],
                category: EquationCategory::SectionGeometry,
                source_module: "equations/flexure.rs",
                source_function: "effective_depth",
            },

            Equation::KFactor => EquationMetadata {
                name: "Moment Resistance Factor K",
                description: "Normalized design moment compared with K' to decide if compression steel is needed",
                formula_plain: "K = M / (b d^2 fck)",
                reference: CodeReference::BS8110 { part: 1, reference: "Clause 3.4.4.4" },
                variables: vec![
                    Variable::new("K", "Moment factor", "-"),
                    Variable::new("M", "Design moment", "N·mm"),
                    Variable::new("b", "Strip width", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("fck", "Characteristic concrete strength", "N/mm²"),
                ],
                assumptions: vec![
                    "No moment redistribution",
                    "K' = 0.156 (BS 8110), 0.167 (EC2)",
                ],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "k_factor",
            },

            Equation::LeverArm => EquationMetadata {
                name: "Lever Arm",
                description: "Distance between tension steel and centre of the concrete stress block",
                formula_plain: "z = d[0.5 + sqrt(0.25 - K/1.134)] <= 0.95d",
                reference: CodeReference::BS8110 { part: 1, reference: "Clause 3.4.4.4" },
                variables: vec![
                    Variable::new("z", "Lever arm", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("K", "Moment factor", "-"),
                ],
                assumptions: vec!["Rectangular stress block", "K ≤ K'"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "lever_arm_uncapped",
            },

            Equation::RequiredTensionSteel => EquationMetadata {
                name: "Required Tension Steel",
                description: "Area of tension reinforcement to resist the design moment",
                formula_plain: "As,req = M / (0.87 fy z)",
                reference: CodeReference::BS8110 { part: 1, reference: "Clause 3.4.4.4" },
                variables: vec![
                    Variable::new("As,req", "Required steel area", "mm²/m"),
                    Variable::new("M", "Design moment", "N·mm"),
                    Variable::new("fy", "Characteristic yield strength", "N/mm²"),
                    Variable::new("z", "Lever arm", "mm"),
                ],
                assumptions: vec!["Steel partial factor 1.15 (0.87 = 1/1.15)"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "required_steel_area",
            },

            Equation::Bs8110MinimumSteel => EquationMetadata {
                name: "BS 8110 Minimum Tension Steel",
                description: "Minimum area of high-yield tension reinforcement in a slab",
                formula_plain: "As,min = 0.0013 b h",
                reference: CodeReference::BS8110 { part: 1, reference: "Table 3.25" },
                variables: vec![
                    Variable::new("As,min", "Minimum steel area", "mm²/m"),
                    Variable::new("b", "Strip width", "mm"),
                    Variable::new("h", "Overall thickness", "mm"),
                ],
                assumptions: vec!["fy = 460 or 500 N/mm²"],
                category: EquationCategory::Detailing,
                source_module: "equations/flexure.rs",
                source_function: "bs8110_minimum_steel",
            },

            Equation::Ec2MinimumSteel => EquationMetadata {
                name: "EC2 Minimum Tension Steel",
                description: "Minimum longitudinal tension reinforcement",
                formula_plain: "As,min = 0.26 (fctm/fyk) b d >= 0.0013 b d",
                reference: CodeReference::EC2 { reference: "Expression 9.1N" },
                variables: vec![
                    Variable::new("As,min", "Minimum steel area", "mm²/m"),
                    Variable::new("fctm", "Mean axial tensile strength", "N/mm²"),
                    Variable::new("fyk", "Characteristic yield strength", "N/mm²"),
                    Variable::new("b", "Strip width", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                ],
                assumptions: vec!["Rectangular section"],
                category: EquationCategory::Detailing,
                source_module: "equations/flexure.rs",
                source_function: "ec2_minimum_steel",
            },

            Equation::BarSpacing => EquationMetadata {
                name: "Bar Spacing",
                description: "Centre-to-centre spacing of one bar size that provides the required area",
                formula_plain: "s = 1000 Ab / As",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("s", "Bar spacing, rounded down to 25 mm", "mm"),
                    Variable::new("Ab", "Area of one bar", "mm²"),
                    Variable::new("As", "Governing steel area", "mm²/m"),
                ],
                assumptions: vec!["Spacing not less than 75 mm"],
                category: EquationCategory::Detailing,
                source_module: "calculations/detailing.rs",
                source_function: "select_reinforcement",
            },

            Equation::MaximumBarSpacing => EquationMetadata {
                name: "Maximum Bar Spacing",
                description: "Upper limit on main bar spacing in a slab",
                formula_plain: "s_max = min(3h, 400)",
                reference: CodeReference::BS8110 { part: 1, reference: "Clause 3.12.11.2.7" },
                variables: vec![
                    Variable::new("s_max", "Maximum spacing", "mm"),
                    Variable::new("h", "Overall thickness", "mm"),
                ],
                assumptions: vec!["Also applied under EC2 (9.3.1.1 gives 3h ≤ 400 for main bars)"],
                category: EquationCategory::Detailing,
                source_module: "calculations/detailing.rs",
                source_function: "max_bar_spacing",
            },

            Equation::Bs8110ModificationFactor => EquationMetadata {
                name: "Tension Steel Modification Factor",
                description: "Adjustment of the basic span/depth ratio for steel service stress",
                formula_plain: "MF = 0.55 + (477 - fs) / (120(0.9 + M/bd^2)) in [0.9, 2.0]; fs = 2 fy As,req / (3 As,prov)",
                reference: CodeReference::BS8110 { part: 1, reference: "Table 3.10" },
                variables: vec![
                    Variable::new("MF", "Modification factor", "-"),
                    Variable::new("fs", "Steel service stress", "N/mm²"),
                    Variable::new("M", "Design moment", "N·mm"),
                    Variable::new("As,prov", "Steel area provided", "mm²/m"),
                ],
                assumptions: vec!["No compression steel modification"],
                category: EquationCategory::Deflection,
                source_module: "equations/checks.rs",
                source_function: "bs8110_modification_factor",
            },

            Equation::Bs8110SpanDepthCheck => EquationMetadata {
                name: "BS 8110 Span/Effective Depth Check",
                description: "Actual span/depth ratio compared with the modified basic ratio",
                formula_plain: "L/d <= 20 × MF",
                reference: CodeReference::BS8110 { part: 1, reference: "Table 3.9" },
                variables: vec![
                    Variable::new("L", "Span", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("MF", "Modification factor", "-"),
                ],
                assumptions: vec!["Simply supported", "Span not exceeding 10 m"],
                category: EquationCategory::Deflection,
                source_module: "calculations/slab.rs",
                source_function: "check_deflection",
            },

            Equation::Ec2BasicSpanDepth => EquationMetadata {
                name: "EC2 Basic Span/Depth Ratio",
                description: "Limiting span/depth ratio from reinforcement ratio and concrete strength",
                formula_plain: "l/d = K[11 + 1.5 sqrt(fck) ρ0/ρ + 3.2 sqrt(fck)(ρ0/ρ - 1)^1.5] for ρ <= ρ0, else K[11 + 1.5 sqrt(fck) ρ0/ρ]",
                reference: CodeReference::EC2 { reference: "Expression 7.16" },
                variables: vec![
                    Variable::new("ρ", "Required tension reinforcement ratio As/bd", "-"),
                    Variable::new("ρ0", "Reference ratio sqrt(fck) × 10⁻³", "-"),
                    Variable::new("K", "Structural system factor", "-"),
                ],
                assumptions: vec!["K = 1.0 (simply supported)", "No compression reinforcement"],
                category: EquationCategory::Deflection,
                source_module: "equations/checks.rs",
                source_function: "ec2_basic_span_depth",
            },

            Equation::Ec2SpanDepthCheck => EquationMetadata {
                name: "EC2 Span/Depth Check",
                description: "Basic ratio adjusted for steel stress, compared with actual L/d",
                formula_plain: "L/d <= basic × min((500/fyk)(As,prov/As,req), 1.5)",
                reference: CodeReference::EC2 { reference: "Expression 7.17" },
                variables: vec![
                    Variable::new("fyk", "Characteristic yield strength", "N/mm²"),
                    Variable::new("As,prov", "Steel area provided", "mm²/m"),
                    Variable::new("As,req", "Steel area required", "mm²/m"),
                ],
                assumptions: vec!["UK NA cap of 1.5 on the stress factor"],
                category: EquationCategory::Deflection,
                source_module: "equations/checks.rs",
                source_function: "ec2_steel_stress_factor",
            },

            Equation::ShearStress => EquationMetadata {
                name: "Design Shear Stress",
                description: "Average shear stress on the effective section",
                formula_plain: "v = V / (b d)",
                reference: CodeReference::BS8110 { part: 1, reference: "Clause 3.4.5.2" },
                variables: vec![
                    Variable::new("v", "Design shear stress", "N/mm²"),
                    Variable::new("V", "Design shear force", "N"),
                    Variable::new("b", "Strip width", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                ],
                assumptions: vec!["v ≤ min(0.8 sqrt(fcu), 5) under BS 8110"],
                category: EquationCategory::Shear,
                source_module: "equations/checks.rs",
                source_function: "shear_stress",
            },

            Equation::Bs8110ConcreteShear => EquationMetadata {
                name: "BS 8110 Concrete Shear Stress",
                description: "Design shear stress resisted by concrete without links",
                formula_plain: "vc = 0.79 (100As/bd)^(1/3) (400/d)^(1/4) / 1.25 × (fcu/25)^(1/3)",
                reference: CodeReference::BS8110 { part: 1, reference: "Table 3.8" },
                variables: vec![
                    Variable::new("vc", "Concrete shear stress", "N/mm²"),
                    Variable::new("As", "Tension steel provided", "mm²/m"),
                    Variable::new("fcu", "Concrete strength, not above 40", "N/mm²"),
                ],
                assumptions: vec!["100As/bd ≤ 3", "400/d ≥ 1"],
                category: EquationCategory::Shear,
                source_module: "equations/checks.rs",
                source_function: "bs8110_concrete_shear_stress",
            },

            Equation::Ec2ConcreteShear => EquationMetadata {
                name: "EC2 Shear Resistance without Shear Reinforcement",
                description: "Design shear resistance stress of the concrete section",
                formula_plain: "vRd,c = max(0.12 k (100 ρl fck)^(1/3), 0.035 k^1.5 sqrt(fck)); k = 1 + sqrt(200/d) <= 2",
                reference: CodeReference::EC2 { reference: "Expressions 6.2a and 6.2b" },
                variables: vec![
                    Variable::new("vRd,c", "Shear resistance stress", "N/mm²"),
                    Variable::new("k", "Size effect factor", "-"),
                    Variable::new("ρl", "Tension reinforcement ratio, not above 0.02", "-"),
                ],
                assumptions: vec!["No axial load (σcp = 0)", "CRd,c = 0.18/1.5"],
                category: EquationCategory::Shear,
                source_module: "equations/checks.rs",
                source_function: "ec2_concrete_shear_stress",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in appendix order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            Loads,
            InternalForces,
            SectionGeometry,
            Flexure,
            Detailing,
            Deflection,
            Shear,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Loads
    Equation::Bs8110UltimateLoad,
    Equation::Ec2UltimateLoad,
    // Internal forces
    Equation::UniformLoadMaxMoment,
    Equation::UniformLoadSupportShear,
    // Section
    Equation::EffectiveDepth,
    // Flexure
    Equation::KFactor,
    Equation::LeverArm,
    Equation::RequiredTensionSteel,
    // Detailing
    Equation::Bs8110MinimumSteel,
    Equation::Ec2MinimumSteel,
    Equation::BarSpacing,
    Equation::MaximumBarSpacing,
    // Deflection
    Equation::Bs8110ModificationFactor,
    Equation::Bs8110SpanDepthCheck,
    Equation::Ec2BasicSpanDepth,
    Equation::Ec2SpanDepthCheck,
    // Shear
    Equation::ShearStress,
    Equation::Bs8110ConcreteShear,
    Equation::Ec2ConcreteShear,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Midspan moment")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
///
/// Pass this to [`compute_traced`](crate::calculations::compute_traced) to
/// track which equations a design applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group usages by equation
    pub fn by_equation(&self) -> HashMap<Equation, Vec<&EquationUsage>> {
        let mut map: HashMap<Equation, Vec<&EquationUsage>> = HashMap::new();
        for usage in &self.usages {
            map.entry(usage.equation).or_default().push(usage);
        }
        map
    }

    /// Group unique equations by category for appendix
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Appendix Generation
// ============================================================================

impl EquationTracker {
    /// Generate a Markdown "List of Equations" appendix for a report.
    ///
    /// Organized by category in calculation order, each unique equation is
    /// shown with its formula, reference, and the steps that applied it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slab_core::equations::registry::{Equation, EquationTracker};
    ///
    /// let mut tracker = EquationTracker::new();
    /// tracker.record(Equation::UniformLoadMaxMoment, "Midspan moment");
    /// tracker.record(Equation::KFactor, "Flexure");
    ///
    /// let appendix = tracker.generate_appendix_markdown();
    /// assert!(appendix.contains("Maximum Moment for Uniform Load"));
    /// ```
    pub fn generate_appendix_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str("## Appendix: List of Equations\n\n");

        let by_category = self.by_category();
        if by_category.is_empty() {
            output.push_str("_No equations recorded for this calculation._\n");
            return output;
        }

        let usage_by_eq = self.by_equation();

        for (category, equations) in by_category {
            output.push_str(&format!("### {}\n\n", category.display_name()));

            for equation in equations {
                let meta = equation.metadata();
                output.push_str(&format!("**{}**: `{}`\n\n", meta.name, meta.formula_plain));
                output.push_str(&format!("- Reference: {}\n", meta.reference.citation()));

                if let Some(usages) = usage_by_eq.get(&equation) {
                    let mut contexts: Vec<&str> = usages.iter().map(|u| u.context.as_str()).collect();
                    contexts.dedup();
                    output.push_str(&format!("- Applied to: {}\n", contexts.join(", ")));
                }
                output.push('\n');
            }
        }

        output
    }
}

/// The equations applied in a BS 8110 or EC2 slab design, in calculation order.
pub fn slab_design_equations() -> Vec<Equation> {
    vec![
        Equation::Bs8110UltimateLoad,
        Equation::UniformLoadMaxMoment,
        Equation::UniformLoadSupportShear,
        Equation::EffectiveDepth,
        Equation::KFactor,
        Equation::LeverArm,
        Equation::RequiredTensionSteel,
        Equation::Bs8110MinimumSteel,
        Equation::BarSpacing,
        Equation::MaximumBarSpacing,
        Equation::Bs8110ModificationFactor,
        Equation::Bs8110SpanDepthCheck,
        Equation::ShearStress,
        Equation::Bs8110ConcreteShear,
    ]
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// Lists every equation in the registry, organized by category, with
/// formulas, references, and source code links.
///
/// # Example
///
/// ```rust
/// use slab_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Slabcalc Equations Reference"));
/// assert!(markdown.contains("## Flexure"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Slabcalc Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used in slabcalc one-way slab designs.
Each equation includes its formula, code reference, source location, and assumptions.

## Units and Conventions

| Quantity | Units |
|----------|-------|
| Area loads | kN/m² |
| Span | m |
| Thickness, cover, depth, spacing | mm |
| Moment | kN·m per metre width (N·mm in section formulas) |
| Steel area | mm² per metre width |
| Stress | N/mm² |

All quantities are per 1000 mm strip of slab. Moments are sagging positive.

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output.push_str(r#"## How to Audit

1. Find the equation you want to verify in the sections above
2. Check the **Reference** for the clause in BS 8110 or Eurocode 2
3. Click the **Source** link to view the implementation code
4. Run `cargo test` to verify equations against worked values
"#);

    output
}

// ============================================================================
// Tests
// ============================================================================
