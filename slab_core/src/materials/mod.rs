//! # Materials Database
//!
//! Closed catalogs of the materials a slab design can use. Grades are enums,
//! not strings, so an unsupported grade can only enter through the string
//! parsers at the boundary (which return [`CalcError::UnknownGrade`](crate::CalcError)).
//!
//! ## Catalogs
//!
//! - **Concrete**: C20 to C40 with fck and fctm
//! - **Steel**: fy 460 and fy 500
//! - **Bars**: Y8, Y10, Y12, Y16, Y20, Y25
//!
//! ## Example
//!
//! ```rust
//! use slab_core::materials::{BarSize, ConcreteGrade, SteelGrade};
//!
//! let concrete = ConcreteGrade::from_str_flexible("C30").unwrap();
//! assert_eq!(concrete.fck_mpa(), 30.0);
//!
//! let steel: SteelGrade = "500".parse().unwrap();
//! assert_eq!(steel.fy_mpa(), 500.0);
//!
//! assert_eq!(BarSize::Y12.area_mm2(), 113.1);
//! ```

pub mod concrete;
pub mod reinforcement;

pub use concrete::{ConcreteGrade, ConcreteProperties};
pub use reinforcement::{BarSize, SteelGrade, STEEL_ELASTIC_MODULUS_MPA};

use serde::{Deserialize, Serialize};

/// Material properties used by one design, echoed into the result
/// so a report can show every value the formulas consumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Concrete characteristic strength fck (N/mm²)
    pub fck_mpa: f64,
    /// Concrete mean tensile strength fctm (N/mm²)
    pub fctm_mpa: f64,
    /// Steel yield strength fy (N/mm²)
    pub fy_mpa: f64,
    /// Steel modulus of elasticity Es (N/mm²)
    pub es_mpa: f64,
}

impl MaterialProperties {
    /// Collect the properties for a concrete/steel pair
    pub fn new(concrete: ConcreteGrade, steel: SteelGrade) -> Self {
        let props = concrete.properties();
        MaterialProperties {
            fck_mpa: props.fck_mpa,
            fctm_mpa: props.fctm_mpa,
            fy_mpa: steel.fy_mpa(),
            es_mpa: steel.es_mpa(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_properties() {
        let props = MaterialProperties::new(ConcreteGrade::C25, SteelGrade::Fy460);
        assert_eq!(props.fck_mpa, 25.0);
        assert_eq!(props.fctm_mpa, 2.6);
        assert_eq!(props.fy_mpa, 460.0);
        assert_eq!(props.es_mpa, 200_000.0);
    }
}
