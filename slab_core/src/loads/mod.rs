//! Slab loads and ULS load combinations
//!
//! # Overview
//!
//! - [`LoadType`] - Dead (G) and imposed (Q) actions
//! - [`LoadCase`] - Characteristic area loads on the slab (kN/m²)
//! - [`LoadCombination`] - Partial factors for the ultimate limit state
//!
//! The combination to use comes from the [`DesignCode`](crate::DesignCode)
//! of the input, never from a global setting.
//!
//! # Example
//!
//! ```
//! use slab_core::loads::LoadCase;
//! use slab_core::DesignCode;
//!
//! let case = LoadCase::new(3.5, 2.0);
//! let w = DesignCode::Bs8110.uls_combination().apply(&case);
//! assert!((w - 8.1).abs() < 1e-9);
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{bs8110_uls_combination, ec2_uls_combination, LoadCombination};
pub use load_types::LoadType;

use serde::{Deserialize, Serialize};

/// Characteristic (unfactored) area loads on a slab, kN/m²
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadCase {
    /// Dead load G (kN/m²)
    pub dead_kn_m2: f64,
    /// Imposed load Q (kN/m²)
    pub live_kn_m2: f64,
}

impl LoadCase {
    /// Create a load case from G and Q
    pub fn new(dead_kn_m2: f64, live_kn_m2: f64) -> Self {
        LoadCase {
            dead_kn_m2,
            live_kn_m2,
        }
    }

    /// Get the load value for a type
    pub fn get(&self, load_type: LoadType) -> f64 {
        match load_type {
            LoadType::Dead => self.dead_kn_m2,
            LoadType::Live => self.live_kn_m2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_case_get() {
        let case = LoadCase::new(3.5, 2.0);
        assert_eq!(case.get(LoadType::Dead), 3.5);
        assert_eq!(case.get(LoadType::Live), 2.0);
    }

    #[test]
    fn test_load_case_serialization() {
        let case = LoadCase::new(4.0, 1.5);
        let json = serde_json::to_string(&case).unwrap();
        assert!(json.contains("dead_kn_m2"));
        let roundtrip: LoadCase = serde_json::from_str(&json).unwrap();
        assert_eq!(case, roundtrip);
    }
}
