//! Ultimate Limit State Load Combinations
//!
//! One combination per code basis. A simply supported one-way slab under
//! uniform load has a single governing ULS case, so there is no search over
//! alternatives as there is for multi-action building codes.
//!
//! - BS 8110 Table 2.1: 1.4G + 1.6Q
//! - EC2 / EN 1990 Expression 6.10: 1.35G + 1.5Q

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use super::LoadCase;

/// A load combination with factors for each load type
///
/// Factors are held in a `BTreeMap` so the factored sum is always evaluated
/// in the same order.
///
/// # Example
/// ```
/// use slab_core::loads::{LoadCombination, LoadCase, LoadType};
///
/// let combo = LoadCombination::new("BS8110-ULS", "1.4G + 1.6Q")
///     .with_factor(LoadType::Dead, 1.4)
///     .with_factor(LoadType::Live, 1.6);
///
/// let case = LoadCase::new(3.5, 2.0);
/// assert!((combo.apply(&case) - 8.1).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "BS8110-ULS")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.4G + 1.6Q")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: BTreeMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: BTreeMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a LoadCase, returning the factored area load (kN/m²)
    pub fn apply(&self, case: &LoadCase) -> f64 {
        self.factors
            .iter()
            .map(|(load_type, factor)| factor * case.get(*load_type))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }
}

/// BS 8110-1 Table 2.1, dead and imposed: 1.4G + 1.6Q
pub fn bs8110_uls_combination() -> LoadCombination {
    LoadCombination::new("BS8110-ULS", "1.4G + 1.6Q")
        .with_factor(LoadType::Dead, 1.4)
        .with_factor(LoadType::Live, 1.6)
}

/// EN 1990 Expression 6.10 with UK NA factors: 1.35G + 1.5Q
pub fn ec2_uls_combination() -> LoadCombination {
    LoadCombination::new("EC2-6.10", "1.35G + 1.5Q")
        .with_factor(LoadType::Dead, 1.35)
        .with_factor(LoadType::Live, 1.5)
}
