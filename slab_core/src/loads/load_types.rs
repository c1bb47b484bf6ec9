//! Load type definitions
//!
//! Slabs in this crate carry two actions: permanent (dead) load G and
//! variable (imposed/live) load Q, both as uniform area loads in kN/m².

use serde::{Deserialize, Serialize};

/// Load types acting on a slab
///
/// # Example
/// ```
/// use slab_core::loads::LoadType;
///
/// assert_eq!(LoadType::Dead.code(), "G");
/// assert_eq!(LoadType::Live.description(), "Imposed (live) load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoadType {
    /// G - Permanent action (self-weight, finishes, services)
    Dead,
    /// Q - Variable action (occupancy)
    Live,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 2] = [LoadType::Dead, LoadType::Live];

    /// Standard symbol used in combination equations
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "G",
            LoadType::Live => "Q",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Imposed (live) load",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_type_codes() {
        assert_eq!(LoadType::Dead.code(), "G");
        assert_eq!(LoadType::Live.code(), "Q");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadType::Live).unwrap();
        assert_eq!(json, "\"Live\"");
        let parsed: LoadType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LoadType::Live);
    }
}
