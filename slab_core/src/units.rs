//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in slab design. They are plain
//! `f64` newtypes that serialize as bare numbers.
//!
//! The design formulas mix kN·m moments with mm section dimensions and N/mm²
//! strengths. Every conversion between those goes through a `From` impl here,
//! so the factor of 10⁶ in `K = M / (b d² fck)` is written exactly once.
//!
//! ## Units
//!
//! - Length: meters (m), millimeters (mm)
//! - Force: kilonewtons (kN), newtons (N)
//! - Moment: kN·m, N·mm
//!
//! ## Example
//!
//! ```rust
//! use slab_core::units::{KnM, Meters, Millimeters, NMm};
//!
//! let span: Millimeters = Meters(4.0).into();
//! assert_eq!(span.0, 4000.0);
//!
//! let moment: NMm = KnM(16.2).into();
//! assert_eq!(moment.0, 16.2e6);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * 1.0e6)
    }
}

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Meters, Millimeters, Kilonewtons, Newtons, KnM, NMm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(4.5).into();
        assert_eq!(mm.value(), 4500.0);
    }

    #[test]
    fn test_moment_normalization() {
        let m: NMm = KnM(1.5).into();
        assert_eq!(m.value(), 1_500_000.0);
    }

    #[test]
    fn test_force_conversion() {
        let v: Newtons = Kilonewtons(16.2).into();
        assert!((v.0 - 16_200.0).abs() < 1e-9);
        let back: Kilonewtons = Newtons(72_415.0).into();
        assert!((back.value() - 72.415).abs() < 1e-9);
    }

    #[test]
    fn test_serialization() {
        let span = Meters(3.5);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, "3.5");
        assert_eq!(serde_json::from_str::<Meters>(&json).unwrap(), span);
    }
}
