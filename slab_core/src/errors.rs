//! # Error Types
//!
//! Structured error types for slab_core. Every failure the calculator can
//! produce is a local validation failure: the input is rejected with enough
//! context for a form, a CLI, or another program to explain what to change.
//!
//! Note that a slab needing compression reinforcement is *not* an error. It is
//! a valid outcome reported through
//! [`FlexuralDesign::RequiresCompressionReinforcement`](crate::calculations::FlexuralDesign).
//!
//! ## Example
//!
//! ```rust
//! use slab_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input("span_m", span_m.to_string(), "Span must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for slab_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for slab design.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling at the boundary.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, zero, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Cover plus half a bar leaves no effective depth
    #[error(
        "Geometry infeasible: thickness {thickness_mm} mm leaves no effective depth \
         after {cover_mm} mm cover and a {bar_diameter_mm} mm bar"
    )]
    GeometryInfeasible {
        thickness_mm: f64,
        cover_mm: f64,
        bar_diameter_mm: f64,
    },

    /// Concrete grade, steel grade or design code not in the catalog
    #[error("Unknown {kind}: '{value}' (supported: {supported})")]
    UnknownGrade {
        kind: String,
        value: String,
        supported: String,
    },

    /// No catalog bar at a permissible spacing provides the governing area
    #[error(
        "No reinforcement solution: {required_area_mm2_per_m:.0} mm²/m cannot be provided \
         by any catalog bar at spacings between {min_spacing_mm} and {max_spacing_mm} mm"
    )]
    NoReinforcementSolution {
        required_area_mm2_per_m: f64,
        min_spacing_mm: f64,
        max_spacing_mm: f64,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownGrade error
    pub fn unknown_grade(kind: impl Into<String>, value: impl Into<String>, supported: impl Into<String>) -> Self {
        CalcError::UnknownGrade {
            kind: kind.into(),
            value: value.into(),
            supported: supported.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::GeometryInfeasible { .. } => "GEOMETRY_INFEASIBLE",
            CalcError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            CalcError::NoReinforcementSolution { .. } => "NO_REINFORCEMENT_SOLUTION",
        }
    }

    /// Name of the input field the error points at, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } => Some(field),
            CalcError::GeometryInfeasible { .. } => Some("thickness_mm"),
            CalcError::UnknownGrade { kind, .. } => Some(kind),
            CalcError::NoReinforcementSolution { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("span_m", "-5", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::unknown_grade("concrete grade", "C90", "C20, C25").error_code(),
            "UNKNOWN_GRADE"
        );
        let geometry = CalcError::GeometryInfeasible {
            thickness_mm: 20.0,
            cover_mm: 20.0,
            bar_diameter_mm: 10.0,
        };
        assert_eq!(geometry.error_code(), "GEOMETRY_INFEASIBLE");
        assert_eq!(geometry.field(), Some("thickness_mm"));
    }

    #[test]
    fn test_messages_are_user_facing() {
        let err = CalcError::NoReinforcementSolution {
            required_area_mm2_per_m: 7696.6,
            min_spacing_mm: 75.0,
            max_spacing_mm: 400.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("7697 mm²/m"));
        assert!(msg.contains("75"));
    }
}
