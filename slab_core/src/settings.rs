//! # Calculator Settings
//!
//! Explicit settings for a calculator session: the default code basis, the
//! default bar diameter assumption, and practical input limits. The library
//! never reads settings from the environment; callers build them (the CLI
//! loads them from TOML) and pass them in.
//!
//! ```rust
//! use slab_core::settings::CalculatorSettings;
//! use slab_core::DesignCode;
//!
//! let settings: CalculatorSettings = serde_json::from_str(r#"{ "code": "EC2" }"#).unwrap();
//! assert_eq!(settings.code, DesignCode::Eurocode2);
//! assert_eq!(settings.bar_diameter_mm, 10.0);
//! assert!(settings.enforce_limits);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{DesignInput, DEFAULT_BAR_DIAMETER_MM};
use crate::design_code::DesignCode;
use crate::errors::CalcError;

/// Practical bounds on inputs, beyond the physical validity checks in
/// [`DesignInput::validate`].
///
/// Inputs outside these bounds are computable but unusual for a one-way
/// solid slab, so interactive front ends reject them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Longest span accepted (m)
    pub max_span_m: f64,
    /// Largest dead load accepted (kN/m²)
    pub max_dead_load_kn_m2: f64,
    /// Largest imposed load accepted (kN/m²)
    pub max_live_load_kn_m2: f64,
    /// Smallest nominal cover accepted (mm)
    pub min_cover_mm: f64,
    /// Largest nominal cover accepted (mm)
    pub max_cover_mm: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        InputLimits {
            max_span_m: 12.0,
            max_dead_load_kn_m2: 50.0,
            max_live_load_kn_m2: 20.0,
            min_cover_mm: 15.0,
            max_cover_mm: 75.0,
        }
    }
}

impl InputLimits {
    /// Every limit violation in `input`, in field order. Empty when all pass.
    pub fn check(&self, input: &DesignInput) -> Vec<CalcError> {
        let mut errors = Vec::new();

        if input.span_m <= 0.0 || input.span_m > self.max_span_m {
            errors.push(CalcError::invalid_input(
                "span_m",
                input.span_m.to_string(),
                format!("Span must be greater than 0 and at most {} m", self.max_span_m),
            ));
        }
        if input.dead_load_kn_m2 < 0.0 || input.dead_load_kn_m2 > self.max_dead_load_kn_m2 {
            errors.push(CalcError::invalid_input(
                "dead_load_kn_m2",
                input.dead_load_kn_m2.to_string(),
                format!("Dead load must be between 0 and {} kN/m²", self.max_dead_load_kn_m2),
            ));
        }
        if input.live_load_kn_m2 < 0.0 || input.live_load_kn_m2 > self.max_live_load_kn_m2 {
            errors.push(CalcError::invalid_input(
                "live_load_kn_m2",
                input.live_load_kn_m2.to_string(),
                format!("Live load must be between 0 and {} kN/m²", self.max_live_load_kn_m2),
            ));
        }
        if input.cover_mm < self.min_cover_mm || input.cover_mm > self.max_cover_mm {
            errors.push(CalcError::invalid_input(
                "cover_mm",
                input.cover_mm.to_string(),
                format!("Cover must be between {} mm and {} mm", self.min_cover_mm, self.max_cover_mm),
            ));
        }

        errors
    }
}

/// Settings shared by every calculation in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Code basis used when a request does not name one
    pub code: DesignCode,

    /// Bar diameter assumed when a request does not give one (mm)
    pub bar_diameter_mm: f64,

    /// Reject inputs outside `limits` before computing
    pub enforce_limits: bool,

    pub limits: InputLimits,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            code: DesignCode::default(),
            bar_diameter_mm: DEFAULT_BAR_DIAMETER_MM,
            enforce_limits: true,
            limits: InputLimits::default(),
        }
    }
}

impl CalculatorSettings {
    /// Limit violations for `input`, or none when limits are not enforced
    pub fn limit_violations(&self, input: &DesignInput) -> Vec<CalcError> {
        if self.enforce_limits {
            self.limits.check(input)
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{ConcreteGrade, SteelGrade};

    fn input() -> DesignInput {
        DesignInput::new(4.0, 150.0, 3.5, 2.0, ConcreteGrade::C25, SteelGrade::Fy460, 20.0)
    }

    #[test]
    fn test_scenario_within_limits() {
        assert!(InputLimits::default().check(&input()).is_empty());
    }

    #[test]
    fn test_all_violations_reported() {
        let mut bad = input();
        bad.span_m = 15.0;
        bad.dead_load_kn_m2 = 60.0;
        bad.live_load_kn_m2 = 25.0;
        bad.cover_mm = 10.0;

        let errors = InputLimits::default().check(&bad);
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, vec!["span_m", "dead_load_kn_m2", "live_load_kn_m2", "cover_mm"]);
        assert!(errors.iter().all(|e| e.error_code() == "INVALID_INPUT"));
    }

    #[test]
    fn test_limit_boundaries_inclusive() {
        let mut edge = input();
        edge.span_m = 12.0;
        edge.dead_load_kn_m2 = 50.0;
        edge.live_load_kn_m2 = 20.0;
        edge.cover_mm = 75.0;
        assert!(InputLimits::default().check(&edge).is_empty());

        edge.cover_mm = 15.0;
        assert!(InputLimits::default().check(&edge).is_empty());
    }

    #[test]
    fn test_limits_not_enforced() {
        let settings = CalculatorSettings {
            enforce_limits: false,
            ..CalculatorSettings::default()
        };
        let mut bad = input();
        bad.cover_mm = 5.0;
        assert!(settings.limit_violations(&bad).is_empty());
        assert_eq!(CalculatorSettings::default().limit_violations(&bad).len(), 1);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: CalculatorSettings =
            serde_json::from_str(r#"{ "bar_diameter_mm": 12.0, "limits": { "max_span_m": 8.0 } }"#).unwrap();
        assert_eq!(settings.code, DesignCode::Bs8110);
        assert_eq!(settings.bar_diameter_mm, 12.0);
        assert_eq!(settings.limits.max_span_m, 8.0);
        assert_eq!(settings.limits.min_cover_mm, 15.0);
    }
}
