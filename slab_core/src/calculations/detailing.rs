//! # Reinforcement Detailing
//!
//! Chooses a bar size and spacing that provides a governing steel area.
//!
//! Every catalog bar is tried in ascending order. Its spacing is the one that
//! exactly provides the area, rounded down to a 25 mm multiple and limited to
//! the maximum spacing. Spacings below 75 mm cannot be fixed on site, so such
//! options are reported at 75 mm and marked inadequate. The smallest adequate
//! bar is recommended.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::detailing::select_reinforcement;
//! use slab_core::materials::BarSize;
//!
//! let arrangement = select_reinforcement(340.9, 150.0).unwrap();
//! assert_eq!(arrangement.selected.bar, BarSize::Y8);
//! assert_eq!(arrangement.selected.spacing_mm, 125.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::materials::BarSize;

/// Smallest practical bar spacing (mm)
pub const MIN_BAR_SPACING_MM: f64 = 75.0;

/// Absolute maximum main bar spacing in slabs (mm)
pub const ABSOLUTE_MAX_BAR_SPACING_MM: f64 = 400.0;

/// Spacings are detailed in multiples of this increment (mm)
pub const SPACING_INCREMENT_MM: f64 = 25.0;

/// Round a spacing down to the detailing increment
pub fn round_down_spacing(spacing_mm: f64) -> f64 {
    (spacing_mm / SPACING_INCREMENT_MM).floor() * SPACING_INCREMENT_MM
}

/// Maximum main bar spacing, min(3h, 400), rounded down to 25 mm
pub fn max_bar_spacing(thickness_mm: f64) -> f64 {
    round_down_spacing((3.0 * thickness_mm).min(ABSOLUTE_MAX_BAR_SPACING_MM))
}

/// One bar size at the spacing it would need
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarOption {
    /// Bar size
    pub bar: BarSize,

    /// Detailed spacing (mm), a multiple of 25
    pub spacing_mm: f64,

    /// Area provided at that spacing (mm²/m)
    pub area_provided_mm2_per_m: f64,

    /// False when the bar would need spacing below the minimum
    pub adequate: bool,
}

impl BarOption {
    /// Short designation, e.g. "Y12 @ 150"
    pub fn designation(&self) -> String {
        format!("{} @ {:.0}", self.bar, self.spacing_mm)
    }
}

/// Full table of bar options with the recommended one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarArrangement {
    /// Every catalog bar in ascending order
    pub options: Vec<BarOption>,

    /// First adequate option
    pub selected: BarOption,

    /// Maximum spacing applied (mm)
    pub max_spacing_mm: f64,
}

/// Evaluate a single bar size against the required area
pub fn evaluate_bar(bar: BarSize, required_area_mm2_per_m: f64, max_spacing_mm: f64) -> BarOption {
    let exact = bar.area_mm2() * 1000.0 / required_area_mm2_per_m;
    let spacing = round_down_spacing(exact).min(max_spacing_mm);

    let (spacing_mm, adequate) = if spacing < MIN_BAR_SPACING_MM {
        (MIN_BAR_SPACING_MM, false)
    } else {
        (spacing, true)
    };

    BarOption {
        bar,
        spacing_mm,
        area_provided_mm2_per_m: bar.area_per_meter_mm2(spacing_mm),
        adequate,
    }
}

/// Select the smallest catalog bar that provides `required_area_mm2_per_m`.
///
/// # Errors
///
/// [`CalcError::NoReinforcementSolution`] when no bar works at a spacing
/// between 75 mm and the maximum spacing for the thickness.
pub fn select_reinforcement(required_area_mm2_per_m: f64, thickness_mm: f64) -> CalcResult<BarArrangement> {
    let max_spacing_mm = max_bar_spacing(thickness_mm);

    let options: Vec<BarOption> = BarSize::ALL
        .iter()
        .map(|&bar| evaluate_bar(bar, required_area_mm2_per_m, max_spacing_mm))
        .collect();

    for option in &options {
        debug!(
            bar = %option.bar,
            spacing_mm = option.spacing_mm,
            area_provided = option.area_provided_mm2_per_m,
            adequate = option.adequate,
            "bar option"
        );
    }

    match options.iter().find(|o| o.adequate).copied() {
        Some(selected) => Ok(BarArrangement {
            options,
            selected,
            max_spacing_mm,
        }),
        None => {
            warn!(required_area_mm2_per_m, max_spacing_mm, "no bar arrangement fits");
            Err(CalcError::NoReinforcementSolution {
                required_area_mm2_per_m,
                min_spacing_mm: MIN_BAR_SPACING_MM,
                max_spacing_mm,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_down_spacing() {
        assert_eq!(round_down_spacing(147.6), 125.0);
        assert_eq!(round_down_spacing(150.0), 150.0);
        assert_eq!(round_down_spacing(74.9), 50.0);
    }

    #[test]
    fn test_max_bar_spacing() {
        assert_eq!(max_bar_spacing(150.0), 400.0);
        assert_eq!(max_bar_spacing(120.0), 350.0);
        // 3 x 110 = 330, rounded down
        assert_eq!(max_bar_spacing(110.0), 325.0);
    }

    #[test]
    fn test_scenario_selects_y8() {
        // Y8: 50.3 * 1000 / 340.88 = 147.6 -> 125 mm
        let arrangement = select_reinforcement(340.88, 150.0).unwrap();
        assert_eq!(arrangement.options.len(), BarSize::ALL.len());
        assert_eq!(arrangement.selected.bar, BarSize::Y8);
        assert_eq!(arrangement.selected.spacing_mm, 125.0);
        assert!((arrangement.selected.area_provided_mm2_per_m - 402.4).abs() < 1e-9);
        assert_eq!(arrangement.selected.designation(), "Y8 @ 125");
    }

    #[test]
    fn test_options_capped_at_max_spacing() {
        let arrangement = select_reinforcement(340.88, 150.0).unwrap();
        // Y25 would need 1440 mm; capped at 400
        let y25 = arrangement.options.iter().find(|o| o.bar == BarSize::Y25).unwrap();
        assert_eq!(y25.spacing_mm, 400.0);
        assert!(y25.adequate);
    }

    #[test]
    fn test_provided_area_never_below_required() {
        for required in [150.0, 195.0, 341.0, 700.0, 1500.0, 3000.0] {
            let arrangement = select_reinforcement(required, 250.0).unwrap();
            for option in arrangement.options.iter().filter(|o| o.adequate) {
                assert!(
                    option.area_provided_mm2_per_m >= required,
                    "{} gives {} < {}",
                    option.designation(),
                    option.area_provided_mm2_per_m,
                    required
                );
            }
        }
    }

    #[test]
    fn test_small_bars_skipped_when_too_close() {
        // Y8 needs 50.3e3 / 1000 = 50 mm, below the 75 mm minimum
        let arrangement = select_reinforcement(1000.0, 250.0).unwrap();
        let y8 = arrangement.options[0];
        assert_eq!(y8.bar, BarSize::Y8);
        assert!(!y8.adequate);
        assert_eq!(y8.spacing_mm, 75.0);
        // Y10: 78.5 mm -> 75 mm is adequate
        assert_eq!(arrangement.selected.bar, BarSize::Y10);
        assert_eq!(arrangement.selected.spacing_mm, 75.0);
    }

    #[test]
    fn test_no_solution() {
        // Y25 at 75 mm gives 6545 mm²/m
        let err = select_reinforcement(7000.0, 400.0).unwrap_err();
        assert_eq!(err.error_code(), "NO_REINFORCEMENT_SOLUTION");
        match err {
            CalcError::NoReinforcementSolution {
                min_spacing_mm,
                max_spacing_mm,
                ..
            } => {
                assert_eq!(min_spacing_mm, 75.0);
                assert_eq!(max_spacing_mm, 400.0);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_thin_slab_has_no_valid_spacing() {
        // 3h = 60 mm rounds to 50 mm, below the minimum spacing
        assert!(select_reinforcement(100.0, 20.0).is_err());
    }
}
