//! # Calculation Report
//!
//! Step-by-step presentation of a [`DesignResult`]: each step shows the
//! formula, the numbers substituted into it, the result with units, and the
//! clause it comes from. Rendered as plain text for terminals or Markdown for
//! a calculation sheet.
//!
//! ```rust
//! use slab_core::calculations::{compute_traced, DesignInput};
//! use slab_core::equations::EquationTracker;
//! use slab_core::materials::{ConcreteGrade, SteelGrade};
//! use slab_core::report::CalculationReport;
//!
//! let input = DesignInput::new(4.0, 150.0, 3.5, 2.0, ConcreteGrade::C25, SteelGrade::Fy460, 20.0);
//! let mut tracker = EquationTracker::new();
//! let result = compute_traced(&input, &mut tracker).unwrap();
//!
//! let report = CalculationReport::new(&input, &result).with_equations(tracker);
//! assert!(report.to_markdown().contains("Appendix: List of Equations"));
//! assert!(report.to_text().contains("M = wL²/8"));
//! ```

use std::fmt::Write;

use serde::Serialize;

use crate::calculations::{DesignInput, DesignResult, FlexuralDesign, ReinforcementDesign, STRIP_WIDTH_MM};
use crate::design_code::DesignCode;
use crate::equations::{Equation, EquationTracker};
use crate::loads::LoadType;

/// One line of working in the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStep {
    pub title: String,
    pub formula: String,
    pub substitution: String,
    pub result: String,
    pub reference: String,
}

impl ReportStep {
    fn new(
        title: impl Into<String>,
        formula: impl Into<String>,
        substitution: impl Into<String>,
        result: impl Into<String>,
        equation: Option<Equation>,
    ) -> Self {
        ReportStep {
            title: title.into(),
            formula: formula.into(),
            substitution: substitution.into(),
            result: result.into(),
            reference: equation
                .map(|eq| eq.metadata().reference.citation())
                .unwrap_or_default(),
        }
    }
}

/// Formatted report of one design
#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub title: String,
    pub code: DesignCode,
    /// Input summary as (label, value) pairs
    pub inputs: Vec<(String, String)>,
    pub steps: Vec<ReportStep>,
    /// Bar options table: (designation, area provided, adequate)
    pub bar_options: Vec<(String, String, bool)>,
    pub notes: Vec<String>,
    pub status: String,
    #[serde(skip)]
    equations: EquationTracker,
}

impl CalculationReport {
    /// Build the report steps from an input and its result
    pub fn new(input: &DesignInput, result: &DesignResult) -> Self {
        let inputs = vec![
            ("Code".to_string(), result.code.display_name().to_string()),
            ("Span L".to_string(), format!("{:.2} m", input.span_m)),
            ("Thickness h".to_string(), format!("{:.0} mm", input.thickness_mm)),
            ("Dead load G".to_string(), format!("{:.2} kN/m²", input.dead_load_kn_m2)),
            ("Live load Q".to_string(), format!("{:.2} kN/m²", input.live_load_kn_m2)),
            (
                "Concrete".to_string(),
                format!("{} (fck = {} N/mm²)", input.concrete.code(), result.materials.fck_mpa),
            ),
            ("Steel".to_string(), input.steel.to_string()),
            ("Cover".to_string(), format!("{:.0} mm", input.cover_mm)),
            ("Assumed bar Ø".to_string(), format!("{:.0} mm", input.bar_diameter_mm)),
            ("Strip width b".to_string(), format!("{:.0} mm", STRIP_WIDTH_MM)),
        ];

        let mut steps = Self::common_steps(input, result);
        let mut bar_options = Vec::new();

        match &result.flexure {
            FlexuralDesign::SinglyReinforced(design) => {
                steps.extend(Self::reinforcement_steps(input, result, design));
                bar_options = design
                    .arrangement
                    .options
                    .iter()
                    .map(|o| {
                        (
                            o.designation(),
                            format!("{:.0} mm²/m", o.area_provided_mm2_per_m),
                            o.adequate,
                        )
                    })
                    .collect();
            }
            FlexuralDesign::RequiresCompressionReinforcement { k_factor, k_limit } => {
                steps.push(ReportStep::new(
                    "Section classification",
                    "K > K'",
                    format!("{:.4} > {:.3}", k_factor, k_limit),
                    "Compression reinforcement required",
                    None,
                ));
            }
        }

        CalculationReport {
            title: "One-Way Slab Design".to_string(),
            code: result.code,
            inputs,
            steps,
            bar_options,
            notes: result.notes.clone(),
            status: result.status().to_string(),
            equations: EquationTracker::new(),
        }
    }

    /// Attach the equations recorded during the calculation for the appendix
    pub fn with_equations(mut self, tracker: EquationTracker) -> Self {
        self.equations = tracker;
        self
    }

    fn common_steps(input: &DesignInput, result: &DesignResult) -> Vec<ReportStep> {
        let combo = &result.load_combination;
        let gamma_g = combo.get_factor(LoadType::Dead);
        let gamma_q = combo.get_factor(LoadType::Live);
        let load_equation = match result.code {
            DesignCode::Bs8110 => Equation::Bs8110UltimateLoad,
            DesignCode::Eurocode2 => Equation::Ec2UltimateLoad,
        };

        vec![
            ReportStep::new(
                "Ultimate design load",
                format!("w = {}", combo.equation),
                format!(
                    "{} × {:.2} + {} × {:.2}",
                    gamma_g, input.dead_load_kn_m2, gamma_q, input.live_load_kn_m2
                ),
                format!("{:.2} kN/m²", result.design_load_kn_m2),
                Some(load_equation),
            ),
            ReportStep::new(
                "Design moment",
                "M = wL²/8",
                format!("{:.2} × {:.2}² / 8", result.design_load_kn_m2, input.span_m),
                format!("{:.2} kN·m/m", result.design_moment_knm_per_m),
                Some(Equation::UniformLoadMaxMoment),
            ),
            ReportStep::new(
                "Effective depth",
                "d = h - c - Ø/2",
                format!("{:.0} - {:.0} - {:.0}/2", input.thickness_mm, input.cover_mm, input.bar_diameter_mm),
                format!("{:.1} mm", result.effective_depth_mm),
                Some(Equation::EffectiveDepth),
            ),
            ReportStep::new(
                "Moment factor",
                "K = M / (b d² fck)",
                format!(
                    "{:.2}×10⁶ / ({:.0} × {:.1}² × {})",
                    result.design_moment_knm_per_m, STRIP_WIDTH_MM, result.effective_depth_mm, result.materials.fck_mpa
                ),
                format!("{:.4} (K' = {:.3})", result.k_factor, result.k_limit),
                Some(Equation::KFactor),
            ),
        ]
    }

    fn reinforcement_steps(
        input: &DesignInput,
        result: &DesignResult,
        design: &ReinforcementDesign,
    ) -> Vec<ReportStep> {
        let d = result.effective_depth_mm;
        let fy = result.materials.fy_mpa;
        let selected = &design.arrangement.selected;
        let mut steps = Vec::new();

        steps.push(ReportStep::new(
            "Lever arm",
            "z = d[0.5 + √(0.25 - K/1.134)] ≤ 0.95d",
            format!("{:.1} × [0.5 + √(0.25 - {:.4}/1.134)]", d, result.k_factor),
            if design.lever_arm_capped {
                format!("{:.2} mm (limited to 0.95d)", design.lever_arm_mm)
            } else {
                format!("{:.2} mm", design.lever_arm_mm)
            },
            Some(Equation::LeverArm),
        ));

        steps.push(ReportStep::new(
            "Required tension steel",
            "As,req = M / (0.87 fy z)",
            format!(
                "{:.2}×10⁶ / (0.87 × {} × {:.2})",
                result.design_moment_knm_per_m, fy, design.lever_arm_mm
            ),
            format!("{:.0} mm²/m", design.required_area_mm2_per_m),
            Some(Equation::RequiredTensionSteel),
        ));

        steps.push(match result.code {
            DesignCode::Bs8110 => ReportStep::new(
                "Minimum steel",
                "As,min = 0.0013 b h",
                format!("0.0013 × {:.0} × {:.0}", STRIP_WIDTH_MM, input.thickness_mm),
                format!("{:.0} mm²/m", design.minimum_area_mm2_per_m),
                Some(Equation::Bs8110MinimumSteel),
            ),
            DesignCode::Eurocode2 => ReportStep::new(
                "Minimum steel",
                "As,min = 0.26 (fctm/fyk) b d ≥ 0.0013 b d",
                format!(
                    "0.26 × ({}/{}) × {:.0} × {:.1}",
                    result.materials.fctm_mpa, fy, STRIP_WIDTH_MM, d
                ),
                format!("{:.0} mm²/m", design.minimum_area_mm2_per_m),
                Some(Equation::Ec2MinimumSteel),
            ),
        });

        steps.push(ReportStep::new(
            "Governing steel area",
            "As = max(As,req, As,min)",
            format!(
                "max({:.0}, {:.0})",
                design.required_area_mm2_per_m, design.minimum_area_mm2_per_m
            ),
            if design.minimum_governed {
                format!("{:.0} mm²/m (minimum governs)", design.governing_area_mm2_per_m)
            } else {
                format!("{:.0} mm²/m", design.governing_area_mm2_per_m)
            },
            None,
        ));

        steps.push(ReportStep::new(
            "Reinforcement",
            "s = 1000 Ab / As, 75 ≤ s ≤ min(3h, 400)",
            format!(
                "1000 × {} / {:.0}, s,max = {:.0}",
                selected.bar.area_mm2(),
                design.governing_area_mm2_per_m,
                design.arrangement.max_spacing_mm
            ),
            format!(
                "{} ({:.0} mm²/m provided)",
                selected.designation(),
                selected.area_provided_mm2_per_m
            ),
            Some(Equation::BarSpacing),
        ));

        let deflection = &design.deflection;
        let verdict = |ok: bool| if ok { "OK" } else { "FAIL" };
        let (deflection_formula, deflection_equation) = match result.code {
            DesignCode::Bs8110 => ("L/d ≤ 20 × MF", Equation::Bs8110SpanDepthCheck),
            DesignCode::Eurocode2 => ("L/d ≤ (l/d)basic × 310/σs", Equation::Ec2SpanDepthCheck),
        };
        steps.push(ReportStep::new(
            "Deflection",
            deflection_formula,
            format!(
                "{:.0} / {:.1} = {:.1} vs {:.1} × {:.3}",
                input.span_m * 1000.0,
                d,
                deflection.actual_span_depth,
                deflection.basic_span_depth,
                deflection.modification_factor
            ),
            format!(
                "{:.1} ≤ {:.1}: {}",
                deflection.actual_span_depth,
                deflection.allowable_span_depth,
                verdict(deflection.passes)
            ),
            Some(deflection_equation),
        ));

        let shear = &design.shear;
        let shear_equation = match result.code {
            DesignCode::Bs8110 => Equation::Bs8110ConcreteShear,
            DesignCode::Eurocode2 => Equation::Ec2ConcreteShear,
        };
        let (shear_formula, shear_substitution) = match shear.max_shear_stress_mpa {
            Some(v_max) => (
                "V = wL/2, v = V/(bd) ≤ vc, v ≤ vmax",
                format!(
                    "V = {:.2} kN/m, v = {:.3} N/mm², vc = {:.3} N/mm², vmax = {:.2} N/mm²",
                    shear.shear_force_kn_per_m, shear.shear_stress_mpa, shear.concrete_shear_stress_mpa, v_max
                ),
            ),
            None => (
                "V = wL/2, v = V/(bd) ≤ vc",
                format!(
                    "V = {:.2} kN/m, v = {:.3} N/mm², vc = {:.3} N/mm²",
                    shear.shear_force_kn_per_m, shear.shear_stress_mpa, shear.concrete_shear_stress_mpa
                ),
            ),
        };
        steps.push(ReportStep::new(
            "Shear",
            shear_formula,
            shear_substitution,
            format!(
                "capacity {:.1} kN/m: {}",
                shear.shear_capacity_kn_per_m,
                verdict(shear.passes)
            ),
            Some(shear_equation),
        ));

        steps
    }

    /// Plain text rendering for terminals
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(64);

        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "{} ({})", self.title.to_uppercase(), self.code.display_name());
        let _ = writeln!(out, "{}", rule);

        for (label, value) in &self.inputs {
            let _ = writeln!(out, "  {:<16} {}", label, value);
        }
        let _ = writeln!(out);

        for (i, step) in self.steps.iter().enumerate() {
            if step.reference.is_empty() {
                let _ = writeln!(out, "{:>2}. {}", i + 1, step.title);
            } else {
                let _ = writeln!(out, "{:>2}. {}  [{}]", i + 1, step.title, step.reference);
            }
            let _ = writeln!(out, "    {}", step.formula);
            let _ = writeln!(out, "      = {}", step.substitution);
            let _ = writeln!(out, "      = {}", step.result);
        }

        if !self.bar_options.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Bar options:");
            for (designation, area, adequate) in &self.bar_options {
                let mark = if *adequate { "" } else { "  (spacing below 75 mm)" };
                let _ = writeln!(out, "  {:<12} {:>12}{}", designation, area, mark);
            }
        }

        if !self.notes.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Notes:");
            for note in &self.notes {
                let _ = writeln!(out, "  - {}", note);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Status: {}", self.status);
        out
    }

    /// Markdown calculation sheet with an equation appendix
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# {}\n", self.title);
        let _ = writeln!(out, "**Code:** {}\n", self.code.display_name());

        let _ = writeln!(out, "## Input\n");
        let _ = writeln!(out, "| Parameter | Value |");
        let _ = writeln!(out, "|-----------|-------|");
        for (label, value) in &self.inputs {
            let _ = writeln!(out, "| {} | {} |", label, value);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "## Calculation\n");
        for (i, step) in self.steps.iter().enumerate() {
            let _ = writeln!(out, "### {}. {}\n", i + 1, step.title);
            let _ = writeln!(out, "`{}`\n", step.formula);
            let _ = writeln!(out, "= {}\n", step.substitution);
            let _ = writeln!(out, "= **{}**\n", step.result);
            if !step.reference.is_empty() {
                let _ = writeln!(out, "_Ref: {}_\n", step.reference);
            }
        }

        if !self.bar_options.is_empty() {
            let _ = writeln!(out, "## Bar Options\n");
            let _ = writeln!(out, "| Bars | Area provided | Adequate |");
            let _ = writeln!(out, "|------|---------------|----------|");
            for (designation, area, adequate) in &self.bar_options {
                let _ = writeln!(out, "| {} | {} | {} |", designation, area, if *adequate { "yes" } else { "no" });
            }
            let _ = writeln!(out);
        }

        if !self.notes.is_empty() {
            let _ = writeln!(out, "## Notes\n");
            for note in &self.notes {
                let _ = writeln!(out, "- {}", note);
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "**Status:** {}\n", self.status);

        if !self.equations.is_empty() {
            out.push_str(&self.equations.generate_appendix_markdown());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{compute, compute_traced};
    use crate::materials::{ConcreteGrade, SteelGrade};

    fn scenario() -> DesignInput {
        DesignInput::new(4.0, 150.0, 3.5, 2.0, ConcreteGrade::C25, SteelGrade::Fy460, 20.0)
    }

    #[test]
    fn test_steps_for_singly_reinforced() {
        let input = scenario();
        let result = compute(&input).unwrap();
        let report = CalculationReport::new(&input, &result);

        let titles: Vec<&str> = report.steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Ultimate design load",
                "Design moment",
                "Effective depth",
                "Moment factor",
                "Lever arm",
                "Required tension steel",
                "Minimum steel",
                "Governing steel area",
                "Reinforcement",
                "Deflection",
                "Shear",
            ]
        );
        assert_eq!(report.steps[0].result, "8.10 kN/m²");
        assert_eq!(report.steps[1].result, "16.20 kN·m/m");
        assert_eq!(report.steps[4].result, "118.75 mm (limited to 0.95d)");
        assert_eq!(report.steps[0].reference, "BS 8110-1:1997 Table 2.1");
        assert_eq!(report.bar_options.len(), 6);
    }

    #[test]
    fn test_shear_step_shows_vmax_for_bs8110() {
        let input = scenario();
        let report = CalculationReport::new(&input, &compute(&input).unwrap());
        let shear = report.steps.last().unwrap();
        assert_eq!(shear.formula, "V = wL/2, v = V/(bd) ≤ vc, v ≤ vmax");
        // 0.8 × √25 = 4.0, below the 5 N/mm² ceiling
        assert!(shear.substitution.ends_with("vmax = 4.00 N/mm²"));

        let input = scenario().with_code(DesignCode::Eurocode2);
        let report = CalculationReport::new(&input, &compute(&input).unwrap());
        let shear = report.steps.last().unwrap();
        assert_eq!(shear.formula, "V = wL/2, v = V/(bd) ≤ vc");
        assert!(!shear.substitution.contains("vmax"));
    }

    #[test]
    fn test_compression_report() {
        let input = DesignInput::new(8.0, 150.0, 10.0, 5.0, ConcreteGrade::C25, SteelGrade::Fy460, 20.0);
        let result = compute(&input).unwrap();
        let report = CalculationReport::new(&input, &result);

        assert_eq!(report.steps.len(), 5);
        assert!(report.bar_options.is_empty());
        let text = report.to_text();
        assert!(text.contains("Compression reinforcement required"));
        assert!(!text.contains("Bar options"));
    }

    #[test]
    fn test_text_rendering() {
        let input = scenario();
        let result = compute(&input).unwrap();
        let text = CalculationReport::new(&input, &result).to_text();

        assert!(text.contains("ONE-WAY SLAB DESIGN (BS 8110-1:1997)"));
        assert!(text.contains("Y8 @ 125"));
        assert!(text.contains("Deflection check fails"));
        // Every option fits at 75 mm or more in this case
        assert!(!text.contains("spacing below 75 mm"));
    }

    #[test]
    fn test_markdown_with_appendix() {
        let input = scenario().with_code(DesignCode::Eurocode2);
        let mut tracker = EquationTracker::new();
        let result = compute_traced(&input, &mut tracker).unwrap();
        let md = CalculationReport::new(&input, &result).with_equations(tracker).to_markdown();

        assert!(md.starts_with("# One-Way Slab Design"));
        assert!(md.contains("| Span L | 4.00 m |"));
        assert!(md.contains("## Bar Options"));
        assert!(md.contains("BS EN 1992-1-1 Expression 9.1N"));
        assert!(md.contains("## Appendix: List of Equations"));
        assert!(md.contains("**Status:** Adequate"));
    }

    #[test]
    fn test_markdown_without_tracker_has_no_appendix() {
        let input = scenario();
        let result = compute(&input).unwrap();
        let md = CalculationReport::new(&input, &result).to_markdown();
        assert!(!md.contains("Appendix"));
    }
}
