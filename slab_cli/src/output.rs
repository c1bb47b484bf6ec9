use std::fmt::{self, Write};

use chrono::Local;
use slab_core::equations::EquationTracker;
use slab_core::materials::{BarSize, ConcreteGrade, SteelGrade};
use slab_core::{CalculationReport, DesignInput, DesignResponse, DesignResult};

use crate::cli::OutputFormat;

fn stamp() -> String {
    format!(
        "slabcalc {} | {}",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d %H:%M")
    )
}

/// Render a computed design in the requested format
pub fn render_design(
    format: OutputFormat,
    input: &DesignInput,
    result: DesignResult,
    tracker: EquationTracker,
) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Text => {
            let report = CalculationReport::new(input, &result);
            format!("{}\n{}", stamp(), report.to_text())
        }
        OutputFormat::Markdown => {
            let report = CalculationReport::new(input, &result).with_equations(tracker);
            format!("_{}_\n\n{}", stamp(), report.to_markdown())
        }
        OutputFormat::Json => serde_json::to_string_pretty(&DesignResponse::Success { result })?,
    };
    Ok(out)
}

/// Render a failure response; JSON goes to stdout, the rest to stderr
pub fn render_failure(format: OutputFormat, response: &DesignResponse) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(response)?);
    }

    let mut out = String::new();
    for report in response.errors() {
        writeln!(out, "error [{}]: {}", report.code, report.message)?;
    }
    Ok(out)
}

/// Catalog listing for the `grades` command
pub fn render_grades() -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Concrete grades:")?;
    for grade in ConcreteGrade::ALL {
        let props = grade.properties();
        writeln!(
            out,
            "  {:<4} fck = {:>4.0} N/mm²   fctm = {:.1} N/mm²",
            grade, props.fck_mpa, props.fctm_mpa
        )?;
    }

    writeln!(out, "\nSteel grades:")?;
    for grade in SteelGrade::ALL {
        writeln!(out, "  {:<4} fy = {:.0} N/mm²", grade.code(), grade.fy_mpa())?;
    }

    writeln!(out, "\nBars:")?;
    for bar in BarSize::ALL {
        writeln!(out, "  {:<4} {:>3.0} mm   {:>6.1} mm²", bar, bar.diameter_mm(), bar.area_mm2())?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slab_core::CalcError;

    fn limit_failure() -> DesignResponse {
        let errors = vec![
            CalcError::invalid_input("span_m", "14", "Span must be greater than 0 and at most 12 m"),
            CalcError::invalid_input("cover_mm", "10", "Cover must be between 15 mm and 75 mm"),
        ];
        DesignResponse::failures(&errors).unwrap()
    }

    #[test]
    fn grades_lists_every_catalog_entry() {
        let text = render_grades().unwrap();
        for grade in ConcreteGrade::ALL {
            assert!(text.contains(grade.code()));
        }
        assert!(text.contains("fy = 460"));
        assert!(text.contains("Y25"));
    }

    #[test]
    fn text_failure_lists_every_error() {
        let text = render_failure(OutputFormat::Text, &limit_failure()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("error [INVALID_INPUT]:"));
        assert!(lines[1].contains("Cover"));
    }

    #[test]
    fn json_failure_is_the_response() {
        let json: serde_json::Value =
            serde_json::from_str(&render_failure(OutputFormat::Json, &limit_failure()).unwrap()).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["error"]["field"], "span_m");
        assert_eq!(json["additional_errors"][0]["field"], "cover_mm");
    }
}
