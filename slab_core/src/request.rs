//! # Request and Response Records
//!
//! The shape a design arrives in from a form or JSON body, and the
//! discriminated response sent back. Grades arrive as loose strings
//! ("c25", "C25/30", 460, "B500") and are mapped onto the closed catalogs
//! here, so [`DesignInput`] only ever holds valid grades.
//!
//! ## JSON Example
//!
//! ```rust
//! use slab_core::request::{respond, DesignRequest, DesignResponse};
//!
//! let request: DesignRequest = serde_json::from_str(r#"{
//!     "span": 4.0,
//!     "thickness": 150,
//!     "dead_load": 3.5,
//!     "live_load": 2.0,
//!     "concrete_grade": "C25",
//!     "steel_grade": 460,
//!     "cover": 20
//! }"#).unwrap();
//!
//! match respond(&request) {
//!     DesignResponse::Success { result } => assert!(result.design_moment_knm_per_m > 16.0),
//!     DesignResponse::Failure { error, .. } => panic!("{}", error.message),
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{compute, compute_traced, DesignInput, DesignResult};
use crate::design_code::DesignCode;
use crate::equations::EquationTracker;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConcreteGrade, SteelGrade};
use crate::settings::CalculatorSettings;

/// A grade given either as text or as a bare number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for GradeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeValue::Number(n) => write!(f, "{}", n),
            GradeValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for GradeValue {
    fn from(s: &str) -> Self {
        GradeValue::Text(s.to_string())
    }
}

/// Design request as received at the boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Span (m)
    pub span: f64,
    /// Slab thickness (mm)
    pub thickness: f64,
    /// Dead load (kN/m²)
    pub dead_load: f64,
    /// Live load (kN/m²)
    pub live_load: f64,
    /// Concrete grade, e.g. "C25"
    pub concrete_grade: String,
    /// Steel grade, e.g. "460" or 500
    pub steel_grade: GradeValue,
    /// Cover (mm)
    pub cover: f64,
    /// Assumed bar diameter (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_diameter: Option<f64>,
    /// "BS8110" or "EC2"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl DesignRequest {
    /// Map onto a [`DesignInput`] using the library defaults for omitted fields
    pub fn to_input(&self) -> CalcResult<DesignInput> {
        self.to_input_with(&CalculatorSettings::default())
    }

    /// Map onto a [`DesignInput`], filling omitted fields from `settings`
    ///
    /// # Errors
    ///
    /// [`CalcError::UnknownGrade`] for a concrete grade, steel grade, or
    /// code basis outside the catalogs.
    pub fn to_input_with(&self, settings: &CalculatorSettings) -> CalcResult<DesignInput> {
        let concrete = ConcreteGrade::from_str_flexible(&self.concrete_grade)?;
        let steel = SteelGrade::from_str_flexible(&self.steel_grade.to_string())?;
        let code = match &self.code {
            Some(code) => DesignCode::from_str_flexible(code)?,
            None => settings.code,
        };

        Ok(DesignInput {
            span_m: self.span,
            thickness_mm: self.thickness,
            dead_load_kn_m2: self.dead_load,
            live_load_kn_m2: self.live_load,
            concrete,
            steel,
            cover_mm: self.cover,
            bar_diameter_mm: self.bar_diameter.unwrap_or(settings.bar_diameter_mm),
            code,
        })
    }
}

/// Error as shown to a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Stable code, e.g. "GEOMETRY_INFEASIBLE"
    pub code: String,
    /// User-facing message
    pub message: String,
    /// Offending input field, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&CalcError> for ErrorReport {
    fn from(err: &CalcError) -> Self {
        ErrorReport {
            code: err.error_code().to_string(),
            message: err.to_string(),
            field: err.field().map(str::to_string),
        }
    }
}

/// Discriminated response: a result or the reason there is none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DesignResponse {
    Success {
        result: DesignResult,
    },
    Failure {
        error: ErrorReport,
        /// Further problems found alongside `error` (input limit checks)
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        additional_errors: Vec<ErrorReport>,
    },
}

impl DesignResponse {
    /// Failure response from a single error
    pub fn failure(err: &CalcError) -> Self {
        DesignResponse::Failure {
            error: err.into(),
            additional_errors: Vec::new(),
        }
    }

    /// Failure response listing several errors; `None` when the list is empty
    pub fn failures(errors: &[CalcError]) -> Option<Self> {
        let (first, rest) = errors.split_first()?;
        Some(DesignResponse::Failure {
            error: first.into(),
            additional_errors: rest.iter().map(ErrorReport::from).collect(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DesignResponse::Success { .. })
    }

    /// Every error carried by a failure, primary first; empty on success
    pub fn errors(&self) -> Vec<&ErrorReport> {
        match self {
            DesignResponse::Success { .. } => Vec::new(),
            DesignResponse::Failure {
                error,
                additional_errors,
            } => std::iter::once(error).chain(additional_errors).collect(),
        }
    }
}

impl From<CalcResult<DesignResult>> for DesignResponse {
    fn from(outcome: CalcResult<DesignResult>) -> Self {
        match outcome {
            Ok(result) => DesignResponse::Success { result },
            Err(err) => DesignResponse::failure(&err),
        }
    }
}

/// Map, validate, and compute a request with the library defaults.
///
/// Practical input limits are not applied; use [`respond_with`] for that.
pub fn respond(request: &DesignRequest) -> DesignResponse {
    request.to_input().and_then(|input| compute(&input)).into()
}

/// Map, limit-check (when enabled), and compute a request
pub fn respond_with(request: &DesignRequest, settings: &CalculatorSettings) -> DesignResponse {
    respond_with_traced(request, settings, &mut EquationTracker::new()).1
}

/// [`respond_with`], recording equations into `tracker` and returning the
/// mapped input alongside the response.
///
/// The input is `None` only when the request could not be mapped (unknown
/// grade or code basis).
pub fn respond_with_traced(
    request: &DesignRequest,
    settings: &CalculatorSettings,
    tracker: &mut EquationTracker,
) -> (Option<DesignInput>, DesignResponse) {
    let input = match request.to_input_with(settings) {
        Ok(input) => input,
        Err(err) => return (None, DesignResponse::failure(&err)),
    };

    let violations = settings.limit_violations(&input);
    if let Some(response) = DesignResponse::failures(&violations) {
        debug!(count = violations.len(), "input limits violated");
        return (Some(input), response);
    }

    let response = compute_traced(&input, tracker).into();
    (Some(input), response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DesignRequest {
        DesignRequest {
            span: 4.0,
            thickness: 150.0,
            dead_load: 3.5,
            live_load: 2.0,
            concrete_grade: "C25".to_string(),
            steel_grade: "460".into(),
            cover: 20.0,
            bar_diameter: None,
            code: None,
        }
    }

    #[test]
    fn test_to_input_defaults() {
        let input = request().to_input().unwrap();
        assert_eq!(input.concrete, ConcreteGrade::C25);
        assert_eq!(input.steel, SteelGrade::Fy460);
        assert_eq!(input.bar_diameter_mm, 10.0);
        assert_eq!(input.code, DesignCode::Bs8110);
    }

    #[test]
    fn test_to_input_uses_settings() {
        let settings = CalculatorSettings {
            code: DesignCode::Eurocode2,
            bar_diameter_mm: 12.0,
            ..CalculatorSettings::default()
        };
        let input = request().to_input_with(&settings).unwrap();
        assert_eq!(input.code, DesignCode::Eurocode2);
        assert_eq!(input.bar_diameter_mm, 12.0);

        // Explicit request values win
        let mut explicit = request();
        explicit.code = Some("BS8110".to_string());
        explicit.bar_diameter = Some(16.0);
        let input = explicit.to_input_with(&settings).unwrap();
        assert_eq!(input.code, DesignCode::Bs8110);
        assert_eq!(input.bar_diameter_mm, 16.0);
    }

    #[test]
    fn test_numeric_steel_grade() {
        let json = r#"{"span":4,"thickness":150,"dead_load":3.5,"live_load":2,
                       "concrete_grade":"c30","steel_grade":500,"cover":25}"#;
        let req: DesignRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.steel_grade, GradeValue::Number(500.0));
        let input = req.to_input().unwrap();
        assert_eq!(input.steel, SteelGrade::Fy500);
        assert_eq!(input.concrete, ConcreteGrade::C30);
    }

    #[test]
    fn test_unknown_grades() {
        let mut req = request();
        req.concrete_grade = "C45".to_string();
        let err = req.to_input().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");

        let mut req = request();
        req.steel_grade = GradeValue::Number(250.0);
        assert_eq!(req.to_input().unwrap_err().error_code(), "UNKNOWN_GRADE");

        let mut req = request();
        req.code = Some("ACI318".to_string());
        assert_eq!(req.to_input().unwrap_err().error_code(), "UNKNOWN_GRADE");
    }

    #[test]
    fn test_respond_success_json() {
        let response = respond(&request());
        assert!(response.is_success());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["result"]["code"], "BS8110");
        assert_eq!(json["result"]["flexure"]["outcome"], "singly_reinforced");
    }

    #[test]
    fn test_respond_failure_json() {
        let mut req = request();
        req.thickness = 20.0;
        let response = respond(&req);
        assert!(!response.is_success());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["error"]["code"], "GEOMETRY_INFEASIBLE");
        assert!(json.get("additional_errors").is_none());
    }

    #[test]
    fn test_respond_compression_is_success() {
        let mut req = request();
        req.span = 8.0;
        req.dead_load = 10.0;
        req.live_load = 5.0;
        match respond(&req) {
            DesignResponse::Success { result } => assert!(result.requires_compression_reinforcement()),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_respond_with_limits() {
        let mut req = request();
        req.cover = 10.0;
        req.span = 14.0;

        match respond_with(&req, &CalculatorSettings::default()) {
            DesignResponse::Failure { error, additional_errors } => {
                assert_eq!(error.field.as_deref(), Some("span_m"));
                assert_eq!(additional_errors.len(), 1);
                assert_eq!(additional_errors[0].field.as_deref(), Some("cover_mm"));
            }
            other => panic!("expected failure, got {:?}", other),
        }

        // Same request computes when limits are off
        let relaxed = CalculatorSettings {
            enforce_limits: false,
            ..CalculatorSettings::default()
        };
        assert!(respond_with(&req, &relaxed).is_success());
    }

    #[test]
    fn test_respond_with_traced() {
        let mut tracker = EquationTracker::new();
        let (input, response) = respond_with_traced(&request(), &CalculatorSettings::default(), &mut tracker);
        assert_eq!(input, Some(request().to_input().unwrap()));
        assert!(response.is_success());
        assert!(response.errors().is_empty());
        assert!(!tracker.is_empty());

        // Limits stop the run before any equation is recorded
        let mut req = request();
        req.cover = 10.0;
        let mut tracker = EquationTracker::new();
        let (input, response) = respond_with_traced(&req, &CalculatorSettings::default(), &mut tracker);
        assert!(input.is_some());
        assert_eq!(response.errors().len(), 1);
        assert!(tracker.is_empty());

        let mut req = request();
        req.concrete_grade = "C45".to_string();
        let (input, response) = respond_with_traced(&req, &CalculatorSettings::default(), &mut EquationTracker::new());
        assert!(input.is_none());
        assert_eq!(response.errors()[0].code, "UNKNOWN_GRADE");
    }

    #[test]
    fn test_response_errors_in_order() {
        let errors = vec![
            CalcError::invalid_input("span_m", "14", "Span must be greater than 0 and at most 12 m"),
            CalcError::invalid_input("cover_mm", "10", "Cover must be between 15 mm and 75 mm"),
        ];
        let response = DesignResponse::failures(&errors).unwrap();
        let fields: Vec<_> = response.errors().iter().filter_map(|e| e.field.as_deref()).collect();
        assert_eq!(fields, vec!["span_m", "cover_mm"]);
        assert!(DesignResponse::failures(&[]).is_none());
    }
}
