//! Concrete Strength Classes
//!
//! Characteristic compressive strength and mean tensile strength for the
//! supported concrete grades. Values follow EC2 Table 3.1; the grades are also
//! used for BS 8110 designs, where the same number is taken as the design
//! strength in the K factor and shear formulas.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete grade (strength class)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    C20,
    C25,
    C30,
    C35,
    C40,
}

/// Material properties for a concrete grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Characteristic compressive strength fck (N/mm²)
    pub fck_mpa: f64,
    /// Mean axial tensile strength fctm (N/mm²)
    pub fctm_mpa: f64,
}

impl ConcreteGrade {
    /// All concrete grades in ascending strength order
    pub const ALL: [ConcreteGrade; 5] = [
        ConcreteGrade::C20,
        ConcreteGrade::C25,
        ConcreteGrade::C30,
        ConcreteGrade::C35,
        ConcreteGrade::C40,
    ];

    /// Grade code as written on drawings (e.g., "C25")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::C20 => "C20",
            ConcreteGrade::C25 => "C25",
            ConcreteGrade::C30 => "C30",
            ConcreteGrade::C35 => "C35",
            ConcreteGrade::C40 => "C40",
        }
    }

    /// Material properties for this grade
    pub fn properties(&self) -> ConcreteProperties {
        let (fck_mpa, fctm_mpa) = match self {
            ConcreteGrade::C20 => (20.0, 2.2),
            ConcreteGrade::C25 => (25.0, 2.6),
            ConcreteGrade::C30 => (30.0, 2.9),
            ConcreteGrade::C35 => (35.0, 3.2),
            ConcreteGrade::C40 => (40.0, 3.5),
        };
        ConcreteProperties { fck_mpa, fctm_mpa }
    }

    /// Characteristic compressive strength fck (N/mm²)
    pub fn fck_mpa(&self) -> f64 {
        self.properties().fck_mpa
    }

    /// Parse from common string representations.
    ///
    /// Accepts "C25", "c25", "25" and the EC2 cylinder/cube form "C25/30".
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        let cylinder = normalized.split('/').next().unwrap_or_default();
        let digits = cylinder.strip_prefix('C').unwrap_or(cylinder);
        match digits {
            "20" => Ok(ConcreteGrade::C20),
            "25" => Ok(ConcreteGrade::C25),
            "30" => Ok(ConcreteGrade::C30),
            "35" => Ok(ConcreteGrade::C35),
            "40" => Ok(ConcreteGrade::C40),
            _ => Err(CalcError::unknown_grade("concrete grade", s, Self::supported())),
        }
    }

    /// Comma-separated list of supported codes, for error messages
    pub fn supported() -> String {
        Self::ALL.iter().map(|g| g.code()).collect::<Vec<_>>().join(", ")
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for ConcreteGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fck_lookup() {
        let fck: Vec<f64> = ConcreteGrade::ALL.iter().map(|g| g.fck_mpa()).collect();
        assert_eq!(fck, vec![20.0, 25.0, 30.0, 35.0, 40.0]);
    }

    #[test]
    fn test_fctm_lookup() {
        assert_eq!(ConcreteGrade::C25.properties().fctm_mpa, 2.6);
        assert_eq!(ConcreteGrade::C40.properties().fctm_mpa, 3.5);
    }

    #[test]
    fn test_parse_flexible() {
        assert_eq!(ConcreteGrade::from_str_flexible("C25").unwrap(), ConcreteGrade::C25);
        assert_eq!(ConcreteGrade::from_str_flexible(" c30 ").unwrap(), ConcreteGrade::C30);
        assert_eq!(ConcreteGrade::from_str_flexible("C35/45").unwrap(), ConcreteGrade::C35);
        assert_eq!("40".parse::<ConcreteGrade>().unwrap(), ConcreteGrade::C40);
    }

    #[test]
    fn test_unknown_grade() {
        let err = ConcreteGrade::from_str_flexible("C90").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");
        assert!(err.to_string().contains("C20, C25, C30, C35, C40"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ConcreteGrade::C25).unwrap();
        assert_eq!(json, "\"C25\"");
        let roundtrip: ConcreteGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, ConcreteGrade::C25);
    }
}
