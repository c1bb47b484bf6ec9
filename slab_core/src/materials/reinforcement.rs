//! Reinforcing Steel
//!
//! Steel grades (characteristic yield strength) and the catalog of standard
//! high-yield deformed bar sizes used for slab detailing.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Modulus of elasticity of reinforcing steel (N/mm²)
pub const STEEL_ELASTIC_MODULUS_MPA: f64 = 200_000.0;

/// Reinforcing steel grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// fy = 460 N/mm² (BS 4449 grade 460)
    #[serde(rename = "460")]
    Fy460,
    /// fy = 500 N/mm² (B500)
    #[serde(rename = "500")]
    Fy500,
}

impl SteelGrade {
    /// All steel grades for UI selection
    pub const ALL: [SteelGrade; 2] = [SteelGrade::Fy460, SteelGrade::Fy500];

    /// Characteristic yield strength fy (N/mm²)
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::Fy460 => 460.0,
            SteelGrade::Fy500 => 500.0,
        }
    }

    /// Modulus of elasticity Es (N/mm²)
    pub fn es_mpa(&self) -> f64 {
        STEEL_ELASTIC_MODULUS_MPA
    }

    /// Grade code (e.g., "460")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::Fy460 => "460",
            SteelGrade::Fy500 => "500",
        }
    }

    /// Parse from common string representations ("460", "fy460", "B500", "500 MPa")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        let digits: String = normalized.chars().filter(|c| c.is_ascii_digit()).collect();
        let prefix_ok = normalized
            .trim_end_matches("MPA")
            .trim()
            .trim_start_matches("FY")
            .trim_start_matches('B')
            .trim()
            == digits;
        match (prefix_ok, digits.as_str()) {
            (true, "460") => Ok(SteelGrade::Fy460),
            (true, "500") => Ok(SteelGrade::Fy500),
            _ => Err(CalcError::unknown_grade("steel grade", s, Self::supported())),
        }
    }

    /// Comma-separated list of supported codes, for error messages
    pub fn supported() -> String {
        Self::ALL.iter().map(|g| g.code()).collect::<Vec<_>>().join(", ")
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fy = {} N/mm²", self.code())
    }
}

impl std::str::FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

/// Standard high-yield bar sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BarSize {
    Y8,
    Y10,
    Y12,
    Y16,
    Y20,
    Y25,
}

impl BarSize {
    /// Bar catalog in ascending diameter order
    pub const ALL: [BarSize; 6] = [
        BarSize::Y8,
        BarSize::Y10,
        BarSize::Y12,
        BarSize::Y16,
        BarSize::Y20,
        BarSize::Y25,
    ];

    /// Nominal diameter (mm)
    pub fn diameter_mm(&self) -> f64 {
        match self {
            BarSize::Y8 => 8.0,
            BarSize::Y10 => 10.0,
            BarSize::Y12 => 12.0,
            BarSize::Y16 => 16.0,
            BarSize::Y20 => 20.0,
            BarSize::Y25 => 25.0,
        }
    }

    /// Cross-sectional area of one bar (mm²), as tabulated
    pub fn area_mm2(&self) -> f64 {
        match self {
            BarSize::Y8 => 50.3,
            BarSize::Y10 => 78.5,
            BarSize::Y12 => 113.1,
            BarSize::Y16 => 201.1,
            BarSize::Y20 => 314.2,
            BarSize::Y25 => 490.9,
        }
    }

    /// Bar mark (e.g., "Y12")
    pub fn code(&self) -> &'static str {
        match self {
            BarSize::Y8 => "Y8",
            BarSize::Y10 => "Y10",
            BarSize::Y12 => "Y12",
            BarSize::Y16 => "Y16",
            BarSize::Y20 => "Y20",
            BarSize::Y25 => "Y25",
        }
    }

    /// Area per meter width when bars are placed at `spacing_mm` centers (mm²/m)
    pub fn area_per_meter_mm2(&self, spacing_mm: f64) -> f64 {
        self.area_mm2() * 1000.0 / spacing_mm
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
