//! # Flexural Design Formulas
//!
//! Ultimate limit state formulas for a rectangular reinforced concrete
//! section in bending, per unit strip of a one-way slab.
//!
//! ## Notation
//!
//! - `w` = Ultimate area load (kN/m²), which on a 1 m strip is kN/m
//! - `L` = Span (m)
//! - `M` = Design moment (N·mm unless the name says kN·m)
//! - `b` = Strip width (mm), 1000 for a slab
//! - `h` = Overall slab thickness (mm)
//! - `d` = Effective depth (mm)
//! - `z` = Lever arm (mm)
//! - `fck`, `fy` = Concrete and steel strengths (N/mm²)
//!
//! ## References
//!
//! - BS 8110-1:1997 Clause 3.4.4.4 (design formulae for rectangular beams)
//! - BS 8110-1:1997 Table 3.25 (minimum percentages of reinforcement)
//! - BS EN 1992-1-1 Clause 9.2.1.1 (minimum reinforcement areas)
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 2a

// =============================================================================
// INTERNAL FORCES
// Simply supported strip under uniform load over the full span
// =============================================================================

/// Maximum moment for a simply supported span under uniform load
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ═════════════════
///    △                △
///       ←─────L─────→
/// ```
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// M_max = wL²/8 at midspan
///
/// # Example
/// ```rust
/// use slab_core::equations::flexure::simply_supported_udl_moment;
///
/// let m = simply_supported_udl_moment(8.1, 4.0);
/// assert!((m - 16.2).abs() < 1e-9);
/// ```
#[inline]
pub fn simply_supported_udl_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Support shear (reaction) for a simply supported span under uniform load
///
/// # Formula
/// V = wL/2
#[inline]
pub fn simply_supported_udl_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

// =============================================================================
// SECTION GEOMETRY
// =============================================================================

/// Effective depth to the centroid of the bottom layer of bars
///
/// # Formula
/// d = h - cover - Ø/2
///
/// A result ≤ 0 means the section is geometrically infeasible.
#[inline]
pub fn effective_depth(h: f64, cover: f64, bar_diameter: f64) -> f64 {
    h - cover - bar_diameter / 2.0
}

// =============================================================================
// FLEXURE (BS 8110 3.4.4.4, same form used for EC2 simplified rectangular block)
// =============================================================================

/// Moment resistance factor K
///
/// # Formula
/// K = M / (b d² fck)
///
/// # Arguments
/// * `m_nmm` - Design moment in N·mm (convert from kN·m first)
/// * `b` - Strip width (mm)
/// * `d` - Effective depth (mm)
/// * `fck` - Concrete strength (N/mm²)
#[inline]
pub fn k_factor(m_nmm: f64, b: f64, d: f64, fck: f64) -> f64 {
    m_nmm / (b * d * d * fck)
}

/// Lever arm before the 0.95d cap
///
/// # Formula
/// z = d [0.5 + √(0.25 - K/1.134)]
///
/// Returns `None` when `0.25 - K/1.134` is negative (K > 0.2835), which is
/// well past any singly reinforced limit. Callers check K against K' first.
#[inline]
pub fn lever_arm_uncapped(d: f64, k: f64) -> Option<f64> {
    let radicand = 0.25 - k / 1.134;
    if radicand < 0.0 {
        return None;
    }
    Some(d * (0.5 + radicand.sqrt()))
}

/// Upper bound on the lever arm, z ≤ 0.95d
#[inline]
pub fn lever_arm_cap(d: f64) -> f64 {
    0.95 * d
}

/// Area of tension steel required
///
/// # Formula
/// As,req = M / (0.87 fy z)
///
/// # Arguments
/// * `m_nmm` - Design moment (N·mm)
/// * `fy` - Steel yield strength (N/mm²)
/// * `z` - Lever arm (mm)
///
/// # Returns
/// Area in mm² over the strip width used for `m_nmm`
#[inline]
pub fn required_steel_area(m_nmm: f64, fy: f64, z: f64) -> f64 {
    m_nmm / (0.87 * fy * z)
}

// =============================================================================
// MINIMUM REINFORCEMENT
// =============================================================================

/// BS 8110 Table 3.25 minimum tension steel for high-yield bars in slabs
///
/// # Formula
/// As,min = 0.0013 b h
#[inline]
pub fn bs8110_minimum_steel(b: f64, h: f64) -> f64 {
    0.0013 * b * h
}

/// EC2 Expression 9.1N minimum longitudinal tension steel
///
/// # Formula
/// As,min = 0.26 (fctm/fyk) b d ≥ 0.0013 b d
#[inline]
pub fn ec2_minimum_steel(b: f64, d: f64, fctm: f64, fyk: f64) -> f64 {
    (0.26 * fctm / fyk * b * d).max(0.0013 * b * d)
}
