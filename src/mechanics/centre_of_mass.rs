//! Balance point of two point masses on a rod

/// Balance check tolerance used by the presets
pub const BALANCE_TOLERANCE: f64 = 1.0;

/// Mass-weighted mean position, (m1 x1 + m2 x2) / (m1 + m2)
///
/// A zero or non-finite total mass reports 0
pub fn centre_of_mass(m1: f64, x1: f64, m2: f64, x2: f64) -> f64 {
    let total_mass = m1 + m2;
    if total_mass == 0.0 || !total_mass.is_finite() {
        return 0.0;
    }
    (m1 * x1 + m2 * x2) / total_mass
}

/// Whether the rod balances on a pivot at `pivot`
///
/// Compares the two mass moments about the pivot using absolute lever arms
pub fn is_balanced(m1: f64, x1: f64, m2: f64, x2: f64, pivot: f64, tolerance: f64) -> bool {
    let moment1 = m1 * (x1 - pivot).abs();
    let moment2 = m2 * (x2 - pivot).abs();
    (moment1 - moment2).abs() < tolerance
}
