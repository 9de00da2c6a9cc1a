//! Momentum and head-on collisions between two bodies
//!
//! 1D elastic and perfectly inelastic collision formulas with a shared
//! guard: a zero or non-finite total mass yields zeroed outcomes instead
//! of NaN.

/// Conservation check tolerance used by the presets
pub const CONSERVATION_TOLERANCE: f64 = 0.1;

/// p = m v
pub fn momentum(mass: f64, velocity: f64) -> f64 {
    mass * velocity
}

/// Total momentum of a two-body system
pub fn total_momentum(m1: f64, v1: f64, m2: f64, v2: f64) -> f64 {
    m1 * v1 + m2 * v2
}

/// Post-collision velocities of the two bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOutcome {
    pub v1f: f64,
    pub v2f: f64,
}

/// 1D elastic collision
///
/// v1f = ((m1 - m2) v1 + 2 m2 v2) / (m1 + m2) and symmetrically for v2f.
/// A zero or non-finite total mass zeroes both outputs
pub fn elastic_collision(m1: f64, v1: f64, m2: f64, v2: f64) -> CollisionOutcome {
    let total_mass = m1 + m2;
    if total_mass == 0.0 || !total_mass.is_finite() {
        return CollisionOutcome { v1f: 0.0, v2f: 0.0 };
    }
    CollisionOutcome {
        v1f: ((m1 - m2) * v1 + 2.0 * m2 * v2) / total_mass,
        v2f: ((m2 - m1) * v2 + 2.0 * m1 * v1) / total_mass,
    }
}

/// Perfectly inelastic collision; both bodies share the final velocity
///
/// Same total-mass guard as the elastic case
pub fn inelastic_collision(m1: f64, v1: f64, m2: f64, v2: f64) -> f64 {
    let total_mass = m1 + m2;
    if total_mass == 0.0 || !total_mass.is_finite() {
        return 0.0;
    }
    (m1 * v1 + m2 * v2) / total_mass
}

/// Whether momentum before and after agree within `tolerance`
pub fn is_conserved(before: f64, after: f64, tolerance: f64) -> bool {
    (after - before).abs() < tolerance
}
