//! Force composition and Newton's second law
//!
//! Resultants of perpendicular, angled and collinear force pairs, the
//! guarded F = ma solve, and weight. Components use `NVec2`
//! (x horizontal, y vertical) and angles are in degrees throughout.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Resultant of two angled forces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resultant {
    pub magnitude: f64,
    pub angle: f64, // degrees, atan2 convention: (-180, 180]
    pub components: NVec2,
}

/// Components of a force of the given magnitude at `angle_degrees`
pub fn components(magnitude: f64, angle_degrees: f64) -> NVec2 {
    let angle = angle_degrees.to_radians();
    NVec2::new(magnitude * angle.cos(), magnitude * angle.sin())
}

/// Pythagorean resultant of a horizontal force `f1` and a vertical force `f2`
pub fn resultant_perpendicular(f1: f64, f2: f64) -> f64 {
    (f1 * f1 + f2 * f2).sqrt()
}

/// Direction of the resultant with horizontal part `f1` and vertical part
/// `f2`, in degrees
pub fn angle(f1: f64, f2: f64) -> f64 {
    f2.atan2(f1).to_degrees()
}

/// Resultant of two forces given as magnitude/angle pairs
pub fn resultant_from_angles(f1_mag: f64, f1_angle: f64, f2_mag: f64, f2_angle: f64) -> Resultant {
    let r = components(f1_mag, f1_angle) + components(f2_mag, f2_angle);
    Resultant {
        magnitude: r.norm(),
        angle: r.y.atan2(r.x).to_degrees(),
        components: r,
    }
}

/// F = ma solved for a
///
/// A zero (either sign) or non-finite mass has no meaningful acceleration;
/// those report 0 so readouts stay finite
pub fn acceleration(force: f64, mass: f64) -> f64 {
    if mass == 0.0 || !mass.is_finite() {
        return 0.0;
    }
    force / mass
}

/// W = m g
pub fn weight(mass: f64, g: f64) -> f64 {
    mass * g
}

/// Net collinear force when both act the same way
pub fn resultant_same_direction(f1: f64, f2: f64) -> f64 {
    f1 + f2
}

/// Magnitude of the net collinear force when the two oppose
pub fn resultant_opposite_direction(f1: f64, f2: f64) -> f64 {
    (f1 - f2).abs()
}
