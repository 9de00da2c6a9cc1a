//! Falling with quadratic air resistance
//!
//! Drag force, terminal velocity and the net force on a falling body.
//! Weight is computed inline here; topic modules do not depend on each
//! other.

/// Drag force magnitude k v^2, independent of the sign of `velocity`
pub fn air_resistance(drag: f64, velocity: f64) -> f64 {
    drag * velocity * velocity
}

/// Speed at which drag balances weight, sqrt(m g / k)
///
/// With zero or non-finite drag nothing ever balances the weight, reported
/// as +infinity. Negative drag has no physical reading; the NaN from the
/// square root passes through unguarded
pub fn terminal_velocity(mass: f64, drag: f64, g: f64) -> f64 {
    if drag == 0.0 || !drag.is_finite() {
        return f64::INFINITY;
    }
    (mass * g / drag).sqrt()
}

/// Net downward force on a falling body, weight minus drag
pub fn net_force_falling(mass: f64, velocity: f64, drag: f64, g: f64) -> f64 {
    mass * g - air_resistance(drag, velocity)
}
