//! Uniform-acceleration kinematics (the suvat equations)
//!
//! Pure functions of their arguments; non-finite inputs flow through the
//! arithmetic untouched. The only guard is the radicand clamp in
//! [`final_velocity_from_displacement`].

/// v = u + a t
pub fn final_velocity(u: f64, a: f64, t: f64) -> f64 {
    u + a * t
}

/// s = u t + a t^2 / 2
pub fn displacement(u: f64, a: f64, t: f64) -> f64 {
    u * t + 0.5 * a * t * t
}

/// Trapezoid area under a linear velocity-time graph, s = (u + v) t / 2
pub fn area_under_graph(u: f64, v: f64, t: f64) -> f64 {
    0.5 * (u + v) * t
}

/// Final speed from v^2 = u^2 + 2 a s
///
/// A negative (or NaN) right-hand side means no real speed covers `s`;
/// those cases report 0 rather than NaN
pub fn final_velocity_from_displacement(u: f64, a: f64, s: f64) -> f64 {
    let v_squared = u * u + 2.0 * a * s;
    if v_squared >= 0.0 {
        v_squared.sqrt()
    } else {
        0.0
    }
}
