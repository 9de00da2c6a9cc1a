//! Turning effects about a pivot: moments, equilibrium and lever tilt

/// Balance check tolerance used by the presets (N m)
pub const BALANCE_TOLERANCE: f64 = 0.5;

/// Net-moment-to-tilt conversion scale used by the presets (N m per radian
/// of atan argument)
pub const TILT_SCALE: f64 = 100.0;

/// Moment = force x perpendicular distance
pub fn moment(force: f64, distance: f64) -> f64 {
    force * distance
}

/// Net moment with anticlockwise taken positive
pub fn net_moment(anticlockwise: f64, clockwise: f64) -> f64 {
    anticlockwise - clockwise
}

/// Whether the two moments agree within `tolerance`
pub fn are_balanced(anticlockwise: f64, clockwise: f64, tolerance: f64) -> bool {
    (anticlockwise - clockwise).abs() < tolerance
}

/// Lever tilt in radians for a given net moment
///
/// atan keeps the tilt odd, monotone in the moment and bounded by half a
/// turn either way
pub fn tilt_angle(net_moment: f64, scale: f64) -> f64 {
    (net_moment / scale).atan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn moment_known_values() {
        assert_eq!(moment(30.0, 2.0), 60.0);
        assert_eq!(moment(20.0, 0.8), 16.0);
        assert_eq!(moment(150.0, 0.3), 45.0);
    }

    #[test]
    fn moment_is_bilinear() {
        assert_eq!(moment(60.0, 2.0), 2.0 * moment(30.0, 2.0));
        assert_eq!(moment(30.0, 4.0), 2.0 * moment(30.0, 2.0));
        assert_eq!(moment(0.0, 5.0), 0.0);
    }

    #[test]
    fn net_moment_anticlockwise_positive() {
        assert_eq!(net_moment(80.0, 50.0), 30.0);
        assert_eq!(net_moment(-30.0, -20.0), -10.0);
        assert_eq!(net_moment(60.0, 60.0), 0.0);
    }

    #[test]
    fn balance_respects_tolerance() {
        assert!(are_balanced(60.0, 60.4, BALANCE_TOLERANCE));
        assert!(!are_balanced(60.0, 61.0, BALANCE_TOLERANCE));
        assert!(are_balanced(60.0, 65.0, 10.0));
    }

    #[test]
    fn tilt_known_values() {
        assert_relative_eq!(tilt_angle(50.0, TILT_SCALE), 0.5_f64.atan(), epsilon = 1e-12);
        assert_relative_eq!(tilt_angle(100.0, TILT_SCALE), FRAC_PI_4, epsilon = 1e-12);
        // about 16.7 degrees for a 30 N m imbalance
        assert_relative_eq!(
            tilt_angle(30.0, TILT_SCALE).to_degrees(),
            16.699,
            epsilon = 1e-3
        );
    }

    #[test]
    fn tilt_is_odd() {
        assert_eq!(tilt_angle(-50.0, TILT_SCALE), -tilt_angle(50.0, TILT_SCALE));
    }

    #[test]
    fn tilt_monotone_and_bounded() {
        assert!(tilt_angle(10.0, TILT_SCALE) < tilt_angle(20.0, TILT_SCALE));
        assert!(tilt_angle(20.0, TILT_SCALE) < tilt_angle(1000.0, TILT_SCALE));
        assert!(tilt_angle(1e9, TILT_SCALE) < FRAC_PI_2);
        assert!(tilt_angle(-1e9, TILT_SCALE) > -FRAC_PI_2);
    }
}
