pub mod motion;
pub mod force;
pub mod momentum;
pub mod terminal_velocity;
pub mod centre_of_mass;
pub mod moment;

/// Gravitational field strength used by the presets (m/s^2)
pub const STANDARD_GRAVITY: f64 = 9.8;
