//! Numerical parameters and front-end preferences for playback
//!
//! `Parameters` holds the runtime settings shared by every experiment:
//! - fixed step size and playback time cap,
//! - gravitational field strength `g`
//!
//! `Preferences` carries the two cosmetic front-end switches; they never
//! influence a calculation.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed step size
    pub t_end: f64, // hard cap on playback time
    pub g: f64, // gravitational field strength
}

#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub dark_theme: bool,
    pub sound: bool,
}
