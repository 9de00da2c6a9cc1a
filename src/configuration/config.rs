//! Configuration types for loading experiments from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of an
//! experiment scenario. A scenario consists of:
//!
//! - [`ParametersConfig`]  – step size, playback cap and field strength
//! - [`ExperimentConfig`]  – which topic runs, with its control values
//! - [`PreferencesConfig`] – cosmetic front-end switches (optional)
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 0.1              # fixed step size
//!   t_end: 60.0          # hard cap on playback time
//!   g: 9.8               # gravitational field strength
//!
//! experiment:
//!   momentum:
//!     m1: 5.0            # mass of body 1
//!     v1: 8.0            # velocity of body 1
//!     m2: 3.0
//!     v2: -4.0
//!     elastic: true      # false -> perfectly inelastic contact
//!
//! preferences:           # optional, defaults shown
//!   dark_theme: false
//!   sound: true
//! ```
//!
//! The other experiment selectors are `motion` (initial_velocity,
//! acceleration, duration), `force` (f1, f2, mass), `terminal_velocity`
//! (mass, drag), `centre_of_mass` (m1, x1, m2, x2, optional pivot) and
//! `moment` (left_force, left_distance, right_force, right_distance).
//!
//! [`ScenarioConfig::validate`] is the input boundary: control values are
//! checked once here, and the runtime layers never re-validate or silently
//! default them.

use serde::Deserialize;
use thiserror::Error;

/// Raised by [`ScenarioConfig::validate`] when a scenario cannot be built
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("control value `{name}` must be finite, got {value}")]
    NonFiniteControl { name: &'static str, value: f64 },

    #[error("step size dt must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("playback cap t_end must be finite and non-negative, got {0}")]
    InvalidHorizon(f64),
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,    // fixed step size
    pub t_end: f64, // hard cap on playback time
    pub g: f64,     // gravitational field strength
}

/// Which experiment runs, with the control values its sliders exposed
/// e.g. `experiment: momentum: { m1: 5.0, ... }`
#[derive(Deserialize, Debug, Clone)]
pub enum ExperimentConfig {
    #[serde(rename = "motion")] // velocity-time graph sweep
    Motion(MotionConfig),

    #[serde(rename = "force")] // perpendicular force pair acting on a mass
    Force(ForceConfig),

    #[serde(rename = "momentum")] // two bodies on the collision track
    Momentum(MomentumConfig),

    #[serde(rename = "terminal_velocity")] // drag-limited fall
    TerminalVelocity(TerminalVelocityConfig),

    #[serde(rename = "centre_of_mass")] // two point masses on a rod
    CentreOfMass(CentreOfMassConfig),

    #[serde(rename = "moment")] // one load either side of a pivot
    Moment(MomentConfig),
}

#[derive(Deserialize, Debug, Clone)]
pub struct MotionConfig {
    pub initial_velocity: f64,
    pub acceleration: f64,
    pub duration: f64, // time range of the graph
}

#[derive(Deserialize, Debug, Clone)]
pub struct ForceConfig {
    pub f1: f64, // horizontal force
    pub f2: f64, // vertical force
    pub mass: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MomentumConfig {
    pub m1: f64,
    pub v1: f64,
    pub m2: f64,
    pub v2: f64,
    pub elastic: bool, // false -> perfectly inelastic contact
}

#[derive(Deserialize, Debug, Clone)]
pub struct TerminalVelocityConfig {
    pub mass: f64,
    pub drag: f64, // quadratic drag coefficient
}

#[derive(Deserialize, Debug, Clone)]
pub struct CentreOfMassConfig {
    pub m1: f64,
    pub x1: f64,
    pub m2: f64,
    pub x2: f64,
    pub pivot: Option<f64>, // balance is tested at the centre of mass when absent
}

#[derive(Deserialize, Debug, Clone)]
pub struct MomentConfig {
    pub left_force: f64,
    pub left_distance: f64,
    pub right_force: f64,
    pub right_distance: f64,
}

/// Cosmetic front-end switches, carried through without touching any
/// calculation
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PreferencesConfig {
    pub dark_theme: bool,
    pub sound: bool,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self { dark_theme: false, sound: true }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical parameters
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub experiment: ExperimentConfig, // topic selector and controls
    pub preferences: Option<PreferencesConfig>, // cosmetic switches
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteControl { name, value })
    }
}

impl ScenarioConfig {
    /// Check every control value once, at the edge
    ///
    /// Degenerate-input sentinels remain a property of the calculation
    /// functions themselves; this boundary just refuses to build a
    /// scenario around non-finite controls or a useless step size
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;
        if !p.dt.is_finite() || p.dt <= 0.0 {
            return Err(ConfigError::InvalidStep(p.dt));
        }
        if !p.t_end.is_finite() || p.t_end < 0.0 {
            return Err(ConfigError::InvalidHorizon(p.t_end));
        }
        finite("g", p.g)?;

        match &self.experiment {
            ExperimentConfig::Motion(c) => {
                finite("initial_velocity", c.initial_velocity)?;
                finite("acceleration", c.acceleration)?;
                finite("duration", c.duration)?;
            }
            ExperimentConfig::Force(c) => {
                finite("f1", c.f1)?;
                finite("f2", c.f2)?;
                finite("mass", c.mass)?;
            }
            ExperimentConfig::Momentum(c) => {
                finite("m1", c.m1)?;
                finite("v1", c.v1)?;
                finite("m2", c.m2)?;
                finite("v2", c.v2)?;
            }
            ExperimentConfig::TerminalVelocity(c) => {
                finite("mass", c.mass)?;
                finite("drag", c.drag)?;
            }
            ExperimentConfig::CentreOfMass(c) => {
                finite("m1", c.m1)?;
                finite("x1", c.x1)?;
                finite("m2", c.m2)?;
                finite("x2", c.x2)?;
                if let Some(pivot) = c.pivot {
                    finite("pivot", pivot)?;
                }
            }
            ExperimentConfig::Moment(c) => {
                finite("left_force", c.left_force)?;
                finite("left_distance", c.left_distance)?;
                finite("right_force", c.right_force)?;
                finite("right_distance", c.right_distance)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn momentum_yaml(v1: &str) -> String {
        format!(
            "parameters:\n  dt: 0.1\n  t_end: 60.0\n  g: 9.8\nexperiment:\n  momentum:\n    m1: 5.0\n    v1: {v1}\n    m2: 3.0\n    v2: -4.0\n    elastic: true\n"
        )
    }

    #[test]
    fn parses_a_momentum_scenario() {
        let cfg: ScenarioConfig = serde_yaml::from_str(&momentum_yaml("8.0")).unwrap();
        assert!(cfg.validate().is_ok());
        match cfg.experiment {
            ExperimentConfig::Momentum(m) => {
                assert_eq!(m.m1, 5.0);
                assert_eq!(m.v2, -4.0);
                assert!(m.elastic);
            }
            other => panic!("wrong experiment parsed: {:?}", other),
        }
        assert!(cfg.preferences.is_none());
    }

    #[test]
    fn rejects_non_finite_controls() {
        let cfg: ScenarioConfig = serde_yaml::from_str(&momentum_yaml(".nan")).unwrap();
        match cfg.validate() {
            Err(ConfigError::NonFiniteControl { name, .. }) => assert_eq!(name, "v1"),
            other => panic!("expected a non-finite control error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_useless_step_sizes() {
        let yaml = momentum_yaml("8.0").replace("dt: 0.1", "dt: 0.0");
        let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidStep(_))));
    }

    #[test]
    fn rejects_useless_playback_caps() {
        for t_end in ["t_end: -1.0", "t_end: .inf"] {
            let yaml = momentum_yaml("8.0").replace("t_end: 60.0", t_end);
            let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).unwrap();
            assert!(matches!(cfg.validate(), Err(ConfigError::InvalidHorizon(_))));
        }
    }

    #[test]
    fn preferences_default_to_light_theme_with_sound() {
        let prefs = PreferencesConfig::default();
        assert!(!prefs.dark_theme);
        assert!(prefs.sound);
    }
}
