//! Build fully-initialized experiments from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - front-end preferences (`Preferences`)
//! - the selected experiment state (`Experiment`, at t = 0)
//!
//! Building validates the configuration first; past this point the runtime
//! layers trust every control value.

use crate::configuration::config::{ConfigError, ExperimentConfig, ScenarioConfig};
use crate::simulation::params::{Parameters, Preferences};
use crate::simulation::states::{
    CollisionPair, FallingBody, Lever, MassPair, MotionSweep, PerpendicularForces,
};

/// Runtime state of the selected experiment
#[derive(Debug, Clone)]
pub enum Experiment {
    Motion(MotionSweep),
    Force(PerpendicularForces),
    Momentum(CollisionPair),
    TerminalVelocity(FallingBody),
    CentreOfMass(MassPair),
    Moment(Lever),
}

/// A fully-initialized runtime scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the numerical parameters, the carried-through preferences
/// and the experiment state ready for stepping or readout
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub preferences: Preferences,
    pub experiment: Experiment,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // The one validation pass; conversion below is infallible
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            t_end: p_cfg.t_end,
            g: p_cfg.g,
        };

        // Preferences: optional section, defaults apply when absent
        let prefs_cfg = cfg.preferences.unwrap_or_default();
        let preferences = Preferences {
            dark_theme: prefs_cfg.dark_theme,
            sound: prefs_cfg.sound,
        };

        // Experiment: map the config controls onto a fresh state at t = 0
        let experiment = match cfg.experiment {
            ExperimentConfig::Motion(c) => Experiment::Motion(MotionSweep::new(
                c.initial_velocity,
                c.acceleration,
                c.duration,
            )),
            ExperimentConfig::Force(c) => Experiment::Force(PerpendicularForces {
                f1: c.f1,
                f2: c.f2,
                mass: c.mass,
            }),
            ExperimentConfig::Momentum(c) => {
                Experiment::Momentum(CollisionPair::new(c.m1, c.v1, c.m2, c.v2, c.elastic))
            }
            ExperimentConfig::TerminalVelocity(c) => {
                Experiment::TerminalVelocity(FallingBody::new(c.mass, c.drag))
            }
            ExperimentConfig::CentreOfMass(c) => Experiment::CentreOfMass(MassPair {
                m1: c.m1,
                x1: c.x1,
                m2: c.m2,
                x2: c.x2,
                pivot: c.pivot,
            }),
            ExperimentConfig::Moment(c) => Experiment::Moment(Lever {
                left_force: c.left_force,
                left_distance: c.left_distance,
                right_force: c.right_force,
                right_distance: c.right_distance,
            }),
        };

        Ok(Self {
            parameters,
            preferences,
            experiment,
        })
    }
}
