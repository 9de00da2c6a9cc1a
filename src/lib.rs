pub mod mechanics;
pub mod simulation;
pub mod configuration;
pub mod readout;
pub mod logging;

pub use mechanics::force::{NVec2, Resultant};
pub use mechanics::momentum::CollisionOutcome;
pub use mechanics::STANDARD_GRAVITY;
pub use simulation::states::{
    CollisionPair, CollisionPhase, FallingBody, Lever, MassPair, MotionSweep, PerpendicularForces,
};
pub use simulation::params::{Parameters, Preferences};
pub use simulation::integrator::{step_collision, step_fall, step_sweep};
pub use simulation::scenario::{Experiment, Scenario};

pub use configuration::config::{
    ConfigError, ExperimentConfig, ParametersConfig, PreferencesConfig, ScenarioConfig,
};

pub use readout::{run_scenario, ExperimentReadout};
