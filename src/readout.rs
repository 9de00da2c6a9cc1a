//! Headless playback and per-topic readouts
//!
//! One results panel per topic, reduced to plain numbers so no front end
//! is needed. `run_scenario` consumes a built [`Scenario`], drives any
//! animated experiment to completion (bounded by `t_end`) and returns the
//! readout for the selected topic. Cross-topic composition is allowed
//! here; the mechanics modules themselves stay independent.

use log::{debug, info};

use crate::mechanics::{centre_of_mass, force, moment, momentum, terminal_velocity};
use crate::simulation::integrator::{step_collision, step_fall, step_sweep};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{Experiment, Scenario};
use crate::simulation::states::{
    CollisionPair, FallingBody, Lever, MassPair, MotionSweep, PerpendicularForces,
};

/// Shape of the area under a velocity-time graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphShape {
    Triangle,
    Rectangle,
    Trapezoid,
}

/// Classify the area under the graph: from rest it is a triangle, at
/// (near) constant velocity a rectangle, otherwise a trapezoid
pub fn classify_graph(u: f64, v: f64) -> GraphShape {
    if u == 0.0 {
        GraphShape::Triangle
    } else if (v - u).abs() < 0.01 {
        GraphShape::Rectangle
    } else {
        GraphShape::Trapezoid
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionReadout {
    pub final_velocity: f64,
    pub displacement: f64,
    pub shape: GraphShape, // area shape under the velocity-time graph
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceReadout {
    pub resultant: f64,
    pub angle: f64, // degrees above the horizontal
    pub acceleration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionReadout {
    pub momentum_before: f64,
    pub momentum_after: f64,
    pub v1_final: f64,
    pub v2_final: f64,
    pub conserved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallReadout {
    pub weight: f64,
    pub terminal_velocity: f64,
    pub impact_velocity: f64, // velocity when the floor (or the time cap) stopped playback
    pub air_resistance_at_impact: f64,
    pub elapsed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentreOfMassReadout {
    pub total_mass: f64,
    pub position: f64,
    pub balanced: bool, // at the explicit pivot, or at the computed position
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentReadout {
    pub anticlockwise: f64,
    pub clockwise: f64,
    pub net: f64,
    pub balanced: bool,
    pub tilt: f64, // radians
}

/// Readout of whichever experiment the scenario selected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExperimentReadout {
    Motion(MotionReadout),
    Force(ForceReadout),
    Momentum(CollisionReadout),
    TerminalVelocity(FallReadout),
    CentreOfMass(CentreOfMassReadout),
    Moment(MomentReadout),
}

/// Sweep the graph cursor to the end of its range and read the panel
pub fn run_motion(sweep: &mut MotionSweep, params: &Parameters) -> MotionReadout {
    while !sweep.finished() && sweep.t < params.t_end {
        step_sweep(sweep, params);
        debug!("sweep t = {:.1} s: v = {:.3} m/s", sweep.t, sweep.velocity());
    }
    let final_velocity = sweep.velocity();
    MotionReadout {
        final_velocity,
        displacement: sweep.distance(),
        shape: classify_graph(sweep.u, final_velocity),
    }
}

/// Drop the body until it reaches the floor or the time cap
pub fn run_fall(body: &mut FallingBody, params: &Parameters) -> FallReadout {
    while !body.finished() && body.t < params.t_end {
        step_fall(body, params);
        debug!(
            "fall t = {:.1} s: v = {:.3} m/s, fallen {:.1} m",
            body.t, body.velocity, body.position
        );
    }
    FallReadout {
        weight: force::weight(body.mass, params.g),
        terminal_velocity: terminal_velocity::terminal_velocity(body.mass, body.drag, params.g),
        impact_velocity: body.velocity,
        air_resistance_at_impact: terminal_velocity::air_resistance(body.drag, body.velocity),
        elapsed: body.t,
    }
}

/// Play the two bodies until one leaves the track or the time cap hits
pub fn run_collision(pair: &mut CollisionPair, params: &Parameters) -> CollisionReadout {
    let before = momentum::total_momentum(pair.m1, pair.v1, pair.m2, pair.v2);
    while !pair.finished() && pair.t < params.t_end {
        step_collision(pair, params);
        debug!(
            "track t = {:.1} s: x1 = {:.1}, x2 = {:.1} ({:?})",
            pair.t, pair.x1, pair.x2, pair.phase
        );
    }
    let after = momentum::total_momentum(pair.m1, pair.v1, pair.m2, pair.v2);
    CollisionReadout {
        momentum_before: before,
        momentum_after: after,
        v1_final: pair.v1,
        v2_final: pair.v2,
        conserved: momentum::is_conserved(before, after, momentum::CONSERVATION_TOLERANCE),
    }
}

/// Resultant-force panel for a perpendicular pair acting on a mass
pub fn force_readout(controls: &PerpendicularForces) -> ForceReadout {
    let resultant = force::resultant_perpendicular(controls.f1, controls.f2);
    ForceReadout {
        resultant,
        angle: force::angle(controls.f1, controls.f2),
        acceleration: force::acceleration(resultant, controls.mass),
    }
}

/// Centre-of-mass panel; balance is tested at the explicit pivot when one
/// is set, otherwise at the computed centre itself
pub fn centre_of_mass_readout(masses: &MassPair) -> CentreOfMassReadout {
    let position = centre_of_mass::centre_of_mass(masses.m1, masses.x1, masses.m2, masses.x2);
    let pivot = masses.pivot.unwrap_or(position);
    CentreOfMassReadout {
        total_mass: masses.m1 + masses.m2,
        position,
        balanced: centre_of_mass::is_balanced(
            masses.m1,
            masses.x1,
            masses.m2,
            masses.x2,
            pivot,
            centre_of_mass::BALANCE_TOLERANCE,
        ),
    }
}

/// Moments panel for one load either side of the pivot
pub fn moment_readout(lever: &Lever) -> MomentReadout {
    let anticlockwise = moment::moment(lever.left_force, lever.left_distance);
    let clockwise = moment::moment(lever.right_force, lever.right_distance);
    let net = moment::net_moment(anticlockwise, clockwise);
    MomentReadout {
        anticlockwise,
        clockwise,
        net,
        balanced: moment::are_balanced(anticlockwise, clockwise, moment::BALANCE_TOLERANCE),
        tilt: moment::tilt_angle(net, moment::TILT_SCALE),
    }
}

/// Drive the scenario's experiment to completion and report its readout
pub fn run_scenario(scenario: &mut Scenario) -> ExperimentReadout {
    let params = scenario.parameters.clone();
    match &mut scenario.experiment {
        Experiment::Motion(sweep) => {
            let r = run_motion(sweep, &params);
            info!(
                "motion: v = {:.2} m/s, s = {:.2} m, {:?} area",
                r.final_velocity, r.displacement, r.shape
            );
            ExperimentReadout::Motion(r)
        }
        Experiment::Force(controls) => {
            let r = force_readout(controls);
            info!(
                "force: resultant {:.2} N at {:.1} deg, a = {:.2} m/s^2",
                r.resultant, r.angle, r.acceleration
            );
            ExperimentReadout::Force(r)
        }
        Experiment::Momentum(pair) => {
            let r = run_collision(pair, &params);
            info!(
                "momentum: {:.2} -> {:.2} kg m/s (conserved: {}), v1 = {:.2}, v2 = {:.2}",
                r.momentum_before, r.momentum_after, r.conserved, r.v1_final, r.v2_final
            );
            ExperimentReadout::Momentum(r)
        }
        Experiment::TerminalVelocity(body) => {
            let r = run_fall(body, &params);
            info!(
                "fall: impact {:.2} m/s after {:.1} s (terminal {:.2} m/s, weight {:.2} N)",
                r.impact_velocity, r.elapsed, r.terminal_velocity, r.weight
            );
            ExperimentReadout::TerminalVelocity(r)
        }
        Experiment::CentreOfMass(masses) => {
            let r = centre_of_mass_readout(masses);
            info!(
                "centre of mass: {:.2} (total {:.2} kg, balanced: {})",
                r.position, r.total_mass, r.balanced
            );
            ExperimentReadout::CentreOfMass(r)
        }
        Experiment::Moment(lever) => {
            let r = moment_readout(lever);
            info!(
                "moment: acw {:.2} vs cw {:.2} N m, net {:.2}, tilt {:.3} rad (balanced: {})",
                r.anticlockwise, r.clockwise, r.net, r.tilt, r.balanced
            );
            ExperimentReadout::Moment(r)
        }
    }
}
