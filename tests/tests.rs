use mechlab::mechanics::{centre_of_mass, force, moment, momentum, motion, terminal_velocity};
use mechlab::readout::{run_scenario, ExperimentReadout, GraphShape};
use mechlab::simulation::integrator::step_collision;
use mechlab::simulation::params::Parameters;
use mechlab::simulation::scenario::Scenario;
use mechlab::simulation::states::{CollisionPair, CollisionPhase};
use mechlab::{ScenarioConfig, STANDARD_GRAVITY};

use approx::assert_relative_eq;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Default playback parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        dt: 0.1,
        t_end: 240.0,
        g: STANDARD_GRAVITY,
    }
}

/// Kinetic energy of a two-body system
pub fn kinetic_energy(m1: f64, v1: f64, m2: f64, v2: f64) -> f64 {
    0.5 * m1 * v1 * v1 + 0.5 * m2 * v2 * v2
}

/// Load a preset from the scenarios directory, the way the binary does
pub fn load_preset(file_name: &str) -> ScenarioConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&path).expect("preset file missing");
    serde_yaml::from_reader(BufReader::new(file)).expect("preset did not parse")
}

// ==================================================================================
// Kinematics consistency
// ==================================================================================

#[test]
fn displacement_matches_graph_area_over_a_grid() {
    let speeds = [-10.0, 0.0, 2.5, 20.0];
    let accels = [-9.8, -1.0, 0.0, 3.0];
    let times = [0.0, 0.5, 4.0, 12.0];

    for &u in &speeds {
        for &a in &accels {
            for &t in &times {
                let v = motion::final_velocity(u, a, t);
                let s = motion::displacement(u, a, t);
                let area = motion::area_under_graph(u, v, t);
                assert_relative_eq!(s, area, epsilon = 1e-12, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn suvat_equations_close_the_loop() {
    // u = 5, a = 3, t = 4 gives v = 17 and s = 44; the timeless equation
    // recovers the same speed from u, a and s
    let (u, a, t) = (5.0, 3.0, 4.0);
    let v = motion::final_velocity(u, a, t);
    let s = motion::displacement(u, a, t);
    assert_eq!(v, 17.0);
    assert_eq!(s, 44.0);
    assert_relative_eq!(
        motion::final_velocity_from_displacement(u, a, s),
        v,
        epsilon = 1e-12
    );
}

// ==================================================================================
// Collision conservation
// ==================================================================================

const COLLISION_CASES: [(f64, f64, f64, f64); 4] = [
    (5.0, 8.0, 3.0, -4.0),
    (10.0, 5.0, 10.0, -5.0),
    (2.0, 15.0, 8.0, 0.0),
    (7.0, -6.0, 4.0, 9.0),
];

#[test]
fn elastic_collisions_conserve_momentum_and_energy() {
    for &(m1, v1, m2, v2) in &COLLISION_CASES {
        let out = momentum::elastic_collision(m1, v1, m2, v2);
        let p_before = momentum::total_momentum(m1, v1, m2, v2);
        let p_after = momentum::total_momentum(m1, out.v1f, m2, out.v2f);
        assert_relative_eq!(p_before, p_after, epsilon = 1e-9, max_relative = 1e-9);

        let ke_before = kinetic_energy(m1, v1, m2, v2);
        let ke_after = kinetic_energy(m1, out.v1f, m2, out.v2f);
        assert_relative_eq!(ke_before, ke_after, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn inelastic_collisions_conserve_momentum_and_shed_energy() {
    for &(m1, v1, m2, v2) in &COLLISION_CASES {
        let shared = momentum::inelastic_collision(m1, v1, m2, v2);
        let p_before = momentum::total_momentum(m1, v1, m2, v2);
        let p_after = momentum::total_momentum(m1, shared, m2, shared);
        assert_relative_eq!(p_before, p_after, epsilon = 1e-9, max_relative = 1e-9);

        let ke_before = kinetic_energy(m1, v1, m2, v2);
        let ke_after = kinetic_energy(m1, shared, m2, shared);
        assert!(
            ke_after <= ke_before + 1e-9,
            "inelastic contact gained energy: {} -> {}",
            ke_before,
            ke_after
        );
    }
}

// ==================================================================================
// Terminal velocity round trip
// ==================================================================================

#[test]
fn net_force_vanishes_at_the_terminal_velocity() {
    let cases = [(2.0, 0.1), (80.0, 0.25), (5.0, 0.2), (75.0, 1.5), (10.0, 0.2)];
    for &g in &[9.8, 1.6] {
        for &(mass, drag) in &cases {
            let vt = terminal_velocity::terminal_velocity(mass, drag, g);
            let net = terminal_velocity::net_force_falling(mass, vt, drag, g);
            assert_relative_eq!(net, 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn drag_free_fall_never_balances() {
    assert_eq!(
        terminal_velocity::terminal_velocity(10.0, 0.0, STANDARD_GRAVITY),
        f64::INFINITY
    );
}

// ==================================================================================
// Centre of mass and moments
// ==================================================================================

#[test]
fn centre_of_mass_stays_between_the_masses_and_balances_there() {
    let masses = [0.0, 0.5, 3.0, 50.0];
    let positions = [(-100.0, 100.0), (0.0, 1.0), (400.0, 100.0)];

    for &(x1, x2) in &positions {
        for &m1 in &masses {
            for &m2 in &masses {
                if m1 + m2 == 0.0 {
                    continue;
                }
                let com = centre_of_mass::centre_of_mass(m1, x1, m2, x2);
                let (lo, hi) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
                assert!(
                    (lo..=hi).contains(&com),
                    "centre of mass {} outside [{}, {}]",
                    com,
                    lo,
                    hi
                );
                assert!(
                    centre_of_mass::is_balanced(m1, x1, m2, x2, com, centre_of_mass::BALANCE_TOLERANCE),
                    "rod does not balance at its centre of mass"
                );
            }
        }
    }
}

#[test]
fn classroom_lever_balances() {
    // 30 N at 2 m against 20 N at 3 m
    let acw = moment::moment(30.0, 2.0);
    let cw = moment::moment(20.0, 3.0);
    assert!(moment::are_balanced(acw, cw, moment::BALANCE_TOLERANCE));
    assert_eq!(moment::net_moment(acw, cw), 0.0);
    assert_eq!(moment::tilt_angle(moment::net_moment(acw, cw), moment::TILT_SCALE), 0.0);
}

// ==================================================================================
// Playback
// ==================================================================================

#[test]
fn equal_mass_elastic_pair_exchanges_velocities_on_the_track() {
    let mut pair = CollisionPair::new(1.0, 5.0, 1.0, -5.0, true);
    let p = test_params();
    while pair.phase == CollisionPhase::Approach && pair.t < p.t_end {
        step_collision(&mut pair, &p);
    }
    assert_eq!(pair.phase, CollisionPhase::Separation);
    assert_eq!(pair.v1, -5.0);
    assert_eq!(pair.v2, 5.0);
}

#[test]
fn fall_scenario_runs_to_a_near_terminal_impact() {
    let cfg = load_preset("terminal_velocity.yaml");
    let mut scenario = Scenario::build_scenario(cfg).expect("preset did not build");
    match run_scenario(&mut scenario) {
        ExperimentReadout::TerminalVelocity(r) => {
            assert_eq!(r.terminal_velocity, 14.0);
            assert_eq!(r.weight, 19.6);
            assert!(
                r.impact_velocity > 0.99 * r.terminal_velocity,
                "impact at {} is well short of terminal velocity",
                r.impact_velocity
            );
            assert!(r.impact_velocity <= r.terminal_velocity);
        }
        other => panic!("wrong readout: {:?}", other),
    }
}

// ==================================================================================
// Presets
// ==================================================================================

#[test]
fn motion_preset_reads_the_classroom_numbers() {
    let mut scenario = Scenario::build_scenario(load_preset("motion.yaml")).unwrap();
    match run_scenario(&mut scenario) {
        ExperimentReadout::Motion(r) => {
            assert_eq!(r.final_velocity, 20.0);
            assert_eq!(r.displacement, 100.0);
            assert_eq!(r.shape, GraphShape::Triangle);
        }
        other => panic!("wrong readout: {:?}", other),
    }
}

#[test]
fn force_preset_reads_the_classroom_numbers() {
    let mut scenario = Scenario::build_scenario(load_preset("force.yaml")).unwrap();
    match run_scenario(&mut scenario) {
        ExperimentReadout::Force(r) => {
            assert_relative_eq!(r.resultant, 3400.0_f64.sqrt(), epsilon = 1e-12);
            assert_relative_eq!(r.angle, force::angle(50.0, 30.0), epsilon = 1e-12);
            assert_relative_eq!(r.acceleration, r.resultant / 10.0, epsilon = 1e-12);
        }
        other => panic!("wrong readout: {:?}", other),
    }
}

#[test]
fn momentum_preset_conserves_through_playback() {
    let mut scenario = Scenario::build_scenario(load_preset("momentum.yaml")).unwrap();
    match run_scenario(&mut scenario) {
        ExperimentReadout::Momentum(r) => {
            assert_relative_eq!(r.momentum_before, 28.0, epsilon = 1e-12);
            assert!(r.conserved, "preset playback lost momentum");
            assert_relative_eq!(r.v1_final, -1.0, epsilon = 1e-12);
            assert_relative_eq!(r.v2_final, 11.0, epsilon = 1e-12);
        }
        other => panic!("wrong readout: {:?}", other),
    }
}

#[test]
fn centre_of_mass_preset_reads_the_classroom_numbers() {
    let mut scenario = Scenario::build_scenario(load_preset("centre_of_mass.yaml")).unwrap();
    match run_scenario(&mut scenario) {
        ExperimentReadout::CentreOfMass(r) => {
            assert_eq!(r.position, 212.5);
            assert_eq!(r.total_mass, 8.0);
            assert!(r.balanced);
        }
        other => panic!("wrong readout: {:?}", other),
    }
}

#[test]
fn moment_preset_is_a_balanced_lever() {
    let mut scenario = Scenario::build_scenario(load_preset("moment.yaml")).unwrap();
    match run_scenario(&mut scenario) {
        ExperimentReadout::Moment(r) => {
            assert_eq!(r.anticlockwise, 60.0);
            assert_eq!(r.clockwise, 60.0);
            assert!(r.balanced);
            assert_eq!(r.tilt, 0.0);
        }
        other => panic!("wrong readout: {:?}", other),
    }
}
