//! Fixed-step playback for the animated experiments
//!
//! One step per call, driven by `Parameters`: a cursor advance for the
//! graph sweep, an explicit Euler step for the drag-limited fall, and a
//! march-then-contact step for the collision track. Each function updates
//! its state struct in-place, including the state's own clock `t`, and is
//! a no-op once the state reports finished.

use super::params::Parameters;
use super::states::{CollisionPair, CollisionPhase, FallingBody, MotionSweep};
use crate::mechanics::{force, momentum, terminal_velocity};

/// Advance the graph sweep cursor by one step, clamped to the configured
/// duration so readouts evaluate exactly at the end of the range
pub fn step_sweep(sweep: &mut MotionSweep, params: &Parameters) {
    if sweep.finished() {
        return;
    }
    sweep.t += params.dt;
    if sweep.t > sweep.duration {
        sweep.t = sweep.duration;
    }
}

/// Advance the fall by one explicit Euler step
///
/// Net force is weight minus quadratic drag at the current velocity:
/// v_n+1 = v_n + (F_net / m) dt, then x_n+1 = x_n + dt v_n+1.
/// The guarded second-law solve keeps a degenerate mass from writing NaN
/// into the state; such a body simply never moves
pub fn step_fall(body: &mut FallingBody, params: &Parameters) {
    if body.finished() {
        return;
    }

    // F_net at the current velocity, then a = F_net / m
    let net = terminal_velocity::net_force_falling(body.mass, body.velocity, body.drag, params.g);
    let accel = force::acceleration(net, body.mass);

    // Kick: v_n+1 = v_n + a dt
    body.velocity += accel * params.dt;

    // Drift: x_n+1 = x_n + dt v_n+1
    body.position += body.velocity * params.dt;

    body.t += params.dt;
}

/// March both bodies along the track by one step
///
/// During the approach, the first step that brings the separation under
/// the contact threshold computes the post-collision velocities once
/// (elastic or perfectly inelastic per the pair's flag), writes them over
/// v1/v2 and flips the phase; the pair then separates under the new
/// velocities until a body leaves the track
pub fn step_collision(pair: &mut CollisionPair, params: &Parameters) {
    if pair.finished() {
        return;
    }

    // x_n+1 = x_n + dt v_n for both bodies
    pair.x1 += pair.v1 * params.dt;
    pair.x2 += pair.v2 * params.dt;

    if pair.phase == CollisionPhase::Approach && pair.in_contact() {
        if pair.elastic {
            let out = momentum::elastic_collision(pair.m1, pair.v1, pair.m2, pair.v2);
            pair.v1 = out.v1f;
            pair.v2 = out.v2f;
        } else {
            let shared = momentum::inelastic_collision(pair.m1, pair.v1, pair.m2, pair.v2);
            pair.v1 = shared;
            pair.v2 = shared;
        }
        pair.phase = CollisionPhase::Separation;
    }

    pair.t += params.dt;
}
