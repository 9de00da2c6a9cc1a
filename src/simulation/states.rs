//! Experiment state carried between playback steps
//!
//! Defines one plain-data struct per experiment:
//! - `MotionSweep`   cursor along a velocity-time graph
//! - `FallingBody`   drag-limited fall
//! - `CollisionPair` two bodies on a 1D track, with `CollisionPhase`
//! - `PerpendicularForces` / `MassPair` / `Lever` control records for the
//!   instantaneous topics
//!
//! Stepping never hides state in module globals: each struct holds its own
//! clock `t` and answers `finished()` itself.

use crate::mechanics::motion;

/// Length of the collision track (world units)
pub const TRACK_LENGTH: f64 = 500.0;
/// How far past either track end a body may coast before playback stops
pub const TRACK_MARGIN: f64 = 50.0;
/// Separation at which the two bodies are in contact
pub const CONTACT_DISTANCE: f64 = 30.0;
/// Default starting positions on the track
pub const BODY1_START: f64 = 50.0;
pub const BODY2_START: f64 = 450.0;
/// How far below the release point the ground sits
pub const FLOOR_DEPTH: f64 = 300.0;

/// Cursor sweep along the velocity-time graph of uniformly accelerated
/// motion
#[derive(Debug, Clone)]
pub struct MotionSweep {
    pub u: f64, // initial velocity
    pub a: f64, // acceleration
    pub duration: f64, // time range of the graph
    pub t: f64, // sweep cursor
}

impl MotionSweep {
    pub fn new(u: f64, a: f64, duration: f64) -> Self {
        Self { u, a, duration, t: 0.0 }
    }

    /// Velocity at the cursor
    pub fn velocity(&self) -> f64 {
        motion::final_velocity(self.u, self.a, self.t)
    }

    /// Displacement covered up to the cursor
    pub fn distance(&self) -> f64 {
        motion::displacement(self.u, self.a, self.t)
    }

    pub fn finished(&self) -> bool {
        self.t >= self.duration
    }
}

/// A body released from rest, falling against quadratic drag
#[derive(Debug, Clone)]
pub struct FallingBody {
    pub mass: f64, // mass
    pub drag: f64, // quadratic drag coefficient
    pub velocity: f64, // downward velocity
    pub position: f64, // distance fallen from the release point
    pub floor: f64, // playback stops once position reaches this
    pub t: f64, // time since release
}

impl FallingBody {
    pub fn new(mass: f64, drag: f64) -> Self {
        Self {
            mass,
            drag,
            velocity: 0.0,
            position: 0.0,
            floor: FLOOR_DEPTH,
            t: 0.0,
        }
    }

    pub fn finished(&self) -> bool {
        self.position >= self.floor
    }
}

/// Phase of the two-body collision playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPhase {
    Approach,
    Separation,
}

/// Two bodies closing in on each other along a 1D track
#[derive(Debug, Clone)]
pub struct CollisionPair {
    pub m1: f64, // mass of body 1
    pub v1: f64, // velocity of body 1
    pub x1: f64, // position of body 1
    pub m2: f64, // mass of body 2
    pub v2: f64, // velocity of body 2
    pub x2: f64, // position of body 2
    pub elastic: bool, // elastic or perfectly inelastic contact
    pub phase: CollisionPhase,
    pub t: f64, // time
}

impl CollisionPair {
    pub fn new(m1: f64, v1: f64, m2: f64, v2: f64, elastic: bool) -> Self {
        Self {
            m1,
            v1,
            x1: BODY1_START,
            m2,
            v2,
            x2: BODY2_START,
            elastic,
            phase: CollisionPhase::Approach,
            t: 0.0,
        }
    }

    pub fn in_contact(&self) -> bool {
        (self.x1 - self.x2).abs() < CONTACT_DISTANCE
    }

    /// Playback ends once either body coasts past a track margin
    pub fn finished(&self) -> bool {
        let lo = -TRACK_MARGIN;
        let hi = TRACK_LENGTH + TRACK_MARGIN;
        self.x1 < lo || self.x1 > hi || self.x2 < lo || self.x2 > hi
    }
}

/// Controls for the resultant-force topic: a horizontal force, a vertical
/// force and the mass they act on
#[derive(Debug, Clone)]
pub struct PerpendicularForces {
    pub f1: f64, // horizontal force
    pub f2: f64, // vertical force
    pub mass: f64,
}

/// Controls for the centre-of-mass topic: two point masses on a rod and an
/// optional pivot to test for balance
#[derive(Debug, Clone)]
pub struct MassPair {
    pub m1: f64,
    pub x1: f64,
    pub m2: f64,
    pub x2: f64,
    pub pivot: Option<f64>, // balance is tested at the centre of mass when absent
}

/// Controls for the moments topic: one load either side of the pivot
#[derive(Debug, Clone)]
pub struct Lever {
    pub left_force: f64, // load turning the lever anticlockwise
    pub left_distance: f64,
    pub right_force: f64, // load turning the lever clockwise
    pub right_distance: f64,
}
