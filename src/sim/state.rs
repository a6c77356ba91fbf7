//! Ball state and render-facing views
//!
//! A ball owns its own integration and friction. The same `friction` scalar
//! is both the per-tick speed loss and the "stopped" threshold; the two are
//! coupled on purpose and must stay equal.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::table::Table;

/// Ball identity, used only by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallLabel {
    /// White ball, struck by the cue
    Cue,
    /// Object ball
    Red,
}

/// Observable motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    Moving,
    /// Both velocity components are exactly zero
    Stopped,
}

/// A ball on the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub label: BallLabel,
    pub pos: DVec2,
    pub vel: DVec2,
    radius: f64,
    /// Speed lost per tick, and the per-component stop threshold
    friction: f64,
}

impl Ball {
    pub fn new(id: u32, label: BallLabel, pos: DVec2, radius: f64) -> Self {
        assert!(radius > 0.0, "ball radius must be positive");
        Self {
            id,
            label,
            pos,
            vel: DVec2::ZERO,
            radius,
            friction: 0.0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn set_friction(&mut self, friction: f64) {
        debug_assert!(friction >= 0.0);
        self.friction = friction;
    }

    /// Overwrite velocity (initial state or cue strike)
    #[inline]
    pub fn set_velocity(&mut self, vel: DVec2) {
        self.vel = vel;
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Forward Euler position update; friction is applied separately
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }

    /// Mutating query: if both components are below the friction threshold
    /// the ball is stopped in place (velocity zeroed) and true is returned.
    pub fn is_stopped(&mut self) -> bool {
        if self.vel.x.abs() < self.friction && self.vel.y.abs() < self.friction {
            self.vel = DVec2::ZERO;
            true
        } else {
            false
        }
    }

    /// Subtract `friction` from the speed, keeping direction
    pub fn slow_down(&mut self) {
        if self.is_stopped() {
            return;
        }
        let v = self.speed();
        // Only reachable with zero friction on a resting ball
        if v == 0.0 {
            return;
        }
        debug_assert!(v > 0.0);
        // Not stopped means v >= friction, so the factor stays in [0, 1)
        let alpha = (v - self.friction) / v;
        self.vel *= alpha;
    }

    /// Non-mutating view of the motion state
    pub fn motion(&self) -> MotionState {
        if self.vel == DVec2::ZERO {
            MotionState::Stopped
        } else {
            MotionState::Moving
        }
    }

    pub fn view(&self) -> BallView {
        BallView {
            id: self.id,
            label: self.label,
            pos: self.pos,
            radius: self.radius,
        }
    }
}

/// What the renderer needs of a ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub id: u32,
    pub label: BallLabel,
    pub pos: DVec2,
    pub radius: f64,
}

/// Read-only frame, taken right after a step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub length: f64,
    pub width: f64,
    pub pockets: Vec<DVec2>,
    /// Cushion segments as endpoint pairs
    pub cushions: Vec<[DVec2; 2]>,
    pub balls: Vec<BallView>,
}

impl Snapshot {
    pub fn capture(tick: u64, table: &Table, balls: &[Ball]) -> Self {
        Self {
            tick,
            length: table.length,
            width: table.width,
            pockets: table.pockets().to_vec(),
            cushions: table.cushions().iter().map(|c| c.endpoints()).collect(),
            balls: balls.iter().map(Ball::view).collect(),
        }
    }
}
