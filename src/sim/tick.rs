//! Fixed timestep simulation tick
//!
//! Every step runs the same phases in the same order:
//! 1. integrate (move, then friction) every ball
//! 2. cushion rebounds, first matching cushion only
//! 3. ball-ball collisions over all pairs i < j
//! 4. remove balls whose center left the open table rectangle

use glam::DVec2;

use super::collision::{resolve_ball_pair, resolve_cushion};
use super::state::{Ball, BallLabel, MotionState, Snapshot};
use super::table::Table;
use crate::settings::Settings;

/// Input applied between ticks (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Cue strike velocity, applied before the step
    pub launch: Option<DVec2>,
}

/// Owns the table and the active balls, advances them one `dt` at a time
#[derive(Debug, Clone)]
pub struct Engine {
    table: Table,
    /// Active balls in insertion order; the cue ball is first
    balls: Vec<Ball>,
    friction: f64,
    dt: f64,
    ticks: u64,
    /// Ids of removed balls, in removal order
    pocketed: Vec<u32>,
}

impl Engine {
    pub fn new(table: Table, mut balls: Vec<Ball>, friction: f64, dt: f64) -> Self {
        assert!(!balls.is_empty(), "engine needs at least the cue ball");
        assert!(dt > 0.0, "timestep must be positive");
        assert!(friction >= 0.0, "friction must be non-negative");

        for ball in &mut balls {
            ball.set_friction(friction);
        }

        Self {
            table,
            balls,
            friction,
            dt,
            ticks: 0,
            pocketed: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings, balls: Vec<Ball>) -> Self {
        Self::new(settings.table(), balls, settings.friction, settings.dt)
    }

    #[inline]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[inline]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    #[inline]
    pub fn friction(&self) -> f64 {
        self.friction
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn pocketed(&self) -> &[u32] {
        &self.pocketed
    }

    /// The cue ball, while it is still in play
    pub fn cue_ball(&self) -> Option<&Ball> {
        self.balls.first().filter(|b| b.label == BallLabel::Cue)
    }

    /// Strike the cue ball. Returns false if it is no longer on the table.
    pub fn launch_cue(&mut self, vel: DVec2) -> bool {
        match self.balls.first_mut() {
            Some(cue) if cue.label == BallLabel::Cue => {
                log::debug!("Cue launched with velocity ({:.2}, {:.2})", vel.x, vel.y);
                cue.set_velocity(vel);
                true
            }
            _ => {
                log::warn!("Launch ignored: cue ball is not in play");
                false
            }
        }
    }

    /// Apply input, then advance one step
    pub fn tick(&mut self, input: &TickInput) {
        if let Some(vel) = input.launch {
            self.launch_cue(vel);
        }
        self.step();
    }

    /// Advance the simulation by exactly one `dt`
    pub fn step(&mut self) {
        self.ticks += 1;

        for ball in &mut self.balls {
            ball.advance(self.dt);
            ball.slow_down();
        }

        self.resolve_cushions();
        self.resolve_ball_collisions();
        self.remove_pocketed();
    }

    fn resolve_cushions(&mut self) {
        let cushions = self.table.cushions();
        for ball in &mut self.balls {
            if let Some(index) = resolve_cushion(ball, cushions) {
                log::debug!("Tick {}: ball {} hit cushion {}", self.ticks, ball.id, index);
            }
        }
    }

    fn resolve_ball_collisions(&mut self) {
        let n = self.balls.len();
        for i in 0..n {
            let (head, tail) = self.balls.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if resolve_ball_pair(a, b) {
                    log::debug!("Tick {}: balls {} and {} collided", self.ticks, a.id, b.id);
                }
            }
        }
    }

    /// Filter-and-rebuild; never removes while indexing
    fn remove_pocketed(&mut self) {
        let table = &self.table;
        let pocketed = &mut self.pocketed;
        let ticks = self.ticks;
        self.balls.retain(|ball| {
            if table.contains(ball.pos) {
                true
            } else {
                log::info!(
                    "Tick {}: ball {} ({:?}) pocketed at ({:.1}, {:.1})",
                    ticks,
                    ball.id,
                    ball.label,
                    ball.pos.x,
                    ball.pos.y
                );
                pocketed.push(ball.id);
                false
            }
        });
    }

    /// True when no active ball is moving
    pub fn all_stopped(&self) -> bool {
        self.balls
            .iter()
            .all(|b| b.motion() == MotionState::Stopped)
    }

    /// Render-facing frame of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.ticks, &self.table, &self.balls)
    }
}
