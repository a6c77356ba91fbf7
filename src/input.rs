//! Cue input: turns pointer gestures into a launch velocity
//!
//! The pointer layer reports press, move and release; the controller keeps
//! the aim point and the drag point and, on release, computes the strike.
//! The strike is held until the host feeds it to the next tick.

use glam::DVec2;

use crate::consts::LAUNCH_GAIN;
use crate::sim::{Table, TickInput};

/// Launch velocity for a cue ball at `cue`, aimed at `aim`, released at `release`
///
/// Strength is the drag distance from the aim point; the velocity points
/// from the cue ball to the aim point and scales with
/// `LAUNCH_GAIN * strength / |aim - cue|`. Aiming at the cue center itself
/// gives no direction, so no launch.
pub fn cue_launch_velocity(cue: DVec2, aim: DVec2, release: DVec2) -> Option<DVec2> {
    let strength = release.distance(aim);
    let norm = cue.distance(aim);
    if norm == 0.0 {
        return None;
    }
    let alpha = LAUNCH_GAIN * strength / norm;
    Some((aim - cue) * alpha)
}

/// Pointer gesture state
#[derive(Debug, Clone, Default)]
pub struct AimController {
    /// Button held: the aim point is frozen while dragging
    aiming: bool,
    aim: DVec2,
    pointer: DVec2,
    pending: Option<DVec2>,
    /// Clamping bounds (length, width)
    bounds: DVec2,
}

impl AimController {
    pub fn new(table: &Table) -> Self {
        Self {
            bounds: DVec2::new(table.length, table.width),
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    #[inline]
    pub fn aim_point(&self) -> DVec2 {
        self.aim
    }

    #[inline]
    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    pub fn pointer_down(&mut self) {
        self.aiming = true;
    }

    /// Pointer moved; positions are clamped onto the table
    pub fn pointer_move(&mut self, p: DVec2) {
        let p = p.clamp(DVec2::ZERO, self.bounds);
        self.pointer = p;
        if !self.aiming {
            self.aim = p;
        }
    }

    /// Release the button and compute the strike for the current cue position
    pub fn pointer_up(&mut self, cue: DVec2) -> Option<DVec2> {
        self.aiming = false;
        self.pending = cue_launch_velocity(cue, self.aim, self.pointer);
        if self.pending.is_none() {
            log::warn!("Release ignored: aim point is on the cue ball");
        }
        self.pending
    }

    /// Hand the pending strike over exactly once
    pub fn take_launch(&mut self) -> Option<DVec2> {
        self.pending.take()
    }

    /// Input for the next tick, consuming any pending strike
    pub fn next_input(&mut self) -> TickInput {
        TickInput {
            launch: self.take_launch(),
        }
    }

    /// Endpoints of the aim guide (cue ball to aim point)
    pub fn aim_line(&self, cue: DVec2) -> [DVec2; 2] {
        [cue, self.aim]
    }
}
