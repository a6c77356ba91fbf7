//! Snooker Sim - billiard table physics kernel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (table geometry, balls, collisions, stepping)
//! - `input`: Pointer gesture tracking and the cue launch formula
//! - `settings`: Table/physics configuration persisted as JSON

pub mod input;
pub mod settings;
pub mod sim;

pub use input::{AimController, cue_launch_velocity};
pub use settings::Settings;

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (seconds per tick)
    pub const SIM_DT: f64 = 0.01;

    /// Table dimensions
    pub const TABLE_LENGTH: f64 = 200.0;
    pub const TABLE_WIDTH: f64 = 100.0;
    /// Cushion gap left at each pocket
    pub const HOLE_SIZE: f64 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 5.0;
    /// Speed lost per tick; also the "stopped" threshold
    pub const FRICTION: f64 = 3.0;

    /// Cue launch gain applied to drag strength / aim distance
    pub const LAUNCH_GAIN: f64 = 4.0;

    /// Headless driver safety limit
    pub const MAX_TICKS: u64 = 20_000;
}

/// Angle of the line joining two centers, in [-π/2, π/2]
///
/// Only the line matters, not its direction, so `atan` of the slope is
/// enough. Equal x-coordinates give a vertical line (π/2).
#[inline]
pub fn line_angle(a: DVec2, b: DVec2) -> f64 {
    if a.x == b.x {
        std::f64::consts::FRAC_PI_2
    } else {
        ((a.y - b.y) / (a.x - b.x)).atan()
    }
}

/// Unit vector along an angle
#[inline]
pub fn unit_at(theta: f64) -> DVec2 {
    DVec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_line_angle_vertical() {
        let theta = line_angle(DVec2::new(3.0, 1.0), DVec2::new(3.0, 9.0));
        assert_eq!(theta, FRAC_PI_2);
    }

    #[test]
    fn test_line_angle_ignores_direction() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(2.0, 2.0);
        assert!((line_angle(a, b) - FRAC_PI_4).abs() < 1e-12);
        assert!((line_angle(b, a) - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_unit_at() {
        let n = unit_at(FRAC_PI_2);
        assert!(n.x.abs() < 1e-12);
        assert!((n.y - 1.0).abs() < 1e-12);
    }
}
