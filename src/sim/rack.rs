//! Opening layout: cue ball on the left, six reds in a triangle

use glam::DVec2;

use super::state::{Ball, BallLabel};
use crate::settings::Settings;

/// Cue ball starting spot
pub const CUE_SPOT: DVec2 = DVec2::new(50.0, 50.0);

/// Red positions, apex first, rows spreading to the right
pub const RED_SPOTS: [DVec2; 6] = [
    DVec2::new(90.0, 50.0),
    DVec2::new(100.0, 45.0),
    DVec2::new(100.0, 55.0),
    DVec2::new(110.0, 40.0),
    DVec2::new(110.0, 50.0),
    DVec2::new(110.0, 60.0),
];

/// Build the reference rack; the cue ball is always first
pub fn reference_rack(settings: &Settings) -> Vec<Ball> {
    let mut balls = Vec::with_capacity(1 + RED_SPOTS.len());
    balls.push(Ball::new(0, BallLabel::Cue, CUE_SPOT, settings.ball_radius));
    for (i, spot) in RED_SPOTS.iter().enumerate() {
        balls.push(Ball::new(
            i as u32 + 1,
            BallLabel::Red,
            *spot,
            settings.ball_radius,
        ));
    }
    balls
}
