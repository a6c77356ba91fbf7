//! Collision detection and response
//!
//! Cushions: a ball touching a cushion span while moving into it has the
//! normal velocity component negated. Only the first matching cushion in
//! table order reflects, so a ball near a corner never double-reflects.
//!
//! Balls: equal-mass, frictionless, perfectly elastic. The velocity
//! components along the line of centers are swapped; tangential components
//! stay. Overlap is never corrected positionally.

use glam::DVec2;

use super::state::Ball;
use super::table::Cushion;
use crate::{line_angle, unit_at};

/// Index of the first cushion the ball is hitting, in table order
///
/// A hit needs all three of: center closer than `radius` to the cushion
/// line, center strictly inside the span, and normal velocity pointing
/// toward the cushion.
pub fn cushion_hit(ball: &Ball, cushions: &[Cushion]) -> Option<usize> {
    cushions.iter().position(|cushion| {
        let offset = cushion.normal_component(ball.pos) - cushion.fixed;
        offset.abs() < ball.radius()
            && cushion.span_contains(cushion.tangent_component(ball.pos))
            && cushion.normal_component(ball.vel) * offset < 0.0
    })
}

/// Reflect off the first matching cushion, if any
pub fn resolve_cushion(ball: &mut Ball, cushions: &[Cushion]) -> Option<usize> {
    let index = cushion_hit(ball, cushions)?;
    ball.vel = cushions[index].reflect(ball.vel);
    Some(index)
}

#[inline]
pub fn balls_overlap(a: &Ball, b: &Ball) -> bool {
    let reach = a.radius() + b.radius();
    a.pos.distance_squared(b.pos) < reach * reach
}

/// Relative position and relative velocity point against each other
#[inline]
pub fn balls_approaching(a: &Ball, b: &Ball) -> bool {
    (a.pos - b.pos).dot(a.vel - b.vel) < 0.0
}

/// Swap the velocity components along the line of centers
pub fn exchange_normal_velocity(a: &mut Ball, b: &mut Ball) {
    let n = unit_at(line_angle(a.pos, b.pos));
    let (va, vb) = exchanged(n, a.vel, b.vel);
    a.vel = va;
    b.vel = vb;
}

#[inline]
fn exchanged(n: DVec2, va: DVec2, vb: DVec2) -> (DVec2, DVec2) {
    let a_normal = n * va.dot(n);
    let b_normal = n * vb.dot(n);
    (va - a_normal + b_normal, vb - b_normal + a_normal)
}

/// Resolve a pair if it is touching and closing; returns whether it did
pub fn resolve_ball_pair(a: &mut Ball, b: &mut Ball) -> bool {
    if balls_overlap(a, b) && balls_approaching(a, b) {
        exchange_normal_velocity(a, b);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BallLabel;
    use crate::sim::table::Table;
    use proptest::prelude::*;

    fn ball(x: f64, y: f64, vx: f64, vy: f64, r: f64) -> Ball {
        let mut b = Ball::new(0, BallLabel::Red, DVec2::new(x, y), r);
        b.set_velocity(DVec2::new(vx, vy));
        b
    }

    #[test]
    fn test_head_on_cushion_reflection() {
        let table = Table::default();
        // Right cushion at x=200
        let mut b = ball(197.0, 50.0, 40.0, 7.0, 5.0);
        let speed = b.speed();

        let hit = resolve_cushion(&mut b, table.cushions());
        assert_eq!(hit, Some(5));
        assert_eq!(b.vel, DVec2::new(-40.0, 7.0));
        assert_eq!(b.speed(), speed);
    }

    #[test]
    fn test_cushion_ignores_receding_ball() {
        let table = Table::default();
        let mut b = ball(197.0, 50.0, -40.0, 0.0, 5.0);
        assert_eq!(resolve_cushion(&mut b, table.cushions()), None);
        assert_eq!(b.vel, DVec2::new(-40.0, 0.0));
    }

    #[test]
    fn test_cushion_ignores_pocket_gap() {
        let table = Table::default();
        // Middle pocket gap on the bottom edge spans x in [90, 110]
        let b = ball(100.0, 3.0, 0.0, -30.0, 5.0);
        assert_eq!(cushion_hit(&b, table.cushions()), None);
    }

    #[test]
    fn test_cushion_needs_contact() {
        let table = Table::default();
        let b = ball(50.0, 6.0, 0.0, -30.0, 5.0);
        assert_eq!(cushion_hit(&b, table.cushions()), None);
    }

    #[test]
    fn test_first_matching_cushion_wins() {
        let cushions = [
            Cushion::horizontal(0.0, 0.0, 100.0),
            Cushion::vertical(0.0, 0.0, 100.0),
        ];
        let mut b = ball(3.0, 3.0, -10.0, -10.0, 5.0);

        assert_eq!(resolve_cushion(&mut b, &cushions), Some(0));
        // Only one reflection per call
        assert_eq!(b.vel, DVec2::new(-10.0, 10.0));
    }

    #[test]
    fn test_overlap_and_approach() {
        let a = ball(0.0, 0.0, 1.0, 0.0, 5.0);
        let b = ball(9.0, 0.0, 0.0, 0.0, 5.0);
        assert!(balls_overlap(&a, &b));
        assert!(balls_approaching(&a, &b));

        let c = ball(10.0, 0.0, 0.0, 0.0, 5.0);
        assert!(!balls_overlap(&a, &c));

        let receding = ball(9.0, 0.0, 5.0, 0.0, 5.0);
        assert!(!balls_approaching(&a, &receding));
    }

    #[test]
    fn test_receding_pair_untouched() {
        let mut a = ball(0.0, 0.0, -1.0, 0.0, 5.0);
        let mut b = ball(8.0, 0.0, 1.0, 0.0, 5.0);
        assert!(!resolve_ball_pair(&mut a, &mut b));
        assert_eq!(a.vel, DVec2::new(-1.0, 0.0));
        assert_eq!(b.vel, DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_head_on_swaps_velocities() {
        let mut a = ball(0.0, 0.0, 10.0, 0.0, 5.0);
        let mut b = ball(9.0, 0.0, 0.0, 0.0, 5.0);
        assert!(resolve_ball_pair(&mut a, &mut b));
        assert!(a.vel.length() < 1e-12);
        assert!((b.vel - DVec2::new(10.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_momentum_regression_sweep() {
        let mut theta = 0.0;
        while theta < std::f64::consts::FRAC_PI_2 {
            let mut a = ball(20.0, 20.0, 0.0, 0.0, 10.0);
            let mut b = ball(
                20.0 + 20.0 * theta.cos(),
                20.0 + 20.0 * theta.sin(),
                -10.0,
                0.0,
                10.0,
            );
            exchange_normal_velocity(&mut a, &mut b);

            assert!(
                (a.vel.x + b.vel.x + 10.0).abs() < 0.01,
                "x momentum off at theta={}",
                theta
            );
            assert!(
                (a.vel.y + b.vel.y).abs() < 0.01,
                "y momentum off at theta={}",
                theta
            );
            theta += 0.1;
        }
    }

    #[test]
    fn test_vertical_line_of_centers() {
        let mut a = ball(20.0, 20.0, 3.0, 8.0, 5.0);
        let mut b = ball(20.0, 28.0, -2.0, -6.0, 5.0);
        assert!(resolve_ball_pair(&mut a, &mut b));

        assert!(a.vel.is_finite() && b.vel.is_finite());
        // y components swapped, x components kept
        assert!((a.vel - DVec2::new(3.0, -6.0)).length() < 1e-12);
        assert!((b.vel - DVec2::new(-2.0, 8.0)).length() < 1e-12);
    }

    proptest! {
        #[test]
        fn elastic_exchange_conserves_momentum_and_energy(
            x1 in 0.0f64..200.0, y1 in 0.0f64..100.0,
            dx in -10.0f64..10.0, dy in -10.0f64..10.0,
            v1x in -100.0f64..100.0, v1y in -100.0f64..100.0,
            v2x in -100.0f64..100.0, v2y in -100.0f64..100.0,
        ) {
            let mut a = ball(x1, y1, v1x, v1y, 5.0);
            let mut b = ball(x1 + dx, y1 + dy, v2x, v2y, 5.0);
            let momentum = a.vel + b.vel;
            let energy = a.vel.length_squared() + b.vel.length_squared();

            let n = unit_at(line_angle(a.pos, b.pos));
            let t = n.perp();
            let (a_t, b_t) = (a.vel.dot(t), b.vel.dot(t));

            exchange_normal_velocity(&mut a, &mut b);

            prop_assert!(((a.vel + b.vel) - momentum).length() < 1e-9);
            let after = a.vel.length_squared() + b.vel.length_squared();
            prop_assert!((after - energy).abs() < 1e-9 * energy.max(1.0));
            prop_assert!((a.vel.dot(t) - a_t).abs() < 1e-9);
            prop_assert!((b.vel.dot(t) - b_t).abs() < 1e-9);
        }
    }
}
