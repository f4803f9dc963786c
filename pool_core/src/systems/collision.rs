use glam::Vec2;

use crate::geometry::clamp_speed;
use crate::params::Params;
use crate::{Ball, Config, Events};

/// Resolve ball-ball contacts for every unordered pair, in index order.
///
/// Each overlapping pair is separated and resolved on its own, one after the
/// other. A ball touching two others in the same tick is therefore corrected
/// twice in sequence rather than by a simultaneous solve.
pub fn resolve_collisions(balls: &mut [Ball], config: &Config, events: &mut Events) {
    let min_dist = config.ball_radius * 2.0;

    for i in 0..balls.len() {
        if balls[i].pocketed {
            continue;
        }
        for j in (i + 1)..balls.len() {
            if balls[j].pocketed {
                continue;
            }

            let delta = balls[j].pos - balls[i].pos;
            let dist = delta.length();
            if dist >= min_dist || dist <= Params::COLLISION_EPSILON {
                continue;
            }

            let (head, tail) = balls.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);

            // Equal masses: each ball takes half the penetration
            let normal = delta / dist;
            let push = normal * (0.5 * (min_dist - dist + Params::SEPARATION_BUFFER));
            a.pos -= push;
            b.pos += push;

            resolve_elastic(a, b);

            a.vel = clamp_speed(a.vel, config.max_ball_speed);
            b.vel = clamp_speed(b.vel, config.max_ball_speed);
            events.collisions += 1;
        }
    }
}

/// Equal-mass elastic response: swap the velocity components along the
/// center line and keep the tangential ones.
pub fn resolve_elastic(a: &mut Ball, b: &mut Ball) {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    if dist <= Params::COLLISION_EPSILON {
        return;
    }

    let normal = delta / dist;
    let tangent = normal.perp();

    let (an, at) = (a.vel.dot(normal), a.vel.dot(tangent));
    let (bn, bt) = (b.vel.dot(normal), b.vel.dot(tangent));

    a.vel = compose(normal, tangent, bn, at);
    b.vel = compose(normal, tangent, an, bt);
}

fn compose(normal: Vec2, tangent: Vec2, n: f32, t: f32) -> Vec2 {
    normal * n + tangent * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BallKind;

    const EPS: f32 = 1e-4;

    fn ball(number: u8, pos: Vec2, vel: Vec2) -> Ball {
        let mut b = Ball::new(number, BallKind::for_number(number), pos);
        b.vel = vel;
        b
    }

    fn setup() -> (Config, Events) {
        (Config::new(), Events::new())
    }

    #[test]
    fn test_head_on_transfers_all_velocity() {
        let (config, mut events) = setup();
        let mut balls = vec![
            ball(0, Vec2::new(100.0, 200.0), Vec2::new(10.0, 0.0)),
            ball(1, Vec2::new(128.0, 200.0), Vec2::ZERO),
        ];

        resolve_collisions(&mut balls, &config, &mut events);

        assert!(balls[0].vel.length() < EPS, "Cue ball should stop dead");
        assert!((balls[1].vel.x - 10.0).abs() < EPS);
        assert_eq!(events.collisions, 1);
    }

    #[test]
    fn test_overlap_is_separated_symmetrically() {
        let (config, mut events) = setup();
        let mut balls = vec![
            ball(0, Vec2::new(100.0, 200.0), Vec2::ZERO),
            ball(1, Vec2::new(120.0, 200.0), Vec2::ZERO),
        ];

        resolve_collisions(&mut balls, &config, &mut events);

        let gap = balls[1].pos.x - balls[0].pos.x;
        assert!(gap >= config.ball_radius * 2.0, "Balls should no longer overlap, gap {}", gap);
        assert!((balls[0].pos.x - (100.0 - 5.0005)).abs() < EPS);
        assert!((balls[1].pos.x - (120.0 + 5.0005)).abs() < EPS);
    }

    #[test]
    fn test_normal_components_swap_and_tangential_kept() {
        let (config, mut events) = setup();
        let a_pos = Vec2::new(300.0, 200.0);
        let b_pos = a_pos + Vec2::new(18.0, 18.0);
        let va = Vec2::new(4.0, -1.5);
        let vb = Vec2::new(-2.0, 3.0);
        let mut balls = vec![ball(3, a_pos, va), ball(11, b_pos, vb)];

        resolve_collisions(&mut balls, &config, &mut events);

        // Separation is along the same center line, so the normal is unchanged
        let normal = (b_pos - a_pos).normalize();
        let tangent = normal.perp();
        assert!((balls[0].vel.dot(normal) - vb.dot(normal)).abs() < EPS);
        assert!((balls[1].vel.dot(normal) - va.dot(normal)).abs() < EPS);
        assert!((balls[0].vel.dot(tangent) - va.dot(tangent)).abs() < EPS);
        assert!((balls[1].vel.dot(tangent) - vb.dot(tangent)).abs() < EPS);
    }

    #[test]
    fn test_coincident_centers_skipped() {
        let (config, mut events) = setup();
        let pos = Vec2::new(200.0, 200.0);
        let mut balls = vec![ball(0, pos, Vec2::new(3.0, 0.0)), ball(1, pos, Vec2::ZERO)];

        resolve_collisions(&mut balls, &config, &mut events);

        assert_eq!(balls[0].pos, pos);
        assert_eq!(balls[0].vel, Vec2::new(3.0, 0.0));
        assert!(balls.iter().all(|b| b.vel.is_finite() && b.pos.is_finite()));
        assert_eq!(events.collisions, 0);
    }

    #[test]
    fn test_touching_balls_do_not_collide() {
        let (config, mut events) = setup();
        let mut balls = vec![
            ball(0, Vec2::new(100.0, 200.0), Vec2::new(0.0, 1.0)),
            ball(1, Vec2::new(130.0, 200.0), Vec2::ZERO),
        ];

        resolve_collisions(&mut balls, &config, &mut events);

        assert_eq!(balls[0].vel, Vec2::new(0.0, 1.0));
        assert_eq!(events.collisions, 0);
    }

    #[test]
    fn test_pocketed_balls_ignored() {
        let (config, mut events) = setup();
        let mut balls = vec![
            ball(0, Vec2::new(100.0, 200.0), Vec2::new(10.0, 0.0)),
            ball(1, Vec2::new(110.0, 200.0), Vec2::ZERO),
        ];
        balls[1].pocketed = true;

        resolve_collisions(&mut balls, &config, &mut events);

        assert_eq!(balls[0].vel, Vec2::new(10.0, 0.0));
        assert_eq!(balls[1].pos, Vec2::new(110.0, 200.0));
    }

    #[test]
    fn test_speeds_stay_capped() {
        let (config, mut events) = setup();
        let mut balls = vec![
            ball(0, Vec2::new(100.0, 200.0), Vec2::new(26.0, 0.0)),
            ball(1, Vec2::new(125.0, 205.0), Vec2::new(-26.0, 0.0)),
        ];

        resolve_collisions(&mut balls, &config, &mut events);

        for b in &balls {
            assert!(b.vel.length() <= config.max_ball_speed + EPS);
        }
    }

    #[test]
    fn test_pairs_resolved_in_index_order() {
        let (config, mut events) = setup();
        // Ball 1 overlaps both 0 and 2; both pairs are corrected in the same pass
        let mut balls = vec![
            ball(0, Vec2::new(100.0, 200.0), Vec2::ZERO),
            ball(1, Vec2::new(125.0, 200.0), Vec2::ZERO),
            ball(2, Vec2::new(150.0, 200.0), Vec2::ZERO),
        ];

        resolve_collisions(&mut balls, &config, &mut events);

        assert_eq!(events.collisions, 2);
        assert!(balls[0].pos.x < 100.0);
        assert!(balls[2].pos.x > 150.0);
    }
}
