use crate::geometry::clamp_speed;
use crate::{Ball, Config, Events};

/// Advance every ball on the table by one tick: move, apply felt friction,
/// settle creeping components, bounce off the rails and cap the speed.
pub fn integrate(balls: &mut [Ball], config: &Config, events: &mut Events) {
    let area = config.play_area();

    for ball in balls.iter_mut().filter(|b| !b.pocketed) {
        ball.pos += ball.vel;

        // Exponential decay, not a constant deceleration
        ball.vel *= config.friction;

        if ball.vel.x.abs() < config.min_velocity {
            ball.vel.x = 0.0;
        }
        if ball.vel.y.abs() < config.min_velocity {
            ball.vel.y = 0.0;
        }

        let mut bounced = false;
        if ball.pos.x < area.min.x {
            ball.pos.x = area.min.x;
            ball.vel.x = -ball.vel.x * config.rail_restitution;
            bounced = true;
        }
        if ball.pos.x > area.max.x {
            ball.pos.x = area.max.x;
            ball.vel.x = -ball.vel.x * config.rail_restitution;
            bounced = true;
        }
        if ball.pos.y < area.min.y {
            ball.pos.y = area.min.y;
            ball.vel.y = -ball.vel.y * config.rail_restitution;
            bounced = true;
        }
        if ball.pos.y > area.max.y {
            ball.pos.y = area.max.y;
            ball.vel.y = -ball.vel.y * config.rail_restitution;
            bounced = true;
        }
        if bounced {
            events.rail_hits += 1;
        }

        ball.vel = clamp_speed(ball.vel, config.max_ball_speed);
    }
}
