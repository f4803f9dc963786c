use glam::Vec2;

use crate::components::Ball;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Scale `vel` down to `max_speed` if it is faster, keeping its direction
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max_speed {
        vel / speed * max_speed
    } else {
        vel
    }
}

/// True while any ball on the table still has a velocity component above `min_velocity`
pub fn any_ball_moving(balls: &[Ball], min_velocity: f32) -> bool {
    balls
        .iter()
        .filter(|ball| !ball.pocketed)
        .any(|ball| ball.vel.x.abs() > min_velocity || ball.vel.y.abs() > min_velocity)
}
