//! Initial ball layout: cue ball on its spot, fifteen object balls in a triangle.

use glam::Vec2;

use crate::components::{Ball, BallKind};
use crate::params::Params;
use crate::Config;

/// Build a full set of balls in racked position.
///
/// The triangle opens to the right of the apex. Ball numbers are laid out row
/// by row, so the eight lands in the middle of the third row:
///
/// ```text
///  1
///  2  3
///  4  5  6
///  7  8  9 10
/// 11 12 13 14 15
/// ```
///
/// The array index of every ball equals its number.
pub fn rack(config: &Config) -> [Ball; Params::BALL_COUNT] {
    let r = config.ball_radius;
    let apex = config.rack_apex();
    let row_step = r * 2.0 * Params::RACK_ROW_SPACING;

    let mut balls = [Ball::new(0, BallKind::Cue, config.cue_spot()); Params::BALL_COUNT];

    let mut number = 1u8;
    for row in 0..5u8 {
        for col in 0..=row {
            let offset = Vec2::new(
                row as f32 * row_step,
                col as f32 * r * 2.0 - row as f32 * r,
            );
            balls[number as usize] = Ball::new(number, BallKind::for_number(number), apex + offset);
            number += 1;
        }
    }

    balls
}
