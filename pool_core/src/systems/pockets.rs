use tracing::debug;

use crate::geometry::distance;
use crate::{Ball, BallKind, Config, Events, PocketEvent};

/// Drop balls whose center is inside a pocket's capture radius.
///
/// Balls are scanned in index order and pockets in `Config::pockets` order;
/// the first pocket in range takes the ball. The scan ends as soon as the
/// eight ball goes down, since that decides the match.
pub fn detect_pockets(balls: &mut [Ball], config: &Config, events: &mut Events) {
    let pockets = config.pockets();

    for ball in balls.iter_mut().filter(|b| !b.pocketed) {
        let Some(pocket) = pockets
            .iter()
            .position(|&center| distance(ball.pos, center) < config.pocket_radius)
        else {
            continue;
        };

        ball.pocketed = true;
        ball.vel = glam::Vec2::ZERO;
        debug!(number = ball.number, pocket, "ball pocketed");

        let event = match ball.kind {
            BallKind::Cue => PocketEvent::Scratch { pocket },
            kind @ (BallKind::Solid | BallKind::Stripe | BallKind::Eight) => PocketEvent::Object {
                number: ball.number,
                kind,
                pocket,
            },
        };
        events.pockets.push(event);

        if ball.kind == BallKind::Eight {
            break;
        }
    }
}
