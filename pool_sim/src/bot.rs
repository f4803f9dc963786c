//! Bot shooters that play a match through the same pointer input a person would.
//!
//! A bot:
//! - Picks the nearest ball it is allowed to go for
//! - Drags back from the cue ball with a random pull, aimed with some wobble
//! - Drops the cue ball at a random spot when it has ball in hand

use glam::Vec2;
use pool_core::geometry::Aabb;
use pool_core::{BallKind, Game, Group, PointerInput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How a bot lines up and strikes its shots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotStyle {
    /// Small aim error, medium pace
    Careful,
    /// Large aim error, hits hard
    Wild,
}

impl BotStyle {
    /// Maximum aim error either side of the target line, in radians
    fn aim_wobble(&self) -> f32 {
        match self {
            BotStyle::Careful => 0.03,
            BotStyle::Wild => 0.15,
        }
    }

    /// Pull range as a fraction of full power (min, max)
    fn pull_range(&self) -> (f32, f32) {
        match self {
            BotStyle::Careful => (0.45, 0.8),
            BotStyle::Wild => (0.7, 1.2),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            BotStyle::Careful
        } else {
            BotStyle::Wild
        }
    }
}

/// A seeded, deterministic bot player
#[derive(Debug)]
pub struct Bot {
    pub style: BotStyle,
    rng: ChaCha8Rng,
}

impl Bot {
    pub fn new(style: BotStyle, seed: u64) -> Self {
        Self {
            style,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Press, drag and release frames for the current player's next shot
    pub fn plan_shot(&mut self, game: &Game) -> [PointerInput; 3] {
        let cue = game.cue_position();
        let target = pick_target(game).unwrap_or_else(|| game.config().rack_apex());
        let line = (target - cue).try_normalize().unwrap_or(Vec2::X);

        let wobble = self.style.aim_wobble();
        let dir = Vec2::from_angle(self.rng.gen_range(-wobble..=wobble)).rotate(line);

        let (lo, hi) = self.style.pull_range();
        let pull = self.rng.gen_range(lo..=hi) * game.config().max_power_pixels;
        let release = cue + dir * pull;

        [
            PointerInput::press(cue),
            PointerInput::drag(release),
            PointerInput::release(release),
        ]
    }

    /// Somewhere to drop the cue ball after a scratch
    pub fn place_cue(&mut self, area: Aabb) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(area.min.x..=area.max.x),
            self.rng.gen_range(area.min.y..=area.max.y),
        )
    }
}

/// Nearest ball the current player may aim at: their own group, any object
/// ball while the table is open, or the eight once their group is cleared.
pub fn pick_target(game: &Game) -> Option<Vec2> {
    let player = &game.players()[game.current_player()];
    let cue = game.cue_position();

    let wanted = |kind: BallKind| match (player.group, kind) {
        (_, BallKind::Cue) => false,
        (_, BallKind::Eight) => player.has_cleared_group(),
        (Group::None, BallKind::Solid | BallKind::Stripe) => true,
        (group, kind) => kind.group() == Some(group) && !player.has_cleared_group(),
    };

    game.balls()
        .iter()
        .filter(|b| !b.pocketed && wanted(b.kind))
        .map(|b| b.pos)
        .min_by(|a, b| a.distance(cue).total_cmp(&b.distance(cue)))
}
