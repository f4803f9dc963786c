use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use pool_core::{Config, Game, MatchPhase, PointerInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::bot::{Bot, BotStyle};

/// Knobs for one headless match
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub seed: u64,
    pub max_frames: u64,
    /// Sleep one tick between frames instead of running flat out
    pub realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            max_frames: 200_000,
            realtime: false,
        }
    }
}

/// How a headless match ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub winner: Option<usize>,
    pub winner_name: Option<String>,
    pub phase: MatchPhase,
    pub shots: u32,
    pub scratches: u32,
    /// Ball-rail bounces over the whole match
    pub rail_hits: u64,
    /// Ball-ball contacts over the whole match
    pub collisions: u64,
    pub frames: u64,
    pub ticks: u64,
}

impl MatchSummary {
    pub fn finished(&self) -> bool {
        self.phase.is_over()
    }
}

/// Play one match between two bots, frame by frame
pub fn run_match(config: Config, options: &RunOptions) -> MatchSummary {
    let mut seeder = ChaCha8Rng::seed_from_u64(options.seed);
    let mut bots = [
        Bot::new(BotStyle::random(&mut seeder), options.seed),
        Bot::new(BotStyle::random(&mut seeder), options.seed.wrapping_add(1)),
    ];
    info!(
        seed = options.seed,
        first = ?bots[0].style,
        second = ?bots[1].style,
        "match starting"
    );

    let tick = Duration::from_secs_f32(config.tick_seconds());
    let mut game = Game::new(config);
    let mut script: VecDeque<PointerInput> = VecDeque::new();
    let mut scratches = 0;
    let mut rail_hits = 0;
    let mut collisions = 0;
    let mut frames = 0;

    while frames < options.max_frames && !game.phase().is_over() {
        let input = match script.pop_front() {
            Some(input) => input,
            None => next_input(&game, &mut bots, &mut script),
        };

        game.update(&input);
        frames += 1;

        let events = game.events();
        if events.cue_pocketed() {
            scratches += 1;
        }
        rail_hits += u64::from(events.rail_hits);
        collisions += u64::from(events.collisions);
        if options.realtime {
            thread::sleep(tick);
        }
    }

    let winner = game.winner();
    let summary = MatchSummary {
        winner,
        winner_name: winner.map(|i| game.players()[i].name.clone()),
        phase: game.phase(),
        shots: game.shots(),
        scratches,
        rail_hits,
        collisions,
        frames,
        ticks: game.ticks(),
    };
    info!(
        winner = summary.winner_name.as_deref().unwrap_or("none"),
        shots = summary.shots,
        scratches = summary.scratches,
        rail_hits = summary.rail_hits,
        collisions = summary.collisions,
        frames = summary.frames,
        "match finished"
    );
    summary
}

/// Decide what the player at the table does this frame
fn next_input(
    game: &Game,
    bots: &mut [Bot; 2],
    script: &mut VecDeque<PointerInput>,
) -> PointerInput {
    let idle = PointerInput::idle(game.cue_position());
    if game.balls_moving() {
        return idle;
    }

    let bot = &mut bots[game.current_player()];
    match game.phase() {
        MatchPhase::Scratch => {
            let spot = bot.place_cue(game.config().play_area());
            debug!(player = game.current_player(), x = spot.x, y = spot.y, "placing cue ball");
            PointerInput::press(spot)
        }
        MatchPhase::Start | MatchPhase::Playing if game.can_start_aim(game.cue_position()) => {
            let [press, drag, release] = bot.plan_shot(game);
            script.push_back(drag);
            script.push_back(release);
            press
        }
        MatchPhase::Start | MatchPhase::Playing | MatchPhase::Won | MatchPhase::Lost => idle,
    }
}
