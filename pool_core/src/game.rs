//! Match controller: owns every piece of match state and drives one tick per frame.

use glam::Vec2;
use tracing::{debug, info};

use crate::geometry::any_ball_moving;
use crate::rack::rack;
use crate::systems::{apply_pocket_events, cue_position, end_turn, handle_aim, place_cue_ball};
use crate::{
    step, AimState, Ball, Config, Events, MatchPhase, MatchState, Params, Player, PointerInput,
};

/// A single 8-ball match between two players at one table
#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    balls: [Ball; Params::BALL_COUNT],
    state: MatchState,
    aim: AimState,
    events: Events,
    balls_moving: bool,
    shots: u32,
    ticks: u64,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let balls = rack(&config);
        let state = MatchState::new(&config);
        let aim = AimState::new(config.stick_length);
        Self {
            config,
            balls,
            state,
            aim,
            events: Events::new(),
            balls_moving: false,
            shots: 0,
            ticks: 0,
        }
    }

    /// Throw away the current match and rack a fresh one
    pub fn reset(&mut self) {
        self.balls = rack(&self.config);
        self.state = MatchState::new(&self.config);
        self.aim = AimState::new(self.config.stick_length);
        self.events.clear();
        self.balls_moving = false;
        self.shots = 0;
        self.ticks = 0;
        info!("match reset");
    }

    /// Advance the match by one frame
    pub fn update(&mut self, input: &PointerInput) {
        if input.reset {
            self.reset();
            return;
        }

        self.handle_input(input);
        self.aim.update_recoil(
            self.config.tick_seconds(),
            self.config.stick_recoil_decay,
            self.config.max_power_pixels,
        );

        if !self.state.phase.runs_physics() {
            self.events.clear();
            self.balls_moving = false;
            return;
        }

        step(&mut self.balls, &self.config, &mut self.events);
        apply_pocket_events(&mut self.state, &self.events.pockets);
        self.ticks += 1;

        self.balls_moving = any_ball_moving(&self.balls, self.config.min_velocity);
        if !self.balls_moving {
            end_turn(&mut self.state);
        }
    }

    fn handle_input(&mut self, input: &PointerInput) {
        match self.state.phase {
            MatchPhase::Won | MatchPhase::Lost => {}
            MatchPhase::Scratch => {
                if !input.pressed {
                    return;
                }
                let placed =
                    place_cue_ball(&mut self.state, &mut self.balls, &self.config, input.position);
                if let Err(err) = placed {
                    debug!(%err, "cue placement rejected");
                    self.state.status = err.to_string();
                }
            }
            MatchPhase::Start | MatchPhase::Playing => {
                if self.balls_moving {
                    return;
                }
                let was_in_progress = self.state.shot_in_progress;
                handle_aim(
                    &mut self.aim,
                    &mut self.state,
                    &mut self.balls,
                    &self.config,
                    input,
                );
                if self.state.shot_in_progress && !was_in_progress {
                    self.shots += 1;
                }
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Direct access to ball positions, for practice layouts
    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.state.players
    }

    pub fn current_player(&self) -> usize {
        self.state.current
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn status(&self) -> &str {
        &self.state.status
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn aim(&self) -> &AimState {
        &self.aim
    }

    /// What happened during the last simulated tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn winner(&self) -> Option<usize> {
        self.state.winner()
    }

    pub fn is_break(&self) -> bool {
        self.state.first_shot
    }

    pub fn types_assigned(&self) -> bool {
        self.state.types_assigned
    }

    pub fn balls_moving(&self) -> bool {
        self.balls_moving
    }

    /// Whether a press at this point would pick up the cue
    pub fn can_start_aim(&self, point: Vec2) -> bool {
        self.state.phase.accepts_shots()
            && !self.balls_moving
            && point.distance(self.cue_position()) <= self.config.cue_grab_radius()
    }

    pub fn cue_position(&self) -> Vec2 {
        cue_position(&self.balls, &self.config)
    }

    pub fn pockets(&self) -> [Vec2; 6] {
        self.config.pockets()
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
