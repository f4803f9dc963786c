use glam::Vec2;

use crate::components::{BallKind, Player};
use crate::Config;

/// A ball dropping into a pocket during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PocketEvent {
    /// The cue ball went down
    Scratch { pocket: usize },
    /// Any numbered ball went down, eight included
    Object {
        number: u8,
        kind: BallKind,
        pocket: usize,
    },
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub pockets: Vec<PocketEvent>,
    pub rail_hits: u32,
    pub collisions: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pockets.clear();
        self.rail_hits = 0;
        self.collisions = 0;
    }

    pub fn cue_pocketed(&self) -> bool {
        self.pockets
            .iter()
            .any(|e| matches!(e, PocketEvent::Scratch { .. }))
    }
}

/// Pointer state for one frame, as polled by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    pub position: Vec2,
    /// Button went down this frame
    pub pressed: bool,
    /// Button is held
    pub down: bool,
    /// Button went up this frame
    pub released: bool,
    /// Restart the match
    pub reset: bool,
}

impl PointerInput {
    /// Pointer hovering with no button activity
    pub fn idle(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn press(position: Vec2) -> Self {
        Self {
            position,
            pressed: true,
            down: true,
            ..Self::default()
        }
    }

    pub fn drag(position: Vec2) -> Self {
        Self {
            position,
            down: true,
            ..Self::default()
        }
    }

    pub fn release(position: Vec2) -> Self {
        Self {
            position,
            released: true,
            ..Self::default()
        }
    }

    pub fn reset() -> Self {
        Self {
            reset: true,
            ..Self::default()
        }
    }
}

/// Overall phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Before the break
    Start,
    Playing,
    /// Cue ball must be placed before play resumes
    Scratch,
    /// Current player pocketed the eight after clearing their group
    Won,
    /// Current player pocketed the eight too early
    Lost,
}

impl MatchPhase {
    pub fn is_over(self) -> bool {
        matches!(self, MatchPhase::Won | MatchPhase::Lost)
    }

    pub fn accepts_shots(self) -> bool {
        matches!(self, MatchPhase::Start | MatchPhase::Playing)
    }

    /// Whether balls are simulated in this phase
    pub fn runs_physics(self) -> bool {
        matches!(self, MatchPhase::Playing | MatchPhase::Scratch)
    }
}

/// Turn and scoring state shared by the rules engine and the controller
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub players: [Player; 2],
    pub current: usize,
    pub phase: MatchPhase,
    pub types_assigned: bool,
    pub first_shot: bool,
    pub status: String,
    /// Cue ball went down this tick; applied once every event is handled
    pub pending_scratch: bool,
    /// A shot was struck and its turn has not been evaluated yet
    pub shot_in_progress: bool,
    /// Shooter's remaining group count when the current shot was struck
    pub remaining_at_shot: u8,
}

impl MatchState {
    pub fn new(config: &Config) -> Self {
        let per_group = crate::Params::BALLS_PER_GROUP;
        let [first, second] = &config.player_names;
        Self {
            players: [
                Player::new(first.clone(), per_group),
                Player::new(second.clone(), per_group),
            ],
            current: 0,
            phase: MatchPhase::Start,
            types_assigned: false,
            first_shot: true,
            status: "Break shot: click on cue, drag back, release to shoot".to_string(),
            pending_scratch: false,
            shot_in_progress: false,
            remaining_at_shot: per_group,
        }
    }

    pub fn opponent(&self) -> usize {
        1 - self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn switch_player(&mut self) {
        self.current = self.opponent();
    }

    /// Index of the player who won, once the match is over
    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            MatchPhase::Won => Some(self.current),
            MatchPhase::Lost => Some(self.opponent()),
            MatchPhase::Start | MatchPhase::Playing | MatchPhase::Scratch => None,
        }
    }
}

/// Cue stick charge and recoil animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimState {
    pub aiming: bool,
    pub drag_origin: Vec2,
    /// Pointer-to-cue distance while dragging, uncapped
    pub pull: f32,
    /// `pull` over the max power pixels; may exceed 1 while dragging
    pub power: f32,
    pub stick_length: f32,
    pub recoil_active: bool,
    pub recoil_timer: f32,
}

impl AimState {
    pub fn new(stick_length: f32) -> Self {
        Self {
            aiming: false,
            drag_origin: Vec2::ZERO,
            pull: 0.0,
            power: 0.0,
            stick_length,
            recoil_active: false,
            recoil_timer: 0.0,
        }
    }

    pub fn begin(&mut self, origin: Vec2) {
        self.aiming = true;
        self.drag_origin = origin;
        self.pull = 0.0;
        self.power = 0.0;
    }

    pub fn set_pull(&mut self, pull: f32, max_power_pixels: f32) {
        self.pull = pull;
        self.power = pull / max_power_pixels;
    }

    pub fn cancel(&mut self) {
        self.aiming = false;
        self.pull = 0.0;
        self.power = 0.0;
    }

    pub fn start_recoil(&mut self, duration: f32) {
        self.aiming = false;
        self.recoil_active = true;
        self.recoil_timer = duration;
        self.power = 0.0;
    }

    /// Advance the recoil animation by one tick
    pub fn update_recoil(&mut self, dt: f32, decay: f32, max_power_pixels: f32) {
        if !self.recoil_active {
            return;
        }
        self.recoil_timer -= dt;
        if self.recoil_timer <= 0.0 {
            self.recoil_active = false;
            self.recoil_timer = 0.0;
            self.pull = 0.0;
        } else {
            self.pull *= decay;
            self.power = (self.pull / max_power_pixels).max(0.0);
        }
    }

    /// Power for a power bar, in [0, 1]
    pub fn display_power(&self) -> f32 {
        self.power.clamp(0.0, 1.0)
    }
}
