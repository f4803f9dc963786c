use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Aabb;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table_width: f32,
    pub table_height: f32,
    pub rail_width: f32,
    pub pocket_radius: f32,
    pub ball_radius: f32,
    pub friction: f32,
    pub min_velocity: f32,
    pub max_ball_speed: f32,
    pub rail_restitution: f32,
    pub max_power_pixels: f32,
    pub max_shot_speed: f32,
    pub stick_length: f32,
    pub stick_recoil_time: f32,
    pub stick_recoil_decay: f32,
    pub tick_rate: u32,
    pub player_names: [String; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_height: Params::TABLE_HEIGHT,
            rail_width: Params::RAIL_WIDTH,
            pocket_radius: Params::POCKET_RADIUS,
            ball_radius: Params::BALL_RADIUS,
            friction: Params::FRICTION,
            min_velocity: Params::MIN_VELOCITY,
            max_ball_speed: Params::MAX_BALL_SPEED,
            rail_restitution: Params::RAIL_RESTITUTION,
            max_power_pixels: Params::MAX_POWER_PIXELS,
            max_shot_speed: Params::MAX_SHOT_SPEED,
            stick_length: Params::STICK_LENGTH,
            stick_recoil_time: Params::STICK_RECOIL_TIME,
            stick_recoil_decay: Params::STICK_RECOIL_DECAY,
            tick_rate: Params::TICK_RATE,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be in (0, 1], got {value}")]
    NotAFraction { name: &'static str, value: f32 },
    #[error("ball radius {radius} leaves no room between the rails")]
    BallTooLarge { radius: f32 },
    #[error("max shot speed {shot} exceeds max ball speed {ball}")]
    ShotFasterThanBall { shot: f32, ball: f32 },
    #[error("tick rate must be at least 1")]
    ZeroTickRate,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the values a match relies on before it starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("table_width", self.table_width),
            ("table_height", self.table_height),
            ("rail_width", self.rail_width),
            ("pocket_radius", self.pocket_radius),
            ("ball_radius", self.ball_radius),
            ("min_velocity", self.min_velocity),
            ("max_ball_speed", self.max_ball_speed),
            ("max_power_pixels", self.max_power_pixels),
            ("max_shot_speed", self.max_shot_speed),
            ("stick_length", self.stick_length),
            ("stick_recoil_time", self.stick_recoil_time),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let fractions = [
            ("friction", self.friction),
            ("rail_restitution", self.rail_restitution),
            ("stick_recoil_decay", self.stick_recoil_decay),
        ];
        for (name, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::NotAFraction { name, value });
            }
        }

        let inner = self.play_area();
        if inner.min.x >= inner.max.x || inner.min.y >= inner.max.y {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
            });
        }

        if self.max_shot_speed > self.max_ball_speed {
            return Err(ConfigError::ShotFasterThanBall {
                shot: self.max_shot_speed,
                ball: self.max_ball_speed,
            });
        }

        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }

    /// Region a ball center may occupy: inside the rails, one radius in
    pub fn play_area(&self) -> Aabb {
        let inset = self.rail_width + self.ball_radius;
        Aabb::new(
            Vec2::new(inset, inset),
            Vec2::new(self.table_width - inset, self.table_height - inset),
        )
    }

    /// Pocket centers: top row left to right, then bottom row left to right
    pub fn pockets(&self) -> [Vec2; 6] {
        let (w, h, rail) = (self.table_width, self.table_height, self.rail_width);
        [
            Vec2::new(rail, rail),
            Vec2::new(w * 0.5, rail),
            Vec2::new(w - rail, rail),
            Vec2::new(rail, h - rail),
            Vec2::new(w * 0.5, h - rail),
            Vec2::new(w - rail, h - rail),
        ]
    }

    /// Where the cue ball starts and respawns after a scratch
    pub fn cue_spot(&self) -> Vec2 {
        let (fx, fy) = Params::CUE_SPOT;
        Vec2::new(self.table_width * fx, self.table_height * fy)
    }

    /// Position of the front ball of the rack
    pub fn rack_apex(&self) -> Vec2 {
        let (fx, fy) = Params::RACK_APEX;
        Vec2::new(self.table_width * fx, self.table_height * fy)
    }

    /// Pointer must be this close to the cue ball to start a drag
    pub fn cue_grab_radius(&self) -> f32 {
        self.ball_radius * Params::CUE_GRAB_FACTOR
    }

    /// Length of one simulation tick in seconds
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_play_area_accounts_for_rail_and_radius() {
        let config = Config::new();
        let area = config.play_area();
        assert_eq!(area.min, Vec2::new(55.0, 55.0));
        assert_eq!(area.max, Vec2::new(745.0, 345.0));
    }

    #[test]
    fn test_pockets_sit_on_rail_corners_and_long_rail_middles() {
        let config = Config::new();
        let pockets = config.pockets();
        assert_eq!(pockets[0], Vec2::new(40.0, 40.0));
        assert_eq!(pockets[1], Vec2::new(400.0, 40.0));
        assert_eq!(pockets[2], Vec2::new(760.0, 40.0));
        assert_eq!(pockets[3], Vec2::new(40.0, 360.0));
        assert_eq!(pockets[4], Vec2::new(400.0, 360.0));
        assert_eq!(pockets[5], Vec2::new(760.0, 360.0));
    }

    #[test]
    fn test_cue_spot_and_rack_apex() {
        let config = Config::new();
        assert_eq!(config.cue_spot(), Vec2::new(200.0, 200.0));
        assert_eq!(config.rack_apex(), Vec2::new(576.0, 200.0));
    }

    #[test]
    fn test_validate_rejects_negative_dimension() {
        let config = Config {
            table_width: -1.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "table_width",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_friction_above_one() {
        let config = Config {
            friction: 1.2,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotAFraction {
                name: "friction",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_ball_wider_than_table() {
        let config = Config {
            ball_radius: 200.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BallTooLarge { radius: 200.0 })
        );
    }

    #[test]
    fn test_validate_rejects_shot_faster_than_ball_cap() {
        let config = Config {
            max_shot_speed: 30.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ShotFasterThanBall { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_tick_rate() {
        let config = Config {
            tick_rate: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "friction": 0.97 }"#).unwrap();
        assert_eq!(config.friction, 0.97);
        assert_eq!(config.table_width, Params::TABLE_WIDTH);
        assert_eq!(config.player_names[1], "Player 2");
    }
}
