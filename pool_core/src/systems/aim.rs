use glam::Vec2;
use tracing::debug;

use crate::geometry::distance;
use crate::params::Params;
use crate::{AimState, Ball, Config, MatchPhase, MatchState, PointerInput};

/// Where the cue ball is, or where it will come back if it is in a pocket
pub fn cue_position(balls: &[Ball], config: &Config) -> Vec2 {
    match balls.iter().find(|b| b.is_cue()) {
        Some(cue) if !cue.pocketed => cue.pos,
        _ => config.cue_spot(),
    }
}

/// Turn pointer activity into drag state and, on release, a shot.
///
/// Callers only pass input here while no ball is rolling and the phase
/// accepts shots.
pub fn handle_aim(
    aim: &mut AimState,
    state: &mut MatchState,
    balls: &mut [Ball],
    config: &Config,
    input: &PointerInput,
) {
    let cue = cue_position(balls, config);

    if input.pressed && distance(input.position, cue) <= config.cue_grab_radius() {
        aim.begin(input.position);
    }

    if input.down && aim.aiming {
        aim.set_pull(distance(input.position, cue), config.max_power_pixels);
    }

    if aim.aiming && input.released {
        strike(aim, state, balls, config, input.position - cue);
    }
}

/// Send the cue ball along `direction` with the charge held in `aim`.
///
/// A direction shorter than the shot epsilon cancels the shot without
/// touching any velocity.
pub fn strike(
    aim: &mut AimState,
    state: &mut MatchState,
    balls: &mut [Ball],
    config: &Config,
    direction: Vec2,
) {
    let len = direction.length();
    if len < Params::SHOT_EPSILON {
        aim.cancel();
        debug!("shot cancelled: no direction");
        return;
    }

    let Some(cue) = balls.iter_mut().find(|b| b.is_cue() && !b.pocketed) else {
        aim.cancel();
        return;
    };

    let speed =
        (aim.pull / config.max_power_pixels * config.max_shot_speed).min(config.max_shot_speed);
    cue.vel = direction / len * speed;

    state.phase = MatchPhase::Playing;
    state.first_shot = false;
    state.shot_in_progress = true;
    state.remaining_at_shot = state.current_player().balls_remaining;
    aim.start_recoil(config.stick_recoil_time);
    debug!(speed, player = state.current, "shot");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rack::rack;

    fn setup() -> (AimState, MatchState, [Ball; 16], Config) {
        let config = Config::new();
        (
            AimState::new(config.stick_length),
            MatchState::new(&config),
            rack(&config),
            config,
        )
    }

    #[test]
    fn test_press_near_cue_starts_drag() {
        let (mut aim, mut state, mut balls, config) = setup();
        let near = config.cue_spot() + Vec2::new(20.0, 0.0);

        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::press(near));

        assert!(aim.aiming);
        assert_eq!(aim.drag_origin, near);
    }

    #[test]
    fn test_press_away_from_cue_ignored() {
        let (mut aim, mut state, mut balls, config) = setup();
        let far = config.cue_spot() + Vec2::new(25.0, 0.0);

        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::press(far));

        assert!(!aim.aiming, "Grab radius is 1.6 ball radii");
    }

    #[test]
    fn test_drag_pull_is_uncapped() {
        let (mut aim, mut state, mut balls, config) = setup();
        let cue = config.cue_spot();
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::press(cue));

        let input = PointerInput::drag(cue + Vec2::new(-300.0, 0.0));
        handle_aim(&mut aim, &mut state, &mut balls, &config, &input);

        assert_eq!(aim.pull, 300.0);
        assert!((aim.power - 300.0 / 160.0).abs() < 1e-5);
        assert_eq!(aim.display_power(), 1.0);
    }

    #[test]
    fn test_release_shoots_toward_pointer() {
        let (mut aim, mut state, mut balls, config) = setup();
        let cue = config.cue_spot();
        let target = cue + Vec2::new(0.0, 80.0);
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::press(cue));
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::drag(target));

        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::release(target));

        let vel = balls[0].vel;
        assert!(vel.x.abs() < 1e-5);
        assert!((vel.y - 11.0).abs() < 1e-4, "Half power gives half speed, got {}", vel.y);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert!(!state.first_shot);
        assert!(state.shot_in_progress);
        assert!(aim.recoil_active);
        assert!(!aim.aiming);
        assert_eq!(aim.power, 0.0);
    }

    #[test]
    fn test_shot_speed_capped() {
        let (mut aim, mut state, mut balls, config) = setup();
        let cue = config.cue_spot();
        let target = cue + Vec2::new(-130.0, -100.0);
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::press(cue));
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::drag(target));
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::release(target));

        assert!((balls[0].vel.length() - config.max_shot_speed).abs() < 1e-4);
    }

    #[test]
    fn test_shot_records_shooter_count() {
        let (mut aim, mut state, mut balls, config) = setup();
        state.current = 1;
        state.players[1].balls_remaining = 3;
        state.remaining_at_shot = 7;
        let cue = config.cue_spot();
        let target = cue + Vec2::new(0.0, 40.0);
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::press(cue));
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::drag(target));
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::release(target));

        assert_eq!(state.remaining_at_shot, 3);
    }

    #[test]
    fn test_release_on_cue_cancels() {
        let (mut aim, mut state, mut balls, config) = setup();
        let cue = config.cue_spot();
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::press(cue));
        handle_aim(&mut aim, &mut state, &mut balls, &config, &PointerInput::release(cue));

        assert_eq!(balls[0].vel, Vec2::ZERO);
        assert_eq!(state.phase, MatchPhase::Start);
        assert!(state.first_shot);
        assert!(!state.shot_in_progress);
        assert!(!aim.aiming);
        assert_eq!(aim.pull, 0.0);
    }

    #[test]
    fn test_cue_position_falls_back_to_spot() {
        let (_, _, mut balls, config) = setup();
        balls[0].pos = Vec2::new(300.0, 100.0);
        assert_eq!(cue_position(&balls, &config), Vec2::new(300.0, 100.0));

        balls[0].pocketed = true;
        assert_eq!(cue_position(&balls, &config), config.cue_spot());
    }
}
