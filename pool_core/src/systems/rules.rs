use glam::Vec2;
use thiserror::Error;
use tracing::{info, trace};

use crate::geometry::distance;
use crate::{Ball, BallKind, Config, Group, MatchPhase, MatchState, PocketEvent};

/// Why a cue ball placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Invalid position! Place inside rails")]
    OutOfBounds,
    #[error("Invalid position! Ball {number} is in the way")]
    Overlapping { number: u8 },
    #[error("Cue ball is not in hand")]
    NotInHand,
}

/// Apply one tick's pocketing events to the match, in the order they happened.
///
/// A scratch is only recorded while the events are walked and takes effect
/// after the last one. The eight ball ends processing immediately.
pub fn apply_pocket_events(state: &mut MatchState, events: &[PocketEvent]) {
    let mut assigned_now = false;
    let mut object_pocketed = false;

    for event in events {
        match *event {
            PocketEvent::Scratch { .. } => state.pending_scratch = true,
            PocketEvent::Object {
                kind: BallKind::Eight,
                ..
            } => {
                resolve_eight_ball(state);
                return;
            }
            PocketEvent::Object { kind, .. } => {
                object_pocketed = true;
                let Some(group) = kind.group() else {
                    continue;
                };
                if !state.types_assigned {
                    assign_groups(state, group);
                    assigned_now = true;
                }
                if let Some(owner) = owner_of(state, group) {
                    state.players[owner].pocket_one();
                }
            }
        }
    }

    if state.pending_scratch {
        apply_scratch(state);
    } else if object_pocketed && !assigned_now {
        state.status = format!("{} pocketed a ball!", state.current_player().name);
    }
}

/// Index of the player who owns `group`, if groups are assigned
pub fn owner_of(state: &MatchState, group: Group) -> Option<usize> {
    state.players.iter().position(|p| p.group == group)
}

fn assign_groups(state: &mut MatchState, group: Group) {
    let (me, them) = (state.current, state.opponent());
    state.players[me].group = group;
    state.players[them].group = group.opposite();
    state.types_assigned = true;
    state.status = format!(
        "{} = {}, {} = {}",
        state.players[me].name,
        group.label(),
        state.players[them].name,
        group.opposite().label()
    );
    info!(player = me, group = group.label(), "groups assigned");
}

fn resolve_eight_ball(state: &mut MatchState) {
    state.pending_scratch = false;
    state.shot_in_progress = false;

    let player = state.current_player();
    let (phase, status) = if player.has_cleared_group() {
        (
            MatchPhase::Won,
            format!("{} pocketed the 8-ball and wins!", player.name),
        )
    } else {
        (
            MatchPhase::Lost,
            format!("{} pocketed the 8-ball early and loses!", player.name),
        )
    };
    state.phase = phase;
    state.status = status;
    info!(player = state.current, phase = ?state.phase, "match decided");
}

fn apply_scratch(state: &mut MatchState) {
    state.pending_scratch = false;
    state.shot_in_progress = false;
    state.phase = MatchPhase::Scratch;
    state.switch_player();
    state.status = "Scratch! Place cue ball".to_string();
    info!(next_player = state.current, "scratch");
}

/// Evaluate the shot once every ball has stopped.
///
/// Only a shot still in progress in `Playing` is evaluated; scratches and
/// decided matches have already been handled when the balls went down.
pub fn end_turn(state: &mut MatchState) {
    if state.phase != MatchPhase::Playing || !state.shot_in_progress {
        return;
    }
    state.shot_in_progress = false;

    // Only the shot that cleared the group keeps the table
    if state.remaining_at_shot > 0 && state.current_player().has_cleared_group() {
        state.status = format!("{}: shoot the 8-ball!", state.current_player().name);
        return;
    }

    state.switch_player();
    state.status = format!("{}'s turn", state.current_player().name);
    trace!(player = state.current, "turn passed");
}

/// Put the cue ball back on the table after a scratch.
///
/// The point must be inside the rails with room for the ball and clear of
/// every object ball still on the table. On success play resumes with the
/// player who was handed the scratch; the turn does not change again.
pub fn place_cue_ball(
    state: &mut MatchState,
    balls: &mut [Ball],
    config: &Config,
    point: Vec2,
) -> Result<(), PlacementError> {
    if state.phase != MatchPhase::Scratch {
        return Err(PlacementError::NotInHand);
    }
    if !config.play_area().contains(point) {
        return Err(PlacementError::OutOfBounds);
    }
    if let Some(blocker) = balls
        .iter()
        .find(|b| !b.pocketed && !b.is_cue() && distance(b.pos, point) < config.ball_radius * 2.0)
    {
        return Err(PlacementError::Overlapping {
            number: blocker.number,
        });
    }

    let Some(cue) = balls.iter_mut().find(|b| b.is_cue()) else {
        return Err(PlacementError::NotInHand);
    };
    cue.pos = point;
    cue.vel = Vec2::ZERO;
    cue.pocketed = false;

    state.phase = MatchPhase::Playing;
    state.status = format!("Cue placed. {}'s turn", state.current_player().name);
    Ok(())
}
