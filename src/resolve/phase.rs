//! Turn sequencing.
//!
//! Pure transitions for the Rolling -> Moving -> Rolling/Finished cycle.
//! Each transition takes a state by reference and returns a fresh state,
//! or `None` when the request is not legal right now and must be ignored.
//!
//! Turn flow:
//! - Rolling + roll with a legal move  -> Moving (die kept)
//! - Rolling + roll with no legal move -> Rolling, next color unless the roll was a six
//! - Moving  + move                    -> Finished on a win, otherwise Rolling,
//!   same color on a six or a capture, next color otherwise

use serde::Serialize;

use crate::board::{Color, Coord, GameState, Phase, TokenId, COLOR_COUNT};
use crate::movegen::{has_any_move, is_move_valid, landing, move_path, RELEASE_ROLL};

use super::capture::{resolve_captures, Capture};
use super::win::winner_after_move;

/// Lowest and highest face of the die.
pub const DIE_MIN: u8 = 1;
pub const DIE_MAX: u8 = 6;

/// Outcome of an accepted roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollResult {
    pub state: GameState,
    pub value: u8,
    /// True when the roll had no legal move and the turn resolved immediately.
    pub forfeited: bool,
}

/// Everything presentation code needs to replay one move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEvent {
    pub sequence: u64,
    pub token: TokenId,
    pub roll: u8,
    pub from: Coord,
    pub path: Vec<Coord>,
    pub captured: Vec<Capture>,
    pub landed: Coord,
    pub extra_turn: bool,
    pub winner: Option<Color>,
}

/// Returns the index of the color that plays after `index`.
pub const fn next_color_index(index: usize) -> usize {
    (index + 1) % COLOR_COUNT
}

/// Applies a die roll of `value`.
///
/// Returns `None` if the game is not waiting for a roll or `value` is not a
/// die face.
pub fn apply_roll(state: &GameState, value: u8) -> Option<RollResult> {
    if state.phase != Phase::Rolling || state.dice_value.is_some() {
        return None;
    }
    if !(DIE_MIN..=DIE_MAX).contains(&value) {
        return None;
    }

    let mut next = *state;
    if has_any_move(state, value) {
        next.phase = Phase::Moving;
        next.dice_value = Some(value);
        return Some(RollResult {
            state: next,
            value,
            forfeited: false,
        });
    }

    if value != RELEASE_ROLL {
        next.active_color_index = next_color_index(state.active_color_index);
    }
    next.phase = Phase::Rolling;
    next.dice_value = None;
    Some(RollResult {
        state: next,
        value,
        forfeited: true,
    })
}

/// Moves `id` by the pending die value.
///
/// Returns `None` if the game is not waiting for a move or the token is not
/// in the movable set. `sequence` is stamped onto the returned event.
pub fn apply_move(state: &GameState, id: TokenId, sequence: u64) -> Option<(GameState, MoveEvent)> {
    if state.phase != Phase::Moving {
        return None;
    }
    let roll = state.dice_value?;
    let color = state.active_color();
    let before = *state.tokens.get(id.index()).filter(|t| t.id == id)?;
    if !is_move_valid(&before, color, roll) {
        return None;
    }
    let placement = landing(&before, roll)?;
    let path = move_path(&before, roll);

    let mut next = *state;
    next.token_mut(id).placement = placement;
    let captured = resolve_captures(&mut next, id);
    let landed = next.token(id).coord();
    next.dice_value = None;

    let winner = winner_after_move(&next, color);
    let extra_turn = match winner {
        Some(w) => {
            next.winner = Some(w);
            next.phase = Phase::Finished;
            false
        }
        None => {
            let extra = roll == RELEASE_ROLL || !captured.is_empty();
            next.phase = Phase::Rolling;
            if !extra {
                next.active_color_index = next_color_index(state.active_color_index);
            }
            extra
        }
    };

    let event = MoveEvent {
        sequence,
        token: id,
        roll,
        from: before.coord(),
        path,
        captured,
        landed,
        extra_turn,
        winner,
    };
    Some((next, event))
}
