//! Legal move generation.
//!
//! Decides which tokens the active color may move for the current die
//! value, and computes the path each move takes.

pub mod path;

pub use path::{landing, move_path, RELEASE_ROLL};

use rand::Rng;

use crate::board::{Color, GameState, Phase, Token, TokenId};

/// Returns true if `token` may move for `color` with `roll`.
///
/// The token must belong to the color, must not be home, and the roll must
/// either release it from base or keep it within the finish.
pub fn is_move_valid(token: &Token, color: Color, roll: u8) -> bool {
    token.color() == color && landing(token, roll).is_some()
}

/// Returns the tokens of `color` that can play `roll`, in slot order.
pub fn candidates(state: &GameState, color: Color, roll: u8) -> Vec<TokenId> {
    state
        .tokens_of(color)
        .filter(|t| is_move_valid(t, color, roll))
        .map(|t| t.id)
        .collect()
}

/// Returns true if the active color has any legal move for `roll`.
pub fn has_any_move(state: &GameState, roll: u8) -> bool {
    let color = state.active_color();
    state.tokens_of(color).any(|t| is_move_valid(t, color, roll))
}

/// Returns the movable set for the current state.
///
/// Only non-empty while the phase is `Moving` with a die value present.
pub fn movable_tokens(state: &GameState) -> Vec<TokenId> {
    match (state.phase, state.dice_value) {
        (Phase::Moving, Some(roll)) => candidates(state, state.active_color(), roll),
        _ => Vec::new(),
    }
}

/// Picks one movable token uniformly at random, if any.
pub fn random_movable(state: &GameState, rng: &mut impl Rng) -> Option<TokenId> {
    let movable = movable_tokens(state);
    if movable.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..movable.len());
    Some(movable[idx])
}
