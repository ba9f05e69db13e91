//! Win detection.

use crate::board::{Color, GameState, TokenStatus};

/// Returns true if every token of `color` is home.
pub fn has_finished(state: &GameState, color: Color) -> bool {
    state.tokens_of(color).all(|t| t.status() == TokenStatus::Home)
}

/// Returns the winner implied by a move of `mover`, if that move completed
/// its color. Only the mover's color can complete on its own move.
pub fn winner_after_move(state: &GameState, mover: Color) -> Option<Color> {
    has_finished(state, mover).then_some(mover)
}
