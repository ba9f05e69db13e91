//! Game state representation.
//!
//! Holds the complete snapshot of a Ludo session: whose turn it is, the
//! turn phase, the pending die value, the winner, and all sixteen tokens.

use serde::Serialize;

use super::color::Color;
use super::token::{initial_tokens, Token, TokenId, TOKEN_COUNT};

/// The phase within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Rolling,
    Moving,
    Finished,
}

impl Phase {
    /// Returns the lowercase name used in logs and JSON.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Rolling => "rolling",
            Phase::Moving => "moving",
            Phase::Finished => "finished",
        }
    }
}

/// Complete game state at a point in time.
///
/// Tokens live in a fixed array indexed by [`TokenId::index`], so the state
/// is trivially copyable and every transition can produce a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub active_color_index: usize,
    pub phase: Phase,
    pub dice_value: Option<u8>,
    pub winner: Option<Color>,
    pub tokens: [Token; TOKEN_COUNT],
}

impl GameState {
    /// Creates the lifecycle-start state: every token in base, red to roll.
    pub fn new() -> Self {
        GameState {
            active_color_index: 0,
            phase: Phase::Rolling,
            dice_value: None,
            winner: None,
            tokens: initial_tokens(),
        }
    }

    /// Returns the color whose turn it is.
    pub const fn active_color(&self) -> Color {
        Color::from_index(self.active_color_index)
    }

    /// Returns the token with the given id.
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.tokens[id.index()]
    }

    /// Iterates the four tokens of one color.
    pub fn tokens_of(&self, color: Color) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.color() == color)
    }

    /// Returns true once a color has won.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
