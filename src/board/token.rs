//! Tokens and their placement.
//!
//! A token is identified by its color and slot. Its placement is a single
//! enum so the status and position can never disagree: a base token has no
//! position, a track token has a relative position in `0..=56`, and a home
//! token sits on the center.

use serde::{Serialize, Serializer};

use super::color::{Color, ALL_COLORS};
use super::topology::{base_coord, track_coord, Coord, HOME_POSITION, TOKENS_PER_COLOR};

/// Total number of tokens in a game.
pub const TOKEN_COUNT: usize = 16;

/// Identifies one of the sixteen tokens.
///
/// The slot is always in `0..4`, so [`TokenId::index`] is always a valid
/// index into the state's token array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId {
    color: Color,
    slot: u8,
}

impl TokenId {
    /// Creates a token id. Slots outside `0..4` wrap.
    pub const fn new(color: Color, slot: u8) -> Self {
        TokenId { color, slot: slot % TOKENS_PER_COLOR as u8 }
    }

    /// Creates a token id, or `None` if `slot` is not in `0..4`.
    pub const fn try_new(color: Color, slot: u8) -> Option<Self> {
        if (slot as usize) < TOKENS_PER_COLOR {
            Some(TokenId { color, slot })
        } else {
            None
        }
    }

    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn slot(self) -> u8 {
        self.slot
    }

    /// Returns the index of this token in the state's token array.
    pub const fn index(self) -> usize {
        self.color.index() * TOKENS_PER_COLOR + self.slot as usize
    }

    /// Inverse of [`TokenId::index`].
    pub const fn from_index(index: usize) -> Self {
        TokenId::new(Color::from_index(index / TOKENS_PER_COLOR), (index % TOKENS_PER_COLOR) as u8)
    }

    /// Returns the four token ids of a color in slot order.
    pub fn of_color(color: Color) -> [TokenId; TOKENS_PER_COLOR] {
        [0, 1, 2, 3].map(|slot| TokenId::new(color, slot))
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.color, self.slot)
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Coarse token status as seen by presentation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Base,
    Path,
    Home,
}

/// Where a token currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Waiting in the color's base.
    Base,
    /// On the track at a color-relative position in `0..=56`.
    Track(u8),
    /// Finished.
    Home,
}

/// A token on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub id: TokenId,
    pub placement: Placement,
}

impl Token {
    /// Creates a token waiting in base.
    pub const fn in_base(id: TokenId) -> Self {
        Token {
            id,
            placement: Placement::Base,
        }
    }

    pub const fn color(&self) -> Color {
        self.id.color
    }

    pub const fn status(&self) -> TokenStatus {
        match self.placement {
            Placement::Base => TokenStatus::Base,
            Placement::Track(_) => TokenStatus::Path,
            Placement::Home => TokenStatus::Home,
        }
    }

    /// Returns the relative position: `None` in base, `0..=56` on the
    /// track, and 57 once home.
    pub const fn position(&self) -> Option<u8> {
        match self.placement {
            Placement::Base => None,
            Placement::Track(p) => Some(p),
            Placement::Home => Some(HOME_POSITION),
        }
    }

    /// Returns the board cell this token is drawn on.
    pub const fn coord(&self) -> Coord {
        match self.placement {
            Placement::Base => base_coord(self.id.color, self.id.slot as usize),
            Placement::Track(p) => track_coord(self.id.color, p),
            Placement::Home => track_coord(self.id.color, HOME_POSITION),
        }
    }
}

/// Returns all sixteen tokens in base, indexed by [`TokenId::index`].
pub fn initial_tokens() -> [Token; TOKEN_COUNT] {
    std::array::from_fn(|i| Token::in_base(TokenId::from_index(i)))
}

/// Iterates every token id in turn order, then slot order.
pub fn all_token_ids() -> impl Iterator<Item = TokenId> {
    ALL_COLORS.into_iter().flat_map(TokenId::of_color)
}
