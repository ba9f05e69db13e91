//! Static geometry of the cross-shaped Ludo board.
//!
//! The board is a 15x15 grid addressed by `(row, col)`. Tokens travel a
//! 52-cell shared loop that every color walks from its own entry offset,
//! then turn into a private 5-cell home stretch and finish on the center.
//! All tables are compile-time constants and may be read freely by
//! renderers.

use serde::Serialize;

use super::color::{Color, COLOR_COUNT};

/// Number of cells on the shared loop.
pub const PATH_LEN: usize = 52;

/// Number of private home-stretch cells per color.
pub const HOME_STRETCH_LEN: usize = 5;

/// Number of tokens (and base cells) per color.
pub const TOKENS_PER_COLOR: usize = 4;

/// Relative position that marks a finished token.
pub const HOME_POSITION: u8 = 57;

/// Highest relative position a token can occupy while still on the board.
pub const LAST_TRACK_POSITION: u8 = 56;

/// A cell on the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Creates a coordinate from a row and column.
    pub const fn new(row: u8, col: u8) -> Self {
        Coord { row, col }
    }
}

// Shorthand used only in table construction.
const fn c(row: u8, col: u8) -> Coord {
    Coord::new(row, col)
}

/// The terminal cell every finished token occupies.
pub const CENTER: Coord = c(7, 7);

/// The shared loop, in walking order. Red enters at index 0.
pub const SHARED_PATH: [Coord; PATH_LEN] = [
    c(6, 1), c(6, 2), c(6, 3), c(6, 4), c(6, 5), c(5, 6), c(4, 6), c(3, 6), c(2, 6), c(1, 6),
    c(0, 6), c(0, 7), c(0, 8), c(1, 8), c(2, 8), c(3, 8), c(4, 8), c(5, 8), c(6, 9), c(6, 10),
    c(6, 11), c(6, 12), c(6, 13), c(6, 14), c(7, 14), c(8, 14), c(8, 13), c(8, 12), c(8, 11),
    c(8, 10), c(8, 9), c(9, 8), c(10, 8), c(11, 8), c(12, 8), c(13, 8), c(14, 8), c(14, 7),
    c(14, 6), c(13, 6), c(12, 6), c(11, 6), c(10, 6), c(9, 6), c(8, 5), c(8, 4), c(8, 3),
    c(8, 2), c(8, 1), c(8, 0), c(7, 0), c(6, 0),
];

/// Private home stretch per color, indexed by `Color as usize`.
pub const HOME_STRETCH: [[Coord; HOME_STRETCH_LEN]; COLOR_COUNT] = [
    [c(7, 1), c(7, 2), c(7, 3), c(7, 4), c(7, 5)],
    [c(1, 7), c(2, 7), c(3, 7), c(4, 7), c(5, 7)],
    [c(7, 13), c(7, 12), c(7, 11), c(7, 10), c(7, 9)],
    [c(13, 7), c(12, 7), c(11, 7), c(10, 7), c(9, 7)],
];

/// Base cells per color, indexed by `Color as usize` then token slot.
pub const BASE_CELLS: [[Coord; TOKENS_PER_COLOR]; COLOR_COUNT] = [
    [c(1, 1), c(1, 3), c(3, 1), c(3, 3)],
    [c(1, 11), c(1, 13), c(3, 11), c(3, 13)],
    [c(11, 11), c(11, 13), c(13, 11), c(13, 13)],
    [c(11, 1), c(11, 3), c(13, 1), c(13, 3)],
];

/// Shared-path indices where no capture can occur.
pub const SAFE_INDICES: [usize; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// Returns true if the shared-path index is a safe cell.
pub fn is_safe_index(index: usize) -> bool {
    SAFE_INDICES.contains(&index)
}

/// Converts a color-relative shared-path position (0..52) into an absolute
/// index on the shared loop.
pub const fn shared_index(color: Color, position: u8) -> usize {
    (color.entry_offset() + position as usize) % PATH_LEN
}

/// Returns the board cell for a color-relative track position.
///
/// Positions 0..=51 walk the shared loop from the color's entry, 52..=56
/// walk its home stretch, and 57 is the center. Anything beyond is clamped
/// to the center.
pub const fn track_coord(color: Color, position: u8) -> Coord {
    if (position as usize) < PATH_LEN {
        SHARED_PATH[shared_index(color, position)]
    } else if position <= LAST_TRACK_POSITION {
        HOME_STRETCH[color as usize][position as usize - PATH_LEN]
    } else {
        CENTER
    }
}

/// Returns the base cell assigned to a token slot.
pub const fn base_coord(color: Color, slot: usize) -> Coord {
    BASE_CELLS[color as usize][slot % TOKENS_PER_COLOR]
}

/// Returns the shared-loop cell where a color's tokens enter play.
pub const fn entry_coord(color: Color) -> Coord {
    SHARED_PATH[color.entry_offset()]
}
