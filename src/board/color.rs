//! Player colors and turn order.
//!
//! The four colors are enumerated in fixed turn order. The `#[repr(u8)]`
//! discriminant doubles as the index into every per-color table.

use serde::Serialize;

/// The number of colors (and players) in a game.
pub const COLOR_COUNT: usize = 4;

/// A player color.
///
/// Variants are in turn order: red moves first, then green, yellow, blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Green = 1,
    Yellow = 2,
    Blue = 3,
}

/// All colors in turn order.
pub const ALL_COLORS: [Color; COLOR_COUNT] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

impl Color {
    /// Returns the color at `index` in turn order, wrapping modulo four.
    pub const fn from_index(index: usize) -> Color {
        ALL_COLORS[index % COLOR_COUNT]
    }

    /// Returns this color's position in turn order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the color whose turn follows this one.
    pub const fn next(self) -> Color {
        Color::from_index(self.index() + 1)
    }

    /// Returns the offset into the shared path where this color's tokens enter.
    pub const fn entry_offset(self) -> usize {
        self.index() * 13
    }

    /// Returns the lowercase name of this color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }

    /// Returns the display color as a CSS hex string.
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#ef4444",
            Color::Green => "#22c55e",
            Color::Yellow => "#eab308",
            Color::Blue => "#3b82f6",
        }
    }

    /// Parses a color from its lowercase name.
    pub fn from_name(name: &str) -> Option<Color> {
        match name {
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
