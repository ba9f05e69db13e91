//! Move resolution.
//!
//! Applies rolls and moves to a game state: captures, win detection, and
//! turn sequencing.

pub mod capture;
pub mod phase;
pub mod win;

pub use capture::{capture_cell, loop_index, resolve_captures, Capture};
pub use phase::{apply_move, apply_roll, next_color_index, MoveEvent, RollResult, DIE_MAX, DIE_MIN};
pub use win::{has_finished, winner_after_move};
