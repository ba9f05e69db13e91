//! Step-by-step move paths.
//!
//! Computes where a token lands for a die roll and the ordered cells it
//! passes through to get there, which presentation code replays as an
//! animation.

use crate::board::{entry_coord, track_coord, Coord, Placement, Token, HOME_POSITION};

/// The only roll that releases a token from base.
pub const RELEASE_ROLL: u8 = 6;

/// Returns the placement a token reaches with `roll`, or `None` if the roll
/// cannot be played by this token.
///
/// Base tokens need a six and land on relative position 0. Track tokens
/// must land exactly on 57 to finish; overshooting is not a move.
pub fn landing(token: &Token, roll: u8) -> Option<Placement> {
    match token.placement {
        Placement::Base => (roll == RELEASE_ROLL).then_some(Placement::Track(0)),
        Placement::Track(pos) => {
            let next = pos.checked_add(roll)?;
            if next == HOME_POSITION {
                Some(Placement::Home)
            } else if next < HOME_POSITION {
                Some(Placement::Track(next))
            } else {
                None
            }
        }
        Placement::Home => None,
    }
}

/// Returns the cells a token visits for `roll`, excluding its starting cell
/// and ending on the landing cell.
///
/// Leaving base is a single step onto the color's entry cell. Returns an
/// empty path when the roll is not playable.
pub fn move_path(token: &Token, roll: u8) -> Vec<Coord> {
    match (token.placement, landing(token, roll)) {
        (Placement::Base, Some(_)) => vec![entry_coord(token.color())],
        (Placement::Track(pos), Some(_)) => (1..=roll)
            .map(|step| track_coord(token.color(), pos + step))
            .collect(),
        _ => Vec::new(),
    }
}
