//! Capture resolution.
//!
//! After a token lands on the shared loop, every opposing token sharing
//! that cell is sent back to base, unless the cell is safe.

use serde::Serialize;

use crate::board::{
    is_safe_index, shared_index, Coord, GameState, Placement, Token, TokenId, PATH_LEN,
};

/// A token sent back to base by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capture {
    pub token: TokenId,
    pub from: Coord,
    pub to: Coord,
}

/// Returns the absolute shared-loop index of a token, if it is on the loop.
///
/// Tokens in base, in a home stretch, or home have no loop index.
pub fn loop_index(token: &Token) -> Option<usize> {
    match token.placement {
        Placement::Track(pos) if (pos as usize) < PATH_LEN => {
            Some(shared_index(token.color(), pos))
        }
        _ => None,
    }
}

/// Returns the loop index where a landed token can capture, or `None` if its
/// cell is protected.
///
/// A token's own entry cell is always protected, in addition to the fixed
/// safe indices.
pub fn capture_cell(mover: &Token) -> Option<usize> {
    if mover.placement == Placement::Track(0) {
        return None;
    }
    loop_index(mover).filter(|&idx| !is_safe_index(idx))
}

/// Sends every opposing token on the mover's cell back to base.
///
/// All opponents on the cell are captured, not just the first; tokens of
/// the mover's own color may share a cell freely. Returns the captures in
/// token order.
pub fn resolve_captures(state: &mut GameState, mover: TokenId) -> Vec<Capture> {
    let moved = *state.token(mover);
    let cell = match capture_cell(&moved) {
        Some(idx) => idx,
        None => return Vec::new(),
    };

    let mut captures = Vec::new();
    for target in state.tokens.iter_mut() {
        if target.color() == moved.color() || loop_index(target) != Some(cell) {
            continue;
        }
        let from = target.coord();
        target.placement = Placement::Base;
        captures.push(Capture {
            token: target.id,
            from,
            to: target.coord(),
        });
    }
    captures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{base_coord, Color, TokenStatus, SHARED_PATH};

    fn place(state: &mut GameState, id: TokenId, pos: u8) {
        state.tokens[id.index()].placement = Placement::Track(pos);
    }

    #[test]
    fn captures_opponent_on_open_cell() {
        let mut state = GameState::new();
        let red = TokenId::new(Color::Red, 0);
        let green = TokenId::new(Color::Green, 1);
        place(&mut state, red, 10);
        place(&mut state, green, 49);

        let caps = resolve_captures(&mut state, red);
        assert_eq!(caps.len(), 1);
        assert_eq!(caps[0].token, green);
        assert_eq!(caps[0].from, SHARED_PATH[10]);
        assert_eq!(caps[0].to, base_coord(Color::Green, 1));
        assert_eq!(state.token(green).status(), TokenStatus::Base);
        assert_eq!(state.token(green).position(), None);
    }

    #[test]
    fn captures_every_opponent_on_the_cell() {
        let mut state = GameState::new();
        let red = TokenId::new(Color::Red, 0);
        let g0 = TokenId::new(Color::Green, 0);
        let g1 = TokenId::new(Color::Green, 1);
        let b2 = TokenId::new(Color::Blue, 2);
        // Absolute index 30 for each color.
        place(&mut state, red, 30);
        place(&mut state, g0, 17);
        place(&mut state, g1, 17);
        place(&mut state, b2, 43);

        let caps = resolve_captures(&mut state, red);
        let ids: Vec<TokenId> = caps.iter().map(|c| c.token).collect();
        assert_eq!(ids, vec![g0, g1, b2]);
    }

    #[test]
    fn safe_cells_never_capture() {
        let mut state = GameState::new();
        let red = TokenId::new(Color::Red, 0);
        let yellow = TokenId::new(Color::Yellow, 0);
        place(&mut state, red, 8);
        place(&mut state, yellow, 34);
        assert!(resolve_captures(&mut state, red).is_empty());
        assert_eq!(state.token(yellow).placement, Placement::Track(34));
    }

    #[test]
    fn own_color_is_never_captured() {
        let mut state = GameState::new();
        let a = TokenId::new(Color::Red, 0);
        let b = TokenId::new(Color::Red, 1);
        place(&mut state, a, 12);
        place(&mut state, b, 12);
        assert!(resolve_captures(&mut state, a).is_empty());
        assert_eq!(state.token(b).placement, Placement::Track(12));
    }

    #[test]
    fn entry_cell_is_protected() {
        let mut state = GameState::new();
        let blue = TokenId::new(Color::Blue, 0);
        let red = TokenId::new(Color::Red, 0);
        place(&mut state, blue, 0);
        place(&mut state, red, 39);
        assert!(resolve_captures(&mut state, blue).is_empty());
    }

    #[test]
    fn home_stretch_neither_captures_nor_is_captured() {
        let mut state = GameState::new();
        let red = TokenId::new(Color::Red, 0);
        let green = TokenId::new(Color::Green, 0);
        place(&mut state, red, 53);
        place(&mut state, green, 53);
        assert_eq!(loop_index(state.token(red)), None);
        assert!(resolve_captures(&mut state, red).is_empty());

        place(&mut state, red, 14);
        assert!(resolve_captures(&mut state, red).is_empty());
        assert_eq!(state.token(green).placement, Placement::Track(53));
    }
}
