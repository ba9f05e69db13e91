//! JSON views of engine state for presentation processes.

use serde::Serialize;

use crate::board::{
    Color, Coord, GameState, Phase, TokenId, TokenStatus, BASE_CELLS, CENTER, HOME_POSITION,
    HOME_STRETCH, SAFE_INDICES, SHARED_PATH, ALL_COLORS, HOME_STRETCH_LEN, TOKENS_PER_COLOR,
};
use crate::movegen::movable_tokens;
use crate::resolve::MoveEvent;

/// One token as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenView {
    pub id: TokenId,
    pub status: TokenStatus,
    pub position: Option<u8>,
    pub coord: Coord,
}

/// The full read-only surface of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<'a> {
    pub active_color: Color,
    pub turn: usize,
    pub phase: Phase,
    pub dice_value: Option<u8>,
    pub winner: Option<Color>,
    pub movable: Vec<TokenId>,
    pub tokens: Vec<TokenView>,
    pub last_event: Option<&'a MoveEvent>,
}

impl<'a> Snapshot<'a> {
    pub fn new(state: &GameState, last_event: Option<&'a MoveEvent>) -> Self {
        Snapshot {
            active_color: state.active_color(),
            turn: state.active_color_index,
            phase: state.phase,
            dice_value: state.dice_value,
            winner: state.winner,
            movable: movable_tokens(state),
            tokens: state
                .tokens
                .iter()
                .map(|t| TokenView {
                    id: t.id,
                    status: t.status(),
                    position: t.position(),
                    coord: t.coord(),
                })
                .collect(),
            last_event,
        }
    }
}

/// Board constants for one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorTopology {
    pub color: Color,
    pub hex: &'static str,
    pub entry_offset: usize,
    pub home_stretch: [Coord; HOME_STRETCH_LEN],
    pub base_cells: [Coord; TOKENS_PER_COLOR],
}

/// All board constants, so renderers never duplicate the geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topology {
    pub shared_path: &'static [Coord],
    pub safe_indices: &'static [usize],
    pub center: Coord,
    pub home_position: u8,
    pub colors: Vec<ColorTopology>,
}

impl Topology {
    pub fn new() -> Self {
        Topology {
            shared_path: &SHARED_PATH,
            safe_indices: &SAFE_INDICES,
            center: CENTER,
            home_position: HOME_POSITION,
            colors: ALL_COLORS
                .iter()
                .map(|&color| ColorTopology {
                    color,
                    hex: color.hex(),
                    entry_offset: color.entry_offset(),
                    home_stretch: HOME_STRETCH[color.index()],
                    base_cells: BASE_CELLS[color.index()],
                })
                .collect(),
        }
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}
