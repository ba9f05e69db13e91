//! Board representation and game-state types.
//!
//! Contains the static board geometry, colors, tokens, and the overall
//! game state.

pub mod color;
pub mod state;
pub mod token;
pub mod topology;

pub use color::{Color, ALL_COLORS, COLOR_COUNT};
pub use state::{GameState, Phase};
pub use token::{all_token_ids, Placement, Token, TokenId, TokenStatus, TOKEN_COUNT};
pub use topology::{
    base_coord, entry_coord, is_safe_index, shared_index, track_coord, Coord, BASE_CELLS, CENTER,
    HOME_POSITION, HOME_STRETCH, HOME_STRETCH_LEN, LAST_TRACK_POSITION, PATH_LEN, SAFE_INDICES,
    SHARED_PATH, TOKENS_PER_COLOR,
};
