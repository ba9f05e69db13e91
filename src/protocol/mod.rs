//! Line protocol handling.
//!
//! A presentation process drives the engine over stdin/stdout: one command
//! per line in, plain-text or JSON responses out. This module holds the
//! command parser, the token and option notation, and the JSON views.

pub mod notation;
pub mod parser;
pub mod snapshot;

pub use notation::{parse_rolls, parse_seed, parse_token_id, NotationError};
pub use parser::{parse_command, Command};
pub use snapshot::{ColorTopology, Snapshot, TokenView, Topology};
