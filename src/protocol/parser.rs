//! Command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the main loop can dispatch on.

use tracing::warn;

use crate::board::TokenId;

use super::notation::parse_token_id;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the protocol handshake.
    Hello,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a fresh game.
    NewGame,

    /// Roll the die for the active color.
    Roll,

    /// Move a token by the pending die value.
    Move { token: TokenId },

    /// Report the full state as JSON.
    State,

    /// Report the movable token ids.
    Movable,

    /// Report the board constants as JSON.
    Topology,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "ludo" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "roll" => Some(Command::Roll),
        "state" => Some(Command::State),
        "movable" => Some(Command::Movable),
        "topology" => Some(Command::Topology),

        "setoption" => parse_setoption(&tokens),
        "move" => parse_move(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let name = name_parts.join(" ");
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name, value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `move <color>-<slot>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        warn!("malformed move: expected 'move <color>-<slot>'");
        return None;
    }
    match parse_token_id(tokens[1]) {
        Ok(token) => Some(Command::Move { token }),
        Err(e) => {
            warn!(error = %e, "malformed move");
            None
        }
    }
}
