//! Text notation for tokens and option values.
//!
//! Tokens are written `<color>-<slot>`, e.g. `red-0` or `blue-3`. Scripted
//! die values are written as whitespace- or comma-separated faces.

use thiserror::Error;

use crate::board::{Color, TokenId};
use crate::resolve::{DIE_MAX, DIE_MIN};

/// Errors that can occur when parsing protocol notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("invalid token slot '{0}'")]
    InvalidSlot(String),

    #[error("malformed token id '{0}', expected <color>-<slot>")]
    MalformedToken(String),

    #[error("invalid die value '{0}'")]
    InvalidDie(String),

    #[error("invalid seed '{0}'")]
    InvalidSeed(String),
}

/// Parses a token id like `green-2`.
pub fn parse_token_id(s: &str) -> Result<TokenId, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    let (color, slot) = s
        .split_once('-')
        .ok_or_else(|| NotationError::MalformedToken(s.to_string()))?;
    let color =
        Color::from_name(color).ok_or_else(|| NotationError::UnknownColor(color.to_string()))?;
    slot.parse()
        .ok()
        .and_then(|n| TokenId::try_new(color, n))
        .ok_or_else(|| NotationError::InvalidSlot(slot.to_string()))
}

/// Parses a script of die faces like `6 6 2` or `6,6,2`.
pub fn parse_rolls(s: &str) -> Result<Vec<u8>, NotationError> {
    let faces: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if faces.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    faces
        .into_iter()
        .map(|t| {
            t.parse::<u8>()
                .ok()
                .filter(|v| (DIE_MIN..=DIE_MAX).contains(v))
                .ok_or_else(|| NotationError::InvalidDie(t.to_string()))
        })
        .collect()
}

/// Parses an RNG seed.
pub fn parse_seed(s: &str) -> Result<u64, NotationError> {
    let s = s.trim();
    s.parse().map_err(|_| NotationError::InvalidSeed(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_token_ids() {
        assert_eq!(parse_token_id("red-0"), Ok(TokenId::new(Color::Red, 0)));
        assert_eq!(parse_token_id(" blue-3 "), Ok(TokenId::new(Color::Blue, 3)));
    }

    #[test]
    fn token_id_display_roundtrip() {
        for id in crate::board::all_token_ids() {
            assert_eq!(parse_token_id(&id.to_string()), Ok(id));
        }
    }

    #[test]
    fn reject_bad_token_ids() {
        assert_eq!(parse_token_id(""), Err(NotationError::EmptyInput));
        assert_eq!(parse_token_id("red"), Err(NotationError::MalformedToken("red".into())));
        assert_eq!(parse_token_id("pink-1"), Err(NotationError::UnknownColor("pink".into())));
        assert_eq!(parse_token_id("red-4"), Err(NotationError::InvalidSlot("4".into())));
        assert_eq!(parse_token_id("red-x"), Err(NotationError::InvalidSlot("x".into())));
    }

    #[test]
    fn parse_roll_scripts() {
        assert_eq!(parse_rolls("6 6 2"), Ok(vec![6, 6, 2]));
        assert_eq!(parse_rolls("1,5, 3"), Ok(vec![1, 5, 3]));
        assert_eq!(parse_rolls("   "), Err(NotationError::EmptyInput));
        assert_eq!(parse_rolls("6 7"), Err(NotationError::InvalidDie("7".into())));
        assert_eq!(parse_rolls("0"), Err(NotationError::InvalidDie("0".into())));
    }

    #[test]
    fn parse_seeds() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed("-1"), Err(NotationError::InvalidSeed("-1".into())));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            NotationError::MalformedToken("x".into()).to_string(),
            "malformed token id 'x', expected <color>-<slot>"
        );
    }
}
