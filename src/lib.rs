//! Ludo engine library.
//!
//! Exposes the board representation, move generation, turn resolution, and
//! protocol modules for use by integration tests and the binary entry points.

pub mod board;
pub mod dice;
pub mod engine;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod simulate;
