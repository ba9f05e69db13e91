//! Rules soak harness.
//!
//! Plays complete games end-to-end, choosing uniformly among the movable
//! tokens after every roll, and records per-game statistics. Used to
//! exercise the rules at volume and to sanity-check game length and
//! capture frequency.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::board::{Color, Phase, ALL_COLORS, COLOR_COUNT};
use crate::dice::RngDice;
use crate::engine::Engine;
use crate::movegen::random_movable;

/// Errors that can occur while running or writing simulations.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of parallel threads.
    pub threads: usize,
    /// Base random seed (0 = use entropy). Game `i` uses `seed + i`.
    pub seed: u64,
    /// Rolls after which an unfinished game is abandoned.
    pub max_rolls: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 100,
            threads: 4,
            seed: 0,
            max_rolls: 10_000,
        }
    }
}

/// Statistics for one simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub seed: u64,
    pub winner: Option<Color>,
    pub rolls: u32,
    pub forfeited_rolls: u32,
    pub moves: u32,
    pub captures: u32,
    pub extra_turns: u32,
}

/// Plays a single game to completion (or `max_rolls`).
pub fn play_game(game_id: usize, seed: u64, max_rolls: u32) -> GameRecord {
    let mut engine = Engine::with_dice(RngDice::seeded(seed));
    let mut picker = SmallRng::seed_from_u64(seed.rotate_left(17) ^ 0x9e37_79b9_7f4a_7c15);
    let mut record = GameRecord {
        game_id,
        seed,
        winner: None,
        rolls: 0,
        forfeited_rolls: 0,
        moves: 0,
        captures: 0,
        extra_turns: 0,
    };

    while !engine.state().is_finished() && record.rolls < max_rolls {
        if engine.roll_dice().is_none() {
            break;
        }
        record.rolls += 1;
        if engine.phase() != Phase::Moving {
            record.forfeited_rolls += 1;
            continue;
        }
        let Some(token) = random_movable(engine.state(), &mut picker) else {
            break;
        };
        if let Some(event) = engine.move_token(token) {
            record.moves += 1;
            record.captures += event.captured.len() as u32;
            record.extra_turns += u32::from(event.extra_turn);
        }
    }

    record.winner = engine.winner();
    debug!(game_id, winner = ?record.winner, rolls = record.rolls, "game finished");
    record
}

/// Runs the configured number of games, in parallel when `threads > 1`.
///
/// Records are returned in game order regardless of thread count.
pub fn run_simulation(config: &SimulationConfig) -> Result<Vec<GameRecord>, SimulationError> {
    let base_seed = if config.seed != 0 { config.seed } else { rand::thread_rng().gen() };
    let play = |i: usize| play_game(i, base_seed.wrapping_add(i as u64), config.max_rolls);

    if config.threads <= 1 {
        return Ok((0..config.num_games).map(play).collect());
    }

    use rayon::prelude::*;
    let pool = rayon::ThreadPoolBuilder::new().num_threads(config.threads).build()?;
    Ok(pool.install(|| (0..config.num_games).into_par_iter().map(play).collect()))
}

/// Writes records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> Result<(), SimulationError> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes a human-readable summary of a run.
pub fn write_summary<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    let total = games.len();
    let mut win_counts = [0usize; COLOR_COUNT];
    let mut unfinished = 0usize;
    let mut rolls = 0u64;
    let mut captures = 0u64;

    for game in games {
        rolls += u64::from(game.rolls);
        captures += u64::from(game.captures);
        match game.winner {
            Some(w) => win_counts[w.index()] += 1,
            None => unfinished += 1,
        }
    }

    let per_game = |n: u64| n as f64 / total.max(1) as f64;
    writeln!(out, "=== Simulation Summary ===")?;
    writeln!(out, "Games: {}", total)?;
    writeln!(out, "Unfinished: {}", unfinished)?;
    writeln!(out, "Avg rolls/game: {:.1}", per_game(rolls))?;
    writeln!(out, "Avg captures/game: {:.1}", per_game(captures))?;
    writeln!(out, "Win distribution:")?;
    for color in ALL_COLORS {
        let wins = win_counts[color.index()];
        let pct = 100.0 * wins as f64 / total.max(1) as f64;
        writeln!(out, "  {:>6}: {} ({:.1}%)", color.name(), wins, pct)?;
    }
    Ok(())
}
