//! Ludo -- a four-player Ludo rules engine driven over a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr and are filtered with `RUST_LOG` (default `warn`).

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use ludo::engine::Engine;
use ludo::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Hello => engine.handle_hello(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => engine.handle_setoption(name, value),
            Command::NewGame => engine.reset_game(),
            Command::Roll => engine.handle_roll(&mut out)?,
            Command::Move { token } => engine.handle_move(token, &mut out)?,
            Command::State => engine.handle_state(&mut out)?,
            Command::Movable => engine.handle_movable(&mut out)?,
            Command::Topology => engine.handle_topology(&mut out)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
