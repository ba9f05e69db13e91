//! Simulation CLI.
//!
//! Plays seeded Ludo games end-to-end and outputs per-game statistics as JSONL.
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --games N       Number of games to play (default: 100)
//!   --threads N     Number of parallel threads (default: 4)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --max-rolls N   Abandon a game after this many rolls (default: 10000)
//!   --output FILE   Output file path (default: stdout)
//!   --quiet         Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ludo::simulate::{self, SimulationConfig, SimulationError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = SimulationConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        let parsed = match args[i].as_str() {
            "--games" => flag_value(&args, &mut i).map(|v| config.num_games = v),
            "--threads" => flag_value(&args, &mut i).map(|v| config.threads = v),
            "--seed" => flag_value(&args, &mut i).map(|v| config.seed = v),
            "--max-rolls" => flag_value(&args, &mut i).map(|v| config.max_rolls = v),
            "--output" => flag_value(&args, &mut i).map(|v| output_path = Some(v)),
            "--quiet" => {
                quiet = true;
                Ok(())
            }
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => Err(format!("unknown argument: {}", other)),
        };
        if let Err(msg) = parsed {
            error!("{}", msg);
            print_usage();
            return ExitCode::FAILURE;
        }
        i += 1;
    }

    match run(&config, output_path.as_deref(), quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "simulation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(
    config: &SimulationConfig,
    output_path: Option<&str>,
    quiet: bool,
) -> Result<(), SimulationError> {
    if !quiet {
        info!(
            games = config.num_games,
            threads = config.threads,
            seed = config.seed,
            max_rolls = config.max_rolls,
            "starting simulation"
        );
    }

    let start = Instant::now();
    let games = simulate::run_simulation(config)?;
    let elapsed = start.elapsed();

    if !quiet {
        info!(games = games.len(), secs = elapsed.as_secs_f64(), "simulation complete");
        simulate::write_summary(&games, &mut io::stderr())?;
    }

    match output_path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            simulate::write_jsonl(&games, &mut writer)?;
            if !quiet {
                info!(games = games.len(), path, "wrote records");
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            simulate::write_jsonl(&games, &mut writer)?;
        }
    }
    Ok(())
}

/// Advances past a flag and parses the value that follows it.
fn flag_value<T: FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = &args[*i];
    *i += 1;
    let raw = args.get(*i).ok_or_else(|| format!("missing value for {}", flag))?;
    raw.parse().map_err(|_| format!("invalid {} value: '{}'", flag, raw))
}

fn print_usage() {
    eprintln!("Usage: simulate [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 100)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --max-rolls N    Abandon a game after this many rolls (default: 10000)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress summary output");
    eprintln!("  --help           Show this help");
}
