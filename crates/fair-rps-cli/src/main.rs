//! Fair RPS command-line game
//!
//! Commits to the computer's move with an HMAC before asking for yours,
//! then reveals the key so the commitment can be checked.

mod config;
mod game;
mod prompt;
mod table;

use anyhow::Context;
use clap::Parser;
use config::{Cli, Commands, Config, DEFAULT_LOG_FILTER};
use fair_rps_core::{GameError, MoveSet};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const EXIT_INTEGRITY: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(Commands::Verify(args)) = cli.command {
        return Ok(
            match game::verify_published(&args.key, &args.move_name, &args.hmac, &mut out) {
                Ok(true) => ExitCode::SUCCESS,
                Ok(false) => ExitCode::from(EXIT_INTEGRITY),
                Err(e) => {
                    writeln!(out, "Error: {:#}", e)?;
                    ExitCode::from(EXIT_USAGE)
                }
            },
        );
    }

    let moves = match MoveSet::new(cli.moves) {
        Ok(moves) => moves,
        Err(GameError::InvalidMoveSet(reason)) => {
            warn!(%reason, "Rejected move list");
            writeln!(out, "{}", game::USAGE)?;
            return Ok(ExitCode::from(EXIT_USAGE));
        }
        Err(e) => return Err(e.into()),
    };

    let stdin = io::stdin();
    game::play(moves, config.json, &mut stdin.lock(), &mut out)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    if let Err(e) = init_tracing(&config.log_filter) {
        eprintln!("Error: {:#}", e);
    }

    match run(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            let integrity = e
                .downcast_ref::<GameError>()
                .is_some_and(GameError::is_integrity_violation);
            if integrity {
                ExitCode::from(EXIT_INTEGRITY)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
