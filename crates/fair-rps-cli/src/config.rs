//! Command-line arguments and environment configuration.

use clap::{Args, Parser, Subcommand};

/// Environment variable holding the default log filter
pub const LOG_ENV: &str = "FAIR_RPS_LOG";

/// Filter used when neither `--log-level` nor `FAIR_RPS_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "fair-rps", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Moves in cyclic order: odd count, at least 3, all distinct
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,

    /// Also print the announcement and reveal as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Log filter, e.g. "debug" or "fair_rps_core=trace" (overrides FAIR_RPS_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a published HMAC against a revealed key and move
    Verify(VerifyArgs),
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Revealed key (64 hex characters)
    #[arg(long)]
    pub key: String,
    /// Move the computer claims it committed to
    #[arg(long = "move")]
    pub move_name: String,
    /// HMAC published before the human chose (64 hex characters)
    #[arg(long)]
    pub hmac: String,
}

/// Settings resolved from arguments and environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub json: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, std::env::var(LOG_ENV).ok())
    }

    fn resolve(cli: &Cli, env_filter: Option<String>) -> Self {
        let log_filter = cli
            .log_level
            .clone()
            .or(env_filter)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            log_filter,
            json: cli.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        let cli = Cli::try_parse_from(["fair-rps", "rock", "paper", "scissors"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.moves, ["rock", "paper", "scissors"]);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from([
            "fair-rps", "verify", "--key", "aa", "--move", "rock", "--hmac", "bb",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Verify(args)) => {
                assert_eq!(args.key, "aa");
                assert_eq!(args.move_name, "rock");
                assert_eq!(args.hmac, "bb");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_filter_precedence() {
        let cli = Cli::try_parse_from(["fair-rps", "--log-level", "debug", "a", "b", "c"]).unwrap();
        assert_eq!(Config::resolve(&cli, Some("trace".into())).log_filter, "debug");

        let cli = Cli::try_parse_from(["fair-rps", "a", "b", "c"]).unwrap();
        assert_eq!(Config::resolve(&cli, Some("trace".into())).log_filter, "trace");
        assert_eq!(Config::resolve(&cli, None).log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(Config::resolve(&cli, Some("  ".into())).log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_json_flag() {
        let cli = Cli::try_parse_from(["fair-rps", "--json", "a", "b", "c"]).unwrap();
        assert!(Config::resolve(&cli, None).json);
    }
}
