//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the fxc CLI.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// fxc - operator console CLI for the filoxenia platform
#[derive(Parser, Debug)]
#[command(name = "fxc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entities from a snapshot, filtered
    #[command(alias = "l")]
    List {
        /// Entity kind to list
        #[arg(value_enum)]
        kind: Kind,

        /// Snapshot file (default: <data_dir>/<kind>.json from config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Free-text search (accent- and case-insensitive)
        #[arg(short = 'Q', long)]
        query: Option<String>,

        /// Filter by status token ("all" means no constraint)
        #[arg(short, long)]
        status: Option<String>,

        /// Keep entities dated on or after this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,

        /// Keep entities dated on or before this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,

        /// Limit results (default: 50)
        #[arg(long, default_value = "50")]
        limit: u32,

        /// Show all results (no limit)
        #[arg(long)]
        all: bool,
    },

    /// Export filtered entities as CSV
    #[command(alias = "e")]
    Export {
        /// Entity kind to export
        #[arg(value_enum)]
        kind: Kind,

        /// Snapshot file (default: <data_dir>/<kind>.json from config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Free-text search (accent- and case-insensitive)
        #[arg(short = 'Q', long)]
        query: Option<String>,

        /// Filter by status token ("all" means no constraint)
        #[arg(short, long)]
        status: Option<String>,

        /// Keep entities dated on or after this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,

        /// Keep entities dated on or before this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,

        /// Write the CSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dashboard cards: period totals with trend against the prior period
    Stats {
        /// Bookings snapshot file (default: <data_dir>/bookings.json)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Period start (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: NaiveDate,

        /// Period end, inclusive (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: NaiveDate,
    },

    /// View and manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Create a default config file if none exists
    Init,
    /// Print the config file path
    Path,
}

/// Entity kinds the console works with.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Bookings,
    Properties,
    Payments,
}

impl Kind {
    /// Default snapshot file name for this kind.
    pub fn file_name(&self) -> &'static str {
        match self {
            Kind::Bookings => "bookings.json",
            Kind::Properties => "properties.json",
            Kind::Payments => "payments.json",
        }
    }
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Clap value parser for date flags.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_flag() {
        assert_eq!(
            parse_date("2026-08-01"),
            Ok(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        );
        assert!(parse_date("01/08/2026").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_cli_parses_list_with_filters() {
        let cli = Cli::try_parse_from([
            "fxc", "list", "bookings", "--query", "αγιο", "--status", "confirmed", "--from",
            "2026-08-01",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::List {
                kind,
                query,
                status,
                from,
                ..
            }) => {
                assert_eq!(kind, Kind::Bookings);
                assert_eq!(query.as_deref(), Some("αγιο"));
                assert_eq!(status.as_deref(), Some("confirmed"));
                assert_eq!(from, NaiveDate::from_ymd_opt(2026, 8, 1));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let result = Cli::try_parse_from(["fxc", "list", "bookings", "--from", "soon"]);
        assert!(result.is_err());
    }
}
