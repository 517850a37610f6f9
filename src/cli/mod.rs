//! CLI argument parsing for routefind
//!
//! Uses clap for argument parsing. The positional arguments keep the classic
//! `INPUT OUTPUT` shape where `-` stands for stdin/stdout.

pub mod parse;

use clap::Parser;
use std::path::PathBuf;

use parse::{parse_format, parse_strategy};
pub use routefind_core::format::OutputFormat;
use routefind_core::graph::Strategy;

/// Routefind - find routes between cities with BFS, DFS and A*
#[derive(Parser, Debug)]
#[command(name = "routefind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File holding the start and destination cities, or - for stdin
    pub input: String,

    /// File to write results to, or - for stdout
    pub output: String,

    /// City records file (name region lat lon)
    #[arg(long, env = "ROUTEFIND_CITIES")]
    pub cities: Option<PathBuf>,

    /// Edge records file (pairs of city names)
    #[arg(long, env = "ROUTEFIND_EDGES")]
    pub edges: Option<PathBuf>,

    /// Search strategy to run; repeat for several (default: all)
    #[arg(long, short, value_parser = parse_strategy, action = clap::ArgAction::Append)]
    pub strategy: Vec<Strategy>,

    /// Let A* re-queue locations already expanded through other paths
    #[arg(long)]
    pub no_closed_set: bool,

    /// Configuration file (default: ./routefind.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress prompts and error text
    #[arg(long, short)]
    pub quiet: bool,

    /// Debug-level logging on stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Log filter (e.g. "debug" or "routefind_core=trace")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }

    pub fn writes_stdout(&self) -> bool {
        self.output == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "routefind",
            "query.txt",
            "-",
            "--strategy",
            "astar",
            "-s",
            "bfs",
            "--format",
            "json",
            "--cities",
            "us.dat",
        ])
        .unwrap();
        assert_eq!(cli.input, "query.txt");
        assert!(cli.writes_stdout());
        assert!(!cli.reads_stdin());
        assert_eq!(cli.strategy, vec![Strategy::Astar, Strategy::Bfs]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.cities, Some(PathBuf::from("us.dat")));
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["routefind", "-", "-", "--strategy", "greedy"]).is_err());
    }

    #[test]
    fn test_requires_input_and_output() {
        assert!(Cli::try_parse_from(["routefind", "query.txt"]).is_err());
    }
}
