//! Command-line interface for snailsplit.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use serde::Serialize;

use crate::config::{validate_demo_size, validate_digits, DEFAULT_DEMO_SIZE};
use crate::error::Result;
use crate::input::load_matrix;
use crate::spiral::SquareMatrix;
use crate::splitting::{ConsecutiveSequence, ShortestFirst, SplitEngine};

/// snailsplit - Consecutive digit splitting and spiral matrix traversal.
#[derive(Parser)]
#[command(name = "snailsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a digit string into consecutive increasing numbers.
    Split {
        /// Digit string (e.g., 979899100101)
        digits: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk a square matrix in clockwise spiral order.
    Spiral {
        /// Matrix file (.json, .yaml or .yml) holding a list of rows
        #[arg(short, long, conflicts_with = "size")]
        file: Option<PathBuf>,

        /// Build the N×N matrix 1..=N² instead of reading a file (default: 5)
        #[arg(short, long)]
        size: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// JSON report for the split command.
#[derive(Debug, Serialize)]
struct SplitReport<'a> {
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sequence: Option<&'a ConsecutiveSequence>,
}

/// JSON report for the spiral command.
#[derive(Debug, Serialize)]
struct SpiralReport {
    size: usize,
    spiral: Vec<i64>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute an already-parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Split { digits, json } => split_command(&digits, json),
        Commands::Spiral { file, size, json } => spiral_command(file.as_deref(), size, json),
    }
}

/// Execute the split command.
fn split_command(digits: &str, json: bool) -> Result<()> {
    validate_digits(digits)?;

    let found = SplitEngine::new(ShortestFirst).find(digits);

    if json {
        let report = SplitReport {
            input: digits,
            valid: found.is_some(),
            sequence: found.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match found {
        Some(seq) => {
            println!("{} '{}'", style("Valid").green().bold(), style(digits).cyan());
            println!("  Sequence: {}", style(seq).green());
        }
        None => println!(
            "{} '{}' cannot be split into consecutive increasing numbers",
            style("Invalid").red().bold(),
            style(digits).cyan()
        ),
    }

    Ok(())
}

/// Execute the spiral command.
fn spiral_command(file: Option<&Path>, size: Option<usize>, json: bool) -> Result<()> {
    let matrix = match file {
        Some(path) => load_matrix(path)?,
        None => {
            let size = size.unwrap_or(DEFAULT_DEMO_SIZE);
            validate_demo_size(size)?;
            SquareMatrix::sequential(size)
        }
    };

    let spiral = matrix.spiral();

    if json {
        let report = SpiralReport {
            size: matrix.size(),
            spiral,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", style("Matrix:").bold());
    print!("{matrix}");
    println!();
    println!("{} {:?}", style("Spiral order:").green().bold(), spiral);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_split() {
        let cli = Cli::parse_from(["snailsplit", "split", "99100"]);

        let Commands::Split { digits, json } = cli.command else {
            panic!("expected split command");
        };
        assert_eq!(digits, "99100");
        assert!(!json);
    }

    #[test]
    fn test_cli_parse_split_json() {
        let cli = Cli::parse_from(["snailsplit", "split", "12", "--json"]);

        let Commands::Split { json, .. } = cli.command else {
            panic!("expected split command");
        };
        assert!(json);
    }

    #[test]
    fn test_cli_split_has_no_all_flag() {
        assert!(Cli::try_parse_from(["snailsplit", "split", "12", "--all"]).is_err());
    }

    #[test]
    fn test_cli_parse_spiral_size() {
        let cli = Cli::parse_from(["snailsplit", "spiral", "--size", "4"]);

        let Commands::Spiral { file, size, json } = cli.command else {
            panic!("expected spiral command");
        };
        assert!(file.is_none());
        assert_eq!(size, Some(4));
        assert!(!json);
    }

    #[test]
    fn test_cli_spiral_file_conflicts_with_size() {
        let result = Cli::try_parse_from(["snailsplit", "spiral", "-f", "m.json", "-s", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_split_command_accepts_wide_input() {
        let ch = format!("1{}1{}1", "0".repeat(39), "0".repeat(38));
        assert!(split_command(&ch, true).is_ok());
    }

    #[test]
    fn test_split_command_rejects_non_digits() {
        assert!(split_command("12a", false).is_err());
    }

    #[test]
    fn test_spiral_command_rejects_zero_size() {
        assert!(spiral_command(None, Some(0), false).is_err());
    }
}
