//! snailsplit command-line tool.
//!
//! - `snailsplit split <DIGITS> [--json]` reports whether the digit string
//!   splits into consecutive increasing numbers, and which ones.
//! - `snailsplit spiral [--file M.json|M.yaml | --size N] [--json]` prints a
//!   square matrix and its clockwise spiral order; without a file it walks
//!   the N×N matrix `1..=N²` (default 5).
//!
//! Logging goes to stderr at `warn` unless `RUST_LOG` says otherwise.

use snailsplit::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
