//! cli
//!
//! Command-line interface layer for revisionary.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and environment
//! - Install the log subscriber
//! - Resolve, verify and print the version
//!
//! # Architecture
//!
//! The CLI layer is thin. It builds a [`crate::git::Repository`] from the
//! flags and hands it to [`crate::core::resolve`]. Unlike the library entry
//! point, the CLI always verifies the composed version before printing it.

pub mod args;

pub use args::Cli;

use std::io::IsTerminal;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::core::resolve;
use crate::ui::output;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let rendered = render(&cli)?;
    output::print(rendered);
    Ok(())
}

/// Resolve the version for `cli` and render it for stdout.
///
/// # Errors
///
/// Fails if resolution fails or the composed version is not PEP 440.
pub fn render(cli: &Cli) -> Result<String> {
    let repo = cli.repository();
    debug!(path = %repo.path().display(), program = repo.program(), "resolving version");

    let info = resolve::resolve(&repo)?;
    let version = resolve::verify(info.to_string())?;

    if cli.json {
        output::json(&info)
    } else {
        Ok(version)
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--debug` selects debug output
/// for this crate and everything else stays at `warn`.
fn init_tracing(debug: bool) {
    let default = if debug {
        "warn,revisionary=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
