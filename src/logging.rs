//! Tracing subscriber setup for the binary.
//!
//! The default level is `warn`. A `RUST_LOG` value replaces it entirely,
//! so `RUST_LOG=debug` enables the engine's debug events.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Build a filter from `RUST_LOG`-style directives, falling back to `warn`
/// when none parse.
pub fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// [`log_filter`] applied to the `RUST_LOG` environment variable.
pub fn env_log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}

/// Install a global subscriber writing plain text to `path`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_log_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Install a global subscriber writing to stderr.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_log_filter())
        .with_writer(std::io::stderr)
        .init();
}
