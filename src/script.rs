//! Headless replay of JSON-lines event scripts.
//!
//! Each non-blank line that does not start with `#` holds one
//! [`Event`](crate::session::Event).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::session::{Event, Session};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid event on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a script into events.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] with the 1-based line number of the first
/// line that is not a valid event.
pub fn parse_script(input: &str) -> Result<Vec<Event>, ScriptError> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, content)| {
            serde_json::from_str(content).map_err(|source| ScriptError::Parse { line, source })
        })
        .collect()
}

/// Read and parse a script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line fails to parse.
pub fn load_script(path: &Path) -> Result<Vec<Event>, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&content)
}

/// Replay `events` through a fresh session.
pub fn run_script<'a>(events: impl IntoIterator<Item = &'a Event>, carry_styles: bool) -> Session {
    let mut session = Session::new().with_carry_styles(carry_styles);
    let mut count = 0_usize;
    for event in events {
        session.apply(event);
        count += 1;
    }
    tracing::debug!(events = count, "script finished");
    session
}
