//! Literal exclusion patterns read from the root `.gitignore`
//!
//! Only literal names are extracted. There is no glob, anchoring or negation
//! support: `*.log` excludes entries whose names start with the text `*.log`.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

pub const GITIGNORE_FILE: &str = ".gitignore";

/// Why a `.gitignore` could not contribute patterns.
#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("no .gitignore found")]
    NotFound,
    #[error("cannot read .gitignore: {0}")]
    Unreadable(#[source] io::Error),
}

/// Read `.gitignore` directly inside `dir` and parse it.
pub fn read_gitignore(dir: &Path) -> Result<Vec<String>, IgnoreError> {
    let path = dir.join(GITIGNORE_FILE);
    let bytes = fs::read(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IgnoreError::NotFound,
        _ => IgnoreError::Unreadable(e),
    })?;
    Ok(parse_gitignore(&String::from_utf8_lossy(&bytes)))
}

/// Patterns from `dir/.gitignore`, or none if it is missing or unreadable.
pub fn load_gitignore(dir: &Path) -> Vec<String> {
    match read_gitignore(dir) {
        Ok(patterns) => {
            log::debug!(
                "loaded {} pattern(s) from {}",
                patterns.len(),
                dir.join(GITIGNORE_FILE).display()
            );
            patterns
        }
        Err(IgnoreError::NotFound) => Vec::new(),
        Err(e) => {
            log::debug!("{}: {}", dir.display(), e);
            Vec::new()
        }
    }
}

/// Extract one literal pattern per meaningful line.
///
/// Blank lines and `#` comments are skipped and a single trailing `/` is
/// removed. A line that is only `/` would become an empty pattern matching
/// every name, so it is dropped.
pub fn parse_gitignore(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.strip_suffix('/').unwrap_or(line))
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect()
}
