//! Error types for dotfile loading.
//!
//! Invariants:
//! - Parse errors carry only the byte index of the failure, NOT the offending
//!   line, to prevent leaking secrets.
//! - Errors are `Clone` so the run-once initializer can hand out its result.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading dotfiles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvFileError {
    /// Neither the mode-specific file nor the fallback could be loaded.
    #[error(
        "Environment file not found (tried: {}). Hint: set DOTENV_DISABLED=1 to skip .env loading",
        display_paths(.tried)
    )]
    NotFound { tried: Vec<PathBuf> },

    /// A dotfile exists but contains invalid syntax.
    #[error(
        "Failed to parse {} at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        .path.display()
    )]
    Parse { path: PathBuf, error_index: usize },

    /// The fallback file exists but could not be read.
    #[error("Failed to read {}: {kind}", .path.display())]
    Io { path: PathBuf, kind: ErrorKind },

    /// The directory holding the dotfiles could not be determined.
    #[error("Failed to resolve environment file directory: {kind}")]
    CurrentDir { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load {}. Hint: set DOTENV_DISABLED=1 to skip .env loading", .path.display())]
    Unknown { path: PathBuf },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
