//! Dotfile loading into the process environment.
//!
//! Responsibilities:
//! - Pick the dotfile for the active deployment mode (`NODE_ENV`).
//! - Load it with `dotenvy`, falling back to `.env` when it cannot be read.
//! - Enforce the `DOTENV_DISABLED` gate and the missing-file policy.
//! - Guard process-wide initialization so it runs at most once.
//!
//! Does NOT handle:
//! - Validating or coercing the loaded values (see `schema` module).
//!
//! Invariants / Assumptions:
//! - Variables already present in the process environment are never overwritten.
//! - Syntax errors in a dotfile are reported, never silently skipped.
//! - Errors never include dotfile line contents.

mod builder;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{EnvFileLoader, LoadOutcome, MissingFilePolicy, load_env_file_once};
pub use error::EnvFileError;
