//! Deployment mode (`NODE_ENV`) values.
//!
//! Responsibilities:
//! - Enumerate the recognized deployment modes.
//! - Map each mode to its dotfile name.
//!
//! Invariants:
//! - Parsing is exact and case-sensitive; `"Production"` is not a mode.
//! - `from_env_value` is the single reading of a raw `NODE_ENV` value, shared
//!   by the loader and the validator.
//! - `Development` is the default mode.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEVELOPMENT_ENV_FILE, PRODUCTION_ENV_FILE, TEST_ENV_FILE};

/// A recognized value of `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    #[default]
    Development,
    Production,
    Test,
}

impl DeploymentMode {
    /// All recognized modes, in the order they are listed in messages.
    pub const ALL: [DeploymentMode; 3] = [
        DeploymentMode::Development,
        DeploymentMode::Production,
        DeploymentMode::Test,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeploymentMode::Development => "development",
            DeploymentMode::Production => "production",
            DeploymentMode::Test => "test",
        }
    }

    /// Parse a raw `NODE_ENV` value, ignoring surrounding whitespace.
    ///
    /// Returns `None` for empty or unrecognized values.
    pub fn from_env_value(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }

    /// Name of the dotfile specific to this mode.
    pub fn env_file_name(self) -> &'static str {
        match self {
            DeploymentMode::Development => DEVELOPMENT_ENV_FILE,
            DeploymentMode::Production => PRODUCTION_ENV_FILE,
            DeploymentMode::Test => TEST_ENV_FILE,
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a recognized deployment mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown deployment mode '{}', expected one of: development, production, test",
            self.0
        )
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for DeploymentMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeploymentMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
