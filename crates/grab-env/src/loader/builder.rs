//! Dotfile loader builder implementation.
//!
//! Responsibilities:
//! - Resolve the candidate dotfile from the deployment mode.
//! - Load the candidate, then the `.env` fallback, into the process environment.
//! - Report which file was applied through `LoadOutcome`.
//!
//! Does NOT handle:
//! - Parsing dotfile syntax (delegated to `dotenvy`).
//!
//! Invariants / Assumptions:
//! - `dotenvy::from_path` never overrides variables that are already set.
//! - The `DOTENV_DISABLED` variable is checked before any file is touched.
//! - An unset or unrecognized `NODE_ENV` selects `.env` directly.
//! - A mode-specific file that is missing or unreadable falls back to `.env`;
//!   only a missing `.env` is subject to `MissingFilePolicy`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::error::EnvFileError;
use crate::constants::{DEFAULT_ENV_FILE, DOTENV_DISABLED_KEY, NODE_ENV_KEY};
use crate::env::env_var_or_none;
use crate::types::DeploymentMode;

/// What to do when neither the mode-specific file nor `.env` can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFilePolicy {
    /// Return `EnvFileError::NotFound`.
    #[default]
    Fatal,
    /// Log a warning and continue with the environment as it is.
    Ignore,
}

/// Result of a load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The mode-specific file (or `.env` when no mode applies) was loaded.
    Loaded(PathBuf),
    /// The mode-specific file failed and `.env` was loaded instead.
    FellBack { path: PathBuf, failed: PathBuf },
    /// No file was loaded and the policy is `MissingFilePolicy::Ignore`.
    NotFound { tried: Vec<PathBuf> },
    /// Loading was skipped because `DOTENV_DISABLED` is set.
    Disabled,
}

enum LoadFailure {
    /// Missing or unreadable; eligible for fallback.
    Unreadable(ErrorKind),
    /// Present but invalid; reported to the caller.
    Invalid(EnvFileError),
}

/// Loads environment-specific dotfiles into the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvFileLoader {
    dir: Option<PathBuf>,
    mode: Option<DeploymentMode>,
    missing_policy: MissingFilePolicy,
}

impl EnvFileLoader {
    /// Create a loader for the current directory with the `Fatal` policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for dotfiles in `dir` instead of the current directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Use `mode` instead of reading `NODE_ENV`.
    pub fn with_mode(mut self, mode: DeploymentMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_missing_policy(mut self, policy: MissingFilePolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// File name tried first, before any fallback.
    pub fn candidate_file_name(&self) -> &'static str {
        let mode = self.mode.or_else(|| {
            env_var_or_none(NODE_ENV_KEY).and_then(|raw| DeploymentMode::from_env_value(&raw))
        });
        mode.map_or(DEFAULT_ENV_FILE, DeploymentMode::env_file_name)
    }

    /// Load the candidate dotfile, falling back to `.env`.
    pub fn load(&self) -> Result<LoadOutcome, EnvFileError> {
        if Self::dotenv_disabled() {
            tracing::debug!("DOTENV_DISABLED is set, skipping environment files");
            return Ok(LoadOutcome::Disabled);
        }

        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => {
                std::env::current_dir().map_err(|e| EnvFileError::CurrentDir { kind: e.kind() })?
            }
        };

        let file_name = self.candidate_file_name();
        let candidate = dir.join(file_name);
        match Self::try_load(&candidate) {
            Ok(()) => {
                tracing::debug!(path = %candidate.display(), "Loaded environment file");
                return Ok(LoadOutcome::Loaded(candidate));
            }
            Err(LoadFailure::Invalid(e)) => return Err(e),
            Err(LoadFailure::Unreadable(kind)) if file_name == DEFAULT_ENV_FILE => {
                tracing::debug!(path = %candidate.display(), %kind, "Environment file not loaded");
                return self.fallback_failed(kind, candidate, Vec::new());
            }
            Err(LoadFailure::Unreadable(kind)) => {
                tracing::warn!(
                    path = %candidate.display(),
                    %kind,
                    "Failed to load environment file, falling back to {}",
                    DEFAULT_ENV_FILE
                );
            }
        }

        let fallback = dir.join(DEFAULT_ENV_FILE);
        match Self::try_load(&fallback) {
            Ok(()) => {
                tracing::debug!(path = %fallback.display(), "Loaded fallback environment file");
                Ok(LoadOutcome::FellBack {
                    path: fallback,
                    failed: candidate,
                })
            }
            Err(LoadFailure::Invalid(e)) => Err(e),
            Err(LoadFailure::Unreadable(kind)) => {
                self.fallback_failed(kind, fallback, vec![candidate])
            }
        }
    }

    /// `.env` could not be loaded: missing is subject to the policy, any
    /// other I/O failure is reported as is.
    fn fallback_failed(
        &self,
        kind: ErrorKind,
        fallback: PathBuf,
        mut tried: Vec<PathBuf>,
    ) -> Result<LoadOutcome, EnvFileError> {
        if kind != ErrorKind::NotFound {
            return Err(EnvFileError::Io {
                path: fallback,
                kind,
            });
        }
        tried.push(fallback);
        self.not_found(tried)
    }

    fn not_found(&self, tried: Vec<PathBuf>) -> Result<LoadOutcome, EnvFileError> {
        match self.missing_policy {
            MissingFilePolicy::Fatal => Err(EnvFileError::NotFound { tried }),
            MissingFilePolicy::Ignore => {
                tracing::warn!(
                    files = tried.len(),
                    "No environment file found, continuing with the process environment"
                );
                Ok(LoadOutcome::NotFound { tried })
            }
        }
    }

    fn try_load(path: &Path) -> Result<(), LoadFailure> {
        match dotenvy::from_path(path) {
            Ok(()) => Ok(()),
            Err(dotenvy::Error::Io(io_err)) => Err(LoadFailure::Unreadable(io_err.kind())),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(LoadFailure::Invalid(EnvFileError::Parse {
                    path: path.to_path_buf(),
                    error_index: idx,
                }))
            }
            Err(_) => Err(LoadFailure::Invalid(EnvFileError::Unknown {
                path: path.to_path_buf(),
            })),
        }
    }

    fn dotenv_disabled() -> bool {
        matches!(
            env_var_or_none(DOTENV_DISABLED_KEY).as_deref(),
            Some("1") | Some("true")
        )
    }
}

static ENV_FILE_ONCE: OnceLock<Result<LoadOutcome, EnvFileError>> = OnceLock::new();

/// Load dotfiles from the current directory once per process.
///
/// Later calls return the result of the first call without touching the
/// filesystem again.
pub fn load_env_file_once() -> Result<LoadOutcome, EnvFileError> {
    ENV_FILE_ONCE
        .get_or_init(|| EnvFileLoader::new().load())
        .clone()
}
