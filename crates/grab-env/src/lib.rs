//! Environment variable loading and validation.
//!
//! This crate loads environment-specific dotfiles into the process
//! environment and validates declared variables against a typed schema,
//! reporting every offending variable at once.

pub mod constants;
mod env;
mod error;
mod grab;
mod loader;
pub mod schema;
pub mod types;

pub use env::{EnvSnapshot, env_var_or_none};
pub use error::{GrabEnvError, ValidationError, ValidationIssue};
pub use grab::{grab_env, grab_env_from};
pub use loader::{EnvFileError, EnvFileLoader, LoadOutcome, MissingFilePolicy, load_env_file_once};
pub use schema::{Schema, VarType};
pub use types::{Declarations, DeploymentMode, ValidatedConfig, Value, VariableDeclaration};
