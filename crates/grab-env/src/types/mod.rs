//! Type definitions shared by the loader and the validator.
//!
//! Responsibilities:
//! - Define caller declarations (`VariableDeclaration`, `Declarations`).
//! - Define coerced values and the validated output (`Value`, `ValidatedConfig`).
//! - Define the recognized deployment modes (`DeploymentMode`).
//!
//! Does NOT handle:
//! - Coercion or schema building (see `schema` module).
//! - Reading dotfiles (see `loader` module).
//!
//! Invariants:
//! - `ValidatedConfig` always carries a `DeploymentMode`.
//! - `Value` serializes as the bare JSON primitive.

mod config;
mod declaration;
mod mode;
mod value;

pub use config::ValidatedConfig;
pub use declaration::{Declarations, VariableDeclaration};
pub use mode::{DeploymentMode, UnknownMode};
pub use value::Value;
