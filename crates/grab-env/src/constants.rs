//! Centralized constants for the grab-env crate.
//!
//! Variable names, dotfile names, and the supported type tags live here so the
//! loader and the schema builder agree on them.

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Deployment-mode indicator read by both the loader and the validator.
pub const NODE_ENV_KEY: &str = "NODE_ENV";

/// When set to `1` or `true`, dotfile loading is skipped entirely.
pub const DOTENV_DISABLED_KEY: &str = "DOTENV_DISABLED";

// =============================================================================
// Dotfile Names
// =============================================================================

/// Default dotfile, also used as the fallback when a mode-specific file fails.
pub const DEFAULT_ENV_FILE: &str = ".env";

pub const DEVELOPMENT_ENV_FILE: &str = ".env.development";
pub const PRODUCTION_ENV_FILE: &str = ".env.production";
pub const TEST_ENV_FILE: &str = ".env.test";

// =============================================================================
// Schema
// =============================================================================

/// Type tags accepted in a variable declaration, in the order they are reported.
pub const SUPPORTED_TYPE_TAGS: [&str; 3] = ["string", "number", "boolean"];

/// Message attached to a field that is absent and has no default.
pub const REQUIRED_MESSAGE: &str = "Required";
