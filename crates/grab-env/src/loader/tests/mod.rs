//! Tests for the dotfile loader.
//!
//! Invariants:
//! - Tests use `serial_test` and `global_test_lock()` because they mutate the
//!   process environment.
//! - Every key a test may load is listed in `temp_env::with_vars` so it is
//!   removed again afterwards.
//! - Dotfiles live in a `tempfile::TempDir`; the working directory is never changed.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
