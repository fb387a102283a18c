//! General utilities for the MDI core.
//!
//! - [`fs`]: directory creation and optional file reads.
//! - [`paths`]: XDG and application-specific directory resolution.

pub mod fs;
pub mod paths;

pub use fs::ensure_dir_exists;
