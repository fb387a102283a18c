//! Configuration management.
//!
//! - [`types`]: the schema ([`CoreConfig`], [`LoggingConfig`], [`WorkspaceConfig`]).
//! - [`defaults`]: default values used by `serde` for missing keys.
//! - [`loader`]: [`ConfigLoader`], which locates, parses, and validates the file.
//!
//! # Examples
//!
//! ```rust,ignore
//! use mdi_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("Workspace: {}x{}", config.workspace.width, config.workspace.height),
//!     Err(e) => {
//!         mdi_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration error: {}", e);
//!     }
//! }
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, WorkspaceConfig};
