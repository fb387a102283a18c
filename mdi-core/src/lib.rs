//! # MDI Core Library (`mdi-core`)
//!
//! Foundation for the MDI shell:
//!
//! - **Error Handling**: [`CoreError`] and the specific [`ConfigError`] and
//!   [`LoggingError`].
//! - **Geometry**: integer pixel primitives ([`PointInt`], [`SizeInt`], [`RectInt`]).
//! - **Configuration**: TOML loading with defaults and validation
//!   ([`ConfigLoader`], [`CoreConfig`]).
//! - **Logging**: `tracing` subscriber setup for console and file output.
//!
//! ```rust,ignore
//! use mdi_core::config::ConfigLoader;
//! use mdi_core::logging::init_logging;
//!
//! fn main() -> Result<(), mdi_core::CoreError> {
//!     let core_config = ConfigLoader::load()?;
//!     init_logging(&core_config.logging, false)?;
//!     tracing::info!("MDI core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, WorkspaceConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{PointInt, RectInt, SizeInt};
