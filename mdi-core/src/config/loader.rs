//! Configuration loading.
//!
//! [`ConfigLoader::load`] reads `config.toml` from the application config
//! directory (or the file named by `MDI_CONFIG_PATH`). A missing or empty file
//! yields the default configuration. Whatever was loaded is then validated:
//!
//! - log level and format are normalized to lower case and checked,
//! - a relative log file path is resolved against the application state
//!   directory and its parent directory is created,
//! - the workspace size and the cascade steps must be non-zero.

use crate::config::{CoreConfig, LoggingConfig, WorkspaceConfig};
use crate::error::{ConfigError, CoreError};
use crate::types::geometry::MAX_DIMENSION;
use crate::utils::fs as mdi_fs;
use crate::utils::paths::{get_app_state_dir, get_config_file_path};
use std::path::Path;

/// Namespace for the configuration loading functions.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from its standard location.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = get_config_file_path()?;
        Self::load_from_path(&path)
    }

    /// Loads and validates the configuration from `path`.
    ///
    /// A file that does not exist is treated like an empty one.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = mdi_fs::read_optional_file(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        match content {
            Some(content) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load_from_str(&content)
            }
            None => {
                tracing::debug!("No configuration at {}, using defaults", path.display());
                let mut config = CoreConfig::default();
                Self::validate_config(&mut config)?;
                Ok(config)
            }
        }
    }

    /// Parses and validates TOML text.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config: CoreConfig = if content.trim().is_empty() {
            CoreConfig::default()
        } else {
            toml::from_str(content).map_err(ConfigError::ParseError)?
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        Self::validate_logging_config(&mut config.logging)?;
        Self::validate_workspace_config(&config.workspace)?;
        Ok(())
    }

    fn validate_logging_config(logging: &mut LoggingConfig) -> Result<(), CoreError> {
        let level_lower = logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => logging.level = level_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    logging.level
                ))
                .into());
            }
        }

        let format_lower = logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => logging.format = format_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    logging.format
                ))
                .into());
            }
        }

        if let Some(file_path) = &logging.file_path {
            let absolute_path = if file_path.is_absolute() {
                file_path.clone()
            } else {
                get_app_state_dir()?.join(file_path)
            };
            if let Some(parent_dir) = absolute_path.parent() {
                if !parent_dir.as_os_str().is_empty() {
                    mdi_fs::ensure_dir_exists(parent_dir)?;
                }
            }
            logging.file_path = Some(absolute_path);
        }
        Ok(())
    }

    fn validate_workspace_config(workspace: &WorkspaceConfig) -> Result<(), CoreError> {
        if workspace.width == 0 || workspace.height == 0 {
            return Err(ConfigError::ValidationError(format!(
                "Workspace size must be non-zero, got {}x{}.",
                workspace.width, workspace.height
            ))
            .into());
        }
        if workspace.cascade_step_x == 0 || workspace.cascade_step_y == 0 {
            return Err(ConfigError::ValidationError(
                "Cascade steps must be non-zero.".to_string(),
            )
            .into());
        }
        let pixel_values = [
            ("width", workspace.width),
            ("height", workspace.height),
            ("quadrant_margin", workspace.quadrant_margin),
            ("cascade_step_x", workspace.cascade_step_x),
            ("cascade_step_y", workspace.cascade_step_y),
            ("cascade_bottom_reserve", workspace.cascade_bottom_reserve),
            ("cascade_right_reserve", workspace.cascade_right_reserve),
        ];
        if let Some((key, value)) = pixel_values.iter().find(|(_, v)| *v > MAX_DIMENSION) {
            return Err(ConfigError::ValidationError(format!(
                "Workspace {} = {} exceeds the maximum of {} pixels.",
                key, value, MAX_DIMENSION
            ))
            .into());
        }
        Ok(())
    }
}
