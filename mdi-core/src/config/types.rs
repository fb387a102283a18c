//! Configuration data structures.
//!
//! - [`CoreConfig`]: the root, one table per subsystem.
//! - [`LoggingConfig`]: the `[logging]` table.
//! - [`WorkspaceConfig`]: the `[workspace]` table (initial size and layout tuning).
//!
//! Every field has a default from [`super::defaults`], so an empty file is a
//! valid configuration. Unknown keys are rejected.

use super::defaults;
use crate::types::SizeInt;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// ```
/// use mdi_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/mdi-shell.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/mdi-shell.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths resolve against the application state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json" (case-insensitive).
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Initial workspace size and the knobs of the built-in layouts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Workspace width in pixels when the main window is first shown.
    #[serde(default = "defaults::default_workspace_width")]
    pub width: u32,
    #[serde(default = "defaults::default_workspace_height")]
    pub height: u32,
    /// Pixels subtracted from each quadrant's width and height on reset.
    #[serde(default = "defaults::default_quadrant_margin")]
    pub quadrant_margin: u32,
    /// Horizontal offset between cascaded windows.
    #[serde(default = "defaults::default_cascade_step_x")]
    pub cascade_step_x: u32,
    /// Vertical offset between cascaded windows.
    #[serde(default = "defaults::default_cascade_step_y")]
    pub cascade_step_y: u32,
    /// Space kept free below the last cascaded row.
    #[serde(default = "defaults::default_cascade_bottom_reserve")]
    pub cascade_bottom_reserve: u32,
    /// Space kept free right of the last cascade column.
    #[serde(default = "defaults::default_cascade_right_reserve")]
    pub cascade_right_reserve: u32,
}

impl WorkspaceConfig {
    /// The initial workspace size.
    pub fn initial_size(&self) -> SizeInt {
        SizeInt::new(self.width, self.height)
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        defaults::default_workspace_config()
    }
}

/// Root configuration structure.
///
/// ```
/// use mdi_core::config::CoreConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [workspace]
/// width = 1024
/// "#;
/// let loaded: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(loaded.logging.level, "warn");
/// assert_eq!(loaded.workspace.width, 1024);
/// assert_eq!(loaded.workspace.height, 600);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_workspace_config")]
    pub workspace: WorkspaceConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            workspace: defaults::default_workspace_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_core_config_default_values() {
        let core_config = CoreConfig::default();
        assert_eq!(core_config.logging, LoggingConfig::default());
        assert_eq!(core_config.workspace, WorkspaceConfig::default());
        assert_eq!(core_config.workspace.initial_size(), SizeInt::new(800, 600));
    }

    #[test]
    fn test_core_config_deserialize_empty() {
        let config: CoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn test_workspace_config_deserialize_partial() {
        let config: CoreConfig = toml::from_str(
            r#"
            [workspace]
            height = 800
            quadrant_margin = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.workspace.width, 800);
        assert_eq!(config.workspace.height, 800);
        assert_eq!(config.workspace.quadrant_margin, 0);
        assert_eq!(config.workspace.cascade_step_y, 28);
    }

    #[test]
    fn test_logging_config_deserialize_full() {
        let config: LoggingConfig =
            toml::from_str(r#"level = "trace"
file_path = "/tmp/app.log"
format = "json""#)
                .unwrap();
        assert_eq!(config.level, "trace");
        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/app.log")));
        assert_eq!(config.format, "json");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<LoggingConfig>(r#"colour = "always""#).is_err());
        assert!(toml::from_str::<CoreConfig>("[taskbar]\nheight = 30\n").is_err());
    }
}
