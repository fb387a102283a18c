//! Default configuration values.
//!
//! Used by `serde`'s `default` attribute in [`super::types`] whenever a key is
//! missing from `config.toml`.

use crate::config::{LoggingConfig, WorkspaceConfig};
use std::path::PathBuf;

pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// No log file by default.
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(super) fn default_log_format() -> String {
    "text".to_string()
}

pub(super) fn default_workspace_config() -> WorkspaceConfig {
    WorkspaceConfig {
        width: default_workspace_width(),
        height: default_workspace_height(),
        quadrant_margin: default_quadrant_margin(),
        cascade_step_x: default_cascade_step_x(),
        cascade_step_y: default_cascade_step_y(),
        cascade_bottom_reserve: default_cascade_bottom_reserve(),
        cascade_right_reserve: default_cascade_right_reserve(),
    }
}

pub(super) fn default_workspace_width() -> u32 {
    800
}

pub(super) fn default_workspace_height() -> u32 {
    600
}

/// Gap subtracted from each quadrant so neighbouring windows do not touch.
pub(super) fn default_quadrant_margin() -> u32 {
    20
}

pub(super) fn default_cascade_step_x() -> u32 {
    10
}

/// Roughly one title bar.
pub(super) fn default_cascade_step_y() -> u32 {
    28
}

pub(super) fn default_cascade_bottom_reserve() -> u32 {
    50
}

pub(super) fn default_cascade_right_reserve() -> u32 {
    100
}
