//! XDG base directory and application-specific path resolution.
//!
//! Built on `directories-next`. All functions return
//! [`CoreError::Config(ConfigError::DirectoryUnavailable)`] when a directory
//! cannot be determined (typically because `HOME` is unset).
//!
//! Application directories are derived from:
//! - `QUALIFIER`: "org"
//! - `ORGANIZATION`: "MdiShell"
//! - `APPLICATION`: "mdi-shell"

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "MdiShell";
const APPLICATION: &str = "mdi-shell";

/// Environment variable that points the loader at a specific config file.
pub const CONFIG_PATH_ENV: &str = "MDI_CONFIG_PATH";

/// File name of the user configuration inside [`get_app_config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the base directory for user-specific state files.
///
/// On Linux this honours `$XDG_STATE_HOME` and falls back to `~/.local/state`.
pub fn get_state_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            {
                match std::env::var("XDG_STATE_HOME") {
                    Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                    _ => dirs.home_dir().join(".local/state"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                // directories-next has no generic state dir outside XDG.
                dirs.data_local_dir().to_path_buf()
            }
        })
        .ok_or_else(|| CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: "State Base".to_string(),
        }))
}

/// Returns the application-specific configuration directory,
/// e.g. `~/.config/mdi-shell` on Linux.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: "App Config".to_string(),
        }))
}

/// Returns the application-specific state directory (log files live here).
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    get_state_base_dir().map(|base_state| base_state.join(APPLICATION))
}

/// Resolves the configuration file to read.
///
/// A non-empty [`CONFIG_PATH_ENV`] wins; otherwise the file is
/// [`CONFIG_FILE_NAME`] inside [`get_app_config_dir`].
pub fn get_config_file_path() -> Result<PathBuf, CoreError> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => get_app_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)),
    }
}
