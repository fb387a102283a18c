// mdi-shell/src/window_mechanics/error.rs

use mdi_core::error::CoreError;
use thiserror::Error;

/// Errors raised at the edges of the shell.
///
/// Window-management operations themselves never fail: an unknown window or
/// button is a silent no-op. These variants cover startup and the console
/// front-end.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Configuration, logging, or filesystem failure from the core layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A console line could not be turned into a UI event.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// A console line named a window that does not exist.
    #[error("Unknown window: {0}")]
    UnknownWindow(String),
}
