//! # MDI Shell (`mdi-shell`)
//!
//! A multi-document workspace: four child windows that can be minimized to a
//! taskbar, restored, cascaded, tiled, and reset to fixed quadrants.
//!
//! - [`window_mechanics`]: windows, taskbar, layouts and the [`WindowManager`].
//! - [`commands`]: named actions and the trigger dispatch table.
//! - [`main_window`]: routes UI events to the manager.
//! - [`console`]: the line-oriented front-end used by the binary.

pub mod commands;
pub mod console;
pub mod main_window;
pub mod window_mechanics;

pub use commands::{Command, CommandTable, Trigger, UiEvent};
pub use main_window::MainWindow;
pub use window_mechanics::{ButtonId, ShellError, WindowId, WindowManager};
