// mdi-shell/src/window_mechanics/mod.rs

//! Child windows, the taskbar, and the bookkeeping that keeps them consistent.
//!
//! [`WindowManager`] is the entry point. It owns a [`Workspace`] holding the
//! child windows and a [`Taskbar`] holding one button per minimized window,
//! and pairs the two through an id registry.

pub mod data_types;
pub mod error;
pub mod layout;
pub mod manager;
pub mod taskbar;
pub mod workspace;

pub use data_types::{ButtonId, ChildWindow, TaskbarButton, Visibility, WindowId};
pub use error::ShellError;
pub use layout::{quadrant_geometry, LayoutAlgorithm, RegularTiler, SimpleCascader};
pub use manager::{WindowManager, INITIAL_WINDOW_TITLES};
pub use taskbar::Taskbar;
pub use workspace::Workspace;
