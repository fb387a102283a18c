// Copyright (c) 2025 MDI Shell Contributors
// SPDX-License-Identifier: MIT

//! # Main Window
//!
//! The top-level window: hosts the workspace, the taskbar, the "Window" menu
//! and the toolbar, and routes every [`UiEvent`] to the [`WindowManager`].

use tracing::{debug, info};

use mdi_core::types::geometry::SizeInt;
use mdi_core::WorkspaceConfig;

use crate::commands::{Command, CommandTable, UiEvent, MINIMIZE_ITEM};
use crate::window_mechanics::WindowManager;

/// Target of the window-list diagnostic output.
pub const DIAGNOSTICS_TARGET: &str = "mdi_shell::diagnostics";

#[derive(Debug)]
pub struct MainWindow {
    manager: WindowManager,
    commands: CommandTable,
    initial_size: SizeInt,
    shown: bool,
}

impl MainWindow {
    /// Builds the main window with the default bindings, without showing it.
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self::with_commands(config, CommandTable::default_bindings())
    }

    pub fn with_commands(config: &WorkspaceConfig, commands: CommandTable) -> Self {
        MainWindow {
            manager: WindowManager::new(config),
            commands,
            initial_size: config.initial_size(),
            shown: false,
        }
    }

    /// Builds and shows the main window.
    pub fn open(config: &WorkspaceConfig) -> Self {
        let mut window = Self::new(config);
        window.show();
        window
    }

    /// Shows the window. The first show delivers the initial resize event,
    /// which lays the children out in their quadrants.
    pub fn show(&mut self) {
        if self.shown {
            return;
        }
        self.shown = true;
        info!("Main window shown at {}x{}.", self.initial_size.width, self.initial_size.height);
        self.dispatch(UiEvent::Resized(self.initial_size));
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Routes one event. Returns `false` when nothing handled it.
    pub fn dispatch(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Triggered(trigger) => match self.commands.resolve(&trigger) {
                Some(command) => {
                    debug!("{} fired {}.", trigger, command);
                    self.execute(command);
                    true
                }
                None => {
                    debug!("{} is not bound to any command.", trigger);
                    false
                }
            },
            UiEvent::ContextMenu { window, item } if item == MINIMIZE_ITEM => {
                self.manager.minimize(window).is_some()
            }
            UiEvent::ContextMenu { window, item } => {
                debug!("Context menu item '{}' on window {} is not handled.", item, window);
                false
            }
            UiEvent::TaskbarClicked(button) => self.manager.restore(button),
            UiEvent::Resized(size) => {
                self.manager.resize(size);
                true
            }
        }
    }

    /// Runs `command` directly, bypassing the dispatch table.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Cascade => self.manager.cascade_all(),
            Command::Tile => self.manager.tile_all(),
            Command::ListWindows => self.log_window_list(),
            Command::MinimizeAll => self.manager.minimize_all(),
            Command::ResetLayout => self.manager.reset_layout(),
        }
    }

    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    fn log_window_list(&self) {
        debug!(target: DIAGNOSTICS_TARGET, "Open Windows:");
        for title in self.manager.list_windows() {
            debug!(target: DIAGNOSTICS_TARGET, "{}", title);
        }
    }
}
