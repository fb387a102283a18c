// mdi-shell/src/window_mechanics/taskbar.rs

use tracing::debug;

use super::data_types::{ButtonId, TaskbarButton};

/// Horizontal strip of buttons for minimized windows.
///
/// Buttons are appended at the end and removed from wherever they sit, so the
/// order is the order in which windows were minimized.
#[derive(Debug, Clone, Default)]
pub struct Taskbar {
    buttons: Vec<TaskbarButton>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a button labelled `label` and returns its id.
    pub fn add_button(&mut self, label: impl Into<String>) -> ButtonId {
        let button = TaskbarButton::new(label);
        let id = button.id;
        debug!("Taskbar: added button '{}' ({})", button.label, id);
        self.buttons.push(button);
        id
    }

    /// Removes and returns the button, or `None` if it is not on the taskbar.
    pub fn remove_button(&mut self, id: ButtonId) -> Option<TaskbarButton> {
        let index = self.buttons.iter().position(|b| b.id == id)?;
        let button = self.buttons.remove(index);
        debug!("Taskbar: removed button '{}' ({})", button.label, id);
        Some(button)
    }

    pub fn buttons(&self) -> &[TaskbarButton] {
        &self.buttons
    }
}
