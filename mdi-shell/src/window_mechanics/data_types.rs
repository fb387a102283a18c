// mdi-shell/src/window_mechanics/data_types.rs

use mdi_core::types::geometry::RectInt;
use uuid::Uuid;

/// Opaque handle of a child window.
///
/// Wraps a `uuid::Uuid`; event sources carry this instead of a reference to
/// the window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(Uuid);

impl WindowId {
    /// Creates a new, unique `WindowId`.
    pub fn new_v4() -> Self {
        WindowId(Uuid::new_v4())
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new_v4()
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle of a taskbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(Uuid);

impl ButtonId {
    /// Creates a new, unique `ButtonId`.
    pub fn new_v4() -> Self {
        ButtonId(Uuid::new_v4())
    }
}

impl Default for ButtonId {
    fn default() -> Self {
        Self::new_v4()
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a child window is shown in the workspace or parked on the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Hidden; a taskbar button stands in for the window.
    Minimized,
}

/// A sub-window living inside the workspace.
///
/// The geometry is kept while the window is minimized, so restoring it brings
/// it back where it was.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildWindow {
    /// Unique identifier for this window.
    pub id: WindowId,
    /// The title; taskbar buttons reuse it as their label.
    pub title: String,
    pub visibility: Visibility,
    /// Position and size within the workspace.
    pub geometry: RectInt,
    /// Text shown in the window body.
    pub content: String,
}

impl ChildWindow {
    /// Creates a visible `ChildWindow` with a fresh id.
    pub fn new(title: impl Into<String>, geometry: RectInt) -> Self {
        let title = title.into();
        ChildWindow {
            id: WindowId::new_v4(),
            content: format!("This is {}", title),
            title,
            visibility: Visibility::Visible,
            geometry,
        }
    }

    pub fn is_minimized(&self) -> bool {
        self.visibility == Visibility::Minimized
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}

/// A taskbar proxy for a minimized window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarButton {
    pub id: ButtonId,
    /// Always the title of the window the button restores.
    pub label: String,
}

impl TaskbarButton {
    pub fn new(label: impl Into<String>) -> Self {
        TaskbarButton {
            id: ButtonId::new_v4(),
            label: label.into(),
        }
    }
}
