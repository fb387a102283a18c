// mdi-shell/src/window_mechanics/workspace.rs

use mdi_core::types::geometry::{RectInt, SizeInt};
use tracing::{debug, warn};

use super::data_types::{ChildWindow, Visibility, WindowId};
use super::layout::LayoutAlgorithm;

/// The container area hosting the child windows.
///
/// Owns the windows and keeps them in insertion order; that order is what
/// listing and the layout algorithms see.
#[derive(Debug, Clone)]
pub struct Workspace {
    size: SizeInt,
    windows: Vec<ChildWindow>,
}

impl Workspace {
    pub fn new(size: SizeInt) -> Self {
        Workspace { size, windows: Vec::new() }
    }

    pub fn size(&self) -> SizeInt {
        self.size
    }

    pub fn set_size(&mut self, size: SizeInt) {
        if self.size != size {
            debug!("Workspace resized from {:?} to {:?}", self.size, size);
        }
        self.size = size;
    }

    /// The whole workspace as a rectangle anchored at the origin.
    pub fn area(&self) -> RectInt {
        RectInt::from_size(self.size)
    }

    /// Adds a visible window and returns its id.
    pub fn add_window(&mut self, window: ChildWindow) -> WindowId {
        let id = window.id;
        debug!("Adding window '{}' ({}) at {:?}", window.title, id, window.geometry);
        self.windows.push(window);
        id
    }

    pub fn windows(&self) -> &[ChildWindow] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&ChildWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut ChildWindow> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// First window carrying `title`, in insertion order.
    pub fn window_by_title(&self, title: &str) -> Option<&ChildWindow> {
        self.windows.iter().find(|w| w.title == title)
    }

    pub fn set_visibility(&mut self, id: WindowId, visibility: Visibility) -> bool {
        match self.window_mut(id) {
            Some(window) => {
                window.visibility = visibility;
                true
            }
            None => false,
        }
    }

    /// Runs `layout` over the visible windows; minimized ones keep their geometry.
    ///
    /// Returns the number of windows that were arranged.
    pub fn arrange_visible(&mut self, layout: &dyn LayoutAlgorithm) -> usize {
        let current: Vec<RectInt> = self
            .windows
            .iter()
            .filter(|w| w.is_visible())
            .map(|w| w.geometry)
            .collect();
        let arranged = layout.arrange(&current, self.area());
        if arranged.len() != current.len() {
            warn!(
                "Layout '{}' returned {} rects for {} windows; geometry left unchanged.",
                layout.name(),
                arranged.len(),
                current.len()
            );
            return 0;
        }

        for (window, rect) in self.windows.iter_mut().filter(|w| w.is_visible()).zip(arranged) {
            window.geometry = rect;
        }
        debug!("Applied layout '{}' to {} visible windows.", layout.name(), current.len());
        current.len()
    }
}
