// mdi-shell/src/window_mechanics/manager.rs

use std::collections::HashMap;
use tracing::{debug, info, warn};

use mdi_core::types::geometry::{RectInt, SizeInt};
use mdi_core::WorkspaceConfig;

use super::data_types::{ButtonId, ChildWindow, TaskbarButton, Visibility, WindowId};
use super::layout::{quadrant_geometry, LayoutAlgorithm, RegularTiler, SimpleCascader};
use super::taskbar::Taskbar;
use super::workspace::Workspace;

/// Titles of the windows created at startup, in quadrant order.
pub const INITIAL_WINDOW_TITLES: [&str; 4] = ["Top Left", "Top Right", "Bottom Left", "Bottom Right"];

/// Keeps the workspace's child windows and the taskbar in step.
///
/// The workspace owns the windows and the taskbar owns the buttons. The
/// registry only pairs their ids: a window is minimized exactly when one
/// registry entry points at it, and every entry's button is on the taskbar.
/// Every public operation leaves that invariant intact before returning.
#[derive(Debug)]
pub struct WindowManager {
    workspace: Workspace,
    taskbar: Taskbar,
    /// Minimized windows, keyed by the taskbar button that stands in for them.
    registry: HashMap<ButtonId, WindowId>,
    tiler: Box<dyn LayoutAlgorithm>,
    cascader: Box<dyn LayoutAlgorithm>,
    quadrant_margin: u32,
}

impl WindowManager {
    /// Creates the manager with the built-in tile and cascade layouts.
    ///
    /// The four initial windows are placed in their quadrants and then tiled.
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self::with_layouts(
            config,
            Box::new(RegularTiler),
            Box::new(SimpleCascader::from_config(config)),
        )
    }

    /// Creates the manager with caller-supplied layout algorithms.
    pub fn with_layouts(
        config: &WorkspaceConfig,
        tiler: Box<dyn LayoutAlgorithm>,
        cascader: Box<dyn LayoutAlgorithm>,
    ) -> Self {
        let size = config.initial_size();
        info!(
            "Initializing WindowManager: workspace {}x{}, tile='{}', cascade='{}'.",
            size.width,
            size.height,
            tiler.name(),
            cascader.name()
        );

        let mut workspace = Workspace::new(size);
        let quadrants = quadrant_geometry(size, config.quadrant_margin);
        for (title, rect) in INITIAL_WINDOW_TITLES.iter().zip(quadrants) {
            workspace.add_window(ChildWindow::new(*title, rect));
        }

        let mut manager = WindowManager {
            workspace,
            taskbar: Taskbar::new(),
            registry: HashMap::new(),
            tiler,
            cascader,
            quadrant_margin: config.quadrant_margin,
        };
        // Initial placement is followed by a tile pass over the same windows.
        manager.workspace.arrange_visible(manager.tiler.as_ref());
        manager
    }

    /// Hides `window` and parks it on the taskbar.
    ///
    /// Returns the new button, or `None` if the window is unknown or already
    /// minimized.
    pub fn minimize(&mut self, window: WindowId) -> Option<ButtonId> {
        let title = match self.workspace.window(window) {
            Some(w) if w.is_minimized() => {
                debug!("Minimize ignored: window '{}' ({}) is already minimized.", w.title, window);
                return None;
            }
            Some(w) => w.title.clone(),
            None => {
                debug!("Minimize ignored: unknown window {}.", window);
                return None;
            }
        };

        self.workspace.set_visibility(window, Visibility::Minimized);
        let button = self.taskbar.add_button(title.as_str());
        self.registry.insert(button, window);
        info!("Window '{}' ({}) minimized to taskbar button {}.", title, window, button);
        Some(button)
    }

    /// Brings back the window behind `button` and removes the button.
    ///
    /// The window keeps the geometry it had when it was minimized. Returns
    /// `false` for a button the registry does not know.
    pub fn restore(&mut self, button: ButtonId) -> bool {
        let Some(window) = self.registry.remove(&button) else {
            debug!("Restore ignored: button {} is not registered.", button);
            return false;
        };
        if self.taskbar.remove_button(button).is_none() {
            warn!("Button {} was registered for window {} but missing from the taskbar.", button, window);
        }
        self.workspace.set_visibility(window, Visibility::Visible);
        info!("Window {} restored from taskbar button {}.", window, button);
        true
    }

    /// Restores every minimized window, then cascades all windows.
    pub fn cascade_all(&mut self) {
        let restored = self.restore_all();
        let arranged = self.workspace.arrange_visible(self.cascader.as_ref());
        info!("Cascade: restored {} windows, arranged {}.", restored, arranged);
    }

    /// Restores every minimized window, then tiles all windows.
    pub fn tile_all(&mut self) {
        let restored = self.restore_all();
        let arranged = self.workspace.arrange_visible(self.tiler.as_ref());
        info!("Tile: restored {} windows, arranged {}.", restored, arranged);
    }

    /// Minimizes every visible window in container order.
    pub fn minimize_all(&mut self) {
        let visible: Vec<WindowId> = self
            .workspace
            .windows()
            .iter()
            .filter(|w| w.is_visible())
            .map(|w| w.id)
            .collect();
        let count = visible.into_iter().filter_map(|id| self.minimize(id)).count();
        info!("Minimize all: {} windows minimized.", count);
    }

    /// Restores every window and puts the first four back in their quadrants.
    ///
    /// Quadrants are computed from the current workspace size. Windows past
    /// the fourth keep their geometry.
    pub fn reset_layout(&mut self) {
        let restored = self.restore_all();
        let quadrants = quadrant_geometry(self.workspace.size(), self.quadrant_margin);
        let ids: Vec<WindowId> = self.workspace.windows().iter().map(|w| w.id).collect();
        for (id, rect) in ids.into_iter().zip(quadrants) {
            if let Some(window) = self.workspace.window_mut(id) {
                window.geometry = rect;
            }
        }
        info!(
            "Layout reset for workspace {}x{} ({} windows restored).",
            self.workspace.size().width,
            self.workspace.size().height,
            restored
        );
    }

    /// Records a new workspace size and resets the layout to it.
    pub fn resize(&mut self, size: SizeInt) {
        if size.is_empty() {
            warn!("Workspace resized to an empty area {}x{}.", size.width, size.height);
        }
        self.workspace.set_size(size);
        self.reset_layout();
    }

    /// Opens an extra visible window at `geometry`, after the existing ones.
    pub fn add_window(&mut self, title: impl Into<String>, geometry: RectInt) -> WindowId {
        self.workspace.add_window(ChildWindow::new(title, geometry))
    }

    /// Titles of all windows in container order.
    pub fn list_windows(&self) -> impl Iterator<Item = &str> + '_ {
        self.workspace.windows().iter().map(|w| w.title.as_str())
    }

    pub fn windows(&self) -> &[ChildWindow] {
        self.workspace.windows()
    }

    pub fn window(&self, id: WindowId) -> Option<&ChildWindow> {
        self.workspace.window(id)
    }

    pub fn window_by_title(&self, title: &str) -> Option<&ChildWindow> {
        self.workspace.window_by_title(title)
    }

    /// Taskbar buttons in the order their windows were minimized.
    pub fn taskbar_buttons(&self) -> &[TaskbarButton] {
        self.taskbar.buttons()
    }

    /// The button standing in for `window`, if it is minimized.
    pub fn button_for_window(&self, window: WindowId) -> Option<ButtonId> {
        self.registry
            .iter()
            .find_map(|(button, w)| (*w == window).then_some(*button))
    }

    pub fn window_for_button(&self, button: ButtonId) -> Option<WindowId> {
        self.registry.get(&button).copied()
    }

    pub fn workspace_size(&self) -> SizeInt {
        self.workspace.size()
    }

    pub fn minimized_count(&self) -> usize {
        self.registry.len()
    }

    /// Force-restores all minimized windows in container order.
    fn restore_all(&mut self) -> usize {
        let minimized: Vec<WindowId> = self
            .workspace
            .windows()
            .iter()
            .filter(|w| w.is_minimized())
            .map(|w| w.id)
            .collect();
        minimized.into_iter().filter(|id| self.force_restore(*id)).count()
    }

    /// Restores `window` through its button, if it has one.
    fn force_restore(&mut self, window: WindowId) -> bool {
        match self.button_for_window(window) {
            Some(button) => self.restore(button),
            None => {
                warn!("Window {} is minimized but has no taskbar button; making it visible.", window);
                self.workspace.set_visibility(window, Visibility::Visible)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn manager() -> WindowManager {
        WindowManager::new(&WorkspaceConfig::default())
    }

    fn id_of(manager: &WindowManager, title: &str) -> WindowId {
        manager.window_by_title(title).map(|w| w.id).unwrap()
    }

    fn assert_registry_consistent(manager: &WindowManager) {
        for window in manager.windows() {
            let button = manager.button_for_window(window.id);
            assert_eq!(window.is_minimized(), button.is_some(), "window '{}'", window.title);
            if let Some(button) = button {
                let on_taskbar = manager.taskbar_buttons().iter().filter(|b| b.id == button).count();
                assert_eq!(on_taskbar, 1);
            }
        }
        assert_eq!(manager.taskbar_buttons().len(), manager.minimized_count());
    }

    #[test]
    fn restore_recovers_when_the_button_left_the_taskbar() {
        let mut manager = manager();
        let top_right = id_of(&manager, "Top Right");
        let button = manager.minimize(top_right).unwrap();
        manager.taskbar.remove_button(button);

        assert!(manager.restore(button));
        assert!(manager.window(top_right).unwrap().is_visible());
        assert_eq!(manager.window_for_button(button), None);
        assert_registry_consistent(&manager);
    }

    #[test]
    fn new_creates_four_titled_windows_and_tiles_them() {
        let manager = manager();
        let titles: Vec<&str> = manager.list_windows().collect();
        assert_eq!(titles, INITIAL_WINDOW_TITLES.to_vec());
        assert!(manager.windows().iter().all(|w| w.is_visible()));
        assert!(manager.taskbar_buttons().is_empty());
        // Place-then-tile: the tile pass overrides the 380x280 quadrants.
        assert_eq!(manager.windows()[3].geometry, RectInt::from_coords(400, 300, 400, 300));
    }

    #[test]
    fn minimize_creates_labelled_button() {
        let mut manager = manager();
        let top_left = id_of(&manager, "Top Left");
        let button = manager.minimize(top_left).unwrap();

        assert!(manager.window(top_left).unwrap().is_minimized());
        assert_eq!(manager.taskbar_buttons().len(), 1);
        assert_eq!(manager.taskbar_buttons()[0].label, "Top Left");
        assert_eq!(manager.window_for_button(button), Some(top_left));
        assert_eq!(manager.button_for_window(top_left), Some(button));
        assert_registry_consistent(&manager);
    }

    #[test]
    fn second_minimize_is_ignored() {
        let mut manager = manager();
        let id = id_of(&manager, "Top Right");
        assert!(manager.minimize(id).is_some());
        assert!(manager.minimize(id).is_none());
        assert_eq!(manager.taskbar_buttons().len(), 1);
        assert_registry_consistent(&manager);
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut manager = manager();
        assert!(manager.minimize(WindowId::new_v4()).is_none());
        assert!(!manager.restore(ButtonId::new_v4()));
        assert_eq!(manager.minimized_count(), 0);
    }

    #[test]
    fn restore_returns_window_to_last_geometry() {
        let mut manager = manager();
        let id = id_of(&manager, "Bottom Left");
        let before = manager.window(id).unwrap().geometry;

        let button = manager.minimize(id).unwrap();
        assert!(manager.restore(button));

        let window = manager.window(id).unwrap();
        assert!(window.is_visible());
        assert_eq!(window.geometry, before);
        assert!(manager.taskbar_buttons().is_empty());
        assert!(manager.window_for_button(button).is_none());
        // The button is gone; a second click on it does nothing.
        assert!(!manager.restore(button));
    }

    #[test]
    fn minimize_all_then_tile_restores_everything() {
        let mut manager = manager();
        manager.minimize_all();
        assert_eq!(manager.minimized_count(), 4);
        let labels: Vec<&str> = manager.taskbar_buttons().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, INITIAL_WINDOW_TITLES.to_vec());
        assert_registry_consistent(&manager);

        manager.tile_all();
        assert_eq!(manager.minimized_count(), 0);
        assert!(manager.taskbar_buttons().is_empty());
        assert!(manager.windows().iter().all(|w| w.is_visible()));
    }

    #[test]
    fn cascade_restores_and_offsets() {
        let mut manager = manager();
        let id = id_of(&manager, "Top Right");
        manager.minimize(id);
        manager.cascade_all();

        assert_eq!(manager.minimized_count(), 0);
        let origins: Vec<(i32, i32)> = manager.windows().iter().map(|w| (w.geometry.x(), w.geometry.y())).collect();
        assert_eq!(origins, vec![(0, 0), (10, 28), (20, 56), (30, 84)]);
    }

    #[test]
    fn reset_layout_uses_current_size() {
        let mut manager = manager();
        manager.minimize(id_of(&manager, "Bottom Right"));
        manager.resize(SizeInt::new(1000, 800));

        let geometry: Vec<RectInt> = manager.windows().iter().map(|w| w.geometry).collect();
        assert_eq!(
            geometry,
            vec![
                RectInt::from_coords(0, 0, 480, 380),
                RectInt::from_coords(500, 0, 480, 380),
                RectInt::from_coords(0, 400, 480, 380),
                RectInt::from_coords(500, 400, 480, 380),
            ]
        );
        assert_eq!(manager.workspace_size(), SizeInt::new(1000, 800));
        assert_eq!(manager.minimized_count(), 0);
        assert_registry_consistent(&manager);
    }

    #[test]
    fn reset_layout_leaves_fifth_window_alone() {
        let mut manager = manager();
        let extra_rect = RectInt::from_coords(33, 44, 55, 66);
        let extra = manager.add_window("Extra", extra_rect);
        manager.minimize(extra);

        manager.reset_layout();
        let window = manager.window(extra).unwrap();
        assert!(window.is_visible());
        assert_eq!(window.geometry, extra_rect);
        assert_eq!(manager.windows()[0].geometry, RectInt::from_coords(0, 0, 380, 280));
    }

    #[test]
    fn list_windows_does_not_mutate() {
        let mut manager = manager();
        manager.minimize(id_of(&manager, "Top Left"));
        let before: Vec<ChildWindow> = manager.windows().to_vec();
        assert_eq!(manager.list_windows().count(), 4);
        assert_eq!(manager.windows().to_vec(), before);
    }
}
