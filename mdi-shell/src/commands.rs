// Copyright (c) 2025 MDI Shell Contributors
// SPDX-License-Identifier: MIT

//! # Commands and UI Events
//!
//! Named workspace actions, the UI controls that trigger them, and the
//! dispatch table joining the two. A command may be bound to any number of
//! triggers; a trigger resolves to at most one command.

use std::collections::HashMap;
use std::fmt;

use mdi_core::types::geometry::SizeInt;

use crate::window_mechanics::{ButtonId, WindowId};

/// Title of the main window's only menu.
pub const WINDOW_MENU: &str = "Window";
/// Item of a child window's context menu that minimizes it.
pub const MINIMIZE_ITEM: &str = "Minimize";

/// A workspace-wide action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Cascade,
    Tile,
    ListWindows,
    MinimizeAll,
    ResetLayout,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Cascade => "Cascade",
            Command::Tile => "Tile",
            Command::ListWindows => "List Windows",
            Command::MinimizeAll => "Minimize All",
            Command::ResetLayout => "Reset Layout",
        };
        f.write_str(name)
    }
}

/// A UI control that can fire a command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trigger {
    MenuItem { menu: String, item: String },
    ToolbarButton(String),
}

impl Trigger {
    pub fn menu_item(menu: impl Into<String>, item: impl Into<String>) -> Self {
        Trigger::MenuItem { menu: menu.into(), item: item.into() }
    }

    pub fn toolbar(label: impl Into<String>) -> Self {
        Trigger::ToolbarButton(label.into())
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::MenuItem { menu, item } => write!(f, "menu {} -> {}", menu, item),
            Trigger::ToolbarButton(label) => write!(f, "toolbar '{}'", label),
        }
    }
}

/// Everything the main window reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A menu item or toolbar button was activated.
    Triggered(Trigger),
    /// An item was chosen from a child window's context menu.
    ContextMenu { window: WindowId, item: String },
    /// A taskbar button was clicked.
    TaskbarClicked(ButtonId),
    /// The main window, and with it the workspace, changed size.
    Resized(SizeInt),
}

/// Explicit `Trigger -> Command` dispatch table.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    bindings: HashMap<Trigger, Command>,
    /// Insertion order, for stable help output.
    order: Vec<Trigger>,
}

impl CommandTable {
    /// An empty table; every trigger is unbound.
    pub fn new() -> Self {
        Self::default()
    }

    /// The main window's menu and toolbar bindings.
    pub fn default_bindings() -> Self {
        let mut table = Self::new();
        table.bind(Trigger::menu_item(WINDOW_MENU, "Cascade"), Command::Cascade);
        table.bind(Trigger::menu_item(WINDOW_MENU, "Tile"), Command::Tile);
        table.bind(Trigger::menu_item(WINDOW_MENU, "List Windows"), Command::ListWindows);
        table.bind(Trigger::toolbar("Cascade"), Command::Cascade);
        table.bind(Trigger::toolbar("Tile"), Command::Tile);
        table.bind(Trigger::toolbar("Minimize All"), Command::MinimizeAll);
        table.bind(Trigger::toolbar("Reset Layout"), Command::ResetLayout);
        table
    }

    /// Binds `trigger` to `command`, replacing any earlier binding of that trigger.
    pub fn bind(&mut self, trigger: Trigger, command: Command) {
        if self.bindings.insert(trigger.clone(), command).is_none() {
            self.order.push(trigger);
        }
    }

    pub fn unbind(&mut self, trigger: &Trigger) -> Option<Command> {
        let command = self.bindings.remove(trigger)?;
        self.order.retain(|t| t != trigger);
        Some(command)
    }

    pub fn resolve(&self, trigger: &Trigger) -> Option<Command> {
        self.bindings.get(trigger).copied()
    }

    /// All triggers bound to `command`, in binding order.
    pub fn triggers_for(&self, command: Command) -> impl Iterator<Item = &Trigger> + '_ {
        self.bindings_in_order().filter(move |(_, c)| *c == command).map(|(t, _)| t)
    }

    /// Every binding, in binding order.
    pub fn bindings_in_order(&self) -> impl Iterator<Item = (&Trigger, Command)> + '_ {
        self.order
            .iter()
            .filter_map(move |t| self.bindings.get(t).map(|c| (t, *c)))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Trigger::menu_item("Window", "Cascade"), Command::Cascade)]
    #[case(Trigger::menu_item("Window", "Tile"), Command::Tile)]
    #[case(Trigger::menu_item("Window", "List Windows"), Command::ListWindows)]
    #[case(Trigger::toolbar("Cascade"), Command::Cascade)]
    #[case(Trigger::toolbar("Tile"), Command::Tile)]
    #[case(Trigger::toolbar("Minimize All"), Command::MinimizeAll)]
    #[case(Trigger::toolbar("Reset Layout"), Command::ResetLayout)]
    fn default_bindings_resolve(#[case] trigger: Trigger, #[case] expected: Command) {
        assert_eq!(CommandTable::default_bindings().resolve(&trigger), Some(expected));
    }

    #[rstest]
    #[case(Trigger::menu_item("Window", "Minimize All"))]
    #[case(Trigger::menu_item("File", "Tile"))]
    #[case(Trigger::toolbar("List Windows"))]
    #[case(Trigger::toolbar("tile"))]
    fn unbound_triggers_resolve_to_nothing(#[case] trigger: Trigger) {
        assert_eq!(CommandTable::default_bindings().resolve(&trigger), None);
    }

    #[test]
    fn cascade_has_two_triggers() {
        let table = CommandTable::default_bindings();
        let triggers: Vec<&Trigger> = table.triggers_for(Command::Cascade).collect();
        assert_eq!(
            triggers,
            vec![&Trigger::menu_item("Window", "Cascade"), &Trigger::toolbar("Cascade")]
        );
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn rebinding_replaces_without_duplicating() {
        let mut table = CommandTable::new();
        assert!(table.is_empty());
        table.bind(Trigger::toolbar("Go"), Command::Tile);
        table.bind(Trigger::toolbar("Go"), Command::Cascade);
        assert_eq!(table.len(), 1);
        assert_eq!(table.bindings_in_order().count(), 1);
        assert_eq!(table.resolve(&Trigger::toolbar("Go")), Some(Command::Cascade));

        assert_eq!(table.unbind(&Trigger::toolbar("Go")), Some(Command::Cascade));
        assert_eq!(table.bindings_in_order().count(), 0);
        assert_eq!(table.unbind(&Trigger::toolbar("Go")), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(Command::MinimizeAll.to_string(), "Minimize All");
        assert_eq!(Trigger::menu_item("Window", "Tile").to_string(), "menu Window -> Tile");
        assert_eq!(Trigger::toolbar("Reset Layout").to_string(), "toolbar 'Reset Layout'");
    }
}
