// Copyright (c) 2025 MDI Shell Contributors
// SPDX-License-Identifier: MIT

//! # Console Front-End
//!
//! Line-oriented stand-in for the mouse and keyboard: each input line becomes
//! one [`UiEvent`] for the [`MainWindow`].

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use mdi_core::types::geometry::{SizeInt, MAX_DIMENSION};

use crate::commands::{CommandTable, Trigger, UiEvent, MINIMIZE_ITEM};
use crate::main_window::MainWindow;
use crate::window_mechanics::{ShellError, WindowManager};

/// Which taskbar button a `click` line refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// 1-based position on the taskbar.
    Position(usize),
    Label(String),
}

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Menu { menu: String, item: String },
    Toolbar(String),
    Minimize(String),
    Click(ClickTarget),
    Resize(SizeInt),
    State,
    Help,
    Quit,
    /// Blank line or comment.
    Nothing,
}

/// Parses one line of console input.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, ShellError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ConsoleCommand::Nothing);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "menu" => {
            let (menu, item) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| ShellError::InvalidCommand("usage: menu <Menu> <Item...>".to_string()))?;
            Ok(ConsoleCommand::Menu { menu: menu.to_string(), item: item.trim().to_string() })
        }
        "toolbar" => Ok(ConsoleCommand::Toolbar(required(rest, "usage: toolbar <Label...>")?)),
        "minimize" => Ok(ConsoleCommand::Minimize(required(rest, "usage: minimize <Title...>")?)),
        "click" => {
            let target = required(rest, "usage: click <n> | click <Label...>")?;
            match target.parse::<usize>() {
                Ok(0) => Err(ShellError::InvalidCommand("taskbar positions start at 1".to_string())),
                Ok(n) => Ok(ConsoleCommand::Click(ClickTarget::Position(n))),
                Err(_) => Ok(ConsoleCommand::Click(ClickTarget::Label(target))),
            }
        }
        "resize" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(w), Some(h), None) => {
                    let width = parse_dimension(w)?;
                    let height = parse_dimension(h)?;
                    Ok(ConsoleCommand::Resize(SizeInt::new(width, height)))
                }
                _ => Err(ShellError::InvalidCommand("usage: resize <width> <height>".to_string())),
            }
        }
        "state" => Ok(ConsoleCommand::State),
        "help" => Ok(ConsoleCommand::Help),
        "quit" | "exit" => Ok(ConsoleCommand::Quit),
        other => Err(ShellError::InvalidCommand(format!("unknown command '{}'", other))),
    }
}

fn required(rest: &str, usage: &str) -> Result<String, ShellError> {
    if rest.is_empty() {
        Err(ShellError::InvalidCommand(usage.to_string()))
    } else {
        Ok(rest.to_string())
    }
}

fn parse_dimension(value: &str) -> Result<u32, ShellError> {
    let dimension = value
        .parse::<u32>()
        .map_err(|e| ShellError::InvalidCommand(format!("'{}' is not a valid size: {}", value, e)))?;
    if dimension > MAX_DIMENSION {
        return Err(ShellError::InvalidCommand(format!(
            "'{}' is larger than the maximum size of {}",
            value, MAX_DIMENSION
        )));
    }
    Ok(dimension)
}

impl ConsoleCommand {
    /// Turns the command into the UI event it stands for.
    ///
    /// Returns `Ok(None)` for commands that are not UI events (state, help,
    /// quit, blank lines).
    pub fn to_event(&self, manager: &WindowManager) -> Result<Option<UiEvent>, ShellError> {
        let event = match self {
            ConsoleCommand::Menu { menu, item } => UiEvent::Triggered(Trigger::menu_item(menu, item)),
            ConsoleCommand::Toolbar(label) => UiEvent::Triggered(Trigger::toolbar(label)),
            ConsoleCommand::Minimize(title) => {
                let window = manager
                    .window_by_title(title)
                    .ok_or_else(|| ShellError::UnknownWindow(title.clone()))?;
                UiEvent::ContextMenu { window: window.id, item: MINIMIZE_ITEM.to_string() }
            }
            ConsoleCommand::Click(target) => {
                let buttons = manager.taskbar_buttons();
                let button = match target {
                    ClickTarget::Position(n) => n.checked_sub(1).and_then(|i| buttons.get(i)),
                    ClickTarget::Label(label) => buttons.iter().find(|b| &b.label == label),
                };
                let button = button.ok_or_else(|| {
                    ShellError::InvalidCommand(format!("no taskbar button {}", describe_target(target)))
                })?;
                UiEvent::TaskbarClicked(button.id)
            }
            ConsoleCommand::Resize(size) => UiEvent::Resized(*size),
            ConsoleCommand::State | ConsoleCommand::Help | ConsoleCommand::Quit | ConsoleCommand::Nothing => {
                return Ok(None)
            }
        };
        Ok(Some(event))
    }
}

fn describe_target(target: &ClickTarget) -> String {
    match target {
        ClickTarget::Position(n) => format!("at position {}", n),
        ClickTarget::Label(label) => format!("labelled '{}'", label),
    }
}

/// Human-readable summary of the workspace and taskbar.
pub fn render_state(manager: &WindowManager) -> String {
    let size = manager.workspace_size();
    let mut out = String::new();
    out.push_str(&format!("Workspace {}x{}\n", size.width, size.height));
    for window in manager.windows() {
        let g = window.geometry;
        let state = if window.is_minimized() { "minimized" } else { "visible" };
        out.push_str(&format!(
            "  {:<14} {:<9} at ({}, {}) size {}x{}  \"{}\"\n",
            window.title,
            state,
            g.x(),
            g.y(),
            g.width(),
            g.height(),
            window.content
        ));
    }
    if manager.taskbar_buttons().is_empty() {
        out.push_str("Taskbar: (empty)\n");
    } else {
        let labels: Vec<String> = manager
            .taskbar_buttons()
            .iter()
            .enumerate()
            .map(|(i, b)| format!("[{}] {}", i + 1, b.label))
            .collect();
        out.push_str(&format!("Taskbar: {}\n", labels.join("  ")));
    }
    out
}

/// The command reference printed by `help`.
pub fn help_text(commands: &CommandTable) -> String {
    let mut out = String::from("Commands:\n");
    out.push_str("  menu <Menu> <Item...>     activate a menu item\n");
    out.push_str("  toolbar <Label...>        press a toolbar button\n");
    out.push_str("  minimize <Title...>       minimize a window via its context menu\n");
    out.push_str("  click <n> | <Label...>    click a taskbar button\n");
    out.push_str("  resize <width> <height>   resize the main window\n");
    out.push_str("  state | help | quit\n");
    out.push_str("Bindings:\n");
    for (trigger, command) in commands.bindings_in_order() {
        out.push_str(&format!("  {:<28} {}\n", trigger.to_string(), command));
    }
    out
}

/// Reads lines from `input` until EOF or `quit`, feeding them to `window`.
///
/// State summaries go to `out`; rejected lines are reported on `err` and the
/// loop carries on.
pub fn run<R, W, E>(window: &mut MainWindow, input: R, out: &mut W, err: &mut E) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(err, "{}", e)?;
                continue;
            }
        };

        match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Nothing => continue,
            ConsoleCommand::Help => {
                write!(out, "{}", help_text(window.commands()))?;
                continue;
            }
            ConsoleCommand::State => {
                write!(out, "{}", render_state(window.manager()))?;
                continue;
            }
            _ => {}
        }

        match command.to_event(window.manager()) {
            Ok(Some(event)) => {
                let handled = window.dispatch(event);
                debug!("Console line '{}' handled: {}", line.trim(), handled);
                write!(out, "{}", render_state(window.manager()))?;
            }
            Ok(None) => {}
            Err(e) => writeln!(err, "{}", e)?,
        }
    }
    info!("Console input finished.");
    out.flush()
}
