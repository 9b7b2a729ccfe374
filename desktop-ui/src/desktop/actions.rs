use std::cell::RefCell;

use dioxus_logger::tracing::debug;
use shared_types::AppDescriptor;

use crate::desktop::state::{WindowChange, WindowCommand, WindowManager};

/// User gestures the shell reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputTrigger {
    IconClick(AppDescriptor),
    /// Same effect as a click; opening is idempotent
    IconDoubleClick(AppDescriptor),
    QuickLaunch(AppDescriptor),
    CloseButton(String),
}

pub fn command_for_input(trigger: InputTrigger) -> WindowCommand {
    match trigger {
        InputTrigger::IconClick(app)
        | InputTrigger::IconDoubleClick(app)
        | InputTrigger::QuickLaunch(app) => WindowCommand::Open(app),
        InputTrigger::CloseButton(app_id) => WindowCommand::Close(app_id),
    }
}

pub fn handle_input(manager: &RefCell<WindowManager>, trigger: InputTrigger) -> WindowChange {
    let command = command_for_input(trigger);
    let change = manager.borrow_mut().apply(&command);

    match (&command, change) {
        (WindowCommand::Open(app), WindowChange::Opened) => {
            debug!("Opened window for app '{}'", app.id);
        }
        (WindowCommand::Open(app), WindowChange::Raised) => {
            debug!("Raised existing window for app '{}'", app.id);
        }
        (WindowCommand::Close(app_id), WindowChange::Closed) => {
            debug!("Closed window for app '{}'", app_id);
        }
        (WindowCommand::Close(app_id), WindowChange::Unchanged) => {
            debug!("Ignored close for app '{}' with no open window", app_id);
        }
        _ => {}
    }

    change
}
