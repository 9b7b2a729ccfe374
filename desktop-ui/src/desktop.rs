//! Desktop shell: registry, window manager, and the surfaces around them

use dioxus::prelude::*;
use shared_types::ShellConfig;

pub mod actions;
pub mod apps;
mod clock;
mod components;
mod effects;
mod shell;
pub mod state;

pub use shell::DesktopShell;

#[component]
pub fn Desktop(config: ShellConfig) -> Element {
    rsx! {
        DesktopShell { config }
    }
}
