use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{DesktopState, ShellConfig};

use crate::desktop::actions::{self, InputTrigger};
use crate::desktop::apps::{core_apps, quick_launch_apps};
use crate::desktop::components::desktop_icons::DesktopIcons;
use crate::desktop::components::taskbar::Taskbar;
use crate::desktop::components::workspace_canvas::WorkspaceCanvas;
use crate::desktop::effects;
use crate::desktop::state::WindowManager;

#[component]
pub fn DesktopShell(config: ShellConfig) -> Element {
    let mut desktop_state = use_signal(DesktopState::default);
    let clock = use_signal(String::new);

    // The manager owns the window sequence; the signal is the render snapshot.
    let manager = use_hook(|| {
        let mut manager = WindowManager::new();
        manager.subscribe(move |snapshot| desktop_state.set(snapshot.clone()));
        Rc::new(RefCell::new(manager))
    });

    let refresh_ms = config.clock_refresh_ms;
    use_effect(move || {
        spawn(async move {
            effects::tick_clock(clock, refresh_ms).await;
        });
    });

    let on_input = use_callback(move |trigger: InputTrigger| {
        actions::handle_input(&manager, trigger);
    });

    let apps = core_apps();
    let quick_launch = quick_launch_apps(&apps, config.quick_launch_count);
    let snapshot = desktop_state.read().clone();
    let background = config.background.clone();

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            class: "desktop-shell",
            style: "position: relative; width: 100vw; height: 100vh; overflow: hidden; background-size: cover; background-position: center; background-image: url('{background}');",

            DesktopIcons { apps, on_input }

            WorkspaceCanvas {
                state: desktop_state,
                base_z_index: config.base_z_index,
                on_input,
            }

            div {
                class: "desktop-hint",
                style: "position: absolute; left: 1.5rem; bottom: 6rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.8);",
                "{config.hint}"
            }

            Taskbar {
                quick_launch,
                state: snapshot,
                clock: clock(),
                on_input,
            }
        }
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    /* Glass surfaces */
    --glass: rgba(255, 255, 255, 0.1);
    --glass-strong: rgba(255, 255, 255, 0.2);
    --accent: #e879f9;

    /* Windows */
    --window-bg: rgba(255, 255, 255, 0.95);
    --window-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    --titlebar-gradient: linear-gradient(to right, #7dd3fc, #f0abfc);

    /* Desktop */
    --icon-text-shadow: 0 4px 3px rgba(0, 0, 0, 0.07), 0 2px 2px rgba(0, 0, 0, 0.06);
}

body {
    margin: 0;
    font-family: "Tahoma", "Malgun Gothic", sans-serif;
}

.desktop-icon:hover img {
    filter: drop-shadow(0 0 6px var(--accent));
}
"#;
