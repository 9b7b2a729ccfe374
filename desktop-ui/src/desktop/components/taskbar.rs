use dioxus::prelude::*;
use shared_types::{AppDescriptor, DesktopState};

use crate::desktop::actions::InputTrigger;

#[component]
pub fn Taskbar(
    quick_launch: Vec<AppDescriptor>,
    state: DesktopState,
    clock: String,
    on_input: Callback<InputTrigger>,
) -> Element {
    let topmost = state.topmost().map(|w| w.id.clone());

    rsx! {
        div {
            class: "taskbar",
            style: "position: absolute; bottom: 1rem; left: 1rem; right: 1rem; display: flex; align-items: center; justify-content: space-between;",

            div {
                style: "display: flex; align-items: center; gap: 0.75rem;",

                button {
                    class: "taskbar-start",
                    style: "padding: 0.25rem 0.75rem; border: none; border-radius: 1rem; font-size: 0.875rem; background: var(--glass-strong); backdrop-filter: blur(4px);",
                    "Start"
                }

                div {
                    class: "quick-launch",
                    style: "display: flex; gap: 0.5rem;",

                    for app in quick_launch {
                        QuickLaunchButton {
                            key: "{app.id}",
                            is_open: state.is_open(&app.id),
                            is_top: topmost.as_deref() == Some(app.id.as_str()),
                            app: app.clone(),
                            on_input,
                        }
                    }
                }
            }

            div {
                class: "taskbar-clock",
                style: "font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 4px; background: var(--glass);",
                "{clock}"
            }
        }
    }
}

#[component]
fn QuickLaunchButton(
    app: AppDescriptor,
    is_open: bool,
    is_top: bool,
    on_input: Callback<InputTrigger>,
) -> Element {
    let border = quick_launch_border(is_open, is_top);
    let title = app.title.clone();

    rsx! {
        button {
            class: "quick-launch-btn",
            style: "padding: 0.25rem 0.5rem; border-radius: 4px; font-size: 0.75rem; background: var(--glass); border: {border};",
            onclick: move |_| on_input.call(InputTrigger::QuickLaunch(app.clone())),
            "{title}"
        }
    }
}

fn quick_launch_border(is_open: bool, is_top: bool) -> &'static str {
    if is_top {
        "1px solid var(--accent)"
    } else if is_open {
        "1px solid var(--glass-strong)"
    } else {
        "1px solid transparent"
    }
}
