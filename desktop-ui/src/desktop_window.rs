use dioxus::prelude::*;
use shared_types::OpenWindow;

use crate::desktop::actions::InputTrigger;
use crate::games::GameContent;

const WINDOW_WIDTH_PX: u32 = 640;
const BODY_MIN_HEIGHT_PX: u32 = 320;

fn window_style(z_index: u32) -> String {
    format!(
        "position: absolute; top: 6rem; left: 50%; transform: translateX(-50%); \
         width: {WINDOW_WIDTH_PX}px; max-width: 90%; z-index: {z_index}; \
         background: var(--window-bg); border-radius: 8px; \
         box-shadow: var(--window-shadow); overflow: hidden;"
    )
}

/// Centered popup hosting one mini-game
#[component]
pub fn PopupWindow(window: OpenWindow, z_index: u32, on_input: Callback<InputTrigger>) -> Element {
    let window_id = window.id.clone();

    rsx! {
        div {
            class: "popup-window",
            style: "{window_style(z_index)}",

            div {
                class: "window-titlebar",
                style: "display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0.75rem; background: var(--titlebar-gradient);",

                div {
                    style: "display: flex; align-items: center; gap: 0.5rem;",
                    img {
                        src: "{window.icon}",
                        alt: "icon",
                        style: "width: 1.5rem; height: 1.5rem;",
                    }
                    div { style: "font-weight: 600; font-size: 0.875rem;", "{window.title}" }
                }

                div {
                    class: "window-controls",
                    button {
                        style: "width: 1.75rem; height: 1.75rem; border: none; border-radius: 9999px; font-size: 0.875rem; background: var(--glass-strong); cursor: pointer;",
                        title: "Close",
                        onclick: move |_| on_input.call(InputTrigger::CloseButton(window_id.clone())),
                        "✕"
                    }
                }
            }

            div {
                class: "window-body",
                style: "padding: 1rem; min-height: {BODY_MIN_HEIGHT_PX}px; background: white;",
                GameContent { app_id: window.id.clone() }
            }
        }
    }
}
