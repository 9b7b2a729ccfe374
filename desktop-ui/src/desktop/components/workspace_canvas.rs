use dioxus::prelude::*;
use shared_types::DesktopState;

use crate::desktop::actions::InputTrigger;
use crate::desktop::state::window_z_index;
use crate::desktop_window::PopupWindow;

#[component]
pub fn WorkspaceCanvas(
    state: Signal<DesktopState>,
    base_z_index: u32,
    on_input: Callback<InputTrigger>,
) -> Element {
    let windows = state.read().windows.clone();

    rsx! {
        div {
            class: "window-canvas",

            for (position, window) in windows.iter().enumerate() {
                PopupWindow {
                    key: "{window.id}",
                    window: window.clone(),
                    z_index: window_z_index(base_z_index, position),
                    on_input,
                }
            }
        }
    }
}
