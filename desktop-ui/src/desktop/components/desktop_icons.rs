use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::AppDescriptor;

use crate::desktop::actions::InputTrigger;

const PRESS_FEEDBACK_MS: u32 = 150;

#[component]
pub fn DesktopIcons(apps: Vec<AppDescriptor>, on_input: Callback<InputTrigger>) -> Element {
    rsx! {
        div {
            class: "desktop-icons",
            style: "padding: 2rem; display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; width: 320px; box-sizing: border-box;",

            for app in apps {
                DesktopIcon {
                    key: "{app.id}",
                    app: app.clone(),
                    on_input,
                }
            }
        }
    }
}

#[component]
pub fn DesktopIcon(app: AppDescriptor, on_input: Callback<InputTrigger>) -> Element {
    let mut is_pressed = use_signal(|| false);

    let app_for_click = app.clone();
    let app_for_double_click = app.clone();

    let handle_click = move |_| {
        on_input.call(InputTrigger::IconClick(app_for_click.clone()));

        is_pressed.set(true);
        let mut is_pressed_clone = is_pressed;
        spawn(async move {
            TimeoutFuture::new(PRESS_FEEDBACK_MS).await;
            is_pressed_clone.set(false);
        });
    };

    let scale = if is_pressed() { "0.95" } else { "1.0" };

    rsx! {
        div {
            class: "desktop-icon",
            style: "display: flex; flex-direction: column; align-items: center; cursor: pointer; user-select: none; transition: transform 0.15s ease-out; transform: scale({scale});",
            onclick: handle_click,
            ondoubleclick: move |_| {
                on_input.call(InputTrigger::IconDoubleClick(app_for_double_click.clone()));
            },
            onmouseleave: move |_| is_pressed.set(false),

            img {
                src: "{app.icon}",
                alt: "{app.title}",
                style: "width: 4rem; height: 4rem; margin-bottom: 0.5rem; pointer-events: none;",
            }
            div {
                style: "font-size: 0.75rem; color: white; text-align: center; text-shadow: var(--icon-text-shadow); pointer-events: none;",
                "{app.title}"
            }
        }
    }
}
