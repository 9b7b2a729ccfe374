use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn, Level};
use shared_types::ShellConfig;

use y2k_desktop::{load_shell_config, Desktop};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| match load_shell_config() {
        Ok(config) => {
            info!("Loaded shell config: {:?}", config);
            config
        }
        Err(e) => {
            warn!("Falling back to default shell config: {}", e);
            ShellConfig::default()
        }
    });

    rsx! {
        Desktop { config }
    }
}
