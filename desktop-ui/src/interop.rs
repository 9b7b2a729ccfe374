use shared_types::ShellConfig;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlScriptElement};

pub const CONFIG_ELEMENT_ID: &str = "desktop-config";

/// Raw JSON of the `<script id="desktop-config">` element, if the page has one.
pub fn embedded_config_json() -> Option<String> {
    let document = window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    let script = element.dyn_into::<HtmlScriptElement>().ok()?;
    let text = script.text().ok()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Shell config from the host page, or the defaults when absent.
pub fn load_shell_config() -> Result<ShellConfig, String> {
    match embedded_config_json() {
        Some(raw) => ShellConfig::from_json(&raw).map_err(|e| e.to_string()),
        None => Ok(ShellConfig::default()),
    }
}

pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Local offset east of UTC, in minutes
pub fn local_utc_offset_minutes() -> i32 {
    // getTimezoneOffset is UTC minus local
    -(js_sys::Date::new_0().get_timezone_offset() as i32)
}
