//! Console banner for developers who look under the hood.

use wasm_bindgen::JsValue;

const BANNER: &str = r#"
  _____
 |_   _|__ _ __ ___  _ __   ___
   | |/ _ \ '_ ` _ \| '_ \ / _ \
   | |  __/ | | | | | |_) | (_) |
   |_|\___|_| |_| |_| .__/ \___/
                    |_|
  Smart scheduling powered by AI.
"#;

/// Print a short branded banner to the browser console.
pub fn print_banner() {
    if web_sys::window().is_none() {
        return;
    }

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{BANNER}")),
        &JsValue::from_str("color: #4f46e5; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cBuilt with Rust + Leptos. Curious? tempoai.app/careers"),
        &JsValue::from_str("color: #888;"),
    );
}
