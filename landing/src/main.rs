// Preclaude Landing Page - Leptos 0.8 Edition
// Built by Precode (c)2025

use leptos::prelude::*;
use preclaude_landing::{catalog, config, App};
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config::log_level()).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("logger already initialised"));
    }

    if let Err(err) = catalog::validate_all() {
        log::error!("content catalog: {err}");
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
}
