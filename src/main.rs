//! Tasklist Frontend Entry Point

mod models;
mod error;
mod config;
mod storage;
mod store;
mod render;
mod controller;
mod view_state;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

/// Optional `<script id="app-config" type="application/json">` override
fn read_config() -> (AppConfig, Option<serde_json::Error>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app-config"))
        .and_then(|el| el.text_content());
    AppConfig::resolve(raw.as_deref())
}

fn main() {
    console_error_panic_hook::set_once();
    let (config, config_error) = read_config();
    if let Err(e) = console_logger::init(console_logger::parse_level(&config.log_level), config.log_capacity) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring malformed config: {}", e);
    }
    log::info!("Starting with storage key '{}'", config.storage_key);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
