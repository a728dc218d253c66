//! To-Do List Frontend Entry Point

mod config;
mod storage;
mod store;
mod context;
mod display;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if console_log::init_with_level(config.log_level).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialized".into());
    }
    log::info!("[APP] Starting, storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
