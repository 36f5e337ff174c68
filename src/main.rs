//! Today's Tasks Frontend Entry Point

mod app;
mod clock;
mod components;
mod config;
mod context;
mod date_format;
mod error;
mod models;
mod status;
mod storage;
mod store;
mod task_list;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(err) = console_logger::init_logger("TodaysTasks", config.log_level) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", err).into());
    }
    log::info!("Starting with storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
