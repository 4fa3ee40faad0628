//! BLANQ CRM Frontend Entry Point

mod context;
mod store;
mod download;
mod components;
mod pages;
mod app;

use app::App;
use blanq_core::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = rolling_logger::init_logger(&config.brand.name, config.log_level(), config.logger.capacity) {
        web_sys::console::error_1(&e.into());
    }
    log::info!("Starting {}", config.brand.name);

    mount_to_body(move || view! { <App config=config /> });
}
