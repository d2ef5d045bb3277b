//! Market Dashboard Frontend Entry Point

mod api;
mod app;
mod chart;
mod components;
mod config;
mod context;
mod crud;
mod error;
mod models;
mod numeric;
mod sort;
mod store;
mod table;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = DashboardConfig::from_window();
    if let Some(level) = config.console_level() {
        let _ = console_log::init_with_level(level);
    }
    mount_to_body(move || view! { <App config=config.clone() /> });
}
