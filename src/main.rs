//! Stealth Dash Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod feed;
mod kanban;
mod logging;
mod models;
mod pages;
mod route;
mod status_move;
mod store;
mod timer;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::AppConfig::load().log_level);
    mount_to_body(App);
}
