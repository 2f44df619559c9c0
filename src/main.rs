//! Concern Board Frontend Entry Point

mod app;
mod components;
mod context;
mod filter;
mod models;
mod render;
mod store;

use app::App;
use console_logger::LoggerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(&LoggerConfig::default()) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    mount_to_body(App);
}
