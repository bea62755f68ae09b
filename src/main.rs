//! Storefront Frontend Entry Point

mod api;
mod app;
mod auth;
mod cart;
mod catalog;
mod clock;
mod components;
mod config;
mod context;
mod flags;
mod i18n;
mod models;
mod store;
mod weather;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("Storefront", log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[Storefront] Logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
