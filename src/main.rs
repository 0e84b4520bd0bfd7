//! Habit Tracker Frontend Entry Point

mod api;
mod app;
mod completion;
mod components;
mod config;
mod logging;
mod models;
mod seed;
mod store;
mod tasks;
mod toast;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::Level::Debug);
    mount_to_body(App);
}
