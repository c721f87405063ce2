//! Kanban Board Frontend Entry Point

mod app;
mod board;
mod components;
mod drag;
mod logger;
mod models;
mod reorder;
mod seed;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(logger::default_level());
    mount_to_body(App);
}
