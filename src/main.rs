//! WhitepaperIQ Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod context;
mod pages;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(api::log_level());
    mount_to_body(App);
}
