#![allow(warnings)]
//! Postdeck Frontend Entry Point

mod models;
mod api;
mod enrich;
mod pipeline;
mod storage;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
