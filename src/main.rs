#![allow(warnings)]
//! Field Rows Frontend Entry Point

mod models;
mod rows;
mod confirm;
mod prefs;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let log = match console_logger::init_logger("FieldRows", tracing::Level::DEBUG) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
            None
        }
    };
    mount_to_body(move || view! { <App log=log.clone() /> });
}
