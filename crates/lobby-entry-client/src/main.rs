//! Lobby Entry Client
//!
//! Yew WASM entry page: pick a display name, then create a room or join one
//! by code.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "lobby-entry-client only supports wasm32 target. Use: cargo check -p lobby-entry-client --target wasm32-unknown-unknown"
);

mod app;
mod browser;
mod components;
mod config;
mod hooks;
mod pages;
mod routes;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    // Panics go to the browser console; the page stays where it is
    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
