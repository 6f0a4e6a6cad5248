//! Notes Web Application
//!
//! Browser client for a paginated notes REST service.

mod app;
mod components;
mod config;
mod route;
mod services;
mod state;
mod views;

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();

    tracing::info!("Starting Notes...");
    dioxus::launch(app::App);
}
