//! searchbox page — Dioxus-powered search box over a `/search` service.

use std::sync::Mutex;

use dioxus::prelude::*;
use searchbox_core::SearchConfig;
use searchbox_http::HttpTransport;

mod app;
mod search;
mod state;

use app::App;
use state::PageSetup;

/// Pre-runtime storage — resolved before Dioxus launches, read on first render.
pub static INITIAL_SETUP: Mutex<Option<PageSetup>> = Mutex::new(None);

fn main() {
    init_logging();

    let config = load_config();
    let base = state::page_origin(&config);
    let transport = match HttpTransport::with_base(&base, &config) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(base = base.as_str(), error = %e, "Cannot build search transport");
            return;
        }
    };
    if let Ok(mut slot) = INITIAL_SETUP.lock() {
        *slot = Some(PageSetup { config, transport });
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("searchbox")
                            .with_inner_size(LogicalSize::new(900.0, 700.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 360.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "desktop")]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("searchbox=info".parse().expect("static directive")),
        )
        .with_target(false)
        .init();
}

// The browser build logs through the logger `dioxus::launch` installs.
#[cfg(not(feature = "desktop"))]
fn init_logging() {}

#[cfg(feature = "desktop")]
fn load_config() -> SearchConfig {
    match std::env::current_dir() {
        Ok(cwd) => searchbox_core::load_search_config(&cwd),
        Err(_) => SearchConfig::default(),
    }
}

#[cfg(not(feature = "desktop"))]
fn load_config() -> SearchConfig {
    SearchConfig::default()
}
