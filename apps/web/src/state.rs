//! Page state: the four DOM roles as Dioxus signals, and the controller
//! that drives them.

use dioxus::prelude::*;
use searchbox_core::{SearchConfig, SearchController, SearchView};
use searchbox_http::HttpTransport;

/// The controller as wired into the page.
pub type PageController = SearchController<DomView, HttpTransport>;

/// Everything resolved before launch.
#[derive(Clone)]
pub struct PageSetup {
    pub config: SearchConfig,
    pub transport: HttpTransport,
}

/// Signal-backed roles: query input, trigger buttons, spinner, results container.
#[derive(Clone, Copy)]
pub struct DomView {
    pub query: Signal<String>,
    pub trigger_enabled: Signal<bool>,
    pub busy: Signal<bool>,
    pub results: Signal<String>,
}

impl DomView {
    /// Hook: allocate the role signals for the current component.
    pub fn use_view() -> Self {
        DomView {
            query: use_signal(String::new),
            trigger_enabled: use_signal(|| false),
            busy: use_signal(|| false),
            results: use_signal(String::new),
        }
    }
}

impl SearchView for DomView {
    fn query(&self) -> String {
        self.query.peek().clone()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        let mut trigger = self.trigger_enabled;
        trigger.set(enabled);
    }

    fn set_busy(&self, visible: bool) {
        let mut busy = self.busy;
        busy.set(visible);
    }

    fn render_results(&self, markup: &str) {
        let mut results = self.results;
        results.set(markup.to_string());
    }
}

/// Origin the search request goes to: the page's own origin in the browser.
#[cfg(target_arch = "wasm32")]
pub fn page_origin(config: &SearchConfig) -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| config.base_url.clone())
}

/// Origin the search request goes to: `base_url` from `searchbox.toml`.
#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin(config: &SearchConfig) -> String {
    config.base_url.clone()
}
