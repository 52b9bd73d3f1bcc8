//! The search request lifecycle.
//!
//! One [`SearchController`] is built per page once the roles are resolved.
//! It owns the in-flight flag and drives the view through two phases, Idle
//! and Busy. Busy state is held by a [`BusyGuard`] whose `Drop` restores
//! Idle, so every exit path (rendered, HTTP error, transport error, empty
//! query, or the future being dropped) releases it exactly once.

use std::cell::Cell;

use tracing::{debug, error, info};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::query::{normalize, search_path};
use crate::transport::SearchTransport;
use crate::view::SearchView;

/// Key name that submits the query from the input.
pub const SUBMIT_KEY: &str = "Enter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy,
}

/// Result of one initiation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 2xx response; the body replaced the results sink.
    Rendered { bytes: usize },
    /// No request was issued because the trimmed query was empty.
    EmptyQuery,
    /// Another search was still in flight; nothing happened.
    InFlight,
    /// The request failed. Results were left untouched.
    Failed(SearchError),
}

impl SearchOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SearchOutcome::Rendered { .. })
    }
}

/// Coordinates the query input, trigger controls, busy indicator and
/// results sink around a single outstanding request.
///
/// Built for a single-threaded cooperative runtime: the in-flight flag is a
/// plain `Cell`, and the controller is deliberately `!Sync`.
pub struct SearchController<V, T> {
    view: V,
    transport: T,
    endpoint: String,
    param: String,
    in_flight: Cell<bool>,
}

impl<V: SearchView, T: SearchTransport> SearchController<V, T> {
    pub fn new(view: V, transport: T) -> Self {
        Self::with_settings(view, transport, &SearchConfig::default())
    }

    pub fn with_settings(view: V, transport: T, config: &SearchConfig) -> Self {
        Self {
            view,
            transport,
            endpoint: config.endpoint.clone(),
            param: config.param.clone(),
            in_flight: Cell::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.get() {
            Phase::Busy
        } else {
            Phase::Idle
        }
    }

    /// Outbound path for `query`, e.g. `/search?q=a%26b%20c`.
    pub fn request_path(&self, query: &str) -> String {
        search_path(&self.endpoint, &self.param, query)
    }

    /// Input-change binding: the trigger is available only when the trimmed
    /// query is non-empty. Ignored while busy; finalization re-enables it.
    pub fn on_query_input(&self) {
        if self.in_flight.get() {
            return;
        }
        let enabled = normalize(&self.view.query()).is_some();
        self.view.set_trigger_enabled(enabled);
    }

    /// Key-press binding: Enter with a non-empty trimmed query starts a search.
    pub async fn on_key_down(&self, key: &str) -> Option<SearchOutcome> {
        if key != SUBMIT_KEY || normalize(&self.view.query()).is_none() {
            return None;
        }
        Some(self.initiate_search().await)
    }

    /// Click binding shared by every trigger control.
    pub async fn on_trigger(&self) -> SearchOutcome {
        self.initiate_search().await
    }

    /// Run one search attempt.
    ///
    /// Disables the trigger and shows the busy indicator synchronously,
    /// before the first await; both are restored when the attempt ends.
    pub async fn initiate_search(&self) -> SearchOutcome {
        let Some(_busy) = BusyGuard::acquire(&self.view, &self.in_flight) else {
            debug!("Search already in flight, ignoring initiation");
            return SearchOutcome::InFlight;
        };

        let raw = self.view.query();
        let Some(query) = normalize(&raw) else {
            debug!("Empty query, no request issued");
            return SearchOutcome::EmptyQuery;
        };

        let path = self.request_path(query);
        debug!(path = path.as_str(), "Issuing search request");

        let response = match self.transport.get(&path).await {
            Ok(response) => response,
            Err(e) => {
                error!(query, error = %e, "Error fetching search results");
                return SearchOutcome::Failed(e.into());
            }
        };

        if !response.is_success() {
            let err = SearchError::Status { status: response.status };
            error!(query, status = response.status, "Error fetching search results: {err}");
            return SearchOutcome::Failed(err);
        }

        self.view.render_results(&response.body);
        info!(query, bytes = response.body.len(), "Rendered search results");
        SearchOutcome::Rendered { bytes: response.body.len() }
    }
}

/// Scoped Busy phase. Acquiring disables the trigger and shows the busy
/// indicator; dropping re-enables and hides them and clears the flag.
struct BusyGuard<'a, V: SearchView> {
    view: &'a V,
    in_flight: &'a Cell<bool>,
}

impl<'a, V: SearchView> BusyGuard<'a, V> {
    fn acquire(view: &'a V, in_flight: &'a Cell<bool>) -> Option<Self> {
        if in_flight.replace(true) {
            return None;
        }
        view.set_trigger_enabled(false);
        view.set_busy(true);
        debug!("Phase: Idle -> Busy");
        Some(Self { view, in_flight })
    }
}

impl<V: SearchView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_trigger_enabled(true);
        self.view.set_busy(false);
        self.in_flight.set(false);
        debug!("Phase: Busy -> Idle");
    }
}
