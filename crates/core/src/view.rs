//! UI seam over the four roles the controller drives: query input, trigger
//! control(s), busy indicator, and results sink.

use std::cell::{Cell, RefCell};

/// The page roles as seen by [`SearchController`](crate::SearchController).
///
/// Methods take `&self`; implementations live on the single UI thread and
/// use interior mutability.
pub trait SearchView {
    /// Current raw text of the query input.
    fn query(&self) -> String;

    /// Enable or disable every trigger control.
    fn set_trigger_enabled(&self, enabled: bool);

    /// Show or hide the busy indicator.
    fn set_busy(&self, visible: bool);

    /// Replace the results sink's content with `markup`, verbatim.
    fn render_results(&self, markup: &str);
}

/// One mutation applied to a [`MemoryView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Trigger(bool),
    Busy(bool),
    Render(String),
}

/// In-memory view: holds the role state and logs every mutation in order.
#[derive(Debug, Default)]
pub struct MemoryView {
    query: RefCell<String>,
    trigger_enabled: Cell<bool>,
    busy: Cell<bool>,
    results: RefCell<String>,
    events: RefCell<Vec<ViewEvent>>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        let view = Self::default();
        view.set_query(query);
        view
    }

    /// Simulates typing into the input. Does not run any binding.
    pub fn set_query(&self, query: impl Into<String>) {
        *self.query.borrow_mut() = query.into();
    }

    /// Seeds the results sink without logging an event.
    pub fn set_results(&self, markup: impl Into<String>) {
        *self.results.borrow_mut() = markup.into();
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled.get()
    }

    pub fn busy(&self) -> bool {
        self.busy.get()
    }

    pub fn results(&self) -> String {
        self.results.borrow().clone()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }
}

impl SearchView for MemoryView {
    fn query(&self) -> String {
        self.query.borrow().clone()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.trigger_enabled.set(enabled);
        self.events.borrow_mut().push(ViewEvent::Trigger(enabled));
    }

    fn set_busy(&self, visible: bool) {
        self.busy.set(visible);
        self.events.borrow_mut().push(ViewEvent::Busy(visible));
    }

    fn render_results(&self, markup: &str) {
        *self.results.borrow_mut() = markup.to_string();
        self.events.borrow_mut().push(ViewEvent::Render(markup.to_string()));
    }
}
