//! Busy indicator and results container.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::state::PageController;

/// Spinner bound to the page's busy signal.
#[component]
pub fn BusyIndicator() -> Element {
    let controller = use_context::<Rc<PageController>>();
    let busy = *controller.view().busy.read();

    rsx! { Spinner { busy } }
}

/// Spinner, toggled through the `hidden` class.
#[component]
pub fn Spinner(busy: bool) -> Element {
    rsx! {
        div {
            id: "spinner",
            class: if busy { "spinner" } else { "spinner hidden" },
            span { class: "spinner-ring" }
            span { class: "spinner-label", "Searching..." }
        }
    }
}

/// Results region. Server markup is inserted as-is.
#[component]
pub fn ResultsContainer() -> Element {
    let controller = use_context::<Rc<PageController>>();
    let markup = controller.view().results.read().clone();

    rsx! {
        div {
            id: "resultsContainer",
            class: "results",
            dangerous_inner_html: "{markup}",
        }
    }
}
