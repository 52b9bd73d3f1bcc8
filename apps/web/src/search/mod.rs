//! Search panel — input row with trigger buttons, spinner, results region.

mod results;
mod search_input;

use std::rc::Rc;

use dioxus::prelude::*;
use results::{BusyIndicator, ResultsContainer};
use search_input::SearchInput;

use crate::state::{DomView, PageController};
use crate::INITIAL_SETUP;

/// Builds the page's single controller and shares it with the role components.
#[component]
pub fn SearchPanel() -> Element {
    let view = DomView::use_view();
    let controller = use_hook(|| {
        let setup = INITIAL_SETUP.lock().ok().and_then(|slot| slot.clone());
        match setup {
            Some(setup) => {
                Some(Rc::new(PageController::with_settings(view, setup.transport, &setup.config)))
            }
            None => {
                tracing::error!("Search transport was not initialised; search disabled");
                None
            }
        }
    });

    let Some(controller) = controller else {
        return rsx! {
            div { class: "search-panel search-unavailable", "Search is unavailable." }
        };
    };
    use_context_provider(|| controller);

    rsx! {
        div {
            class: "search-panel",
            SearchInput {}
            BusyIndicator {}
            ResultsContainer {}
        }
    }
}
