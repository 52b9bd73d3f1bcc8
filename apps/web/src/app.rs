//! Root application component.

use dioxus::prelude::*;

use crate::search::SearchPanel;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            div {
                class: "titlebar",
                span { class: "titlebar-title", "searchbox" }
            }

            SearchPanel {}
        }
    }
}
