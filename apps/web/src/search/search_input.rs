//! Query input and trigger buttons.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::state::PageController;

/// Binds the search field to the page controller.
#[component]
pub fn SearchInput() -> Element {
    let controller = use_context::<Rc<PageController>>();
    let view = *controller.view();
    let query = view.query.read().clone();
    let trigger_enabled = *view.trigger_enabled.read();

    let ontrigger = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let controller = controller.clone();
            spawn(async move {
                let outcome = controller.on_trigger().await;
                debug!(?outcome, "Search via trigger");
            });
        }
    };
    let oninput = {
        let controller = controller.clone();
        move |e: FormEvent| {
            let mut query = view.query;
            query.set(e.value());
            controller.on_query_input();
        }
    };
    let onkeydown = move |e: KeyboardEvent| {
        let key = e.key().to_string();
        let controller = controller.clone();
        spawn(async move {
            if let Some(outcome) = controller.on_key_down(&key).await {
                debug!(?outcome, "Search via Enter");
            }
        });
    };

    rsx! {
        SearchField { query, trigger_enabled, ontrigger, oninput, onkeydown }
    }
}

/// Input row: icon trigger, query input, labelled trigger. Both triggers
/// share one enabled flag and one click handler.
#[component]
pub fn SearchField(
    query: String,
    trigger_enabled: bool,
    ontrigger: EventHandler<MouseEvent>,
    oninput: EventHandler<FormEvent>,
    onkeydown: EventHandler<KeyboardEvent>,
) -> Element {
    rsx! {
        div {
            class: "search-field",

            span { class: "search-label", "SEARCH" }

            div {
                class: "search-input-row",

                // Icon trigger
                button {
                    class: "search-icon-button",
                    disabled: !trigger_enabled,
                    onclick: move |e| ontrigger.call(e),
                    svg {
                        class: "search-icon",
                        width: "16",
                        height: "16",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        circle { cx: "11", cy: "11", r: "8" }
                        line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                    }
                }

                input {
                    id: "searchInput",
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Describe what you are looking for...",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e| oninput.call(e),
                    onkeydown: move |e| onkeydown.call(e),
                }

                button {
                    id: "searchbutton",
                    class: "search-button",
                    disabled: !trigger_enabled,
                    onclick: move |e| ontrigger.call(e),
                    "Search"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(enabled: bool) -> Element {
        rsx! {
            SearchField {
                query: "cats".to_string(),
                trigger_enabled: enabled,
                ontrigger: |_| {},
                oninput: |_| {},
                onkeydown: |_| {},
            }
        }
    }

    fn render_field(enabled: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { enabled });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn both_triggers_disabled_together() {
        let html = render_field(false);
        assert_eq!(html.matches("disabled").count(), 2, "{html}");
        assert!(html.contains("id=\"searchbutton\""), "{html}");
        assert!(html.contains("id=\"searchInput\""), "{html}");
    }

    #[test]
    fn both_triggers_enabled_together() {
        let html = render_field(true);
        assert!(!html.contains("disabled"), "{html}");
        assert_eq!(html.matches("<button").count(), 2, "{html}");
    }
}
