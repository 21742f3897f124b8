use dioxus::prelude::*;

/// Placeholder for an empty list, with an optional call to action.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            p { class: "empty-state-title", "{title}" }
            if !description.is_empty() {
                p { class: "empty-state-description", "{description}" }
            }
            {children}
        }
    }
}
