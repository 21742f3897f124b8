use dioxus::prelude::*;

/// Pulsing placeholder shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of `count` card-sized placeholders.
#[component]
pub fn SkeletonList(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div { class: "skeleton-list",
            for i in 0..count {
                Skeleton { key: "{i}", class: "skeleton-card" }
            }
        }
    }
}
