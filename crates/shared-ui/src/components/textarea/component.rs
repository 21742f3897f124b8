use dioxus::prelude::*;

/// Multi-line input used for cover letters and descriptions.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 6)] rows: u32,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    /// Shows a live character count under the field.
    #[props(default = false)]
    show_count: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();
    let count = value.trim().chars().count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                value: value,
                placeholder: placeholder,
                rows: rows,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            div { class: "textarea-meta",
                if let Some(message) = error {
                    span { class: "field-error", "{message}" }
                }
                if show_count {
                    span { class: "textarea-count", "{count} caractères" }
                }
            }
        }
    }
}
