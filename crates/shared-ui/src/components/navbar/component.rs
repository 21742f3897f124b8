use dioxus::prelude::*;

/// Top bar of the site: brand on the left, links, then actions.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "site-navbar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            div { class: "site-navbar-inner", {children} }
        }
    }
}

#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "site-navbar-brand", {children} }
    }
}

/// Horizontal list of navigation links.
#[component]
pub fn NavbarLinks(children: Element) -> Element {
    rsx! {
        nav { class: "site-navbar-links", {children} }
    }
}

/// Right-aligned area: notification bell, user menu, auth buttons.
#[component]
pub fn NavbarActions(children: Element) -> Element {
    rsx! {
        div { class: "site-navbar-actions", {children} }
    }
}
