use dioxus::prelude::*;
use shared_ui::EmptyState;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        EmptyState {
            title: "Page introuvable",
            description: "La page {path} n'existe pas ou a été déplacée.",
            Link { to: Route::Home {}, class: "link-button", "Retour à l'accueil" }
        }
    }
}
