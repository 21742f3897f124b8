use client::ListQuery;
use dioxus::prelude::*;
use shared_types::{
    distinct_categories, Listing, ListingSummary, Offer, OfferFilters, OpportunityFilters,
    OpportunityKind,
};
use shared_ui::{EmptyState, FormSelect, Input, PageHeader, PageSubtitle, PageTitle, SkeletonList};

use crate::components::{ErrorBanner, ListingCard};
use crate::routes::Route;
use crate::use_services;

/// Public list of one opportunity kind. Offers get the full filter bar, the
/// other kinds search and filter by category.
#[component]
pub fn OpportunityList(kind: String) -> Element {
    match OpportunityKind::from_slug(&kind) {
        Some(OpportunityKind::Offre) => rsx! { OfferBrowser {} },
        Some(kind) => rsx! { ListingBrowser { key: "{kind}", kind } },
        None => rsx! {
            EmptyState {
                title: "Catégorie inconnue",
                description: "« {kind} » n'est pas un type d'opportunité.",
                Link { to: Route::Home {}, class: "link-button", "Retour à l'accueil" }
            }
        },
    }
}

/// Distinct contract types of `offers`, sorted.
fn contract_types(offers: &[Offer]) -> Vec<String> {
    let mut out: Vec<String> = offers
        .iter()
        .map(|o| o.contract_type.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

#[component]
fn OfferBrowser() -> Element {
    let services = use_services();
    let mut search = use_signal(String::new);
    let mut sector = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut contract_type = use_signal(String::new);

    let offers = use_resource(move || {
        let data = services.data.clone();
        async move { data.list_offers(&ListQuery::active()).await }
    });

    let filters = OfferFilters {
        search: search(),
        sector: sector(),
        location: location(),
        contract_type: contract_type(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }

        PageHeader {
            PageTitle { "Offres d'emploi" }
            PageSubtitle { "Filtrez par secteur, lieu ou type de contrat." }
        }

        match &*offers.read() {
            Some(Ok(all)) => {
                let sectors = distinct_categories(all);
                let contracts = contract_types(all);
                let shown = filters.apply(all);
                rsx! {
                    div { class: "filters",
                        Input {
                            label: "Recherche",
                            placeholder: "Intitulé ou entreprise",
                            value: search(),
                            on_input: move |evt: FormEvent| search.set(evt.value()),
                        }
                        FormSelect {
                            label: "Secteur",
                            value: sector(),
                            onchange: move |evt: FormEvent| sector.set(evt.value()),
                            option { value: "", "Tous les secteurs" }
                            for s in sectors {
                                option { key: "{s}", value: "{s}", "{s}" }
                            }
                        }
                        Input {
                            label: "Lieu",
                            placeholder: "Ville ou pays",
                            value: location(),
                            on_input: move |evt: FormEvent| location.set(evt.value()),
                        }
                        FormSelect {
                            label: "Contrat",
                            value: contract_type(),
                            onchange: move |evt: FormEvent| contract_type.set(evt.value()),
                            option { value: "", "Tous les contrats" }
                            for c in contracts {
                                option { key: "{c}", value: "{c}", "{c}" }
                            }
                        }
                    }
                    p { class: "result-count", "{shown.len()} offre(s) sur {all.len()}" }
                    if shown.is_empty() {
                        EmptyState {
                            title: "Aucune offre ne correspond",
                            description: "Essayez d'élargir vos critères.",
                        }
                    } else {
                        div { class: "grid",
                            for offer in shown {
                                ListingCard { key: "{offer.id}", summary: offer.summary() }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList {} },
        }
    }
}

#[component]
fn ListingBrowser(kind: OpportunityKind) -> Element {
    let services = use_services();
    let mut search = use_signal(String::new);
    let mut category = use_signal(String::new);

    let listings = use_resource(move || {
        let data = services.data.clone();
        async move { data.list_summaries(kind, &ListQuery::active()).await }
    });

    let filters = OpportunityFilters {
        search: search(),
        category: category(),
        active_only: true,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }

        PageHeader {
            PageTitle { "{kind.plural_label()}" }
        }

        match &*listings.read() {
            Some(Ok(all)) => {
                let categories = distinct_categories(all);
                let shown: Vec<ListingSummary> = filters.apply(all);
                rsx! {
                    div { class: "filters",
                        Input {
                            label: "Recherche",
                            placeholder: "Intitulé ou organisme",
                            value: search(),
                            on_input: move |evt: FormEvent| search.set(evt.value()),
                        }
                        FormSelect {
                            label: "Catégorie",
                            value: category(),
                            onchange: move |evt: FormEvent| category.set(evt.value()),
                            option { value: "", "Toutes" }
                            for c in categories {
                                option { key: "{c}", value: "{c}", "{c}" }
                            }
                        }
                    }
                    if shown.is_empty() {
                        EmptyState { title: "Aucun résultat" }
                    } else {
                        div { class: "grid",
                            for summary in shown {
                                ListingCard { key: "{summary.id}", summary }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList {} },
        }
    }
}
