use client::ListQuery;
use dioxus::prelude::*;
use shared_types::{Listing, OpportunityKind};
use shared_ui::{
    Card, CardDescription, CardHeader, CardTitle, EmptyState, PageHeader, PageSubtitle, PageTitle,
    SkeletonList,
};

use crate::components::{ErrorBanner, ListingCard};
use crate::routes::Route;
use crate::use_services;

/// Offers shown on the home page.
const LATEST_OFFERS: u32 = 6;

fn kind_blurb(kind: OpportunityKind) -> &'static str {
    match kind {
        OpportunityKind::Offre => "CDI, CDD, stages et missions dans toute la région.",
        OpportunityKind::Bourse => "Bourses d'études de la licence au doctorat.",
        OpportunityKind::Financement => "Subventions, prêts et programmes d'investissement.",
        OpportunityKind::Consultation => "Appels à prestataires et missions de conseil.",
    }
}

#[component]
pub fn Home() -> Element {
    let services = use_services();

    let latest = use_resource(move || {
        let data = services.data.clone();
        async move {
            data.list_offers(&ListQuery::active().page(1, LATEST_OFFERS))
                .await
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "Trouvez votre prochaine opportunité" }
            PageSubtitle { "Emplois, bourses, financements et consultations, au même endroit." }
        }

        section { class: "grid",
            for kind in OpportunityKind::ALL {
                Link { key: "{kind.slug()}", to: Route::OpportunityList { kind: kind.slug().to_string() },
                    Card {
                        CardHeader {
                            CardTitle { "{kind.plural_label()}" }
                            CardDescription { "{kind_blurb(kind)}" }
                        }
                    }
                }
            }
        }

        h2 { "Dernières offres" }
        match &*latest.read() {
            Some(Ok(offers)) if !offers.is_empty() => rsx! {
                div { class: "grid",
                    for offer in offers.iter() {
                        ListingCard { key: "{offer.id}", summary: offer.summary() }
                    }
                }
            },
            Some(Ok(_)) => rsx! {
                EmptyState { title: "Aucune offre publiée pour le moment" }
            },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList {} },
        }
    }
}
