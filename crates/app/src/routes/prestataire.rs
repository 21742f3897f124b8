use client::ListQuery;
use dioxus::prelude::*;
use shared_types::{Listing, OpportunityKind};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, EmptyState, PageHeader, PageSubtitle, PageTitle,
    SkeletonList,
};

use crate::auth::use_current_user;
use crate::components::{ApplicationTable, ErrorBanner, ListingCard};
use crate::routes::applications::{recent, use_my_applications, ApplicationStats, MyApplicationsPage};
use crate::routes::notifications::NotificationsPage;
use crate::routes::Route;
use crate::use_services;

const OPEN_CONSULTATIONS: u32 = 4;
const RECENT_APPLICATIONS: usize = 5;

#[component]
pub fn PrestataireDashboard() -> Element {
    let services = use_services();
    let user = use_current_user();
    let reload = use_signal(|| 0u32);
    let applications = use_my_applications(reload);

    let consultations = use_resource(move || {
        let data = services.data.clone();
        async move {
            data.list_consultations(&ListQuery::active().page(1, OPEN_CONSULTATIONS))
                .await
        }
    });

    let name = user.map(|u| u.display_name()).unwrap_or_default();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Bonjour {name}" }
                PageSubtitle { "Consultations ouvertes et suivi de vos propositions" }
            }
        }

        h2 { "Consultations ouvertes" }
        match &*consultations.read() {
            Some(Ok(list)) if !list.is_empty() => rsx! {
                div { class: "grid",
                    for c in list.iter() {
                        ListingCard { key: "{c.id}", summary: c.summary() }
                    }
                }
                Link {
                    to: Route::OpportunityList { kind: OpportunityKind::Consultation.slug().to_string() },
                    "Toutes les consultations"
                }
            },
            Some(Ok(_)) => rsx! { EmptyState { title: "Aucune consultation ouverte" } },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList { count: 2 } },
        }

        h2 { "Mes candidatures" }
        match &*applications.read() {
            Some(Ok(all)) => rsx! {
                ApplicationStats { applications: all.clone() }
                Card {
                    CardHeader { CardTitle { "Dernières propositions" } }
                    CardContent {
                        if all.is_empty() {
                            EmptyState { title: "Aucune candidature envoyée" }
                        } else {
                            ApplicationTable { applications: recent(all, RECENT_APPLICATIONS) }
                            Link { to: Route::PrestataireApplications {}, "Toutes mes candidatures" }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList {} },
        }
    }
}

#[component]
pub fn PrestataireApplications() -> Element {
    rsx! { MyApplicationsPage {} }
}

#[component]
pub fn PrestataireNotifications() -> Element {
    rsx! { NotificationsPage {} }
}
