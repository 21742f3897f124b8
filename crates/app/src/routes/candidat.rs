use dioxus::prelude::*;
use shared_types::OpportunityKind;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, EmptyState, PageHeader, PageSubtitle, PageTitle,
    SkeletonList,
};

use crate::auth::use_current_user;
use crate::components::{ApplicationTable, ErrorBanner};
use crate::routes::applications::{recent, use_my_applications, ApplicationStats, MyApplicationsPage};
use crate::routes::notifications::NotificationsPage;
use crate::routes::Route;

/// Applications listed on the dashboard.
const RECENT_APPLICATIONS: usize = 5;

#[component]
pub fn CandidatDashboard() -> Element {
    let user = use_current_user();
    let reload = use_signal(|| 0u32);
    let applications = use_my_applications(reload);
    let name = user.map(|u| u.display_name()).unwrap_or_default();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Bonjour {name}" }
                PageSubtitle { "Votre tableau de bord candidat" }
            }
        }

        match &*applications.read() {
            Some(Ok(all)) => rsx! {
                ApplicationStats { applications: all.clone() }
                Card {
                    CardHeader {
                        CardTitle { "Candidatures récentes" }
                    }
                    CardContent {
                        if all.is_empty() {
                            EmptyState {
                                title: "Aucune candidature pour le moment",
                                description: "Parcourez les offres et postulez en quelques clics.",
                            }
                        } else {
                            ApplicationTable { applications: recent(all, RECENT_APPLICATIONS) }
                            Link { to: Route::CandidatApplications {}, "Toutes mes candidatures" }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList {} },
        }

        h2 { "Explorer" }
        div { class: "grid",
            for kind in [OpportunityKind::Offre, OpportunityKind::Bourse, OpportunityKind::Financement] {
                Link {
                    key: "{kind.slug()}",
                    to: Route::OpportunityList { kind: kind.slug().to_string() },
                    class: "link-button link-button-ghost",
                    "{kind.plural_label()}"
                }
            }
        }
    }
}

#[component]
pub fn CandidatApplications() -> Element {
    rsx! { MyApplicationsPage {} }
}

#[component]
pub fn CandidatNotifications() -> Element {
    rsx! { NotificationsPage {} }
}
