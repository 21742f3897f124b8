use client::{DataService, ListQuery};
use dioxus::prelude::*;
use shared_types::{count_by_status, AppError, Application, ListingSummary, OpportunityKind, RecordId};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, EmptyState, PageActions, PageHeader, PageSubtitle,
    PageTitle, SkeletonList,
};

use crate::auth::use_current_user;
use crate::components::{ErrorBanner, StatusBadge};
use crate::format_helpers::format_date_fr;
use crate::routes::Route;
use crate::use_services;

const RECENT_APPLICATIONS: usize = 5;

/// Publication counts of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct KindCount {
    pub kind: OpportunityKind,
    pub total: usize,
    pub active: usize,
}

impl KindCount {
    pub fn of(kind: OpportunityKind, items: &[ListingSummary]) -> Self {
        Self {
            kind,
            total: items.len(),
            active: items.iter().filter(|i| i.is_active).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Overview {
    counts: Vec<KindCount>,
    applications: Vec<Application>,
}

async fn load_overview(data: &DataService, recruiter_id: &RecordId) -> Result<Overview, AppError> {
    let mut counts = Vec::with_capacity(OpportunityKind::ALL.len());
    for kind in OpportunityKind::ALL {
        let items = data
            .list_summaries(kind, &ListQuery::for_recruiter(recruiter_id.clone()))
            .await?;
        counts.push(KindCount::of(kind, &items));
    }
    let applications = data.applications_for_recruiter(recruiter_id).await?;
    Ok(Overview {
        counts,
        applications,
    })
}

#[component]
pub fn RecruteurDashboard() -> Element {
    let services = use_services();
    let user = use_current_user();
    let name = user.as_ref().map(|u| u.display_name()).unwrap_or_default();
    let recruiter_id = user.map(|u| u.id);

    let overview = use_resource(move || {
        let data = services.data.clone();
        let recruiter_id = recruiter_id.clone();
        async move {
            let recruiter_id = recruiter_id
                .ok_or_else(|| AppError::unauthorized("Authentification requise"))?;
            load_overview(&data, &recruiter_id).await
        }
    });

    rsx! {
        PageHeader {
            div {
                PageTitle { "Bonjour {name}" }
                PageSubtitle { "Vos publications et les candidatures reçues" }
            }
            PageActions {
                Link {
                    to: Route::OpportunityCreate { kind: OpportunityKind::Offre.slug().to_string() },
                    class: "link-button",
                    "Publier une offre"
                }
            }
        }

        match &*overview.read() {
            Some(Ok(o)) => rsx! {
                div { class: "stats",
                    for c in o.counts.iter() {
                        Link {
                            key: "{c.kind.slug()}",
                            to: Route::ManageOpportunities { kind: c.kind.slug().to_string() },
                            Card {
                                CardContent {
                                    p { class: "stat-value", "{c.total}" }
                                    p { class: "stat-label", "{c.kind.plural_label()} ({c.active} publiée(s))" }
                                }
                            }
                        }
                    }
                }

                div { class: "stats",
                    for (status, count) in count_by_status(&o.applications) {
                        Card { key: "{status.as_str()}",
                            CardContent {
                                p { class: "stat-value", "{count}" }
                                p { class: "stat-label", "{status.label()}" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Dernières candidatures" } }
                    CardContent {
                        if o.applications.is_empty() {
                            EmptyState { title: "Aucune candidature reçue pour le moment" }
                        } else {
                            ul { class: "recent-applications",
                                for app in o.applications.iter().take(RECENT_APPLICATIONS) {
                                    li { key: "{app.id}",
                                        strong { {app.applicant_name.clone().unwrap_or_default()} }
                                        " · "
                                        {app.opportunity_title.clone().unwrap_or_default()}
                                        " · "
                                        {app.created_at.as_deref().map(format_date_fr).unwrap_or_default()}
                                        " "
                                        StatusBadge { status: app.status }
                                    }
                                }
                            }
                            Link { to: Route::ReceivedApplications {}, "Toutes les candidatures" }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList {} },
        }
    }
}
