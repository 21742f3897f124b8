//! The applicant side of applications, shared by candidats and prestataires.

use client::ApplicationQuery;
use dioxus::prelude::*;
use shared_types::{
    count_by_status, AppError, Application, ApplicationFilters, ApplicationStatus,
};
use shared_ui::{
    Card, CardContent, EmptyState, FormSelect, Input, PageHeader, PageSubtitle, PageTitle,
    SkeletonList,
};

use crate::auth::use_auth;
use crate::components::{ApplicationTable, ErrorBanner};
use crate::routes::Route;
use crate::use_services;

/// Applications of the logged-in user, newest first. Re-runs when `reload`
/// changes.
pub fn use_my_applications(reload: Signal<u32>) -> Resource<Result<Vec<Application>, AppError>> {
    let auth = use_auth();
    let services = use_services();

    use_resource(move || {
        let _ = reload();
        let data = services.data.clone();
        let user = auth.user();
        async move {
            let user = user.ok_or_else(|| AppError::unauthorized("Authentification requise"))?;
            data.list_applications(&ApplicationQuery::for_user(user.id))
                .await
        }
    })
}

/// One card per status with its count.
#[component]
pub fn ApplicationStats(applications: Vec<Application>) -> Element {
    rsx! {
        div { class: "stats",
            Card {
                CardContent {
                    p { class: "stat-value", "{applications.len()}" }
                    p { class: "stat-label", "Candidatures" }
                }
            }
            for (status, count) in count_by_status(&applications) {
                Card { key: "{status.as_str()}",
                    CardContent {
                        p { class: "stat-value", "{count}" }
                        p { class: "stat-label", "{status.label()}" }
                    }
                }
            }
        }
    }
}

/// Status filter value of the select; empty means all.
fn parse_status_filter(value: &str) -> Option<ApplicationStatus> {
    (!value.is_empty()).then(|| ApplicationStatus::from_str_or_default(value))
}

#[component]
pub fn MyApplicationsPage() -> Element {
    let services = use_services();
    let mut reload = use_signal(|| 0u32);
    let mut search = use_signal(String::new);
    let mut status = use_signal(String::new);
    let mut action_error = use_signal(|| Option::<AppError>::None);
    let applications = use_my_applications(reload);

    let withdraw = move |app: Application| {
        let data = services.data.clone();
        spawn(async move {
            match data.withdraw_application(&app.id).await {
                Ok(()) => {
                    tracing::info!(application = %app.id, "application withdrawn");
                    action_error.set(None);
                }
                Err(e) => {
                    tracing::error!(error = %e, application = %app.id, "could not withdraw application");
                    action_error.set(Some(e));
                }
            }
            *reload.write() += 1;
        });
    };

    let filters = ApplicationFilters {
        status: parse_status_filter(&status()),
        search: search(),
    };

    rsx! {
        PageHeader {
            div {
                PageTitle { "Mes candidatures" }
                PageSubtitle { "Suivez l'avancement de vos candidatures." }
            }
        }
        if let Some(err) = action_error() {
            ErrorBanner { error: err }
        }
        div { class: "filters",
            Input {
                label: "Recherche",
                placeholder: "Intitulé de l'opportunité",
                value: search(),
                on_input: move |evt: FormEvent| search.set(evt.value()),
            }
            FormSelect {
                label: "Statut",
                value: status(),
                onchange: move |evt: FormEvent| status.set(evt.value()),
                option { value: "", "Tous les statuts" }
                for s in ApplicationStatus::ALL {
                    option { key: "{s.as_str()}", value: "{s.as_str()}", "{s.label()}" }
                }
            }
        }
        match &*applications.read() {
            Some(Ok(all)) if all.is_empty() => rsx! {
                EmptyState {
                    title: "Vous n'avez encore postulé à aucune opportunité",
                    Link { to: Route::Home {}, class: "link-button", "Parcourir les opportunités" }
                }
            },
            Some(Ok(all)) => {
                let shown = filters.apply(all);
                rsx! {
                    if shown.is_empty() {
                        EmptyState { title: "Aucune candidature ne correspond à ces filtres" }
                    } else {
                        ApplicationTable { applications: shown, on_withdraw: withdraw }
                    }
                }
            }
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList {} },
        }
    }
}

/// The `count` most recent applications.
pub fn recent(applications: &[Application], count: usize) -> Vec<Application> {
    applications.iter().take(count).cloned().collect()
}
