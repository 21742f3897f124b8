use dioxus::prelude::*;
use shared_types::{AppError, Application, ApplicationFilters, ApplicationStatus, RecordId};
use shared_ui::{EmptyState, FormSelect, Input, PageHeader, PageSubtitle, PageTitle, SkeletonList};

use crate::auth::use_current_user;
use crate::components::{ErrorBanner, StatusBadge};
use crate::format_helpers::{format_date_fr, truncate};
use crate::routes::Route;
use crate::use_services;

const LETTER_PREVIEW_CHARS: usize = 140;

/// Applicant shown in the table: the stored name, else the user id.
fn applicant_label(app: &Application) -> String {
    app.applicant_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Utilisateur #{}", app.user_id))
}

/// Applications received on every publication of the logged-in recruiter.
#[component]
pub fn ReceivedApplications() -> Element {
    let services = use_services();
    let user = use_current_user();
    let mut reload = use_signal(|| 0u32);
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(String::new);
    let mut action_error = use_signal(|| Option::<AppError>::None);

    let recruiter_id = user.map(|u| u.id);
    let list_services = services.clone();
    let applications = use_resource(move || {
        let _ = reload();
        let data = list_services.data.clone();
        let recruiter_id = recruiter_id.clone();
        async move {
            let recruiter_id = recruiter_id
                .ok_or_else(|| AppError::unauthorized("Authentification requise"))?;
            data.applications_for_recruiter(&recruiter_id).await
        }
    });

    let set_status = use_callback(move |(id, status): (RecordId, ApplicationStatus)| {
        let data = services.data.clone();
        spawn(async move {
            match data.update_application_status(&id, status).await {
                Ok(updated) => {
                    tracing::info!(application = %updated.id, status = updated.status.as_str(), "application status updated");
                    action_error.set(None);
                }
                Err(e) => {
                    tracing::error!(error = %e, application = %id, "could not update application status");
                    action_error.set(Some(e));
                }
            }
            *reload.write() += 1;
        });
    });

    let filters = ApplicationFilters {
        status: (!status_filter().is_empty())
            .then(|| ApplicationStatus::from_str_or_default(&status_filter())),
        search: search(),
    };

    rsx! {
        PageHeader {
            div {
                PageTitle { "Candidatures reçues" }
                PageSubtitle { "Examinez les candidatures et faites évoluer leur statut." }
            }
        }
        if let Some(err) = action_error() {
            ErrorBanner { error: err }
        }
        div { class: "filters",
            Input {
                label: "Recherche",
                placeholder: "Candidat ou opportunité",
                value: search(),
                on_input: move |evt: FormEvent| search.set(evt.value()),
            }
            FormSelect {
                label: "Statut",
                value: status_filter(),
                onchange: move |evt: FormEvent| status_filter.set(evt.value()),
                option { value: "", "Tous les statuts" }
                for s in ApplicationStatus::ALL {
                    option { key: "{s.as_str()}", value: "{s.as_str()}", "{s.label()}" }
                }
            }
        }
        match &*applications.read() {
            Some(Ok(all)) if all.is_empty() => rsx! {
                EmptyState {
                    title: "Aucune candidature reçue",
                    description: "Les candidatures à vos publications apparaîtront ici.",
                }
            },
            Some(Ok(all)) => {
                let shown: Vec<Application> = filters.apply(all);
                rsx! {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Candidat" }
                                th { "Opportunité" }
                                th { "Reçue le" }
                                th { "Lettre" }
                                th { "Statut" }
                            }
                        }
                        tbody {
                            for app in shown {
                                tr { key: "{app.id}",
                                    td {
                                        {applicant_label(&app)}
                                        if let Some(cv) = app.cv_url.clone() {
                                            br {}
                                            a { href: "{cv}", target: "_blank", rel: "noopener", "CV" }
                                        }
                                    }
                                    td {
                                        Link {
                                            to: Route::OpportunityDetail {
                                                kind: app.opportunity_type.slug().to_string(),
                                                id: app.opportunity_id.to_string(),
                                            },
                                            {app.opportunity_title.clone().unwrap_or_else(|| app.opportunity_type.label().to_string())}
                                        }
                                    }
                                    td { {app.created_at.as_deref().map(format_date_fr).unwrap_or_default()} }
                                    td { "{truncate(&app.cover_letter, LETTER_PREVIEW_CHARS)}" }
                                    td {
                                        StatusBadge { status: app.status }
                                        FormSelect {
                                            value: app.status.as_str().to_string(),
                                            onchange: {
                                                let id = app.id.clone();
                                                move |evt: FormEvent| {
                                                    let status = ApplicationStatus::from_str_or_default(&evt.value());
                                                    set_status.call((id.clone(), status));
                                                }
                                            },
                                            for s in ApplicationStatus::ALL {
                                                option { key: "{s.as_str()}", value: "{s.as_str()}", "{s.label()}" }
                                            }
                                        }
                                    }
                                }
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
