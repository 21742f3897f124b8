use client::ListQuery;
use dioxus::prelude::*;
use shared_types::{AppError, ListingSummary, OpportunityKind};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, EmptyState, PageActions, PageHeader, PageTitle,
    SkeletonList,
};

use crate::auth::use_current_user;
use crate::components::ErrorBanner;
use crate::format_helpers::{deadline_label, today};
use crate::routes::Route;
use crate::use_services;

/// The recruiter's own publications of one kind.
#[component]
pub fn ManageOpportunities(kind: String) -> Element {
    match OpportunityKind::from_slug(&kind) {
        Some(kind) => rsx! { ManageKind { key: "{kind}", kind } },
        None => rsx! { EmptyState { title: "Type d'opportunité inconnu" } },
    }
}

enum RowAction {
    Toggle(ListingSummary),
    Delete(ListingSummary),
}

#[component]
fn ManageKind(kind: OpportunityKind) -> Element {
    let services = use_services();
    let user = use_current_user();
    let mut reload = use_signal(|| 0u32);
    let mut action_error = use_signal(|| Option::<AppError>::None);

    let recruiter_id = user.map(|u| u.id);
    let list_services = services.clone();
    let listings = use_resource(move || {
        let _ = reload();
        let data = list_services.data.clone();
        let recruiter_id = recruiter_id.clone();
        async move {
            let recruiter_id = recruiter_id
                .ok_or_else(|| AppError::unauthorized("Authentification requise"))?;
            data.list_summaries(kind, &ListQuery::for_recruiter(recruiter_id))
                .await
        }
    });

    let run = use_callback(move |action: RowAction| {
        let data = services.data.clone();
        spawn(async move {
            let result = match &action {
                RowAction::Toggle(item) => data
                    .set_active_by_kind(kind, &item.id, !item.is_active)
                    .await
                    .map(|_| ()),
                RowAction::Delete(item) => data.delete_by_kind(kind, &item.id).await,
            };
            match result {
                Ok(()) => action_error.set(None),
                Err(e) => {
                    tracing::error!(error = %e, %kind, "opportunity update failed");
                    action_error.set(Some(e));
                }
            }
            *reload.write() += 1;
        });
    });

    let today = today();

    rsx! {
        PageHeader {
            PageTitle { "Mes publications" }
            PageActions {
                Link {
                    to: Route::OpportunityCreate { kind: kind.slug().to_string() },
                    class: "link-button",
                    "Nouvelle publication"
                }
            }
        }

        nav { class: "kind-tabs",
            for k in OpportunityKind::ALL {
                Link {
                    key: "{k.slug()}",
                    to: Route::ManageOpportunities { kind: k.slug().to_string() },
                    active_class: "active",
                    "{k.plural_label()}"
                }
            }
        }

        if let Some(err) = action_error() {
            ErrorBanner { error: err }
        }

        match &*listings.read() {
            Some(Ok(items)) if items.is_empty() => rsx! {
                EmptyState {
                    title: "Aucune publication",
                    description: "Publiez votre première opportunité de ce type.",
                }
            },
            Some(Ok(items)) => rsx! {
                table { class: "table",
                    thead {
                        tr {
                            th { "Titre" }
                            th { "Statut" }
                            th { "Date limite" }
                            th {}
                        }
                    }
                    tbody {
                        for item in items.iter().cloned() {
                            tr { key: "{item.id}",
                                td {
                                    Link {
                                        to: Route::OpportunityDetail {
                                            kind: kind.slug().to_string(),
                                            id: item.id.to_string(),
                                        },
                                        "{item.title}"
                                    }
                                }
                                td {
                                    if item.is_active {
                                        Badge { variant: BadgeVariant::Success, "Publiée" }
                                    } else {
                                        Badge { variant: BadgeVariant::Secondary, "Brouillon" }
                                    }
                                }
                                td { "{deadline_label(item.deadline.as_deref(), today)}" }
                                td { class: "row-actions",
                                    Link {
                                        to: Route::OpportunityEdit {
                                            kind: kind.slug().to_string(),
                                            id: item.id.to_string(),
                                        },
                                        "Modifier"
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let item = item.clone();
                                            move |_| run.call(RowAction::Toggle(item.clone()))
                                        },
                                        if item.is_active { "Désactiver" } else { "Publier" }
                                    }
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        onclick: {
                                            let item = item.clone();
                                            move |_| run.call(RowAction::Delete(item.clone()))
                                        },
                                        "Supprimer"
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList {} },
        }
    }
}
