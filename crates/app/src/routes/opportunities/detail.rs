use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{deadline_passed, ListingSummary, OpportunityKind, RecordId, Role};
use shared_ui::{
    Badge, BadgeVariant, Banner, BannerVariant, Card, CardContent, EmptyState, PageActions,
    PageHeader, PageSubtitle, PageTitle, SkeletonList,
};

use crate::auth::use_auth;
use crate::components::ErrorBanner;
use crate::format_helpers::{deadline_label, format_date_fr, today};
use crate::routes::Route;
use crate::use_services;

/// Whether the apply button is offered on a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyState {
    Open,
    /// Deactivated or past its deadline.
    Closed,
    /// Only candidats and prestataires apply.
    NotForRole,
}

/// `role` is `None` for visitors, who are sent through the login page.
pub fn apply_state(summary: &ListingSummary, role: Option<&Role>, today: NaiveDate) -> ApplyState {
    if role.is_some_and(|r| !matches!(r, Role::Candidat | Role::Prestataire)) {
        return ApplyState::NotForRole;
    }
    let expired = summary
        .deadline
        .as_deref()
        .is_some_and(|d| deadline_passed(d, today));
    if !summary.is_active || expired {
        ApplyState::Closed
    } else {
        ApplyState::Open
    }
}

#[component]
pub fn OpportunityDetail(kind: String, id: String) -> Element {
    match OpportunityKind::from_slug(&kind) {
        Some(kind) => rsx! {
            ListingDetail { key: "{kind}-{id}", kind, id: RecordId::new(id.clone()) }
        },
        None => rsx! {
            EmptyState { title: "Opportunité introuvable" }
        },
    }
}

#[component]
fn ListingDetail(kind: OpportunityKind, id: RecordId) -> Element {
    let services = use_services();
    let auth = use_auth();

    let listing = use_resource(move || {
        let data = services.data.clone();
        let id = id.clone();
        async move { data.get_summary(kind, &id).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }

        match &*listing.read() {
            Some(Ok(summary)) => {
                let today = today();
                let state = apply_state(summary, auth.role().as_ref(), today);
                rsx! {
                    PageHeader {
                        div {
                            div { class: "meta-row",
                                Badge { variant: BadgeVariant::Outline, "{kind.label()}" }
                                if !summary.category.is_empty() {
                                    Badge { variant: BadgeVariant::Secondary, "{summary.category}" }
                                }
                            }
                            PageTitle { "{summary.title}" }
                            if !summary.organization.is_empty() {
                                PageSubtitle { "{summary.organization}" }
                            }
                        }
                        PageActions {
                            match state {
                                ApplyState::Open => rsx! {
                                    Link {
                                        to: Route::Apply {
                                            kind: kind.slug().to_string(),
                                            id: summary.id.to_string(),
                                        },
                                        class: "link-button",
                                        "Postuler"
                                    }
                                },
                                ApplyState::Closed => rsx! {
                                    Badge { variant: BadgeVariant::Warning, "Candidatures closes" }
                                },
                                ApplyState::NotForRole => rsx! {},
                            }
                        }
                    }

                    Card {
                        CardContent {
                            dl { class: "detail-list",
                                if let Some(amount) = &summary.amount_label {
                                    dt { if kind == OpportunityKind::Offre { "Salaire" } else { "Montant" } }
                                    dd { "{amount}" }
                                }
                                for (label, value) in summary.details.iter() {
                                    dt { "{label}" }
                                    dd { "{value}" }
                                }
                                dt { "Date limite" }
                                dd { "{deadline_label(summary.deadline.as_deref(), today)}" }
                                if let Some(created) = &summary.created_at {
                                    dt { "Publiée le" }
                                    dd { "{format_date_fr(created)}" }
                                }
                            }
                        }
                    }

                    article { class: "listing-description",
                        for (i, paragraph) in summary.description.split("\n\n").enumerate() {
                            p { key: "{i}", "{paragraph}" }
                        }
                    }
                }
            }
            Some(Err(e)) if e.is_not_found() => rsx! {
                EmptyState {
                    title: "Opportunité introuvable",
                    description: "Elle a peut-être été retirée par son auteur.",
                    Link {
                        to: Route::OpportunityList { kind: kind.slug().to_string() },
                        class: "link-button",
                        "Voir les {kind.plural_label().to_lowercase()}"
                    }
                }
            },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList { count: 1 } },
        }
    }
}

/// Notice shown on the apply page when applying is not possible.
#[component]
pub fn ApplyUnavailable(state: ApplyState) -> Element {
    let message = match state {
        ApplyState::Closed => "Cette opportunité n'accepte plus de candidatures.",
        ApplyState::NotForRole => "Seuls les candidats et les prestataires peuvent postuler.",
        ApplyState::Open => return rsx! {},
    };
    rsx! {
        Banner { variant: BannerVariant::Info, "{message}" }
    }
}
