use dioxus::prelude::*;
use shared_types::{
    AppError, ApplicationDraft, ListingSummary, OpportunityKind, RecordId, Role, SessionUser,
    COVER_LETTER_MIN_LEN,
};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState, Form, Input,
    SkeletonList, Textarea,
};
use std::collections::HashMap;

use crate::auth::use_current_user;
use crate::components::ErrorBanner;
use crate::format_helpers::today;
use crate::routes::opportunities::{apply_state, ApplyState, ApplyUnavailable};
use crate::routes::Route;
use crate::use_services;

/// Where an applicant lands after submitting.
pub fn applications_route(role: &Role) -> Route {
    match role {
        Role::Prestataire => Route::PrestataireApplications {},
        Role::Candidat => Route::CandidatApplications {},
        _ => Route::Home {},
    }
}

/// Draft for `listing` from the form fields.
pub fn build_draft(
    listing: &ListingSummary,
    user: &SessionUser,
    cover_letter: &str,
    cv_url: &str,
) -> ApplicationDraft {
    ApplicationDraft {
        opportunity_id: listing.id.to_string(),
        opportunity_type: Some(listing.kind),
        opportunity_title: Some(listing.title.clone()),
        applicant_name: Some(user.display_name()),
        cover_letter: cover_letter.to_string(),
        cv_url: Some(cv_url.to_string()),
    }
}

#[component]
pub fn Apply(kind: String, id: String) -> Element {
    match OpportunityKind::from_slug(&kind) {
        Some(kind) => rsx! {
            ApplyPage { key: "{kind}-{id}", kind, id: RecordId::new(id.clone()) }
        },
        None => rsx! { EmptyState { title: "Opportunité introuvable" } },
    }
}

#[component]
fn ApplyPage(kind: OpportunityKind, id: RecordId) -> Element {
    let services = use_services();

    let listing = use_resource(move || {
        let data = services.data.clone();
        let id = id.clone();
        async move { data.get_summary(kind, &id).await }
    });

    rsx! {
        match &*listing.read() {
            Some(Ok(summary)) => rsx! { ApplicationForm { listing: summary.clone() } },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList { count: 1 } },
        }
    }
}

#[component]
fn ApplicationForm(listing: ListingSummary) -> Element {
    let services = use_services();
    let mut cover_letter = use_signal(String::new);
    let mut cv_url = use_signal(String::new);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);
    let Some(user) = use_current_user() else {
        return rsx! {};
    };

    let role = user.role();
    let state = apply_state(&listing, Some(&role), today());
    if state != ApplyState::Open {
        return rsx! {
            ApplyUnavailable { state }
            Link {
                to: Route::OpportunityDetail {
                    kind: listing.kind.slug().to_string(),
                    id: listing.id.to_string(),
                },
                "Retour à l'opportunité"
            }
        };
    }

    let title = listing.title.clone();
    let organization = listing.organization.clone();
    let handle_submit = move |_: FormEvent| {
        let data = services.data.clone();
        let draft = build_draft(&listing, &user, &cover_letter(), &cv_url());
        let user_id = user.id.clone();
        let role = role.clone();
        async move {
            saving.set(true);
            error.set(None);
            field_errors.set(HashMap::new());

            match data.submit_application(&draft, &user_id).await {
                Ok(_) => {
                    navigator().replace(applications_route(&role));
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => {
                    tracing::error!(error = %e, opportunity = %draft.opportunity_id, "could not submit application");
                    error.set(Some(e));
                }
            }
            saving.set(false);
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Postuler : {title}" }
                if !organization.is_empty() {
                    CardDescription { "{organization}" }
                }
            }
            CardContent {
                if let Some(err) = error() {
                    ErrorBanner { error: err }
                }
                Form { onsubmit: handle_submit,
                    Textarea {
                        label: "Lettre de motivation",
                        placeholder: "Présentez votre parcours et vos motivations ({COVER_LETTER_MIN_LEN} caractères minimum)",
                        rows: 10,
                        show_count: true,
                        value: cover_letter(),
                        on_input: move |evt: FormEvent| cover_letter.set(evt.value()),
                        error: field_errors().get("cover_letter").cloned(),
                    }
                    Input {
                        label: "Lien vers votre CV (facultatif)",
                        input_type: "url",
                        placeholder: "https://",
                        value: cv_url(),
                        on_input: move |evt: FormEvent| cv_url.set(evt.value()),
                        error: field_errors().get("cv_url").cloned(),
                    }
                    Button { button_type: "submit", loading: saving(),
                        if saving() { "Envoi…" } else { "Envoyer ma candidature" }
                    }
                }
            }
        }
    }
}
