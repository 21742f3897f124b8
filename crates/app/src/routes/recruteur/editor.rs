use dioxus::prelude::*;
use shared_types::{AppError, OpportunityKind, RecordId};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, EmptyState, Form, FormRow, Input, PageHeader,
    PageTitle, SkeletonList, Textarea,
};
use std::collections::HashMap;

use super::form::{field_labels, load_form, save_form, ListingForm};
use crate::auth::use_current_user;
use crate::components::ErrorBanner;
use crate::routes::Route;
use crate::use_services;

#[component]
pub fn OpportunityCreate(kind: String) -> Element {
    match OpportunityKind::from_slug(&kind) {
        Some(kind) => rsx! {
            ListingEditor { key: "{kind}", kind, initial: ListingForm::new() }
        },
        None => rsx! { EmptyState { title: "Type d'opportunité inconnu" } },
    }
}

#[component]
pub fn OpportunityEdit(kind: String, id: String) -> Element {
    match OpportunityKind::from_slug(&kind) {
        Some(kind) => rsx! {
            EditLoader { key: "{kind}-{id}", kind, id: RecordId::new(id.clone()) }
        },
        None => rsx! { EmptyState { title: "Type d'opportunité inconnu" } },
    }
}

#[component]
fn EditLoader(kind: OpportunityKind, id: RecordId) -> Element {
    let services = use_services();
    let recruiter_id = use_current_user().map(|u| u.id);
    let form = use_resource(move || {
        let data = services.data.clone();
        let id = id.clone();
        let recruiter_id = recruiter_id.clone();
        async move {
            let recruiter_id = recruiter_id
                .ok_or_else(|| AppError::unauthorized("Authentification requise"))?;
            load_form(&data, kind, &id, &recruiter_id).await
        }
    });

    let view = match &*form.read() {
        Some(Ok(initial)) => rsx! { ListingEditor { kind, initial: initial.clone() } },
        Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
        None => rsx! { SkeletonList { count: 1 } },
    };
    view
}

/// Create/edit form for one opportunity kind.
#[component]
fn ListingEditor(kind: OpportunityKind, initial: ListingForm) -> Element {
    let services = use_services();
    let user = use_current_user();
    let editing = !initial.id.is_empty();
    let mut form = use_signal(move || initial);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_save = move |_: FormEvent| {
        let data = services.data.clone();
        let recruiter_id = user.as_ref().map(|u| u.id.clone());
        async move {
            let Some(recruiter_id) = recruiter_id else {
                return;
            };
            saving.set(true);
            error.set(None);
            field_errors.set(HashMap::new());

            let current = form();
            match save_form(&data, kind, &current, &recruiter_id).await {
                Ok(id) => {
                    tracing::info!(%kind, %id, editing, "opportunity saved");
                    navigator().push(Route::ManageOpportunities { kind: kind.slug().to_string() });
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => {
                    tracing::error!(error = %e, %kind, "could not save opportunity");
                    error.set(Some(e));
                }
            }
            saving.set(false);
        }
    };

    let labels = field_labels(kind);
    let f = form();
    let err = move |key: &str| field_errors.read().get(key).cloned();

    rsx! {
        PageHeader {
            PageTitle {
                if editing { "Modifier : {f.title}" } else { "Nouvelle publication · {kind.label()}" }
            }
        }
        Card {
            CardContent {
                if let Some(e) = error() {
                    ErrorBanner { error: e }
                }
                Form { onsubmit: handle_save,
                    Input {
                        label: "Titre",
                        value: f.title.clone(),
                        on_input: move |evt: FormEvent| form.write().title = evt.value(),
                        error: err("title"),
                    }
                    FormRow {
                        Input {
                            label: labels.organization.to_string(),
                            value: f.organization.clone(),
                            on_input: move |evt: FormEvent| form.write().organization = evt.value(),
                            error: err("organization"),
                        }
                        Input {
                            label: labels.category.to_string(),
                            value: f.category.clone(),
                            on_input: move |evt: FormEvent| form.write().category = evt.value(),
                        }
                    }
                    match kind {
                        OpportunityKind::Offre => rsx! {
                            FormRow {
                                Input {
                                    label: "Lieu",
                                    value: f.location.clone(),
                                    on_input: move |evt: FormEvent| form.write().location = evt.value(),
                                }
                                Input {
                                    label: "Type de contrat",
                                    placeholder: "CDI, CDD, Stage…",
                                    value: f.contract_type.clone(),
                                    on_input: move |evt: FormEvent| form.write().contract_type = evt.value(),
                                }
                            }
                        },
                        OpportunityKind::Bourse => rsx! {
                            Input {
                                label: "Pays",
                                value: f.country.clone(),
                                on_input: move |evt: FormEvent| form.write().country = evt.value(),
                            }
                        },
                        OpportunityKind::Financement => rsx! {
                            Input {
                                label: "Critères d'éligibilité",
                                value: f.eligibility.clone(),
                                on_input: move |evt: FormEvent| form.write().eligibility = evt.value(),
                            }
                        },
                        OpportunityKind::Consultation => rsx! {
                            Input {
                                label: "Durée",
                                placeholder: "3 mois",
                                value: f.duration.clone(),
                                on_input: move |evt: FormEvent| form.write().duration = evt.value(),
                            }
                        },
                    }
                    FormRow {
                        Input {
                            label: labels.amount.to_string(),
                            value: f.amount.clone(),
                            on_input: move |evt: FormEvent| form.write().amount = evt.value(),
                            error: err("amount"),
                        }
                        Input {
                            label: "Date limite",
                            input_type: "date",
                            value: f.deadline.clone(),
                            on_input: move |evt: FormEvent| form.write().deadline = evt.value(),
                        }
                    }
                    Textarea {
                        label: "Description",
                        rows: 8,
                        value: f.description.clone(),
                        on_input: move |evt: FormEvent| form.write().description = evt.value(),
                        error: err("description"),
                    }
                    if kind == OpportunityKind::Offre {
                        Textarea {
                            label: "Profil recherché (une exigence par ligne)",
                            rows: 4,
                            value: f.requirements.clone(),
                            on_input: move |evt: FormEvent| form.write().requirements = evt.value(),
                        }
                    }
                    label { class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: f.is_active,
                            onchange: move |evt: FormEvent| form.write().is_active = evt.checked(),
                        }
                        "Publiée"
                    }
                    div { class: "form-actions",
                        Link {
                            to: Route::ManageOpportunities { kind: kind.slug().to_string() },
                            class: "link-button link-button-ghost",
                            "Annuler"
                        }
                        Button { button_type: "submit", variant: ButtonVariant::Primary, loading: saving(),
                            if saving() { "Enregistrement…" } else { "Enregistrer" }
                        }
                    }
                }
            }
        }
    }
}
