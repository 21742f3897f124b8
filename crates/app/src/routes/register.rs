use dioxus::prelude::*;
use shared_types::{AppError, RegisterRequest, Role};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form,
    FormRow, FormSelect, Input,
};
use std::collections::HashMap;

use crate::auth::{use_auth, use_auth_service};
use crate::components::ErrorBanner;
use crate::guards::home_route;
use crate::routes::Route;

/// Build the request from the form fields. The company is only sent for
/// recruiters, and only when filled in.
pub fn register_request(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    role: &str,
    company: &str,
) -> RegisterRequest {
    let company = company.trim();
    let company = (Role::parse(role) == Role::Recruteur && !company.is_empty())
        .then(|| company.to_string());
    RegisterRequest {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        role: role.to_string(),
        company,
    }
}

#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let service = use_auth_service();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Candidat.as_str().to_string());
    let mut company = use_signal(String::new);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |_: FormEvent| {
        let service = service.clone();
        async move {
            loading.set(true);
            error.set(None);
            field_errors.set(HashMap::new());

            let req = register_request(
                &first_name(),
                &last_name(),
                &email(),
                &password(),
                &role(),
                &company(),
            );
            match auth.register(&service, req).await {
                Ok(session) => {
                    tracing::info!(user = %session.user.id, role = %session.role(), "account created");
                    navigator().replace(home_route(&session.role()));
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => {
                    tracing::warn!(error = %e, "registration failed");
                    error.set(Some(e));
                }
            }
            loading.set(false);
        }
    };

    let is_recruteur = Role::parse(&role()) == Role::Recruteur;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Créer un compte" }
                    CardDescription { "Postulez aux offres ou publiez vos opportunités" }
                }
                CardContent {
                    if let Some(err) = error() {
                        ErrorBanner { error: err }
                    }
                    Form { onsubmit: handle_register,
                        FormRow {
                            Input {
                                label: "Prénom",
                                value: first_name(),
                                on_input: move |evt: FormEvent| first_name.set(evt.value()),
                                error: field_errors().get("first_name").cloned(),
                            }
                            Input {
                                label: "Nom",
                                value: last_name(),
                                on_input: move |evt: FormEvent| last_name.set(evt.value()),
                                error: field_errors().get("last_name").cloned(),
                            }
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                            error: field_errors().get("email").cloned(),
                        }
                        Input {
                            label: "Mot de passe",
                            input_type: "password",
                            value: password(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                            error: field_errors().get("password").cloned(),
                        }
                        FormSelect {
                            label: "Je suis",
                            value: role(),
                            onchange: move |evt: FormEvent| role.set(evt.value()),
                            error: field_errors().get("role").cloned(),
                            for r in Role::SELECTABLE {
                                option { key: "{r.as_str()}", value: "{r.as_str()}", "{r.label()}" }
                            }
                        }
                        if is_recruteur {
                            Input {
                                label: "Entreprise ou organisation",
                                value: company(),
                                on_input: move |evt: FormEvent| company.set(evt.value()),
                            }
                        }
                        Button { button_type: "submit", loading: loading(),
                            if loading() { "Création…" } else { "Créer mon compte" }
                        }
                    }
                }
                CardFooter {
                    span { "Déjà inscrit ? " }
                    Link { to: Route::Login { redirect: None }, "Se connecter" }
                }
            }
        }
    }
}
