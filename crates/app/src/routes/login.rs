use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form, Input,
};
use std::collections::HashMap;

use crate::auth::{use_auth, use_auth_service};
use crate::components::ErrorBanner;
use crate::guards::post_login_target;
use crate::routes::Route;

/// Email/password login. After success the user lands on `redirect` when it
/// is a local page, on their role's dashboard otherwise.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let service = use_auth_service();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |_: FormEvent| {
        let service = service.clone();
        let redirect = redirect.clone();
        async move {
            loading.set(true);
            error.set(None);
            field_errors.set(HashMap::new());

            let req = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match auth.login(&service, req).await {
                Ok(session) => {
                    tracing::info!(user = %session.user.id, "logged in");
                    navigator().replace(post_login_target(redirect.as_deref(), &session.role()));
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => {
                    tracing::warn!(error = %e, "login failed");
                    error.set(Some(e));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Connexion" }
                    CardDescription { "Accédez à votre espace candidat, recruteur ou prestataire" }
                }
                CardContent {
                    if let Some(err) = error() {
                        ErrorBanner { error: err }
                    }
                    Form { onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "vous@exemple.com",
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
                        Button { button_type: "submit", loading: loading(),
                            if loading() { "Connexion…" } else { "Se connecter" }
                        }
                    }
                }
                CardFooter {
                    span { "Pas encore de compte ? " }
                    Link { to: Route::Register {}, "Créer un compte" }
                }
            }
        }
    }
}
