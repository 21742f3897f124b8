use client::{ApiClient, AuthApi, AuthService, DataService, NotificationApi};
use dioxus::prelude::*;
use shared_types::{AppConfig, FeatureFlags};

mod auth;
mod components;
mod format_helpers;
mod guards;
mod header;
pub mod notify;
mod routes;
use auth::{use_auth, AuthState};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Clients shared by every page, built once from the configuration.
#[derive(Clone)]
pub struct Services {
    pub data: DataService,
    /// Token-less client for the authenticated API.
    pub auth_api: ApiClient,
}

impl Services {
    pub fn from_config(config: &AppConfig) -> Self {
        let http = ApiClient::new(config.api.base_url.clone());
        let auth_api = http.rebase(config.api.auth_base_url.clone());
        Self {
            data: DataService::new(http),
            auth_api,
        }
    }

    pub fn notifications(&self, token: &str) -> NotificationApi {
        NotificationApi::for_token(&self.auth_api, token)
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| client::config::load_config().clone());

    use_context_provider(|| config.features.clone());
    let services = use_context_provider(|| Services::from_config(&config));
    let auth_service = use_context_provider(|| {
        AuthService::new(
            AuthApi::new(services.auth_api.clone()),
            client::default_store(&config.api.session_key),
        )
    });
    use_context_provider(AuthState::new);
    use_context_provider(|| notify::NotificationTick(Signal::new(0)));

    // Read the persisted session after the first render so the header and
    // guards start from the loading state.
    let mut auth = use_auth();
    use_effect(move || {
        auth.restore(&auth_service);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Feature flags provided by `App`.
pub fn use_flags() -> FeatureFlags {
    use_context::<FeatureFlags>()
}
