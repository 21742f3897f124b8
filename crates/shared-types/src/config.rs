use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_SESSION_KEY: &str = "opportunites.session";

/// Backend endpoints and session persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    /// Root of the JSON-server collections.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Root of the authenticated API (`/api/auth`, `/api/notifications`).
    #[serde(default = "default_base_url")]
    pub auth_base_url: String,
    /// Storage key (web) or file stem (desktop) holding the session.
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_base_url: default_base_url(),
            session_key: default_session_key(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

/// Feature flags controlling optional screens.
///
/// A missing or incomplete config file keeps the blog visible and the
/// authenticated notification API off, so the app runs against a bare
/// JSON-server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub notifications_api: bool,
    #[serde(default = "default_true")]
    pub blog: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            notifications_api: false,
            blog: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub features: FeatureFlags,
}
