use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Override `config` with `API_BASE_URL`, `AUTH_API_BASE_URL` and
/// `SESSION_KEY` when `lookup` yields a non-empty value.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
    if let Some(url) = get("API_BASE_URL") {
        config.api.base_url = url;
    }
    if let Some(url) = get("AUTH_API_BASE_URL") {
        config.api.auth_base_url = url;
    }
    if let Some(key) = get("SESSION_KEY") {
        config.api.session_key = key;
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    let _ = dotenvy::dotenv();

    let from_file = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("failed to parse {CONFIG_PATH}: {e}; using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!("{CONFIG_PATH} not found ({e}); using defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(from_file, |name| std::env::var(name).ok())
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    // No filesystem in the browser: values are baked in at build time.
    apply_env_overrides(AppConfig::default(), |name| match name {
        "API_BASE_URL" => option_env!("API_BASE_URL").map(str::to_string),
        "AUTH_API_BASE_URL" => option_env!("AUTH_API_BASE_URL").map(str::to_string),
        "SESSION_KEY" => option_env!("SESSION_KEY").map(str::to_string),
        _ => None,
    })
}

/// Load the configuration once. Later calls return the first result.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        tracing::info!(
            base_url = %config.api.base_url,
            auth_base_url = %config.api.auth_base_url,
            "configuration loaded"
        );
        config
    })
}

/// The loaded configuration, or defaults if `load_config` was never called.
pub fn config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
