//! Data Access Layer of the marketplace front-end.
//!
//! Talks to the JSON-server collections and to the authenticated API, and
//! persists the session between launches.

pub mod auth;
pub mod config;
pub mod data_service;
pub mod http;
pub mod notifications;
pub mod storage;
pub mod telemetry;

pub use auth::{AuthApi, AuthService};
pub use data_service::{ApplicationQuery, DataService, ListQuery, SortOrder};
pub use http::{ApiClient, QueryPairs};
pub use notifications::NotificationApi;
pub use storage::{default_store, MemoryStore, SessionStore};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
