//! Authentication endpoints and the session lifecycle built on them.

use shared_types::{
    AppError, AuthResponse, LoginRequest, RegisterRequest, Session, SessionUser, ValidateRequest,
};
use std::sync::Arc;

use crate::http::ApiClient;
use crate::storage::SessionStore;

/// Calls to `/api/auth/*`.
#[derive(Debug, Clone)]
pub struct AuthApi {
    api: ApiClient,
}

impl AuthApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, AppError> {
        self.api.post_json("/api/auth/login", req).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, AppError> {
        self.api.post_json("/api/auth/register", req).await
    }

    /// Fetch the user behind `token`.
    pub async fn me(&self, token: &str) -> Result<SessionUser, AppError> {
        self.api
            .with_token(token)
            .get_json("/api/auth/me", &Vec::new())
            .await
    }
}

/// Session lifecycle: restore on launch, login/register, logout.
///
/// The store is injected so the same logic runs against `localStorage`, a
/// file, or memory in tests.
#[derive(Clone)]
pub struct AuthService {
    api: AuthApi,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(api: AuthApi, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Read the persisted session.
    ///
    /// A stored value that no longer parses is cleared and reported as no
    /// session. The token is not checked against the backend.
    pub fn restore(&self) -> Option<Session> {
        let raw = match self.store.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored session");
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                tracing::debug!(user = %session.user.id, role = %session.role(), "session restored");
                Some(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored session is corrupt; clearing it");
                if let Err(e) = self.store.clear() {
                    tracing::warn!(error = %e, "could not clear corrupt session");
                }
                None
            }
        }
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<Session, AppError> {
        req.validate_request()?;
        let session = Session::from(self.api.login(req).await?);
        self.persist(&session)?;
        tracing::info!(user = %session.user.id, role = %session.role(), "logged in");
        Ok(session)
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<Session, AppError> {
        req.validate_request()?;
        let session = Session::from(self.api.register(req).await?);
        self.persist(&session)?;
        tracing::info!(user = %session.user.id, role = %session.role(), "account created");
        Ok(session)
    }

    /// Re-fetch the user of `session` and persist the refreshed copy.
    pub async fn refresh(&self, session: &Session) -> Result<Session, AppError> {
        let user = self.api.me(&session.token).await?;
        let refreshed = Session {
            token: session.token.clone(),
            user,
        };
        self.persist(&refreshed)?;
        Ok(refreshed)
    }

    /// Forget the session. Idempotent.
    pub fn logout(&self) -> Result<(), AppError> {
        self.store.clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    fn persist(&self, session: &Session) -> Result<(), AppError> {
        let raw = serde_json::to_string(session).map_err(|e| AppError::decode(e.to_string()))?;
        self.store.save(&raw)
    }
}
