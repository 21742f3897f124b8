use client::AuthService;
use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest, RegisterRequest, Role, Session, SessionUser};

/// Global authentication state.
///
/// `loading` stays true until the persisted session has been read, so
/// guards and the header never act on a session that is about to appear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    pub loading: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().as_ref().map(Session::role)
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.token.clone())
    }

    /// Load the persisted session and end the loading phase.
    pub fn restore(&mut self, service: &AuthService) {
        let restored = service.restore();
        self.session.set(restored);
        self.loading.set(false);
    }

    pub async fn login(
        &mut self,
        service: &AuthService,
        req: LoginRequest,
    ) -> Result<Session, AppError> {
        let session = service.login(&req).await?;
        self.session.set(Some(session.clone()));
        Ok(session)
    }

    pub async fn register(
        &mut self,
        service: &AuthService,
        req: RegisterRequest,
    ) -> Result<Session, AppError> {
        let session = service.register(&req).await?;
        self.session.set(Some(session.clone()));
        Ok(session)
    }

    /// Clear the in-memory session even if the store could not be cleared.
    pub fn logout(&mut self, service: &AuthService) {
        if let Err(e) = service.logout() {
            tracing::warn!(error = %e, "could not clear stored session");
        }
        self.session.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_auth_service() -> AuthService {
    use_context::<AuthService>()
}

/// The logged-in user. Only meaningful below a guard that ensures one.
pub fn use_current_user() -> Option<SessionUser> {
    use_auth().user()
}
