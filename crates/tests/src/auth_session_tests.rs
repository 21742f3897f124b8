use crate::common;
use client::{MemoryStore, SessionStore};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, RegisterRequest, Role};
use std::sync::Arc;

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn test_login_restore_logout() {
    let server = common::start_server().await;
    server.state.add_user(1, "awa@exemple.sn", "candidat");
    let store = Arc::new(MemoryStore::new());
    let auth = server.auth_service(store.clone());

    let session = auth
        .login(&login_request("awa@exemple.sn", common::PASSWORD))
        .await
        .unwrap();
    assert_eq!(session.token, "token-1");
    assert_eq!(session.role(), Role::Candidat);
    assert_eq!(server.state.last_request().path, "/api/auth/login");

    assert_eq!(auth.restore(), Some(session));

    auth.logout().unwrap();
    assert_eq!(auth.restore(), None);
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn test_wrong_password_keeps_store_empty() {
    let server = common::start_server().await;
    server.state.add_user(1, "awa@exemple.sn", "candidat");
    let store = Arc::new(MemoryStore::new());
    let auth = server.auth_service(store.clone());

    let err = auth
        .login(&login_request("awa@exemple.sn", "mauvais"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Email ou mot de passe incorrect");
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn test_invalid_login_form_sends_nothing() {
    let server = common::start_server().await;
    let auth = server.auth_service(Arc::new(MemoryStore::new()));

    let err = auth.login(&login_request("awa", "")).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(server.state.request_count(), 0);
}

#[tokio::test]
async fn test_register_recruteur_with_company() {
    let server = common::start_server().await;
    let auth = server.auth_service(Arc::new(MemoryStore::new()));
    let req = RegisterRequest {
        first_name: "Koffi".into(),
        last_name: "Mensah".into(),
        email: "koffi@exemple.ci".into(),
        password: "motdepasse".into(),
        role: "recruteur".into(),
        company: Some("Orange CI".into()),
    };

    let session = auth.register(&req).await.unwrap();

    assert_eq!(session.role(), Role::Recruteur);
    assert_eq!(session.user.company.as_deref(), Some("Orange CI"));
    assert_eq!(session.user.display_name(), "Koffi Mensah");
    assert_eq!(auth.restore().map(|s| s.token), Some(session.token.clone()));

    let body = server.state.last_request().body.unwrap();
    assert_eq!(body["firstName"], "Koffi");
    assert_eq!(body["company"], "Orange CI");

    let err = auth.register(&req).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[tokio::test]
async fn test_refresh_fetches_me_with_token() {
    let server = common::start_server().await;
    server.state.add_user(2, "fatou@exemple.sn", "prestataire");
    let auth = server.auth_service(Arc::new(MemoryStore::new()));
    let session = auth
        .login(&login_request("fatou@exemple.sn", common::PASSWORD))
        .await
        .unwrap();

    let refreshed = auth.refresh(&session).await.unwrap();

    assert_eq!(refreshed, session);
    let req = server.state.last_request();
    assert_eq!(req.path, "/api/auth/me");
    assert_eq!(req.authorization.as_deref(), Some("Bearer token-2"));
    assert_eq!(refreshed.role(), Role::Prestataire);
}

#[tokio::test]
async fn test_corrupt_stored_session_is_cleared() {
    let server = common::start_server().await;
    let store = Arc::new(MemoryStore::new());
    store.save("{pas du json").unwrap();
    let auth = server.auth_service(store.clone());

    assert_eq!(auth.restore(), None);
    assert_eq!(store.load().unwrap(), None);
}
