use crate::common;
use client::{ApiClient, NotificationApi};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, NotificationPreferences, RecordId};

async fn seeded() -> common::TestServer {
    let server = common::start_server().await;
    server.state.add_user(1, "awa@exemple.sn", "candidat");
    server.state.add_user(2, "koffi@exemple.ci", "recruteur");
    server.state.seed_api_notifications(vec![
        common::notification(1, 1, false, "2026-03-03"),
        common::notification(2, 1, true, "2026-03-02"),
        common::notification(3, 1, false, "2026-03-01"),
        common::notification(4, 2, false, "2026-03-01"),
    ]);
    server
}

#[tokio::test]
async fn test_list_sends_bearer_token() {
    let server = seeded().await;

    let page = server.notifications("token-1").list(1, 50, false).await.unwrap();

    assert_eq!(page.data.len(), 3);
    assert_eq!(page.meta.total, 3);
    let req = server.state.last_request();
    assert_eq!(req.path, "/api/notifications");
    assert_eq!(req.authorization.as_deref(), Some("Bearer token-1"));
    assert_eq!(req.param("page"), Some("1"));
    assert_eq!(req.param("limit"), Some("50"));
}

#[tokio::test]
async fn test_list_unread_only_and_paging() {
    let server = seeded().await;
    let api = server.notifications("token-1");

    let unread = api.list(1, 50, true).await.unwrap();
    assert!(unread.data.iter().all(|n| !n.read));
    assert_eq!(server.state.last_request().param("unread"), Some("true"));

    let second = api.list(2, 2, false).await.unwrap();
    assert_eq!(second.data.len(), 1);
    assert!(second.meta.has_prev);
    assert!(!second.meta.has_next);
}

#[tokio::test]
async fn test_token_less_client_never_calls_the_api() {
    let server = seeded().await;
    let api = NotificationApi::new(ApiClient::new(server.base_url.clone()));

    assert_eq!(api.list(1, 20, false).await.unwrap_err().kind, AppErrorKind::Unauthorized);
    assert_eq!(api.unread_count().await.unwrap_err().kind, AppErrorKind::Unauthorized);
    assert_eq!(
        api.mark_as_read(&RecordId::new("1")).await.unwrap_err().kind,
        AppErrorKind::Unauthorized
    );
    assert_eq!(api.mark_all_as_read().await.unwrap_err().kind, AppErrorKind::Unauthorized);
    assert_eq!(server.state.request_count(), 0);
}

#[tokio::test]
async fn test_rejected_token_is_unauthorized() {
    let server = seeded().await;

    let err = server
        .notifications("expired")
        .unread_count()
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Token invalide ou expiré");
}

#[tokio::test]
async fn test_unread_count_and_mark_read() {
    let server = seeded().await;
    let api = server.notifications("token-1");

    assert_eq!(api.unread_count().await.unwrap(), 2);

    api.mark_as_read(&RecordId::new("1")).await.unwrap();
    let req = server.state.last_request();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/api/notifications/1/read");
    assert_eq!(api.unread_count().await.unwrap(), 1);

    api.mark_all_as_read().await.unwrap();
    assert_eq!(server.state.last_request().path, "/api/notifications/read-all");
    assert_eq!(api.unread_count().await.unwrap(), 0);

    // Another user's notification is untouched.
    let other = server.notifications("token-2");
    assert_eq!(other.unread_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_only_own_notification() {
    let server = seeded().await;
    let api = server.notifications("token-1");

    api.delete(&RecordId::new("3")).await.unwrap();
    assert_eq!(server.state.api_notifications().len(), 3);

    let err = api.delete(&RecordId::new("4")).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_preferences_fill_missing_fields() {
    let server = seeded().await;
    let api = server.notifications("token-1");

    let prefs = api.preferences().await.unwrap();
    assert!(prefs.email);
    assert!(prefs.application_updates);
    assert!(!prefs.newsletter);

    let wanted = NotificationPreferences {
        newsletter: true,
        ..prefs
    };
    let saved = api.update_preferences(&wanted).await.unwrap();
    assert_eq!(saved, wanted);
    assert_eq!(server.state.last_request().method, "PUT");
}
