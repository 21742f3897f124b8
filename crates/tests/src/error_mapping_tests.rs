use crate::common;
use axum::http::StatusCode;
use client::{ApiClient, DataService, ListQuery};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, RecordId};

#[tokio::test]
async fn test_server_error_keeps_message() {
    let server = common::start_server().await;
    server
        .state
        .respond_next(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":"boom"}"#);

    let err = server
        .data()
        .list_offers(&ListQuery::active())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.message, "boom");
}

#[tokio::test]
async fn test_unparseable_body_is_decode() {
    let server = common::start_server().await;
    server
        .state
        .respond_next(StatusCode::OK, "<html>maintenance</html>");

    let err = server
        .data()
        .list_posts(None)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn test_forbidden_and_unprocessable() {
    let server = common::start_server().await;

    server.state.respond_next(StatusCode::FORBIDDEN, "");
    let err = server
        .data()
        .get_application(&RecordId::new("1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "HTTP 403");

    server.state.respond_next(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"message":"invalide","errors":{"title":"trop long"}}"#,
    );
    let err = server
        .data()
        .get_application(&RecordId::new("1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors.get("title").map(String::as_str), Some("trop long"));
}

#[tokio::test]
async fn test_unreachable_backend_is_network() {
    let base_url = common::unreachable_base_url().await;
    let data = DataService::new(ApiClient::new(base_url));

    let err = data.list_offers(&ListQuery::active()).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert!(err.status_code_u16().is_none());
}

#[tokio::test]
async fn test_unknown_collection_is_not_found() {
    let server = common::start_server().await;

    let err = server
        .api()
        .get_json::<Vec<serde_json::Value>>("candidats", &Vec::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
}
