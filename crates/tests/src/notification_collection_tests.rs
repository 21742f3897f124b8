use crate::common;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{unread_total, RecordId};

fn seed(server: &common::TestServer) {
    server.state.seed(
        "notifications",
        vec![
            common::notification(1, 5, false, "2026-03-01"),
            common::notification(2, 5, true, "2026-03-02"),
            common::notification(3, 6, false, "2026-03-03"),
        ],
    );
}

#[tokio::test]
async fn test_user_notifications_newest_first() {
    let server = common::start_server().await;
    seed(&server);

    let list = server
        .data()
        .list_user_notifications(&RecordId::new("5"))
        .await
        .unwrap();

    let ids: Vec<&str> = list.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(unread_total(&list), 1);
    assert_eq!(list[0].kind, "application");
    assert_eq!(list[0].link.as_deref(), Some("/candidat/candidatures"));
}

#[tokio::test]
async fn test_mark_read_patches_the_record() {
    let server = common::start_server().await;
    seed(&server);

    let updated = server
        .data()
        .mark_notification_read(&RecordId::new("1"))
        .await
        .unwrap();

    assert!(updated.read);
    let req = server.state.last_request();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/notifications/1");
    assert_eq!(req.body, Some(json!({ "read": true })));
}

#[tokio::test]
async fn test_delete_notification() {
    let server = common::start_server().await;
    seed(&server);

    server
        .data()
        .delete_notification(&RecordId::new("3"))
        .await
        .unwrap();

    assert_eq!(server.state.items("notifications").len(), 2);
}
