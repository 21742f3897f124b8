use crate::common;
use client::ApplicationQuery;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ApplicationDraft, ApplicationStatus, AppErrorKind, OpportunityKind, RecordId};

fn draft(letter: &str, cv_url: Option<&str>) -> ApplicationDraft {
    ApplicationDraft {
        opportunity_id: "1".into(),
        opportunity_type: Some(OpportunityKind::Offre),
        opportunity_title: Some("Développeur Rust".into()),
        applicant_name: Some("Awa Diallo".into()),
        cover_letter: letter.into(),
        cv_url: cv_url.map(str::to_string),
    }
}

const LETTER: &str = "Je suis très motivée par ce poste de développeuse.";

#[tokio::test]
async fn test_empty_cover_letter_sends_nothing() {
    let server = common::start_server().await;

    let err = server
        .data()
        .submit_application(&draft("   ", None), &RecordId::new("1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("cover_letter"));
    assert_eq!(server.state.request_count(), 0);
}

#[tokio::test]
async fn test_short_cover_letter_sends_nothing() {
    let server = common::start_server().await;

    let err = server
        .data()
        .submit_application(&draft("Bonjour", None), &RecordId::new("1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(server.state.request_count(), 0);
}

#[tokio::test]
async fn test_invalid_cv_url_sends_nothing() {
    let server = common::start_server().await;

    let err = server
        .data()
        .submit_application(&draft(LETTER, Some("mon-cv")), &RecordId::new("1"))
        .await
        .unwrap_err();

    assert!(err.field_errors.contains_key("cv_url"));
    assert_eq!(server.state.request_count(), 0);
}

#[tokio::test]
async fn test_submission_starts_pending() {
    let server = common::start_server().await;

    let created = server
        .data()
        .submit_application(&draft(LETTER, Some("   ")), &RecordId::new("12"))
        .await
        .unwrap();

    assert_eq!(created.status, ApplicationStatus::EnAttente);
    assert_eq!(created.user_id, RecordId::new("12"));
    assert_eq!(created.opportunity_type, OpportunityKind::Offre);

    let req = server.state.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/applications");
    let body = req.body.unwrap();
    assert_eq!(body["status"], json!("en_attente"));
    assert_eq!(body["opportunityType"], json!("offre"));
    assert_eq!(body["userId"], json!("12"));
    assert!(body["createdAt"].is_string());
    assert!(body.get("cvUrl").is_none());
}

#[tokio::test]
async fn test_my_applications_are_filtered_by_user() {
    let server = common::start_server().await;
    server.state.seed(
        "applications",
        vec![
            common::application(1, 12, 1, "offre", "en_attente", "2026-01-01"),
            common::application(2, 13, 1, "offre", "refusee", "2026-01-02"),
            common::application(3, 12, 4, "bourse", "entretien", "2026-01-03"),
        ],
    );

    let mine = server
        .data()
        .list_applications(&ApplicationQuery::for_user(RecordId::new("12")))
        .await
        .unwrap();

    let ids: Vec<&str> = mine.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1"]);
    assert_eq!(mine[0].status, ApplicationStatus::Entretien);
    assert_eq!(server.state.last_request().param("userId"), Some("12"));
}

#[tokio::test]
async fn test_status_update_is_a_patch() {
    let server = common::start_server().await;
    server.state.seed(
        "applications",
        vec![common::application(1, 12, 1, "offre", "en_attente", "2026-01-01")],
    );

    let updated = server
        .data()
        .update_application_status(&RecordId::new("1"), ApplicationStatus::Acceptee)
        .await
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Acceptee);
    assert!(updated.updated_at.is_some());
    let req = server.state.last_request();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/applications/1");
    assert_eq!(req.body.unwrap()["status"], json!("acceptee"));
}

#[tokio::test]
async fn test_withdraw_removes_the_application() {
    let server = common::start_server().await;
    server.state.seed(
        "applications",
        vec![common::application(1, 12, 1, "offre", "en_attente", "2026-01-01")],
    );

    server
        .data()
        .withdraw_application(&RecordId::new("1"))
        .await
        .unwrap();

    assert!(server.state.items("applications").is_empty());
    let err = server
        .data()
        .get_application(&RecordId::new("1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
