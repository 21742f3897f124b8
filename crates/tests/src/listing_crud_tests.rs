use crate::common;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Offer, OpportunityKind, RecordId, Scholarship};

fn new_offer(title: &str) -> Offer {
    Offer {
        title: title.into(),
        company: "Wave".into(),
        sector: "Fintech".into(),
        contract_type: "CDD".into(),
        description: "Mission de six mois.".into(),
        recruiter_id: Some(RecordId::new("7")),
        is_active: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_get_missing_record_is_not_found() {
    let server = common::start_server().await;

    let err = server
        .data()
        .get::<Offer>(&RecordId::new("999"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_summary_by_kind() {
    let server = common::start_server().await;
    server
        .state
        .seed("financements", vec![common::listing(5, "Fonds jeunes entrepreneurs", 7)]);

    let summary = server
        .data()
        .get_summary(OpportunityKind::Financement, &RecordId::new("5"))
        .await
        .unwrap();

    assert_eq!(server.state.last_request().path, "/financements/5");
    assert_eq!(summary.title, "Fonds jeunes entrepreneurs");
    assert_eq!(summary.kind, OpportunityKind::Financement);
}

#[tokio::test]
async fn test_create_drops_empty_id_and_stamps_created_at() {
    let server = common::start_server().await;

    let created = server.data().create(&new_offer("Chef de projet")).await.unwrap();

    assert!(!created.id.is_empty());
    let req = server.state.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/offers");
    let body = req.body.unwrap();
    assert!(body.get("id").is_none());
    assert!(body["createdAt"].is_string());
    assert_eq!(body["recruiterId"], json!("7"));
    assert_eq!(server.state.items("offers").len(), 1);
}

#[tokio::test]
async fn test_create_with_missing_fields_sends_nothing() {
    let server = common::start_server().await;
    let mut offer = new_offer("  ");
    offer.company = String::new();

    let err = server.data().create(&offer).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("title"));
    assert!(err.field_errors.contains_key("organization"));
    assert!(!err.field_errors.contains_key("description"));
    assert_eq!(server.state.request_count(), 0);
}

#[tokio::test]
async fn test_update_replaces_the_record() {
    let server = common::start_server().await;
    server.state.seed(
        "offers",
        vec![common::offer(1, "Stagiaire marketing", 7, true, "2026-01-01")],
    );
    let mut offer: Offer = server.data().get(&RecordId::new("1")).await.unwrap();
    offer.title = "Stagiaire marketing digital".into();

    let updated = server.data().update(&offer.id.clone(), &offer).await.unwrap();

    assert_eq!(updated.title, "Stagiaire marketing digital");
    let req = server.state.last_request();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, "/offers/1");
    assert_eq!(server.state.items("offers")[0]["title"], "Stagiaire marketing digital");
}

#[tokio::test]
async fn test_toggle_publication() {
    let server = common::start_server().await;
    server
        .state
        .seed("scholarships", vec![common::listing(3, "Bourse Erasmus", 7)]);

    let summary = server
        .data()
        .set_active_by_kind(OpportunityKind::Bourse, &RecordId::new("3"), false)
        .await
        .unwrap();

    assert!(!summary.is_active);
    let req = server.state.last_request();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.body, Some(json!({ "isActive": false })));

    let reloaded: Scholarship = server.data().get(&RecordId::new("3")).await.unwrap();
    assert!(!reloaded.is_active);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let server = common::start_server().await;
    server
        .state
        .seed("consultations", vec![common::listing(2, "Étude de marché", 7)]);
    let data = server.data();

    data.delete_by_kind(OpportunityKind::Consultation, &RecordId::new("2"))
        .await
        .unwrap();
    assert!(server.state.items("consultations").is_empty());

    let err = data
        .delete_by_kind(OpportunityKind::Consultation, &RecordId::new("2"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_id_cannot_smuggle_a_query() {
    let server = common::start_server().await;
    server
        .state
        .seed("offers", vec![common::listing(1, "Comptable", 7)]);

    let err = server
        .data()
        .delete::<Offer>(&RecordId::new("1?recruiterId=9"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    let req = server.state.last_request();
    assert_eq!(req.path, "/offers/1%3FrecruiterId%3D9");
    assert!(req.query.is_empty());
    assert_eq!(server.state.items("offers").len(), 1);
}

#[tokio::test]
async fn test_id_cannot_leave_its_collection() {
    let server = common::start_server().await;
    server
        .state
        .seed("applications", vec![common::application(1, 12, 3, "offre", "en_attente", "2026-03-01T10:00:00Z")]);

    let err = server
        .data()
        .delete::<Offer>(&RecordId::new("../applications/1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(server.state.last_request().path, "/offers/..%2Fapplications%2F1");
    assert_eq!(server.state.items("applications").len(), 1);
}

#[tokio::test]
async fn test_blog_post_by_id() {
    let server = common::start_server().await;
    server.state.seed(
        "blog",
        vec![json!({ "id": 3, "title": "Préparer son CV", "content": "Soignez la mise en page.", "author": "Équipe" })],
    );

    let post = server.data().get_post(&RecordId::new("3")).await.unwrap();
    assert_eq!(post.title, "Préparer son CV");
    assert_eq!(post.author.as_deref(), Some("Équipe"));

    let err = server.data().get_post(&RecordId::new("4")).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
