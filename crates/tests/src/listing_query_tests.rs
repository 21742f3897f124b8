use crate::common;
use client::ListQuery;
use pretty_assertions::assert_eq;
use shared_types::{OpportunityKind, RecordId};

fn seed_offers(server: &common::TestServer) {
    server.state.seed(
        "offers",
        vec![
            common::offer(1, "Développeur Rust", 7, true, "2026-01-10T08:00:00Z"),
            common::offer(2, "Comptable senior", 7, false, "2026-02-10T08:00:00Z"),
            common::offer(3, "Développeuse mobile", 8, true, "2026-03-10T08:00:00Z"),
        ],
    );
}

#[tokio::test]
async fn test_active_offers_newest_first() {
    let server = common::start_server().await;
    seed_offers(&server);

    let offers = server.data().list_offers(&ListQuery::active()).await.unwrap();

    let titles: Vec<&str> = offers.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(titles, vec!["Développeuse mobile", "Développeur Rust"]);

    let req = server.state.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/offers");
    assert_eq!(req.param("isActive"), Some("true"));
    assert_eq!(req.param("_sort"), Some("createdAt"));
    assert_eq!(req.param("_order"), Some("desc"));
}

#[tokio::test]
async fn test_title_search_is_trimmed_and_sent_as_title_like() {
    let server = common::start_server().await;
    seed_offers(&server);

    let query = ListQuery {
        title_like: Some("  développeu ".into()),
        ..ListQuery::active()
    };
    let offers = server.data().list_offers(&query).await.unwrap();

    assert_eq!(offers.len(), 2);
    assert_eq!(server.state.last_request().param("title_like"), Some("développeu"));
}

#[tokio::test]
async fn test_blank_title_search_is_not_sent() {
    let server = common::start_server().await;
    seed_offers(&server);

    let query = ListQuery {
        title_like: Some("   ".into()),
        ..ListQuery::active()
    };
    server.data().list_offers(&query).await.unwrap();

    assert_eq!(server.state.last_request().param("title_like"), None);
}

#[tokio::test]
async fn test_pagination_params() {
    let server = common::start_server().await;
    seed_offers(&server);

    let offers = server
        .data()
        .list_offers(&ListQuery::active().page(2, 1))
        .await
        .unwrap();

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].id, RecordId::new("1"));
    let req = server.state.last_request();
    assert_eq!(req.param("_page"), Some("2"));
    assert_eq!(req.param("_limit"), Some("1"));
}

#[tokio::test]
async fn test_recruiter_query_includes_unpublished() {
    let server = common::start_server().await;
    seed_offers(&server);

    let summaries = server
        .data()
        .list_summaries(OpportunityKind::Offre, &ListQuery::for_recruiter(RecordId::new("7")))
        .await
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert!(summaries.iter().any(|s| !s.is_active));
    let req = server.state.last_request();
    assert_eq!(req.param("recruiterId"), Some("7"));
    assert_eq!(req.param("isActive"), None);
}

#[tokio::test]
async fn test_summaries_read_the_kind_collection() {
    let server = common::start_server().await;
    server.state.seed(
        "scholarships",
        vec![common::listing(4, "Bourse d'excellence", 7)],
    );

    let summaries = server
        .data()
        .list_summaries(OpportunityKind::Bourse, &ListQuery::active())
        .await
        .unwrap();

    assert_eq!(server.state.last_request().path, "/scholarships");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].kind, OpportunityKind::Bourse);
    assert_eq!(summaries[0].organization, "Fondation Orange");
}

#[tokio::test]
async fn test_consultation_summary_uses_client_as_organization() {
    let server = common::start_server().await;
    server.state.seed(
        "consultations",
        vec![common::listing(9, "Audit énergétique", 7)],
    );

    let summaries = server
        .data()
        .list_summaries(OpportunityKind::Consultation, &ListQuery::active())
        .await
        .unwrap();

    assert_eq!(summaries[0].organization, "Ministère de l'Économie");
}

#[tokio::test]
async fn test_blog_search() {
    let server = common::start_server().await;
    server.state.seed(
        "blog",
        vec![
            serde_json::json!({ "id": 1, "title": "Réussir son entretien", "content": "...", "createdAt": "2026-01-01" }),
            serde_json::json!({ "id": 2, "title": "Trouver une bourse", "content": "...", "createdAt": "2026-02-01" }),
        ],
    );

    let posts = server.data().list_posts(Some("bourse")).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Trouver une bourse");

    let all = server.data().list_posts(None).await.unwrap();
    assert_eq!(all[0].id, RecordId::new("2"));
    assert_eq!(server.state.last_request().param("title_like"), None);
}
