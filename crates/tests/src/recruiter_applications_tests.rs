use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{OpportunityKind, RecordId};

#[tokio::test]
async fn test_received_applications_across_kinds() {
    let server = common::start_server().await;
    server.state.seed(
        "offers",
        vec![
            common::offer(1, "Développeur Rust", 7, true, "2026-01-01"),
            common::offer(3, "Comptable", 8, true, "2026-01-01"),
        ],
    );
    server
        .state
        .seed("scholarships", vec![common::listing(2, "Bourse Master", 7)]);
    server.state.seed(
        "applications",
        vec![
            common::application(10, 20, 1, "offre", "en_attente", "2026-02-01"),
            common::application(11, 21, 2, "bourse", "examinee", "2026-02-03"),
            // Another recruiter's offer.
            common::application(12, 22, 3, "offre", "en_attente", "2026-02-04"),
            // Same id as the recruiter's scholarship, but an offer.
            common::application(13, 23, 2, "offre", "en_attente", "2026-02-05"),
        ],
    );

    let received = server
        .data()
        .applications_for_recruiter(&RecordId::new("7"))
        .await
        .unwrap();

    let ids: Vec<&str> = received.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["11", "10"]);
    assert_eq!(received[0].opportunity_type, OpportunityKind::Bourse);

    let application_queries: Vec<_> = server
        .state
        .requests()
        .into_iter()
        .filter(|r| r.path == "/applications")
        .collect();
    assert_eq!(application_queries.len(), 2);
    assert_eq!(application_queries[0].param("opportunityType"), Some("offre"));
    assert_eq!(application_queries[0].params("opportunityId"), vec!["1"]);
}

#[tokio::test]
async fn test_recruiter_without_listings_queries_no_applications() {
    let server = common::start_server().await;
    server.state.seed(
        "applications",
        vec![common::application(10, 20, 1, "offre", "en_attente", "2026-02-01")],
    );

    let received = server
        .data()
        .applications_for_recruiter(&RecordId::new("7"))
        .await
        .unwrap();

    assert!(received.is_empty());
    assert!(server
        .state
        .requests()
        .iter()
        .all(|r| r.path != "/applications"));
    assert_eq!(server.state.request_count(), 4);
}

#[tokio::test]
async fn test_several_listings_of_one_kind_are_queried_together() {
    let server = common::start_server().await;
    server.state.seed(
        "offers",
        vec![
            common::offer(1, "Développeur Rust", 7, true, "2026-01-01"),
            common::offer(2, "Développeur Go", 7, false, "2026-01-02"),
        ],
    );
    server.state.seed(
        "applications",
        vec![
            common::application(10, 20, 1, "offre", "en_attente", "2026-02-01"),
            common::application(11, 20, 2, "offre", "entretien", "2026-02-02"),
        ],
    );

    let received = server
        .data()
        .applications_for_recruiter(&RecordId::new("7"))
        .await
        .unwrap();

    assert_eq!(received.len(), 2);
    let query = server.state.last_request();
    let mut ids = query.params("opportunityId");
    ids.sort();
    assert_eq!(ids, vec!["1", "2"]);
}
