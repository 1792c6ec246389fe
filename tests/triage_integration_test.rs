//! Integration tests for the full submission pipeline:
//! - classification and routing on realistic submissions
//! - duplicate detection against a populated store
//! - platform partitioning and threshold behavior
//! - advisory semantics (triage always runs)

mod common;

use common::{draft, init_tracing, stored_incident};
use incident_triage::{
    config::DeduplicationConfig, DuplicateDetector, InMemoryStore, IncidentStore, Journey,
    Platform, Priority, Team, TriagePipeline,
};
use std::sync::Arc;

async fn pipeline_with(incidents: &[incident_triage::IncidentRecord]) -> TriagePipeline {
    let store = Arc::new(InMemoryStore::new());
    for incident in incidents {
        store.save_incident(incident).await.unwrap();
    }
    TriagePipeline::new(store, DeduplicationConfig::default())
}

#[tokio::test]
async fn test_high_priority_login_outage_routes_to_lcm() {
    init_tracing();
    let pipeline = pipeline_with(&[]).await;

    let submission = draft(
        "Clients locked out of Additiv",
        "Critical authentication failure blocking user access",
        Platform::Additiv,
        Journey::Login,
        15,
    );

    let outcome = pipeline.triage(&submission).await.unwrap();

    assert_eq!(outcome.triage.priority, Priority::High);
    assert_eq!(outcome.triage.team, Team::Lcm);
}

#[tokio::test]
async fn test_performance_keyword_wins_over_platform_routing() {
    init_tracing();
    let pipeline = pipeline_with(&[]).await;

    let submission = draft(
        "Avaloq transfers degraded",
        "Database query timeout affecting transfers",
        Platform::Avaloq,
        Journey::Transfer,
        2,
    );

    let outcome = pipeline.triage(&submission).await.unwrap();
    assert_eq!(outcome.triage.team, Team::DevOps);
}

#[tokio::test]
async fn test_duplicate_detected_on_resubmission() {
    init_tracing();
    let existing = stored_incident(
        "Test incident for unit testing",
        "This is a test incident created for automated testing purposes",
        Platform::Additiv,
    );
    let pipeline = pipeline_with(&[existing.clone()]).await;

    let resubmission = draft(
        "Test incident for unit testing purposes",
        "This is a test incident created for automated testing",
        Platform::Additiv,
        Journey::Other,
        1,
    );

    let outcome = pipeline.triage(&resubmission).await.unwrap();

    assert!(outcome.duplicates.is_duplicate);
    assert_eq!(
        outcome.duplicates.similar_incidents[0].incident_id,
        existing.id
    );
    // Duplicate status never suppresses classification
    assert_eq!(outcome.triage.priority, Priority::Low);
    assert_eq!(outcome.triage.team, Team::AdditivLcm);
}

#[tokio::test]
async fn test_identical_text_on_other_platform_is_not_a_duplicate() {
    init_tracing();
    let existing = stored_incident(
        "Test incident for unit testing",
        "This is a test incident created for automated testing purposes",
        Platform::Additiv,
    );
    let pipeline = pipeline_with(&[existing]).await;

    let submission = draft(
        "Test incident for unit testing",
        "This is a test incident created for automated testing purposes",
        Platform::Avaloq,
        Journey::Other,
        1,
    );

    let outcome = pipeline.triage(&submission).await.unwrap();
    assert!(!outcome.duplicates.is_duplicate);
}

#[tokio::test]
async fn test_admit_makes_incident_a_future_candidate() {
    init_tracing();
    let pipeline = pipeline_with(&[]).await;

    let first = draft(
        "Additiv login timeout error hitting clients",
        "Multiple clients cannot login to Additiv, requests time out",
        Platform::Additiv,
        Journey::Login,
        6,
    );
    let record = pipeline
        .admit(first, "analyst@example.com")
        .await
        .unwrap();

    assert_eq!(record.priority, Priority::High);
    assert_eq!(record.assigned_team, Team::Lcm);
    assert!(record.is_open());

    let second = draft(
        "Additiv login timeout errors hitting clients",
        "Multiple clients cannot login to Additiv, requests time out",
        Platform::Additiv,
        Journey::Login,
        4,
    );
    let outcome = pipeline.triage(&second).await.unwrap();
    assert!(outcome.duplicates.is_duplicate);
}

#[tokio::test]
async fn test_threshold_monotonicity_over_the_same_store() {
    init_tracing();
    let store = Arc::new(InMemoryStore::new());
    let incidents = [
        stored_incident(
            "Similar test incident report",
            "Testing incident for automation on the Additiv stack",
            Platform::Additiv,
        ),
        stored_incident(
            "Additiv login timeout errors",
            "Clients report login timeouts across the Additiv estate",
            Platform::Additiv,
        ),
        stored_incident(
            "Unrelated statement question",
            "Client asks why a statement figure changed between exports",
            Platform::Additiv,
        ),
    ];
    for incident in &incidents {
        store.save_incident(incident).await.unwrap();
    }
    let detector = DuplicateDetector::new(store, 50);

    // Lowering the threshold must never shrink the candidate set
    let mut previous_len = 0usize;
    for threshold in [0.90, 0.60, 0.30, 0.10] {
        let results = detector
            .find_similar(
                "Similar test incident",
                "Testing incident for automation",
                Platform::Additiv,
                threshold,
                10,
            )
            .await
            .unwrap();

        assert!(results.len() >= previous_len);
        assert!(results.iter().all(|c| c.score >= threshold));
        previous_len = results.len();
    }
}

#[tokio::test]
async fn test_validation_failures_surface_before_any_store_query() {
    init_tracing();
    let pipeline = pipeline_with(&[]).await;

    let invalid = draft("short", "too short", Platform::Additiv, Journey::Other, 1);
    let err = pipeline.triage(&invalid).await.unwrap_err();

    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}
