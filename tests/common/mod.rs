//! Shared helpers for integration tests.

use incident_triage::{
    IncidentDraft, IncidentRecord, Journey, Platform, Priority, Team, TriageResult,
};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "incident_triage=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn draft(
    title: &str,
    description: &str,
    platform: Platform,
    journey: Journey,
    clients_affected: u32,
) -> IncidentDraft {
    IncidentDraft {
        title: title.to_string(),
        description: description.to_string(),
        platform,
        journey,
        clients_affected,
    }
}

pub fn stored_incident(title: &str, description: &str, platform: Platform) -> IncidentRecord {
    let draft = draft(title, description, platform, Journey::Other, 1);
    let triage = TriageResult {
        priority: Priority::Low,
        team: Team::PlatformSupport,
    };
    IncidentRecord::from_draft(&draft, &triage, "fixtures@example.com")
}
