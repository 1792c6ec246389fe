use crate::config::DeduplicationConfig;
use crate::error::Result;
use crate::models::{DuplicateCheckResult, IncidentDraft, IncidentRecord, TriageResult};
use crate::processing::DuplicateDetector;
use crate::state::IncidentStore;
use crate::triage::{assign_team, predict_priority};
use std::sync::Arc;
use validator::Validate;

/// Everything the engine decides about one submission
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    /// Predicted priority and resolver team
    pub triage: TriageResult,

    /// Duplicate check against recent open incidents on the same platform
    pub duplicates: DuplicateCheckResult,
}

/// Submission pipeline: duplicate check plus classification and routing.
///
/// The pipeline holds no mutable state; concurrent submissions run without
/// coordination. The store is the only shared resource and is queried
/// read-only during triage.
pub struct TriagePipeline {
    store: Arc<dyn IncidentStore>,
    detector: DuplicateDetector,
    config: DeduplicationConfig,
}

impl TriagePipeline {
    pub fn new(store: Arc<dyn IncidentStore>, config: DeduplicationConfig) -> Self {
        let detector = DuplicateDetector::new(store.clone(), config.candidate_window)
            .with_result_limit(config.max_results);
        Self {
            store,
            detector,
            config,
        }
    }

    /// Get a reference to the incident store
    pub fn store(&self) -> &Arc<dyn IncidentStore> {
        &self.store
    }

    /// Triage a submission without persisting anything.
    ///
    /// The duplicate check is advisory: the caller may ask the submitter
    /// to confirm before admitting. Priority and team are always computed
    /// regardless of duplicate status.
    pub async fn triage(&self, draft: &IncidentDraft) -> Result<TriageOutcome> {
        draft.validate()?;

        let duplicates = self
            .detector
            .check_for_duplicates(
                &draft.title,
                &draft.description,
                draft.platform,
                self.config.similarity_threshold,
            )
            .await?;

        let priority = predict_priority(
            draft.platform,
            draft.journey,
            draft.clients_affected,
            &draft.description,
        );
        let team = assign_team(draft.platform, draft.journey, &draft.description);

        tracing::info!(
            platform = %draft.platform,
            journey = %draft.journey,
            clients_affected = draft.clients_affected,
            priority = %priority,
            team = %team,
            is_duplicate = duplicates.is_duplicate,
            "Incident triaged"
        );

        Ok(TriageOutcome {
            triage: TriageResult { priority, team },
            duplicates,
        })
    }

    /// Triage a submission and persist the resulting incident
    pub async fn admit(&self, draft: IncidentDraft, reporter: &str) -> Result<IncidentRecord> {
        let outcome = self.triage(&draft).await?;

        let record = IncidentRecord::from_draft(&draft, &outcome.triage, reporter);
        self.store.save_incident(&record).await?;

        tracing::info!(
            incident_id = %record.id,
            priority = %record.priority,
            team = %record.assigned_team,
            "Incident admitted"
        );

        Ok(record)
    }
}
