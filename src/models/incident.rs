use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

/// Backend platform an incident originates from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display)]
pub enum Platform {
    Additiv,
    Avaloq,
}

/// Customer-facing workflow affected by an incident
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display)]
pub enum Journey {
    Login,
    Transfer,
    Payment,
    #[strum(serialize = "Balance View")]
    #[serde(rename = "Balance View")]
    BalanceView,
    #[strum(serialize = "Account Access")]
    #[serde(rename = "Account Access")]
    AccountAccess,
    #[strum(serialize = "Data Sync")]
    #[serde(rename = "Data Sync")]
    DataSync,
    Reporting,
    Other,
}

/// Predicted priority level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Resolver team an incident is routed to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display)]
pub enum Team {
    #[strum(serialize = "LCM")]
    #[serde(rename = "LCM")]
    Lcm,
    DevOps,
    #[strum(serialize = "Additiv LCM")]
    #[serde(rename = "Additiv LCM")]
    AdditivLcm,
    #[strum(serialize = "Avaloq Support")]
    #[serde(rename = "Avaloq Support")]
    AvaloqSupport,
    /// Routing fallback for platforms without a dedicated owner
    #[strum(serialize = "Platform Support")]
    #[serde(rename = "Platform Support")]
    PlatformSupport,
}

/// Lifecycle status of a persisted incident
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display, Default)]
pub enum IncidentStatus {
    #[default]
    Open,
    #[strum(serialize = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

/// A new-incident submission, before triage.
///
/// Immutable for the duration of one triage call; field bounds mirror what
/// the submission form enforces upstream.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IncidentDraft {
    /// Human-readable title
    #[validate(length(min = 10, max = 200))]
    pub title: String,

    /// Detailed description
    #[validate(length(min = 20, max = 2000))]
    pub description: String,

    /// Originating platform
    pub platform: Platform,

    /// Affected customer journey
    pub journey: Journey,

    /// Number of clients impacted
    #[validate(range(min = 1, max = 10000))]
    pub clients_affected: u32,
}

/// Output of one triage call. Recomputed on every call, never cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriageResult {
    pub priority: Priority,
    pub team: Team,
}

/// A persisted incident as seen by this engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Unique identifier
    pub id: Uuid,

    /// Human-readable title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Originating platform
    pub platform: Platform,

    /// Affected customer journey
    pub journey: Journey,

    /// Number of clients impacted
    pub clients_affected: u32,

    /// Assigned priority
    pub priority: Priority,

    /// Assigned resolver team
    pub assigned_team: Team,

    /// Current status
    pub status: IncidentStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Resolution timestamp
    pub resolved_at: Option<DateTime<Utc>>,

    /// Who reported the incident
    pub reporter: String,
}

impl IncidentRecord {
    /// Build a record from a triaged draft
    pub fn from_draft(draft: &IncidentDraft, triage: &TriageResult, reporter: &str) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            platform: draft.platform,
            journey: draft.journey,
            clients_affected: draft.clients_affected,
            priority: triage.priority,
            assigned_team: triage.team,
            status: IncidentStatus::Open,
            created_at: now,
            updated_at: now,
            resolved_at: None,
            reporter: reporter.to_string(),
        }
    }

    /// Check if the incident is still an open duplicate candidate
    pub fn is_open(&self) -> bool {
        self.status == IncidentStatus::Open
    }

    /// Mark the incident resolved
    pub fn resolve(&mut self) {
        let now = Utc::now();
        self.status = IncidentStatus::Resolved;
        self.resolved_at = Some(now);
        self.updated_at = now;
    }
}

/// An existing incident scored against a candidate submission.
///
/// Produced fresh per query; holds a read-only snapshot of the stored
/// incident, never persisted by this engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityCandidate {
    /// Identifier of the matched incident
    pub incident_id: Uuid,

    /// Snapshot of the matched incident
    pub incident: IncidentRecord,

    /// Similarity score in [0, 1]
    pub score: f64,
}

/// Result of a duplicate check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateCheckResult {
    /// Whether at least one candidate cleared the threshold
    pub is_duplicate: bool,

    /// Candidates above the threshold, descending by score
    pub similar_incidents: Vec<SimilarityCandidate>,
}
