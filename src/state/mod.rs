pub mod store;

pub use store::InMemoryStore;

use crate::error::Result;
use crate::models::{IncidentRecord, Platform};
use async_trait::async_trait;
use uuid::Uuid;

/// Trait for incident storage operations.
///
/// The engine only issues read-only queries during triage; a failed query
/// propagates as-is and the caller must treat the duplicate check as
/// unknown, not as "no duplicates". Retry and deadline policy belong to
/// the caller.
#[async_trait]
pub trait IncidentStore: Send + Sync {
    /// Save an incident
    async fn save_incident(&self, incident: &IncidentRecord) -> Result<()>;

    /// Get an incident by ID
    async fn get_incident(&self, id: &Uuid) -> Result<Option<IncidentRecord>>;

    /// Update an incident
    async fn update_incident(&self, incident: &IncidentRecord) -> Result<()>;

    /// Open incidents on a platform, most recently created first, bounded
    async fn query_open_incidents(
        &self,
        platform: Platform,
        limit: usize,
    ) -> Result<Vec<IncidentRecord>>;

    /// Count incidents per priority level
    async fn count_by_priority(&self) -> Result<PriorityCounts>;
}

/// Incident counts per priority level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}
