use crate::error::{AppError, Result};
use crate::models::{IncidentRecord, Platform, Priority};
use crate::state::{IncidentStore, PriorityCounts};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory incident store (for MVP and testing)
#[derive(Clone)]
pub struct InMemoryStore {
    incidents: Arc<DashMap<Uuid, IncidentRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            incidents: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IncidentStore for InMemoryStore {
    async fn save_incident(&self, incident: &IncidentRecord) -> Result<()> {
        self.incidents.insert(incident.id, incident.clone());
        tracing::debug!(incident_id = %incident.id, "Incident saved");
        Ok(())
    }

    async fn get_incident(&self, id: &Uuid) -> Result<Option<IncidentRecord>> {
        Ok(self.incidents.get(id).map(|entry| entry.clone()))
    }

    async fn update_incident(&self, incident: &IncidentRecord) -> Result<()> {
        if self.incidents.contains_key(&incident.id) {
            self.incidents.insert(incident.id, incident.clone());
            tracing::debug!(incident_id = %incident.id, "Incident updated");
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "Incident {} not found",
                incident.id
            )))
        }
    }

    async fn query_open_incidents(
        &self,
        platform: Platform,
        limit: usize,
    ) -> Result<Vec<IncidentRecord>> {
        let mut incidents: Vec<IncidentRecord> = self
            .incidents
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|incident| incident.platform == platform && incident.is_open())
            .collect();

        // Newest first
        incidents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        incidents.truncate(limit);

        Ok(incidents)
    }

    async fn count_by_priority(&self) -> Result<PriorityCounts> {
        let mut counts = PriorityCounts::default();

        for entry in self.incidents.iter() {
            match entry.value().priority {
                Priority::High => counts.high += 1,
                Priority::Medium => counts.medium += 1,
                Priority::Low => counts.low += 1,
            }
        }

        Ok(counts)
    }
}
