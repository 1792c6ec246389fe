use crate::error::Result;
use crate::models::{DuplicateCheckResult, Platform, SimilarityCandidate};
use crate::state::IncidentStore;
use crate::text;
use std::cmp::Ordering;
use std::sync::Arc;

/// Recent open incidents compared against per check
pub const DEFAULT_CANDIDATE_WINDOW: usize = 50;

/// Similar incidents returned per check
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Minimum score for a candidate to count as a duplicate
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Detects potential duplicate incidents by fuzzy text matching against a
/// bounded window of recent open incidents on the same platform.
///
/// Stateless apart from the store handle; every call recomputes from a
/// fresh query, so stale results cannot accumulate.
pub struct DuplicateDetector {
    store: Arc<dyn IncidentStore>,
    window: usize,
    result_limit: usize,
}

impl DuplicateDetector {
    pub fn new(store: Arc<dyn IncidentStore>, window: usize) -> Self {
        Self {
            store,
            window,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Override the number of similar incidents returned per check
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Find open incidents similar to the candidate text.
    ///
    /// Title and description are concatenated into one comparison text on
    /// both sides. Results carry `score >= threshold`, sorted descending
    /// by score; the sort is stable, so equal scores keep the store's
    /// recency order. At most `limit` entries are returned.
    pub async fn find_similar(
        &self,
        title: &str,
        description: &str,
        platform: Platform,
        threshold: f64,
        limit: usize,
    ) -> Result<Vec<SimilarityCandidate>> {
        let candidate_text = format!("{} {}", title, description);

        let existing = self.store.query_open_incidents(platform, self.window).await?;

        let mut similar: Vec<SimilarityCandidate> = Vec::new();
        for incident in existing {
            let existing_text = format!("{} {}", incident.title, incident.description);
            let score = text::calculate_similarity(&candidate_text, &existing_text);

            if score >= threshold {
                similar.push(SimilarityCandidate {
                    incident_id: incident.id,
                    incident,
                    score,
                });
            }
        }

        similar.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        similar.truncate(limit);

        Ok(similar)
    }

    /// Check whether a submission looks like a duplicate.
    ///
    /// Thin composition over [`find_similar`](Self::find_similar) with the
    /// configured result limit.
    pub async fn check_for_duplicates(
        &self,
        title: &str,
        description: &str,
        platform: Platform,
        threshold: f64,
    ) -> Result<DuplicateCheckResult> {
        let similar = self
            .find_similar(title, description, platform, threshold, self.result_limit)
            .await?;

        if !similar.is_empty() {
            tracing::info!(
                platform = %platform,
                candidates = similar.len(),
                top_score = similar[0].score,
                "Potential duplicate incident detected"
            );
        }

        Ok(DuplicateCheckResult {
            is_duplicate: !similar.is_empty(),
            similar_incidents: similar,
        })
    }
}
