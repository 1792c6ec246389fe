//! Rule-based triage and duplicate detection for support incidents.
//!
//! Three stateless components compose into a pipeline that runs on every
//! new-incident submission:
//!
//! - [`text`] — tokenization, keyword extraction, and text similarity
//! - [`triage`] — priority classification and resolver-team routing
//! - [`processing`] — duplicate detection against recent open incidents,
//!   and the submission pipeline that ties everything together
//!
//! Persistence lives behind the [`state::IncidentStore`] trait; the engine
//! only issues bounded read queries against it and returns decisions for
//! the caller to persist.

pub mod config;
pub mod error;
pub mod models;
pub mod processing;
pub mod state;
pub mod text;
pub mod triage;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::{
    DuplicateCheckResult, IncidentDraft, IncidentRecord, IncidentStatus, Journey, Platform,
    Priority, SimilarityCandidate, Team, TriageResult,
};
pub use processing::{DuplicateDetector, TriageOutcome, TriagePipeline};
pub use state::{InMemoryStore, IncidentStore};
pub use triage::{assign_team, predict_priority};
