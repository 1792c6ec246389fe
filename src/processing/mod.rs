pub mod deduplication;
pub mod pipeline;

pub use deduplication::{
    DuplicateDetector, DEFAULT_CANDIDATE_WINDOW, DEFAULT_RESULT_LIMIT, DEFAULT_THRESHOLD,
};
pub use pipeline::{TriageOutcome, TriagePipeline};
