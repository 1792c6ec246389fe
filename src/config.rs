use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Duplicate detection configuration
    #[serde(default)]
    pub deduplication: DeduplicationConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: TRIAGE_)
            .add_source(
                config::Environment::with_prefix("TRIAGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deduplication: DeduplicationConfig::default(),
        }
    }
}

/// Duplicate detection tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeduplicationConfig {
    /// Minimum similarity score for a candidate to count as a duplicate
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// How many recent open incidents to compare against per check
    #[serde(default = "default_candidate_window")]
    pub candidate_window: usize,

    /// Maximum number of similar incidents returned per check
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for DeduplicationConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            candidate_window: default_candidate_window(),
            max_results: default_max_results(),
        }
    }
}

fn default_similarity_threshold() -> f64 {
    0.75
}

fn default_candidate_window() -> usize {
    50
}

fn default_max_results() -> usize {
    5
}
