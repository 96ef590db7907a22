use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::{RecommendRequest, ScoringWeights, SearchFilters};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_salary_weight")]
    pub salary: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            experience: default_experience_weight(),
            location: default_location_weight(),
            salary: default_salary_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skills: config.skills,
            experience: config.experience,
            location: config.location,
            salary: config.salary,
        }
    }
}

fn default_skills_weight() -> f64 { 0.4 }
fn default_experience_weight() -> f64 { 0.3 }
fn default_location_weight() -> f64 { 0.2 }
fn default_salary_weight() -> f64 { 0.1 }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub min_score: u8,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub remote: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            min_score: 0,
            job_type: None,
            location: None,
            remote: None,
        }
    }
}

impl SearchSettings {
    /// Build a recommendation request for `query` from the configured filters
    pub fn to_request(&self, query: impl Into<String>) -> RecommendRequest {
        RecommendRequest {
            query: query.into(),
            filters: SearchFilters {
                job_type: self.job_type.clone(),
                location: self.location.clone(),
                remote: self.remote.clone(),
            },
            limit: self.limit,
            min_score: self.min_score,
        }
    }
}

fn default_limit() -> usize { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_board_path")]
    pub board_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { board_path: default_board_path() }
    }
}

fn default_board_path() -> PathBuf { PathBuf::from("demos/board.json") }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with JOBMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., JOBMATCH_SEARCH__LIMIT -> search.limit
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("JOBMATCH")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
