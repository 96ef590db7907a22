use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use validator::Validate;

use crate::core::salary::offered_salary;
use crate::error::MatchError;

/// Home location of a candidate
///
/// Either part may be missing; a missing part never matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            state: Some(state.into()),
        }
    }
}

/// Candidate profile with skills, experience and expectations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "experienceYears", alias = "experience", default)]
    pub experience_years: f64,
    #[serde(default)]
    pub location: Location,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(rename = "expectedSalary")]
    pub expected_salary: f64,
}

/// Offered salary, as a single figure, a numeric range or free text
///
/// Text such as `"$90k - $120k"` is parsed on demand by [`Salary::offered`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salary {
    Amount(f64),
    Range { min: f64, max: f64 },
    Text(String),
}

impl Salary {
    /// The offered figure; the midpoint for ranges, `None` if unparsable
    pub fn offered(&self) -> Option<f64> {
        offered_salary(self)
    }
}

/// A job opening
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobPosting {
    pub id: u64,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub salary: Salary,
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "experienceYears", alias = "experience", default)]
    pub experience_years: f64,
    #[serde(rename = "type", alias = "jobType", default)]
    pub job_type: String,
    #[serde(default)]
    pub remote: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The externally supplied data set: one profile and the postings to match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobBoard {
    #[validate(nested)]
    pub profile: CandidateProfile,
    #[validate(nested)]
    #[serde(default)]
    pub postings: Vec<JobPosting>,
}

impl JobBoard {
    /// Parse and validate a board from JSON text
    pub fn from_json(json: &str) -> Result<Self, MatchError> {
        let board: JobBoard = serde_json::from_str(json)?;
        board.validate()?;
        Ok(board)
    }

    /// Read, parse and validate a board file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MatchError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let board = Self::from_json(&json)?;

        tracing::info!(
            "Loaded job board from {} ({} postings)",
            path.display(),
            board.postings.len()
        );

        Ok(board)
    }
}

/// Structured search filters; `None` or an empty string matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(rename = "jobType", default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remote: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        [&self.job_type, &self.location, &self.remote]
            .iter()
            .all(|f| f.as_deref().map_or(true, str::is_empty))
    }
}

/// Per-component scores for one profile/posting pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    #[serde(rename = "matchScore")]
    pub overall: u8,
    #[serde(rename = "skillMatchScore")]
    pub skills: f64,
    #[serde(rename = "experienceMatchScore")]
    pub experience: f64,
    #[serde(rename = "locationMatchScore")]
    pub location: f64,
    #[serde(rename = "salaryMatchScore")]
    pub salary: f64,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// Ranked recommendation for a single posting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "jobId")]
    pub job_id: u64,
    pub title: String,
    pub company: String,
    #[serde(flatten)]
    pub breakdown: MatchBreakdown,
    #[serde(rename = "matchReasons")]
    pub match_reasons: BTreeMap<String, String>,
}

/// A required skill the candidate does not cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub demand: usize,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.salary
    }

    /// Reject negative or non-finite weights and weights not summing to 1
    pub fn ensure_valid(&self) -> Result<(), MatchError> {
        let parts = [self.skills, self.experience, self.location, self.salary];
        if parts.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MatchError::InvalidWeights(format!(
                "weights must be finite and non-negative: {:?}",
                self
            )));
        }
        if (self.sum() - 1.0).abs() > 1e-6 {
            return Err(MatchError::InvalidWeights(format!(
                "weights must sum to 1.0, got {}",
                self.sum()
            )));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.3,
            location: 0.2,
            salary: 0.1,
        }
    }
}
