//! Job Match - candidate-to-job match scoring and job search
//!
//! This library scores how well a candidate profile fits a job posting and
//! searches a list of postings by free text and structured filters. All
//! scoring and search functions are pure; callers supply the data.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use crate::core::{Matcher, compute_overall_match, search, skill_gaps};
pub use error::MatchError;
pub use models::{CandidateProfile, JobBoard, JobPosting, Location, Salary, ScoringWeights, SearchFilters, RecommendationSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::default();
        assert_eq!(*matcher.weights(), ScoringWeights::default());
    }
}
