use std::collections::BTreeMap;

use crate::models::{CandidateProfile, JobPosting, MatchBreakdown, Recommendation, RecommendationSet, ScoringWeights, SearchFilters};
use crate::core::{
    filters::search_iter,
    location::{is_remote, SAME_CITY_SCORE, SAME_STATE_SCORE},
    scoring::calculate_match_breakdown,
};
use crate::error::MatchError;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Free-text query and structured filters
/// 2. Component scoring and weighting
/// 3. Minimum-score cut
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Build a matcher, rejecting invalid weights
    pub fn try_new(weights: ScoringWeights) -> Result<Self, MatchError> {
        weights.ensure_valid()?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Overall match score (0-100) for one posting
    pub fn score(&self, profile: &CandidateProfile, posting: &JobPosting) -> u8 {
        self.breakdown(profile, posting).overall
    }

    pub fn breakdown(&self, profile: &CandidateProfile, posting: &JobPosting) -> MatchBreakdown {
        calculate_match_breakdown(profile, posting, &self.weights)
    }

    /// Search postings and rank the hits for a candidate
    ///
    /// # Arguments
    /// * `profile` - The candidate to match
    /// * `postings` - All postings on the board
    /// * `query` - Free-text query; empty matches everything
    /// * `filters` - Structured filters; unset filters match everything
    /// * `min_score` - Recommendations scoring below this are dropped
    /// * `limit` - Maximum number of recommendations to return
    ///
    /// # Returns
    /// RecommendationSet sorted by score descending; ties keep board order
    pub fn recommend(
        &self,
        profile: &CandidateProfile,
        postings: &[JobPosting],
        query: &str,
        filters: &SearchFilters,
        min_score: u8,
        limit: usize,
    ) -> RecommendationSet {
        let total_candidates = postings.len();

        let mut recommendations: Vec<Recommendation> = search_iter(postings, query, filters)
            .filter_map(|posting| {
                let breakdown = self.breakdown(profile, posting);

                if breakdown.overall >= min_score {
                    let match_reasons = describe_match(profile, posting, &breakdown);
                    Some(Recommendation {
                        job_id: posting.id,
                        title: posting.title.clone(),
                        company: posting.company.clone(),
                        breakdown,
                        match_reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        let total_results = recommendations.len();

        // Stable sort keeps board order for equal scores
        recommendations.sort_by(|a, b| b.breakdown.overall.cmp(&a.breakdown.overall));
        recommendations.truncate(limit);

        tracing::info!(
            "Recommended {} of {} postings ({} matched search)",
            recommendations.len(),
            total_candidates,
            total_results
        );

        RecommendationSet {
            recommendations,
            total_candidates,
            total_results,
            recommended_at: chrono::Utc::now(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Human-readable reasons keyed by score component
fn describe_match(
    profile: &CandidateProfile,
    posting: &JobPosting,
    breakdown: &MatchBreakdown,
) -> BTreeMap<String, String> {
    let mut reasons = BTreeMap::new();

    let skills = if posting.skills.is_empty() {
        "No required skills listed".to_string()
    } else if breakdown.matched_skills.is_empty() {
        format!("None of {} required skills matched", posting.skills.len())
    } else {
        format!(
            "Matched {} of {} required skills: {}",
            breakdown.matched_skills.len(),
            posting.skills.len(),
            breakdown.matched_skills.join(", ")
        )
    };
    reasons.insert("skills".to_string(), skills);

    let location = if is_remote(&posting.location) {
        "Remote position"
    } else if breakdown.location >= SAME_CITY_SCORE {
        "Same city"
    } else if breakdown.location >= SAME_STATE_SCORE {
        "Same state"
    } else {
        "Different location"
    };
    reasons.insert("location".to_string(), location.to_string());

    let gap = posting.experience_years - profile.experience_years;
    let experience = if gap.abs() < 0.05 {
        "Experience matches exactly".to_string()
    } else if gap > 0.0 {
        format!("{} below the requested experience", format_years(gap))
    } else {
        format!("{} above the requested experience", format_years(-gap))
    };
    reasons.insert("experience".to_string(), experience);

    let salary = match posting.salary.offered() {
        Some(offered) => format!(
            "Offers {:.0} against an expectation of {:.0}",
            offered, profile.expected_salary
        ),
        None => "Salary not stated".to_string(),
    };
    reasons.insert("salary".to_string(), salary);

    reasons
}

/// "1.0 year", "2.5 years"
fn format_years(years: f64) -> String {
    let rounded = format!("{:.1}", years);
    if rounded == "1.0" {
        format!("{} year", rounded)
    } else {
        format!("{} years", rounded)
    }
}
