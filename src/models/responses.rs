use serde::{Deserialize, Serialize};
use crate::models::domain::{Recommendation, SkillGap};

/// Ranked recommendations for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "recommendedAt")]
    pub recommended_at: chrono::DateTime<chrono::Utc>,
}

/// Full report printed by the command-line front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardReport {
    #[serde(flatten)]
    pub results: RecommendationSet,
    #[serde(rename = "skillGaps")]
    pub skill_gaps: Vec<SkillGap>,
}
