use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::SearchFilters;

/// Request to search postings and rank them for the candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: SearchFilters,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[validate(range(max = 100))]
    #[serde(rename = "minScore", default)]
    pub min_score: u8,
}

fn default_limit() -> usize {
    5
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: SearchFilters::default(),
            limit: default_limit(),
            min_score: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let req: RecommendRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.limit, 5);
        assert_eq!(req.min_score, 0);
        assert!(req.query.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let req = RecommendRequest { limit: 0, ..Default::default() };
        assert!(req.validate().is_err());
    }
}
