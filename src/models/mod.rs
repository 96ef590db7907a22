// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, JobBoard, JobPosting, Location, MatchBreakdown, Recommendation, Salary, ScoringWeights, SearchFilters, SkillGap};
pub use requests::RecommendRequest;
pub use responses::{BoardReport, RecommendationSet};
