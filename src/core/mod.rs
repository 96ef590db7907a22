// Core algorithm exports
pub mod filters;
pub mod insights;
pub mod location;
pub mod matcher;
pub mod salary;
pub mod scoring;

pub use filters::{matches_filters, matches_query, search, search_iter};
pub use insights::skill_gaps;
pub use location::{parse_job_location, score_location_match};
pub use matcher::Matcher;
pub use salary::{offered_salary, parse_salary_text};
pub use scoring::{calculate_match_breakdown, compute_overall_match, score_experience_match, score_salary_match, score_skill_match};
