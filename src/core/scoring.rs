use crate::models::{CandidateProfile, JobPosting, MatchBreakdown, ScoringWeights};
use crate::core::location::score_location_match;

/// Points lost per year of experience difference
const EXPERIENCE_PENALTY_PER_YEAR: f64 = 10.0;

/// Calculate the overall match score (0-100) with the default weights
///
/// Scoring formula:
/// score = round(
///     skills_score * 0.4 +        # Share of required skills covered
///     experience_score * 0.3 +    # 10 points lost per year of difference
///     location_score * 0.2 +      # Remote/city 100, state 80, else 60
///     salary_score * 0.1          # Relative distance from expectation
/// )
pub fn compute_overall_match(profile: &CandidateProfile, posting: &JobPosting) -> u8 {
    calculate_match_breakdown(profile, posting, &ScoringWeights::default()).overall
}

/// Calculate every component score and the weighted overall score
pub fn calculate_match_breakdown(
    profile: &CandidateProfile,
    posting: &JobPosting,
    weights: &ScoringWeights,
) -> MatchBreakdown {
    let (matched_skills, missing_skills) = partition_required_skills(&profile.skills, &posting.skills);
    let skills = coverage_score(matched_skills.len(), posting.skills.len());

    let experience = score_experience_match(profile.experience_years, posting.experience_years);

    let location = clamp_score(score_location_match(&profile.location, &posting.location));

    let salary = match posting.salary.offered() {
        Some(offered) => score_salary_match(profile.expected_salary, offered),
        None => {
            tracing::warn!("Unparsable salary on posting {}: {:?}", posting.id, posting.salary);
            0.0
        }
    };

    let overall = weighted_total(skills, experience, location, salary, weights);

    tracing::debug!(
        job_id = posting.id,
        skills,
        experience,
        location,
        salary,
        overall,
        "Scored posting"
    );

    MatchBreakdown {
        overall,
        skills,
        experience,
        location,
        salary,
        matched_skills,
        missing_skills,
    }
}

/// Share of required skills covered by the candidate, scaled to 0-100
///
/// A requirement is covered when any candidate skill is a case-insensitive
/// substring of it. No requirements scores 0.
pub fn score_skill_match(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    let covered = required_skills
        .iter()
        .filter(|req| covers(candidate_skills, req))
        .count();

    coverage_score(covered, required_skills.len())
}

/// Experience score: 100 minus 10 per year of difference, floored at 0
#[inline]
pub fn score_experience_match(candidate_years: f64, required_years: f64) -> f64 {
    let diff = (candidate_years - required_years).abs();
    clamp_score(100.0 - diff * EXPERIENCE_PENALTY_PER_YEAR)
}

/// Salary score: 100 minus the relative distance from the expectation, floored at 0
///
/// A zero, negative or non-finite expectation scores 0.
#[inline]
pub fn score_salary_match(expected_salary: f64, offered_salary: f64) -> f64 {
    if !expected_salary.is_finite() || expected_salary <= 0.0 {
        return 0.0;
    }

    let relative_diff = (expected_salary - offered_salary).abs() / expected_salary;
    clamp_score(100.0 - relative_diff * 100.0)
}

/// Split required skills into (covered, missing), preserving order
pub fn partition_required_skills(
    candidate_skills: &[String],
    required_skills: &[String],
) -> (Vec<String>, Vec<String>) {
    required_skills
        .iter()
        .cloned()
        .partition(|req| covers(candidate_skills, req))
}

/// Check whether any candidate skill is a case-insensitive substring of `required`
#[inline]
pub fn covers(candidate_skills: &[String], required: &str) -> bool {
    let required = required.to_lowercase();
    candidate_skills.iter().any(|skill| {
        let skill = skill.trim();
        !skill.is_empty() && required.contains(&skill.to_lowercase())
    })
}

#[inline]
fn coverage_score(covered: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    clamp_score(covered as f64 / required as f64 * 100.0)
}

/// Clamp to [0, 100]; NaN collapses to 0
#[inline]
fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

#[inline]
fn weighted_total(
    skills: f64,
    experience: f64,
    location: f64,
    salary: f64,
    weights: &ScoringWeights,
) -> u8 {
    let total = skills * weights.skills
        + experience * weights.experience
        + location * weights.location
        + salary * weights.salary;

    clamp_score(total).round() as u8
}
