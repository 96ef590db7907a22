use crate::models::Location;

/// Score for a remote job or a same-city match
pub const SAME_CITY_SCORE: f64 = 100.0;
/// Score when only the state matches
pub const SAME_STATE_SCORE: f64 = 80.0;
/// Lowest-confidence bucket, also used for malformed locations
pub const FALLBACK_SCORE: f64 = 60.0;

/// Check whether free-text job location advertises remote work
///
/// Only the capitalised token counts, so "no remote work" is not remote.
#[inline]
pub fn is_remote(job_location: &str) -> bool {
    job_location.contains("Remote")
}

/// Parse `"City, ST"` style free text into a [`Location`]
///
/// Text without a comma is treated as a city only. Parts after the state,
/// such as a country, are ignored. Empty parts become `None`.
pub fn parse_job_location(job_location: &str) -> Location {
    let mut parts = job_location.split(',');
    let city = parts.next().and_then(non_empty);
    let state = parts.next().and_then(non_empty);

    Location { city, state }
}

fn non_empty(part: &str) -> Option<String> {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Location score: 100 for remote or same city, 80 for same state, else 60
pub fn score_location_match(candidate: &Location, job_location: &str) -> f64 {
    if is_remote(job_location) {
        return SAME_CITY_SCORE;
    }

    let job = parse_job_location(job_location);

    if same_part(&candidate.city, &job.city) {
        return SAME_CITY_SCORE;
    }
    if same_part(&candidate.state, &job.state) {
        return SAME_STATE_SCORE;
    }

    FALLBACK_SCORE
}

#[inline]
fn same_part(a: &Option<String>, b: &Option<String>) -> bool {
    match (a.as_deref().map(str::trim), b.as_deref().map(str::trim)) {
        (Some(a), Some(b)) if !a.is_empty() => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}
