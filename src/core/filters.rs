use crate::models::{JobPosting, SearchFilters};

/// Check if a posting matches the free-text query
///
/// The query is matched case-insensitively against the title, the company
/// and every required skill. An empty query matches everything; whitespace
/// is part of the query.
#[inline]
pub fn matches_query(posting: &JobPosting, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    posting.title.to_lowercase().contains(&query)
        || posting.company.to_lowercase().contains(&query)
        || posting
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&query))
}

/// Check if a posting passes every structured filter
///
/// Job type and remote text compare for exact equality; location is a
/// case-sensitive substring. Unset or empty filters are skipped.
#[inline]
pub fn matches_filters(posting: &JobPosting, filters: &SearchFilters) -> bool {
    if filters.is_empty() {
        return true;
    }

    if let Some(job_type) = active(&filters.job_type) {
        if posting.job_type != job_type {
            return false;
        }
    }

    if let Some(location) = active(&filters.location) {
        if !posting.location.contains(location) {
            return false;
        }
    }

    if let Some(remote) = active(&filters.remote) {
        if posting.remote != remote {
            return false;
        }
    }

    true
}

#[inline]
fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|f| !f.is_empty())
}

/// Lazily filter postings by query and filters, preserving input order
pub fn search_iter<'a, 'q>(
    postings: &'a [JobPosting],
    query: &'q str,
    filters: &'q SearchFilters,
) -> impl Iterator<Item = &'a JobPosting> + 'q
where
    'a: 'q,
{
    postings
        .iter()
        .filter(move |posting| matches_query(posting, query))
        .filter(move |posting| matches_filters(posting, filters))
}

/// Filter postings by query and filters, preserving input order
pub fn search<'a>(
    postings: &'a [JobPosting],
    query: &str,
    filters: &SearchFilters,
) -> Vec<&'a JobPosting> {
    let results: Vec<&JobPosting> = search_iter(postings, query, filters).collect();

    tracing::debug!(
        query,
        total = postings.len(),
        matched = results.len(),
        "Searched postings"
    );

    results
}
