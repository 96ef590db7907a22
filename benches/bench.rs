// Criterion benchmarks for Job Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use job_match::core::{Matcher, scoring::compute_overall_match, filters::search, salary::parse_salary_text};
use job_match::models::{CandidateProfile, JobPosting, Location, Salary, SearchFilters};

const SKILLS: [&str; 8] = ["React", "TypeScript", "Node.js", "Python", "AWS", "Go", "Kubernetes", "Rust"];
const CITIES: [(&str, &str); 4] = [("San Francisco", "CA"), ("Los Angeles", "CA"), ("New York", "NY"), ("Austin", "TX")];

fn create_posting(id: usize) -> JobPosting {
    let (city, state) = CITIES[id % CITIES.len()];
    JobPosting {
        id: id as u64,
        title: format!("Developer {}", id),
        company: format!("Company {}", id % 17),
        location: if id % 5 == 0 { "Remote".to_string() } else { format!("{}, {}", city, state) },
        salary: Salary::Text(format!("${}k - ${}k", 80 + id % 40, 100 + id % 60)),
        skills: (0..3).map(|i| SKILLS[(id + i) % SKILLS.len()].to_string()).collect(),
        experience_years: (id % 10) as f64,
        job_type: if id % 3 == 0 { "Contract" } else { "Full-time" }.to_string(),
        remote: if id % 2 == 0 { "Hybrid" } else { "On-site" }.to_string(),
        description: None,
    }
}

fn create_profile() -> CandidateProfile {
    CandidateProfile {
        skills: vec!["React".to_string(), "TypeScript".to_string(), "Node.js".to_string()],
        experience_years: 4.0,
        location: Location::new("San Francisco", "CA"),
        expected_salary: 110_000.0,
    }
}

fn bench_overall_match(c: &mut Criterion) {
    let profile = create_profile();
    let posting = create_posting(1);

    c.bench_function("compute_overall_match", |b| {
        b.iter(|| compute_overall_match(black_box(&profile), black_box(&posting)));
    });
}

fn bench_salary_parsing(c: &mut Criterion) {
    c.bench_function("parse_salary_text", |b| {
        b.iter(|| parse_salary_text(black_box("$90k - $120k")));
    });
}

fn bench_search(c: &mut Criterion) {
    let postings: Vec<JobPosting> = (0..1000).map(create_posting).collect();
    let filters = SearchFilters { job_type: Some("Full-time".to_string()), ..Default::default() };

    c.bench_function("search_1000_postings", |b| {
        b.iter(|| search(black_box(&postings), black_box("react"), black_box(&filters)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profile = create_profile();
    let filters = SearchFilters::default();

    let mut group = c.benchmark_group("recommend");

    for posting_count in [10, 50, 100, 500, 1000].iter() {
        let postings: Vec<JobPosting> = (0..*posting_count).map(create_posting).collect();

        group.bench_with_input(
            BenchmarkId::new("recommend", posting_count),
            posting_count,
            |b, _| {
                b.iter(|| {
                    matcher.recommend(
                        black_box(&profile),
                        black_box(&postings),
                        black_box(""),
                        black_box(&filters),
                        0,
                        black_box(5),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_overall_match,
    bench_salary_parsing,
    bench_search,
    bench_recommend
);

criterion_main!(benches);
