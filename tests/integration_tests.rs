// Integration tests for Job Match

use job_match::core::{skill_gaps, Matcher};
use job_match::models::{BoardReport, JobBoard, SearchFilters, SkillGap};
use job_match::MatchError;

fn demo_board() -> JobBoard {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/board.json");
    JobBoard::load(path).expect("demo board should load")
}

#[test]
fn test_integration_end_to_end_recommendations() {
    let board = demo_board();
    let matcher = Matcher::with_default_weights();

    let result = matcher.recommend(&board.profile, &board.postings, "", &SearchFilters::default(), 0, 5);

    let ids: Vec<u64> = result.recommendations.iter().map(|r| r.job_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let scores: Vec<u8> = result.recommendations.iter().map(|r| r.breakdown.overall).collect();
    assert_eq!(scores, vec![97, 61, 52]);

    assert_eq!(result.total_candidates, 3);
    assert_eq!(result.total_results, 3);
}

#[test]
fn test_integration_search_then_rank() {
    let board = demo_board();
    let matcher = Matcher::with_default_weights();
    let filters = SearchFilters { job_type: Some("Full-time".to_string()), ..Default::default() };

    let result = matcher.recommend(&board.profile, &board.postings, "aws", &filters, 0, 5);

    assert_eq!(result.total_results, 1);
    assert_eq!(result.recommendations[0].job_id, 2);
    assert_eq!(result.recommendations[0].breakdown.missing_skills, vec!["Python".to_string(), "AWS".to_string()]);
}

#[test]
fn test_integration_skill_gaps() {
    let board = demo_board();

    let gaps = skill_gaps(&board.profile, &board.postings);

    assert_eq!(gaps[0], SkillGap { skill: "AWS".to_string(), demand: 2 });
    let rest: Vec<&str> = gaps[1..].iter().map(|g| g.skill.as_str()).collect();
    assert_eq!(rest, vec!["Go", "Kubernetes", "Python"]);
}

#[test]
fn test_integration_report_serialization() {
    let board = demo_board();
    let matcher = Matcher::with_default_weights();

    let report = BoardReport {
        results: matcher.recommend(&board.profile, &board.postings, "", &SearchFilters::default(), 0, 1),
        skill_gaps: skill_gaps(&board.profile, &board.postings),
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["totalCandidates"], 3);
    assert_eq!(json["recommendations"][0]["jobId"], 1);
    assert_eq!(json["recommendations"][0]["matchScore"], 97);
    assert_eq!(json["recommendations"][0]["locationMatchScore"], 100.0);
    assert!(json["recommendations"][0]["matchReasons"]["skills"].is_string());
    assert_eq!(json["skillGaps"][0]["skill"], "AWS");
}

#[test]
fn test_integration_missing_board_file() {
    let result = JobBoard::load("does/not/exist.json");
    assert!(matches!(result, Err(MatchError::Io(_))));
}
