use job_match::config::Settings;
use job_match::core::{skill_gaps, Matcher};
use job_match::models::{BoardReport, JobBoard};
use job_match::{logging, MatchError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use validator::Validate;

/// Usage: job-match [BOARD_JSON] [QUERY]
fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(&settings.logging);

    info!("Starting job-match...");

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<(), MatchError> {
    let mut args = std::env::args().skip(1);
    let board_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.data.board_path.clone());
    let query = args.next().unwrap_or_default();

    let matcher = Matcher::try_new(settings.weights())?;
    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let request = settings.search.to_request(query);
    request.validate()?;

    let board = JobBoard::load(&board_path)?;

    let results = matcher.recommend(
        &board.profile,
        &board.postings,
        &request.query,
        &request.filters,
        request.min_score,
        request.limit,
    );

    let report = BoardReport {
        results,
        skill_gaps: skill_gaps(&board.profile, &board.postings),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
