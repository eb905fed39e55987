use clap::Parser;

use vibewatch::analysis::SentimentClassifier;
use vibewatch::cli::{Cli, Commands};
use vibewatch::config::Config;
use vibewatch::domain::ReputationSnapshot;
use vibewatch::errors::MonitorResult;
use vibewatch::services::MonitorService;
use vibewatch::sources::RedditSource;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> MonitorResult<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Run {
            keyword,
            limit,
            json,
        } => cmd_run(
            &config,
            &keyword,
            limit.unwrap_or(config.default_limit),
            json,
        ),
        Commands::Classify { text, json } => cmd_classify(&text, json),
    }
}

fn cmd_run(config: &Config, keyword: &str, limit: usize, json: bool) -> MonitorResult<()> {
    let service = MonitorService::new(
        RedditSource::from_config(config),
        SentimentClassifier::new(),
    );

    let snapshot = service.snapshot(keyword, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if snapshot.is_empty() {
        println!(
            "No recent mentions found for '{}'. Try a different keyword.",
            snapshot.keyword
        );
        return Ok(());
    }

    print_report(&snapshot);
    Ok(())
}

fn cmd_classify(text: &str, json: bool) -> MonitorResult<()> {
    let classifier = SentimentClassifier::new();
    let result = classifier.classify(text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} (score: {:.2}, subjectivity: {:.2})",
            result.label, result.score, result.subjectivity
        );
    }

    Ok(())
}

fn print_report(snapshot: &ReputationSnapshot) {
    println!("REPUTATION REPORT FOR: {}", snapshot.keyword.to_uppercase());
    println!("{}", "=".repeat(40));

    for (i, scored) in snapshot.posts.iter().enumerate() {
        println!("{}. POST: {}", i + 1, truncate_title(&scored.post.title, 75));
        println!(
            "   VIBE: {} (score: {:.2})",
            scored.sentiment.label, scored.sentiment.score
        );
        println!("   LINK: {}", scored.post.link);
        println!("{}", "-".repeat(40));
    }

    println!(
        "Overall vibe: {} (average score: {:.2})",
        snapshot.overall, snapshot.average_score
    );
    println!(
        "Positive: {}   Neutral: {}   Negative: {}",
        snapshot.positive, snapshot.neutral, snapshot.negative
    );
    if snapshot.skipped > 0 {
        println!(
            "Skipped {} posts that could not be classified.",
            snapshot.skipped
        );
    }
}

/// Truncate display text to a reasonable length, preferring a word boundary.
fn truncate_title(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(pos) => format!("{}...", &cut[..pos]),
        None => format!("{}...", cut),
    }
}
