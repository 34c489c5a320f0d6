//! The `flashforge simulate` command.

use std::path::PathBuf;

use anyhow::Result;

use flashforge_core::clock::ManualClock;
use flashforge_core::config::load_config_from;
use flashforge_core::engine::{GradeReport, ReviewEngine};
use flashforge_core::scoring::GradeOutcome;

use super::{hud_line, load_catalog, make_rng, print_summary};

pub fn execute(
    grades: String,
    deck: Option<PathBuf>,
    elapsed_ms: u64,
    shuffle: bool,
    seed: Option<u64>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format: {format} (expected text or json)"
    );
    let elapsed_ms = i64::try_from(elapsed_ms)
        .map_err(|_| anyhow::anyhow!("elapsed-ms is too large: {elapsed_ms}"))?;

    let grades: Vec<String> = grades
        .split(',')
        .map(|g| g.trim().to_lowercase())
        .filter(|g| !g.is_empty())
        .collect();
    anyhow::ensure!(!grades.is_empty(), "at least one grade is required");

    let config = load_config_from(config_path.as_deref())?;
    let catalog = load_catalog(deck, &config)?;

    let mut engine = ReviewEngine::new(catalog, ManualClock::at_epoch());
    if shuffle || config.shuffle_on_start {
        engine.on_shuffle(&mut make_rng(seed.or(config.seed)));
    }

    let mut reviews: Vec<GradeReport> = Vec::with_capacity(grades.len());
    for (step, grade) in grades.iter().enumerate() {
        engine.clock().advance_ms(elapsed_ms);
        let card_id = engine.current_card()?.id.clone();
        let report = engine.on_grade(grade.as_str())?;

        if format == "text" {
            match &report.outcome {
                GradeOutcome::Scored(review) => println!(
                    "#{:<3} {:<8} {:<6} {} (base {} + speed {} + streak {})",
                    step + 1,
                    card_id,
                    grade,
                    review.message(),
                    review.gained_xp - review.speed_bonus - review.streak_bonus,
                    review.speed_bonus,
                    review.streak_bonus,
                ),
                GradeOutcome::NoEffect { grade } => {
                    println!("#{:<3} {:<8} ignored unrecognized grade '{grade}'", step + 1, card_id)
                }
            }
            for badge in &report.unlocked {
                println!("     Badge unlocked: {}", badge.label());
            }
        }
        reviews.push(report);
    }

    let summary = engine.summary();
    match format.as_str() {
        "json" => {
            let output = serde_json::json!({
                "reviews": reviews,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("\n{}", hud_line(&engine));
            print_summary(&summary);
        }
    }

    Ok(())
}
