//! The `flashforge review` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use flashforge_core::badges::Badge;
use flashforge_core::clock::Clock;
use flashforge_core::config::load_config_from;
use flashforge_core::engine::{GradeReport, ReviewEngine};
use flashforge_core::scoring::{GradeOutcome, Tone};

use super::{hud_line, load_catalog, make_rng, print_summary};

/// A parsed line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Grade(String),
    Flip,
    Next,
    Prev,
    Shuffle,
    Reset,
    Help,
    Quit,
}

fn parse_action(line: &str) -> Action {
    match line.trim().to_lowercase().as_str() {
        "1" => Action::Grade("again".into()),
        "2" => Action::Grade("hard".into()),
        "3" => Action::Grade("good".into()),
        "4" => Action::Grade("easy".into()),
        "f" | "flip" | "" => Action::Flip,
        "n" | "next" => Action::Next,
        "p" | "prev" => Action::Prev,
        "s" | "shuffle" => Action::Shuffle,
        "r" | "reset" => Action::Reset,
        "h" | "help" | "?" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => Action::Grade(other.to_string()),
    }
}

const HELP: &str = "\
Commands:
  1 | again    2 | hard    3 | good    4 | easy
  f | flip     show the answer (or press enter)
  n | next     p | prev    s | shuffle    r | reset
  h | help     q | quit";

pub fn execute(
    deck: Option<PathBuf>,
    shuffle: bool,
    seed: Option<u64>,
    summary_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = load_catalog(deck, &config)?;
    let mut rng = make_rng(seed.or(config.seed));

    let mut engine = ReviewEngine::with_system_clock(catalog);
    if shuffle || config.shuffle_on_start {
        engine.on_shuffle(&mut rng);
    }

    println!(
        "flashforge v{} — {} ({} cards)",
        env!("CARGO_PKG_VERSION"),
        engine.catalog().name(),
        engine.deck_len()
    );
    println!("Type h for help.\n");
    show_card(&engine)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while let Some(line) = lines.next() {
        let line = line?;
        match parse_action(&line) {
            Action::Quit => break,
            Action::Help => println!("{HELP}"),
            Action::Flip => {
                println!("A: {}", engine.current_card()?.answer);
                continue;
            }
            Action::Next => engine.on_navigate(1),
            Action::Prev => engine.on_navigate(-1),
            Action::Shuffle => {
                engine.on_shuffle(&mut rng);
                println!("Deck shuffled. New challenge order!");
            }
            Action::Reset => {
                print!("Reset XP, streaks, badges and mastery progress? [y/N] ");
                io::stdout().flush()?;
                let confirmed = match lines.next() {
                    Some(answer) => matches!(answer?.trim(), "y" | "Y" | "yes"),
                    None => false,
                };
                if !confirmed {
                    continue;
                }
                engine.on_reset();
                println!("Progress reset. Fresh run started.");
            }
            Action::Grade(grade) => {
                let report = engine.on_grade(&grade)?;
                if report.outcome.is_no_effect() {
                    println!("Unknown command '{grade}'. Type h for help.");
                    continue;
                }
                print_report(&report);
                println!("{}", hud_line(&engine));
            }
        }
        println!();
        show_card(&engine)?;
    }

    let summary = engine.summary();
    print_summary(&summary);

    let summary_path = summary_path.or_else(|| {
        config.summary_dir.as_ref().map(|dir| {
            let timestamp = summary.created_at.format("%Y-%m-%dT%H%M%S");
            dir.join(format!("summary-{timestamp}.json"))
        })
    });
    if let Some(path) = summary_path {
        summary.save_json(&path)?;
        println!("Summary saved to: {}", path.display());
    }

    Ok(())
}

fn show_card<C: Clock>(engine: &ReviewEngine<C>) -> Result<()> {
    let card = engine.current_card()?;
    println!(
        "[{}/{}] {}",
        engine.index() + 1,
        engine.deck_len(),
        card.category
    );
    println!("Q: {}", card.prompt);
    Ok(())
}

fn print_report(report: &GradeReport) {
    if let GradeOutcome::Scored(review) = &report.outcome {
        let marker = match review.tone() {
            Tone::Good => "+",
            Tone::Warn => "!",
        };
        println!("[{marker}] {}", review.message());
    }
    for badge in &report.unlocked {
        print_badge(*badge);
    }
}

fn print_badge(badge: Badge) {
    println!("[*] Badge unlocked: {}", badge.label());
}
