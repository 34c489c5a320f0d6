//! Subcommand implementations and the helpers they share.

pub mod init;
pub mod review;
pub mod rules;
pub mod simulate;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

use flashforge_core::builtin::starter_deck;
use flashforge_core::catalog::Catalog;
use flashforge_core::clock::Clock;
use flashforge_core::config::FlashforgeConfig;
use flashforge_core::engine::ReviewEngine;
use flashforge_core::model::Deck;
use flashforge_core::parser::{self, ValidationWarning};
use flashforge_core::report::SessionSummary;

/// Build a catalog from `--deck`, then the config's deck, then the
/// built-in starter deck.
pub fn load_catalog(deck: Option<PathBuf>, config: &FlashforgeConfig) -> Result<Catalog> {
    let deck = match deck.or_else(|| config.deck.clone()) {
        Some(path) => parser::parse_deck(&path)?,
        None => starter_deck(),
    };
    let name = deck.name.clone();
    tracing::debug!(deck = %deck.id, cards = deck.cards.len(), "deck loaded");
    Catalog::new(deck).with_context(|| format!("cannot review deck '{name}'"))
}

/// Parse one deck file, or every deck under a directory.
pub fn load_decks(path: &Path) -> Result<Vec<Deck>> {
    if path.is_dir() {
        parser::load_deck_directory(path)
    } else {
        Ok(vec![parser::parse_deck(path)?])
    }
}

/// Print validation warnings as a table; prints nothing when there are none.
pub fn print_warnings(warnings: &[ValidationWarning]) {
    if warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Card", "Warning"]);
    for warning in warnings {
        table.add_row(vec![
            Cell::new(warning.card_id.as_deref().unwrap_or("-")),
            Cell::new(&warning.message),
        ]);
    }
    println!("{table}");
}

/// Seeded RNG when a seed is given, entropy-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// One-line heads-up display of the engine counters.
pub fn hud_line<C: Clock>(engine: &ReviewEngine<C>) -> String {
    format!(
        "XP {} | Level {} | Streak {} | Best {} | Mastered {}/{} ({}%)",
        engine.xp(),
        engine.level(),
        engine.streak(),
        engine.best_streak(),
        engine.mastered_count(),
        engine.deck_len(),
        engine.progress_percent(),
    )
}

/// Print the end-of-run summary tables.
pub fn print_summary(summary: &SessionSummary) {
    let mut table = Table::new();
    table.set_header(vec!["XP", "Level", "Streak", "Best", "Mastered", "Progress"]);
    table.add_row(vec![
        Cell::new(summary.xp),
        Cell::new(summary.level),
        Cell::new(summary.streak),
        Cell::new(summary.best_streak),
        Cell::new(format!("{}/{}", summary.mastered, summary.deck.card_count)),
        Cell::new(format!("{}%", summary.progress_percent)),
    ]);
    println!("\n{} ({} cards)", summary.deck.name, summary.deck.card_count);
    println!("{table}");

    let mut categories = Table::new();
    categories.set_header(vec!["Category", "Cards", "Mastered", "Reviews"]);
    for stats in &summary.categories {
        categories.add_row(vec![
            Cell::new(&stats.category),
            Cell::new(stats.cards),
            Cell::new(stats.mastered),
            Cell::new(stats.reviews),
        ]);
    }
    println!("{categories}");

    if summary.badges.is_empty() {
        println!("No badges yet. Keep playing!");
    } else {
        println!("Badges:");
        for badge in &summary.badges {
            println!("  {}", badge.label);
        }
    }
}
