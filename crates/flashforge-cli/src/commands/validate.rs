//! The `flashforge validate` command.

use std::path::PathBuf;

use anyhow::Result;

use flashforge_core::catalog::Catalog;
use flashforge_core::parser::validate_deck;

use super::{load_decks, print_warnings};

pub fn execute(deck_path: PathBuf) -> Result<()> {
    let decks = load_decks(&deck_path)?;
    let deck_count = decks.len();
    let mut warning_count = 0;

    for deck in decks {
        let warnings = validate_deck(&deck);
        let heading = format!("{} [{}]", deck.name, deck.id);
        // The engine refuses empty decks and duplicate ids outright.
        match Catalog::new(deck) {
            Ok(catalog) => println!("{heading}: {} cards, ready to review", catalog.len()),
            Err(e) => println!("{heading}: not reviewable ({e})"),
        }
        print_warnings(&warnings);
        warning_count += warnings.len();
    }

    println!("Checked {deck_count} deck(s).");
    if warning_count == 0 {
        println!("All decks valid.");
    } else {
        println!("{warning_count} warning(s) found.");
    }

    Ok(())
}
