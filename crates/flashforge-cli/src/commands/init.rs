//! The `flashforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("flashforge.toml").exists() {
        println!("flashforge.toml already exists, skipping.");
    } else {
        std::fs::write("flashforge.toml", SAMPLE_CONFIG)?;
        println!("Created flashforge.toml");
    }

    std::fs::create_dir_all("decks")?;
    let example_path = std::path::Path::new("decks/example.toml");
    if example_path.exists() {
        println!("decks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_DECK)?;
        println!("Created decks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your own cards to decks/example.toml");
    println!("  2. Run: flashforge validate --deck decks/example.toml");
    println!("  3. Run: flashforge review --deck decks/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# flashforge configuration

# Deck to review when --deck is not given (built-in starter deck if unset)
deck = "decks/example.toml"

# Shuffle before the first card
shuffle_on_start = false

# Fixed seed for reproducible shuffles
# seed = 42

# Write a JSON summary here at the end of every review
# summary_dir = "./flashforge-runs"
"#;

const EXAMPLE_DECK: &str = r#"[deck]
id = "example"
name = "Example Deck"
description = "A small deck to get started"

[[cards]]
id = "dry"
category = "Coding"
prompt = "What does DRY stand for?"
answer = "Don't Repeat Yourself. Avoid duplicated logic by reusing abstractions."

[[cards]]
id = "two-minute"
category = "Productivity"
prompt = "What is the 2-minute rule?"
answer = "If a task takes less than two minutes, do it immediately instead of delaying it."

[[cards]]
id = "sqrt-144"
category = "Math"
prompt = "What is the square root of 144?"
answer = "12."
"#;
