//! The `flashforge rules` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use flashforge_core::badges::Badge;
use flashforge_core::model::{Grade, MASTERY_THRESHOLD};
use flashforge_core::scoring::{SPEED_BONUS_MAX, SPEED_BONUS_STEP_MS, STREAK_BONUS_CAP};
use flashforge_core::statistics::XP_PER_LEVEL;

pub fn execute() -> Result<()> {
    let mut grades = Table::new();
    grades.set_header(vec!["Key", "Grade", "Base XP", "Mastery", "Streak"]);
    for (key, grade) in Grade::ALL.iter().enumerate() {
        let rule = grade.rule();
        let streak = if *grade == Grade::Again {
            "reset".to_string()
        } else {
            format!("+{}", rule.streak_delta)
        };
        grades.add_row(vec![
            Cell::new(key + 1),
            Cell::new(rule.label),
            Cell::new(rule.base_xp),
            Cell::new(format!("{:+}", rule.mastery_delta)),
            Cell::new(streak),
        ]);
    }
    println!("{grades}");
    println!(
        "Speed bonus: {SPEED_BONUS_MAX} XP, minus 1 per {}s of thinking.",
        SPEED_BONUS_STEP_MS / 1000
    );
    println!("Streak bonus: +1 XP per streak point, up to {STREAK_BONUS_CAP}.");
    println!("A card is mastered at mastery {MASTERY_THRESHOLD}. One level per {XP_PER_LEVEL} XP.\n");

    let mut badges = Table::new();
    badges.set_header(vec!["Badge", "Unlocks"]);
    for badge in Badge::ALL {
        badges.add_row(vec![Cell::new(badge.key()), Cell::new(badge.label())]);
    }
    println!("{badges}");

    Ok(())
}
