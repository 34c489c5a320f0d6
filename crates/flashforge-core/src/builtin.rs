//! The starter deck used when no deck file is given.

use crate::model::{Deck, Flashcard};

const STARTER_CARDS: &[(&str, &str, &str, &str)] = &[
    (
        "c1",
        "Memory",
        "What memory trick links names to faces quickly?",
        "Pick one standout feature and connect it to the name with a vivid mental image.",
    ),
    (
        "c2",
        "Productivity",
        "What is the 2-minute rule?",
        "If a task takes less than two minutes, do it immediately instead of delaying it.",
    ),
    (
        "c3",
        "Coding",
        "What does DRY stand for?",
        "Don't Repeat Yourself. Avoid duplicated logic by reusing abstractions.",
    ),
    (
        "c4",
        "Health",
        "Why is short movement during study breaks useful?",
        "It boosts blood flow and attention, making the next focus block sharper.",
    ),
    (
        "c5",
        "Design",
        "What creates strong visual hierarchy in a UI?",
        "Contrast in size, weight, spacing, and color focus guides user attention.",
    ),
    (
        "c6",
        "Science",
        "What is a hypothesis?",
        "A testable explanation that can be supported or disproved with evidence.",
    ),
    (
        "c7",
        "Language",
        "How can you remember new vocabulary faster?",
        "Use the word in your own sentence the same day and review it in spaced intervals.",
    ),
    (
        "c8",
        "Focus",
        "What is one benefit of monotasking?",
        "Single-tasking lowers context switching and improves depth of understanding.",
    ),
    (
        "c9",
        "Career",
        "What makes feedback actionable?",
        "Specific observations, clear impact, and one concrete next step.",
    ),
    (
        "c10",
        "Math",
        "What is the square root of 144?",
        "12.",
    ),
    (
        "c11",
        "Cybersecurity",
        "What is phishing?",
        "A social engineering attempt to trick users into giving credentials or sensitive data.",
    ),
    (
        "c12",
        "Creativity",
        "What is a fast way to break creative block?",
        "Create a tiny version first, then iterate with one improvement at a time.",
    ),
];

/// Twelve general-knowledge cards across twelve categories.
pub fn starter_deck() -> Deck {
    Deck {
        id: "starter".into(),
        name: "Starter Deck".into(),
        description: "Study habits, focus and general knowledge".into(),
        cards: STARTER_CARDS
            .iter()
            .map(|&(id, category, prompt, answer)| Flashcard {
                id: id.into(),
                category: category.into(),
                prompt: prompt.into(),
                answer: answer.into(),
            })
            .collect(),
    }
}
