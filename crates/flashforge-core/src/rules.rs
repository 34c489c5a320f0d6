//! Static grade rule table.

use serde::Serialize;

use crate::model::Grade;

/// Scoring effect of one grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeRule {
    /// XP awarded before bonuses.
    pub base_xp: u32,
    /// Change applied to the card's mastery (floored at zero).
    pub mastery_delta: i32,
    /// Added to the streak on any grade other than `again`.
    pub streak_delta: u32,
    /// Display label.
    pub label: &'static str,
}

const AGAIN: GradeRule = GradeRule {
    base_xp: 4,
    mastery_delta: -1,
    streak_delta: 0,
    label: "Again",
};

const HARD: GradeRule = GradeRule {
    base_xp: 9,
    mastery_delta: 1,
    streak_delta: 1,
    label: "Hard",
};

const GOOD: GradeRule = GradeRule {
    base_xp: 14,
    mastery_delta: 2,
    streak_delta: 1,
    label: "Good",
};

const EASY: GradeRule = GradeRule {
    base_xp: 20,
    mastery_delta: 3,
    streak_delta: 2,
    label: "Easy",
};

impl Grade {
    /// The rule this grade applies.
    pub fn rule(&self) -> &'static GradeRule {
        match self {
            Grade::Again => &AGAIN,
            Grade::Hard => &HARD,
            Grade::Good => &GOOD,
            Grade::Easy => &EASY,
        }
    }
}

/// Look up a rule by its exact lowercase label. Returns `None` for anything
/// else, including case variants.
pub fn rule_for(label: &str) -> Option<(Grade, &'static GradeRule)> {
    label.parse::<Grade>().ok().map(|g| (g, g.rule()))
}
