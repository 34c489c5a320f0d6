//! Scoring engine: turns one grade into mastery, XP and streak changes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Flashcard, Grade, MasteryRecord, MASTERY_THRESHOLD};
use crate::rules::{rule_for, GradeRule};
use crate::session::SessionState;

/// Speed bonus for an instant answer.
pub const SPEED_BONUS_MAX: u32 = 8;
/// The speed bonus drops by one point per this many milliseconds.
pub const SPEED_BONUS_STEP_MS: i64 = 4_000;
/// Upper bound on the streak bonus.
pub const STREAK_BONUS_CAP: u32 = 7;

/// How a scored review is classified for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The card crossed the mastery threshold on this review.
    MasteryAchieved,
    /// The grade was `again`; the streak went back to zero.
    StreakReset,
    /// Any other recognized grade.
    Graded,
}

/// Tone of the notification a presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Warn,
}

/// The effect of one recognized grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReview {
    pub kind: OutcomeKind,
    pub grade: Grade,
    pub card_id: String,
    pub category: String,
    pub rule_label: &'static str,
    pub gained_xp: u32,
    pub speed_bonus: u32,
    pub streak_bonus: u32,
}

impl ScoredReview {
    /// Notification text for this review.
    pub fn message(&self) -> String {
        match self.kind {
            OutcomeKind::MasteryAchieved => format!("Mastered: {} card!", self.category),
            OutcomeKind::StreakReset => {
                format!("+{} XP. Streak reset, bounce back!", self.gained_xp)
            }
            OutcomeKind::Graded => format!("+{} XP with {}!", self.gained_xp, self.rule_label),
        }
    }

    pub fn tone(&self) -> Tone {
        match self.kind {
            OutcomeKind::StreakReset => Tone::Warn,
            _ => Tone::Good,
        }
    }
}

/// Result of grading the current card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GradeOutcome {
    /// The grade label was not recognized; nothing changed.
    NoEffect { grade: String },
    /// The grade was applied.
    Scored(ScoredReview),
}

impl GradeOutcome {
    pub fn is_no_effect(&self) -> bool {
        matches!(self, GradeOutcome::NoEffect { .. })
    }

    pub fn scored(&self) -> Option<&ScoredReview> {
        match self {
            GradeOutcome::Scored(review) => Some(review),
            GradeOutcome::NoEffect { .. } => None,
        }
    }

    pub fn gained_xp(&self) -> u32 {
        self.scored().map(|r| r.gained_xp).unwrap_or(0)
    }
}

/// Bonus for answering quickly: 8 points, minus one per full 4 seconds.
///
/// Negative elapsed times (clock moved backwards) count as zero.
pub fn speed_bonus(elapsed_ms: i64) -> u32 {
    let steps = elapsed_ms.max(0).div_euclid(SPEED_BONUS_STEP_MS);
    (SPEED_BONUS_MAX as i64 - steps).max(0) as u32
}

/// Bonus for the streak held before this review, capped.
pub fn streak_bonus(streak: u32) -> u32 {
    streak.min(STREAK_BONUS_CAP)
}

/// Grade `card` by label. Labels must match a rule exactly (`"good"`, not
/// `"Good"`); anything else leaves every input untouched.
pub fn grade_card(
    grade: &str,
    card: &Flashcard,
    record: &mut MasteryRecord,
    session: &mut SessionState,
    now: DateTime<Utc>,
) -> GradeOutcome {
    match rule_for(grade) {
        Some((parsed, rule)) => {
            GradeOutcome::Scored(score(parsed, rule, card, record, session, now))
        }
        None => {
            tracing::debug!(card = %card.id, grade, "unrecognized grade, ignoring");
            GradeOutcome::NoEffect {
                grade: grade.to_string(),
            }
        }
    }
}

/// Apply a recognized grade.
pub fn apply_grade(
    grade: Grade,
    card: &Flashcard,
    record: &mut MasteryRecord,
    session: &mut SessionState,
    now: DateTime<Utc>,
) -> ScoredReview {
    score(grade, grade.rule(), card, record, session, now)
}

fn score(
    grade: Grade,
    rule: &GradeRule,
    card: &Flashcard,
    record: &mut MasteryRecord,
    session: &mut SessionState,
    now: DateTime<Utc>,
) -> ScoredReview {
    record.seen += 1;
    let previous_mastery = record.mastery;
    record.mastery = record.mastery.saturating_add_signed(rule.mastery_delta);

    let elapsed_ms = (now - session.answered_at).num_milliseconds();
    let speed_bonus = speed_bonus(elapsed_ms);
    let streak_bonus = streak_bonus(session.streak);
    let gained_xp = rule.base_xp + speed_bonus + streak_bonus;
    session.xp += u64::from(gained_xp);

    if grade == Grade::Again {
        session.streak = 0;
    } else {
        session.streak += rule.streak_delta;
    }
    session.best_streak = session.best_streak.max(session.streak);

    let kind = if previous_mastery < MASTERY_THRESHOLD && record.mastery >= MASTERY_THRESHOLD {
        OutcomeKind::MasteryAchieved
    } else if grade == Grade::Again {
        OutcomeKind::StreakReset
    } else {
        OutcomeKind::Graded
    };

    tracing::debug!(
        card = %card.id,
        %grade,
        gained_xp,
        speed_bonus,
        streak_bonus,
        mastery = record.mastery,
        streak = session.streak,
        "card graded"
    );

    ScoredReview {
        kind,
        grade,
        card_id: card.id.clone(),
        category: card.category.clone(),
        rule_label: rule.label,
        gained_xp,
        speed_bonus,
        streak_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::card;
    use chrono::Duration;

    fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    fn fresh() -> (Flashcard, MasteryRecord, SessionState) {
        (
            card("c1", "Memory"),
            MasteryRecord::default(),
            SessionState::new(1, epoch()),
        )
    }

    #[test]
    fn speed_bonus_decay() {
        assert_eq!(speed_bonus(0), 8);
        assert_eq!(speed_bonus(3_999), 8);
        assert_eq!(speed_bonus(4_000), 7);
        assert_eq!(speed_bonus(28_000), 1);
        assert_eq!(speed_bonus(31_999), 1);
        assert_eq!(speed_bonus(32_000), 0);
        assert_eq!(speed_bonus(600_000), 0);
        assert_eq!(speed_bonus(-5_000), 8);
    }

    #[test]
    fn streak_bonus_is_capped() {
        assert_eq!(streak_bonus(0), 0);
        assert_eq!(streak_bonus(5), 5);
        assert_eq!(streak_bonus(7), 7);
        assert_eq!(streak_bonus(40), 7);
    }

    #[test]
    fn good_on_fresh_card_at_zero_elapsed() {
        let (card, mut record, mut session) = fresh();
        let outcome = grade_card("good", &card, &mut record, &mut session, epoch());
        let review = outcome.scored().unwrap();
        assert_eq!(review.speed_bonus, 8);
        assert_eq!(review.streak_bonus, 0);
        assert_eq!(review.gained_xp, 22);
        assert_eq!(review.kind, OutcomeKind::Graded);
        assert_eq!(review.message(), "+22 XP with Good!");
        assert_eq!(session.xp, 22);
        assert_eq!(session.streak, 1);
        assert_eq!(session.best_streak, 1);
        assert_eq!(record, MasteryRecord { seen: 1, mastery: 2 });
    }

    #[test]
    fn again_resets_streak_and_floors_mastery() {
        let (card, mut record, mut session) = fresh();
        session.streak = 5;
        session.best_streak = 5;
        let outcome = grade_card("again", &card, &mut record, &mut session, epoch());
        let review = outcome.scored().unwrap();
        assert_eq!(review.kind, OutcomeKind::StreakReset);
        assert_eq!(review.tone(), Tone::Warn);
        // base 4 + speed 8 + streak bonus from the pre-reset streak 5
        assert_eq!(review.gained_xp, 17);
        assert_eq!(session.streak, 0);
        assert_eq!(session.best_streak, 5);
        assert_eq!(record.mastery, 0);
        assert_eq!(record.seen, 1);

        record.mastery = 3;
        grade_card("again", &card, &mut record, &mut session, epoch());
        assert_eq!(record.mastery, 2);
    }

    #[test]
    fn unrecognized_grade_changes_nothing() {
        let (card, mut record, mut session) = fresh();
        session.xp = 40;
        session.streak = 2;
        record.mastery = 3;
        record.seen = 1;
        let before = (session.xp, session.streak, session.best_streak, record);
        for label in ["", "perfect", "goood", "5"] {
            let outcome = grade_card(label, &card, &mut record, &mut session, epoch());
            assert!(outcome.is_no_effect());
            assert_eq!(outcome.gained_xp(), 0);
        }
        assert_eq!(
            (session.xp, session.streak, session.best_streak, record),
            before
        );
    }

    #[test]
    fn grade_labels_are_case_sensitive() {
        let (card, mut record, mut session) = fresh();
        for label in ["EASY", " good ", "Hard", "Again"] {
            let outcome = grade_card(label, &card, &mut record, &mut session, epoch());
            assert!(outcome.is_no_effect(), "{label:?} should not score");
        }
        assert_eq!(session.xp, 0);
        assert_eq!(session.streak, 0);
        assert_eq!(session.best_streak, 0);
        assert_eq!(record, MasteryRecord::default());
    }

    #[test]
    fn slow_answer_earns_less() {
        let (card, mut record, mut session) = fresh();
        let later = epoch() + Duration::milliseconds(9_000);
        let review = apply_grade(Grade::Hard, &card, &mut record, &mut session, later);
        assert_eq!(review.speed_bonus, 6);
        assert_eq!(review.gained_xp, 15);
    }

    #[test]
    fn streak_bonus_uses_pre_update_streak() {
        let (card, mut record, mut session) = fresh();
        session.streak = 9;
        let late = epoch() + Duration::seconds(60);
        let review = apply_grade(Grade::Easy, &card, &mut record, &mut session, late);
        assert_eq!(review.streak_bonus, 7);
        assert_eq!(review.gained_xp, 27);
        assert_eq!(session.streak, 11);
        assert_eq!(session.best_streak, 11);
    }

    #[test]
    fn mastery_achieved_when_crossing_threshold() {
        let (card, mut record, mut session) = fresh();
        let kinds: Vec<OutcomeKind> = (0..3)
            .map(|_| apply_grade(Grade::Easy, &card, &mut record, &mut session, epoch()).kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                OutcomeKind::Graded,
                OutcomeKind::MasteryAchieved,
                OutcomeKind::Graded
            ]
        );
        assert_eq!(record.mastery, 9);
    }

    #[test]
    fn mastery_message_names_category() {
        let (card, mut record, mut session) = fresh();
        record.mastery = 5;
        let review = apply_grade(Grade::Hard, &card, &mut record, &mut session, epoch());
        assert_eq!(review.kind, OutcomeKind::MasteryAchieved);
        assert_eq!(review.message(), "Mastered: Memory card!");
    }

    #[test]
    fn invariants_hold_over_grade_sequences() {
        let (card, mut record, mut session) = fresh();
        let script = "again hard again easy good again again easy easy good hard again";
        let mut last_xp = 0;
        for (i, label) in script.split_whitespace().enumerate() {
            let now = epoch() + Duration::seconds(i as i64 * 3);
            grade_card(label, &card, &mut record, &mut session, now);
            assert!(session.best_streak >= session.streak);
            assert!(session.xp >= last_xp);
            last_xp = session.xp;
        }
        assert_eq!(record.seen, 12);
    }
}
