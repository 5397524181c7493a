//! Winning guess resolution
//!
//! The winning guess is the closest one that does not go over the correct
//! answer. If every guess is over, the round resolves to `ALL_TOO_HIGH`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arrange::{Answer, Arrangement};
use crate::slots::Slot;
use crate::PlayerId;

/// Result of revealing the correct answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winning_slot: Slot,
    /// Author of the winning guess; `None` when everyone was too high.
    pub winning_author: Option<PlayerId>,
}

impl RoundOutcome {
    pub fn all_too_high() -> Self {
        Self { winning_slot: Slot::AllTooHigh, winning_author: None }
    }

    pub fn is_all_too_high(&self) -> bool {
        self.winning_slot == Slot::AllTooHigh
    }
}

/// Largest submitted value not exceeding `correct`.
pub fn best_value(answers: &[Answer], correct: i64) -> Option<i64> {
    answers.iter().map(|a| a.value).filter(|v| *v <= correct).max()
}

/// Resolve the round.
///
/// Among several authors of the winning value, the first one in the
/// arrangement's stacking order is reported. Falls back to `P2` if the
/// author is somehow missing from the arrangement.
pub fn resolve(answers: &[Answer], correct: i64, arrangement: &Arrangement) -> RoundOutcome {
    let Some(best) = best_value(answers, correct) else {
        debug!(correct, answers = answers.len(), "every guess too high");
        return RoundOutcome::all_too_high();
    };

    let placed = arrangement
        .slots
        .iter()
        .flat_map(|s| s.answers.iter())
        .find(|p| p.value == best)
        .map(|p| p.player.clone());

    // Not reachable when the arrangement was built from the same answers
    let author = match placed {
        Some(player) => player,
        None => match answers.iter().find(|a| a.value == best) {
            Some(answer) => answer.player.clone(),
            None => return RoundOutcome::all_too_high(),
        },
    };

    let winning_slot = arrangement.slot_of(&author).unwrap_or(Slot::P2);
    debug!(correct, best, %winning_slot, author = %author, "round resolved");

    RoundOutcome { winning_slot, winning_author: Some(author) }
}
