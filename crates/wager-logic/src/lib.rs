//! Wager Logic
//!
//! Rules engine for a trivia wagering game in the style of Wits & Wagers.
//! Players guess a number, the guesses are laid out on a betting mat with
//! odds, everyone bets two markers (plus chips from round two on), and the
//! guess closest to the answer without going over pays out.
//!
//! All entry points are pure functions over borrowed input. This crate is
//! compiled to:
//! - Native (for the game host)
//! - WASM (for the browser client)

mod arrange;
mod chips;
mod deck;
mod payout;
mod phase;
mod questions;
mod random;
mod round;
mod slots;
mod winner;

#[cfg(feature = "wasm")]
mod wasm;

/// Player identifier as issued by the host (e.g. an auth uid).
pub type PlayerId = String;

pub use arrange::{arrange, Answer, ArrangedSlot, Arrangement, PlacedAnswer};
pub use chips::{
    add, clamp_non_negative, points_of, stake_points, subtract, wallet_from_points, ChipStake, ChipWallet,
    BLUE_POINTS, GREEN_POINTS, RED_POINTS,
};
pub use deck::build_question_deck;
pub use payout::{settle, settle_with_rules, BetMarker, BetSlip, PayoutResult, PayoutRules, MARKERS_PER_PLAYER};
pub use phase::{GameProgress, GameSettings, Phase};
pub use questions::{find_question, Question, QUESTIONS};
pub use random::SeededRng;
pub use round::{standings, RoundBook, RoundReport, Standing};
pub use slots::{LayoutError, OddsTable, Slot, GUESS_SLOTS, SLOT_COUNT, SLOT_ODDS, SLOT_ORDER};
pub use winner::{best_value, resolve, RoundOutcome};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_thread_safe() {
        assert_send_sync::<Arrangement>();
        assert_send_sync::<RoundOutcome>();
        assert_send_sync::<PayoutResult>();
        assert_send_sync::<RoundBook>();
    }

    #[test]
    fn test_concurrent_rounds_agree() {
        let answers: Vec<Answer> = (0..12).map(|i| Answer::new(format!("p{:02}", i), i * 7 % 23, i as u64)).collect();
        let expected = arrange(&answers);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let answers = answers.clone();
                std::thread::spawn(move || arrange(&answers))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_all_too_high_round() {
        let answers = vec![Answer::new("A", 200, 0), Answer::new("B", 300, 1)];
        let arrangement = arrange(&answers);
        let outcome = resolve(&answers, 100, &arrangement);
        assert!(outcome.is_all_too_high());

        let wallets: BTreeMap<PlayerId, ChipWallet> =
            [("A".to_string(), ChipWallet::reds(4)), ("B".to_string(), ChipWallet::reds(4))].into_iter().collect();
        let bets = vec![
            BetSlip::new("A", vec![BetMarker::with_stake(0, Slot::AllTooHigh, ChipWallet::reds(2))]),
            BetSlip::new("B", vec![BetMarker::with_stake(0, Slot::P3R, ChipWallet::reds(2))]),
        ];
        let result = settle(&wallets, &bets, outcome.winning_slot, outcome.winning_author.as_deref(), 1);

        // A: 2 back plus (1 + 2) * 6
        assert_eq!(result.wallet_of("A").points(), 4 + 18);
        assert_eq!(result.wallet_of("B").points(), 2);
    }
}
