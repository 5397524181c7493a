//! Round book: submissions for one round and the end-of-round settlement
//!
//! Humans and bots submit through the same two calls, `submit_answer` and
//! `place_bets`. The book only collects; arrangement, outcome and payout are
//! recomputed from its contents on every request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arrange::{arrange, Answer, Arrangement};
use crate::chips::ChipWallet;
use crate::payout::{settle_with_rules, BetMarker, BetSlip, PayoutResult, PayoutRules, MARKERS_PER_PLAYER};
use crate::winner::{resolve, RoundOutcome};
use crate::PlayerId;

/// Everything produced when a round is revealed and paid out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round_index: u32,
    pub correct_answer: i64,
    pub arrangement: Arrangement,
    pub outcome: RoundOutcome,
    pub payout: PayoutResult,
}

/// Answers and bets collected for a single round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundBook {
    round_index: u32,
    rules: PayoutRules,
    answers: Vec<Answer>,
    bets: Vec<BetSlip>,
}

impl RoundBook {
    pub fn new(round_index: u32) -> Self {
        Self::with_rules(round_index, PayoutRules::standard())
    }

    pub fn with_rules(round_index: u32, rules: PayoutRules) -> Self {
        Self { round_index, rules, answers: Vec::new(), bets: Vec::new() }
    }

    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    pub fn chips_allowed(&self) -> bool {
        self.rules.chips_allowed(self.round_index)
    }

    /// Record a guess. A second submission from the same player replaces the
    /// first. Answers stay ordered by submission time, then player id.
    pub fn submit_answer(&mut self, player: impl Into<PlayerId>, value: i64, submitted_at: u64) {
        let answer = Answer::new(player, value, submitted_at);
        self.answers.retain(|a| a.player != answer.player);
        let at = self
            .answers
            .partition_point(|a| (a.submitted_at, &a.player) <= (answer.submitted_at, &answer.player));
        self.answers.insert(at, answer);
    }

    /// Replace a player's bet slip. Only the first two markers are kept and
    /// stakes are dropped while chips are not yet allowed.
    pub fn place_bets(&mut self, player: impl Into<PlayerId>, markers: Vec<BetMarker>) {
        let chips_allowed = self.chips_allowed();
        let markers = markers
            .into_iter()
            .take(MARKERS_PER_PLAYER)
            .map(|m| if chips_allowed { m } else { BetMarker { stake: ChipWallet::EMPTY, ..m } })
            .collect();
        let slip = BetSlip::new(player, markers);

        match self.bets.iter_mut().find(|b| b.player == slip.player) {
            Some(existing) => *existing = slip,
            None => self.bets.push(slip),
        }
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn bets(&self) -> &[BetSlip] {
        &self.bets
    }

    pub fn answer_of(&self, player: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.player == player)
    }

    pub fn bets_of(&self, player: &str) -> Option<&BetSlip> {
        self.bets.iter().find(|b| b.player == player)
    }

    pub fn has_answered(&self, player: &str) -> bool {
        self.answer_of(player).is_some()
    }

    /// A player counts as having bet once they have at least one marker down.
    pub fn has_bet(&self, player: &str) -> bool {
        self.bets_of(player).is_some_and(|b| !b.markers.is_empty())
    }

    /// True when every listed player has answered. False for an empty list.
    pub fn all_answered<'a>(&self, players: impl IntoIterator<Item = &'a str>) -> bool {
        let mut any = false;
        for player in players {
            if !self.has_answered(player) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn arrangement(&self) -> Arrangement {
        arrange(&self.answers)
    }

    pub fn reveal(&self, correct_answer: i64) -> RoundOutcome {
        resolve(&self.answers, correct_answer, &self.arrangement())
    }

    /// Arrange, resolve and pay out the round in one pass.
    pub fn settle(&self, wallets: &BTreeMap<PlayerId, ChipWallet>, correct_answer: i64) -> RoundReport {
        let arrangement = self.arrangement();
        let outcome = resolve(&self.answers, correct_answer, &arrangement);
        let payout = settle_with_rules(
            wallets,
            &self.bets,
            outcome.winning_slot,
            outcome.winning_author.as_deref(),
            self.round_index,
            &self.rules,
        );
        debug!(
            round = self.round_index,
            answers = self.answers.len(),
            bets = self.bets.len(),
            winning_slot = %outcome.winning_slot,
            "round settled"
        );

        RoundReport {
            round_index: self.round_index,
            correct_answer,
            arrangement,
            outcome,
            payout,
        }
    }
}

/// A player's place in the standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub points: i64,
    /// 1-based; tied players share a rank.
    pub rank: u32,
}

/// Rank players by wallet points, highest first. Ties share a rank and are
/// listed by player id.
pub fn standings(wallets: &BTreeMap<PlayerId, ChipWallet>) -> Vec<Standing> {
    let mut rows: Vec<(&PlayerId, i64)> = wallets.iter().map(|(p, w)| (p, w.points())).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out: Vec<Standing> = Vec::with_capacity(rows.len());
    for (i, (player, points)) in rows.into_iter().enumerate() {
        let rank = match out.last() {
            Some(prev) if prev.points == points => prev.rank,
            _ => i as u32 + 1,
        };
        out.push(Standing { player: player.clone(), points, rank });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::Slot;

    fn wallets(entries: &[(&str, ChipWallet)]) -> BTreeMap<PlayerId, ChipWallet> {
        entries.iter().map(|(p, w)| (p.to_string(), *w)).collect()
    }

    #[test]
    fn test_answers_ordered_and_replaced() {
        let mut book = RoundBook::new(0);
        book.submit_answer("b", 10, 200);
        book.submit_answer("a", 20, 100);
        book.submit_answer("c", 30, 200);
        let order: Vec<&str> = book.answers().iter().map(|a| a.player.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);

        book.submit_answer("a", 25, 300);
        let order: Vec<&str> = book.answers().iter().map(|a| a.player.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(book.answer_of("a").map(|a| a.value), Some(25));
        assert_eq!(book.answers().len(), 3);
    }

    #[test]
    fn test_place_bets_normalizes() {
        let stake = ChipWallet::reds(2);
        let markers = vec![
            BetMarker::with_stake(0, Slot::P2, stake),
            BetMarker::with_stake(1, Slot::P3L, stake),
            BetMarker::with_stake(1, Slot::P6R, stake),
        ];

        let mut first = RoundBook::new(0);
        first.place_bets("a", markers.clone());
        let slip = first.bets_of("a").unwrap();
        assert_eq!(slip.markers.len(), 2);
        assert!(slip.markers.iter().all(|m| m.stake.is_empty()));

        let mut later = RoundBook::new(1);
        later.place_bets("a", markers);
        later.place_bets("a", vec![BetMarker::with_stake(0, Slot::P4R, stake)]);
        assert_eq!(later.bets().len(), 1);
        assert_eq!(later.bets_of("a").unwrap().markers, vec![BetMarker::with_stake(0, Slot::P4R, stake)]);
    }

    #[test]
    fn test_progress_queries() {
        let mut book = RoundBook::new(0);
        assert!(!book.all_answered(Vec::<&str>::new()));
        book.submit_answer("a", 1, 0);
        assert!(book.all_answered(["a"]));
        assert!(!book.all_answered(["a", "b"]));

        assert!(!book.has_bet("a"));
        book.place_bets("a", vec![]);
        assert!(!book.has_bet("a"));
        book.place_bets("a", vec![BetMarker::new(0, Slot::P2)]);
        assert!(book.has_bet("a"));
    }

    #[test]
    fn test_full_round() {
        let mut book = RoundBook::new(1);
        book.submit_answer("A", 50, 1);
        book.submit_answer("B", 50, 2);
        book.submit_answer("C", 90, 3);

        book.place_bets("A", vec![
            BetMarker::with_stake(0, Slot::P3L, ChipWallet::new(0, 1, 0)),
            BetMarker::new(1, Slot::P3R),
        ]);
        book.place_bets("C", vec![
            BetMarker::with_stake(0, Slot::P3R, ChipWallet::reds(3)),
            BetMarker::new(1, Slot::AllTooHigh),
        ]);

        let start = wallets(&[
            ("A", ChipWallet::new(0, 1, 0)),
            ("B", ChipWallet::EMPTY),
            ("C", ChipWallet::reds(3)),
        ]);
        let report = book.settle(&start, 60);

        assert_eq!(report.outcome.winning_slot, Slot::P3L);
        assert_eq!(report.outcome.winning_author.as_deref(), Some("A"));
        assert_eq!(report.outcome, book.reveal(60));

        // A: stake 5 back, (1 + 5) * 3 = 18 won, 3 bonus
        assert_eq!(report.payout.wallet_of("A").points(), 5 + 18 + 3);
        assert_eq!(report.payout.delta_of("A"), 21);
        // B never bet and only authored a tied guess
        assert_eq!(report.payout.wallet_of("B"), ChipWallet::EMPTY);
        // C: stake lost
        assert_eq!(report.payout.wallet_of("C"), ChipWallet::EMPTY);
        assert_eq!(report.payout.delta_of("C"), -3);
    }

    #[test]
    fn test_round_with_no_answers() {
        let mut book = RoundBook::new(2);
        book.place_bets("a", vec![BetMarker::new(0, Slot::AllTooHigh)]);

        let report = book.settle(&BTreeMap::new(), 10);

        assert!(report.outcome.is_all_too_high());
        assert_eq!(report.arrangement.placed_count(), 0);
        assert_eq!(report.payout.wallet_of("a").points(), 6);
    }

    #[test]
    fn test_standings() {
        let table = standings(&wallets(&[
            ("amy", ChipWallet::reds(5)),
            ("bob", ChipWallet::new(0, 0, 1)),
            ("cat", ChipWallet::new(0, 1, 0)),
            ("dan", ChipWallet::EMPTY),
        ]));

        let rows: Vec<(&str, i64, u32)> = table.iter().map(|s| (s.player.as_str(), s.points, s.rank)).collect();
        assert_eq!(rows, vec![("bob", 25, 1), ("amy", 5, 2), ("cat", 5, 2), ("dan", 0, 4)]);
    }
}
