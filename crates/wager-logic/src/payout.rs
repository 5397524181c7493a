//! Bet settlement and chip payouts
//!
//! Every player places two betting markers. A marker is worth one point on
//! its own and can never be lost; chips added on top (allowed from the second
//! round on) are lost on a wrong slot and returned with winnings on the right
//! one. Settlement runs in three passes:
//! 1. escrow: staked chips leave the wallet, clamped to what the player owns;
//! 2. markers: each marker draws its stake from the player's escrow in order,
//!    winners get the stake back plus `(1 + stake) * odds`;
//! 3. bonus: the author of the winning guess gets three red chips.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chips::{clamp_non_negative, stake_points, subtract, wallet_from_points, ChipStake, ChipWallet};
use crate::slots::{OddsTable, Slot};
use crate::PlayerId;

/// Markers each player gets per round. Extra markers on a slip are ignored.
pub const MARKERS_PER_PLAYER: usize = 2;

/// One betting marker on the mat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetMarker {
    /// 0 or 1.
    pub marker_index: u8,
    pub slot: Slot,
    /// Chips added on top of the marker. Ignored in the first round.
    #[serde(default)]
    pub stake: ChipStake,
}

impl BetMarker {
    pub fn new(marker_index: u8, slot: Slot) -> Self {
        Self { marker_index, slot, stake: ChipWallet::EMPTY }
    }

    pub fn with_stake(marker_index: u8, slot: Slot, stake: ChipStake) -> Self {
        Self { marker_index, slot, stake }
    }
}

/// A player's markers for the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSlip {
    pub player: PlayerId,
    pub markers: Vec<BetMarker>,
}

impl BetSlip {
    pub fn new(player: impl Into<PlayerId>, markers: Vec<BetMarker>) -> Self {
        Self { player: player.into(), markers }
    }

    /// Markers that take part in settlement, in placement order.
    pub fn active_markers(&self) -> &[BetMarker] {
        let n = self.markers.len().min(MARKERS_PER_PLAYER);
        &self.markers[..n]
    }

    /// Componentwise sum of the declared stakes.
    pub fn declared_stake(&self) -> ChipStake {
        self.active_markers()
            .iter()
            .fold(ChipWallet::EMPTY, |acc, m| acc + m.stake)
    }
}

/// Tunable payout rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRules {
    pub odds: OddsTable,
    /// Point value of the marker itself.
    pub marker_base_points: i64,
    /// Credited to the author of the winning guess.
    pub guess_bonus: ChipWallet,
    /// First 0-based round in which chips may be staked.
    pub first_staking_round: u32,
}

impl PayoutRules {
    /// Rules of the boxed game.
    pub const fn standard() -> Self {
        Self {
            odds: OddsTable::standard(),
            marker_base_points: 1,
            guess_bonus: ChipWallet::reds(3),
            first_staking_round: 1,
        }
    }

    pub fn chips_allowed(&self, round_index: u32) -> bool {
        round_index >= self.first_staking_round
    }
}

impl Default for PayoutRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Wallets after settlement plus the signed point change of each player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutResult {
    pub wallets: BTreeMap<PlayerId, ChipWallet>,
    /// Informational; `wallets` is authoritative.
    pub deltas: BTreeMap<PlayerId, i64>,
}

impl PayoutResult {
    pub fn wallet_of(&self, player: &str) -> ChipWallet {
        self.wallets.get(player).copied().unwrap_or_default()
    }

    pub fn delta_of(&self, player: &str) -> i64 {
        self.deltas.get(player).copied().unwrap_or(0)
    }

    fn touch(&mut self, player: &str) {
        if !self.wallets.contains_key(player) {
            self.wallets.insert(player.to_owned(), ChipWallet::EMPTY);
        }
        if !self.deltas.contains_key(player) {
            self.deltas.insert(player.to_owned(), 0);
        }
    }

    fn credit(&mut self, player: &str, chips: ChipWallet, points: i64) {
        self.touch(player);
        if let Some(wallet) = self.wallets.get_mut(player) {
            *wallet = *wallet + chips;
        }
        if let Some(delta) = self.deltas.get_mut(player) {
            *delta += points;
        }
    }

    /// Move `stake` out of the player's wallet, clamped to what they hold.
    fn escrow(&mut self, player: &str, stake: ChipStake) -> ChipStake {
        self.touch(player);
        let Some(wallet) = self.wallets.get_mut(player) else {
            return ChipWallet::EMPTY;
        };
        let owned = clamp_non_negative(wallet);
        let held = clamp_non_negative(&stake).min(&owned);
        *wallet = clamp_non_negative(&subtract(&owned, &held));
        if let Some(delta) = self.deltas.get_mut(player) {
            *delta -= held.points();
        }
        held
    }
}

/// Settle a round under the standard rules.
pub fn settle(
    wallets: &BTreeMap<PlayerId, ChipWallet>,
    bets: &[BetSlip],
    winning_slot: Slot,
    winning_author: Option<&str>,
    round_index: u32,
) -> PayoutResult {
    settle_with_rules(wallets, bets, winning_slot, winning_author, round_index, &PayoutRules::standard())
}

/// Settle a round.
///
/// Never mutates its inputs. The result lists every player found in
/// `wallets`, in `bets`, or as the winning author.
pub fn settle_with_rules(
    wallets: &BTreeMap<PlayerId, ChipWallet>,
    bets: &[BetSlip],
    winning_slot: Slot,
    winning_author: Option<&str>,
    round_index: u32,
    rules: &PayoutRules,
) -> PayoutResult {
    let chips_allowed = rules.chips_allowed(round_index);

    let mut result = PayoutResult {
        wallets: wallets.clone(),
        deltas: wallets.keys().map(|p| (p.clone(), 0)).collect(),
    };

    // Escrow
    let mut escrow: BTreeMap<&str, ChipStake> = BTreeMap::new();
    for slip in bets {
        let held = if chips_allowed {
            result.escrow(&slip.player, slip.declared_stake())
        } else {
            result.touch(&slip.player);
            ChipWallet::EMPTY
        };
        if !held.is_empty() {
            debug!(player = %slip.player, points = held.points(), "stake escrowed");
        }
        escrow.insert(slip.player.as_str(), held);
    }

    // Markers
    let odds = rules.odds.odds(winning_slot) as i64;
    for slip in bets {
        let mut remaining = escrow.get(slip.player.as_str()).copied().unwrap_or_default();

        for marker in slip.active_markers() {
            let stake = if chips_allowed {
                let taken = clamp_non_negative(&marker.stake).min(&remaining);
                remaining = clamp_non_negative(&subtract(&remaining, &taken));
                taken
            } else {
                ChipWallet::EMPTY
            };

            if marker.slot != winning_slot {
                continue;
            }

            let staked = stake_points(&stake);
            if staked > 0 {
                result.credit(&slip.player, stake, staked);
            }

            let winnings = (rules.marker_base_points + staked) * odds;
            result.credit(&slip.player, wallet_from_points(winnings), winnings);
            debug!(
                player = %slip.player,
                marker = marker.marker_index,
                %winning_slot,
                staked,
                winnings,
                "marker paid"
            );
        }
    }

    // Bonus
    if let Some(author) = winning_author {
        result.credit(author, rules.guess_bonus, rules.guess_bonus.points());
    }

    result
}
