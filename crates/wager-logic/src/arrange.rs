//! Placement of guesses onto the betting mat
//!
//! Distinct values are sorted low to high and laid out across the guess slots
//! the way the physical board is dealt:
//! - an odd number of distinct values puts the median on `P2`;
//! - an even number leaves `P2` empty, the two middle values land on `P3L`/`P3R`;
//! - duplicates stack on the slot of their value;
//! - more distinct values than slots stack the extras onto the outermost
//!   slots, alternating left then right.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::slots::{Slot, GUESS_SLOTS, SLOT_COUNT, SLOT_ORDER};
use crate::PlayerId;

/// A player's guess for the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub player: PlayerId,
    pub value: i64,
    /// Submission time in milliseconds since the epoch.
    #[serde(default)]
    pub submitted_at: u64,
}

impl Answer {
    pub fn new(player: impl Into<PlayerId>, value: i64, submitted_at: u64) -> Self {
        Self { player: player.into(), value, submitted_at }
    }
}

/// A guess as shown on the mat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedAnswer {
    pub player: PlayerId,
    pub value: i64,
}

/// One slot of the mat with the guesses stacked on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrangedSlot {
    pub slot: Slot,
    pub answers: Vec<PlacedAnswer>,
}

/// Full placement of a round's guesses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    /// Every slot in board order, including empty ones.
    pub slots: Vec<ArrangedSlot>,
    /// Slot holding each player's answer.
    pub player_slots: BTreeMap<PlayerId, Slot>,
}

impl Arrangement {
    /// All slots present and empty.
    pub fn empty() -> Self {
        Self {
            slots: SLOT_ORDER
                .iter()
                .map(|&slot| ArrangedSlot { slot, answers: Vec::new() })
                .collect(),
            player_slots: BTreeMap::new(),
        }
    }

    pub fn answers_in(&self, slot: Slot) -> &[PlacedAnswer] {
        &self.slots[slot.index()].answers
    }

    pub fn slot_of(&self, player: &str) -> Option<Slot> {
        self.player_slots.get(player).copied()
    }

    /// Total number of guesses on the mat.
    pub fn placed_count(&self) -> usize {
        self.slots.iter().map(|s| s.answers.len()).sum()
    }

    /// Slots that hold at least one guess, in board order.
    pub fn occupied(&self) -> impl Iterator<Item = &ArrangedSlot> {
        self.slots.iter().filter(|s| !s.answers.is_empty())
    }

    fn push(&mut self, slot: Slot, answer: PlacedAnswer) {
        self.player_slots.entry(answer.player.clone()).or_insert(slot);
        self.slots[slot.index()].answers.push(answer);
    }
}

impl Default for Arrangement {
    fn default() -> Self {
        Self::empty()
    }
}

/// Slots available for a given number of distinct values.
fn usable_slots(distinct: usize) -> Vec<Slot> {
    if distinct % 2 == 0 {
        GUESS_SLOTS.iter().copied().filter(|s| *s != Slot::P2).collect()
    } else {
        GUESS_SLOTS.to_vec()
    }
}

/// Slot for each distinct value, in the same (ascending) order.
fn assign_slots(distinct: usize) -> Vec<Slot> {
    let usable = usable_slots(distinct);

    if distinct <= usable.len() {
        // Parity keeps (usable - distinct) even, so the window is exactly centered
        let offset = (usable.len() - distinct) / 2;
        return usable[offset..offset + distinct].to_vec();
    }

    let leftmost = usable[0];
    let rightmost = usable[usable.len() - 1];
    let overflow = distinct - usable.len();
    debug!(distinct, overflow, "more distinct guesses than slots, stacking on the edges");

    let mut assigned = usable;
    assigned.extend((0..overflow).map(|i| if i % 2 == 0 { leftmost } else { rightmost }));
    assigned
}

/// Place every answer onto the mat.
///
/// Deterministic: the same answer set always yields the same arrangement,
/// independent of input order.
pub fn arrange(answers: &[Answer]) -> Arrangement {
    let mut arrangement = Arrangement::empty();
    if answers.is_empty() {
        return arrangement;
    }

    let mut by_value: BTreeMap<i64, Vec<&Answer>> = BTreeMap::new();
    for answer in answers {
        by_value.entry(answer.value).or_default().push(answer);
    }

    let targets = assign_slots(by_value.len());

    for ((value, mut group), slot) in by_value.into_iter().zip(targets) {
        group.sort_by(|a, b| a.player.cmp(&b.player));
        trace!(value, %slot, count = group.len(), "placing guesses");
        for answer in group {
            arrangement.push(slot, PlacedAnswer { player: answer.player.clone(), value });
        }
    }

    debug_assert_eq!(arrangement.slots.len(), SLOT_COUNT);
    arrangement
}
