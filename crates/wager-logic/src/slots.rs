//! Betting mat layout and payout odds

use serde::{Deserialize, Serialize};

/// A betting slot on the mat, in left-to-right board order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Special outcome: every guess was above the correct answer.
    #[serde(rename = "ALL_TOO_HIGH")]
    AllTooHigh,
    P6L,
    P5L,
    P4L,
    P3L,
    /// Center slot, reserved for a single median value.
    P2,
    P3R,
    P4R,
    P5R,
    P6R,
}

/// Number of slots on the mat, including `ALL_TOO_HIGH`.
pub const SLOT_COUNT: usize = 10;

/// Every slot, left to right.
pub const SLOT_ORDER: [Slot; SLOT_COUNT] = [
    Slot::AllTooHigh,
    Slot::P6L,
    Slot::P5L,
    Slot::P4L,
    Slot::P3L,
    Slot::P2,
    Slot::P3R,
    Slot::P4R,
    Slot::P5R,
    Slot::P6R,
];

/// Slots that can hold guesses, left to right. `ALL_TOO_HIGH` never does.
pub const GUESS_SLOTS: [Slot; 9] = [
    Slot::P6L,
    Slot::P5L,
    Slot::P4L,
    Slot::P3L,
    Slot::P2,
    Slot::P3R,
    Slot::P4R,
    Slot::P5R,
    Slot::P6R,
];

/// Odds printed on the physical mat.
pub const SLOT_ODDS: [(Slot, u32); SLOT_COUNT] = [
    (Slot::AllTooHigh, 6),
    (Slot::P6L, 6),
    (Slot::P5L, 5),
    (Slot::P4L, 4),
    (Slot::P3L, 3),
    (Slot::P2, 2),
    (Slot::P3R, 3),
    (Slot::P4R, 4),
    (Slot::P5R, 5),
    (Slot::P6R, 6),
];

impl Slot {
    /// Position in `SLOT_ORDER`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Odds under the standard mat.
    pub const fn odds(self) -> u32 {
        SLOT_ODDS[self.index()].1
    }

    /// Board label, e.g. `"P3L"` or `"ALL_TOO_HIGH"`.
    pub const fn label(self) -> &'static str {
        match self {
            Slot::AllTooHigh => "ALL_TOO_HIGH",
            Slot::P6L => "P6L",
            Slot::P5L => "P5L",
            Slot::P4L => "P4L",
            Slot::P3L => "P3L",
            Slot::P2 => "P2",
            Slot::P3R => "P3R",
            Slot::P4R => "P4R",
            Slot::P5R => "P5R",
            Slot::P6R => "P6R",
        }
    }

    pub fn from_label(label: &str) -> Option<Slot> {
        SLOT_ORDER.iter().copied().find(|s| s.label() == label)
    }

    pub const fn holds_guesses(self) -> bool {
        !matches!(self, Slot::AllTooHigh)
    }
}

impl core::fmt::Display for Slot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised while building an odds table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// No odds were given for this slot.
    MissingSlot(Slot),
    /// The slot appears more than once.
    DuplicateSlot(Slot),
    /// A slot would pay nothing.
    ZeroOdds(Slot),
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::MissingSlot(slot) => write!(f, "odds table is missing slot {}", slot),
            LayoutError::DuplicateSlot(slot) => write!(f, "odds table lists slot {} twice", slot),
            LayoutError::ZeroOdds(slot) => write!(f, "slot {} has zero odds", slot),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Validated odds for every slot on the mat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsTable {
    odds: [u32; SLOT_COUNT],
}

impl OddsTable {
    /// The physical mat: 6 on the edges and `ALL_TOO_HIGH`, 2 in the center.
    pub const fn standard() -> Self {
        let mut odds = [0u32; SLOT_COUNT];
        let mut i = 0;
        while i < SLOT_COUNT {
            odds[i] = SLOT_ODDS[i].1;
            i += 1;
        }
        Self { odds }
    }

    /// Build a table from `(slot, odds)` pairs. Every slot must appear exactly
    /// once with non-zero odds.
    pub fn from_entries(entries: &[(Slot, u32)]) -> Result<Self, LayoutError> {
        let mut seen = [false; SLOT_COUNT];
        let mut odds = [0u32; SLOT_COUNT];

        for &(slot, value) in entries {
            if seen[slot.index()] {
                return Err(LayoutError::DuplicateSlot(slot));
            }
            if value == 0 {
                return Err(LayoutError::ZeroOdds(slot));
            }
            seen[slot.index()] = true;
            odds[slot.index()] = value;
        }

        if let Some(missing) = SLOT_ORDER.iter().find(|s| !seen[s.index()]) {
            return Err(LayoutError::MissingSlot(*missing));
        }

        Ok(Self { odds })
    }

    pub fn odds(&self, slot: Slot) -> u32 {
        self.odds[slot.index()]
    }

    /// `(slot, odds)` pairs in board order.
    pub fn entries(&self) -> impl Iterator<Item = (Slot, u32)> + '_ {
        SLOT_ORDER.iter().map(move |&s| (s, self.odds(s)))
    }
}

impl Default for OddsTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_matches_index() {
        for (i, slot) in SLOT_ORDER.iter().enumerate() {
            assert_eq!(slot.index(), i);
            assert_eq!(SLOT_ODDS[i].0, *slot);
        }
    }

    #[test]
    fn test_odds_are_symmetric() {
        for i in 0..4 {
            assert_eq!(GUESS_SLOTS[i].odds(), GUESS_SLOTS[8 - i].odds());
        }
        assert_eq!(Slot::P2.odds(), 2);
        assert_eq!(Slot::AllTooHigh.odds(), 6);
        assert_eq!(Slot::P6L.odds(), 6);
        assert_eq!(Slot::P3R.odds(), 3);
    }

    #[test]
    fn test_guess_slots_exclude_all_too_high() {
        assert!(!GUESS_SLOTS.contains(&Slot::AllTooHigh));
        assert!(GUESS_SLOTS.iter().all(|s| s.holds_guesses()));
        assert_eq!(&SLOT_ORDER[1..], &GUESS_SLOTS[..]);
    }

    #[test]
    fn test_labels_round_trip() {
        for slot in SLOT_ORDER {
            assert_eq!(Slot::from_label(slot.label()), Some(slot));
        }
        assert_eq!(Slot::from_label("P7L"), None);
    }

    #[test]
    fn test_serde_uses_board_labels() {
        assert_eq!(serde_json::to_string(&Slot::AllTooHigh).unwrap(), "\"ALL_TOO_HIGH\"");
        assert_eq!(serde_json::to_string(&Slot::P4R).unwrap(), "\"P4R\"");
        let slot: Slot = serde_json::from_str("\"P5L\"").unwrap();
        assert_eq!(slot, Slot::P5L);
    }

    #[test]
    fn test_standard_table_matches_constants() {
        let table = OddsTable::standard();
        for (slot, odds) in SLOT_ODDS {
            assert_eq!(table.odds(slot), odds);
        }
        assert_eq!(OddsTable::from_entries(&SLOT_ODDS), Ok(table));
    }

    #[test]
    fn test_table_rejects_missing_slot() {
        let entries: Vec<_> = SLOT_ODDS.iter().copied().filter(|(s, _)| *s != Slot::P4L).collect();
        assert_eq!(OddsTable::from_entries(&entries), Err(LayoutError::MissingSlot(Slot::P4L)));
    }

    #[test]
    fn test_table_rejects_duplicates_and_zero() {
        let mut entries = SLOT_ODDS.to_vec();
        entries.push((Slot::P2, 2));
        assert_eq!(OddsTable::from_entries(&entries), Err(LayoutError::DuplicateSlot(Slot::P2)));

        let mut entries = SLOT_ODDS.to_vec();
        entries[3] = (Slot::P4L, 0);
        assert_eq!(OddsTable::from_entries(&entries), Err(LayoutError::ZeroOdds(Slot::P4L)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LayoutError::MissingSlot(Slot::AllTooHigh).to_string(),
            "odds table is missing slot ALL_TOO_HIGH"
        );
    }
}
