//! Chip wallet arithmetic
//!
//! Three denominations with fixed point values: red = 1, blue = 5, green = 25.

use core::ops::{Add, Sub};
use serde::{Deserialize, Serialize};

/// Point value of one red chip.
pub const RED_POINTS: i64 = 1;
/// Point value of one blue chip.
pub const BLUE_POINTS: i64 = 5;
/// Point value of one green chip.
pub const GREEN_POINTS: i64 = 25;

/// A pile of chips, either held in a wallet or committed as a stake.
///
/// Counts are signed so that `subtract` can report an over-spend; anything
/// handed back to callers by the payout engine has been clamped to `>= 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChipWallet {
    pub red: i64,
    pub blue: i64,
    pub green: i64,
}

/// Explicit chip commitment on a bet marker. Same shape as a wallet.
pub type ChipStake = ChipWallet;

impl ChipWallet {
    pub const EMPTY: ChipWallet = ChipWallet { red: 0, blue: 0, green: 0 };

    pub const fn new(red: i64, blue: i64, green: i64) -> Self {
        Self { red, blue, green }
    }

    /// Wallet holding only red chips.
    pub const fn reds(red: i64) -> Self {
        Self { red, blue: 0, green: 0 }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn points(&self) -> i64 {
        points_of(self)
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &ChipWallet) -> ChipWallet {
        ChipWallet {
            red: self.red.min(other.red),
            blue: self.blue.min(other.blue),
            green: self.green.min(other.green),
        }
    }
}

impl Add for ChipWallet {
    type Output = ChipWallet;

    fn add(self, rhs: ChipWallet) -> ChipWallet {
        add(&self, &rhs)
    }
}

impl Sub for ChipWallet {
    type Output = ChipWallet;

    fn sub(self, rhs: ChipWallet) -> ChipWallet {
        subtract(&self, &rhs)
    }
}

/// Weighted point value of a wallet: `25*green + 5*blue + red`.
pub fn points_of(wallet: &ChipWallet) -> i64 {
    wallet.green * GREEN_POINTS + wallet.blue * BLUE_POINTS + wallet.red * RED_POINTS
}

/// Greedy decomposition of a point total into chips (green, then blue, then red).
///
/// Only meaningful for `points >= 0`. Preserves the point value, not the
/// chip composition of whatever wallet the points came from.
pub fn wallet_from_points(points: i64) -> ChipWallet {
    let green = points / GREEN_POINTS;
    let rest = points - green * GREEN_POINTS;
    let blue = rest / BLUE_POINTS;
    let red = rest - blue * BLUE_POINTS;
    ChipWallet { red, blue, green }
}

pub fn add(a: &ChipWallet, b: &ChipWallet) -> ChipWallet {
    ChipWallet {
        red: a.red + b.red,
        blue: a.blue + b.blue,
        green: a.green + b.green,
    }
}

/// Componentwise difference. May go negative; clamp before storing.
pub fn subtract(a: &ChipWallet, b: &ChipWallet) -> ChipWallet {
    ChipWallet {
        red: a.red - b.red,
        blue: a.blue - b.blue,
        green: a.green - b.green,
    }
}

pub fn clamp_non_negative(wallet: &ChipWallet) -> ChipWallet {
    ChipWallet {
        red: wallet.red.max(0),
        blue: wallet.blue.max(0),
        green: wallet.green.max(0),
    }
}

/// Point value of an explicit chip stake. Excludes the marker's own point.
pub fn stake_points(stake: &ChipStake) -> i64 {
    points_of(stake)
}
