//! Monetary amounts and the fixed prize board.
//!
//! All amounts are stored as integer cents. The board includes a one-cent
//! prize, so floating point never touches stored state; the offer calculator
//! converts through `f64` internally and comes back to whole dollars.

use serde::{Deserialize, Serialize};

/// A monetary amount in integer cents.
///
/// Ordering and equality follow the cent value, so `Money` works directly as
/// a sort key for board display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Create an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole dollars.
    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    /// Total cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Whole-dollar part, truncating any cents.
    #[must_use]
    pub const fn whole_dollars(self) -> u64 {
        self.0 / 100
    }
}

/// Number of containers on the board.
pub const CONTAINER_COUNT: usize = 26;

/// The fixed prize set, one value per container, $0.01 through $1,000,000.
pub const BOARD_VALUES: [Money; CONTAINER_COUNT] = [
    Money::from_cents(1),
    Money::from_dollars(1),
    Money::from_dollars(5),
    Money::from_dollars(10),
    Money::from_dollars(25),
    Money::from_dollars(50),
    Money::from_dollars(75),
    Money::from_dollars(100),
    Money::from_dollars(200),
    Money::from_dollars(300),
    Money::from_dollars(400),
    Money::from_dollars(500),
    Money::from_dollars(750),
    Money::from_dollars(1_000),
    Money::from_dollars(5_000),
    Money::from_dollars(10_000),
    Money::from_dollars(25_000),
    Money::from_dollars(50_000),
    Money::from_dollars(75_000),
    Money::from_dollars(100_000),
    Money::from_dollars(200_000),
    Money::from_dollars(300_000),
    Money::from_dollars(400_000),
    Money::from_dollars(500_000),
    Money::from_dollars(750_000),
    Money::from_dollars(1_000_000),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_conversions() {
        let penny = Money::from_cents(1);
        assert_eq!(penny.cents(), 1);
        assert_eq!(penny.whole_dollars(), 0);

        let grand = Money::from_dollars(1_000);
        assert_eq!(grand.cents(), 100_000);
        assert_eq!(grand.whole_dollars(), 1_000);
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::from_cents(1) < Money::from_dollars(1));
        assert!(Money::from_dollars(750_000) < Money::from_dollars(1_000_000));
    }

    #[test]
    fn test_board_values_are_distinct_and_sorted() {
        for pair in BOARD_VALUES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_board_extremes() {
        assert_eq!(BOARD_VALUES[0], Money::from_cents(1));
        assert_eq!(BOARD_VALUES[CONTAINER_COUNT - 1], Money::from_dollars(1_000_000));
    }

    #[test]
    fn test_money_serde_roundtrip() {
        let amount = Money::from_dollars(25_000);
        let json = serde_json::to_string(&amount).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, back);
    }
}
