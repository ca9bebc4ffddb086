//! Banker offer calculation.
//!
//! Pure function of the unopened values and the round number; the session
//! calls it once per completed elimination batch. The offer fraction starts
//! at 55% of the expected value in round 1 and grows 5 points per round with
//! no cap, so a long enough holdout can push the offer past the average.

use super::money::Money;

/// Compute the banker's offer for the given unopened values (the chosen
/// container's value included) and 1-based round number.
///
/// `floor(average × (0.5 + 0.05 × round))` in whole dollars, then truncated
/// to the nearest 1000/100/10 dollars depending on magnitude so offers read
/// like round numbers.
#[must_use]
pub fn banker_offer(unopened: &[Money], round: u32) -> Money {
    if unopened.is_empty() {
        return Money::from_dollars(0);
    }

    let total_cents: u64 = unopened.iter().map(|m| m.cents()).sum();
    let average_dollars = total_cents as f64 / 100.0 / unopened.len() as f64;

    let fraction = 0.5 + 0.05 * f64::from(round);
    let raw = (average_dollars * fraction).floor() as u64;

    Money::from_dollars(round_down_by_magnitude(raw))
}

/// Truncate a dollar amount to the nearest 1000 if over 10000, nearest 100
/// if over 1000, nearest 10 if over 100, otherwise leave it alone.
fn round_down_by_magnitude(dollars: u64) -> u64 {
    if dollars > 10_000 {
        dollars / 1_000 * 1_000
    } else if dollars > 1_000 {
        dollars / 100 * 100
    } else if dollars > 100 {
        dollars / 10 * 10
    } else {
        dollars
    }
}
