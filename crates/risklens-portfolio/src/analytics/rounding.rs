//! Decimal rounding helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for allocation percentages and risk scores.
pub const PERCENT_DP: u32 = 2;

/// Decimal places for the Herfindahl-Hirschman Index.
pub const HHI_DP: u32 = 4;

/// Rounds half away from zero to `dp` decimal places.
///
/// ```
/// use risklens_portfolio::analytics::round_half_up;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_half_up(dec!(33.335), 2), dec!(33.34));
/// assert_eq!(round_half_up(dec!(0.12345), 4), dec!(0.1235));
/// ```
#[must_use]
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Share of `part` in `total` as a percentage rounded to [`PERCENT_DP`].
///
/// Divides before scaling so holdings near the top of the `Decimal` range
/// still fit. Returns `None` on a zero `total` or if the result overflows.
#[must_use]
pub(crate) fn percent_of(part: Decimal, total: Decimal) -> Option<Decimal> {
    let share = part.checked_div(total)?;
    let pct = share.checked_mul(Decimal::ONE_HUNDRED)?;
    Some(round_half_up(pct, PERCENT_DP))
}
