//! Price of a chef engagement.
//!
//! A booking always covers [`BASE_HOURS`] at the chef's hourly rate, plus a
//! flat surcharge for every guest above [`BASELINE_GUESTS`]. Amounts are whole
//! currency units; there is no tax, proration or rounding.

use crate::domain::common::entities::app_errors::CoreError;

pub const BASE_HOURS: i64 = 4;
pub const BASELINE_GUESTS: i64 = 2;
pub const EXTRA_GUEST_SURCHARGE: i64 = 500;

fn too_large() -> CoreError {
    CoreError::Invalid("price is out of range".to_string())
}

/// Price of the base hours at `hourly_rate`.
pub fn base_price(hourly_rate: i64) -> Result<i64, CoreError> {
    hourly_rate.checked_mul(BASE_HOURS).ok_or_else(too_large)
}

/// `hourly_rate × 4 + max(0, (guests − 2) × 500)`
pub fn booking_total(hourly_rate: i64, guests: i64) -> Result<i64, CoreError> {
    let base_cost = base_price(hourly_rate)?;
    let guest_surcharge = guests
        .saturating_sub(BASELINE_GUESTS)
        .checked_mul(EXTRA_GUEST_SURCHARGE)
        .ok_or_else(too_large)?
        .max(0);

    base_cost.checked_add(guest_surcharge).ok_or_else(too_large)
}

/// Platform share of `amount` for a percentage rate, floored.
pub fn commission(amount: i64, percent: i64) -> i64 {
    amount * percent / 100
}

/// What the chef keeps of `revenue` once the platform commission is taken.
pub fn net_payout(revenue: i64, percent: i64) -> i64 {
    revenue - commission(revenue, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surcharge_applies_per_extra_guest() {
        assert_eq!(booking_total(2500, 4), Ok(11000));
    }

    #[test]
    fn two_guests_pay_the_base_price() {
        assert_eq!(booking_total(1800, 2), Ok(7200));
    }

    #[test]
    fn fewer_than_two_guests_never_discounts() {
        assert_eq!(booking_total(1800, 1), Ok(7200));
        assert_eq!(booking_total(1800, 0), Ok(7200));
    }

    #[test]
    fn total_matches_formula_over_a_grid() {
        for rate in (0..=5000).step_by(250) {
            for guests in 0..=20 {
                let expected = rate * 4 + ((guests - 2) * 500).max(0);
                assert_eq!(booking_total(rate, guests), Ok(expected), "rate={rate} guests={guests}");
            }
        }
    }

    #[test]
    fn overflowing_rates_are_rejected() {
        assert!(matches!(booking_total(i64::MAX, 2), Err(CoreError::Invalid(_))));
        assert!(matches!(booking_total(1800, i64::MAX), Err(CoreError::Invalid(_))));
        assert!(matches!(base_price(i64::MAX / 2), Err(CoreError::Invalid(_))));
    }

    #[test]
    fn commission_is_floored_and_payout_keeps_the_rest() {
        assert_eq!(commission(11000, 10), 1100);
        assert_eq!(commission(999, 10), 99);
        assert_eq!(net_payout(11000, 10), 9900);
        assert_eq!(net_payout(999, 10), 900);
    }
}
