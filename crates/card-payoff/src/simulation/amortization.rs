//! Month-by-month payoff of a single balance under a fixed payment and a fixed
//! monthly compound rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Marker for "does not pay off within the simulation horizon".
pub const NON_CONVERGENT_MONTHS: u32 = 999;
/// Hard iteration cap per balance.
pub const SIMULATION_HORIZON_MONTHS: u32 = 600;
/// Remaining balance treated as paid off.
pub const PAID_OFF_TOLERANCE: Decimal = dec!(0.01);

/// Months until the balance reaches zero, or [`NON_CONVERGENT_MONTHS`].
pub fn months_to_payoff(principal: Decimal, payment: Decimal, monthly_rate: Decimal) -> u32 {
    if payment <= Decimal::ZERO
        || monthly_rate >= Decimal::ONE
        || payment <= principal.saturating_mul(monthly_rate)
    {
        return NON_CONVERGENT_MONTHS;
    }

    let growth = Decimal::ONE + monthly_rate;
    let mut balance = principal;
    let mut months = 0;

    while balance > PAID_OFF_TOLERANCE && months < SIMULATION_HORIZON_MONTHS {
        balance -= payment;
        if balance > Decimal::ZERO {
            balance = match balance.checked_mul(growth) {
                Some(next) => next,
                None => return NON_CONVERGENT_MONTHS,
            };
        }
        months += 1;
    }

    months
}

/// Payoff figures for one balance under one payment plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayoffProjection {
    pub payment: Decimal,
    pub months: u32,
    pub total_paid: Decimal,
    /// Total paid minus principal; the overshoot of the last installment is
    /// counted here rather than refunded.
    pub total_interest: Decimal,
}

impl PayoffProjection {
    pub fn converges(&self) -> bool {
        self.months != NON_CONVERGENT_MONTHS
    }
}

/// Runs [`months_to_payoff`] and derives the amount paid and interest, charging
/// the full payment every month up to the month count (sentinel included).
pub fn project_payoff(
    principal: Decimal,
    payment: Decimal,
    monthly_rate: Decimal,
) -> PayoffProjection {
    let months = months_to_payoff(principal, payment, monthly_rate);
    let total_paid = payment.saturating_mul(Decimal::from(months));

    PayoffProjection {
        payment,
        months,
        total_paid,
        total_interest: total_paid.saturating_sub(principal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_not_covering_interest_never_converges() {
        let stuck = |payment| months_to_payoff(dec!(1000), payment, dec!(0.10));
        assert_eq!(stuck(dec!(100)), NON_CONVERGENT_MONTHS);
        assert_eq!(stuck(dec!(99.99)), NON_CONVERGENT_MONTHS);
    }

    #[test]
    fn degenerate_inputs_short_circuit() {
        let zero = Decimal::ZERO;
        assert_eq!(months_to_payoff(dec!(1000), zero, dec!(0.05)), NON_CONVERGENT_MONTHS);
        assert_eq!(months_to_payoff(dec!(1000), dec!(5000), Decimal::ONE), NON_CONVERGENT_MONTHS);
        assert_eq!(months_to_payoff(zero, zero, zero), NON_CONVERGENT_MONTHS);
    }

    #[test]
    fn zero_balance_is_already_paid() {
        assert_eq!(months_to_payoff(Decimal::ZERO, dec!(50), dec!(0.12)), 0);
        assert_eq!(months_to_payoff(dec!(0.01), dec!(50), dec!(0.12)), 0);
    }

    #[test]
    fn interest_free_balance_pays_off_linearly() {
        assert_eq!(months_to_payoff(dec!(1000), dec!(100), Decimal::ZERO), 10);
        assert_eq!(months_to_payoff(dec!(1000), dec!(300), Decimal::ZERO), 4);
    }

    #[test]
    fn single_payment_clears_small_balance() {
        assert_eq!(months_to_payoff(dec!(80), dec!(100), dec!(0.15)), 1);
    }

    #[test]
    fn compounding_matches_hand_computed_schedule() {
        // 1000 at 10% with a 200 payment:
        // 800*1.1=880, 680*1.1=748, 548*1.1=602.8, 402.8*1.1=443.08,
        // 243.08*1.1=267.388, 67.388*1.1=74.1268, then paid in month 7.
        assert_eq!(months_to_payoff(dec!(1000), dec!(200), dec!(0.10)), 7);
    }

    #[test]
    fn larger_payment_pays_off_sooner() {
        let slow = months_to_payoff(dec!(1000), dec!(110), dec!(0.10));
        let fast = months_to_payoff(dec!(1000), dec!(190), dec!(0.10));
        assert!(fast < slow, "expected {fast} < {slow}");
    }

    #[test]
    fn barely_covering_payment_hits_horizon() {
        // principal sits just under payment / rate at a 0.1% monthly rate
        let months = months_to_payoff(dec!(10000), dec!(10.01), dec!(0.001));
        assert_eq!(months, SIMULATION_HORIZON_MONTHS);
    }

    #[test]
    fn projection_derives_interest_from_total_paid() {
        let projection = project_payoff(dec!(1000), dec!(100), Decimal::ZERO);
        assert_eq!(projection.months, 10);
        assert_eq!(projection.total_paid, dec!(1000));
        assert_eq!(projection.total_interest, Decimal::ZERO);
        assert!(projection.converges());
    }

    #[test]
    fn overshoot_of_last_payment_counts_as_interest() {
        let projection = project_payoff(dec!(250), dec!(100), Decimal::ZERO);
        assert_eq!(projection.months, 3);
        assert_eq!(projection.total_interest, dec!(50));

        let projection = project_payoff(dec!(80), dec!(100), dec!(0.15));
        assert_eq!(projection.total_interest, dec!(20));
    }

    #[test]
    fn non_convergent_projection_charges_sentinel_months() {
        let projection = project_payoff(dec!(1000), dec!(50), dec!(0.10));
        assert!(!projection.converges());
        assert_eq!(projection.total_paid, dec!(49950));
        assert_eq!(projection.total_interest, dec!(48950));
    }
}
