//! The profit-based AUSN variant: a levy on income minus expenses,
//! floored at a fixed share of gross income.
//!
//! # Minimum floor
//!
//! The payable tax can never drop below [`MINIMUM_RATE`] of gross income.
//! When expenses exceed income the 20% figure goes negative and the floor
//! always wins; the negative intermediate value is reported as-is so the
//! caller can show it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::max;

/// Tax rate applied to profit (income minus expenses).
pub const STANDARD_RATE: Decimal = dec!(0.20);

/// Floor rate applied to gross income.
pub const MINIMUM_RATE: Decimal = dec!(0.03);

/// Result of the profit-based calculation.
///
/// Intermediate values are retained for transparency, mirroring how the
/// report presents the floor decision to the user. Nothing is rounded
/// here; rounding to kopecks happens at the formatting boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitBasedResult {
    /// Payable tax: the larger of `tax_at_standard_rate` and `minimum_tax`.
    pub tax: Decimal,

    /// Income minus expenses. Negative when expenses exceed income.
    pub profit: Decimal,

    /// Profit multiplied by [`STANDARD_RATE`]. Not clamped; negative
    /// whenever profit is negative.
    pub tax_at_standard_rate: Decimal,

    /// Gross income multiplied by [`MINIMUM_RATE`].
    pub minimum_tax: Decimal,

    /// Whether the payable tax is the floor rather than the 20% figure.
    /// Also true when the two coincide exactly.
    pub used_minimum: bool,
}

/// Calculates tax under the profit-based variant.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ausn_core::calculations::profit_based;
///
/// // Thin margin: the floor kicks in.
/// let result = profit_based(dec!(1000000), dec!(950000));
///
/// assert_eq!(result.profit, dec!(50000));
/// assert_eq!(result.tax_at_standard_rate, dec!(10000.00));
/// assert_eq!(result.minimum_tax, dec!(30000.00));
/// assert_eq!(result.tax, dec!(30000.00));
/// assert!(result.used_minimum);
/// ```
pub fn profit_based(
    income: Decimal,
    expenses: Decimal,
) -> ProfitBasedResult {
    let profit = income - expenses;
    if profit < Decimal::ZERO {
        warn!(
            income = %income,
            expenses = %expenses,
            profit = %profit,
            "expenses exceed income; minimum floor will apply"
        );
    }

    let tax_at_standard_rate = profit * STANDARD_RATE;
    let minimum_tax = income * MINIMUM_RATE;
    let tax = max(tax_at_standard_rate, minimum_tax);

    ProfitBasedResult {
        tax,
        profit,
        tax_at_standard_rate,
        minimum_tax,
        used_minimum: tax == minimum_tax,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // standard-rate branch
    // =========================================================================

    #[test]
    fn profit_based_taxes_profit_at_twenty_percent() {
        let result = profit_based(dec!(1000000), dec!(0));

        assert_eq!(result.profit, dec!(1000000));
        assert_eq!(result.tax_at_standard_rate, dec!(200000.00));
        assert_eq!(result.tax, dec!(200000.00));
        assert!(!result.used_minimum);
    }

    #[test]
    fn profit_based_subtracts_expenses_before_taxing() {
        let result = profit_based(dec!(1000000), dec!(400000));

        assert_eq!(result.profit, dec!(600000));
        assert_eq!(result.tax, dec!(120000.00));
        assert!(!result.used_minimum);
    }

    // =========================================================================
    // minimum floor
    // =========================================================================

    #[test]
    fn profit_based_applies_floor_on_thin_margin() {
        let result = profit_based(dec!(1000000), dec!(950000));

        assert_eq!(result.tax_at_standard_rate, dec!(10000.00));
        assert_eq!(result.minimum_tax, dec!(30000.00));
        assert_eq!(result.tax, dec!(30000.00));
        assert!(result.used_minimum);
    }

    #[test]
    fn profit_based_applies_floor_when_expenses_exceed_income() {
        let _guard = init_test_tracing();
        let result = profit_based(dec!(1000000), dec!(1200000));

        assert_eq!(result.profit, dec!(-200000));
        assert_eq!(result.tax_at_standard_rate, dec!(-40000.00));
        assert_eq!(result.tax, dec!(30000.00));
        assert!(result.used_minimum);
    }

    #[test]
    fn profit_based_keeps_negative_intermediate_unclamped() {
        let result = profit_based(dec!(100), dec!(300));

        assert_eq!(result.tax_at_standard_rate, dec!(-40.00));
    }

    #[test]
    fn profit_based_marks_floor_used_on_exact_tie() {
        // profit 150000 * 0.2 == income 1000000 * 0.03 == 30000
        let result = profit_based(dec!(1000000), dec!(850000));

        assert_eq!(result.tax_at_standard_rate, dec!(30000.00));
        assert_eq!(result.minimum_tax, dec!(30000.00));
        assert!(result.used_minimum);
    }

    #[test]
    fn profit_based_tax_never_drops_below_floor() {
        for expenses in [dec!(0), dec!(500000), dec!(999999), dec!(2000000)] {
            let result = profit_based(dec!(1000000), expenses);

            assert!(result.tax >= dec!(30000.00));
        }
    }

    #[test]
    fn profit_based_used_minimum_iff_tax_equals_floor() {
        for expenses in [dec!(0), dec!(900000), dec!(1000000)] {
            let result = profit_based(dec!(1000000), expenses);

            assert_eq!(result.used_minimum, result.tax == result.minimum_tax);
        }
    }
}
