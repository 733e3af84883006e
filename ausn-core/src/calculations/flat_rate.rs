//! The income-only AUSN variant: a flat levy on gross income.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Tax rate applied to gross income under the income-only variant.
pub const FLAT_RATE: Decimal = dec!(0.08);

/// Result of the income-only calculation.
///
/// Values are kept unrounded; rounding to kopecks happens at the
/// formatting boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRateResult {
    /// Tax due: gross income multiplied by [`FLAT_RATE`].
    pub tax: Decimal,

    /// The rate that produced `tax`, carried along for reporting.
    pub rate: Decimal,
}

/// Calculates tax under the income-only variant.
///
/// Expenses play no role here; the levy applies to all income.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ausn_core::calculations::flat_rate;
///
/// let result = flat_rate(dec!(1000000));
///
/// assert_eq!(result.tax, dec!(80000.00));
/// ```
pub fn flat_rate(income: Decimal) -> FlatRateResult {
    FlatRateResult {
        tax: income * FLAT_RATE,
        rate: FLAT_RATE,
    }
}
