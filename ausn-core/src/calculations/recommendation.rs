//! Picking the cheaper of the two variants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::flat_rate::FlatRateResult;
use crate::calculations::profit_based::ProfitBasedResult;

/// The two AUSN taxation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    /// Flat levy on gross income.
    FlatRate,
    /// Levy on profit with the minimum floor.
    ProfitBased,
}

/// Outcome of comparing the two variants for the same inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The cheaper variant.
    pub winner: Scheme,

    /// Absolute tax saved by choosing the winner over the other variant.
    /// Zero when both variants cost exactly the same.
    pub savings: Decimal,
}

/// Compares the two variants and recommends the cheaper one.
///
/// The flat-rate variant wins only when its tax is strictly lower; an
/// exact tie goes to the profit-based variant.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ausn_core::calculations::{flat_rate, profit_based, recommend, Scheme};
///
/// let flat = flat_rate(dec!(1000000));
/// let profit = profit_based(dec!(1000000), dec!(0));
/// let pick = recommend(&flat, &profit);
///
/// assert_eq!(pick.winner, Scheme::FlatRate);
/// assert_eq!(pick.savings, dec!(120000.00));
/// ```
pub fn recommend(
    flat: &FlatRateResult,
    profit: &ProfitBasedResult,
) -> Recommendation {
    if flat.tax < profit.tax {
        Recommendation {
            winner: Scheme::FlatRate,
            savings: profit.tax - flat.tax,
        }
    } else {
        Recommendation {
            winner: Scheme::ProfitBased,
            savings: flat.tax - profit.tax,
        }
    }
}
