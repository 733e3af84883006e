//! AUSN variant calculations.
//!
//! AUSN (the automated simplified taxation system) offers two variants:
//! a flat levy on gross income, and a levy on profit with a minimum floor
//! tied to gross income. Each variant lives in its own module; the
//! [`recommendation`] module compares the two.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub mod common;
pub mod flat_rate;
pub mod profit_based;
pub mod recommendation;

pub use flat_rate::{FlatRateResult, flat_rate};
pub use profit_based::{ProfitBasedResult, profit_based};
pub use recommendation::{Recommendation, Scheme, recommend};

/// Annual income cap for AUSN eligibility, in roubles.
///
/// Incomes above this are still accepted for calculation, the caller is
/// expected to warn the user that the regime itself is unavailable.
pub const AUSN_INCOME_LIMIT: Decimal = dec!(60000000);
