pub mod calculations;
pub mod money;
pub mod parse;

pub use calculations::flat_rate::{FLAT_RATE, FlatRateResult, flat_rate};
pub use calculations::profit_based::{
    MINIMUM_RATE, ProfitBasedResult, STANDARD_RATE, profit_based,
};
pub use calculations::recommendation::{Recommendation, Scheme, recommend};
pub use calculations::AUSN_INCOME_LIMIT;
pub use money::format_money;
pub use parse::{ParseAmountError, parse_amount};
