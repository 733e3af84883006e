//! Rouble rendering for report output.
//!
//! The format is fixed rather than locale-derived: two decimal digits,
//! space-grouped thousands, comma as the decimal separator, and the
//! rouble sign. `1234567.5` renders as `1 234 567,50 ₽`.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Formats an amount as roubles.
///
/// The amount is rounded half-up to kopecks first, so raw calculation
/// results can be passed straight in.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ausn_core::money::format_money;
///
/// assert_eq!(format_money(dec!(1234567.5)), "1 234 567,50 ₽");
/// assert_eq!(format_money(dec!(0)), "0,00 ₽");
/// assert_eq!(format_money(dec!(-40000)), "-40 000,00 ₽");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let raw = format!("{rounded:.2}");
    let (whole, kopecks) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };

    format!("{sign}{},{kopecks} ₽", group_thousands(digits))
}

/// Inserts a space between every group of three digits, counting from the
/// right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
