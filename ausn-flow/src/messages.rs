//! Fixed dialogue texts.
//!
//! Everything the bot says apart from the final report lives here, so the
//! state machine code stays readable. HTML markup is limited to bold
//! spans and line breaks.

use rust_decimal::Decimal;

use ausn_core::format_money;

/// Greeting and income prompt sent on /start.
pub const WELCOME: &str = "👋 <b>Hi! I can compare AUSN taxation variants for you</b>\n\n\
    📊 AUSN is the automated simplified taxation system\n\n\
    <b>The two variants:</b>\n\
    🔹 <b>Income</b> — 8% of all income\n\
    🔹 <b>Income minus expenses</b> — 20% of the difference (but no less than 3% of income)\n\n\
    📍 <b>AUSN restrictions:</b>\n\
    • Annual income up to 60 mln ₽\n\
    • No more than 5 employees\n\
    • Registered in Moscow, St. Petersburg or Moscow Region\n\
    • An account with an authorized bank\n\n\
    To begin, send your <b>annual income</b> in roubles:";

/// Static help text; available regardless of dialogue state.
pub const HELP: &str = "📖 <b>BOT HELP</b>\n\n\
    This bot compares the two AUSN taxation variants and recommends the cheaper one.\n\n\
    <b>Commands:</b>\n\
    /start - Begin a new calculation\n\
    /help - Show this help\n\
    /cancel - Cancel the current calculation\n\n\
    <b>How to use:</b>\n\
    1️⃣ Enter your annual income\n\
    2️⃣ Enter your annual expenses\n\
    3️⃣ Get the comparison of both variants\n\n\
    <b>About AUSN:</b>\n\
    • Available in Moscow, St. Petersburg and Moscow Region\n\
    • Income limit: 60 mln ₽ per year\n\
    • Up to 5 employees\n\n\
    📞 Details at the Federal Tax Service: nalog.ru";

/// Acknowledgment after /cancel.
pub const CANCELLED: &str = "❌ Calculation cancelled. Use /start for a new one";

/// Reply to freeform text when no calculation is running.
pub const NO_ACTIVE_DIALOGUE: &str = "Use /start to begin a calculation";

/// Re-prompt when the income text does not parse.
pub const INCOME_PARSE_ERROR: &str =
    "❌ Please enter a valid number (for example: 1000000 or 1 000 000)";

/// Rejection for non-positive income.
pub const INCOME_NOT_POSITIVE: &str = "❌ Income must be a positive number. Try again:";

/// Advisory for income above the AUSN eligibility cap; the calculation
/// still proceeds.
pub const INCOME_OVER_LIMIT: &str = "⚠️ <b>Note!</b> Annual income exceeds the AUSN limit (60 mln ₽)\n\
    AUSN is not available at this income level.\n\n\
    Continuing the calculation for reference.";

/// Re-prompt when the expenses text does not parse.
pub const EXPENSES_PARSE_ERROR: &str =
    "❌ Please enter a valid number (for example: 500000 or 500 000)";

/// Rejection for negative expenses.
pub const EXPENSES_NEGATIVE: &str = "❌ Expenses cannot be negative. Try again:";

/// Advisory when expenses exceed income; the calculation still proceeds.
pub const EXPENSES_EXCEED_INCOME: &str = "⚠️ <b>Note!</b> Expenses exceed income!\n\
    Continuing the calculation.";

/// Income acknowledgment plus the expenses prompt.
pub fn income_accepted(income: Decimal) -> String {
    format!(
        "✅ Income: <b>{}</b>\n\n\
         Now enter your <b>annual expenses</b> in roubles:\n\
         (enter 0 if you have none)",
        format_money(income)
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn income_accepted_embeds_formatted_amount() {
        let text = income_accepted(dec!(1000000));

        assert!(text.contains("1 000 000,00 ₽"));
        assert!(text.contains("annual expenses"));
    }
}
