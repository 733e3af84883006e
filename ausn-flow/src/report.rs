//! Final report rendering.
//!
//! Builds the single HTML message that closes a dialogue: input summary,
//! one section per variant with a trophy on the winner, and the
//! recommendation with the savings amount.

use rust_decimal::Decimal;

use ausn_core::{
    FlatRateResult, ProfitBasedResult, Recommendation, Scheme, format_money,
};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━";

/// Renders the closing report.
///
/// Net remainder per variant is income minus that variant's tax minus
/// expenses; it goes negative when expenses are high and is shown as-is.
pub fn render(
    income: Decimal,
    expenses: Decimal,
    flat: &FlatRateResult,
    profit: &ProfitBasedResult,
    pick: &Recommendation,
) -> String {
    let net_flat = income - flat.tax - expenses;
    let net_profit = income - profit.tax - expenses;

    let mut text = format!(
        "📊 <b>CALCULATION RESULTS</b>\n\
         {RULE}\n\n\
         💰 Income: <b>{}</b>\n\
         💸 Expenses: <b>{}</b>\n\
         📈 Profit: <b>{}</b>\n\n\
         {RULE}\n\n",
        format_money(income),
        format_money(expenses),
        format_money(income - expenses),
    );

    let flat_trophy = if pick.winner == Scheme::FlatRate { "🏆 " } else { "" };
    text.push_str(&format!(
        "{flat_trophy}🔹 <b>VARIANT 1: INCOME (8%)</b>\n\
         └ Tax: <b>{}</b>\n\
         └ Left after tax: <b>{}</b>\n\n",
        format_money(flat.tax),
        format_money(net_flat),
    ));

    let profit_trophy = if pick.winner == Scheme::ProfitBased { "🏆 " } else { "" };
    text.push_str(&format!(
        "{profit_trophy}🔹 <b>VARIANT 2: INCOME - EXPENSES (20%)</b>\n"
    ));

    if profit.used_minimum {
        text.push_str(&format!(
            "└ Tax at 20%: {}\n\
             └ <b>Minimum tax applied (3% of income)</b>\n\
             └ Tax payable: <b>{}</b>\n",
            format_money(profit.tax_at_standard_rate),
            format_money(profit.tax),
        ));
    } else {
        text.push_str(&format!("└ Tax: <b>{}</b>\n", format_money(profit.tax)));
    }

    text.push_str(&format!(
        "└ Left after tax: <b>{}</b>\n\n{RULE}\n\n",
        format_money(net_profit),
    ));

    let winner_label = match pick.winner {
        Scheme::FlatRate => "INCOME (8%)",
        Scheme::ProfitBased => "INCOME - EXPENSES (20%)",
    };
    text.push_str(&format!(
        "✅ <b>RECOMMENDATION:</b> {winner_label}\n\
         💡 Savings: <b>{}</b>\n\n\
         {RULE}\n\n\
         🔄 Use /start for a new calculation",
        format_money(pick.savings),
    ));

    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use ausn_core::{flat_rate, profit_based, recommend};

    fn render_for(income: Decimal, expenses: Decimal) -> String {
        let flat = flat_rate(income);
        let profit = profit_based(income, expenses);
        let pick = recommend(&flat, &profit);
        render(income, expenses, &flat, &profit, &pick)
    }

    #[test]
    fn report_puts_trophy_on_flat_rate_when_it_wins() {
        let text = render_for(dec!(1000000), dec!(0));

        assert!(text.contains("🏆 🔹 <b>VARIANT 1"));
        assert!(!text.contains("🏆 🔹 <b>VARIANT 2"));
    }

    #[test]
    fn report_puts_trophy_on_profit_based_when_it_wins() {
        let text = render_for(dec!(1000000), dec!(950000));

        assert!(text.contains("🏆 🔹 <b>VARIANT 2"));
        assert!(!text.contains("🏆 🔹 <b>VARIANT 1"));
    }

    #[test]
    fn report_shows_floor_breakdown_only_when_floor_applied() {
        let with_floor = render_for(dec!(1000000), dec!(950000));
        let without_floor = render_for(dec!(1000000), dec!(0));

        assert!(with_floor.contains("Minimum tax applied"));
        assert!(with_floor.contains("Tax at 20%: 10 000,00 ₽"));
        assert!(!without_floor.contains("Minimum tax applied"));
    }

    #[test]
    fn report_states_savings_for_the_winner() {
        let text = render_for(dec!(1000000), dec!(0));

        assert!(text.contains("RECOMMENDATION:</b> INCOME (8%)"));
        assert!(text.contains("Savings: <b>120 000,00 ₽</b>"));
    }

    #[test]
    fn report_shows_negative_profit_as_is() {
        let text = render_for(dec!(1000000), dec!(1200000));

        assert!(text.contains("Profit: <b>-200 000,00 ₽</b>"));
    }

    #[test]
    fn report_formats_every_amount_as_roubles() {
        let text = render_for(dec!(1000000), dec!(950000));

        // income, expenses, profit, two taxes, two net remainders, savings
        assert_eq!(text.matches(" ₽").count(), 9);
    }
}
