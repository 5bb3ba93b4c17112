//! Money and percentage formatting for view models

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::CURRENCY_SYMBOL;

/// Format an amount as currency with thousands separators, e.g. `$1,234.50`
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let abs = rounded.abs();

    let whole = abs.trunc().to_string();
    let cents = ((abs - abs.trunc()) * Decimal::ONE_HUNDRED).trunc();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}.{:0>2}", sign, CURRENCY_SYMBOL, grouped, cents.to_string())
}

/// Format a percentage with at most one decimal, e.g. `33.3%` or `100%`
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", rounded.normalize())
}
