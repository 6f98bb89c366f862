//! Currency and date formatting

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::parse_date;

/// Format a value as Brazilian reais: `R$ 1.234,56`
///
/// This is the only place values are rounded (to cents).
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}R$ {},{}", sign, grouped, frac_part)
}

/// `dd/MM` label used on the daily chart
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// `dd/MM/yy` statement date; malformed dates are shown as stored
pub fn format_statement_date(raw: &str) -> String {
    match parse_date(raw) {
        Ok(date) => date.format("%d/%m/%y").to_string(),
        Err(_) => raw.to_string(),
    }
}
