//! Display formatting shared by every report.

use chrono::{DateTime, Utc};

/// Format an amount as US dollars with thousands separators, e.g. `$1,234.50`.
pub fn currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Numeric date such as `11/1/2023`.
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Month heading such as `November 2023`.
pub fn month_year(date: &DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}
