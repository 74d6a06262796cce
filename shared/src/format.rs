//! Display helpers shared by the table, forms, and statistics views.
//!
//! Amounts are always shown as magnitudes in pt-BR currency format. Dates are
//! shown as `dd/mm/yyyy` and stored as `yyyy-mm-dd`.

use chrono::NaiveDate;

const DISPLAY_DATE: &str = "%d/%m/%Y";
const STORAGE_DATE: &str = "%Y-%m-%d";

/// Format an amount as Brazilian reais, dropping its sign
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let reais = cents / 100;
    format!("R$ {},{:02}", group_thousands(reais), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Storage date (`yyyy-mm-dd`) to display date (`dd/mm/yyyy`).
///
/// Values already in display format, and values that are not a valid storage
/// date, are returned unchanged.
pub fn format_date_display(date: &str) -> String {
    let date = date.trim();
    if date.is_empty() || date.contains('/') {
        return date.to_string();
    }
    match NaiveDate::parse_from_str(date, STORAGE_DATE) {
        Ok(parsed) => parsed.format(DISPLAY_DATE).to_string(),
        Err(_) => date.to_string(),
    }
}

/// Display date (`dd/mm/yyyy`) to storage date (`yyyy-mm-dd`).
///
/// Storage dates pass through after validation. Returns `None` when the input
/// is not a valid calendar date in either format.
pub fn format_date_backend(date: &str) -> Option<String> {
    parse_date(date).map(|parsed| parsed.format(STORAGE_DATE).to_string())
}

/// Parse a date in either display or storage format
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    let format = if date.contains('/') { DISPLAY_DATE } else { STORAGE_DATE };
    NaiveDate::parse_from_str(date, format).ok()
}

pub fn storage_date(date: NaiveDate) -> String {
    date.format(STORAGE_DATE).to_string()
}

/// Magnitude of an amount as plain decimal text for a numeric input
pub fn format_amount_input(value: f64) -> String {
    value.abs().to_string()
}

/// Percentage with two decimals, e.g. `12.50`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}
