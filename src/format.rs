//! Display helpers shared by the headline cards and the table rows.

use crate::dates::iso_date;
use chrono::NaiveDate;

/// Renders a count in short form: `2.3M`, `1.5k` or the plain integer.
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        one_decimal(value, 1_000_000, 'M')
    } else if value >= 1_000 {
        one_decimal(value, 1_000, 'k')
    } else {
        value.to_string()
    }
}

/// `value / unit` to one decimal. Quotients that land exactly on a
/// hundredths tie round up; everything else rounds the quotient as stored.
fn one_decimal(value: u64, unit: u64, suffix: char) -> String {
    let step = unit / 10;
    // `value / unit` is exact in binary only when the odd part of `unit` divides it.
    let odd_part = unit >> unit.trailing_zeros();
    if value % step == step / 2 && value % odd_part == 0 {
        let tenths = value / step + 1;
        return format!("{}.{}{suffix}", tenths / 10, tenths % 10);
    }
    format!("{:.1}{suffix}", value as f64 / unit as f64)
}

/// Reorders `YYYY-MM-DD` into `DD/MM/YYYY`. Anything else is returned as is.
pub fn format_date_display(iso_date: &str) -> String {
    let mut parts = iso_date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{day}/{month}/{year}"),
        _ => iso_date.to_string(),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    format_date_display(&iso_date(date))
}
