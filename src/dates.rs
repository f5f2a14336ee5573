use chrono::{Duration, NaiveDate};

/// Days shown on each side of the selected date.
pub const WINDOW_RADIUS: i64 = 3;
pub const WINDOW_LEN: usize = 7;
pub const CENTER_INDEX: usize = 3;

/// Returns the seven consecutive days centered on `center`, oldest first.
pub fn date_range(center: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(WINDOW_LEN);
    for offset in -WINDOW_RADIUS..=WINDOW_RADIUS {
        dates.push(center + Duration::days(offset));
    }
    dates
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
