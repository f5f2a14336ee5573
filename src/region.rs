use crate::models::{ALL_PROVINCES, DailyAggregate, PROVINCES, RawReport};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Strips diacritics and folds case so `"Ceará"` and `"CEARA"` compare equal.
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Maps user input onto `"All"` or the canonical spelling of a known state.
pub fn canonical_province(input: &str) -> Option<&'static str> {
    let wanted = normalize(input.trim());
    if wanted == normalize(ALL_PROVINCES) {
        return Some(ALL_PROVINCES);
    }
    PROVINCES
        .iter()
        .copied()
        .find(|province| normalize(province) == wanted)
}

/// Records without a region never match, not even with `"All"`.
pub fn matches_province(report: &RawReport, filter: &str) -> bool {
    let Some(region) = &report.region else {
        return false;
    };
    if filter == ALL_PROVINCES {
        return true;
    }
    normalize(region.province.as_deref().unwrap_or("")) == normalize(filter)
}

pub fn reduce_reports(reports: &[RawReport], filter: &str) -> DailyAggregate {
    reports
        .iter()
        .filter(|report| matches_province(report, filter))
        .fold(DailyAggregate::default(), |acc, report| DailyAggregate {
            confirmed: acc.confirmed.saturating_add(report.confirmed.unwrap_or(0)),
            deaths: acc.deaths.saturating_add(report.deaths.unwrap_or(0)),
            recovered: acc.recovered.saturating_add(report.recovered.unwrap_or(0)),
            active: acc.active.saturating_add(report.active.unwrap_or(0)),
        })
}
