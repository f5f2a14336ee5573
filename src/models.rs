use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ALL_PROVINCES: &str = "All";

/// Northeast-Brazil states offered by the province filter.
pub const PROVINCES: [&str; 9] = [
    "Alagoas",
    "Bahia",
    "Ceará",
    "Maranhão",
    "Paraíba",
    "Pernambuco",
    "Piauí",
    "Rio Grande do Norte",
    "Sergipe",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub country: String,
    pub province: String,
    pub specific_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterUpdate {
    pub province: Option<String>,
    pub specific_date: Option<String>,
}

/// Body returned by the reporting endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ReportsResponse {
    #[serde(default)]
    pub data: Option<Vec<RawReport>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReport {
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub confirmed: Option<u64>,
    #[serde(default)]
    pub deaths: Option<u64>,
    #[serde(default)]
    pub recovered: Option<u64>,
    #[serde(default)]
    pub active: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub province: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailyAggregate {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Reported,
    NoData,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayResult {
    pub date: NaiveDate,
    pub aggregate: DailyAggregate,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub date: String,
    pub cases: String,
    pub deaths: String,
    pub recovered: String,
    pub active: String,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineStats {
    pub total: String,
    pub deaths: String,
    pub recovered: String,
    pub active: String,
}

impl Default for HeadlineStats {
    fn default() -> Self {
        Self {
            total: "0".to_string(),
            deaths: "0".to_string(),
            recovered: "0".to_string(),
            active: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub busy: bool,
    pub filters: FilterSelection,
    pub applied_filters: Option<FilterSelection>,
    pub headline: HeadlineStats,
    pub rows: Vec<DisplayRow>,
    pub range_title: String,
}
