use crate::dates::{CENTER_INDEX, date_range, parse_iso_date};
use crate::errors::AppError;
use crate::fetcher::CovidApi;
use crate::format::{format_date, format_number};
use crate::models::{
    DailyAggregate, DashboardSnapshot, DayResult, DayStatus, DisplayRow, FilterSelection,
    FilterUpdate, HeadlineStats,
};
use crate::region::{canonical_province, reduce_reports};
use chrono::NaiveDate;
use futures_util::future::join_all;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{error, info};

/// Output of one fetch cycle, committed to the dashboard in a single step.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub filters: FilterSelection,
    pub days: Vec<DayResult>,
    pub rows: Vec<DisplayRow>,
    pub headline: HeadlineStats,
}

impl From<&DailyAggregate> for HeadlineStats {
    fn from(aggregate: &DailyAggregate) -> Self {
        Self {
            total: format_number(aggregate.confirmed),
            deaths: format_number(aggregate.deaths),
            recovered: format_number(aggregate.recovered),
            active: format_number(aggregate.active),
        }
    }
}

pub fn display_row(day: &DayResult) -> DisplayRow {
    DisplayRow {
        date: format_date(day.date),
        cases: format_number(day.aggregate.confirmed),
        deaths: format_number(day.aggregate.deaths),
        recovered: format_number(day.aggregate.recovered),
        active: format_number(day.aggregate.active),
        status: day.status,
    }
}

/// `"DD/MM/YYYY - DD/MM/YYYY"` for the window around `center`.
pub fn range_title(center: NaiveDate) -> String {
    let dates = date_range(center);
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => format!("{} - {}", format_date(*first), format_date(*last)),
        _ => String::new(),
    }
}

/// Fetches and reduces one day. Any failure is logged and becomes a zero
/// aggregate so the rest of the window is unaffected.
pub async fn collect_day(api: &CovidApi, date: NaiveDate, filters: &FilterSelection) -> DayResult {
    match api.fetch_reports(date, &filters.country).await {
        Ok(reports) if reports.is_empty() => DayResult {
            date,
            aggregate: DailyAggregate::default(),
            status: DayStatus::NoData,
        },
        Ok(reports) => DayResult {
            date,
            aggregate: reduce_reports(&reports, &filters.province),
            status: DayStatus::Reported,
        },
        Err(err) => {
            error!(%date, country = %filters.country, "failed to fetch reports: {err}");
            DayResult {
                date,
                aggregate: DailyAggregate::default(),
                status: DayStatus::Failed,
            }
        }
    }
}

pub async fn run_cycle(api: &CovidApi, filters: &FilterSelection) -> CycleReport {
    let dates = date_range(filters.specific_date);
    info!(
        center = %filters.specific_date,
        province = %filters.province,
        country = %filters.country,
        "starting fetch cycle"
    );

    let days = join_all(dates.iter().map(|date| collect_day(api, *date, filters))).await;

    let rows = days.iter().map(display_row).collect();
    let headline = days
        .get(CENTER_INDEX)
        .map(|day| HeadlineStats::from(&day.aggregate))
        .unwrap_or_default();

    let failed = days.iter().filter(|day| day.status == DayStatus::Failed).count();
    let no_data = days.iter().filter(|day| day.status == DayStatus::NoData).count();
    info!(failed, no_data, "fetch cycle finished");

    CycleReport {
        filters: filters.clone(),
        days,
        rows,
        headline,
    }
}

struct DashboardState {
    filters: FilterSelection,
    applied: Option<FilterSelection>,
    headline: HeadlineStats,
    rows: Vec<DisplayRow>,
}

impl DashboardState {
    fn snapshot(&self, busy: bool) -> DashboardSnapshot {
        let center = self
            .applied
            .as_ref()
            .unwrap_or(&self.filters)
            .specific_date;
        DashboardSnapshot {
            busy,
            filters: self.filters.clone(),
            applied_filters: self.applied.clone(),
            headline: self.headline.clone(),
            rows: self.rows.clone(),
            range_title: range_title(center),
        }
    }
}

/// Clears the busy flag when dropped, including when a refresh is cancelled.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn set(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Owns the filter selection and the last completed cycle.
pub struct Dashboard {
    api: CovidApi,
    busy: AtomicBool,
    state: Mutex<DashboardState>,
    cycle: Mutex<()>,
}

impl Dashboard {
    pub fn new(api: CovidApi, filters: FilterSelection) -> Self {
        Self {
            api,
            busy: AtomicBool::new(false),
            state: Mutex::new(DashboardState {
                filters,
                applied: None,
                headline: HeadlineStats::default(),
                rows: Vec::new(),
            }),
            cycle: Mutex::new(()),
        }
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.lock().await;
        state.snapshot(self.is_busy())
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Validates and applies filter edits. Nothing changes unless every
    /// provided field is valid. Does not trigger a refresh.
    pub async fn update_filters(&self, update: FilterUpdate) -> Result<DashboardSnapshot, AppError> {
        let province = match update.province.as_deref() {
            Some(value) => Some(canonical_province(value).ok_or_else(|| {
                AppError::bad_request(format!("unknown province: {}", value.trim()))
            })?),
            None => None,
        };
        let specific_date = match update.specific_date.as_deref() {
            Some(value) => Some(parse_iso_date(value).map_err(|_| {
                AppError::bad_request(format!("specific_date must be YYYY-MM-DD: {}", value.trim()))
            })?),
            None => None,
        };

        let mut state = self.state.lock().await;
        if let Some(province) = province {
            state.filters.province = province.to_string();
        }
        if let Some(date) = specific_date {
            state.filters.specific_date = date;
        }
        Ok(state.snapshot(self.is_busy()))
    }

    /// Runs a full cycle with the current filters and publishes its result.
    ///
    /// Cycles never overlap; a trigger that arrives mid-cycle waits for it.
    /// Dropping the future mid-cycle publishes nothing and clears the busy flag.
    pub async fn refresh(&self) -> DashboardSnapshot {
        let _cycle = self.cycle.lock().await;
        let busy = BusyGuard::set(&self.busy);

        let filters = self.state.lock().await.filters.clone();
        let report = run_cycle(&self.api, &filters).await;

        let mut state = self.state.lock().await;
        state.rows = report.rows;
        state.headline = report.headline;
        state.applied = Some(report.filters);
        drop(busy);
        state.snapshot(false)
    }
}
