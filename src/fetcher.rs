use crate::dates::iso_date;
use crate::errors::FetchError;
use crate::models::{RawReport, ReportsResponse};
use chrono::NaiveDate;
use reqwest::Client;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://covid-api.com/api/reports";

/// Client for the public reports endpoint.
#[derive(Debug, Clone)]
pub struct CovidApi {
    http: Client,
    endpoint: String,
}

impl CovidApi {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self::with_client(Client::builder().build()?, endpoint))
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches every per-region record reported for `date` in `country`.
    ///
    /// A body with no `data` (absent, `null` or empty) yields an empty list.
    /// Transport errors, non-2xx statuses and malformed JSON are returned
    /// as [`FetchError`]; callers decide how to degrade.
    pub async fn fetch_reports(
        &self,
        date: NaiveDate,
        country: &str,
    ) -> Result<Vec<RawReport>, FetchError> {
        let date = iso_date(date);
        debug!(%date, country, "fetching reports");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("date", date.as_str()), ("iso", country)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let bytes = response.bytes().await?;
        let body: ReportsResponse = serde_json::from_slice(&bytes)?;
        Ok(body.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockReply, spawn_upstream};
    use serde_json::json;
    use std::collections::HashMap;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 7, d).unwrap()
    }

    #[tokio::test]
    async fn fetch_parses_records_and_sends_query() {
        let mut replies = HashMap::new();
        replies.insert(
            "2022-07-01".to_string(),
            MockReply::Json(json!({
                "data": [
                    {
                        "date": "2022-07-01",
                        "confirmed": 1200,
                        "deaths": 30,
                        "active": 4,
                        "region": { "iso": "BRA", "province": "Bahia" }
                    },
                    { "confirmed": 3 }
                ]
            })),
        );
        let upstream = spawn_upstream(replies).await;
        let api = CovidApi::new(upstream.endpoint.clone()).unwrap();

        let reports = api.fetch_reports(day(1), "BRA").await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].confirmed, Some(1200));
        assert_eq!(reports[0].recovered, None);
        assert_eq!(
            reports[0].region.as_ref().and_then(|r| r.province.as_deref()),
            Some("Bahia")
        );
        assert!(reports[1].region.is_none());

        let seen = upstream.requests().await;
        assert_eq!(seen, vec![("2022-07-01".to_string(), "BRA".to_string())]);
    }

    #[tokio::test]
    async fn missing_or_null_data_is_empty() {
        let mut replies = HashMap::new();
        replies.insert("2022-07-01".to_string(), MockReply::Json(json!({})));
        replies.insert("2022-07-02".to_string(), MockReply::Json(json!({ "data": null })));
        replies.insert("2022-07-03".to_string(), MockReply::Json(json!({ "data": [] })));
        let upstream = spawn_upstream(replies).await;
        let api = CovidApi::new(upstream.endpoint.clone()).unwrap();

        for d in 1..=3 {
            assert!(api.fetch_reports(day(d), "BRA").await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn error_status_and_bad_body_are_errors() {
        let mut replies = HashMap::new();
        replies.insert("2022-07-01".to_string(), MockReply::Status(500));
        replies.insert("2022-07-02".to_string(), MockReply::Garbage);
        let upstream = spawn_upstream(replies).await;
        let api = CovidApi::new(upstream.endpoint.clone()).unwrap();

        assert!(matches!(
            api.fetch_reports(day(1), "BRA").await,
            Err(FetchError::Status(status)) if status.as_u16() == 500
        ));
        assert!(matches!(
            api.fetch_reports(day(2), "BRA").await,
            Err(FetchError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_http_error() {
        let api = CovidApi::new("http://127.0.0.1:9/api/reports").unwrap();
        assert!(matches!(
            api.fetch_reports(day(1), "BRA").await,
            Err(FetchError::Http(_))
        ));
    }
}
