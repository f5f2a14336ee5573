use crate::dates::parse_iso_date;
use crate::errors::ConfigError;
use crate::fetcher::DEFAULT_ENDPOINT;
use crate::models::{ALL_PROVINCES, FilterSelection};
use crate::region::canonical_province;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_COUNTRY: &str = "BRA";
pub const DEFAULT_DATE: &str = "2022-07-01";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub filters: FilterSelection,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source; unset or blank
    /// variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = var("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_url = var("COVID_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let country = var("COVID_COUNTRY")
            .map(|value| value.trim().to_ascii_uppercase())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
        if country.len() != 3 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCountry {
                name: "COVID_COUNTRY",
                value: country,
            });
        }

        let date = var("DASHBOARD_DATE").unwrap_or_else(|| DEFAULT_DATE.to_string());
        let specific_date = parse_iso_date(&date).map_err(|_| ConfigError::InvalidDate {
            name: "DASHBOARD_DATE",
            value: date.clone(),
        })?;

        let province = match var("DASHBOARD_PROVINCE") {
            Some(value) => canonical_province(&value).ok_or(ConfigError::InvalidProvince {
                name: "DASHBOARD_PROVINCE",
                value,
            })?,
            None => ALL_PROVINCES,
        };

        Ok(Self {
            port,
            api_url,
            filters: FilterSelection {
                country,
                province: province.to_string(),
                specific_date,
            },
        })
    }
}
