use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::{AppConfig, DEFAULT_TIMEOUT_SECS};
use crate::core::{CurrencyRateProvider, DateKey, RateError, RateTable};

/// Blocking client for a fixer.io style historical rates endpoint.
pub struct RateClient {
    base_url: String,
    access_key: String,
    http: reqwest::blocking::Client,
}

impl RateClient {
    pub fn new(base_url: &str, access_key: &str) -> Result<Self, RateError> {
        Self::with_timeout(
            base_url,
            access_key,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(
        base_url: &str,
        access_key: &str,
        timeout: Duration,
    ) -> Result<Self, RateError> {
        let access_key = access_key.trim();
        if access_key.is_empty() {
            return Err(RateError::Configuration(
                "access key 'fixer_io' is not set".to_string(),
            ));
        }

        let http = reqwest::blocking::Client::builder()
            .user_agent("xrate/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| RateError::Configuration(format!("cannot build HTTP client: {e}")))?;

        Ok(RateClient {
            base_url: base_url.to_string(),
            access_key: access_key.to_string(),
            http,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RateError> {
        let fixer = &config.providers.fixer;
        Self::with_timeout(&fixer.base_url, config.access_key()?, fixer.timeout())
    }

    fn request(&self, date: DateKey) -> Result<reqwest::blocking::Request, RateError> {
        let request = self
            .http
            .get(format!("{}{}", self.base_url, date))
            .query(&[("access_key", self.access_key.as_str())])
            .build()?;
        Ok(request)
    }
}

#[derive(Debug, Deserialize)]
struct FixerErrorBody {
    code: i64,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct FixerResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<FixerErrorBody>,
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    date: Option<String>,
    rates: Option<HashMap<String, f64>>,
}

fn decode_rates(body: &str, date: DateKey) -> Result<RateTable, RateError> {
    let data: FixerResponse = serde_json::from_str(body).map_err(|e| RateError::Format {
        date: date.to_string(),
        reason: e.to_string(),
    })?;

    if let Some(error) = data.error {
        return Err(RateError::Upstream {
            date: date.to_string(),
            code: error.code,
            kind: error.kind,
            info: error.info,
        });
    }

    if data.success == Some(false) {
        return Err(RateError::Format {
            date: date.to_string(),
            reason: "upstream reported \"success\": false".to_string(),
        });
    }

    let rates = data.rates.ok_or_else(|| RateError::Format {
        date: date.to_string(),
        reason: "response has no \"rates\" object".to_string(),
    })?;

    let mut table = RateTable::new(rates);
    table.base = data.base;
    table.date = data.date;
    Ok(table)
}

impl CurrencyRateProvider for RateClient {
    #[instrument(name = "FixerRatesFetch", skip(self, date), fields(date = %date))]
    fn rates_on(&self, date: DateKey) -> Result<RateTable, RateError> {
        debug!(
            "Requesting rates from {}{}?access_key=<redacted>",
            self.base_url, date
        );

        let response = self.http.execute(self.request(date)?)?;
        if !response.status().is_success() {
            return Err(RateError::HttpStatus {
                status: response.status(),
                date: date.to_string(),
            });
        }

        let body = response.text()?;
        let table = decode_rates(&body, date)?;
        debug!(count = table.len(), base = ?table.base, "Decoded rate table");
        Ok(table)
    }
}
