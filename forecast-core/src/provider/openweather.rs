use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::{coords::Coordinates, model::RawForecast};

use super::ForecastProvider;

/// Production one-call endpoint.
const ONE_CALL_URL: &str = "https://api.openweathermap.org/data/2.5/onecall";

/// The public contract serves Fahrenheit temperatures and English
/// descriptions; the current/daily blocks are the only ones consumed.
const UNITS: &str = "imperial";
const LANG: &str = "en";
const EXCLUDE: &str = "minutely,hourly,alerts";

/// Adapter around the OpenWeatherMap one-call API.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, ONE_CALL_URL)
    }

    /// Point the adapter at an alternative endpoint, e.g. a mock server in
    /// tests.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn one_call(&self, coords: Coordinates) -> Result<RawForecast> {
        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("units", UNITS),
                ("lang", LANG),
                ("exclude", EXCLUDE),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (one call)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather one call response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather one call request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse OpenWeather one call JSON")
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
