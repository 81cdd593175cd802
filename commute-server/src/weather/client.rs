//! Forecast HTTP client.

use reqwest::StatusCode;
use tracing::debug;

use super::error::WeatherError;
use super::report::WeatherReport;
use super::types::ForecastResponse;

/// Default base URL for the forecast API.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Configuration for the weather client.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WeatherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Forecast API client.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Fetch today's forecast for a postcode (or any location the API
    /// accepts as `q`).
    pub async fn forecast(&self, location: &str) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast.json", self.base_url);
        debug!(url = %url, location, "weather request");

        let response = self
            .http
            .get(&url)
            .query(&[("q", location), ("key", self.api_key.as_str())])
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(WeatherError::Unauthorized);
            }
            // Unknown locations come back as 400 with an error object.
            status if !status.is_success() => {
                return Err(WeatherError::ApiError {
                    status: status.as_u16(),
                    message: response.text().await.unwrap_or_default(),
                });
            }
            _ => {}
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| WeatherError::Json(e.to_string()))
    }

    /// Fetch and summarise today's weather.
    pub async fn report(&self, location: &str) -> Result<WeatherReport, WeatherError> {
        let forecast = self.forecast(location).await?;
        WeatherReport::from_forecast(&forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = WeatherConfig::new("key")
            .with_base_url("http://localhost:9090/")
            .with_timeout(5);

        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, "http://localhost:9090/");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = WeatherConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client =
            WeatherClient::new(WeatherConfig::new("key").with_base_url("http://localhost:9090/"))
                .unwrap();
        assert_eq!(client.base_url, "http://localhost:9090");
    }
}
