//! Weather client error types.

use crate::domain::TimeError;

/// Errors from fetching or reading a forecast.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {0}")]
    Json(String),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("unauthorized: check WEATHER_AUTH")]
    Unauthorized,

    /// The forecast had no days in it
    #[error("forecast has no days")]
    MissingForecastDay,

    /// Sunrise or sunset was not a 12-hour time
    #[error("bad sun time: {0}")]
    Time(#[from] TimeError),
}
