//! Today's weather for the local info dashboard.

mod client;
mod error;
mod report;
mod types;

pub use client::{DEFAULT_BASE_URL, WeatherClient, WeatherConfig};
pub use error::WeatherError;
pub use report::WeatherReport;
pub use types::{Astro, Condition, Current, Day, Forecast, ForecastDay, ForecastResponse, Hour};
