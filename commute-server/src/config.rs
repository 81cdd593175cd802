//! Process configuration from environment variables.
//!
//! | Variable                | Default                          |
//! |-------------------------|----------------------------------|
//! | `LDBWS_AUTH`            | none (warns, Darwin calls fail)  |
//! | `LDBWS_BASE_URL`        | production LDBWS                 |
//! | `WEATHER_AUTH`          | none (warns, weather calls fail) |
//! | `WEATHER_BASE_URL`      | weatherapi.com v1                |
//! | `COMMUTE_LISTEN_ADDR`   | `127.0.0.1:3000`                 |
//! | `COMMUTE_NUM_ROWS`      | `10`                             |
//! | `COMMUTE_HORIZON_HOURS` | `1.0`                            |

use std::net::SocketAddr;

use tracing::warn;

use crate::darwin::{self, DarwinConfig};
use crate::timetable::TimetableConfig;
use crate::weather::{self, WeatherConfig};

const DEFAULT_LISTEN_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// A variable was set to something unusable.
#[derive(Debug, thiserror::Error)]
#[error("{var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ldbws_auth: String,
    pub ldbws_base_url: String,
    pub weather_auth: String,
    pub weather_base_url: String,
    pub listen_addr: SocketAddr,
    pub timetable: TimetableConfig,
}

impl AppConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ldbws_auth = credential(&lookup, "LDBWS_AUTH");
        let weather_auth = credential(&lookup, "WEATHER_AUTH");

        let ldbws_base_url =
            lookup("LDBWS_BASE_URL").unwrap_or_else(|| darwin::DEFAULT_BASE_URL.to_string());
        let weather_base_url =
            lookup("WEATHER_BASE_URL").unwrap_or_else(|| weather::DEFAULT_BASE_URL.to_string());

        let listen_addr = parse_var::<SocketAddr>(&lookup, "COMMUTE_LISTEN_ADDR")?
            .unwrap_or(SocketAddr::from(DEFAULT_LISTEN_ADDR));

        let mut timetable = TimetableConfig::default();
        if let Some(num_rows) = parse_var::<u8>(&lookup, "COMMUTE_NUM_ROWS")? {
            if num_rows == 0 {
                return Err(ConfigError {
                    var: "COMMUTE_NUM_ROWS",
                    value: num_rows.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            timetable.num_rows = num_rows;
        }
        if let Some(horizon) = parse_var::<f64>(&lookup, "COMMUTE_HORIZON_HOURS")? {
            if !horizon.is_finite() || horizon < 0.0 {
                return Err(ConfigError {
                    var: "COMMUTE_HORIZON_HOURS",
                    value: horizon.to_string(),
                    reason: "must be a non-negative number of hours".to_string(),
                });
            }
            timetable.horizon_hours = horizon;
        }

        Ok(Self {
            ldbws_auth,
            ldbws_base_url,
            weather_auth,
            weather_base_url,
            listen_addr,
            timetable,
        })
    }

    pub fn darwin_config(&self) -> DarwinConfig {
        DarwinConfig::new(&self.ldbws_auth).with_base_url(&self.ldbws_base_url)
    }

    pub fn weather_config(&self) -> WeatherConfig {
        WeatherConfig::new(&self.weather_auth).with_base_url(&self.weather_base_url)
    }
}

fn credential(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> String {
    lookup(var).unwrap_or_else(|| {
        warn!(var, "credential not set, API calls will fail");
        String::new()
    })
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(var)
        .map(|value| {
            value.trim().parse().map_err(|e: T::Err| ConfigError {
                var,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}
