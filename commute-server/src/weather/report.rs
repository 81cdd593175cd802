//! The weather half of the local info response.

use serde::Serialize;

use crate::domain::ClockTime;

use super::error::WeatherError;
use super::types::ForecastResponse;

/// Today's weather, flattened for the dashboard.
///
/// Field names are part of the response format, including the `%` ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub temp_now: f64,
    pub temp_feelslike_now: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub wind_now: f64,
    pub humidity_now: u32,
    #[serde(rename = "rain_%_today")]
    pub rain_chance_today: u32,
    pub condition: String,
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
    /// Chance of rain for each hour of today, midnight first.
    #[serde(rename = "rain_%_hours")]
    pub rain_chance_hours: Vec<u32>,
    pub temp_feelslike_hours: Vec<f64>,
}

impl WeatherReport {
    /// Build the report from a forecast, reading only the first day.
    pub fn from_forecast(forecast: &ForecastResponse) -> Result<Self, WeatherError> {
        let today = forecast
            .forecast
            .forecastday
            .first()
            .ok_or(WeatherError::MissingForecastDay)?;
        let current = &forecast.current;

        Ok(Self {
            temp_now: current.temp_c,
            temp_feelslike_now: current.feelslike_c,
            temp_max: today.day.maxtemp_c,
            temp_min: today.day.mintemp_c,
            wind_now: current.wind_mph,
            humidity_now: current.humidity,
            rain_chance_today: today.day.daily_chance_of_rain,
            condition: current.condition.text.clone(),
            sunrise: ClockTime::from_12h(&today.astro.sunrise)?,
            sunset: ClockTime::from_12h(&today.astro.sunset)?,
            rain_chance_hours: today.hour.iter().map(|h| h.chance_of_rain).collect(),
            temp_feelslike_hours: today.hour.iter().map(|h| h.feelslike_c).collect(),
        })
    }
}
