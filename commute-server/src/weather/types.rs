//! Forecast API response DTOs.
//!
//! Only the fields the report reads are mapped; serde skips the rest.

use serde::Deserialize;

/// Response from `forecast.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: Current,
    pub forecast: Forecast,
}

/// Conditions right now.
#[derive(Debug, Clone, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub wind_mph: f64,
    /// Relative humidity, percent.
    pub humidity: u32,
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    /// One entry per forecast day, today first.
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    pub day: Day,
    pub astro: Astro,
    /// Hourly forecast, midnight first.
    #[serde(default)]
    pub hour: Vec<Hour>,
}

/// Whole-day summary.
#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    /// Percent.
    pub daily_chance_of_rain: u32,
}

/// Sun times as 12-hour strings ("06:45 AM").
#[derive(Debug, Clone, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hour {
    /// Percent.
    pub chance_of_rain: u32,
    pub feelslike_c: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_forecast() {
        let json = r#"{
            "location": {"name": "Birmingham", "country": "UK"},
            "current": {
                "temp_c": 11.0,
                "feelslike_c": 9.4,
                "wind_mph": 8.1,
                "humidity": 76,
                "condition": {"text": "Partly cloudy", "code": 1003}
            },
            "forecast": {
                "forecastday": [{
                    "date": "2024-03-15",
                    "day": {"maxtemp_c": 13.2, "mintemp_c": 5.1, "daily_chance_of_rain": 85},
                    "astro": {"sunrise": "06:14 AM", "sunset": "06:09 PM"},
                    "hour": [
                        {"time": "2024-03-15 00:00", "chance_of_rain": 0, "feelslike_c": 4.2},
                        {"time": "2024-03-15 01:00", "chance_of_rain": 10, "feelslike_c": 3.9}
                    ]
                }]
            }
        }"#;

        let forecast: ForecastResponse = serde_json::from_str(json).unwrap();

        assert_eq!(forecast.current.humidity, 76);
        assert_eq!(forecast.current.condition.text, "Partly cloudy");

        let today = &forecast.forecast.forecastday[0];
        assert_eq!(today.day.daily_chance_of_rain, 85);
        assert_eq!(today.astro.sunset, "06:09 PM");
        assert_eq!(today.hour.len(), 2);
        assert_eq!(today.hour[1].chance_of_rain, 10);
    }
}
