//! Data transfer objects for web requests and responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ClockTime;
use crate::weather::WeatherReport;

/// Request parameters that may come from the query string or a JSON body.
pub trait RequestParams: DeserializeOwned {
    /// Whether the parameter that decides between query and body is present.
    fn has_key(&self) -> bool;
}

/// Pick the query parameters if they carry the key parameter, otherwise the
/// JSON body. A body that does not parse leaves the query parameters in
/// place.
pub fn resolve<P: RequestParams>(query: P, body: &[u8]) -> P {
    if query.has_key() || body.is_empty() {
        return query;
    }

    match serde_json::from_slice(body) {
        Ok(params) => params,
        Err(e) => {
            debug!(error = %e, "ignoring unparseable request body");
            query
        }
    }
}

/// Parameters for `/trains`.
#[derive(Debug, Default, Deserialize)]
pub struct TrainsParams {
    pub left_crs: Option<String>,
    pub right_crs: Option<String>,
}

impl RequestParams for TrainsParams {
    fn has_key(&self) -> bool {
        self.left_crs.is_some()
    }
}

/// Parameters for `/localinfo`.
#[derive(Debug, Default, Deserialize)]
pub struct LocalInfoParams {
    #[serde(rename = "trainFrom")]
    pub train_from: Option<String>,

    #[serde(rename = "trainTo")]
    pub train_to: Option<String>,

    /// Postcode for the forecast
    pub weather: Option<String>,
}

impl RequestParams for LocalInfoParams {
    fn has_key(&self) -> bool {
        self.train_to.is_some()
    }
}

/// Response from `/localinfo`: the weather fields with the departure times
/// alongside.
#[derive(Debug, Serialize)]
pub struct LocalInfoResponse {
    #[serde(flatten)]
    pub weather: WeatherReport,

    /// Scheduled departures towards `trainTo`, decimal hours
    pub departures_times: Vec<ClockTime>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_wins_over_body() {
        let query = TrainsParams {
            left_crs: Some("ABC".into()),
            right_crs: Some("XYZ".into()),
        };
        let params = resolve(query, br#"{"left_crs": "BHM", "right_crs": "KNN"}"#);

        assert_eq!(params.left_crs.as_deref(), Some("ABC"));
        assert_eq!(params.right_crs.as_deref(), Some("XYZ"));
    }

    #[test]
    fn body_used_when_key_missing_from_query() {
        let query = TrainsParams {
            left_crs: None,
            right_crs: Some("XYZ".into()),
        };
        let params = resolve(query, br#"{"left_crs": "BHM", "right_crs": "KNN"}"#);

        assert_eq!(params.left_crs.as_deref(), Some("BHM"));
        assert_eq!(params.right_crs.as_deref(), Some("KNN"));
    }

    #[test]
    fn body_replaces_query_wholesale() {
        let query = TrainsParams {
            left_crs: None,
            right_crs: Some("XYZ".into()),
        };
        let params = resolve(query, br#"{"left_crs": "BHM"}"#);

        assert_eq!(params.left_crs.as_deref(), Some("BHM"));
        assert!(params.right_crs.is_none());
    }

    #[test]
    fn bad_body_is_ignored() {
        let query = TrainsParams {
            left_crs: None,
            right_crs: Some("XYZ".into()),
        };
        let params = resolve(query, b"not json");

        assert!(params.left_crs.is_none());
        assert_eq!(params.right_crs.as_deref(), Some("XYZ"));
    }

    #[test]
    fn local_info_keyed_on_train_to() {
        let query = LocalInfoParams {
            train_from: Some("ABC".into()),
            train_to: None,
            weather: None,
        };
        let params = resolve(
            query,
            br#"{"trainFrom": "BHM", "trainTo": "KNN", "weather": "B30 1AA"}"#,
        );

        assert_eq!(params.train_from.as_deref(), Some("BHM"));
        assert_eq!(params.train_to.as_deref(), Some("KNN"));
        assert_eq!(params.weather.as_deref(), Some("B30 1AA"));
    }

    #[test]
    fn local_info_response_is_flat() {
        let report = WeatherReport {
            temp_now: 11.0,
            temp_feelslike_now: 9.5,
            temp_max: 13.0,
            temp_min: 5.0,
            wind_now: 8.0,
            humidity_now: 76,
            rain_chance_today: 85,
            condition: "Light rain".into(),
            sunrise: ClockTime::from_hours(6.25),
            sunset: ClockTime::from_hours(18.5),
            rain_chance_hours: vec![0, 20],
            temp_feelslike_hours: vec![4.0, 3.5],
        };
        let response = LocalInfoResponse {
            weather: report,
            departures_times: vec![ClockTime::from_hours(8.25)],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["temp_now"], serde_json::json!(11.0));
        assert_eq!(value["rain_%_today"], serde_json::json!(85));
        assert_eq!(value["departures_times"], serde_json::json!([8.25]));
        assert!(value.get("weather").is_none());
    }
}
