//! LDBWS JSON response shapes.
//!
//! Only what the timetable reads is mapped; serde drops the rest. Darwin
//! leaves fields out instead of sending nulls, and not consistently, so the
//! time fields are all optional.

use serde::Deserialize;

/// Body of `GetArrivalBoard` and `GetDepartureBoard`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationBoard {
    /// ISO 8601 timestamp with the UK offset, e.g.
    /// `2024-03-15T10:30:00.1234567+00:00`.
    pub generated_at: String,

    pub location_name: String,

    /// Board station.
    pub crs: String,

    /// The station the board was filtered on, if any.
    #[serde(rename = "filtercrs")]
    pub filter_crs: Option<String>,

    /// Absent when nothing matches the query.
    pub train_services: Option<Vec<ServiceItem>>,

    /// `false` when Darwin has suspended the board.
    pub are_services_available: Option<bool>,
}

/// One row of a board.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    /// Valid only while the service is still listed.
    #[serde(rename = "serviceID")]
    pub service_id: String,

    /// Booked arrival at the board station (arrival boards).
    pub sta: Option<String>,

    /// Booked departure from the board station (departure boards).
    pub std: Option<String>,
}

/// Body of `GetServiceDetails`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    pub generated_at: Option<String>,

    pub location_name: String,

    /// Station the detail is relative to, i.e. the board station.
    pub crs: String,

    pub sta: Option<String>,

    pub std: Option<String>,

    /// Stations called at before `crs`, origin first. More than one list
    /// means the train joins; the first list is the one it is on.
    pub previous_calling_points: Option<Vec<ArrayOfCallingPoints>>,
}

/// A `callingPoint` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayOfCallingPoints {
    #[serde(default)]
    pub calling_point: Vec<CallingPoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallingPoint {
    pub location_name: String,

    pub crs: String,

    /// Booked time at this calling point.
    pub st: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrival_board_from_darwin() {
        let json = r#"{
            "generatedAt": "2024-03-15T10:30:00.1234567+00:00",
            "locationName": "Kings Norton",
            "crs": "KNN",
            "filterLocationName": "Birmingham New Street",
            "filtercrs": "BHM",
            "areServicesAvailable": true,
            "trainServices": [
                {
                    "serviceID": "abc123",
                    "sta": "10:45",
                    "eta": "On time",
                    "platform": "2",
                    "operatorCode": "LM",
                    "origin": [{"locationName": "Lichfield Trent Valley", "crs": "LTV"}]
                }
            ]
        }"#;

        let board: StationBoard = serde_json::from_str(json).unwrap();

        assert_eq!(board.crs, "KNN");
        assert_eq!(board.filter_crs.as_deref(), Some("BHM"));
        assert_eq!(board.are_services_available, Some(true));

        let rows = board.train_services.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].service_id, "abc123");
        assert_eq!(rows[0].sta.as_deref(), Some("10:45"));
        assert!(rows[0].std.is_none());
    }

    #[test]
    fn suspended_board_has_no_rows() {
        let json = r#"{
            "generatedAt": "2024-03-15T23:59:00+00:00",
            "locationName": "Kings Norton",
            "crs": "KNN",
            "areServicesAvailable": false
        }"#;

        let board: StationBoard = serde_json::from_str(json).unwrap();

        assert!(board.train_services.is_none());
        assert_eq!(board.are_services_available, Some(false));
    }

    #[test]
    fn service_details_with_chain() {
        let json = r#"{
            "generatedAt": "2024-03-15T10:30:00Z",
            "locationName": "Kings Norton",
            "crs": "KNN",
            "operator": "West Midlands Trains",
            "sta": "10:45",
            "eta": "On time",
            "previousCallingPoints": [
                {
                    "callingPoint": [
                        {"locationName": "Birmingham New Street", "crs": "BHM", "st": "10:30", "at": "10:31"},
                        {"locationName": "Five Ways", "crs": "FWY", "st": "10:33"},
                        {"locationName": "Selly Oak", "crs": "SLY", "st": "10:38"}
                    ]
                }
            ]
        }"#;

        let details: ServiceDetails = serde_json::from_str(json).unwrap();

        assert_eq!(details.crs, "KNN");
        assert_eq!(details.sta.as_deref(), Some("10:45"));
        assert!(details.std.is_none());

        let chain = &details.previous_calling_points.as_ref().unwrap()[0].calling_point;
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].crs, "BHM");
        assert_eq!(chain[2].st.as_deref(), Some("10:38"));
    }

    #[test]
    fn calling_point_list_may_be_missing() {
        let json = r#"{"serviceChangeRequired": false}"#;
        let array: ArrayOfCallingPoints = serde_json::from_str(json).unwrap();
        assert!(array.calling_point.is_empty());
    }
}
