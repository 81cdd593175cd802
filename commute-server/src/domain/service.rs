//! Board and service types.
//!
//! A `Board` is what one arrival or departure board query returns. Each
//! `ServiceSummary` on it can be expanded into a `ServiceDetail` with a
//! second provider call. Scheduled times stay as the provider's raw strings
//! here; they are parsed only when a leg is built.

use super::Crs;

/// Which kind of board a service was listed on.
///
/// Decides whether the scheduled arrival (`sta`) or departure (`std`) is the
/// service's time at the board station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardKind {
    Arrivals,
    Departures,
}

impl BoardKind {
    /// Pick the scheduled time relevant to this board kind.
    pub fn scheduled<'a>(self, sta: Option<&'a str>, std: Option<&'a str>) -> Option<&'a str> {
        match self {
            BoardKind::Arrivals => sta,
            BoardKind::Departures => std,
        }
    }
}

/// A service as listed on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    /// Ephemeral Darwin service ID, also used to fetch the detail.
    pub service_id: String,
    /// Scheduled time at the board station, if the board included it.
    pub scheduled: Option<String>,
}

impl ServiceSummary {
    pub fn new(service_id: impl Into<String>, scheduled: Option<&str>) -> Self {
        Self {
            service_id: service_id.into(),
            scheduled: scheduled.map(str::to_string),
        }
    }
}

/// A station the service called at before reaching the board station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousCall {
    pub station: Crs,
    pub scheduled: Option<String>,
}

/// Full detail for one service at the board station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDetail {
    pub service_id: String,
    /// The board station this detail was requested for.
    pub station: Crs,
    /// Scheduled time at `station`. Darwin sometimes leaves this out; see
    /// `timetable::reconcile`.
    pub scheduled: Option<String>,
    /// Earlier calling points in provider order (origin first).
    pub previous_calls: Vec<PreviousCall>,
}

/// One board query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub kind: BoardKind,
    pub station: Crs,
    /// Provider generation timestamp (ISO 8601).
    pub generated_at: String,
    /// False when the provider says nothing is running, or sent no list.
    pub services_available: bool,
    pub services: Vec<ServiceSummary>,
}

impl Board {
    /// Services to expand, or nothing when the board is unavailable.
    pub fn available_services(&self) -> &[ServiceSummary] {
        if self.services_available {
            &self.services
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_kind_picks_field() {
        assert_eq!(
            BoardKind::Arrivals.scheduled(Some("10:00"), Some("10:02")),
            Some("10:00")
        );
        assert_eq!(
            BoardKind::Departures.scheduled(Some("10:00"), Some("10:02")),
            Some("10:02")
        );
        assert_eq!(BoardKind::Arrivals.scheduled(None, Some("10:02")), None);
    }

    #[test]
    fn unavailable_board_hides_services() {
        let board = Board {
            kind: BoardKind::Arrivals,
            station: Crs::parse("KNN").unwrap(),
            generated_at: "2024-03-15T10:30:00Z".into(),
            services_available: false,
            services: vec![ServiceSummary::new("a", Some("10:00"))],
        };
        assert!(board.available_services().is_empty());
    }
}
