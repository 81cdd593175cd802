//! Leg and itinerary types.
//!
//! A `Leg` is one train's run from the commuter's start station to the board
//! station, as a list of stops with decimal times. An `Itinerary` is the list
//! of legs for one direction.

use serde::Serialize;

use super::{ClockTime, Crs};

/// One stop on a leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegStop {
    pub crs: Crs,
    pub time: ClockTime,
}

impl LegStop {
    pub fn new(crs: Crs, time: ClockTime) -> Self {
        Self { crs, time }
    }
}

/// A train's stops from the start station to the board station.
///
/// # Invariants
///
/// - Never empty: the terminal stop is always present and always last.
/// - Stops are in provider order; times are not re-sorted or checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Leg {
    stops: Vec<LegStop>,
}

impl Leg {
    /// Build a leg from the chain stops followed by the terminal stop.
    pub fn new(chain: Vec<LegStop>, terminal: LegStop) -> Self {
        let mut stops = chain;
        stops.push(terminal);
        Self { stops }
    }

    pub fn stops(&self) -> &[LegStop] {
        &self.stops
    }

    /// The first stop. For a leg whose start station was found in the chain
    /// this is the start station; otherwise it is the terminal stop.
    pub fn first(&self) -> &LegStop {
        &self.stops[0]
    }

    pub fn terminal(&self) -> &LegStop {
        &self.stops[self.stops.len() - 1]
    }
}

/// Legs for one direction, in the provider's service order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Keep only legs whose first stop is at or before `cutoff`.
    pub fn departing_by(self, cutoff: ClockTime) -> Self {
        let legs = self
            .legs
            .into_iter()
            .filter(|leg| leg.first().time <= cutoff)
            .collect();
        Self { legs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(crs: &str, hours: f64) -> LegStop {
        LegStop::new(Crs::parse(crs).unwrap(), ClockTime::from_hours(hours))
    }

    fn leg_starting_at(hours: f64) -> Leg {
        Leg::new(vec![stop("BHM", hours)], stop("KNN", hours + 0.5))
    }

    #[test]
    fn terminal_is_last() {
        let leg = Leg::new(vec![stop("BHM", 9.0), stop("SAA", 9.25)], stop("KNN", 9.5));
        assert_eq!(leg.stops().len(), 3);
        assert_eq!(leg.first().crs.as_str(), "BHM");
        assert_eq!(leg.terminal().crs.as_str(), "KNN");
    }

    #[test]
    fn terminal_only_leg() {
        let leg = Leg::new(Vec::new(), stop("KNN", 9.5));
        assert_eq!(leg.stops().len(), 1);
        assert_eq!(leg.first(), leg.terminal());
    }

    #[test]
    fn filter_keeps_legs_at_or_before_cutoff() {
        let itinerary = Itinerary::new(vec![
            leg_starting_at(9.5),
            leg_starting_at(10.0),
            leg_starting_at(10.5),
        ]);

        let kept = itinerary.departing_by(ClockTime::from_hours(10.0));

        assert_eq!(kept.len(), 2);
        assert_eq!(kept.legs()[0].first().time.hours(), 9.5);
        assert_eq!(kept.legs()[1].first().time.hours(), 10.0);
    }

    #[test]
    fn filter_keeps_order() {
        let itinerary = Itinerary::new(vec![leg_starting_at(9.75), leg_starting_at(9.25)]);
        let kept = itinerary.departing_by(ClockTime::from_hours(10.0));
        assert_eq!(kept.legs()[0].first().time.hours(), 9.75);
        assert_eq!(kept.legs()[1].first().time.hours(), 9.25);
    }

    #[test]
    fn serializes_as_nested_lists() {
        let itinerary = Itinerary::new(vec![Leg::new(vec![stop("BHM", 9.5)], stop("KNN", 9.75))]);
        let json = serde_json::to_value(&itinerary).unwrap();
        assert_eq!(
            json,
            serde_json::json!([[
                {"crs": "BHM", "time": 9.5},
                {"crs": "KNN", "time": 9.75}
            ]])
        );
    }
}
