//! Timetable derivation.
//!
//! Turns Darwin boards and service details into per-direction itineraries:
//! each listed service is expanded into its calling-point chain from the
//! commuter's start station to the board station, with decimal times, and
//! the list is cut off at a fixed horizon past the provider's "now".

mod config;
mod directions;
mod error;
mod itinerary;
mod leg;
mod reconcile;


pub use config::{TimetableConfig, UnmatchedStart};
pub use directions::{CommutePlan, build_both_directions};
pub use error::TimetableError;
pub use itinerary::{build_itinerary, departure_times};
pub use leg::{ChainStart, build_leg, find_start};
pub use reconcile::reconcile;
