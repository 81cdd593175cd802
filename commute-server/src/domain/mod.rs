//! Domain types for the commute board.
//!
//! Station codes and clock times are validated at construction, so code that
//! receives them can trust their shape. Board and service types keep the
//! provider's optional fields optional until a leg is built from them.

mod leg;
mod service;
mod station;
mod time;

pub use leg::{Itinerary, Leg, LegStop};
pub use service::{Board, BoardKind, PreviousCall, ServiceDetail, ServiceSummary};
pub use station::{Crs, InvalidCrs};
pub use time::{ClockTime, TimeError};
