//! Darwin LDBWS (Live Departure Boards) client.
//!
//! This module provides an HTTP client for the National Rail Darwin web
//! service, plus a mock that serves canned responses.
//!
//! Key characteristics of Darwin:
//! - Service IDs are **ephemeral** - only valid while the service appears
//!   on a board (~2 minutes after expected time)
//! - Times are in "HH:MM" format (UK local time)
//! - Plain arrival/departure boards carry no calling points, so every listed
//!   service needs a separate `GetServiceDetails` call
//! - `sta`/`std` on service details are omitted inconsistently

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{DEFAULT_BASE_URL, DarwinClient, DarwinConfig};
pub use convert::{
    ConversionError, convert_service_details, convert_station_board, generation_time,
};
pub use error::DarwinError;
pub use mock::{MockDarwinClient, MockFailure};
pub use source::RailDataSource;
pub use types::{ArrayOfCallingPoints, CallingPoint, ServiceDetails, ServiceItem, StationBoard};
