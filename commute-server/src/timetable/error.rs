//! Timetable error types.

use crate::darwin::{ConversionError, DarwinError};
use crate::domain::{Crs, TimeError};

/// Errors from building itineraries.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// A provider time string could not be parsed
    #[error("malformed time from provider: {0}")]
    Format(#[from] TimeError),

    /// Neither the board nor the service detail gave a scheduled time
    #[error("service {service_id} has no scheduled time")]
    MissingSchedule { service_id: String },

    /// The start station is not on the service's calling-point chain
    #[error("service {service_id} does not call at {start}")]
    StartNotInChain { service_id: String, start: Crs },

    /// Provider payload did not convert to domain types
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The rail provider could not be reached or refused the request
    #[error("rail provider: {0}")]
    Transport(#[from] DarwinError),
}
