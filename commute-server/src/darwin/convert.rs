//! Conversion from Darwin DTOs to domain types.
//!
//! Station codes are validated here. Scheduled times are carried through as
//! raw strings; the timetable decides when and whether to parse them.

use chrono::{DateTime, NaiveDateTime};

use crate::domain::{
    Board, BoardKind, ClockTime, Crs, PreviousCall, ServiceDetail, ServiceSummary,
};

use super::types::{CallingPoint, ServiceDetails, StationBoard};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a CRS code
    #[error("invalid CRS code: {0}")]
    InvalidCrs(String),

    /// Failed to parse the board generation timestamp
    #[error("invalid generation timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Convert an arrival or departure board to a domain `Board`.
pub fn convert_station_board(
    board: &StationBoard,
    kind: BoardKind,
) -> Result<Board, ConversionError> {
    let station =
        Crs::parse(&board.crs).map_err(|_| ConversionError::InvalidCrs(board.crs.clone()))?;

    let services: Vec<ServiceSummary> = board
        .train_services
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|item| {
            ServiceSummary::new(
                item.service_id.clone(),
                kind.scheduled(item.sta.as_deref(), item.std.as_deref()),
            )
        })
        .collect();

    // An explicit `false` wins even if Darwin still sent a list.
    let services_available =
        board.are_services_available != Some(false) && board.train_services.is_some();

    Ok(Board {
        kind,
        station,
        generated_at: board.generated_at.clone(),
        services_available,
        services,
    })
}

/// Convert a `GetServiceDetails` response to a domain `ServiceDetail`.
///
/// Only the first previous-calling-point list is used; a missing list is an
/// empty chain.
pub fn convert_service_details(
    details: &ServiceDetails,
    service_id: &str,
    kind: BoardKind,
) -> Result<ServiceDetail, ConversionError> {
    let station =
        Crs::parse(&details.crs).map_err(|_| ConversionError::InvalidCrs(details.crs.clone()))?;

    let previous_calls = match &details.previous_calling_points {
        Some(arrays) if !arrays.is_empty() => arrays[0]
            .calling_point
            .iter()
            .map(calling_point_to_previous_call)
            .collect::<Result<Vec<_>, _>>()?,
        _ => Vec::new(),
    };

    Ok(ServiceDetail {
        service_id: service_id.to_string(),
        station,
        scheduled: kind
            .scheduled(details.sta.as_deref(), details.std.as_deref())
            .map(str::to_string),
        previous_calls,
    })
}

fn calling_point_to_previous_call(cp: &CallingPoint) -> Result<PreviousCall, ConversionError> {
    let station = Crs::parse(&cp.crs).map_err(|_| ConversionError::InvalidCrs(cp.crs.clone()))?;
    Ok(PreviousCall {
        station,
        scheduled: cp.st.clone(),
    })
}

/// Wall-clock time at which Darwin generated a response.
///
/// Takes the hour and minute in the timestamp's own offset (UK local time)
/// and runs them through the 24-hour codec.
pub fn generation_time(generated_at: &str) -> Result<ClockTime, ConversionError> {
    let hhmm = match DateTime::parse_from_rfc3339(generated_at) {
        Ok(dt) => dt.format("%H:%M").to_string(),
        Err(_) => NaiveDateTime::parse_from_str(generated_at, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|_| ConversionError::InvalidTimestamp(generated_at.to_string()))?
            .format("%H:%M")
            .to_string(),
    };

    ClockTime::from_24h(&hhmm)
        .map_err(|_| ConversionError::InvalidTimestamp(generated_at.to_string()))
}
