//! Building a leg from a service's calling-point chain.

use crate::domain::{ClockTime, Crs, Leg, LegStop, PreviousCall, ServiceDetail};

use super::config::UnmatchedStart;
use super::error::TimetableError;

/// Where the start station sits in a calling-point chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStart {
    /// Index of the first chain entry at the start station.
    Matched(usize),
    /// The start station does not appear in the chain.
    Unmatched,
}

/// Locate the first chain entry at `start`.
pub fn find_start(chain: &[PreviousCall], start: &Crs) -> ChainStart {
    // `Crs` is stored uppercase, so equality is already case-insensitive.
    chain
        .iter()
        .position(|call| call.station == *start)
        .map_or(ChainStart::Unmatched, ChainStart::Matched)
}

/// Build the leg for one service, starting at `start`.
///
/// The leg holds every chain entry from the first one at `start` onwards, in
/// chain order, then the detail's own station and scheduled time. When the
/// chain never reaches `start`, `policy` decides between a terminal-only leg
/// and an error.
pub fn build_leg(
    detail: &ServiceDetail,
    start: &Crs,
    policy: UnmatchedStart,
) -> Result<Leg, TimetableError> {
    let terminal_time = detail.scheduled.as_deref().ok_or_else(|| {
        TimetableError::MissingSchedule {
            service_id: detail.service_id.clone(),
        }
    })?;
    let terminal = LegStop::new(detail.station, ClockTime::from_24h(terminal_time)?);

    let chain = match find_start(&detail.previous_calls, start) {
        ChainStart::Matched(idx) => detail.previous_calls[idx..]
            .iter()
            .map(|call| chain_stop(call, &detail.service_id))
            .collect::<Result<Vec<_>, _>>()?,
        ChainStart::Unmatched => match policy {
            UnmatchedStart::TerminalOnly => Vec::new(),
            UnmatchedStart::Reject => {
                return Err(TimetableError::StartNotInChain {
                    service_id: detail.service_id.clone(),
                    start: *start,
                });
            }
        },
    };

    Ok(Leg::new(chain, terminal))
}

fn chain_stop(call: &PreviousCall, service_id: &str) -> Result<LegStop, TimetableError> {
    let scheduled = call.scheduled.as_deref().ok_or_else(|| {
        TimetableError::MissingSchedule {
            service_id: service_id.to_string(),
        }
    })?;
    Ok(LegStop::new(call.station, ClockTime::from_24h(scheduled)?))
}
