//! Both directions of a commute in one request.

use chrono::{DateTime, Utc};
use chrono_tz::Europe::London;
use serde::Serialize;
use tracing::{debug, info};

use crate::darwin::{RailDataSource, generation_time};
use crate::domain::{Board, ClockTime, Crs, Itinerary};

use super::config::{TimetableConfig, UnmatchedStart};
use super::error::TimetableError;
use super::itinerary::{build_itinerary, soft_board};

/// Trains each way between two stations, plus the reference time used to
/// cut both lists off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommutePlan {
    /// Left to right: arrivals at the right station from the left.
    pub lr: Itinerary,
    /// Right to left: arrivals at the left station from the right.
    pub rl: Itinerary,
    pub now: ClockTime,
}

/// Build itineraries in both directions between `left` and `right`.
///
/// Both boards are queried concurrently. "now" comes from the left-to-right
/// board's generation time (the other board's if that one could not be
/// fetched, the UK wall clock if neither could), and one cutoff of
/// `now + horizon` applies to both directions.
pub async fn build_both_directions<S: RailDataSource>(
    source: &S,
    left: &Crs,
    right: &Crs,
    config: &TimetableConfig,
) -> Result<CommutePlan, TimetableError> {
    info!(%left, %right, "looking for trains");

    let (lr_board, rl_board) = tokio::join!(
        source.arrival_board(right, left, config.num_rows),
        source.arrival_board(left, right, config.num_rows),
    );
    let lr_board = soft_board(lr_board, right)?;
    let rl_board = soft_board(rl_board, left)?;

    let now = match lr_board.as_ref().or(rl_board.as_ref()) {
        Some(board) => generation_time(&board.generated_at)?,
        None => uk_clock(Utc::now())?,
    };
    let cutoff = now.plus_hours(config.horizon_hours);
    debug!(now = now.hours(), cutoff = cutoff.hours(), "reference time");

    let policy = config.unmatched_start;
    let (lr, rl) = tokio::try_join!(
        direction(source, lr_board.as_ref(), left, cutoff, policy),
        direction(source, rl_board.as_ref(), right, cutoff, policy),
    )?;

    info!(lr = lr.len(), rl = rl.len(), "commute plan built");

    Ok(CommutePlan { lr, rl, now })
}

async fn direction<S: RailDataSource>(
    source: &S,
    board: Option<&Board>,
    start: &Crs,
    cutoff: ClockTime,
    policy: UnmatchedStart,
) -> Result<Itinerary, TimetableError> {
    match board {
        Some(board) => build_itinerary(source, board, start, cutoff, policy).await,
        None => Ok(Itinerary::empty()),
    }
}

/// Wall-clock time in London, matching the times Darwin publishes
/// whatever the host's own zone is.
fn uk_clock(at: DateTime<Utc>) -> Result<ClockTime, TimetableError> {
    let uk = at.with_timezone(&London);
    Ok(ClockTime::from_24h(&uk.format("%H:%M").to_string())?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn uk_clock_follows_british_summer_time() {
        let summer = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        assert_eq!(uk_clock(summer).unwrap().hours(), 13.0);
    }

    #[test]
    fn uk_clock_is_utc_in_winter() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 8, 45, 0).unwrap();
        assert_eq!(uk_clock(winter).unwrap().hours(), 8.75);
    }
}
