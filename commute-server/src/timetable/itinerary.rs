//! Turning one board into an itinerary.

use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::darwin::{DarwinError, RailDataSource};
use crate::domain::{Board, BoardKind, ClockTime, Crs, Itinerary, Leg, ServiceSummary};

use super::config::UnmatchedStart;
use super::error::TimetableError;
use super::leg::build_leg;
use super::reconcile::reconcile;

/// Build the itinerary for one board.
///
/// Every listed service is expanded with a detail lookup (run concurrently),
/// reconciled and turned into a leg; legs are kept in board order and then
/// filtered to those whose first stop is at or before `cutoff`. An
/// unavailable board is an empty itinerary.
pub async fn build_itinerary<S: RailDataSource>(
    source: &S,
    board: &Board,
    start: &Crs,
    cutoff: ClockTime,
    policy: UnmatchedStart,
) -> Result<Itinerary, TimetableError> {
    let services = board.available_services();
    if services.is_empty() {
        debug!(station = %board.station, "no services available");
        return Ok(Itinerary::empty());
    }

    let legs = try_join_all(
        services
            .iter()
            .map(|summary| leg_for_service(source, summary, board.kind, start, policy)),
    )
    .await?;

    let itinerary = Itinerary::new(legs.into_iter().flatten().collect());
    let listed = itinerary.len();
    let itinerary = itinerary.departing_by(cutoff);

    debug!(
        station = %board.station,
        listed,
        kept = itinerary.len(),
        cutoff = cutoff.hours(),
        "itinerary built"
    );

    Ok(itinerary)
}

/// Fetch, reconcile and build the leg for one listed service.
///
/// A service whose detail has already expired is skipped; transport
/// failures abort.
async fn leg_for_service<S: RailDataSource>(
    source: &S,
    summary: &ServiceSummary,
    kind: BoardKind,
    start: &Crs,
    policy: UnmatchedStart,
) -> Result<Option<Leg>, TimetableError> {
    let detail = match source.service_detail(&summary.service_id, kind).await {
        Ok(detail) => detail,
        Err(e) if e.is_transport() => return Err(e.into()),
        Err(e) => {
            warn!(
                service_id = %summary.service_id,
                error = %e,
                "skipping service without details"
            );
            return Ok(None);
        }
    };

    let detail = reconcile(summary, detail)?;
    build_leg(&detail, start, policy).map(Some)
}

/// Keep a fetched board, or downgrade a non-transport failure to "no board".
pub(crate) fn soft_board(
    result: Result<Board, DarwinError>,
    station: &Crs,
) -> Result<Option<Board>, TimetableError> {
    match result {
        Ok(board) => Ok(Some(board)),
        Err(e) if e.is_transport() => Err(e.into()),
        Err(e) => {
            warn!(station = %station, error = %e, "board unavailable, treating as empty");
            Ok(None)
        }
    }
}

/// Scheduled departure times from `from` for trains calling at `to`, in
/// board order.
pub async fn departure_times<S: RailDataSource>(
    source: &S,
    from: &Crs,
    to: &Crs,
    num_rows: u8,
) -> Result<Vec<ClockTime>, TimetableError> {
    let Some(board) = soft_board(source.departure_board(from, to, num_rows).await, from)? else {
        return Ok(Vec::new());
    };

    board
        .available_services()
        .iter()
        .map(|summary| {
            let std = summary.scheduled.as_deref().ok_or_else(|| {
                TimetableError::MissingSchedule {
                    service_id: summary.service_id.clone(),
                }
            })?;
            Ok(ClockTime::from_24h(std)?)
        })
        .collect()
}
