//! The rail data seam used by the timetable.

use std::future::Future;

use crate::domain::{Board, BoardKind, Crs, ServiceDetail};

use super::error::DarwinError;

/// Source of board and service detail data.
///
/// Implemented by the live `DarwinClient` and by `MockDarwinClient`, so the
/// timetable can be exercised without network access. Futures are `Send` so
/// handlers stay spawnable.
pub trait RailDataSource {
    /// Services arriving at `crs` that called at `from`.
    fn arrival_board(
        &self,
        crs: &Crs,
        from: &Crs,
        num_rows: u8,
    ) -> impl Future<Output = Result<Board, DarwinError>> + Send;

    /// Services departing `crs` that will call at `to`.
    fn departure_board(
        &self,
        crs: &Crs,
        to: &Crs,
        num_rows: u8,
    ) -> impl Future<Output = Result<Board, DarwinError>> + Send;

    /// Full detail for a service seen on a board of the given kind.
    fn service_detail(
        &self,
        service_id: &str,
        kind: BoardKind,
    ) -> impl Future<Output = Result<ServiceDetail, DarwinError>> + Send;
}
