//! Backfilling scheduled times that Darwin left off service details.

use crate::domain::{ServiceDetail, ServiceSummary};

use super::error::TimetableError;

/// Fill in the detail's scheduled time from the board summary if missing.
///
/// A time already on the detail is kept as-is. The summary is not touched.
/// Fails with `MissingSchedule` when neither side has a time, so no leg is
/// ever built with an undefined terminal time.
pub fn reconcile(
    summary: &ServiceSummary,
    mut detail: ServiceDetail,
) -> Result<ServiceDetail, TimetableError> {
    if detail.scheduled.is_none() {
        detail.scheduled = summary.scheduled.clone();
    }

    if detail.scheduled.is_none() {
        return Err(TimetableError::MissingSchedule {
            service_id: summary.service_id.clone(),
        });
    }

    Ok(detail)
}
