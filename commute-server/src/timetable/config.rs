//! Timetable configuration.

/// What to do when a service's calling-point chain never reaches the start
/// station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedStart {
    /// Emit a leg holding only the terminal stop. Its first stop is then the
    /// board station, which the cutoff filter compares against instead.
    #[default]
    TerminalOnly,

    /// Fail the leg with `TimetableError::StartNotInChain`.
    Reject,
}

/// Configuration parameters for itinerary building.
#[derive(Debug, Clone)]
pub struct TimetableConfig {
    /// Services requested per board query.
    pub num_rows: u8,

    /// How far past "now" a leg may start and still be listed (hours).
    pub horizon_hours: f64,

    /// Handling for services whose chain lacks the start station.
    pub unmatched_start: UnmatchedStart,
}

impl TimetableConfig {
    pub fn new(num_rows: u8, horizon_hours: f64, unmatched_start: UnmatchedStart) -> Self {
        Self {
            num_rows,
            horizon_hours,
            unmatched_start,
        }
    }
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            num_rows: 10,
            horizon_hours: 1.0,
            unmatched_start: UnmatchedStart::TerminalOnly,
        }
    }
}
