//! Application state for the web layer.

use std::sync::Arc;

use crate::darwin::DarwinClient;
use crate::timetable::TimetableConfig;
use crate::weather::WeatherClient;

/// Shared application state.
///
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Darwin API client
    pub darwin: Arc<DarwinClient>,

    /// Forecast API client
    pub weather: Arc<WeatherClient>,

    /// Itinerary building parameters
    pub config: Arc<TimetableConfig>,
}

impl AppState {
    pub fn new(darwin: DarwinClient, weather: WeatherClient, config: TimetableConfig) -> Self {
        Self {
            darwin: Arc::new(darwin),
            weather: Arc::new(weather),
            config: Arc::new(config),
        }
    }
}
