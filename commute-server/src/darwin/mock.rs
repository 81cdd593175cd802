//! Mock Darwin client for testing without API access.
//!
//! Holds raw Darwin JSON responses in memory and serves them through the same
//! conversion path as the live client. Responses can be added one by one or
//! loaded from a directory laid out as:
//!
//! ```text
//! arrivals/{CRS}.json     GetArrivalBoard responses
//! departures/{CRS}.json   GetDepartureBoard responses
//! services/{ID}.json      GetServiceDetails responses
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::domain::{Board, BoardKind, Crs, ServiceDetail};

use super::convert::{convert_service_details, convert_station_board};
use super::error::DarwinError;
use super::source::RailDataSource;
use super::types::{ServiceDetails, StationBoard};

/// A canned failure for a board or service lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    NotFound,
    Unauthorized,
    Api(u16),
}

impl MockFailure {
    fn to_error(self) -> DarwinError {
        match self {
            MockFailure::NotFound => DarwinError::ServiceNotFound,
            MockFailure::Unauthorized => DarwinError::Unauthorized,
            MockFailure::Api(status) => DarwinError::ApiError {
                status,
                message: "mock failure".to_string(),
            },
        }
    }
}

/// Mock Darwin client that serves canned responses.
#[derive(Default)]
pub struct MockDarwinClient {
    boards: HashMap<(BoardKind, Crs), StationBoard>,
    services: HashMap<String, ServiceDetails>,
    board_failures: HashMap<(BoardKind, Crs), MockFailure>,
    service_failures: HashMap<String, MockFailure>,
    /// Service IDs looked up, in request order.
    detail_requests: Mutex<Vec<String>>,
}

impl MockDarwinClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load canned responses from a directory.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, DarwinError> {
        let data_dir = data_dir.as_ref();
        let mut client = Self::new();

        for (sub, kind) in [
            ("arrivals", BoardKind::Arrivals),
            ("departures", BoardKind::Departures),
        ] {
            for (stem, board) in read_json_dir::<StationBoard>(&data_dir.join(sub))? {
                let crs = Crs::parse(&stem).map_err(|e| DarwinError::ApiError {
                    status: 0,
                    message: format!("Invalid CRS in filename: {e}"),
                })?;
                client.boards.insert((kind, crs), board);
            }
        }

        for (stem, details) in read_json_dir::<ServiceDetails>(&data_dir.join("services"))? {
            client.services.insert(stem, details);
        }

        if client.boards.is_empty() {
            return Err(DarwinError::ApiError {
                status: 0,
                message: format!("No mock board files found in {:?}", data_dir),
            });
        }

        Ok(client)
    }

    /// Serve `board` for queries of `kind` at the board's own station.
    ///
    /// Panics if the board's `crs` is not a station code.
    pub fn with_board(mut self, kind: BoardKind, board: StationBoard) -> Self {
        let crs = match Crs::parse(&board.crs) {
            Ok(crs) => crs,
            Err(e) => panic!("mock board has a bad station code: {e}"),
        };
        self.boards.insert((kind, crs), board);
        self
    }

    pub fn with_service(mut self, service_id: impl Into<String>, details: ServiceDetails) -> Self {
        self.services.insert(service_id.into(), details);
        self
    }

    pub fn with_board_failure(mut self, kind: BoardKind, crs: Crs, failure: MockFailure) -> Self {
        self.board_failures.insert((kind, crs), failure);
        self
    }

    pub fn with_service_failure(
        mut self,
        service_id: impl Into<String>,
        failure: MockFailure,
    ) -> Self {
        self.service_failures.insert(service_id.into(), failure);
        self
    }

    /// Service IDs requested so far, in request order.
    pub fn detail_requests(&self) -> Vec<String> {
        self.detail_requests
            .lock()
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }

    fn board(&self, kind: BoardKind, crs: &Crs) -> Result<Board, DarwinError> {
        if let Some(failure) = self.board_failures.get(&(kind, *crs)) {
            return Err(failure.to_error());
        }

        let board = self
            .boards
            .get(&(kind, *crs))
            .ok_or_else(|| DarwinError::ApiError {
                status: 404,
                message: format!("No mock {:?} board for station {}", kind, crs),
            })?;

        convert_station_board(board, kind).map_err(|e| DarwinError::Json {
            message: e.to_string(),
            body: None,
        })
    }
}

impl RailDataSource for MockDarwinClient {
    async fn arrival_board(
        &self,
        crs: &Crs,
        _from: &Crs,
        _num_rows: u8,
    ) -> Result<Board, DarwinError> {
        self.board(BoardKind::Arrivals, crs)
    }

    async fn departure_board(
        &self,
        crs: &Crs,
        _to: &Crs,
        _num_rows: u8,
    ) -> Result<Board, DarwinError> {
        self.board(BoardKind::Departures, crs)
    }

    async fn service_detail(
        &self,
        service_id: &str,
        kind: BoardKind,
    ) -> Result<ServiceDetail, DarwinError> {
        if let Ok(mut ids) = self.detail_requests.lock() {
            ids.push(service_id.to_string());
        }

        if let Some(failure) = self.service_failures.get(service_id) {
            return Err(failure.to_error());
        }

        let details = self
            .services
            .get(service_id)
            .ok_or(DarwinError::ServiceNotFound)?;

        convert_service_details(details, service_id, kind).map_err(|e| DarwinError::Json {
            message: e.to_string(),
            body: None,
        })
    }
}

/// Read every `*.json` file in `dir`, keyed by file stem. A missing
/// directory yields nothing.
fn read_json_dir<T: DeserializeOwned>(dir: &Path) -> Result<Vec<(String, T)>, DarwinError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| DarwinError::ApiError {
        status: 0,
        message: format!("Failed to read mock data directory: {}", e),
    })?;

    let mut results = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| DarwinError::ApiError {
            status: 0,
            message: format!("Failed to read directory entry: {}", e),
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| DarwinError::ApiError {
                status: 0,
                message: format!("Invalid filename: {:?}", path),
            })?
            .to_string();

        let json = std::fs::read_to_string(&path).map_err(|e| DarwinError::ApiError {
            status: 0,
            message: format!("Failed to read {:?}: {}", path, e),
        })?;

        let value: T = serde_json::from_str(&json).map_err(|e| DarwinError::Json {
            message: format!("Failed to parse {:?}: {}", path, e),
            body: None,
        })?;

        results.push((stem, value));
    }

    Ok(results)
}
