//! Darwin LDBWS HTTP client.
//!
//! Provides async methods for the Darwin Live Departure Boards web service.
//! Handles token authentication, concurrency limiting and conversion to
//! domain types.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Board, BoardKind, Crs, ServiceDetail};

use super::convert::{convert_service_details, convert_station_board};
use super::error::DarwinError;
use super::source::RailDataSource;
use super::types::{ServiceDetails, StationBoard};

/// Default base URL for the Darwin LDBWS JSON API.
pub const DEFAULT_BASE_URL: &str =
    "https://api1.raildata.org.uk/1010-live-arrival-and-departure-boards-arr-and-dep1_1/LDBWS";

/// In-flight request limit. One commute request fans out into a detail
/// lookup per listed service.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Settings for `DarwinClient`.
#[derive(Debug, Clone)]
pub struct DarwinConfig {
    /// Static access token, sent on every request
    pub access_token: String,
    /// LDBWS root, without the `/api/...` suffix
    pub base_url: String,
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DarwinConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Point at another LDBWS deployment or a local stub.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Darwin LDBWS API client, with a semaphore bounding in-flight requests.
#[derive(Debug, Clone)]
pub struct DarwinClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl DarwinClient {
    /// Build the HTTP client with the token as a default header.
    pub fn new(config: DarwinConfig) -> Result<Self, DarwinError> {
        let mut headers = HeaderMap::new();

        let token = HeaderValue::from_str(&config.access_token)
            .map_err(|_| DarwinError::NotConfigured("invalid access token format".to_string()))?;
        headers.insert("x-apikey", token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch a raw board.
    ///
    /// `filter_type` is "from" for arrivals and "to" for departures.
    pub async fn get_board(
        &self,
        kind: BoardKind,
        crs: &Crs,
        filter_crs: &Crs,
        num_rows: u8,
    ) -> Result<StationBoard, DarwinError> {
        let (operation, filter_type) = match kind {
            BoardKind::Arrivals => ("GetArrivalBoard", "from"),
            BoardKind::Departures => ("GetDepartureBoard", "to"),
        };

        let url = format!(
            "{}/api/20220120/{}/{}",
            self.base_url,
            operation,
            crs.as_str()
        );

        self.get_json(
            &url,
            &[
                ("numRows", num_rows.to_string()),
                ("filterCrs", filter_crs.as_str().to_string()),
                ("filterType", filter_type.to_string()),
            ],
        )
        .await
    }

    /// Fetch the raw details for one service.
    ///
    /// Darwin service IDs are ephemeral; this returns `ServiceNotFound` once
    /// the service has dropped off its board.
    pub async fn get_service_details(
        &self,
        service_id: &str,
    ) -> Result<ServiceDetails, DarwinError> {
        let url = format!(
            "{}/api/20220120/GetServiceDetails/{}",
            self.base_url, service_id
        );

        self.get_json(&url, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, DarwinError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DarwinError::NotConfigured("request semaphore closed".to_string()))?;

        debug!(url, "darwin request");

        let response = self.http.get(url).query(query).send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(DarwinError::Unauthorized);
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(DarwinError::RateLimited),
            StatusCode::NOT_FOUND => return Err(DarwinError::ServiceNotFound),
            status if !status.is_success() => {
                return Err(DarwinError::ApiError {
                    status: status.as_u16(),
                    message: response.text().await.unwrap_or_default(),
                });
            }
            _ => {}
        }

        let text = response.text().await?;

        // An expired service ID comes back as an empty or null body.
        if matches!(text.trim(), "" | "null") {
            return Err(DarwinError::ServiceNotFound);
        }

        serde_json::from_str(&text).map_err(|e| DarwinError::Json {
            message: e.to_string(),
            body: Some(text.chars().take(500).collect()),
        })
    }
}

impl RailDataSource for DarwinClient {
    async fn arrival_board(
        &self,
        crs: &Crs,
        from: &Crs,
        num_rows: u8,
    ) -> Result<Board, DarwinError> {
        let board = self
            .get_board(BoardKind::Arrivals, crs, from, num_rows)
            .await?;
        convert_station_board(&board, BoardKind::Arrivals).map_err(|e| DarwinError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    async fn departure_board(
        &self,
        crs: &Crs,
        to: &Crs,
        num_rows: u8,
    ) -> Result<Board, DarwinError> {
        let board = self
            .get_board(BoardKind::Departures, crs, to, num_rows)
            .await?;
        convert_station_board(&board, BoardKind::Departures).map_err(|e| DarwinError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    async fn service_detail(
        &self,
        service_id: &str,
        kind: BoardKind,
    ) -> Result<ServiceDetail, DarwinError> {
        let details = self.get_service_details(service_id).await?;
        convert_service_details(&details, service_id, kind).map_err(|e| DarwinError::Json {
            message: e.to_string(),
            body: None,
        })
    }
}
