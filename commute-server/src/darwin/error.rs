//! Darwin client error types.

/// Errors from the Darwin HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DarwinError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Service details not found (expired or invalid ID)
    #[error("service not found (expired or invalid ID)")]
    ServiceNotFound,

    /// Rate limited by the API
    #[error("rate limited by Darwin API")]
    RateLimited,

    /// Invalid access token or unauthorized
    #[error("unauthorized: check LDBWS_AUTH")]
    Unauthorized,

    /// Client could not be set up from its configuration
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl DarwinError {
    /// Whether this failure means the provider itself could not be reached
    /// or trusted, as opposed to a single query it declined to answer.
    ///
    /// Transport failures abort a whole request; the rest only empty the
    /// affected direction.
    pub fn is_transport(&self) -> bool {
        match self {
            DarwinError::Http(_)
            | DarwinError::Json { .. }
            | DarwinError::RateLimited
            | DarwinError::Unauthorized
            | DarwinError::NotConfigured(_) => true,
            DarwinError::ApiError { status, .. } => *status == 0 || *status >= 500,
            DarwinError::ServiceNotFound => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DarwinError::ServiceNotFound;
        assert_eq!(err.to_string(), "service not found (expired or invalid ID)");

        let err = DarwinError::ApiError {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = DarwinError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected string"));
    }

    #[test]
    fn transport_classification() {
        assert!(DarwinError::Unauthorized.is_transport());
        assert!(DarwinError::RateLimited.is_transport());
        assert!(
            DarwinError::ApiError {
                status: 503,
                message: String::new()
            }
            .is_transport()
        );

        assert!(!DarwinError::ServiceNotFound.is_transport());
        assert!(
            !DarwinError::ApiError {
                status: 400,
                message: "Invalid crs".into()
            }
            .is_transport()
        );
    }
}
