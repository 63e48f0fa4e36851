//! Error definitions for client operations.

use thiserror::Error;

use crate::client::family::EndpointFamily;

/// A single request against one family that did not produce a usable
/// response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connect, DNS, aborted transfer) or an
    /// unparseable list body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The family answered with a non-success status.
    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Terminal outcome of a client operation, after any fallback attempt.
///
/// Validation and cancellation never reach the network; the two failure
/// variants mirror the fallback policy (add stops at one family, list and
/// delete try both).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The task input was empty after trimming.
    #[error("task must not be empty")]
    EmptyTask,

    /// The user declined the delete confirmation.
    #[error("cancelled")]
    Cancelled,

    /// A single-family operation failed.
    #[error("{family} endpoint failed: {source}")]
    Family {
        family: EndpointFamily,
        source: ApiError,
    },

    /// Both families failed the operation.
    #[error("{preferred} and {fallback} endpoints both failed: {preferred_error}; {fallback_error}")]
    BothFamilies {
        preferred: EndpointFamily,
        fallback: EndpointFamily,
        preferred_error: ApiError,
        fallback_error: ApiError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "server returned HTTP 500 Internal Server Error");

        let err = ClientError::Family {
            family: EndpointFamily::Primary,
            source: ApiError::Status(reqwest::StatusCode::BAD_GATEWAY),
        };
        assert!(err.to_string().contains("primary"));
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_both_families_display_names_both() {
        let err = ClientError::BothFamilies {
            preferred: EndpointFamily::Secondary,
            fallback: EndpointFamily::Primary,
            preferred_error: ApiError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE),
            fallback_error: ApiError::Status(reqwest::StatusCode::NOT_FOUND),
        };
        let text = err.to_string();
        assert!(text.contains("secondary"));
        assert!(text.contains("primary"));
        assert!(text.contains("503"));
        assert!(text.contains("404"));
    }
}
