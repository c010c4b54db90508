//! Error type for API client operations.
//!
//! The client does not distinguish transport failures from non-2xx responses
//! any further than callers need: screens swallow both identically, while the
//! CLI maps validation-shaped statuses to a distinct exit code.

use thiserror::Error;

/// Failure produced by an [`ApiClient`](crate::ApiClient) call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    /// The configured trace identifier is not a valid header value.
    #[error("trace identifier contains invalid characters")]
    InvalidRequestId,
    /// An endpoint path could not be joined onto the base URL.
    #[error("invalid endpoint path '{path}': {source}")]
    Endpoint {
        /// Path that failed to join.
        path: String,
        /// Underlying parse failure.
        source: url::ParseError,
    },
    /// The request never produced a response (connect, timeout, DNS).
    #[error("request to {path} failed: {source}")]
    Transport {
        /// Endpoint path the request targeted.
        path: String,
        /// Underlying transport failure.
        source: reqwest::Error,
    },
    /// A 2xx response carried a body that did not match the expected DTO.
    #[error("failed to decode response from {path}: {source}")]
    Decode {
        /// Endpoint path the response came from.
        path: String,
        /// Underlying decode failure.
        source: reqwest::Error,
    },
    /// The server answered with a non-2xx status.
    #[error("{message} (status {status})")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },
}

impl ClientError {
    pub(crate) fn transport(path: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn decode(path: &str, source: reqwest::Error) -> Self {
        Self::Decode {
            path: path.to_string(),
            source,
        }
    }

    /// HTTP status of the error, when the server produced a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the request payload (400, 409, 422).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Api { status: 400 | 409 | 422, .. })
    }

    /// Whether the server rejected the credentials or token (401, 403).
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }
}
