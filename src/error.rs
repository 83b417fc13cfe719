//! Error types for talking to the authorization endpoint.

use reqwest::Response;
use thiserror::Error;

use crate::form::EncodingError;

/// Errors that can occur while fetching or submitting records.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request never got a response
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A fetch got a non-2xx response
    #[error("Request to '{url}' returned {status}: {body}")]
    Unsuccessful {
        url: String,
        status: u16,
        body: String,
    },

    /// A response failed status validation; the response is kept for inspection
    #[error("HTTP {status} {status_text}")]
    HttpStatus {
        status: u16,
        status_text: String,
        response: Box<Response>,
    },

    /// The response body could not be read or parsed
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The record could not be form-encoded
    #[error("Form encoding failed: {0}")]
    Encoding(#[from] EncodingError),
}

impl SyncError {
    /// Connectivity failures and unsuccessful fetches.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SyncError::Transport { .. } | SyncError::Unsuccessful { .. }
        )
    }

    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SyncError::Unsuccessful { status, .. } | SyncError::HttpStatus { status, .. } => {
                Some(*status)
            }
            SyncError::Transport { source, .. } | SyncError::Decode { source, .. } => {
                source.status().map(|s| s.as_u16())
            }
            _ => None,
        }
    }

    /// Get error type string for log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            SyncError::ClientBuild(_) => "client_build",
            SyncError::Transport { .. } => "network_error",
            SyncError::Unsuccessful { .. } => "network_error",
            SyncError::HttpStatus { .. } => "http_status_error",
            SyncError::Decode { .. } => "decode_error",
            SyncError::Encoding(_) => "encoding_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsuccessful_fetch_is_network_error() {
        let err = SyncError::Unsuccessful {
            url: "http://x/mgr/serverAuthorization".to_string(),
            status: 503,
            body: "down".to_string(),
        };
        assert!(err.is_network());
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.error_type(), "network_error");
        assert_eq!(
            err.to_string(),
            "Request to 'http://x/mgr/serverAuthorization' returned 503: down"
        );
    }

    #[test]
    fn encoding_error_converts() {
        let err: SyncError = EncodingError::UnsupportedValue {
            path: "a".to_string(),
            kind: "function".to_string(),
        }
        .into();
        assert!(!err.is_network());
        assert_eq!(err.error_type(), "encoding_error");
    }
}
