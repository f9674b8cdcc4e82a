//! Errors that can occur when configuring the client or performing requests

use reqwest::StatusCode;
use thiserror::Error;

use crate::services::{DecodeError, TransportError};

/// An error returned by the API client.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing, blank, or otherwise unusable.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// The operation was invoked in a state that does not allow it.
    #[error("Failed precondition: {0}")]
    FailedPrecondition(&'static str),

    /// Server returned a non-success status code.
    #[error("Request failed with status {status}")]
    RequestFailed {
        /// HTTP status code of the response.
        status: StatusCode,
    },

    /// The response body could not be decoded into the requested type.
    #[error("Failed to decode response body: {0}")]
    DecodeFailed(#[source] DecodeError),

    /// The transport could not complete the request.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    pub(crate) fn blank(name: &'static str) -> Self {
        Error::InvalidArgument {
            name,
            reason: "value must not be empty or whitespace".to_string(),
        }
    }

    /// Returns true for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Returns true for [`Error::FailedPrecondition`].
    pub fn is_failed_precondition(&self) -> bool {
        matches!(self, Error::FailedPrecondition(_))
    }

    /// Returns true for [`Error::RequestFailed`].
    pub fn is_request_failed(&self) -> bool {
        matches!(self, Error::RequestFailed { .. })
    }

    /// Returns true for [`Error::DecodeFailed`].
    pub fn is_decode_failed(&self) -> bool {
        matches!(self, Error::DecodeFailed(_))
    }

    /// The status code carried by a [`Error::RequestFailed`], if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for API client operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Rejects empty and whitespace-only strings, returning the input otherwise.
pub(crate) fn require_non_blank<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::blank(name));
    }
    Ok(value)
}
