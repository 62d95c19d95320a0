//! CAS client error types.
//!
//! Every verification outcome other than success surfaces as a [`CasError`].
//! The variants fall into distinct categories (see [`ErrorKind`]) so that a
//! caller can tell "the server rejected the ticket" apart from "the server
//! sent something we could not understand" and from "we never reached the
//! server".

use thiserror::Error;

use crate::types::VerificationFailure;

/// Result type for CAS operations.
pub type CasResult<T> = Result<T, CasError>;

/// CAS protocol client errors.
#[derive(Debug, Error)]
pub enum CasError {
    /// Invalid or incomplete client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The requested protocol version could not be resolved.
    ///
    /// The display text is relied upon by host applications and must not change.
    #[error("Unsupported CAS_VERSION '{0}'")]
    UnsupportedVersion(String),

    /// Network-level failure talking to the CAS server.
    #[error("transport error: {0}")]
    Transport(String),

    /// The CAS server answered with a non-success HTTP status.
    #[error("CAS server returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request to CAS server timed out")]
    Timeout,

    /// The caller cancelled the verification before it completed.
    #[error("ticket verification cancelled")]
    Cancelled,

    /// The response body does not follow the protocol grammar.
    #[error("malformed CAS response: {0}")]
    Parse(String),

    /// The CAS server explicitly rejected the ticket.
    #[error("{0}")]
    Rejected(VerificationFailure),
}

/// Broad category of a [`CasError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Misconfiguration; fatal at construction, never worth retrying.
    Configuration,
    /// Network failure, timeout or non-2xx status; the caller may retry.
    Transport,
    /// The response could not be understood.
    Parse,
    /// The server rejected the ticket.
    Verification,
    /// The caller aborted the request.
    Cancelled,
}

impl CasError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a rejection carrying the server's error code and message.
    #[must_use]
    pub fn rejected(code: Option<String>, message: impl Into<String>) -> Self {
        Self::Rejected(VerificationFailure::new(code, message))
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) | Self::UnsupportedVersion(_) => ErrorKind::Configuration,
            Self::Transport(_) | Self::Status { .. } | Self::Timeout => ErrorKind::Transport,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Rejected(_) => ErrorKind::Verification,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Checks if this is a configuration error.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Configuration)
    }

    /// Checks if this is a transport-level error.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transport)
    }

    /// Checks if the server explicitly rejected the ticket.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns the server-supplied failure details for a rejection.
    #[must_use]
    pub const fn failure(&self) -> Option<&VerificationFailure> {
        match self {
            Self::Rejected(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CasError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<quick_xml::Error> for CasError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
