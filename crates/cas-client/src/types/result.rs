//! Ticket verification outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Attributes;

/// Principal established by a successful ticket validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Authenticated username.
    pub username: String,

    /// Attributes released by the server (empty for CAS 1.0/2.0).
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,

    /// Proxy-granting ticket IOU, when a proxy callback was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pgt_iou: Option<String>,
}

impl VerificationResult {
    /// Creates a result for `username` with no attributes.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            attributes: Attributes::new(),
            pgt_iou: None,
        }
    }

    /// Sets the attribute set.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Adds a single attribute value.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Sets the proxy-granting ticket IOU.
    #[must_use]
    pub fn with_pgt_iou(mut self, pgt_iou: impl Into<String>) -> Self {
        self.pgt_iou = Some(pgt_iou.into());
        self
    }
}

/// Explicit rejection of a ticket by the CAS server.
///
/// CAS 1.0 carries no error code, so `code` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// Server-supplied error code, e.g. `INVALID_TICKET`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human-readable message from the server.
    pub message: String,
}

impl VerificationFailure {
    /// Creates a failure.
    #[must_use]
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns true if the server reported the given error code.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, self.message.is_empty()) {
            (Some(code), true) => write!(f, "ticket rejected: {code}"),
            (Some(code), false) => write!(f, "ticket rejected: {code}: {}", self.message),
            (None, true) => f.write_str("ticket rejected"),
            (None, false) => write!(f, "ticket rejected: {}", self.message),
        }
    }
}
