//! SAML 1.1 validation request.

use chrono::{DateTime, Utc};
use quick_xml::escape::escape;

use crate::types::{SAML1_PROTOCOL_NS, SOAP_ENVELOPE_NS};

/// SAML 1.1 `samlp:Request` carrying a service ticket as its
/// `AssertionArtifact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamlValidateRequest {
    /// Unique identifier for this request.
    pub request_id: String,

    /// Timestamp when this request was issued.
    pub issue_instant: DateTime<Utc>,

    /// The service ticket being validated.
    pub ticket: String,
}

impl SamlValidateRequest {
    /// Creates a request for `ticket` with a fresh ID and the current time.
    #[must_use]
    pub fn new(ticket: impl Into<String>) -> Self {
        Self {
            request_id: format!("_{}", uuid::Uuid::new_v4()),
            issue_instant: Utc::now(),
            ticket: ticket.into(),
        }
    }

    /// Sets the issue instant.
    #[must_use]
    pub const fn with_issue_instant(mut self, instant: DateTime<Utc>) -> Self {
        self.issue_instant = instant;
        self
    }

    /// Serializes the request inside a SOAP 1.1 envelope.
    #[must_use]
    pub fn to_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><SOAP-ENV:Envelope xmlns:SOAP-ENV="{soap}"><SOAP-ENV:Header/><SOAP-ENV:Body><samlp:Request xmlns:samlp="{samlp}" MajorVersion="1" MinorVersion="1" RequestID="{id}" IssueInstant="{instant}"><samlp:AssertionArtifact>{ticket}</samlp:AssertionArtifact></samlp:Request></SOAP-ENV:Body></SOAP-ENV:Envelope>"#,
            soap = SOAP_ENVELOPE_NS,
            samlp = SAML1_PROTOCOL_NS,
            id = escape(self.request_id.as_str()),
            instant = self.issue_instant.format("%Y-%m-%dT%H:%M:%SZ"),
            ticket = escape(self.ticket.as_str()),
        )
    }

    /// Serializes the request into a POST body.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_xml().into_bytes()
    }
}
