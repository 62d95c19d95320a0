//! Validation response parsers, one strategy per protocol version.

mod service;
mod text;

pub use service::{parse_proxy_response, parse_service_response};
pub use text::parse_validate_response;

use crate::error::CasResult;
use crate::saml::parse_saml_response;
use crate::types::{ProtocolVersion, VerificationResult};

/// Parses a raw validation response body with the strategy for `version`.
///
/// ## Errors
///
/// Returns [`crate::CasError::Rejected`] when the server rejected the ticket
/// and [`crate::CasError::Parse`] when the body could not be understood.
pub fn parse_response(
    version: ProtocolVersion,
    body: &str,
    username_attribute: Option<&str>,
) -> CasResult<VerificationResult> {
    match version {
        ProtocolVersion::V1 => parse_validate_response(body),
        ProtocolVersion::V2 | ProtocolVersion::V3 => {
            parse_service_response(body, version.supports_attributes(), username_attribute)
        }
        ProtocolVersion::Saml => parse_saml_response(body, username_attribute),
    }
}
