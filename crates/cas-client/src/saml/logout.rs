//! Single logout requests posted by the CAS server.
//!
//! When a user logs out of CAS, the server POSTs a SAML 2.0
//! `LogoutRequest` to every service the user accessed. Its `SessionIndex`
//! values are the service tickets whose application sessions must end.

use serde::{Deserialize, Serialize};

use crate::error::{CasError, CasResult};
use crate::xml::{parse_document, XmlElement};

/// Decoded single logout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Request identifier.
    pub id: Option<String>,

    /// Principal being logged out.
    pub name_id: Option<String>,

    /// Service tickets whose sessions must be terminated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub session_indexes: Vec<String>,
}

/// Parses the `logoutRequest` form value of a single logout POST.
///
/// ## Errors
///
/// Returns [`CasError::Parse`] for malformed XML or a document that is not a
/// `LogoutRequest`.
pub fn parse_logout_request(xml: &str) -> CasResult<LogoutRequest> {
    let root = parse_document(xml)?;

    let request = root
        .find("LogoutRequest")
        .ok_or_else(|| CasError::parse(format!("expected LogoutRequest, got '{}'", root.name)))?;

    let mut indexes = Vec::new();
    request.find_all("SessionIndex", &mut indexes);

    Ok(LogoutRequest {
        id: request.attribute("ID").map(str::to_string),
        name_id: request
            .find("NameID")
            .and_then(XmlElement::non_empty_text)
            .map(str::to_string),
        session_indexes: indexes
            .into_iter()
            .filter_map(XmlElement::non_empty_text)
            .map(str::to_string)
            .collect(),
    })
}
