//! CAS 2.0/3.0 XML responses from `/serviceValidate` and `/proxy`.

use tracing::debug;

use crate::error::{CasError, CasResult};
use crate::types::{Attributes, VerificationResult};
use crate::xml::{parse_document, XmlElement};

/// Container elements that carry released attributes.
const ATTRIBUTE_CONTAINERS: [&str; 2] = ["attributes", "norEduPerson"];

/// JA-SIG style marker element; not an attribute.
const ATTRA_STYLE: &str = "attraStyle";

/// Parses a `/serviceValidate` response body.
///
/// Attributes are only read when `with_attributes` is set (CAS 3.0).
/// `username_attribute`, when released with a non-empty value, overrides
/// the `user` element.
///
/// ## Errors
///
/// - [`CasError::Rejected`] for an `authenticationFailure` element
/// - [`CasError::Parse`] for malformed XML, a success without `user`, or a
///   document with neither outcome
pub fn parse_service_response(
    body: &str,
    with_attributes: bool,
    username_attribute: Option<&str>,
) -> CasResult<VerificationResult> {
    let root = parse_document(body)?;

    if let Some(success) = root.find("authenticationSuccess") {
        return parse_success(success, with_attributes, username_attribute);
    }

    if let Some(failure) = root.find("authenticationFailure") {
        return Err(rejection(failure));
    }

    Err(CasError::parse(format!(
        "'{}' contains neither authenticationSuccess nor authenticationFailure",
        root.name
    )))
}

/// Parses a `/proxy` response body into the issued proxy ticket.
///
/// ## Errors
///
/// - [`CasError::Rejected`] for a `proxyFailure` element
/// - [`CasError::Parse`] for malformed XML or a missing `proxyTicket`
pub fn parse_proxy_response(body: &str) -> CasResult<String> {
    let root = parse_document(body)?;

    if let Some(success) = root.find("proxySuccess") {
        return success
            .child("proxyTicket")
            .and_then(XmlElement::non_empty_text)
            .map(str::to_string)
            .ok_or_else(|| CasError::parse("proxySuccess without proxyTicket"));
    }

    if let Some(failure) = root.find("proxyFailure") {
        return Err(rejection(failure));
    }

    Err(CasError::parse("response contains neither proxySuccess nor proxyFailure"))
}

fn parse_success(
    success: &XmlElement,
    with_attributes: bool,
    username_attribute: Option<&str>,
) -> CasResult<VerificationResult> {
    let user = success
        .child("user")
        .and_then(XmlElement::non_empty_text)
        .ok_or_else(|| CasError::parse("authenticationSuccess without user"))?;

    let attributes = if with_attributes {
        collect_attributes(success)
    } else {
        Attributes::new()
    };

    let username = username_attribute
        .and_then(|name| attributes.first(name))
        .filter(|value| !value.is_empty())
        .unwrap_or(user)
        .to_string();

    if username != user {
        debug!(user = %user, username = %username, "Username taken from attribute");
    }

    let mut result = VerificationResult::new(username).with_attributes(attributes);

    if let Some(iou) = success
        .child("proxyGrantingTicket")
        .and_then(XmlElement::non_empty_text)
    {
        result = result.with_pgt_iou(iou);
    }

    Ok(result)
}

fn collect_attributes(success: &XmlElement) -> Attributes {
    let mut attributes = Attributes::new();

    let containers = success
        .children
        .iter()
        .filter(|c| ATTRIBUTE_CONTAINERS.contains(&c.name.as_str()));

    for container in containers {
        for attr in container.children.iter().filter(|a| a.name != ATTRA_STYLE) {
            attributes.insert(attr.name.as_str(), attr.text.as_str());
        }
    }

    attributes
}

fn rejection(failure: &XmlElement) -> CasError {
    CasError::rejected(
        failure.attribute("code").map(str::to_string),
        failure.text.as_str(),
    )
}
