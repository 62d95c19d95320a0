//! SAML 1.1 validation response parsing.

use tracing::debug;

use crate::error::{CasError, CasResult};
use crate::types::{Attributes, VerificationResult};
use crate::xml::{parse_document, XmlElement};

/// Parses a `/samlValidate` response body.
///
/// The SOAP envelope, if any, is looked through: the `Status` decides the
/// outcome, the first `NameIdentifier` names the subject and every
/// `Attribute` in the assertion is collected. `username_attribute`, when
/// released with a non-empty value, overrides the `NameIdentifier`.
///
/// ## Errors
///
/// - [`CasError::Rejected`] when the status code is not `Success`
/// - [`CasError::Parse`] for malformed XML, a missing status, or a success
///   without a subject
pub fn parse_saml_response(
    body: &str,
    username_attribute: Option<&str>,
) -> CasResult<VerificationResult> {
    let root = parse_document(body)?;

    let status_code = root
        .find("Status")
        .and_then(|status| status.child("StatusCode"))
        .and_then(|code| code.attribute("Value"))
        .ok_or_else(|| CasError::parse("SAML response without StatusCode"))?;

    if !status_code.ends_with("Success") {
        let message = root
            .find("StatusMessage")
            .map(|m| m.text.as_str())
            .unwrap_or_default();
        return Err(CasError::rejected(Some(local_part(status_code).to_string()), message));
    }

    let attributes = collect_attributes(&root);

    let subject = root
        .find("NameIdentifier")
        .and_then(XmlElement::non_empty_text);

    let username = username_attribute
        .and_then(|name| attributes.first(name))
        .filter(|value| !value.is_empty())
        .or(subject)
        .ok_or_else(|| CasError::parse("SAML assertion without NameIdentifier"))?
        .to_string();

    debug!(
        subject = subject.unwrap_or_default(),
        attributes = attributes.len(),
        "Parsed SAML assertion"
    );

    Ok(VerificationResult::new(username).with_attributes(attributes))
}

fn collect_attributes(root: &XmlElement) -> Attributes {
    let mut found = Vec::new();
    root.find_all("Attribute", &mut found);

    let mut attributes = Attributes::new();
    for attribute in found {
        let Some(name) = attribute.attribute("AttributeName") else {
            continue;
        };
        for value in attribute.children.iter().filter(|c| c.name == "AttributeValue") {
            attributes.insert(name, value.text.as_str());
        }
    }
    attributes
}

/// `samlp:RequestDenied` -> `RequestDenied`
fn local_part(qname: &str) -> &str {
    qname.rsplit(':').next().unwrap_or(qname)
}
