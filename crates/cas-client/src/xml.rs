//! Minimal XML element tree for CAS and SAML responses.
//!
//! Responses are small, so they are read into an owned tree with
//! `quick-xml` and then navigated by local name. Namespace prefixes are
//! dropped: CAS servers disagree on prefixes (`cas:`, `saml1:`, none), but
//! local names are fixed by the protocol.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{CasError, CasResult};

/// An element with its attributes, text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct XmlElement {
    /// Local name (prefix stripped).
    pub name: String,
    /// Attributes keyed by local name.
    pub attributes: Vec<(String, String)>,
    /// Concatenated, trimmed text content of this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Returns the value of the attribute with the given local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the first element with the given local name, searching this
    /// element and then its descendants depth-first.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Collects every descendant with the given local name, in document order.
    pub fn find_all<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if child.name == name {
                out.push(child);
            }
            child.find_all(name, out);
        }
    }

    /// Returns the element's text, or `None` when it is empty.
    pub fn non_empty_text(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}

/// Parses a document and returns its root element.
///
/// ## Errors
///
/// Returns [`CasError::Parse`] for malformed XML, a DOCTYPE declaration, a
/// document with no root element, or content after the root element.
pub(crate) fn parse_document(xml: &str) -> CasResult<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                ensure_single_root(root.as_ref())?;
                stack.push(start_element(&e)?);
            }
            Event::Empty(e) => {
                ensure_single_root(root.as_ref())?;
                let element = start_element(&e)?;
                close_element(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| CasError::parse("unexpected closing tag"))?;
                close_element(element, &mut stack, &mut root);
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                let text = std::str::from_utf8(&raw)
                    .map_err(|e| CasError::parse(format!("invalid UTF-8 in CDATA: {e}")))?;
                append_text(&mut stack, text.trim())?;
            }
            // SECURITY: entity declarations are never honoured.
            Event::DocType(_) => {
                return Err(CasError::parse("DOCTYPE declarations are not allowed"));
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(CasError::parse(format!("unclosed element '{}'", open.name)));
    }

    root.ok_or_else(|| CasError::parse("document has no root element"))
}

fn ensure_single_root(root: Option<&XmlElement>) -> CasResult<()> {
    match root {
        Some(existing) => Err(CasError::parse(format!(
            "content after root element '{}'",
            existing.name
        ))),
        None => Ok(()),
    }
}

fn start_element(e: &BytesStart<'_>) -> CasResult<XmlElement> {
    let name = utf8(e.local_name().as_ref())?;

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| CasError::parse(format!("invalid attribute: {err}")))?;
        let key = utf8(attr.key.local_name().as_ref())?;
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        ..XmlElement::default()
    })
}

fn close_element(element: XmlElement, stack: &mut [XmlElement], root: &mut Option<XmlElement>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn append_text(stack: &mut [XmlElement], text: &str) -> CasResult<()> {
    match stack.last_mut() {
        Some(current) => {
            current.text.push_str(text);
            Ok(())
        }
        None if text.is_empty() => Ok(()),
        None => Err(CasError::parse("text outside of the root element")),
    }
}

fn utf8(bytes: &[u8]) -> CasResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| CasError::parse(format!("invalid UTF-8 in name: {e}")))
}
