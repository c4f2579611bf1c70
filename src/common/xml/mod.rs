//! A small navigable XML element tree built on `quick-xml`.
//!
//! The OpenXML reader walks paragraphs and runs recursively and needs random
//! access to attributes and child elements, so each package part is parsed
//! once into an owned tree instead of being streamed. The tree keeps the
//! qualified names exactly as they appear in the source (`w:p`, `w:val`);
//! namespace URIs are not resolved.
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;
use thiserror::Error;

/// Errors raised while building an element tree.
#[derive(Error, Debug)]
pub enum XmlError {
    /// The underlying reader rejected the input
    #[error("malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    /// The input contained no root element
    #[error("document has no root element")]
    NoRoot,

    /// An end tag did not match the open element
    #[error("unexpected end tag </{0}>")]
    UnexpectedEnd(String),
}

pub type Result<T> = std::result::Result<T, XmlError>;

/// A node of the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with its attributes and children in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified tag name, e.g. `w:p`
    name: String,
    /// Attributes as `(qualified name, unescaped value)` pairs
    attributes: Vec<(String, String)>,
    /// Child nodes, elements and text interleaved
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element with the given qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The qualified tag name (`w:p`).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag name with any namespace prefix dropped (`w:p` → `p`).
    #[inline]
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// Look up an attribute by its qualified name (`w:val`).
    pub fn attribute(&self, qualified: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == qualified)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in source order.
    #[inline]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// All child nodes, including text.
    #[inline]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements only, in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// The first child element with the given local name.
    pub fn child(&self, local: &str) -> Option<&XmlElement> {
        self.child_elements().find(|child| child.local_name() == local)
    }

    /// The first descendant element (depth-first, document order) with the
    /// given local name.
    pub fn find_descendant(&self, local: &str) -> Option<&XmlElement> {
        for child in self.child_elements() {
            if child.local_name() == local {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(local) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenation of all descendant text.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Add an attribute. Used when assembling trees by hand.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element. Used when assembling trees by hand.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Append a text child. Used when assembling trees by hand.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }
}

/// Drop the namespace prefix of a qualified name.
///
/// ```
/// use xdoc::common::xml::local_name;
/// assert_eq!(local_name("w:r"), "r");
/// assert_eq!(local_name("br"), "br");
/// ```
#[inline]
pub fn local_name(qualified: &str) -> &str {
    match qualified.rfind(':') {
        Some(idx) => &qualified[idx + 1..],
        None => qualified,
    }
}

/// Parse an XML string and return its root element.
///
/// Text is kept verbatim (no trimming) because whitespace inside `w:t`
/// is significant. Comments, processing instructions and the declaration
/// are dropped.
pub fn parse(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    // Whitespace-only text inside <w:t xml:space="preserve"> must survive
    reader.config_mut().trim_text(false);

    // Open elements; the bottom of the stack is a synthetic holder for the root
    let mut stack: Vec<XmlElement> = vec![XmlElement::default()];
    let mut buf = Vec::with_capacity(1024);

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| XmlError::Malformed {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;
        match event {
            Event::Start(ref e) => {
                stack.push(element_from_start(e, &reader)?);
            },
            Event::Empty(ref e) => {
                let element = element_from_start(e, &reader)?;
                push_child(&mut stack, XmlNode::Element(element));
            },
            Event::End(ref e) => {
                if stack.len() < 2 {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(XmlError::UnexpectedEnd(name));
                }
                if let Some(element) = stack.pop() {
                    push_child(&mut stack, XmlNode::Element(element));
                }
            },
            Event::Text(ref e) => {
                let raw = std::str::from_utf8(e.as_ref()).map_err(|err| malformed(&reader, err))?;
                let text = unescape(raw).map_err(|err| malformed(&reader, err))?;
                push_text(&mut stack, &text);
            },
            Event::CData(ref e) => {
                let raw = std::str::from_utf8(e.as_ref()).map_err(|err| malformed(&reader, err))?;
                push_text(&mut stack, raw);
            },
            Event::GeneralRef(ref e) => {
                let name = std::str::from_utf8(e.as_ref()).map_err(|err| malformed(&reader, err))?;
                let entity = format!("&{};", name);
                let text = unescape(&entity).map_err(|err| malformed(&reader, err))?;
                push_text(&mut stack, &text);
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    if stack.len() != 1 {
        return Err(XmlError::Malformed {
            position: reader.buffer_position() as u64,
            message: "unclosed element at end of input".to_string(),
        });
    }

    stack
        .pop()
        .and_then(|holder| {
            holder.children.into_iter().find_map(|child| match child {
                XmlNode::Element(element) => Some(element),
                XmlNode::Text(_) => None,
            })
        })
        .ok_or(XmlError::NoRoot)
}

fn malformed<E: std::fmt::Display>(reader: &Reader<&[u8]>, err: E) -> XmlError {
    XmlError::Malformed {
        position: reader.buffer_position() as u64,
        message: err.to_string(),
    }
}

fn element_from_start(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<XmlElement> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|err| malformed(reader, err))?
        .to_string();
    let mut element = XmlElement::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|err| malformed(reader, err))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| malformed(reader, err))?
            .to_string();
        let value = attr
            .unescape_value()
            .unwrap_or_else(|_| Cow::Owned(String::from_utf8_lossy(&attr.value).into_owned()))
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn push_child(stack: &mut [XmlElement], node: XmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

/// Append text, coalescing with a preceding text node so that entity
/// references do not fragment `text_content` callers.
fn push_text(stack: &mut [XmlElement], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(parent) = stack.last_mut() {
        if let Some(XmlNode::Text(previous)) = parent.children.last_mut() {
            previous.push_str(text);
        } else {
            parent.children.push(XmlNode::Text(text.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigates_elements() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:rPr><w:b w:val="1"/></w:rPr><w:t xml:space="preserve"> Hi </w:t></w:r></w:p>
  </w:body>
</w:document>"#;
        let root = parse(xml).unwrap();
        assert_eq!(root.name(), "w:document");
        assert_eq!(root.local_name(), "document");

        let body = root.child_elements().next().unwrap();
        assert_eq!(body.local_name(), "body");
        assert_eq!(body.child_elements().count(), 1);

        let bold = root.find_descendant("b").unwrap();
        assert_eq!(bold.attribute("w:val"), Some("1"));
        assert_eq!(bold.attribute("val"), None);

        let text = root.find_descendant("t").unwrap();
        assert_eq!(text.text_content(), " Hi ");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let root = parse(r#"<a title="x &amp; y"><b>1 &lt; 2 &#x3E; 0</b></a>"#).unwrap();
        assert_eq!(root.attribute("title"), Some("x & y"));
        assert_eq!(root.text_content(), "1 < 2 > 0");
        let b = root.child("b").unwrap();
        assert_eq!(b.children().len(), 1);
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(parse("").is_err());
        assert!(parse("<a><b></a>").is_err());
        assert!(parse("<a>").is_err());
    }

    #[test]
    fn test_hand_built_tree() {
        let element = XmlElement::new("w:sym")
            .with_attribute("w:font", "Symbol")
            .with_attribute("w:char", "F061");
        assert_eq!(element.attribute("w:char"), Some("F061"));
        assert_eq!(element.local_name(), "sym");
    }
}
