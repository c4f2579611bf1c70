//! The XDOM: a typed, style-aware document tree.
//!
//! The OpenXML reader produces an [`XDocument`]; the LaTeX renderer consumes
//! one. Nothing in this module knows about XML or LaTeX.
//!
//! Footnotes and endnotes are owned by the document's note maps and shared
//! with every citation site through an [`Arc`], so the same note cited twice
//! is one node in memory.
//!
//! Every type serializes with serde. [`XNode`] is internally tagged by a
//! `kind` field:
//!
//! ```
//! use xdoc::xdom::{XNode, XText};
//! use xdoc::common::Style;
//!
//! let node = XNode::Text(XText::new("Hi", Style::BOLD));
//! let json = serde_json::to_string(&node).unwrap();
//! assert_eq!(json, r#"{"kind":"Text","data":"Hi","styles":"BOLD"}"#);
//! ```
//!
//! Sharing is not preserved across serialization: a restored document holds
//! one copy of a note per citation site.
use crate::common::style::Style;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A leaf holding a run of text and its accumulated style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XText {
    pub data: String,
    pub styles: Style,
}

impl XText {
    pub fn new(data: impl Into<String>, styles: Style) -> Self {
        Self {
            data: data.into(),
            styles,
        }
    }

    /// A text node without any style.
    pub fn plain(data: impl Into<String>) -> Self {
        Self::new(data, Style::empty())
    }

    /// Whether this is a hard line break (`w:br`).
    #[inline]
    pub fn is_line_break(&self) -> bool {
        self.data == "\n"
    }
}

/// An ordered group of nodes with the bookmark names that point at it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XContainer {
    pub children: Vec<XNode>,
    pub labels: Vec<String>,
}

impl XContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<XNode>) -> Self {
        Self {
            children,
            labels: Vec::new(),
        }
    }

    /// Add a bookmark name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn push(&mut self, node: XNode) {
        self.children.push(node);
    }

    /// Concatenated text of all descendant text nodes, notes included.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// A cross-reference produced by a `REF`, `NOTEREF` or `PAGEREF` field.
///
/// `code` is the raw bookmark name from the field instruction; `children`
/// is the field's cached display result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XReference {
    pub code: String,
    pub children: Vec<XNode>,
}

/// A container rendered as a LaTeX command with the given name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XNamed {
    pub name: String,
    pub container: XContainer,
}

/// Which note map a note reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteKind {
    Footnote,
    Endnote,
}

impl NoteKind {
    /// Lowercase name, as used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            NoteKind::Footnote => "footnote",
            NoteKind::Endnote => "endnote",
        }
    }
}

impl std::fmt::Display for NoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder for a note reference whose id has no note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XUnresolved {
    pub kind: NoteKind,
    pub id: String,
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum XNode {
    Text(XText),
    /// Paragraph or plain field result
    Container(XContainer),
    Section(XContainer),
    Subsection(XContainer),
    Subsubsection(XContainer),
    /// Numbered linguistic example
    Example(XContainer),
    /// Result text of a field that is not a cross-reference, kept inline
    Field(XContainer),
    Footnote(Arc<XContainer>),
    Endnote(Arc<XContainer>),
    Reference(XReference),
    Named(XNamed),
    Unresolved(XUnresolved),
    Document(Box<XDocument>),
}

impl XNode {
    /// Shorthand for a styled text leaf.
    pub fn text(data: impl Into<String>, styles: Style) -> Self {
        XNode::Text(XText::new(data, styles))
    }

    /// Whether the node renders as a block (paragraph-level) construct.
    ///
    /// Adjacent block siblings are separated by a blank line in LaTeX
    /// output; text, field results, notes, references and placeholders
    /// are inline.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            XNode::Container(_)
                | XNode::Section(_)
                | XNode::Subsection(_)
                | XNode::Subsubsection(_)
                | XNode::Example(_)
                | XNode::Named(_)
                | XNode::Document(_)
        )
    }

    /// The container behind a container-like node.
    pub fn as_container(&self) -> Option<&XContainer> {
        match self {
            XNode::Container(c)
            | XNode::Section(c)
            | XNode::Subsection(c)
            | XNode::Subsubsection(c)
            | XNode::Example(c)
            | XNode::Field(c) => Some(c),
            XNode::Footnote(c) | XNode::Endnote(c) => Some(c),
            XNode::Named(named) => Some(&named.container),
            _ => None,
        }
    }

    /// Direct children of this node, empty for leaves.
    pub fn children(&self) -> &[XNode] {
        match self {
            XNode::Reference(reference) => &reference.children,
            XNode::Document(document) => &document.children,
            _ => self.as_container().map_or(&[], |c| &c.children),
        }
    }

    /// Bookmark labels attached to this node.
    pub fn labels(&self) -> &[String] {
        match self {
            XNode::Document(document) => &document.labels,
            _ => self.as_container().map_or(&[], |c| &c.labels),
        }
    }

    /// Visit this node and its descendants depth-first, parents first.
    ///
    /// Shared notes are visited once per citation site.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a XNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            XNode::Text(text) => out.push_str(&text.data),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            },
        }
    }
}

impl From<XText> for XNode {
    fn from(text: XText) -> Self {
        XNode::Text(text)
    }
}

impl From<XDocument> for XNode {
    fn from(document: XDocument) -> Self {
        XNode::Document(Box::new(document))
    }
}

/// The root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XDocument {
    /// Body paragraphs in document order
    pub children: Vec<XNode>,
    pub labels: Vec<String>,
    /// `docProps/core.xml` entries keyed by local name (`title`, `creator`, ...)
    pub metadata: BTreeMap<String, String>,
    /// Footnotes keyed by their `w:id`
    pub footnotes: BTreeMap<String, Arc<XContainer>>,
    /// Endnotes keyed by their `w:id`
    pub endnotes: BTreeMap<String, Arc<XContainer>>,
    /// Relationship id → target of the main document part
    pub relationships: BTreeMap<String, String>,
}

impl XDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document title from its core properties, if any.
    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").map(String::as_str)
    }

    /// Visit every node of the body depth-first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a XNode)) {
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Every bookmark label in the body and in all notes.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        self.walk(&mut |node| labels.extend(node.labels().iter().map(String::as_str)));
        for note in self.footnotes.values().chain(self.endnotes.values()) {
            labels.extend(note.labels.iter().map(String::as_str));
            for child in &note.children {
                child.walk(&mut |node| labels.extend(node.labels().iter().map(String::as_str)));
            }
        }
        labels
    }

    /// Every cross-reference in the body, in document order.
    pub fn references(&self) -> Vec<&XReference> {
        let mut references = Vec::new();
        self.walk(&mut |node| {
            if let XNode::Reference(reference) = node {
                references.push(reference);
            }
        });
        references
    }

    /// Concatenated text of the body.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}
