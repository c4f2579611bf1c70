/// Footnote and endnote parts.
///
/// Each `<w:footnote>` / `<w:endnote>` child of `footnotes.xml` /
/// `endnotes.xml` is read like a document body, with a context of its own,
/// and stored under its `w:id`. Citation sites share the stored node.
use crate::common::xml::XmlElement;
use crate::ooxml::docx::context::Context;
use crate::ooxml::docx::paragraph::read_body;
use crate::ooxml::error::Result;
use crate::xdom::{NoteKind, XContainer};
use log::warn;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Notes keyed by `w:id`.
pub type NoteMap = BTreeMap<String, Arc<XContainer>>;

/// The footnotes and endnotes of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    pub footnotes: NoteMap,
    pub endnotes: NoteMap,
}

impl Notes {
    /// Look up a note by kind and id.
    pub fn get(&self, kind: NoteKind, id: &str) -> Option<&Arc<XContainer>> {
        match kind {
            NoteKind::Footnote => self.footnotes.get(id),
            NoteKind::Endnote => self.endnotes.get(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.footnotes.is_empty() && self.endnotes.is_empty()
    }
}

/// Read every note under the root of a notes part.
///
/// Notes are read without access to other notes, so a note reference
/// inside a note becomes a placeholder.
pub fn read_notes(root: &XmlElement, part: &str) -> Result<NoteMap> {
    let no_notes = Notes::default();
    let mut notes = NoteMap::new();
    for (index, child) in root.child_elements().enumerate() {
        let Some(id) = child.attribute("w:id") else {
            warn!("{}: {} without w:id skipped", part, child.name());
            continue;
        };
        let mut ctx = Context::new(part);
        let children = ctx.within(root, 0, |ctx| {
            ctx.within(child, index, |ctx| read_body(child, ctx, &no_notes))
        })?;
        notes.insert(id.to_string(), Arc::new(XContainer::with_children(children)));
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::parse;
    use crate::xdom::XNode;

    const FOOTNOTES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:footnotes xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:footnote w:type="separator" w:id="-1"><w:p><w:r><w:separator/></w:r></w:p></w:footnote>
  <w:footnote w:type="continuationSeparator" w:id="0"><w:p><w:r><w:continuationSeparator/></w:r></w:p></w:footnote>
  <w:footnote w:id="1">
    <w:p>
      <w:r><w:footnoteRef/></w:r>
      <w:r><w:t xml:space="preserve"> First note.</w:t></w:r>
    </w:p>
    <w:p><w:r><w:rPr><w:i/></w:rPr><w:t>Second paragraph.</w:t></w:r></w:p>
  </w:footnote>
</w:footnotes>"#;

    #[test]
    fn test_read_notes() {
        let root = parse(FOOTNOTES).unwrap();
        let notes = read_notes(&root, "word/footnotes.xml").unwrap();
        assert_eq!(notes.len(), 3);

        let note = &notes["1"];
        assert_eq!(note.children.len(), 2);
        assert_eq!(note.text(), " First note.Second paragraph.");
        assert!(notes["-1"].text().is_empty());

        let notes = Notes {
            footnotes: notes,
            endnotes: NoteMap::new(),
        };
        assert!(notes.get(NoteKind::Footnote, "1").is_some());
        assert!(notes.get(NoteKind::Endnote, "1").is_none());
    }

    #[test]
    fn test_note_errors_carry_note_path() {
        let xml = r#"<w:endnotes xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:endnote w:id="1"><w:p><w:r><w:fldChar w:fldCharType="bogus"/></w:r></w:p></w:endnote>
</w:endnotes>"#;
        let root = parse(xml).unwrap();
        let err = read_notes(&root, "word/endnotes.xml").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("word/endnotes.xml"));
        assert!(message.contains("w:endnotes[1]/w:endnote[1]/w:p[1]/w:r[1]/w:fldChar[1]"));
    }

    #[test]
    fn test_nested_note_reference_is_unresolved() {
        let xml = r#"<w:footnotes xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:footnote w:id="1"><w:p><w:r><w:footnoteReference w:id="1"/></w:r></w:p></w:footnote>
</w:footnotes>"#;
        let root = parse(xml).unwrap();
        let notes = read_notes(&root, "word/footnotes.xml").unwrap();
        let paragraph = &notes["1"].children[0];
        assert!(matches!(paragraph.children()[0], XNode::Unresolved(_)));
    }
}
