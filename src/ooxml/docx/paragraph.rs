/// Reading bodies, paragraphs and runs into XDOM nodes.
///
/// `read_body`, `read_paragraph` and `read_run` all share one [`Context`]
/// per part. Paragraph and run each open a style scope, so a text node's
/// style is the union of its paragraph's `w:pPr` flags and its run's
/// `w:rPr` flags.
use crate::common::xml::XmlElement;
use crate::ooxml::docx::bookmark::Bookmark;
use crate::ooxml::docx::context::Context;
use crate::ooxml::docx::field::FieldCharType;
use crate::ooxml::docx::footnote::Notes;
use crate::ooxml::docx::properties::read_properties_styles;
use crate::ooxml::docx::symbols;
use crate::ooxml::error::{OoxmlError, Result};
use crate::xdom::{NoteKind, XContainer, XNode, XUnresolved};
use log::{debug, error, info, warn};

/// The structural role a paragraph style (`w:pStyle`) assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphKind {
    #[default]
    Plain,
    Example,
    Section,
    Subsection,
    Subsubsection,
}

impl ParagraphKind {
    /// Map a style id to a paragraph kind; `None` for unrecognized styles.
    pub fn from_style_id(style_id: &str) -> Option<Self> {
        match style_id {
            "ListNumber" | "Example" => Some(ParagraphKind::Example),
            "Heading1" => Some(ParagraphKind::Section),
            "Heading2" => Some(ParagraphKind::Subsection),
            "Heading3" => Some(ParagraphKind::Subsubsection),
            _ => None,
        }
    }

    /// Wrap a collected paragraph in the node for this kind.
    pub fn into_node(self, container: XContainer) -> XNode {
        match self {
            ParagraphKind::Plain => XNode::Container(container),
            ParagraphKind::Example => XNode::Example(container),
            ParagraphKind::Section => XNode::Section(container),
            ParagraphKind::Subsection => XNode::Subsection(container),
            ParagraphKind::Subsubsection => XNode::Subsubsection(container),
        }
    }
}

/// Read the paragraphs of a `w:body`, `w:footnote` or `w:endnote`.
///
/// Section properties are skipped silently; tables, content controls and
/// other block content are skipped with a warning.
pub(crate) fn read_body(
    body: &XmlElement,
    ctx: &mut Context,
    notes: &Notes,
) -> Result<Vec<XNode>> {
    let mut nodes = Vec::new();
    for (index, child) in body.child_elements().enumerate() {
        match child.local_name() {
            "p" => {
                let paragraph =
                    ctx.within(child, index, |ctx| read_paragraph(child, ctx, notes))?;
                nodes.push(paragraph);
            },
            "sectPr" => {},
            tag => {
                warn!("{}: {} > {} skipped", ctx.part(), body.name(), tag);
            },
        }
    }
    Ok(nodes)
}

/// Read a single `w:p` element.
///
/// Runs inside an open complex field are collected by the field rather than
/// the paragraph. Fields still open when the paragraph ends are closed as
/// plain containers.
pub(crate) fn read_paragraph(
    paragraph: &XmlElement,
    ctx: &mut Context,
    notes: &Notes,
) -> Result<XNode> {
    ctx.scoped(|ctx| {
        let mut container = XContainer::new();
        let mut kind = ParagraphKind::Plain;

        for (index, child) in paragraph.child_elements().enumerate() {
            match child.local_name() {
                "pPr" => {
                    ctx.merge_style(read_properties_styles(child));
                    if let Some(style_id) = child
                        .find_descendant("pStyle")
                        .and_then(|p_style| p_style.attribute("w:val"))
                    {
                        match ParagraphKind::from_style_id(style_id) {
                            Some(found) => kind = found,
                            None => debug!("Ignoring pPr > pStyle {:?}", style_id),
                        }
                    }
                },
                "r" => {
                    ctx.within(child, index, |ctx| {
                        read_run(child, ctx, notes, &mut container.children)
                    })?;
                },
                "hyperlink" => {
                    // Only the link text is kept; the target lives in the relationships
                    ctx.within(child, index, |ctx| -> Result<()> {
                        for (run_index, run) in child.child_elements().enumerate() {
                            if run.local_name() == "r" {
                                ctx.within(run, run_index, |ctx| {
                                    read_run(run, ctx, notes, &mut container.children)
                                })?;
                            } else {
                                debug!("hyperlink > {} ignored", run.local_name());
                            }
                        }
                        Ok(())
                    })?;
                },
                "bookmarkStart" => {
                    if let Some(bookmark) = Bookmark::from_element(child) {
                        container.labels.push(bookmark.into_name());
                    }
                },
                "bookmarkEnd" | "proofErr" => {},
                tag => debug!("p > {} ignored", tag),
            }
        }

        ctx.flush_fields(&mut container.children);
        Ok(kind.into_node(container))
    })
}

/// Read a single `w:r` element, delivering its nodes through
/// [`Context::emit`].
///
/// Nodes are emitted one element at a time, so a field opened or closed in
/// the middle of a run affects only the elements after it.
pub(crate) fn read_run(
    run: &XmlElement,
    ctx: &mut Context,
    notes: &Notes,
    sink: &mut Vec<XNode>,
) -> Result<()> {
    ctx.scoped(|ctx| {
        for (index, child) in run.child_elements().enumerate() {
            match child.local_name() {
                // rPr comes first in practice, so it applies to the whole run
                "rPr" => ctx.merge_style(read_properties_styles(child)),
                "t" => {
                    let node = XNode::text(child.text_content(), ctx.current_style());
                    ctx.emit(node, sink);
                },
                "tab" => {
                    let node = XNode::text("\t", ctx.current_style());
                    ctx.emit(node, sink);
                },
                "br" => {
                    let node = XNode::text("\n", ctx.current_style());
                    ctx.emit(node, sink);
                },
                "sym" => {
                    let font = child.attribute("w:font");
                    let char_code = child.attribute("w:char").unwrap_or_default();
                    let text = match symbols::lookup(font, char_code) {
                        Some(text) => text,
                        None => {
                            info!("r > sym {:?} in font {:?} has no equivalent", char_code, font);
                            char_code
                        },
                    };
                    let node = XNode::text(text, ctx.current_style());
                    ctx.emit(node, sink);
                },
                "footnoteReference" => {
                    let node = note_reference(child, NoteKind::Footnote, ctx, notes);
                    ctx.emit(node, sink);
                },
                "endnoteReference" => {
                    let node = note_reference(child, NoteKind::Endnote, ctx, notes);
                    ctx.emit(node, sink);
                },
                "instrText" => {
                    let text = child.text_content();
                    match ctx.top_field_mut() {
                        Some(field) => field.push_instruction(text),
                        None => error!(
                            "{}: instrText {:?} without an open field at {}",
                            ctx.part(),
                            text,
                            ctx.path()
                        ),
                    }
                },
                "fldChar" => {
                    ctx.within(child, index, |ctx| read_field_char(child, ctx, sink))?;
                },
                "separator"
                | "continuationSeparator"
                | "footnoteRef"
                | "endnoteRef"
                | "lastRenderedPageBreak"
                | "softHyphen" => {},
                tag => debug!("r > {} ignored", tag),
            }
        }
        Ok(())
    })
}

/// Handle a `w:fldChar` delimiter.
fn read_field_char(
    element: &XmlElement,
    ctx: &mut Context,
    sink: &mut Vec<XNode>,
) -> Result<()> {
    let value = element.attribute("w:fldCharType").unwrap_or_default();
    match FieldCharType::parse(value) {
        Some(FieldCharType::Begin) => ctx.begin_field(),
        Some(FieldCharType::Separate) => match ctx.top_field_mut() {
            Some(field) => field.separated = true,
            None => warn!(
                "{}: field separator without an open field at {}",
                ctx.part(),
                ctx.path()
            ),
        },
        Some(FieldCharType::End) => match ctx.end_field() {
            Some(field) => {
                let node = field.into_node();
                ctx.emit(node, sink);
            },
            None => error!(
                "{}: reached field end without an open field at {}",
                ctx.part(),
                ctx.path()
            ),
        },
        None => {
            return Err(OoxmlError::UnrecognizedFieldCharType {
                part: ctx.part().to_string(),
                path: ctx.path(),
                value: value.to_string(),
            });
        },
    }
    Ok(())
}

/// Resolve a `w:footnoteReference` / `w:endnoteReference` to its shared note.
fn note_reference(element: &XmlElement, kind: NoteKind, ctx: &Context, notes: &Notes) -> XNode {
    let id = element.attribute("w:id").unwrap_or_default();
    match notes.get(kind, id) {
        Some(note) => match kind {
            NoteKind::Footnote => XNode::Footnote(note.clone()),
            NoteKind::Endnote => XNode::Endnote(note.clone()),
        },
        None => {
            warn!(
                "{}: {} reference to unknown id {:?} at {}",
                ctx.part(),
                kind,
                id,
                ctx.path()
            );
            XNode::Unresolved(XUnresolved {
                kind,
                id: id.to_string(),
            })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::Style;
    use crate::common::xml::parse;
    use crate::xdom::XText;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    const W: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    fn read(xml: &str, notes: &Notes) -> Result<XNode> {
        let root = parse(&xml.replace("W_NS", W)).unwrap();
        let mut ctx = Context::new("word/document.xml");
        read_paragraph(&root, &mut ctx, notes)
    }

    fn texts(node: &XNode) -> Vec<&XText> {
        node.children()
            .iter()
            .filter_map(|child| match child {
                XNode::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_run_styles_merge_with_paragraph_styles() {
        let xml = r#"<w:p W_NS>
            <w:pPr><w:rPr><w:b/></w:rPr><w:i/></w:pPr>
            <w:r><w:t xml:space="preserve">Hello </w:t></w:r>
            <w:r><w:rPr><w:b/></w:rPr><w:t>World</w:t><w:tab/><w:br/></w:r>
        </w:p>"#;
        let node = read(xml, &Notes::default()).unwrap();
        let texts = texts(&node);
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[0].data, "Hello ");
        assert_eq!(texts[0].styles, Style::ITALIC);
        assert_eq!(texts[1].data, "World");
        assert_eq!(texts[1].styles, Style::ITALIC | Style::BOLD);
        assert_eq!(texts[2].data, "\t");
        assert_eq!(texts[3].data, "\n");
    }

    #[test]
    fn test_paragraph_styles_select_structure() {
        let heading = read(
            r#"<w:p W_NS><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Intro</w:t></w:r></w:p>"#,
            &Notes::default(),
        )
        .unwrap();
        assert!(matches!(heading, XNode::Subsection(_)));

        let example = read(
            r#"<w:p W_NS><w:pPr><w:pStyle w:val="ListNumber"/></w:pPr><w:bookmarkStart w:id="0" w:name="_Ref1"/><w:r><w:t>Ex</w:t></w:r><w:bookmarkEnd w:id="0"/></w:p>"#,
            &Notes::default(),
        )
        .unwrap();
        assert!(matches!(&example, XNode::Example(c) if c.labels == vec!["_Ref1".to_string()]));

        let plain = read(
            r#"<w:p W_NS><w:pPr><w:pStyle w:val="BodyText"/></w:pPr></w:p>"#,
            &Notes::default(),
        )
        .unwrap();
        assert!(matches!(plain, XNode::Container(_)));
    }

    #[test]
    fn test_symbols() {
        let xml = r#"<w:p W_NS><w:r>
            <w:sym w:font="Symbol" w:char="F061"/>
            <w:sym w:font="Wingdings" w:char="F04A"/>
            <w:sym w:font="Calibri" w:char="F061"/>
        </w:r></w:p>"#;
        let node = read(xml, &Notes::default()).unwrap();
        let data: Vec<&str> = texts(&node).iter().map(|t| t.data.as_str()).collect();
        assert_eq!(data, vec!["α", "☺", "F061"]);
    }

    #[test]
    fn test_reference_field() {
        let xml = r#"<w:p W_NS>
            <w:r><w:t xml:space="preserve">See </w:t></w:r>
            <w:r><w:fldChar w:fldCharType="begin"/></w:r>
            <w:r><w:instrText xml:space="preserve"> REF _Ref1 </w:instrText></w:r>
            <w:r><w:instrText xml:space="preserve">\h </w:instrText></w:r>
            <w:r><w:fldChar w:fldCharType="separate"/></w:r>
            <w:r><w:t>(1)</w:t></w:r>
            <w:r><w:fldChar w:fldCharType="end"/></w:r>
        </w:p>"#;
        let node = read(xml, &Notes::default()).unwrap();
        let children = node.children();
        assert_eq!(children.len(), 2);
        match &children[1] {
            XNode::Reference(reference) => {
                assert_eq!(reference.code, "_Ref1");
                assert!(matches!(&reference.children[0], XNode::Text(t) if t.data == "(1)"));
            },
            other => panic!("expected reference, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_fields_and_hyperlink() {
        let xml = r#"<w:p W_NS>
            <w:r><w:fldChar w:fldCharType="begin"/></w:r>
            <w:r><w:instrText> HYPERLINK "http://example.org" </w:instrText></w:r>
            <w:r><w:fldChar w:fldCharType="separate"/></w:r>
            <w:r><w:fldChar w:fldCharType="begin"/><w:instrText> REF _Ref2 \h </w:instrText><w:fldChar w:fldCharType="separate"/><w:t>(2)</w:t><w:fldChar w:fldCharType="end"/></w:r>
            <w:r><w:fldChar w:fldCharType="end"/></w:r>
            <w:hyperlink w:history="1"><w:r><w:t>link</w:t></w:r></w:hyperlink>
        </w:p>"#;
        let node = read(xml, &Notes::default()).unwrap();
        let children = node.children();
        assert_eq!(children.len(), 2);
        match &children[0] {
            XNode::Field(outer) => {
                assert_eq!(outer.children.len(), 1);
                assert!(matches!(&outer.children[0], XNode::Reference(r) if r.code == "_Ref2"));
            },
            other => panic!("expected field result, got {:?}", other),
        }
        assert!(matches!(&children[1], XNode::Text(t) if t.data == "link"));
    }

    #[test]
    fn test_unclosed_field_is_flushed() {
        let xml = r#"<w:p W_NS>
            <w:r><w:fldChar w:fldCharType="begin"/></w:r>
            <w:r><w:instrText> REF _Ref3 </w:instrText></w:r>
            <w:r><w:fldChar w:fldCharType="separate"/></w:r>
            <w:r><w:t>dangling</w:t></w:r>
        </w:p>"#;
        let node = read(xml, &Notes::default()).unwrap();
        assert_eq!(node.children().len(), 1);
        assert!(matches!(&node.children()[0], XNode::Field(c) if c.text() == "dangling"));
    }

    #[test]
    fn test_stray_field_markup_is_tolerated() {
        let xml = r#"<w:p W_NS>
            <w:r><w:instrText> REF _Ref4 </w:instrText></w:r>
            <w:r><w:fldChar w:fldCharType="separate"/></w:r>
            <w:r><w:fldChar w:fldCharType="end"/></w:r>
            <w:r><w:t>text</w:t></w:r>
        </w:p>"#;
        let node = read(xml, &Notes::default()).unwrap();
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_unrecognized_field_char_type_is_fatal() {
        let xml = r#"<w:p W_NS>
            <w:r><w:t>a</w:t></w:r>
            <w:r><w:fldChar w:fldCharType="middle"/></w:r>
        </w:p>"#;
        let root = parse(&xml.replace("W_NS", W)).unwrap();
        let mut ctx = Context::new("word/document.xml");
        let err = ctx
            .within(&root, 0, |ctx| read_paragraph(&root, ctx, &Notes::default()))
            .unwrap_err();
        match err {
            OoxmlError::UnrecognizedFieldCharType { part, path, value } => {
                assert_eq!(part, "word/document.xml");
                assert_eq!(path, "w:p[1]/w:r[2]/w:fldChar[1]");
                assert_eq!(value, "middle");
            },
            other => panic!("unexpected error {:?}", other),
        }
        // Scopes unwound on the error path
        assert_eq!(ctx.current_style(), Style::empty());
        assert_eq!(ctx.path(), "");
    }

    #[test]
    fn test_note_references() {
        let note = Arc::new(XContainer::with_children(vec![XNode::text("note", Style::empty())]));
        let mut footnotes = BTreeMap::new();
        footnotes.insert("2".to_string(), Arc::clone(&note));
        let notes = Notes {
            footnotes,
            endnotes: BTreeMap::new(),
        };

        let xml = r#"<w:p W_NS>
            <w:r><w:footnoteReference w:id="2"/></w:r>
            <w:r><w:endnoteReference w:id="7"/></w:r>
        </w:p>"#;
        let node = read(xml, &notes).unwrap();
        let children = node.children();
        assert!(matches!(&children[0], XNode::Footnote(shared) if Arc::ptr_eq(shared, &note)));
        assert_eq!(
            children[1],
            XNode::Unresolved(XUnresolved {
                kind: NoteKind::Endnote,
                id: "7".to_string()
            })
        );
    }

    #[test]
    fn test_body_skips_non_paragraphs() {
        let xml = r#"<w:body W_NS>
            <w:p><w:r><w:t>one</w:t></w:r></w:p>
            <w:tbl><w:tr/></w:tbl>
            <w:p><w:r><w:t>two</w:t></w:r></w:p>
            <w:sectPr/>
        </w:body>"#;
        let root = parse(&xml.replace("W_NS", W)).unwrap();
        let mut ctx = Context::new("word/document.xml");
        let nodes = read_body(&root, &mut ctx, &Notes::default()).unwrap();
        assert_eq!(nodes.len(), 2);
    }
}
