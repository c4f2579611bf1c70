/// Complex fields (`w:fldChar` / `w:instrText`).
///
/// A complex field spans several runs:
///
/// ```xml
/// <w:r><w:fldChar w:fldCharType="begin"/></w:r>
/// <w:r><w:instrText xml:space="preserve"> REF _Ref226606793 \r \h </w:instrText></w:r>
/// <w:r><w:fldChar w:fldCharType="separate"/></w:r>
/// <w:r><w:t>(3)</w:t></w:r>
/// <w:r><w:fldChar w:fldCharType="end"/></w:r>
/// ```
///
/// The instruction may be split across several `instrText` elements, so the
/// fragments are collected and interpreted when the field closes.
use crate::xdom::{XContainer, XNode, XReference};
use log::{debug, info};

/// The value of a `w:fldCharType` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCharType {
    Begin,
    Separate,
    End,
}

impl FieldCharType {
    /// Parse an attribute value; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "begin" => Some(FieldCharType::Begin),
            "separate" => Some(FieldCharType::Separate),
            "end" => Some(FieldCharType::End),
            _ => None,
        }
    }
}

/// A field that has been opened and not yet closed.
#[derive(Debug, Clone, Default)]
pub struct ComplexField {
    /// Instruction fragments in document order
    pub instruction: Vec<String>,
    /// Set once `fldChar[separate]` has been seen
    pub separated: bool,
    /// Nodes read while the field was open
    pub children: Vec<XNode>,
}

impl ComplexField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an `instrText` fragment. Fragments arriving after the
    /// separator are not part of the instruction and are dropped.
    pub fn push_instruction(&mut self, text: String) {
        if self.separated {
            debug!("instrText after field separator ignored: {:?}", text);
            return;
        }
        self.instruction.push(text);
    }

    /// The full instruction text.
    pub fn instruction(&self) -> String {
        self.instruction.concat()
    }

    /// Convert a closed field into a node.
    ///
    /// `REF`, `NOTEREF` and `PAGEREF` fields become [`XNode::Reference`];
    /// every other field keeps its result as an inline [`XNode::Field`].
    pub fn into_node(self) -> XNode {
        let instruction = self.instruction();
        match FieldInstruction::parse(&instruction) {
            FieldInstruction::Reference { code, .. } => XNode::Reference(XReference {
                code,
                children: self.children,
            }),
            FieldInstruction::Hyperlink(url) => {
                info!("Ignoring HYPERLINK field instruction: {:?}", url);
                self.into_result()
            },
            FieldInstruction::ListNum(series) => {
                info!("Ignoring LISTNUM field instruction: {:?}", series);
                self.into_result()
            },
            FieldInstruction::Other(name) => {
                debug!("Field instruction {:?} is not a reference", name);
                self.into_result()
            },
        }
    }

    /// Keep only the field result.
    pub fn into_result(self) -> XNode {
        XNode::Field(XContainer::with_children(self.children))
    }
}

/// The kind of a cross-reference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `REF`: bookmark text or number
    Ref,
    /// `NOTEREF`: footnote/endnote number
    NoteRef,
    /// `PAGEREF`: page number
    PageRef,
}

/// An interpreted field instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInstruction {
    /// `HYPERLINK "url" ...`
    Hyperlink(String),
    /// `REF _Ref226606793 \r \h` and friends
    Reference {
        kind: ReferenceKind,
        code: String,
        flags: Vec<String>,
    },
    /// `LISTNUM` or `LISTNUM Example`
    ListNum(String),
    /// Any other field; holds the field name
    Other(String),
}

impl FieldInstruction {
    /// Interpret an instruction string.
    ///
    /// ```
    /// use xdoc::ooxml::docx::field::{FieldInstruction, ReferenceKind};
    ///
    /// let parsed = FieldInstruction::parse(" REF _Ref226606793 \\r \\h ");
    /// assert_eq!(
    ///     parsed,
    ///     FieldInstruction::Reference {
    ///         kind: ReferenceKind::Ref,
    ///         code: "_Ref226606793".to_string(),
    ///         flags: vec!["\\r".to_string(), "\\h".to_string()],
    ///     }
    /// );
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut tokens = text.split_whitespace();
        let Some(name) = tokens.next() else {
            return FieldInstruction::Other(String::new());
        };
        let kind = match name {
            "REF" => Some(ReferenceKind::Ref),
            "NOTEREF" => Some(ReferenceKind::NoteRef),
            "PAGEREF" => Some(ReferenceKind::PageRef),
            _ => None,
        };
        if let Some(kind) = kind {
            return match tokens.next() {
                Some(code) => FieldInstruction::Reference {
                    kind,
                    code: code.to_string(),
                    flags: tokens.map(String::from).collect(),
                },
                None => FieldInstruction::Other(name.to_string()),
            };
        }
        match name {
            "HYPERLINK" => FieldInstruction::Hyperlink(hyperlink_target(text)),
            "LISTNUM" => FieldInstruction::ListNum(tokens.collect::<Vec<_>>().join(" ")),
            _ => FieldInstruction::Other(name.to_string()),
        }
    }

    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, FieldInstruction::Reference { .. })
    }
}

/// The first quoted argument of a HYPERLINK instruction, or its first bare
/// argument when nothing is quoted.
fn hyperlink_target(text: &str) -> String {
    let rest = text.trim_start();
    let rest = rest.strip_prefix("HYPERLINK").unwrap_or(rest);
    if let Some(start) = rest.find('"') {
        let quoted = &rest[start + 1..];
        if let Some(end) = quoted.find('"') {
            return quoted[..end].to_string();
        }
    }
    rest.split_whitespace().next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::Style;

    #[test]
    fn test_parse_reference_kinds() {
        assert!(matches!(
            FieldInstruction::parse(" NOTEREF _Ref226606793 \\h "),
            FieldInstruction::Reference { kind: ReferenceKind::NoteRef, ref code, .. } if code == "_Ref226606793"
        ));
        assert!(matches!(
            FieldInstruction::parse(" PAGEREF _Toc297721081 \\h "),
            FieldInstruction::Reference { kind: ReferenceKind::PageRef, .. }
        ));
        // A REF without a target is not a reference
        assert_eq!(
            FieldInstruction::parse(" REF "),
            FieldInstruction::Other("REF".to_string())
        );
    }

    #[test]
    fn test_parse_other_instructions() {
        assert_eq!(
            FieldInstruction::parse(r#" HYPERLINK "http://dx.doi.org/10.1018/s11932-003-7165-1" \t "_blank" "#),
            FieldInstruction::Hyperlink("http://dx.doi.org/10.1018/s11932-003-7165-1".to_string())
        );
        assert_eq!(
            FieldInstruction::parse(" LISTNUM Example "),
            FieldInstruction::ListNum("Example".to_string())
        );
        assert_eq!(
            FieldInstruction::parse(" LISTNUM  "),
            FieldInstruction::ListNum(String::new())
        );
        assert_eq!(
            FieldInstruction::parse(" PAGE \\* MERGEFORMAT "),
            FieldInstruction::Other("PAGE".to_string())
        );
        assert!(!FieldInstruction::parse("").is_reference());
    }

    #[test]
    fn test_field_conversion() {
        let mut field = ComplexField::new();
        field.push_instruction(" REF _Ref1".to_string());
        field.push_instruction(" \\h ".to_string());
        field.separated = true;
        field.push_instruction("late".to_string());
        field.children.push(XNode::text("(1)", Style::empty()));
        assert_eq!(field.instruction(), " REF _Ref1 \\h ");

        match field.into_node() {
            XNode::Reference(reference) => {
                assert_eq!(reference.code, "_Ref1");
                assert_eq!(reference.children.len(), 1);
            },
            other => panic!("expected reference, got {:?}", other),
        }

        let mut field = ComplexField::new();
        field.push_instruction(" PAGE ".to_string());
        field.children.push(XNode::text("7", Style::empty()));
        assert!(matches!(field.into_node(), XNode::Field(c) if c.children.len() == 1));
    }

    #[test]
    fn test_field_char_types() {
        assert_eq!(FieldCharType::parse("begin"), Some(FieldCharType::Begin));
        assert_eq!(FieldCharType::parse("separate"), Some(FieldCharType::Separate));
        assert_eq!(FieldCharType::parse("end"), Some(FieldCharType::End));
        assert_eq!(FieldCharType::parse("middle"), None);
    }
}
