/// Per-part parse state for the document reader.
///
/// A [`Context`] tracks three stacks while a part is walked:
///
/// - styles: one entry per paragraph/run scope, OR-ed together to give the
///   effective style of a text node
/// - complex fields: fields opened by `fldChar[begin]` and not yet closed
/// - element path: qualified names with sibling positions, for error messages
///
/// Scopes are entered through closures so the matching pop runs on every
/// exit path, including early returns through `?`.
use crate::common::style::Style;
use crate::common::xml::XmlElement;
use crate::ooxml::docx::field::ComplexField;
use crate::xdom::XNode;
use log::warn;
use smallvec::{SmallVec, smallvec};

pub(crate) struct Context {
    part: String,
    styles: SmallVec<[Style; 8]>,
    fields: Vec<ComplexField>,
    path: Vec<String>,
}

impl Context {
    /// A fresh context for the named part.
    pub fn new(part: &str) -> Self {
        Self {
            part: part.to_string(),
            styles: smallvec![Style::empty()],
            fields: Vec::new(),
            path: Vec::new(),
        }
    }

    #[inline]
    pub fn part(&self) -> &str {
        &self.part
    }

    /// The effective style: the union of every open scope.
    pub fn current_style(&self) -> Style {
        self.styles
            .iter()
            .fold(Style::empty(), |acc, style| acc.merge(*style))
    }

    /// Fold flags into the innermost scope.
    pub fn merge_style(&mut self, style: Style) {
        if let Some(top) = self.styles.last_mut() {
            *top = top.merge(style);
        }
    }

    /// Run `f` inside a new, initially empty, style scope.
    pub fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.styles.push(Style::empty());
        let result = f(self);
        self.styles.pop();
        result
    }

    /// Run `f` with `element` appended to the element path.
    ///
    /// `index` is the element's zero-based position among its parent's
    /// child elements.
    pub fn within<T>(
        &mut self,
        element: &XmlElement,
        index: usize,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.path.push(format!("{}[{}]", element.name(), index + 1));
        let result = f(self);
        self.path.pop();
        result
    }

    /// The current element path, e.g. `w:body[1]/w:p[3]/w:r[2]`.
    pub fn path(&self) -> String {
        self.path.join("/")
    }

    /// Open a new complex field.
    pub fn begin_field(&mut self) {
        self.fields.push(ComplexField::new());
    }

    /// The innermost open field.
    pub fn top_field_mut(&mut self) -> Option<&mut ComplexField> {
        self.fields.last_mut()
    }

    /// Close the innermost open field.
    pub fn end_field(&mut self) -> Option<ComplexField> {
        self.fields.pop()
    }

    pub fn open_fields(&self) -> usize {
        self.fields.len()
    }

    /// Deliver a node to the innermost open field, or to `sink` when no
    /// field is open.
    pub fn emit(&mut self, node: XNode, sink: &mut Vec<XNode>) {
        match self.fields.last_mut() {
            Some(field) => field.children.push(node),
            None => sink.push(node),
        }
    }

    /// Close every field still open, innermost first, delivering each as a
    /// plain container.
    pub fn flush_fields(&mut self, sink: &mut Vec<XNode>) {
        while let Some(field) = self.fields.pop() {
            warn!(
                "{}: field \"{}\" still open at end of paragraph {}",
                self.part,
                field.instruction().trim(),
                self.path()
            );
            let node = field.into_result();
            self.emit(node, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_accumulate_through_scopes() {
        let mut ctx = Context::new("word/document.xml");
        ctx.scoped(|ctx| {
            ctx.merge_style(Style::ITALIC);
            ctx.scoped(|ctx| {
                ctx.merge_style(Style::BOLD);
                assert_eq!(ctx.current_style(), Style::ITALIC | Style::BOLD);
            });
            assert_eq!(ctx.current_style(), Style::ITALIC);
        });
        assert_eq!(ctx.current_style(), Style::empty());
    }

    #[test]
    fn test_scope_pops_on_early_return() {
        let mut ctx = Context::new("word/document.xml");
        let element = XmlElement::new("w:p");
        let result: Result<(), &str> = ctx.within(&element, 2, |ctx| {
            ctx.scoped(|ctx| {
                ctx.merge_style(Style::UNDERLINE);
                Err::<(), &str>("boom")?;
                Ok(())
            })
        });
        assert!(result.is_err());
        assert_eq!(ctx.current_style(), Style::empty());
        assert_eq!(ctx.path(), "");
    }

    #[test]
    fn test_path() {
        let mut ctx = Context::new("word/document.xml");
        let body = XmlElement::new("w:body");
        let paragraph = XmlElement::new("w:p");
        ctx.within(&body, 0, |ctx| {
            ctx.within(&paragraph, 4, |ctx| {
                assert_eq!(ctx.path(), "w:body[1]/w:p[5]");
            })
        });
    }

    #[test]
    fn test_emit_prefers_open_field() {
        let mut ctx = Context::new("word/document.xml");
        let mut sink = Vec::new();
        ctx.emit(XNode::text("a", Style::empty()), &mut sink);
        ctx.begin_field();
        ctx.emit(XNode::text("b", Style::empty()), &mut sink);
        assert_eq!(sink.len(), 1);

        ctx.flush_fields(&mut sink);
        assert_eq!(ctx.open_fields(), 0);
        assert_eq!(sink.len(), 2);
        assert!(matches!(&sink[1], XNode::Field(c) if c.children.len() == 1));
    }
}
