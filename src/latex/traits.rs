/// Core trait for LaTeX conversion.
use super::config::LatexOptions;
use super::text::render_text_list;
use super::writer::LatexWriter;
use crate::xdom::{XDocument, XNode, XText};

/// Types that can be rendered as LaTeX.
///
/// Rendering is infallible: every XDOM tree has a LaTeX rendition.
///
/// # Examples
///
/// ```rust
/// use xdoc::common::Style;
/// use xdoc::latex::ToLatex;
/// use xdoc::xdom::XText;
///
/// let texts = [
///     XText::plain("Hello "),
///     XText::new("World", Style::BOLD),
///     XText::plain(" what's up?"),
/// ];
/// assert_eq!(texts.to_latex(), r"Hello \textbf{World} what's up?");
/// ```
pub trait ToLatex {
    /// Render with default options.
    fn to_latex(&self) -> String {
        self.to_latex_with_options(&LatexOptions::default())
    }

    /// Render with custom options.
    fn to_latex_with_options(&self, options: &LatexOptions) -> String;
}

impl ToLatex for XNode {
    fn to_latex_with_options(&self, options: &LatexOptions) -> String {
        let mut writer = LatexWriter::new(options.clone());
        writer.write_node(self);
        writer.finish()
    }
}

impl ToLatex for XDocument {
    fn to_latex_with_options(&self, options: &LatexOptions) -> String {
        let mut writer = LatexWriter::new(options.clone());
        writer.write_document(self);
        writer.finish()
    }
}

impl ToLatex for [XText] {
    fn to_latex_with_options(&self, options: &LatexOptions) -> String {
        let texts: Vec<&XText> = self.iter().collect();
        render_text_list(&texts, options)
    }
}
