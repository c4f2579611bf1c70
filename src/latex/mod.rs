//! LaTeX rendering of XDOM trees.
//!
//! The renderer never looks at XML; it only consumes the document model.
//! Output is LaTeX body text meant for an `article` with the `gb4e` (for
//! numbered examples) and `cleveref` (for `\Cref`) packages loaded.
//! Preamble, title and layout are left to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use xdoc::common::Style;
//! use xdoc::latex::{LatexOptions, render, render_with_options};
//! use xdoc::xdom::{XContainer, XNode};
//!
//! let paragraph = XNode::Container(XContainer::with_children(vec![
//!     XNode::text("Left ", Style::empty()),
//!     XNode::text("Middle1 ", Style::BOLD),
//!     XNode::text("Middle2", Style::BOLD | Style::ITALIC),
//!     XNode::text(" Right", Style::empty()),
//! ]));
//! assert_eq!(render(&paragraph), r"Left \textbf{Middle1 \textit{Middle2}} Right");
//!
//! let options = LatexOptions::new().with_smart_quotes(false);
//! let _ = render_with_options(&paragraph, &options);
//! ```
//!
//! # Architecture
//!
//! - [`ToLatex`]: trait for renderable types
//! - [`LatexOptions`]: configuration
//! - [`text`]: grouping of text runs into nested style commands
//! - [`escape`]: character replacement, underscore blanks and quotes
mod config;
pub mod escape;
pub mod text;
mod traits;
mod writer;

pub use config::LatexOptions;
pub use escape::{apply_replacements, clean_marker};
pub use text::{group_nodes, render_text_list};
pub use traits::ToLatex;

use crate::xdom::XNode;

/// Render a node with default options.
pub fn render(node: &XNode) -> String {
    node.to_latex()
}

/// Render a node with custom options.
pub fn render_with_options(node: &XNode, options: &LatexOptions) -> String {
    node.to_latex_with_options(options)
}
