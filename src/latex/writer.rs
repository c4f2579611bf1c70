/// Low-level writer for LaTeX generation.
///
/// This module provides the `LatexWriter` struct which walks an XDOM tree
/// and appends its LaTeX rendition to a buffer.
use super::config::LatexOptions;
use super::escape::clean_marker;
use super::text::{NodeGroup, group_nodes, render_text_list};
use crate::xdom::{XContainer, XDocument, XNode, XUnresolved};

/// Writer that renders XDOM nodes into a string buffer.
pub(crate) struct LatexWriter {
    /// The output buffer
    buffer: String,
    /// Current options
    options: LatexOptions,
}

impl LatexWriter {
    /// Create a new writer with the given options.
    pub fn new(options: LatexOptions) -> Self {
        Self {
            buffer: String::with_capacity(4096),
            options,
        }
    }

    /// Consume the writer and return the rendered text.
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Render `f`'s output into a separate string with the same options.
    fn render_nested(&self, f: impl FnOnce(&mut LatexWriter)) -> String {
        let mut nested = LatexWriter::new(self.options.clone());
        f(&mut nested);
        nested.finish()
    }

    /// Write a whole document: its body followed by its labels.
    pub fn write_document(&mut self, document: &XDocument) {
        self.write_nodes(&document.children);
        self.write_labels(&document.labels);
    }

    /// Write a single node.
    pub fn write_node(&mut self, node: &XNode) {
        match node {
            XNode::Text(text) if text.is_line_break() => self.buffer.push_str(&text.data),
            XNode::Text(text) => {
                let rendered = render_text_list(&[text], &self.options);
                self.buffer.push_str(&rendered);
            },
            XNode::Container(container) | XNode::Field(container) => {
                self.write_container(container)
            },
            XNode::Section(container) => self.write_command("section", container),
            XNode::Subsection(container) => self.write_command("subsection", container),
            XNode::Subsubsection(container) => self.write_command("subsubsection", container),
            XNode::Example(container) => {
                self.buffer.push_str("\\begin{exe}\n  \\ex ");
                self.write_container(container);
                self.buffer.push_str("\n\\end{exe}");
            },
            XNode::Footnote(note) => self.write_note("footnote", note),
            XNode::Endnote(note) => self.write_note("endnote", note),
            XNode::Reference(reference) => {
                self.buffer.push('\\');
                self.buffer.push_str(&self.options.reference_command);
                self.buffer.push('{');
                self.buffer.push_str(&clean_marker(&reference.code));
                self.buffer.push('}');
            },
            XNode::Named(named) => self.write_command(&named.name, &named.container),
            XNode::Unresolved(unresolved) => self.write_unresolved(unresolved),
            XNode::Document(document) => self.write_document(document),
        }
    }

    /// Write sibling nodes, grouping consecutive text into style runs.
    ///
    /// Adjacent block-level siblings are separated by a blank line.
    pub fn write_nodes(&mut self, nodes: &[XNode]) {
        let groups = group_nodes(nodes);
        let mut previous: Option<&NodeGroup<'_>> = None;
        for group in &groups {
            if let (Some(NodeGroup::Node(left)), NodeGroup::Node(right)) = (previous, group)
                && left.is_block()
                && right.is_block()
            {
                self.buffer.push_str("\n\n");
            }
            match group {
                NodeGroup::Texts(texts) => {
                    let rendered = render_text_list(texts, &self.options);
                    self.buffer.push_str(&rendered);
                },
                NodeGroup::Node(node) => self.write_node(node),
            }
            previous = Some(group);
        }
    }

    /// Write a container's children followed by its labels.
    pub fn write_container(&mut self, container: &XContainer) {
        self.write_nodes(&container.children);
        self.write_labels(&container.labels);
    }

    /// Write `\command{children}` followed by the container's labels.
    fn write_command(&mut self, command: &str, container: &XContainer) {
        self.buffer.push('\\');
        self.buffer.push_str(command);
        self.buffer.push('{');
        self.write_nodes(&container.children);
        self.buffer.push('}');
        self.write_labels(&container.labels);
    }

    /// Write `\footnote{...}` or `\endnote{...}`.
    fn write_note(&mut self, command: &str, note: &XContainer) {
        let content = self.render_nested(|writer| writer.write_container(note));
        // Authors often type a space before the note text
        self.buffer.push('\\');
        self.buffer.push_str(command);
        self.buffer.push('{');
        self.buffer.push_str(content.trim_start());
        self.buffer.push('}');
    }

    fn write_unresolved(&mut self, unresolved: &XUnresolved) {
        self.buffer.push_str("\\textbf{[missing ");
        self.buffer.push_str(unresolved.kind.as_str());
        self.buffer.push(' ');
        self.buffer.push_str(&clean_marker(&unresolved.id));
        self.buffer.push_str("]}");
    }

    /// Write `\label{...}` for each label, if enabled.
    pub fn write_labels(&mut self, labels: &[String]) {
        if !self.options.include_labels {
            return;
        }
        for label in labels {
            self.buffer.push_str("\\label{");
            self.buffer.push_str(&clean_marker(label));
            self.buffer.push('}');
        }
    }
}
