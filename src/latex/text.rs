//! Style-run rendering of consecutive text nodes.
//!
//! Word splits text into runs wherever anything about the formatting
//! changes, so a bold phrase inside an italic sentence arrives as a flat
//! list of differently styled spans. Rendering each span with its own
//! commands would produce `\textit{a }\textit{\textbf{b}}\textit{ c}`;
//! instead the spans are arranged into a tree of nested style commands,
//! giving `\textit{a \textbf{b} c}`.
use super::config::LatexOptions;
use super::escape::escape;
use crate::common::style::Style;
use crate::xdom::{XNode, XText};
use smallvec::{SmallVec, smallvec};

/// A sibling list item after grouping.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeGroup<'a> {
    /// Consecutive text nodes, none of them a line break
    Texts(Vec<&'a XText>),
    /// Any other node, including line breaks
    Node(&'a XNode),
}

/// Collect each run of consecutive non-line-break text nodes into a group.
pub fn group_nodes(nodes: &[XNode]) -> Vec<NodeGroup<'_>> {
    let mut groups: Vec<NodeGroup<'_>> = Vec::new();
    for node in nodes {
        match node {
            XNode::Text(text) if !text.is_line_break() => match groups.last_mut() {
                Some(NodeGroup::Texts(texts)) => texts.push(text),
                _ => groups.push(NodeGroup::Texts(vec![text])),
            },
            _ => groups.push(NodeGroup::Node(node)),
        }
    }
    groups
}

/// The LaTeX command for a single style flag.
pub fn style_command(flag: Style) -> Option<&'static str> {
    match flag {
        Style::BOLD => Some("textbf"),
        Style::ITALIC => Some("textit"),
        Style::UNDERLINE => Some("underline"),
        Style::SUBSCRIPT => Some("textsubscript"),
        Style::SUPERSCRIPT => Some("textsuperscript"),
        _ => None,
    }
}

enum TexChild {
    Node(usize),
    Text(String),
}

struct TexNode {
    /// `None` only for the root
    command: Option<&'static str>,
    children: Vec<TexChild>,
}

impl TexNode {
    fn new(command: Option<&'static str>) -> Self {
        Self {
            command,
            children: Vec::new(),
        }
    }
}

/// Split off leading and trailing whitespace: `(leading, core, trailing)`.
///
/// Whitespace-only input is returned entirely as `leading`.
fn split_edges(data: &str) -> (&str, &str, &str) {
    let trimmed_start = data.trim_start();
    let start = data.len() - trimmed_start.len();
    let core = trimmed_start.trim_end();
    let end = start + core.len();
    (&data[..start], core, &data[end..])
}

/// Render a list of text nodes with minimal style nesting.
///
/// Leading and trailing whitespace of each node is detached and treated as
/// unstyled, so it can sit at whatever nesting depth the next contentful
/// span needs. Every piece of text, whitespace included, is escaped.
pub fn render_text_list(texts: &[&XText], options: &LatexOptions) -> String {
    let tex = |raw: &str| escape(raw, options.underscore_width_pt, options.smart_quotes);

    let mut tokens: Vec<(&str, Style)> = Vec::with_capacity(texts.len() * 2);
    for text in texts {
        let (leading, core, trailing) = split_edges(&text.data);
        if !leading.is_empty() {
            tokens.push((leading, Style::empty()));
        }
        if !core.is_empty() {
            tokens.push((core, text.styles));
        }
        if !trailing.is_empty() {
            tokens.push((trailing, Style::empty()));
        }
    }

    let mut arena = vec![TexNode::new(None)];
    // Styles represented at each open depth, with the arena index of that depth
    let mut stack: SmallVec<[(Style, usize); 6]> = smallvec![(Style::empty(), 0)];
    let mut whitespace = String::new();

    for (data, styles) in tokens {
        if data.trim().is_empty() {
            whitespace.push_str(data);
            continue;
        }

        // Pop until the open styles are a subset of this span's styles;
        // the root (no styles) always is
        while stack.len() > 1 && !styles.contains(stack[stack.len() - 1].0) {
            stack.pop();
        }
        let (mut current, mut cursor) = stack[stack.len() - 1];

        if !whitespace.is_empty() {
            arena[cursor].children.push(TexChild::Text(tex(&whitespace)));
            whitespace.clear();
        }

        for flag in styles.difference(current).flags() {
            let child = arena.len();
            arena.push(TexNode::new(style_command(flag)));
            arena[cursor].children.push(TexChild::Node(child));
            cursor = child;
            current |= flag;
            stack.push((current, cursor));
        }
        arena[cursor].children.push(TexChild::Text(tex(data)));
    }

    if !whitespace.is_empty() {
        let (_, cursor) = stack[stack.len() - 1];
        arena[cursor].children.push(TexChild::Text(tex(&whitespace)));
    }

    let mut out = String::new();
    write_tex(&arena, 0, &mut out);
    out
}

fn write_tex(arena: &[TexNode], index: usize, out: &mut String) {
    let node = &arena[index];
    if let Some(command) = node.command {
        out.push('\\');
        out.push_str(command);
        out.push('{');
    }
    for child in &node.children {
        match child {
            TexChild::Node(child) => write_tex(arena, *child, out),
            TexChild::Text(text) => out.push_str(text),
        }
    }
    if node.command.is_some() {
        out.push('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(texts: &[XText]) -> String {
        let refs: Vec<&XText> = texts.iter().collect();
        render_text_list(&refs, &LatexOptions::default())
    }

    #[test]
    fn test_single_style_island() {
        let texts = [
            XText::plain("Hello "),
            XText::new("World", Style::BOLD),
            XText::plain(" what's up?"),
        ];
        assert_eq!(render(&texts), r"Hello \textbf{World} what's up?");
    }

    #[test]
    fn test_nested_styles_share_commands() {
        let texts = [
            XText::plain("Left "),
            XText::new("Middle1 ", Style::BOLD),
            XText::new("Middle2", Style::BOLD | Style::ITALIC),
            XText::plain(" Right"),
        ];
        assert_eq!(
            render(&texts),
            r"Left \textbf{Middle1 \textit{Middle2}} Right"
        );
    }

    #[test]
    fn test_styles_reopen_after_drop() {
        let texts = [
            XText::new("a", Style::ITALIC | Style::BOLD),
            XText::new("b", Style::ITALIC),
            XText::new("c", Style::ITALIC | Style::UNDERLINE),
        ];
        assert_eq!(
            render(&texts),
            r"\textbf{\textit{a}}\textit{b\underline{c}}"
        );
    }

    #[test]
    fn test_whitespace_and_escaping() {
        let texts = [
            XText::new("  ", Style::BOLD),
            XText::new("50%", Style::SUPERSCRIPT),
            XText::plain("\t"),
        ];
        // Trailing whitespace stays at the innermost open depth
        assert_eq!(render(&texts), r"  \textsuperscript{50\%\tab{}}");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_group_nodes() {
        let nodes = vec![
            XNode::text("a", Style::empty()),
            XNode::text("b", Style::BOLD),
            XNode::text("\n", Style::empty()),
            XNode::text("c", Style::empty()),
            XNode::Container(Default::default()),
        ];
        let groups = group_nodes(&nodes);
        assert_eq!(groups.len(), 4);
        assert!(matches!(&groups[0], NodeGroup::Texts(texts) if texts.len() == 2));
        assert!(matches!(groups[1], NodeGroup::Node(XNode::Text(_))));
        assert!(matches!(&groups[2], NodeGroup::Texts(texts) if texts.len() == 1));
        assert!(matches!(groups[3], NodeGroup::Node(XNode::Container(_))));
    }

    #[test]
    fn test_style_commands() {
        assert_eq!(style_command(Style::SUBSCRIPT), Some("textsubscript"));
        assert_eq!(style_command(Style::BOLD | Style::ITALIC), None);
    }

    proptest! {
        #[test]
        fn braces_stay_balanced(
            spans in prop::collection::vec(("[a-z {}_]{0,8}", 0u8..32), 0..8)
        ) {
            let texts: Vec<XText> = spans
                .into_iter()
                .map(|(data, bits)| XText::new(data, Style::from_bits_truncate(bits)))
                .collect();
            let tex = render(&texts);
            let opens = tex.matches('{').count() - tex.matches(r"\{").count();
            let closes = tex.matches('}').count() - tex.matches(r"\}").count();
            prop_assert_eq!(opens, closes);
        }
    }
}
