/// Character formatting in `w:rPr` and `w:pPr` property blocks.
use crate::common::style::Style;
use crate::common::xml::XmlElement;
use log::debug;

/// Read the style flags of a property block.
///
/// Only immediate children are consulted. Toggle properties (`w:b`,
/// `w:i`) are on unless their `w:val` is explicitly off:
///
/// ```xml
/// <w:rPr><w:i/></w:rPr>              <!-- italic -->
/// <w:rPr><w:i w:val="1"/></w:rPr>    <!-- italic -->
/// <w:rPr><w:i w:val="0"/></w:rPr>    <!-- not italic -->
/// ```
pub fn read_properties_styles(properties: &XmlElement) -> Style {
    let mut styles = Style::empty();
    for child in properties.child_elements() {
        let val = child.attribute("w:val");
        match (child.local_name(), val) {
            ("i", val) if is_on(val) => styles |= Style::ITALIC,
            ("b", val) if is_on(val) => styles |= Style::BOLD,
            ("u", Some("single")) => styles |= Style::UNDERLINE,
            ("vertAlign", Some("subscript")) | ("position", Some("-4")) => {
                styles |= Style::SUBSCRIPT
            },
            ("vertAlign", Some("superscript")) | ("position", Some("6")) => {
                styles |= Style::SUPERSCRIPT
            },
            (tag, val) => {
                debug!("Ignoring {} > {}[val={:?}]", properties.name(), tag, val);
            },
        }
    }
    styles
}

/// `ST_OnOff`: absent means on.
fn is_on(val: Option<&str>) -> bool {
    !matches!(val, Some("0" | "false" | "off"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::parse;

    fn styles_of(xml: &str) -> Style {
        read_properties_styles(&parse(xml).unwrap())
    }

    #[test]
    fn test_toggle_properties() {
        assert_eq!(styles_of(r#"<w:rPr><w:i/></w:rPr>"#), Style::ITALIC);
        assert_eq!(styles_of(r#"<w:rPr><w:i w:val="1"/></w:rPr>"#), Style::ITALIC);
        assert_eq!(styles_of(r#"<w:rPr><w:i w:val="0"/></w:rPr>"#), Style::empty());
        assert_eq!(styles_of(r#"<w:rPr><w:b/><w:b w:val="false"/></w:rPr>"#), Style::BOLD);
    }

    #[test]
    fn test_underline_and_vertical_position() {
        assert_eq!(
            styles_of(r#"<w:rPr><w:u w:val="single"/></w:rPr>"#),
            Style::UNDERLINE
        );
        assert_eq!(styles_of(r#"<w:rPr><w:u w:val="double"/></w:rPr>"#), Style::empty());
        assert_eq!(
            styles_of(r#"<w:rPr><w:vertAlign w:val="subscript"/></w:rPr>"#),
            Style::SUBSCRIPT
        );
        assert_eq!(
            styles_of(r#"<w:rPr><w:position w:val="6"/></w:rPr>"#),
            Style::SUPERSCRIPT
        );
        assert_eq!(
            styles_of(r#"<w:rPr><w:position w:val="-4"/><w:b/></w:rPr>"#),
            Style::SUBSCRIPT | Style::BOLD
        );
    }

    #[test]
    fn test_only_immediate_children_count() {
        let xml = r#"<w:pPr><w:pStyle w:val="Heading1"/><w:rPr><w:b/></w:rPr></w:pPr>"#;
        assert_eq!(styles_of(xml), Style::empty());
    }
}
