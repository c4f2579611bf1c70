/// OOXML core properties (`docProps/core.xml`).
///
/// Core properties follow the Dublin Core metadata standard plus OPC
/// extensions:
///
/// ```xml
/// <cp:coreProperties xmlns:cp="..." xmlns:dc="http://purl.org/dc/elements/1.1/">
///   <dc:title>Negation in Hungarian</dc:title>
///   <dc:creator>Ada</dc:creator>
///   <cp:revision>3</cp:revision>
/// </cp:coreProperties>
/// ```
///
/// Every immediate child of the root becomes one entry keyed by its local
/// name (`title`, `creator`, `revision`, `created`, ...) with its text
/// content as value.
use crate::common::xml::XmlElement;
use std::collections::BTreeMap;

/// Turn a core properties root into a key/value map.
///
/// Later duplicates of a key replace earlier ones.
pub fn read_metadata(root: &XmlElement) -> BTreeMap<String, String> {
    root.child_elements()
        .map(|child| (child.local_name().to_string(), child.text_content()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::parse;

    #[test]
    fn test_read_metadata() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>X</dc:title>
  <dc:creator>Jane &amp; John</dc:creator>
  <cp:revision>12</cp:revision>
  <dcterms:created xsi:type="dcterms:W3CDTF">2013-04-02T19:11:00Z</dcterms:created>
  <cp:keywords/>
</cp:coreProperties>"#;
        let root = parse(xml).unwrap();
        let metadata = read_metadata(&root);
        assert_eq!(metadata["title"], "X");
        assert_eq!(metadata["creator"], "Jane & John");
        assert_eq!(metadata["revision"], "12");
        assert_eq!(metadata["created"], "2013-04-02T19:11:00Z");
        assert_eq!(metadata["keywords"], "");
    }
}
