/// Relationship parts (`*.rels`).
///
/// Only the id → target mapping of a relationships part is kept; the reader
/// uses it to look up targets referenced from the document body.
use crate::common::xml::XmlElement;
use crate::ooxml::opc::constants::target_mode;
use std::collections::BTreeMap;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub r_id: String,
    /// Relationship type URI
    pub reltype: String,
    /// Target reference, either a part path relative to the source or a URL
    pub target: String,
    /// Whether the target lies outside the package
    pub is_external: bool,
}

impl Relationship {
    /// Build a relationship from a `<Relationship>` element.
    ///
    /// Returns `None` when the element lacks an `Id` or `Target`.
    pub fn from_element(element: &XmlElement) -> Option<Self> {
        let r_id = element.attribute("Id")?;
        let target = element.attribute("Target")?;
        Some(Self {
            r_id: r_id.to_string(),
            reltype: element.attribute("Type").unwrap_or_default().to_string(),
            target: target.to_string(),
            is_external: element.attribute("TargetMode") == Some(target_mode::EXTERNAL),
        })
    }
}

/// Iterate over the relationships declared by a `<Relationships>` root.
pub fn relationships(root: &XmlElement) -> impl Iterator<Item = Relationship> + '_ {
    root.child_elements()
        .filter(|element| element.local_name() == "Relationship")
        .filter_map(Relationship::from_element)
}

/// Map every relationship id to its target.
///
/// Later duplicates of an id replace earlier ones.
pub fn read_relationships(root: &XmlElement) -> BTreeMap<String, String> {
    relationships(root)
        .map(|rel| (rel.r_id, rel.target))
        .collect()
}
