/// Bookmarks (`w:bookmarkStart`).
///
/// A bookmark is taken to label the whole paragraph in which it starts;
/// `w:bookmarkEnd` carries no information the reader uses.
use crate::common::xml::XmlElement;

/// A bookmark in a Word document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Bookmark ID, unique per document
    id: String,
    /// Bookmark name, the target of `REF` fields
    name: String,
}

impl Bookmark {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Read a `<w:bookmarkStart w:id="0" w:name="_Ref415460256"/>` element.
    ///
    /// Returns `None` if the element has no name.
    pub fn from_element(element: &XmlElement) -> Option<Self> {
        let name = element.attribute("w:name")?;
        let id = element.attribute("w:id").unwrap_or_default();
        Some(Self::new(id, name))
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether Word created the bookmark itself (`_Ref...`, `_Toc...`,
    /// `_GoBack`). Such names are hidden in Word's bookmark dialog.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('_')
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_element() {
        let element = XmlElement::new("w:bookmarkStart")
            .with_attribute("w:id", "0")
            .with_attribute("w:name", "_Ref415460256");
        let bookmark = Bookmark::from_element(&element).unwrap();
        assert_eq!(bookmark.id(), "0");
        assert_eq!(bookmark.name(), "_Ref415460256");
        assert!(bookmark.is_hidden());

        let unnamed = XmlElement::new("w:bookmarkStart").with_attribute("w:id", "1");
        assert!(Bookmark::from_element(&unnamed).is_none());
    }
}
