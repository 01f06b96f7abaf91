#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::document::{Document, Node};
use crate::xmlvalue::Value;

pub(crate) const XML_SPACE: &str = "xml:space";

/// Whitespace handling for an element, from its `xml:space` attribute.
///
/// Recorded at build time. `Inherited` is resolved on demand by walking
/// the ancestors, see [`Document::effective_space`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpaceMode {
    /// `xml:space="preserve"`: text is reproduced exactly.
    Preserve,
    /// `xml:space="default"`: leading and trailing whitespace of text is
    /// dropped on output.
    Default,
    /// No (recognized) `xml:space` attribute.
    #[default]
    Inherited,
}

impl SpaceMode {
    pub(crate) fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("preserve") => SpaceMode::Preserve,
            Some("default") => SpaceMode::Default,
            _ => SpaceMode::Inherited,
        }
    }

    /// Combine with the mode in effect for the parent.
    pub(crate) fn resolve(self, inherited: bool) -> bool {
        match self {
            SpaceMode::Preserve => true,
            SpaceMode::Default => false,
            SpaceMode::Inherited => inherited,
        }
    }
}

impl Document {
    /// The recorded `xml:space` mode of this node.
    ///
    /// Only elements carry an explicit mode; every other node is
    /// `Inherited`.
    pub fn space_mode(&self, node: Node) -> SpaceMode {
        match self.value(node) {
            Value::Element(element) => element.space(),
            _ => SpaceMode::Inherited,
        }
    }

    /// The effective whitespace mode of a node.
    ///
    /// This is the mode of the nearest ancestor-or-self with an explicit
    /// `xml:space`, or `Default` if there is none. For a detached subtree
    /// only the ancestors within that subtree are considered.
    ///
    /// ```rust
    /// use xmlquery::{Document, SpaceMode};
    ///
    /// let doc = Document::parse(r#"<a xml:space="preserve"><b> x </b></a>"#)?;
    /// let b = doc.find_one(doc.root(), "//b")?.unwrap();
    /// assert_eq!(doc.space_mode(b), SpaceMode::Inherited);
    /// assert_eq!(doc.effective_space(b), SpaceMode::Preserve);
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn effective_space(&self, node: Node) -> SpaceMode {
        for ancestor in self.ancestors(node) {
            match self.space_mode(ancestor) {
                SpaceMode::Inherited => continue,
                explicit => return explicit,
            }
        }
        SpaceMode::Default
    }

    pub(crate) fn is_space_preserved(&self, node: Node) -> bool {
        self.effective_space(node) == SpaceMode::Preserve
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attribute() {
        assert_eq!(
            SpaceMode::from_attribute(Some("preserve")),
            SpaceMode::Preserve
        );
        assert_eq!(SpaceMode::from_attribute(Some("default")), SpaceMode::Default);
        assert_eq!(SpaceMode::from_attribute(Some("other")), SpaceMode::Inherited);
        assert_eq!(SpaceMode::from_attribute(None), SpaceMode::Inherited);
    }

    #[test]
    fn test_effective_space_override() {
        let doc = Document::parse(
            r#"<a xml:space="preserve"><b xml:space="default"><c/></b><d/></a>"#,
        )
        .unwrap();
        let a = doc.document_element(doc.root()).unwrap();
        let b = doc.first_child(a).unwrap();
        let c = doc.first_child(b).unwrap();
        let d = doc.next_sibling(b).unwrap();
        assert_eq!(doc.effective_space(a), SpaceMode::Preserve);
        assert_eq!(doc.effective_space(b), SpaceMode::Default);
        assert_eq!(doc.effective_space(c), SpaceMode::Default);
        assert_eq!(doc.effective_space(d), SpaceMode::Preserve);
    }

    #[test]
    fn test_effective_space_without_declaration() {
        let doc = Document::parse("<a><b/></a>").unwrap();
        let a = doc.document_element(doc.root()).unwrap();
        let b = doc.first_child(a).unwrap();
        assert_eq!(doc.effective_space(b), SpaceMode::Default);
        assert_eq!(doc.effective_space(doc.root()), SpaceMode::Default);
    }

    #[test]
    fn test_detached_subtree_resolves_from_itself() {
        let mut doc =
            Document::parse(r#"<a xml:space="preserve"><b><c/></b></a>"#).unwrap();
        let a = doc.document_element(doc.root()).unwrap();
        let b = doc.first_child(a).unwrap();
        let c = doc.first_child(b).unwrap();
        assert_eq!(doc.effective_space(c), SpaceMode::Preserve);
        doc.remove(b);
        assert_eq!(doc.effective_space(c), SpaceMode::Default);
    }
}
