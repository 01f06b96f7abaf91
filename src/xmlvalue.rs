#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::name::NameId;
use crate::space::SpaceMode;

/// The type of the XML node.
///
/// Access it using [`Value::value_type`] or
/// [`Document::value_type`](crate::Document::value_type).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document root that holds everything. Note that this is not the same
    /// as the document element.
    Document,
    /// Element; it has a name and attributes.
    Element,
    /// Text.
    Text,
    /// Comment.
    Comment,
    /// Declaration or processing instruction, like `<?xml version="1.0"?>`.
    Declaration,
}

/// An XML value.
///
/// Access it using [`Document::value`](crate::Document::value).
#[derive(Debug, Clone)]
pub enum Value {
    /// Document root that holds everything.
    Document,
    /// Element; it has a name and attributes.
    Element(Element),
    /// Text.
    Text(Text),
    /// Comment.
    Comment(Comment),
    /// Declaration or processing instruction.
    Declaration(Declaration),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Document => ValueType::Document,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
            Value::Declaration(_) => ValueType::Declaration,
        }
    }
}

/// Attributes in source order.
///
/// Names are not required to be unique; duplicates are kept as written.
pub type Attributes = Vec<(NameId, String)>;

pub(crate) fn attribute_value(attributes: &Attributes, name_id: NameId) -> Option<&str> {
    attributes
        .iter()
        .find(|(id, _)| *id == name_id)
        .map(|(_, value)| value.as_str())
}

/// XML element value.
///
/// Example: `<foo/>` or `<S:Body xmlns:S="urn:s" id="1"></S:Body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name_id: NameId,
    pub(crate) attributes: Attributes,
    pub(crate) space: SpaceMode,
}

impl Element {
    pub(crate) fn new(name_id: NameId, attributes: Attributes, space: SpaceMode) -> Self {
        Element {
            name_id,
            attributes,
            space,
        }
    }

    /// The qualified name of the element.
    pub fn name(&self) -> NameId {
        self.name_id
    }

    /// The attributes of the element, namespace declarations included.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get the first attribute with this name.
    pub fn get_attribute(&self, name_id: NameId) -> Option<&str> {
        attribute_value(&self.attributes, name_id)
    }

    /// The `xml:space` mode recorded on this element itself.
    pub fn space(&self) -> SpaceMode {
        self.space
    }
}

/// XML text value.
///
/// Example: `Bar` in `<foo>Bar</foo>`. Entity references are already
/// decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// XML comment.
///
/// Example: `<!-- foo -->`. The content is kept byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// XML declaration or processing instruction.
///
/// Example: `<?xml version="1.0"?>` or `<?procinst?>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub(crate) target: NameId,
    pub(crate) content: String,
    pub(crate) attributes: Attributes,
}

impl Declaration {
    pub(crate) fn new(target: NameId, content: String, attributes: Attributes) -> Self {
        Declaration {
            target,
            content,
            attributes,
        }
    }

    /// The target, `xml` for the XML declaration.
    pub fn target(&self) -> NameId {
        self.target
    }

    /// Everything between the target and `?>`, without surrounding
    /// whitespace. Empty for `<?procinst?>`.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Pseudo-attributes of the XML declaration (`version`, `encoding`,
    /// `standalone`). Empty for other processing instructions.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
