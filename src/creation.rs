use crate::document::{Document, Node};
use crate::name::NameId;
use crate::space::{SpaceMode, XML_SPACE};
use crate::xmlvalue::{attribute_value, Attributes, Comment, Declaration, Element, Text, Value};

/// Node creation. Only the tree builder creates nodes.
impl Document {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena_mut().new_node(value))
    }

    /// Create an element; its `xml:space` mode is taken from the attributes.
    pub(crate) fn new_element(&mut self, name_id: NameId, attributes: Attributes) -> Node {
        let space = match self.name(XML_SPACE) {
            Some(space_name) => SpaceMode::from_attribute(attribute_value(&attributes, space_name)),
            None => SpaceMode::Inherited,
        };
        self.new_node(Value::Element(Element::new(name_id, attributes, space)))
    }

    pub(crate) fn new_text(&mut self, text: String) -> Node {
        self.new_node(Value::Text(Text::new(text)))
    }

    pub(crate) fn new_comment(&mut self, comment: String) -> Node {
        self.new_node(Value::Comment(Comment::new(comment)))
    }

    pub(crate) fn new_declaration(
        &mut self,
        target: NameId,
        content: String,
        attributes: Attributes,
    ) -> Node {
        self.new_node(Value::Declaration(Declaration::new(
            target, content, attributes,
        )))
    }
}
