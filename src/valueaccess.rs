use crate::document::{Document, Node};
use crate::name::split_qname;
use crate::xmlvalue::{Attributes, Comment, Declaration, Element, Text, Value, ValueType};

/// Obtain XML values and their types.
///
/// These are handy if you only need to match against a single value or know
/// the value type already. If you want to handle all value types, use a
/// `match` statement on [`Value`] instead.
impl Document {
    /// Access to the XML value for this node.
    ///
    /// ```rust
    /// use xmlquery::{Document, Value};
    ///
    /// let doc = Document::parse("<doc>Example</doc>")?;
    /// let el = doc.document_element(doc.root()).unwrap();
    ///
    /// match doc.value(el) {
    ///     Value::Element(element) => {
    ///         assert_eq!(doc.name_str(element.name()), "doc");
    ///     }
    ///     _ => unreachable!(),
    /// }
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[node.get()].get()
    }

    /// Get the [`ValueType`] of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Return true if node is a document root.
    pub fn is_document(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Document
    }

    /// Return true if node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Return true if node is text.
    pub fn is_text(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Text
    }

    /// Return true if node is a comment.
    pub fn is_comment(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Comment
    }

    /// Return true if node is a declaration or processing instruction.
    pub fn is_declaration(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Declaration
    }

    /// If this node's value is text, return a reference to it.
    pub fn text(&self, node: Node) -> Option<&Text> {
        if let Value::Text(text) = self.value(node) {
            Some(text)
        } else {
            None
        }
    }

    /// If this node's value is text, return a reference to the string.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|n| n.get())
    }

    /// If this node's value is an element, return a reference to it.
    pub fn element(&self, node: Node) -> Option<&Element> {
        if let Value::Element(element) = self.value(node) {
            Some(element)
        } else {
            None
        }
    }

    /// If this node's value is a comment, return a reference to it.
    pub fn comment(&self, node: Node) -> Option<&Comment> {
        if let Value::Comment(comment) = self.value(node) {
            Some(comment)
        } else {
            None
        }
    }

    /// If this node's value is a comment, return a reference to the string.
    pub fn comment_str(&self, node: Node) -> Option<&str> {
        self.comment(node).map(|n| n.get())
    }

    /// If this node's value is a declaration, return a reference to it.
    pub fn declaration(&self, node: Node) -> Option<&Declaration> {
        if let Value::Declaration(declaration) = self.value(node) {
            Some(declaration)
        } else {
            None
        }
    }

    /// The qualified name of an element or the target of a declaration.
    ///
    /// Empty for every other kind of node.
    pub fn name_of(&self, node: Node) -> &str {
        match self.value(node) {
            Value::Element(element) => self.name_str(element.name()),
            Value::Declaration(declaration) => self.name_str(declaration.target()),
            _ => "",
        }
    }

    /// The namespace prefix of the node name, as written.
    ///
    /// The prefix is not resolved against namespace declarations.
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse(r#"<S:Envelope xmlns:S="urn:s"/>"#)?;
    /// let envelope = doc.document_element(doc.root()).unwrap();
    /// assert_eq!(doc.prefix(envelope), "S");
    /// assert_eq!(doc.local_name(envelope), "Envelope");
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn prefix(&self, node: Node) -> &str {
        split_qname(self.name_of(node)).0
    }

    /// The node name without its prefix.
    pub fn local_name(&self, node: Node) -> &str {
        split_qname(self.name_of(node)).1
    }

    /// Attributes of an element or pseudo-attributes of a declaration.
    ///
    /// Returns [`None`] for other kinds of node.
    pub fn attributes(&self, node: Node) -> Option<&Attributes> {
        match self.value(node) {
            Value::Element(element) => Some(element.attributes()),
            Value::Declaration(declaration) => Some(declaration.attributes()),
            _ => None,
        }
    }
}
