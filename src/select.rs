use crate::document::{Document, Node};
use crate::error::Error;
use crate::path::SimplePath;
use crate::xmlvalue::{attribute_value, Value};

/// Resolves path expressions against a tree.
///
/// The selection methods hand the expression over without interpreting it.
/// Implementations return nodes of the same document; syntax errors are
/// reported as [`Error::InvalidPathExpression`].
pub trait PathEvaluator {
    /// Evaluate `expression` with `root` as the context node.
    fn evaluate(&self, document: &Document, root: Node, expression: &str)
        -> Result<Vec<Node>, Error>;
}

/// ## Selection
///
/// Selection never modifies the tree, and absence is never an error.
impl Document {
    /// The first element child of `parent` with this qualified name.
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse(r#"<a><b id="1"/><b id="2"/></a>"#)?;
    /// let a = doc.document_element(doc.root()).unwrap();
    /// let b = doc.select_element(a, "b").unwrap();
    /// assert_eq!(doc.select_attr(b, "id"), Some("1"));
    /// assert!(doc.select_element(a, "c").is_none());
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn select_element(&self, parent: Node, name: &str) -> Option<Node> {
        let name_id = self.name(name)?;
        self.children(parent)
            .find(|child| matches!(self.element(*child), Some(element) if element.name() == name_id))
    }

    /// All element children of `parent` with this qualified name, in
    /// document order.
    pub fn select_elements(&self, parent: Node, name: &str) -> Vec<Node> {
        let Some(name_id) = self.name(name) else {
            return Vec::new();
        };
        self.children(parent)
            .filter(|child| matches!(self.element(*child), Some(element) if element.name() == name_id))
            .collect()
    }

    /// The value of the first attribute with this qualified name.
    ///
    /// Works on elements and on the pseudo-attributes of the XML
    /// declaration.
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse(r#"<?xml version="1.0"?><a xml:space="preserve"/>"#)?;
    /// let declaration = doc.first_child(doc.root()).unwrap();
    /// assert_eq!(doc.select_attr(declaration, "version"), Some("1.0"));
    /// let a = doc.document_element(doc.root()).unwrap();
    /// assert_eq!(doc.select_attr(a, "xml:space"), Some("preserve"));
    /// assert_eq!(doc.select_attr(a, "space"), None);
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn select_attr(&self, node: Node, name: &str) -> Option<&str> {
        let name_id = self.name(name)?;
        match self.value(node) {
            Value::Element(element) => element.get_attribute(name_id),
            Value::Declaration(declaration) => attribute_value(declaration.attributes(), name_id),
            _ => None,
        }
    }

    /// All nodes matching a path expression, using [`SimplePath`].
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse("<a><b><c/></b><c/></a>")?;
    /// assert_eq!(doc.find(doc.root(), "//c")?.len(), 2);
    /// assert_eq!(doc.find(doc.root(), "/a/c")?.len(), 1);
    /// assert!(doc.find(doc.root(), "/a/[").is_err());
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn find(&self, root: Node, expression: &str) -> Result<Vec<Node>, Error> {
        self.find_with(&SimplePath, root, expression)
    }

    /// The first node matching a path expression, using [`SimplePath`].
    pub fn find_one(&self, root: Node, expression: &str) -> Result<Option<Node>, Error> {
        self.find_one_with(&SimplePath, root, expression)
    }

    /// All nodes matching a path expression, in the order the evaluator
    /// produces them.
    pub fn find_with(
        &self,
        evaluator: &impl PathEvaluator,
        root: Node,
        expression: &str,
    ) -> Result<Vec<Node>, Error> {
        evaluator.evaluate(self, root, expression)
    }

    /// The first node a path expression evaluates to.
    pub fn find_one_with(
        &self,
        evaluator: &impl PathEvaluator,
        root: Node,
        expression: &str,
    ) -> Result<Option<Node>, Error> {
        Ok(evaluator
            .evaluate(self, root, expression)?
            .into_iter()
            .next())
    }
}
