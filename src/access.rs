use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::document::{Document, Node};
use crate::xmlvalue::{Value, ValueType};

/// Node edges.
///
/// Used by [`Document::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element this is the start
    /// tag. In case of the document root the start of the document.
    Start(Node),
    /// The end edge of a node. In case of an element this is the end tag.
    /// For values without children the end edge occurs immediately after
    /// the start edge.
    End(Node),
}

/// ## Read-only access
impl Document {
    /// Obtain the document element from the document root.
    ///
    /// Returns [`None`] if `node` is not a document root, or if the
    /// document element was removed.
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse("<?pi?><p>Example</p>")?;
    /// let p = doc.document_element(doc.root()).unwrap();
    /// assert_eq!(doc.name_str(doc.element(p).unwrap().name()), "p");
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn document_element(&self, node: Node) -> Option<Node> {
        if self.value_type(node) != ValueType::Document {
            return None;
        }
        self.children(node).find(|child| self.is_element(*child))
    }

    /// The topmost ancestor of a node.
    ///
    /// This is the document root for attached nodes, and the top of the
    /// detached subtree otherwise.
    pub fn top(&self, node: Node) -> Node {
        self.ancestors(node).last().unwrap_or(node)
    }

    /// Get parent node.
    ///
    /// Returns [`None`] for the document root and for detached nodes.
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse("<p>Example</p>")?;
    /// let p = doc.document_element(doc.root()).unwrap();
    /// let text = doc.first_child(p).unwrap();
    /// assert_eq!(doc.parent(text), Some(p));
    /// assert_eq!(doc.parent(p), Some(doc.root()));
    /// assert_eq!(doc.parent(doc.root()), None);
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    ///
    /// Returns [`None`] if there is no next sibling.
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse("<p><a/><b/></p>")?;
    /// let p = doc.document_element(doc.root()).unwrap();
    /// let a = doc.first_child(p).unwrap();
    /// let b = doc.next_sibling(a).unwrap();
    /// assert_eq!(doc.next_sibling(b), None);
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    ///
    /// Returns [`None`] if there is no previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse("<a><b><c/></b></a>")?;
    /// let a = doc.document_element(doc.root()).unwrap();
    /// let b = doc.first_child(a).unwrap();
    /// let c = doc.first_child(b).unwrap();
    ///
    /// let ancestors = doc.ancestors(c).collect::<Vec<_>>();
    /// assert_eq!(ancestors, vec![c, b, a, doc.root()]);
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the child nodes of this node, in document order.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterator over the child nodes of this node, in reverse order.
    pub fn reverse_children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().reverse_children(self.arena()).map(Node::new)
    }

    /// Iterator over the descendants of this node, including this one, in
    /// document order (pre-order depth-first).
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse("<a><b><c/></b><d/></a>")?;
    /// let a = doc.document_element(doc.root()).unwrap();
    /// let names = doc
    ///     .descendants(a)
    ///     .map(|n| doc.name_of(n))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(names, vec!["a", "b", "c", "d"]);
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Iterator over the following siblings of this node, including this
    /// one.
    pub fn following_siblings(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().following_siblings(self.arena()).map(Node::new)
    }

    /// Iterator over the preceding siblings of this node, including this
    /// one, nearest first.
    pub fn preceding_siblings(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().preceding_siblings(self.arena()).map(Node::new)
    }

    /// Traverse over node edges.
    ///
    /// This can be used to traverse the tree in document order iteratively
    /// without the need for recursion, while still seeing where elements
    /// start and end.
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }

    /// Concatenated text of all descendant text nodes, in document order.
    ///
    /// Comments and declarations do not contribute.
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse("<a>x<!--c--><b>y</b>z</a>")?;
    /// assert_eq!(doc.inner_text(doc.root()), "xyz");
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn inner_text(&self, node: Node) -> String {
        let mut result = String::new();
        for descendant in self.descendants(node) {
            if let Value::Text(text) = self.value(descendant) {
                result.push_str(text.get());
            }
        }
        result
    }
}
