use crate::document::{Document, Node};

/// Manipulation of the tree structure.
///
/// The only structural change supported is detaching a subtree. Removal
/// keeps the tree consistent:
/// - the parent's first and last child are updated when the removed node
///   was at either end,
/// - the neighbouring siblings are linked to each other,
/// - the removed node loses its parent and siblings but keeps its own
///   children, so it can still be traversed and serialized.
///
/// Neighbouring text nodes are not merged after a removal.
impl Document {
    /// Detach a node (and its descendants) from the tree.
    ///
    /// Removing a node without a parent (the document root, or a node that
    /// was already removed) does nothing.
    ///
    /// ```rust
    /// let mut doc = xmlquery::Document::parse("<a><b/><c/><d/></a>")?;
    /// let c = doc.find_one(doc.root(), "//c")?.unwrap();
    /// doc.remove(c);
    /// assert_eq!(doc.output_xml(doc.root(), false), "<a><b></b><d></d></a>");
    /// assert_eq!(doc.output_xml(c, false), "<c></c>");
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn remove(&mut self, node: Node) {
        if self.parent(node).is_none() {
            return;
        }
        tracing::trace!(node = ?node, "removing node from tree");
        node.get().detach(self.arena_mut());
    }

    /// Return true if a node was detached from the tree it was parsed in.
    ///
    /// The document root is never detached.
    pub fn is_detached(&self, node: Node) -> bool {
        !self.is_document(self.top(node))
    }
}
