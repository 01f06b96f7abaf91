use indextree::{Arena, NodeId};

use crate::name::{NameId, NameLookup};
use crate::xmlvalue::Value;

pub(crate) type XmlArena = Arena<Value>;

/// A node in the XML tree.
///
/// This is a lightweight handle into the arena of the [`Document`] that
/// created it, and can be copied freely. It stays valid after the node is
/// detached from its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// A parsed XML document.
///
/// The document owns every node it ever created: the tree under its root
/// node as well as any subtree detached with [`Document::remove`]. Nodes
/// are never created after parsing.
///
/// Functionality is spread over several sections: navigation, value
/// access, selection, manipulation and serialization.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) arena: XmlArena,
    pub(crate) name_lookup: NameLookup,
    pub(crate) root: Node,
}

impl Document {
    pub(crate) fn empty() -> Self {
        let mut arena = XmlArena::new();
        let root = Node::new(arena.new_node(Value::Document));
        Document {
            arena,
            name_lookup: NameLookup::new(),
            root,
        }
    }

    /// The document root node.
    ///
    /// This is the node that holds the declaration, top-level comments and
    /// the document element. It has no parent and cannot be removed.
    pub fn root(&self) -> Node {
        self.root
    }

    /// Look up a qualified name used in this document.
    ///
    /// Returns [`None`] if no element, attribute or declaration in the
    /// document was ever given this name.
    pub fn name(&self, name: &str) -> Option<NameId> {
        self.name_lookup.get_id(name)
    }

    /// The qualified name string for a name id.
    pub fn name_str(&self, name_id: NameId) -> &str {
        self.name_lookup.get_value(name_id)
    }

    pub(crate) fn add_name(&mut self, name: &str) -> NameId {
        self.name_lookup.get_id_mut(name.to_string())
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }
}
