use xmlquery::{Document, Node};

/// Walk the whole tree under `node` and check the structural links.
///
/// For every node: its children are reachable from the first child along
/// next-sibling links and from the last child along previous-sibling links,
/// each child points back to the node as parent, sibling links are mutually
/// consistent, and no node is its own ancestor.
pub fn assert_consistent(doc: &Document, node: Node) {
    for current in doc.descendants(node) {
        assert_children_consistent(doc, current);
        assert_eq!(
            doc.ancestors(current).filter(|a| *a == current).count(),
            1,
            "node is its own ancestor"
        );
    }
}

fn assert_children_consistent(doc: &Document, parent: Node) {
    let forward = doc.children(parent).collect::<Vec<_>>();
    let mut backward = doc.reverse_children(parent).collect::<Vec<_>>();
    backward.reverse();
    assert_eq!(forward, backward);

    assert_eq!(doc.first_child(parent), forward.first().copied());
    assert_eq!(doc.last_child(parent), forward.last().copied());

    for (i, child) in forward.iter().enumerate() {
        assert_eq!(doc.parent(*child), Some(parent));
        let previous = if i == 0 { None } else { Some(forward[i - 1]) };
        assert_eq!(doc.previous_sibling(*child), previous);
        assert_eq!(doc.next_sibling(*child), forward.get(i + 1).copied());
    }
}

/// Check that a removed node is a clean orphan.
pub fn assert_orphan(doc: &Document, node: Node) {
    assert_eq!(doc.parent(node), None);
    assert_eq!(doc.previous_sibling(node), None);
    assert_eq!(doc.next_sibling(node), None);
    assert_consistent(doc, node);
}
