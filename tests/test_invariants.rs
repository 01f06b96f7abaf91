use proptest::prelude::*;
use proptest::sample::Index;
use xmlquery::Document;

mod common;

use common::{assert_consistent, assert_orphan};

#[derive(Debug, Clone)]
struct Tree {
    name: String,
    children: Vec<Tree>,
}

fn tree() -> impl Strategy<Value = Tree> {
    let leaf = "[a-c]".prop_map(|name| Tree {
        name,
        children: Vec::new(),
    });
    leaf.prop_recursive(4, 32, 4, |inner| {
        ("[a-c]", prop::collection::vec(inner, 0..4))
            .prop_map(|(name, children)| Tree { name, children })
    })
}

fn render(trees: &[Tree]) -> String {
    trees
        .iter()
        .map(|tree| {
            format!(
                "<{}>{}</{}>",
                tree.name,
                render(&tree.children),
                tree.name
            )
        })
        .collect()
}

// remove the node at pre-order position `n` among `trees` and their
// descendants
fn remove_nth(trees: &mut Vec<Tree>, n: &mut usize) -> bool {
    for i in 0..trees.len() {
        if *n == 0 {
            trees.remove(i);
            return true;
        }
        *n -= 1;
        if remove_nth(&mut trees[i].children, n) {
            return true;
        }
    }
    false
}

proptest! {
    #[test]
    fn test_remove_keeps_tree_consistent(
        root in tree(),
        removals in prop::collection::vec(any::<Index>(), 0..8),
    ) {
        let mut model = vec![root];
        let mut doc = Document::parse(&render(&model)).unwrap();
        prop_assert_eq!(doc.output_xml(doc.root(), false), render(&model));

        for removal in removals {
            let nodes = doc.descendants(doc.root()).collect::<Vec<_>>();
            let position = removal.index(nodes.len());
            let node = nodes[position];
            doc.remove(node);
            if position > 0 {
                let mut n = position - 1;
                prop_assert!(remove_nth(&mut model, &mut n));
                assert_orphan(&doc, node);
                prop_assert!(doc.is_detached(node));
            }
            assert_consistent(&doc, doc.root());
            prop_assert_eq!(doc.output_xml(doc.root(), false), render(&model));
        }
    }

    #[test]
    fn test_select_elements_matches_children(root in tree(), name in "[a-c]") {
        let doc = Document::parse(&render(&[root.clone()])).unwrap();
        let element = doc.document_element(doc.root()).unwrap();
        let selected = doc.select_elements(element, &name);
        let expected = root.children.iter().filter(|child| child.name == name).count();
        prop_assert_eq!(selected.len(), expected);
        prop_assert_eq!(doc.select_element(element, &name), selected.first().copied());
        prop_assert_eq!(doc.find(element, &name).unwrap(), selected);
    }
}
