use rstest::rstest;
use xmlquery::{Document, ValueType};

mod common;

use common::{assert_consistent, assert_orphan};

const XML: &str = "<?procinst?>
        <!--comment-->
        <aaa><bbb/>
            <ddd><eee><fff/></eee></ddd>
        <ggg/></aaa>";

const FULL: &str =
    "<?procinst?><!--comment--><aaa><bbb></bbb><ddd><eee><fff></fff></eee></ddd><ggg></ggg></aaa>";

#[rstest]
#[case::only_child("//aaa/ddd/eee", "<?procinst?><!--comment--><aaa><bbb></bbb><ddd></ddd><ggg></ggg></aaa>")]
#[case::first_child("//aaa/bbb", "<?procinst?><!--comment--><aaa><ddd><eee><fff></fff></eee></ddd><ggg></ggg></aaa>")]
#[case::middle_child("//aaa/ddd", "<?procinst?><!--comment--><aaa><bbb></bbb><ggg></ggg></aaa>")]
#[case::last_child("//aaa/ggg", "<?procinst?><!--comment--><aaa><bbb></bbb><ddd><eee><fff></fff></eee></ddd></aaa>")]
#[case::declaration("/node()[1]", "<!--comment--><aaa><bbb></bbb><ddd><eee><fff></fff></eee></ddd><ggg></ggg></aaa>")]
#[case::comment("//comment()", "<?procinst?><aaa><bbb></bbb><ddd><eee><fff></fff></eee></ddd><ggg></ggg></aaa>")]
fn test_remove_from_tree(#[case] path: &str, #[case] expected: &str) {
    let mut doc = Document::parse(XML).unwrap();
    let node = doc.find_one(doc.root(), path).unwrap().unwrap();
    doc.remove(node);
    assert_consistent(&doc, doc.root());
    assert_orphan(&doc, node);
    assert_eq!(doc.output_xml(doc.root(), false), expected);
}

#[test]
fn test_remove_declaration_is_first_child() {
    let doc = Document::parse(XML).unwrap();
    let first = doc.first_child(doc.root()).unwrap();
    assert_eq!(doc.value_type(first), ValueType::Declaration);
}

#[test]
fn test_remove_root_does_nothing() {
    let mut doc = Document::parse(XML).unwrap();
    doc.remove(doc.root());
    assert_consistent(&doc, doc.root());
    assert_eq!(doc.output_xml(doc.root(), false), FULL);
}

#[rstest]
#[case::remove_a(0, &["b", "c"])]
#[case::remove_b(1, &["a", "c"])]
#[case::remove_c(2, &["a", "b"])]
fn test_remove_matrix(#[case] index: usize, #[case] remaining: &[&str]) {
    let mut doc = Document::parse("<p><a/><b/><c/></p>").unwrap();
    let p = doc.document_element(doc.root()).unwrap();
    let node = doc.children(p).nth(index).unwrap();
    doc.remove(node);
    assert_consistent(&doc, doc.root());
    assert_orphan(&doc, node);
    let names = doc.children(p).map(|n| doc.name_of(n)).collect::<Vec<_>>();
    assert_eq!(names, remaining);
    assert_eq!(doc.name_of(doc.first_child(p).unwrap()), remaining[0]);
    assert_eq!(doc.name_of(doc.last_child(p).unwrap()), remaining[1]);
}

#[test]
fn test_remove_single_child() {
    let mut doc = Document::parse("<p><a/></p>").unwrap();
    let p = doc.document_element(doc.root()).unwrap();
    let a = doc.first_child(p).unwrap();
    doc.remove(a);
    assert_eq!(doc.first_child(p), None);
    assert_eq!(doc.last_child(p), None);
    assert_orphan(&doc, a);
    assert_eq!(doc.output_xml(doc.root(), false), "<p></p>");
}

#[test]
fn test_removed_subtree_still_serializes() {
    let mut doc = Document::parse(XML).unwrap();
    let ddd = doc.find_one(doc.root(), "//ddd").unwrap().unwrap();
    doc.remove(ddd);
    assert!(doc.is_detached(ddd));
    assert_eq!(doc.output_xml(ddd, false), "<ddd><eee><fff></fff></eee></ddd>");
    assert_eq!(doc.find(ddd, "//fff").unwrap().len(), 1);
    assert!(doc.find(doc.root(), "//fff").unwrap().is_empty());
}

#[test]
fn test_remove_inside_detached_subtree() {
    let mut doc = Document::parse(XML).unwrap();
    let ddd = doc.find_one(doc.root(), "//ddd").unwrap().unwrap();
    let fff = doc.find_one(doc.root(), "//fff").unwrap().unwrap();
    doc.remove(ddd);
    doc.remove(fff);
    assert_consistent(&doc, ddd);
    assert_orphan(&doc, fff);
    assert_eq!(doc.output_xml(ddd, false), "<ddd><eee></eee></ddd>");
}
