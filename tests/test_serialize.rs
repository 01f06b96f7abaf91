use insta::assert_snapshot;
use xmlquery::{Document, OutputParameters};

#[test]
fn test_escape_output_value() {
    let doc = Document::parse("<AAA>&lt;*&gt;</AAA>").unwrap();
    assert_snapshot!(doc.output_xml(doc.root(), true), @"<AAA>&lt;*&gt;</AAA>");
    assert_snapshot!(doc.output_xml(doc.root(), false), @"<AAA><*></AAA>");
}

#[test]
fn test_cdata_output_as_text() {
    let doc = Document::parse("<a><![CDATA[x & y]]></a>").unwrap();
    assert_snapshot!(doc.output_xml(doc.root(), true), @"<a>x &amp; y</a>");
}

#[test]
fn test_namespace_prefix_roundtrip() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?><S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/"><S:Body></S:Body></S:Envelope>"#;
    let doc = Document::parse(xml).unwrap();
    assert_eq!(doc.output_xml(doc.root(), false), xml);
}

#[test]
fn test_output_with_comment_node() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
    <!-- Students grades are updated bi-monthly -->
    <class_list>
        <student>
            <name>Robert</name>
            <grade>A+</grade>
        </student>
    <!--
        <student>
            <name>Lenard</name>
            <grade>A-</grade>
        </student>
    -->
    </class_list>"#;
    let doc = Document::parse(xml).unwrap();
    let output = doc.output_xml(doc.root(), true);
    assert!(output.contains("<!-- Students grades are updated bi-monthly -->"));
    let class_list = doc.find_one(doc.root(), "//class_list").unwrap().unwrap();
    assert!(doc
        .output_xml(class_list, false)
        .contains("<name>Lenard</name>"));
}

#[test]
fn test_space_from_parent() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
    <class_list>
        <student xml:space="preserve">
            <name> Robert </name>
            <grade>A+</grade>
        </student>
    </class_list>"#;
    let doc = Document::parse(xml).unwrap();
    assert!(doc
        .output_xml(doc.root(), true)
        .contains("<name> Robert </name>"));
    let name = doc
        .find_one(doc.root(), "/class_list/student/name")
        .unwrap()
        .unwrap();
    assert_eq!(doc.output_xml(name, false), "<name> Robert </name>");
    // indentation inside the preserving element is kept as well
    let student = doc.parent(name).unwrap();
    assert!(doc.output_xml(student, false).starts_with("<student xml:space=\"preserve\">\n"));
}

#[test]
fn test_space_direct() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
    <class_list>
        <student>
            <name xml:space="preserve"> Robert </name>
            <grade>A+</grade>
        </student>
    </class_list>"#;
    let doc = Document::parse(xml).unwrap();
    let output = doc.output_xml(doc.root(), false);
    assert_snapshot!(output, @r#"<?xml version="1.0" encoding="utf-8"?><class_list><student><name xml:space="preserve"> Robert </name><grade>A+</grade></student></class_list>"#);
    assert!(!doc.output_xml(doc.root(), true).contains('\n'));
}

#[test]
fn test_space_overwritten_to_preserve() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
    <class_list>
        <student xml:space="default">
            <name xml:space="preserve"> Robert </name>
            <grade>A+</grade>
        </student>
    </class_list>"#;
    let doc = Document::parse(xml).unwrap();
    let student = doc
        .find_one(doc.root(), "/class_list/student")
        .unwrap()
        .unwrap();
    assert_snapshot!(doc.output_xml(student, false), @r#"<student xml:space="default"><name xml:space="preserve"> Robert </name><grade>A+</grade></student>"#);
    assert!(!doc.output_xml(doc.root(), true).contains('\n'));
}

#[test]
fn test_space_overwritten_to_default() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
    <class_list>
        <student xml:space="preserve">
            <name xml:space="default"> Robert </name>
            <grade>A+</grade>
        </student>
    </class_list>"#;
    let doc = Document::parse(xml).unwrap();
    assert!(doc
        .output_xml(doc.root(), false)
        .contains(r#"<name xml:space="default">Robert</name>"#));
    let grade = doc.find_one(doc.root(), "//grade").unwrap().unwrap();
    assert_eq!(doc.output_xml(grade, false), "<grade>A+</grade>");
}

#[test]
fn test_detached_subtree_resolves_own_space() {
    let mut doc =
        Document::parse(r#"<a xml:space="preserve"><b> x </b><c xml:space="preserve"> y </c></a>"#)
            .unwrap();
    let b = doc.find_one(doc.root(), "//b").unwrap().unwrap();
    let c = doc.find_one(doc.root(), "//c").unwrap().unwrap();
    assert_eq!(doc.output_xml(b, false), "<b> x </b>");
    doc.remove(b);
    doc.remove(c);
    assert_eq!(doc.output_xml(b, false), "<b>x</b>");
    assert_eq!(doc.output_xml(c, false), r#"<c xml:space="preserve"> y </c>"#);
}

#[test]
fn test_output_is_idempotent() {
    let doc = Document::parse("<a> <b>x</b> <!--c--> </a>").unwrap();
    let first = doc.output_xml(doc.root(), true);
    let second = doc.output_xml(doc.root(), true);
    assert_eq!(first, second);
    assert_eq!(first, "<a><b>x</b><!--c--></a>");
}

#[test]
fn test_write_xml_matches_output() {
    let doc = Document::parse(r#"<a x="&quot;">1 &amp; 2<b/></a>"#).unwrap();
    let parameters = OutputParameters {
        escape_text: true,
        empty_element_tags: true,
        ..Default::default()
    };
    let mut buf = Vec::new();
    doc.write_xml(doc.root(), &parameters, &mut buf).unwrap();
    let written = String::from_utf8(buf).unwrap();
    assert_eq!(written, doc.output_xml_with(doc.root(), &parameters));
    assert_snapshot!(written, @r#"<a x="&quot;">1 &amp; 2<b/></a>"#);
}
