//! XML Tree Tests
//!
//! Tests verify:
//! - Element, attribute and text navigation
//! - Namespace prefix and declaration handling
//! - List normalisation of repeated children
//! - Rejection of malformed documents

use witsml_log::xml::XmlNode;
use witsml_log::WitsmlError;

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_nested_elements_and_attributes() {
    let root = XmlNode::parse(
        r#"<logs version="1.4.1.1"><log uid="LOG_001"><name>LOG 001</name></log></logs>"#,
    )
    .unwrap();

    assert_eq!(root.name(), "logs");
    assert_eq!(root.attribute("version"), Some("1.4.1.1"));

    let log = root.child("log").unwrap();
    assert_eq!(log.attribute("uid"), Some("LOG_001"));
    assert_eq!(log.child_text("name"), "LOG 001");
    assert_eq!(log.child_text("missing"), "");
}

#[test]
fn test_prefixes_and_namespace_declarations_dropped() {
    let root = XmlNode::parse(
        r#"<w:logs xmlns:w="http://www.witsml.org/schemas/1series" xmlns="urn:x"><w:log w:uid="A"/></w:logs>"#,
    )
    .unwrap();

    assert_eq!(root.name(), "logs");
    assert_eq!(root.attribute("w"), None);
    assert_eq!(root.attribute("xmlns"), None);
    assert_eq!(root.child("log").unwrap().attribute("uid"), Some("A"));
}

#[test]
fn test_single_and_repeated_children_both_listed() {
    let one = XmlNode::parse("<d><data>1</data></d>").unwrap();
    let many = XmlNode::parse("<d><data>1</data><data>2</data><data>3</data></d>").unwrap();

    assert_eq!(one.children_named("data").count(), 1);
    assert_eq!(many.children_named("data").count(), 3);
}

#[test]
fn test_text_is_trimmed_and_unescaped() {
    let root = XmlNode::parse("<a>\n   x &amp; y  \n</a>").unwrap();
    assert_eq!(root.text(), "x & y");
}

#[test]
fn test_cdata_text() {
    let root = XmlNode::parse("<a><![CDATA[<logs/>]]></a>").unwrap();
    assert_eq!(root.text(), "<logs/>");
}

#[test]
fn test_path_navigation() {
    let root = XmlNode::parse("<a><b><c>deep</c></b></a>").unwrap();
    assert_eq!(root.path(&["b", "c"]).map(XmlNode::text), Some("deep"));
    assert!(root.path(&["b", "x"]).is_none());
}

#[test]
fn test_malformed_documents_rejected() {
    assert!(matches!(XmlNode::parse("<a><b></a>"), Err(WitsmlError::Xml(_))));
    assert!(matches!(XmlNode::parse("<a>"), Err(WitsmlError::Xml(_))));
    assert!(matches!(XmlNode::parse(""), Err(WitsmlError::Xml(_))));
    assert!(matches!(XmlNode::parse("<a/><b/>"), Err(WitsmlError::Xml(_))));
}
