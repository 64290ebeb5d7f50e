//! Tests for the markup tree types and the canonical printer.

use easel_dom::{AttributesMap, ElementData, Node, NodeType, print_tree};

/// Helper to build an attribute list from pairs.
fn attrs(pairs: &[(&str, &str)]) -> AttributesMap {
    pairs.iter().copied().collect()
}

// ========== AttributesMap ==========

#[test]
fn test_attributes_keep_insertion_order() {
    let map = attrs(&[("zeta", "1"), ("alpha", "2"), ("mid", "3")]);
    let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_attributes_first_insert_wins() {
    let mut map = AttributesMap::new();
    assert!(map.insert("id", "first"));
    assert!(!map.insert("id", "second"));
    assert_eq!(map.get("id"), Some("first"));
    assert_eq!(map.len(), 1);
}

// ========== ElementData ==========

#[test]
fn test_element_id_and_classes() {
    let data = ElementData::new("div", attrs(&[("id", "main"), ("class", "a  b\tc")]));
    assert_eq!(data.id(), Some("main"));
    assert_eq!(data.classes().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert!(data.has_class("b"));
    assert!(!data.has_class(""));
}

#[test]
fn test_element_without_class_attribute_has_no_classes() {
    let data = ElementData::new("div", AttributesMap::new());
    assert_eq!(data.id(), None);
    assert_eq!(data.classes().count(), 0);
}

#[test]
fn test_node_is_matches_elements_only() {
    let node = Node::element("html", AttributesMap::new(), vec![]);
    assert!(node.is("html"));
    assert!(!node.is("body"));
    assert!(!Node::text("html").is("html"));
    assert!(matches!(Node::comment("c").node_type, NodeType::Comment(_)));
}

// ========== print_tree ==========

#[test]
fn test_print_nested_tree() {
    let tree = Node::element(
        "html",
        AttributesMap::new(),
        vec![
            Node::element(
                "div",
                attrs(&[("id", "x"), ("class", "a b")]),
                vec![Node::text("hello world")],
            ),
            Node::comment("note"),
        ],
    );

    let expected = "<html>\n\
                    \t<div id=\"x\" class=\"a b\">\n\
                    \t\thello world\n\
                    \t</div>\n\
                    \t<!-- note -->\n\
                    </html>\n";
    assert_eq!(print_tree(&tree), expected);
}

#[test]
fn test_print_empty_element() {
    let tree = Node::element("html", AttributesMap::new(), vec![]);
    assert_eq!(print_tree(&tree), "<html>\n</html>\n");
}
