//! Tests for the markup parser.

use easel_dom::{Node, NodeType, print_tree};
use easel_html::{HTMLParser, ParseError};

/// Helper: parse and unwrap.
fn parse(input: &str) -> Node {
    HTMLParser::new(input)
        .parse()
        .unwrap_or_else(|err| panic!("failed to parse {input:?}: {err}"))
}

#[test]
fn test_single_html_root_is_kept() {
    let root = parse("<html id=\"top\"><div></div></html>");
    assert!(root.is("html"));
    assert_eq!(root.as_element().and_then(|e| e.id()), Some("top"));
    assert_eq!(root.children.len(), 1);
}

#[test]
fn test_multiple_roots_are_wrapped_in_html() {
    let root = parse("<div></div><p></p>");
    assert!(root.is("html"));
    assert!(root.children[0].is("div"));
    assert!(root.children[1].is("p"));
}

#[test]
fn test_single_non_html_root_is_wrapped() {
    let root = parse("<body></body>");
    assert!(root.is("html"));
    assert!(root.children[0].is("body"));
}

#[test]
fn test_empty_document_is_empty_html() {
    let root = parse("   ");
    assert!(root.is("html"));
    assert!(root.children.is_empty());
}

#[test]
fn test_text_is_trimmed() {
    let root = parse("<p>   some text  \n </p>");
    let p = &root.children[0];
    assert_eq!(p.children[0].node_type, NodeType::Text("some text".to_string()));
}

#[test]
fn test_comment_is_trimmed() {
    let root = parse("<!--   a comment   --><div></div>");
    assert_eq!(
        root.children[0].node_type,
        NodeType::Comment("a comment".to_string())
    );
    assert!(root.children[1].is("div"));
}

#[test]
fn test_attributes_in_order_first_wins() {
    let root = parse("<a href=\"x\" data-k=\"1\" href=\"y\"></a>");
    let a = root.children[0].as_element().expect("element");
    let attrs: Vec<(&str, &str)> = a.attrs.iter().collect();
    assert_eq!(attrs, vec![("href", "x"), ("data-k", "1")]);
}

#[test]
fn test_whitespace_inside_tags() {
    let root = parse("< div  class=\"a\"  ></ div >");
    assert!(root.children[0].is("div"));
}

#[test]
fn test_parse_then_print() {
    let source = "<html>\n  <div class=\"a b\">\n    Hello\n  </div>\n  <!-- done -->\n</html>";
    let expected = "<html>\n\
                    \t<div class=\"a b\">\n\
                    \t\tHello\n\
                    \t</div>\n\
                    \t<!-- done -->\n\
                    </html>\n";
    assert_eq!(print_tree(&parse(source)), expected);
}

#[test]
fn test_mismatched_closing_tag() {
    let err = HTMLParser::new("<div></span>").parse().unwrap_err();
    assert!(matches!(
        err,
        ParseError::MismatchedClosingTag { ref expected, ref found, .. }
            if expected == "div" && found == "span"
    ));
}

#[test]
fn test_unterminated_comment() {
    let err = HTMLParser::new("<!-- never closed").parse().unwrap_err();
    assert_eq!(err, ParseError::UnterminatedComment { position: 0 });
}

#[test]
fn test_stray_closing_tag() {
    let err = HTMLParser::new("<p></p></p>").parse().unwrap_err();
    assert_eq!(err, ParseError::UnexpectedClosingTag { position: 7 });
}

#[test]
fn test_unquoted_attribute_is_rejected() {
    let err = HTMLParser::new("<p id=x></p>").parse().unwrap_err();
    assert!(matches!(err, ParseError::Expected { position: 5, .. }));
}
