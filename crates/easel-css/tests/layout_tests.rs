//! Integration tests for box tree construction and block layout.

use easel_css::{
    BoxDimensions, CSSParser, DisplayType, LayoutBox, Rect, StyledNode, compute_styles,
};
use easel_html::HTMLParser;

/// Helper: parse and cascade.
fn style(html: &str, css: &str) -> StyledNode {
    let root = HTMLParser::new(html).parse().expect("valid markup");
    let stylesheet = CSSParser::new(css).parse_stylesheet().expect("valid stylesheet");
    compute_styles(root, &stylesheet)
}

/// Helper: build the box tree without laying it out.
fn build(html: &str, css: &str) -> LayoutBox {
    LayoutBox::build(style(html, css)).expect("root generates a box")
}

/// Helper: build and lay out inside a viewport of the given width.
fn layout(html: &str, css: &str, width: f64) -> LayoutBox {
    let mut root = build(html, css);
    root.layout_root(Rect::new(0.0, 0.0, width, 600.0));
    root
}

/// Helper: the root's dimensions for a single `<html>` element.
fn root_dims(css: &str, width: f64) -> BoxDimensions {
    layout("<html></html>", css, width).dimensions()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Width and margin solver
//
// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
// ---------------------------------------------------------------------------

#[test]
fn test_width_all_constrained_margin_right_absorbs_underflow() {
    let d = root_dims("html{display:block;width:0px;margin:0px;padding:0px;}", 1.0);
    assert_close(d.content.width, 0.0);
    assert_close(d.margin.left, 0.0);
    assert_close(d.margin.right, 1.0);
}

#[test]
fn test_width_auto_fills_underflow() {
    let d = root_dims("html{display:block;width:auto;margin:auto;padding:0px;}", 1.0);
    assert_close(d.content.width, 1.0);
    assert_close(d.margin.left, 0.0);
    assert_close(d.margin.right, 0.0);
}

#[test]
fn test_width_both_margins_auto_center() {
    let d = root_dims("html{display:block;width:0px;margin:auto;padding:0px;}", 1.0);
    assert_close(d.content.width, 0.0);
    assert_close(d.margin.left, 0.5);
    assert_close(d.margin.right, 0.5);
}

#[test]
fn test_width_only_margin_right_auto() {
    let d = root_dims(
        "html{display:block;width:100px;margin-left:10px;margin-right:auto;}",
        200.0,
    );
    assert_close(d.margin.left, 10.0);
    assert_close(d.margin.right, 90.0);
}

#[test]
fn test_width_only_margin_left_auto() {
    let d = root_dims(
        "html{display:block;width:100px;margin:auto;margin-right:10px;}",
        200.0,
    );
    assert_close(d.margin.left, 90.0);
    assert_close(d.margin.right, 10.0);
}

#[test]
fn test_missing_width_and_margins_are_auto() {
    let d = root_dims("html{display:block;padding:12px;border-width:3px;}", 800.0);
    assert_close(d.content.width, 770.0);
    assert_close(d.margin.left, 0.0);
    assert_close(d.margin.right, 0.0);
    assert_close(d.padding.left, 12.0);
    assert_close(d.border.right, 3.0);
}

#[test]
fn test_over_constrained_auto_margins_become_zero() {
    let d = root_dims("html{display:block;width:300px;margin:auto;}", 200.0);
    assert_close(d.content.width, 300.0);
    assert_close(d.margin.left, 0.0);
    assert_close(d.margin.right, -100.0);
}

#[test]
fn test_auto_width_never_negative() {
    let d = root_dims("html{display:block;padding:150px;}", 200.0);
    assert_close(d.content.width, 0.0);
    assert_close(d.margin.right, -100.0);
}

#[test]
fn test_longhand_beats_shorthand() {
    let d = root_dims(
        "html{display:block;padding:1px;padding-left:7px;border-width:2px;border-left-width:4px;}",
        100.0,
    );
    assert_close(d.padding.left, 7.0);
    assert_close(d.padding.right, 1.0);
    assert_close(d.border.left, 4.0);
    assert_close(d.border.right, 2.0);
    assert_close(d.content.width, 100.0 - 7.0 - 1.0 - 4.0 - 2.0);
}

// ---------------------------------------------------------------------------
// Position and height
//
// [§ 10.6.3 Block-level non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
// ---------------------------------------------------------------------------

#[test]
fn test_block_children_stack_vertically() {
    let root = layout(
        "<html><div></div><div></div></html>",
        "html{display:block;} div{display:block;height:10px;margin:5px;}",
        100.0,
    );
    let first = root.children()[0].dimensions();
    let second = root.children()[1].dimensions();

    assert_close(first.content.y, 5.0);
    assert_close(first.content.x, 5.0);
    assert_close(first.content.width, 90.0);
    // Margins do not collapse: 5 + 10 + 5 below the first box.
    assert_close(second.content.y, 25.0);
    assert_close(root.dimensions().content.height, 40.0);
}

#[test]
fn test_position_includes_top_edges() {
    let root = layout(
        "<html><div></div></html>",
        "html{display:block;padding:2px;} div{display:block;margin-top:3px;border-width:4px;padding-top:5px;}",
        100.0,
    );
    let div = root.children()[0].dimensions();
    assert_close(div.content.y, 2.0 + 3.0 + 4.0 + 5.0);
    assert_close(div.content.x, 2.0 + 4.0);
}

#[test]
fn test_explicit_height_wins() {
    let root = layout(
        "<html><div></div></html>",
        "html{display:block;height:50px;} div{display:block;height:10px;}",
        100.0,
    );
    assert_close(root.dimensions().content.height, 50.0);
}

#[test]
fn test_non_length_height_is_ignored() {
    let root = layout(
        "<html><div></div></html>",
        "html{display:block;height:auto;} div{display:block;height:10px;}",
        100.0,
    );
    assert_close(root.dimensions().content.height, 10.0);
}

#[test]
fn test_viewport_height_is_reset() {
    let root = layout("<html></html>", "html{display:block;}", 100.0);
    assert_close(root.dimensions().content.height, 0.0);
}

// ---------------------------------------------------------------------------
// Box tree construction
//
// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
// ---------------------------------------------------------------------------

#[test]
fn test_display_none_prunes_subtree() {
    let root = build(
        "<html><div class=\"gone\"><p></p><span></span></div><div></div></html>",
        "*{display:block;} span{display:inline;} .gone{display:none;}",
    );
    assert_eq!(root.children().len(), 1);
    assert_eq!(root.count(), 2);
}

#[test]
fn test_root_display_none_generates_nothing() {
    let styled = style("<html><div></div></html>", "*{display:block;} html{display:none;}");
    assert!(LayoutBox::build(styled).is_none());
}

#[test]
fn test_unknown_display_is_none() {
    let root = build(
        "<html><div></div></html>",
        "html{display:block;} div{display:flex;}",
    );
    assert!(root.children().is_empty());
}

#[test]
fn test_text_and_comments_generate_no_boxes() {
    let root = build(
        "<html>text<!-- c --><div>more</div></html>",
        "*{display:block;}",
    );
    assert_eq!(root.children().len(), 1);
    assert!(root.children()[0].children().is_empty());
}

#[test]
fn test_root_without_display_is_inline() {
    let root = build("<html><div></div></html>", "div{display:block;}");
    let styled = root.as_styled().expect("styled root");
    assert_eq!(styled.display, DisplayType::Inline);
    // Block children attach directly, even to an inline parent.
    assert!(matches!(root.children()[0], LayoutBox::Styled(_)));
}

#[test]
fn test_inline_run_shares_one_anonymous_box() {
    let root = build(
        "<html><b></b><i></i><u></u></html>",
        "html{display:block;} b, i, u{display:inline;}",
    );
    assert_eq!(root.children().len(), 1);
    let anonymous = &root.children()[0];
    assert!(anonymous.is_anonymous());
    assert_eq!(anonymous.children().len(), 3);
}

#[test]
fn test_block_sibling_splits_inline_runs() {
    let root = build(
        "<html><b></b><div></div><i></i><u></u></html>",
        "html, div{display:block;} b, i, u{display:inline;}",
    );
    let children = root.children();
    assert_eq!(children.len(), 3);
    assert!(children[0].is_anonymous());
    assert_eq!(children[0].children().len(), 1);
    assert!(!children[1].is_anonymous());
    assert!(children[2].is_anonymous());
    assert_eq!(children[2].children().len(), 2);
}

#[test]
fn test_inline_parent_holds_inline_children_directly() {
    let root = build(
        "<html><span><b></b><i></i></span></html>",
        "html{display:block;} span, b, i{display:inline;}",
    );
    let span = &root.children()[0].children()[0];
    assert!(!span.is_anonymous());
    assert_eq!(span.children().len(), 2);
    assert!(span.children().iter().all(|child| !child.is_anonymous()));
}

#[test]
fn test_box_keeps_node_but_not_children() {
    let root = build("<html><div></div></html>", "*{display:block;}");
    let styled = root.as_styled().expect("styled root");
    assert!(styled.content.children().is_empty());
    assert!(styled.content.value("display").is_some());
}

// ---------------------------------------------------------------------------
// Anonymous boxes are not laid out
// ---------------------------------------------------------------------------

#[test]
fn test_anonymous_content_keeps_zero_geometry() {
    let root = layout(
        "<html><span><div></div></span></html>",
        "html, div{display:block;padding:4px;height:10px;} span{display:inline;}",
        100.0,
    );

    let anonymous = &root.children()[0];
    let span = &anonymous.children()[0];
    let nested_block = &span.children()[0];

    assert_eq!(anonymous.dimensions(), BoxDimensions::default());
    assert_eq!(span.dimensions(), BoxDimensions::default());
    assert_eq!(nested_block.dimensions(), BoxDimensions::default());
    // Only the explicit height; the anonymous box adds nothing.
    assert_close(root.dimensions().content.height, 10.0);
}

#[test]
fn test_inline_child_of_block_is_not_laid_out() {
    let mut root = build(
        "<html><div></div></html>",
        "html{display:block;} div{display:inline;width:50px;}",
    );
    root.layout_root(Rect::new(0.0, 0.0, 100.0, 100.0));
    let div = &root.children()[0].children()[0];
    assert_close(div.dimensions().content.width, 0.0);
}
