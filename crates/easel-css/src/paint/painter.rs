//! Painter - generates a display list from a box tree
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! Boxes paint in pre-order: a box's background, then its borders, then its
//! descendants. Ancestors therefore sit underneath their descendants.

use crate::layout::{LayoutBox, Rect, StyledBox};
use crate::values::ColorValue;

use super::{DisplayCommand, DisplayList};

/// Paint a laid-out box tree and return the display list.
#[must_use]
#[tracing::instrument(skip_all)]
pub fn paint(root: &LayoutBox) -> DisplayList {
    let mut display_list = DisplayList::new();
    paint_box(root, &mut display_list);
    tracing::debug!(commands = display_list.len(), "painted box tree");
    display_list
}

/// Paint a single box and its descendants. Anonymous boxes only paint their
/// children.
fn paint_box(layout_box: &LayoutBox, display_list: &mut DisplayList) {
    if let LayoutBox::Styled(styled) = layout_box {
        paint_background(styled, display_list);
        paint_borders(styled, display_list);
    }
    for child in layout_box.children() {
        paint_box(child, display_list);
    }
}

/// The first of `names` that is set, if it holds a color.
///
/// A name set to a non-color value stops the search: later fallbacks are not
/// consulted.
fn color_of(styled: &StyledBox, names: &[&str]) -> Option<ColorValue> {
    styled.content.value_of(names)?.as_color()
}

/// [CSS Backgrounds and Borders § 3](https://www.w3.org/TR/css-backgrounds-3/#backgrounds)
///
/// The background fills the padding box.
fn paint_background(styled: &StyledBox, display_list: &mut DisplayList) {
    if let Some(color) = color_of(styled, &["background-color", "background"]) {
        display_list.push(DisplayCommand::Rectangle {
            rect: styled.dimensions.padding_area(),
            color,
        });
    }
}

/// [CSS Backgrounds and Borders § 4](https://www.w3.org/TR/css-backgrounds-3/#borders)
///
/// Four solid rectangles along the inside of the border box: top, right,
/// bottom, left. The top and bottom edges span the corners. All four are
/// emitted even when a width is zero.
fn paint_borders(styled: &StyledBox, display_list: &mut DisplayList) {
    let Some(color) = color_of(styled, &["border-color", "background-color", "background"])
    else {
        return;
    };

    let d = &styled.dimensions;
    let area = d.border_area();
    let edges = [
        // Top
        Rect::new(area.x, area.y, area.width, d.border.top),
        // Right
        Rect::new(
            area.x + area.width - d.border.right,
            area.y,
            d.border.right,
            area.height,
        ),
        // Bottom
        Rect::new(
            area.x,
            area.y + area.height - d.border.bottom,
            area.width,
            d.border.bottom,
        ),
        // Left
        Rect::new(area.x, area.y, d.border.left, area.height),
    ];
    for rect in edges {
        display_list.push(DisplayCommand::Rectangle { rect, color });
    }
}
