//! Box tree construction and block layout.
//!
//! [CSS 2.1 § 9 Visual formatting model](https://www.w3.org/TR/CSS2/visuren.html)

use serde::Serialize;

use crate::cascade::StyledNode;
use crate::values::Value;

use super::box_model::{BoxDimensions, Rect};
use super::display::DisplayType;
use super::values::{AutoOr, to_px};

/// A node of the box tree.
///
/// Every box exclusively owns its children. The tree is built once from a
/// styled tree, laid out once, and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LayoutBox {
    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Groups a run of consecutive inline-level siblings inside a block
    /// parent. Has no style and paints nothing itself.
    Anonymous {
        /// The wrapped inline boxes.
        children: Vec<LayoutBox>,
    },
    /// A box generated by a styled element.
    Styled(StyledBox),
}

/// A box generated by a styled node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledBox {
    /// Geometry, filled in by layout.
    pub dimensions: BoxDimensions,
    /// The styled node, without its children (they became boxes).
    pub content: StyledNode,
    /// How this box takes part in layout.
    pub display: DisplayType,
    /// Child boxes in document order.
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    /// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
    ///
    /// Build the box tree for a styled tree. A root without a `display`
    /// property is treated as inline. Returns `None` if the root's display is
    /// `none` or unrecognized.
    ///
    /// Children with `display: none` (or no `display` at all, which covers
    /// every text and comment node) are dropped together with their
    /// subtrees. Runs of consecutive inline children of a block box are
    /// wrapped in a single anonymous box.
    #[must_use]
    #[tracing::instrument(skip_all)]
    pub fn build(root: StyledNode) -> Option<Self> {
        let display = root
            .value("display")
            .map_or(DisplayType::Inline, |value| {
                DisplayType::from_keyword(&value.print())
            });
        if display == DisplayType::None {
            tracing::debug!("root generates no box");
            return None;
        }
        let root = Self::Styled(StyledBox::build(root, display));
        tracing::debug!(boxes = root.count(), "built box tree");
        Some(root)
    }

    /// [§ 10 Visual formatting model details](https://www.w3.org/TR/CSS2/visudet.html)
    ///
    /// Lay out this box inside `container`, whose content height is the
    /// space already used by earlier siblings. Only block boxes are laid out;
    /// inline and anonymous boxes keep zero geometry.
    pub fn layout(&mut self, container: &BoxDimensions) {
        if let Self::Styled(styled) = self {
            if styled.display == DisplayType::Block {
                styled.layout_block(container);
            }
        }
    }

    /// Lay out the tree for a viewport. The viewport height is ignored:
    /// the document grows downwards from its top edge.
    #[tracing::instrument(skip(self))]
    pub fn layout_root(&mut self, viewport: Rect) {
        let mut container = BoxDimensions {
            content: viewport,
            ..BoxDimensions::default()
        };
        container.content.height = 0.0;
        self.layout(&container);
        tracing::debug!(height = self.dimensions().content.height, "laid out tree");
    }

    /// The box geometry. Anonymous boxes have zero geometry.
    #[must_use]
    pub fn dimensions(&self) -> BoxDimensions {
        match self {
            Self::Anonymous { .. } => BoxDimensions::default(),
            Self::Styled(styled) => styled.dimensions,
        }
    }

    /// Child boxes in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Anonymous { children } | Self::Styled(StyledBox { children, .. }) => children,
        }
    }

    /// The styled box, if this is not an anonymous box.
    #[must_use]
    pub const fn as_styled(&self) -> Option<&StyledBox> {
        match self {
            Self::Anonymous { .. } => None,
            Self::Styled(styled) => Some(styled),
        }
    }

    /// True for anonymous boxes.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous { .. })
    }

    /// Number of boxes in this subtree, including this one.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Self::count).sum::<usize>()
    }
}

impl StyledBox {
    fn build(mut node: StyledNode, display: DisplayType) -> Self {
        let children = node.take_children();
        let mut styled = Self {
            dimensions: BoxDimensions::default(),
            content: node,
            display,
            children: Vec::new(),
        };

        for child in children {
            match DisplayType::of(&child) {
                DisplayType::Block => {
                    let block = Self::build(child, DisplayType::Block);
                    styled.children.push(LayoutBox::Styled(block));
                }
                DisplayType::Inline => {
                    let inline = Self::build(child, DisplayType::Inline);
                    styled.push_inline(LayoutBox::Styled(inline));
                }
                DisplayType::None => {}
            }
        }
        styled
    }

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Inline children go straight into an inline box. A block box puts them
    /// into its trailing anonymous box, starting a new one if the last child
    /// is not anonymous.
    fn push_inline(&mut self, child: LayoutBox) {
        if self.display == DisplayType::Inline {
            self.children.push(child);
            return;
        }
        if !self.children.last().is_some_and(LayoutBox::is_anonymous) {
            self.children.push(LayoutBox::Anonymous {
                children: Vec::new(),
            });
        }
        if let Some(LayoutBox::Anonymous { children }) = self.children.last_mut() {
            children.push(child);
        }
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    fn layout_block(&mut self, container: &BoxDimensions) {
        self.dimensions.content.height = 0.0;
        self.calculate_block_width(container);
        self.calculate_block_position(container);
        self.layout_children();
        self.calculate_block_height();
    }

    /// [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// "The following constraints must hold among the used values of the
    /// other properties:
    ///
    ///   'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
    ///   'padding-right' + 'border-right-width' + 'margin-right'
    ///   = width of containing block"
    fn calculate_block_width(&mut self, container: &BoxDimensions) {
        let style = &self.content;

        // STEP 1: Read the declared values.
        // Border and padding cannot be 'auto', only margins and width can.
        let auto = Value::keyword("auto");
        let width = AutoOr::from_value(&style.value_or(&["width"], auto.clone()));
        let mut margin_left =
            AutoOr::from_value(&style.value_or(&["margin-left", "margin"], auto.clone()));
        let mut margin_right =
            AutoOr::from_value(&style.value_or(&["margin-right", "margin"], auto));
        let padding_left = to_px(&style.value_or_zero(&["padding-left", "padding"]));
        let padding_right = to_px(&style.value_or_zero(&["padding-right", "padding"]));
        let border_left = to_px(&style.value_or_zero(&["border-left-width", "border-width"]));
        let border_right = to_px(&style.value_or_zero(&["border-right-width", "border-width"]));

        // Auto values contribute nothing to the sum.
        let total = width.to_px_or(0.0)
            + margin_left.to_px_or(0.0)
            + margin_right.to_px_or(0.0)
            + padding_left
            + padding_right
            + border_left
            + border_right;

        // STEP 2: Handle the over-constrained case.
        //
        // "If 'width' is not 'auto' and 'border-left-width' + 'padding-left' +
        // 'width' + 'padding-right' + 'border-right-width' (plus any of
        // 'margin-left' or 'margin-right' that are not 'auto') is larger than
        // the width of the containing block, then any 'auto' values for
        // 'margin-left' or 'margin-right' are, for the following rules,
        // treated as zero."
        if !width.is_auto() && total > container.content.width {
            if margin_left.is_auto() {
                margin_left = AutoOr::Length(0.0);
            }
            if margin_right.is_auto() {
                margin_right = AutoOr::Length(0.0);
            }
        }

        // STEP 3: Distribute the underflow. Negative means overflow.
        let underflow = container.content.width - total;
        let (width, margin_left, margin_right) = match (width, margin_left, margin_right) {
            // "If all of the above have a computed value other than 'auto',
            // the values are said to be over-constrained and one of the used
            // values will have to be different from its computed value."
            // Left-to-right: margin-right absorbs the difference.
            (AutoOr::Length(w), AutoOr::Length(ml), AutoOr::Length(mr)) => (w, ml, mr + underflow),

            // "If there is exactly one value specified as 'auto', its used
            // value follows from the equality."
            (AutoOr::Length(w), AutoOr::Length(ml), AutoOr::Auto) => (w, ml, underflow),
            (AutoOr::Length(w), AutoOr::Auto, AutoOr::Length(mr)) => (w, underflow, mr),

            // "If 'width' is set to 'auto', any other 'auto' values become
            // '0' and 'width' follows from the resulting equality."
            (AutoOr::Auto, ml, mr) => {
                let ml = ml.to_px_or(0.0);
                let mr = mr.to_px_or(0.0);
                if underflow >= 0.0 {
                    (underflow, ml, mr)
                } else {
                    // Width can't be negative.
                    (0.0, ml, mr + underflow)
                }
            }

            // "If both 'margin-left' and 'margin-right' are 'auto', their
            // used values are equal."
            (AutoOr::Length(w), AutoOr::Auto, AutoOr::Auto) => {
                (w, underflow / 2.0, underflow / 2.0)
            }
        };

        // STEP 4: Store the used values.
        let d = &mut self.dimensions;
        d.content.width = width;
        d.margin.left = margin_left;
        d.margin.right = margin_right;
        d.padding.left = padding_left;
        d.padding.right = padding_right;
        d.border.left = border_left;
        d.border.right = border_right;
    }

    /// [§ 10.6.3 Block-level non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    ///
    /// Place the box directly below the siblings already laid out in
    /// `container`.
    fn calculate_block_position(&mut self, container: &BoxDimensions) {
        let style = &self.content;
        let d = &mut self.dimensions;

        d.margin.top = to_px(&style.value_or_zero(&["margin-top", "margin"]));
        d.margin.bottom = to_px(&style.value_or_zero(&["margin-bottom", "margin"]));
        d.padding.top = to_px(&style.value_or_zero(&["padding-top", "padding"]));
        d.padding.bottom = to_px(&style.value_or_zero(&["padding-bottom", "padding"]));
        d.border.top = to_px(&style.value_or_zero(&["border-top-width", "border-width"]));
        d.border.bottom = to_px(&style.value_or_zero(&["border-bottom-width", "border-width"]));

        d.content.x = container.content.x + d.margin.left + d.padding.left + d.border.left;
        d.content.y = container.content.height
            + container.content.y
            + d.margin.top
            + d.padding.top
            + d.border.top;
    }

    /// Lay out styled children top to bottom, growing this box's content
    /// height by each child's margin box.
    ///
    /// Anonymous children are skipped, so inline content under them keeps
    /// zero geometry.
    fn layout_children(&mut self) {
        let Self {
            dimensions,
            children,
            ..
        } = self;
        for child in children.iter_mut() {
            if let LayoutBox::Styled(styled) = child {
                if styled.display == DisplayType::Block {
                    styled.layout_block(dimensions);
                }
                dimensions.content.height += styled.dimensions.margin_area().height;
            }
        }
    }

    /// [§ 10.6.3](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    ///
    /// An explicit length wins over the height accumulated from children.
    fn calculate_block_height(&mut self) {
        if let Some(value @ Value::Unit(..)) = self.content.value("height") {
            self.dimensions.content.height = to_px(&value);
        }
    }
}
