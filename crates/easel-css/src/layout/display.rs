//! The `display` keyword.
//!
//! [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)

use serde::Serialize;

use crate::cascade::StyledNode;

/// How a node takes part in layout.
///
/// Only the two CSS 2.1 outer display types are laid out. Every other
/// keyword, and a missing `display` property, means the node generates no
/// box at all.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    /// Stacks vertically in a block formatting context.
    Block,
    /// Flows inline. Grouped into anonymous boxes inside block parents.
    Inline,
    /// Generates no box; the whole subtree is dropped.
    #[default]
    None,
}

impl DisplayType {
    /// Map a keyword to a display type. Unknown keywords map to `None`.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        keyword.parse().unwrap_or_default()
    }

    /// The display type of a styled node, or `None` if it has no `display`.
    #[must_use]
    pub fn of(node: &StyledNode) -> Self {
        node.value("display")
            .map_or(Self::None, |value| Self::from_keyword(&value.print()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(DisplayType::from_keyword("block"), DisplayType::Block);
        assert_eq!(DisplayType::from_keyword("inline"), DisplayType::Inline);
        assert_eq!(DisplayType::from_keyword("none"), DisplayType::None);
        assert_eq!(DisplayType::from_keyword("flex"), DisplayType::None);
        assert_eq!(DisplayType::from_keyword("Block"), DisplayType::None);
        assert_eq!(DisplayType::Inline.to_string(), "inline");
    }
}
