//! Cascade and the styled tree.
//!
//! This module implements the cascade per
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/),
//! restricted to specificity and source order. There is no inheritance: a
//! property is set on a node only if a rule matching that node declares it.

use std::collections::BTreeMap;

use easel_dom::{ElementData, Node, NodeType};
use serde::Serialize;

use crate::selector::Specificity;
use crate::stylesheet::{Rule, Stylesheet};
use crate::values::Value;

/// Cascaded property values by property name.
pub type PropertyMap = BTreeMap<String, Value>;

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
///
/// A matched rule with its specificity for cascade ordering.
struct MatchedRule<'a> {
    specificity: Specificity,
    rule: &'a Rule,
}

/// A markup node with its fully cascaded properties.
///
/// Built once by [`compute_styles`] and read-only afterwards. Text and
/// comment nodes carry an empty property map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledNode {
    node: NodeType,
    properties: PropertyMap,
    children: Vec<StyledNode>,
}

impl StyledNode {
    /// Create a styled node from already cascaded properties.
    #[must_use]
    pub const fn new(node: NodeType, properties: PropertyMap, children: Vec<Self>) -> Self {
        Self {
            node,
            properties,
            children,
        }
    }

    /// The markup node this wraps.
    #[must_use]
    pub const fn node(&self) -> &NodeType {
        &self.node
    }

    /// All cascaded properties.
    #[must_use]
    pub const fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Styled children in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Move the children out, leaving this node childless.
    pub(crate) fn take_children(&mut self) -> Vec<Self> {
        std::mem::take(&mut self.children)
    }

    /// The value of `name`, if any rule set it.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<Value> {
        self.properties.get(name).cloned()
    }

    /// The value of the first name in `names` that is set.
    ///
    /// Used for longhand-then-shorthand lookups such as
    /// `["margin-left", "margin"]`.
    #[must_use]
    pub fn value_of(&self, names: &[&str]) -> Option<Value> {
        names.iter().find_map(|name| self.value(name))
    }

    /// Like [`value_of`](Self::value_of), falling back to `default`.
    #[must_use]
    pub fn value_or(&self, names: &[&str], default: Value) -> Value {
        self.value_of(names).unwrap_or(default)
    }

    /// Like [`value_of`](Self::value_of), falling back to `0px`.
    #[must_use]
    pub fn value_or_zero(&self, names: &[&str]) -> Value {
        self.value_or(names, Value::zero())
    }
}

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
/// "The cascade takes an unordered list of declared values for a given property
/// on a given element, sorts them by their declaration's precedence..."
///
/// Compute styles for the entire markup tree given a stylesheet. The tree is
/// consumed and its nodes move into the styled tree.
#[tracing::instrument(skip_all)]
pub fn compute_styles(root: Node, stylesheet: &Stylesheet) -> StyledNode {
    let styled = style_node(root, stylesheet);
    tracing::debug!(rules = stylesheet.rules.len(), "computed styles");
    styled
}

fn style_node(node: Node, stylesheet: &Stylesheet) -> StyledNode {
    let Node {
        node_type,
        children,
    } = node;
    let properties = match &node_type {
        NodeType::Element(element) => cascade(element, stylesheet),
        NodeType::Text(_) | NodeType::Comment(_) => PropertyMap::new(),
    };
    let children = children
        .into_iter()
        .map(|child| style_node(child, stylesheet))
        .collect();
    StyledNode::new(node_type, properties, children)
}

/// [§ 6.4 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
///
/// Each rule is scored by the first of its selectors, in stored order, that
/// matches the element. That is not necessarily the rule's most specific
/// matching selector; the stylesheet parser stores selectors most specific
/// first so the two agree for parsed rules.
fn cascade(element: &ElementData, stylesheet: &Stylesheet) -> PropertyMap {
    let mut matched: Vec<MatchedRule<'_>> = stylesheet
        .rules
        .iter()
        .filter_map(|rule| {
            rule.first_match(element).map(|selector| MatchedRule {
                specificity: selector.specificity(),
                rule,
            })
        })
        .collect();

    // [§ 6.4.3 Specificity](https://www.w3.org/TR/css-cascade-4/#cascade-specificity)
    // Lower first, so later ones override. The sort is stable, so equal
    // specificity keeps source order.
    matched.sort_by_key(|m| m.specificity);

    let mut properties = PropertyMap::new();
    for m in matched {
        for declaration in m.rule.declarations() {
            let _ = properties.insert(declaration.name.clone(), declaration.value.clone());
        }
    }
    properties
}
