//! Markup tree for the Easel renderer.
//!
//! The tree is a plain owned hierarchy: every [`Node`] owns its children.
//! Pipeline stages take the tree by value and move nodes into their own
//! structures instead of sharing them.

pub mod printer;

use serde::Serialize;

pub use printer::print_tree;

/// Attributes of an element, in the order they were first inserted.
///
/// Re-inserting an existing name keeps the original value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributesMap {
    entries: Vec<(String, String)>,
}

impl AttributesMap {
    /// Create an empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an attribute unless one with the same name already exists.
    ///
    /// Returns `true` if the attribute was added.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, value.into()));
        true
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// True if an attribute with `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributesMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            let _ = attrs.insert(name, value);
        }
        attrs
    }
}

/// A node of the markup tree together with its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// What kind of node this is.
    pub node_type: NodeType,
    /// Child nodes in document order. Always empty for text and comments.
    pub children: Vec<Node>,
}

/// The kind of a markup node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NodeType {
    /// An element with a tag name and attributes.
    Element(ElementData),
    /// A run of character data.
    Text(String),
    /// A `<!-- ... -->` comment.
    Comment(String),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementData {
    /// The element's tag name, as written in the source.
    pub tag_name: String,
    /// The element's attributes in source order.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data for `tag_name`.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, attrs: AttributesMap) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs,
        }
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Returns the class names from the class attribute.
    ///
    /// The attribute is split on ASCII whitespace, so repeated separators
    /// never produce empty class names.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attrs
            .get("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    /// True if the class attribute lists `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }
}

impl Node {
    /// Create an element node.
    #[must_use]
    pub fn element(tag_name: impl Into<String>, attrs: AttributesMap, children: Vec<Self>) -> Self {
        Self {
            node_type: NodeType::Element(ElementData::new(tag_name, attrs)),
            children,
        }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Text(content.into()),
            children: Vec::new(),
        }
    }

    /// Create a comment node.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Comment(content.into()),
            children: Vec::new(),
        }
    }

    /// Element data, if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match &self.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Text(_) | NodeType::Comment(_) => None,
        }
    }

    /// True if this node is an element with the given tag name.
    #[must_use]
    pub fn is(&self, tag_name: &str) -> bool {
        self.as_element()
            .is_some_and(|data| data.tag_name == tag_name)
    }
}
