//! Compound selectors and specificity.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//!
//! Only compound selectors are supported: an optional type selector, an
//! optional ID selector, and any number of class selectors, all of which must
//! match the same element. There are no combinators.

use std::fmt;

use easel_dom::ElementData;
use serde::Serialize;

/// [§ 17 Calculating a selector's specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// "A selector's specificity is calculated for a given element as follows:
/// - count the number of ID selectors in the selector (= A)
/// - count the number of class selectors, attributes selectors, and
///   pseudo-classes in the selector (= B)
/// - count the number of type selectors and pseudo-elements in the
///   selector (= C)"
///
/// Ordering is lexicographic: A first, then B, then C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

/// A compound selector such as `div#main.note.wide`.
///
/// Absent parts match anything, so `Selector::default()` is the universal
/// selector `*`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// The universal selector.
    #[must_use]
    pub fn universal() -> Self {
        Self::default()
    }

    /// Require the element's tag name.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.set_tag(tag);
        self
    }

    /// Require the element's id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Require a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Set or replace the required tag name.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = Some(tag.into());
    }

    /// Set or replace the required id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Add a required class. Duplicates collapse into one.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// The required tag name, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The required id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The required classes, in the order first added.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Specificity as (id present, class count, tag present).
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let classes = u32::try_from(self.classes.len()).unwrap_or(u32::MAX);
        Specificity(
            u32::from(self.id.is_some()),
            classes,
            u32::from(self.tag.is_some()),
        )
    }

    /// True if every part of the selector matches `element`.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        if self.tag.as_ref().is_some_and(|tag| *tag != element.tag_name) {
            return false;
        }
        if self.id.as_deref().is_some_and(|id| element.id() != Some(id)) {
            return false;
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.is_none() && self.id.is_none() && self.classes.is_empty() {
            return f.write_str("*");
        }
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}
