//! Rules, declarations, and stylesheets.
//!
//! The `Display` impls here produce the canonical stylesheet text:
//!
//! ```text
//! div#a.c, span {
//!     color: rgba(0, 0, 0, 1);
//! }
//!
//! ```
//!
//! with a tab before each declaration and a blank line after every rule.

use std::fmt;

use easel_dom::ElementData;
use serde::Serialize;

use crate::selector::Selector;
use crate::values::Value;

/// A single `name: value` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// Property name, e.g. `margin-left`.
    pub name: String,
    /// Property value.
    pub value: Value,
}

impl Declaration {
    /// Create a declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// A style rule: selectors sharing one declaration block.
///
/// Each selector independently carries the whole block. Declarations apply
/// in order, so a later declaration of a property overrides an earlier one
/// from the same rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    selectors: Vec<Selector>,
    declarations: Vec<Declaration>,
}

impl Rule {
    /// Create a rule. Selectors keep the order given.
    #[must_use]
    pub const fn new(selectors: Vec<Selector>, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }

    /// The rule's selectors in stored order.
    #[must_use]
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// The rule's declarations in source order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// The first selector, in stored order, that matches `element`.
    #[must_use]
    pub fn first_match(&self, element: &ElementData) -> Option<&Selector> {
        self.selectors
            .iter()
            .find(|selector| selector.matches(element))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{selector}")?;
        }
        f.write_str(" {\n")?;
        for declaration in &self.declarations {
            writeln!(f, "\t{declaration}")?;
        }
        f.write_str("}\n\n")
    }
}

/// An ordered list of rules. Source order breaks specificity ties.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Stylesheet {
    /// Rules in source order.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Create a stylesheet from rules.
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
