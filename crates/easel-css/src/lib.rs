//! Stylesheet model, cascade, layout engine, and display list for the Easel renderer.
//!
//! # Scope
//!
//! This crate implements the middle of the pipeline:
//! - **Values and Selectors** - typed declaration values with a canonical text
//!   form, compound selectors, and [specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
//! - **Stylesheet Parser** - rules of comma separated selectors and
//!   `name: value;` declarations
//! - **Cascade** - one fully resolved property map per markup node
//! - **Layout Engine** - block formatting with the CSS 2.1 width constraint
//!   solver and anonymous boxes around inline runs
//! - **Painting** - a FIFO display list of solid rectangles
//!
//! # Not Supported
//!
//! - Combinators, attribute selectors, pseudo-classes
//! - Inheritance, shorthand expansion, `!important`
//! - Inline formatting (inline boxes keep zero geometry), floats, flex, grid
//! - Text painting

/// Cascade and styled tree per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;
/// Stylesheet parse errors.
pub mod error;
/// Box tree and block layout per [CSS 2.1 § 10](https://www.w3.org/TR/CSS2/visudet.html).
pub mod layout;
/// Display list and painting per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// Stylesheet parser.
pub mod parser;
/// Compound selectors and specificity per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Rules, declarations, and stylesheets.
pub mod stylesheet;
/// Declaration values.
pub mod values;

// Re-exports for convenience
pub use cascade::{PropertyMap, StyledNode, compute_styles};
pub use error::ParseError;
pub use layout::{BoxDimensions, DisplayType, EdgeSizes, LayoutBox, Rect, StyledBox};
pub use paint::{DisplayCommand, DisplayList, paint};
pub use parser::{CSSParser, parse_value};
pub use selector::{Selector, Specificity};
pub use stylesheet::{Declaration, Rule, Stylesheet};
pub use values::{ColorValue, Unit, Value, format_number};
