//! Layout engine.
//!
//! Turns the styled tree into a box tree and computes block geometry per the
//! [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html).
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`display`] - The `display` keyword
//! - [`layout_box`] - Box tree construction and block layout
//! - [`values`] - Lengths that may be `auto`

pub mod box_model;
pub mod display;
pub mod layout_box;
pub mod values;

// Re-exports for convenience
pub use box_model::{BoxDimensions, EdgeSizes, Rect};
pub use display::DisplayType;
pub use layout_box::{LayoutBox, StyledBox};
pub use values::AutoOr;
