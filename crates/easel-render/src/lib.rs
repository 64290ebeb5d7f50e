//! Rendering pipeline for the Easel renderer.
//!
//! # Scope
//!
//! This crate ties the pipeline together and owns its last stage:
//! - **Canvas** - a software rasterizer compositing solid rectangles with
//!   [source-over](https://www.w3.org/TR/compositing-1/#porterduffcompositingoperators_srcover)
//! - **Pipeline** - markup and stylesheet text in, pixels out
//!
//! ```text
//! HTML ─┐
//!       ├─ Style → Layout → Paint → Canvas
//! CSS ──┘
//! ```
//!
//! The component crates are re-exported so a caller only needs this one.

/// Software rasterizer.
pub mod canvas;

pub use canvas::{Canvas, Pixel};

// Re-export component crates
pub use easel_css as css;
pub use easel_dom as dom;
pub use easel_html as html;

use easel_common::warning::clear_warnings;
use easel_css::{CSSParser, LayoutBox, Rect, Stylesheet, compute_styles, paint};
use easel_dom::Node;
use easel_html::HTMLParser;
use thiserror::Error;

/// Errors produced while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The markup did not parse.
    #[error("markup: {0}")]
    Markup(#[from] easel_html::ParseError),

    /// The stylesheet did not parse.
    #[error("stylesheet: {0}")]
    Stylesheet(#[from] easel_css::ParseError),

    /// Pixel data does not fill an image of the canvas dimensions.
    #[error("pixel buffer does not fit a {width}x{height} image")]
    BufferSize {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },

    /// The image could not be encoded or written.
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
}

/// Viewport and canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RenderConfig {
    /// Create a config for a `width`×`height` frame.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The frame as a rectangle at the origin. Layout starts from this.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Output of a render.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The laid-out box tree. `None` if the root generated no box.
    pub layout: Option<LayoutBox>,
    /// The painted frame.
    pub canvas: Canvas,
}

/// Style, lay out, and paint a parsed document.
///
/// A root with `display: none` yields no layout and a blank canvas.
#[must_use]
#[tracing::instrument(skip(markup, stylesheet))]
pub fn render_document(markup: Node, stylesheet: &Stylesheet, config: &RenderConfig) -> Rendered {
    let styled = compute_styles(markup, stylesheet);
    let mut layout = LayoutBox::build(styled);
    let mut canvas = Canvas::new(config.width, config.height);

    if let Some(root) = layout.as_mut() {
        root.layout_root(config.viewport());
        let display_list = paint(root);
        tracing::debug!(
            boxes = root.count(),
            commands = display_list.len(),
            "painted"
        );
        canvas.render_list(display_list);
    } else {
        tracing::debug!("root generated no box");
    }

    Rendered { layout, canvas }
}

/// Parse markup and stylesheet text, then render them.
///
/// Clears the once-only warning log first, so each document reports its own
/// warnings.
///
/// # Errors
///
/// Returns [`RenderError::Markup`] or [`RenderError::Stylesheet`] if either
/// input fails to parse.
pub fn render_source(html: &str, css: &str, config: &RenderConfig) -> Result<Rendered, RenderError> {
    clear_warnings();
    let markup = HTMLParser::new(html).parse()?;
    let stylesheet = CSSParser::new(css).parse_stylesheet()?;
    Ok(render_document(markup, &stylesheet, config))
}
