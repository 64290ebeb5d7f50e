//! Software rasterizer.
//!
//! Executes a `DisplayList` against a buffer of normalized RGBA pixels.
//!
//! # Architecture
//!
//! The canvas is the final stage in the pipeline:
//!
//! ```text
//! Style → Layout → Paint → Render
//!                    ↓        ↓
//!              DisplayList → Pixels
//! ```
//!
//! The canvas knows nothing about CSS, layout, or markup. It simply executes
//! drawing commands from the display list.

use std::path::Path;

use easel_css::{ColorValue, DisplayCommand, DisplayList, LayoutBox, Rect, paint};
use image::RgbaImage;

use crate::RenderError;

/// One pixel, every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha. 0 is fully transparent.
    pub a: f64,
}

impl Pixel {
    /// The initial canvas pixel: white channels at zero alpha.
    pub const BLANK: Self = Self::new(1.0, 1.0, 1.0, 0.0);

    /// Result of compositing two fully transparent pixels.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a pixel from normalized channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Normalize a color. Alpha outside `[0, 1]` is clamped.
    #[must_use]
    pub fn from_color(color: &ColorValue) -> Self {
        Self::new(
            f64::from(color.r) / 255.0,
            f64::from(color.g) / 255.0,
            f64::from(color.b) / 255.0,
            color.a.clamp(0.0, 1.0),
        )
    }

    /// [Compositing and Blending § 5.1 Simple alpha compositing](https://www.w3.org/TR/compositing-1/#simplealphacompositing)
    ///
    /// Porter-Duff source-over with `self` as the backdrop:
    ///
    /// ```text
    /// αo = 1 - (1 - αb)(1 - αs)
    /// Co = (Cb·αb·(1 - αs) + Cs·αs) / αo
    /// ```
    #[must_use]
    pub fn over(self, source: Self) -> Self {
        let alpha = 1.0 - (1.0 - self.a) * (1.0 - source.a);
        if alpha <= 0.0 {
            return Self::TRANSPARENT;
        }
        let backdrop_weight = self.a * (1.0 - source.a) / alpha;
        let source_weight = source.a / alpha;
        let blend = |backdrop: f64, src: f64| backdrop * backdrop_weight + src * source_weight;
        Self::new(
            blend(self.r, source.r),
            blend(self.g, source.g),
            blend(self.b, source.b),
            alpha,
        )
    }

    /// The pixel as `[R, G, B, A]` bytes.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b),
            channel_byte(self.a),
        ]
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Truncate a rectangle edge to a pixel coordinate within `[0, max]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_edge(edge: f64, max: u32) -> u32 {
    // Float to int `as` saturates, so negatives and NaN become 0.
    (edge.trunc() as u32).min(max)
}

/// A width×height buffer of pixels, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Create a canvas with every pixel set to [`Pixel::BLANK`].
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::BLANK; width as usize * height as usize],
        }
    }

    /// Paint a laid-out box tree onto a canvas the size of `frame`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_layout(root: &LayoutBox, frame: Rect) -> Self {
        let mut canvas = Self::new(frame.width as u32, frame.height as u32);
        canvas.render_list(paint(root));
        canvas
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The pixel at `(x, y)`, if inside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(x as usize + y as usize * self.width as usize)
            .copied()
    }

    /// Drain the display list, executing commands front to back.
    #[tracing::instrument(skip_all, fields(commands = display_list.len()))]
    pub fn render_list(&mut self, mut display_list: DisplayList) {
        while let Some(command) = display_list.pop() {
            self.render(&command);
        }
    }

    /// Execute a single display command.
    pub fn render(&mut self, command: &DisplayCommand) {
        match command {
            DisplayCommand::Rectangle { rect, color } => self.fill_rect(rect, color),
        }
    }

    /// Composite `color` over every pixel the rectangle covers.
    ///
    /// Edges are truncated to whole pixels and clamped to the canvas.
    fn fill_rect(&mut self, rect: &Rect, color: &ColorValue) {
        let source = Pixel::from_color(color);
        let x0 = pixel_edge(rect.x, self.width) as usize;
        let y0 = pixel_edge(rect.y, self.height) as usize;
        let x1 = pixel_edge(rect.x + rect.width, self.width) as usize;
        let y1 = pixel_edge(rect.y + rect.height, self.height) as usize;
        let stride = self.width as usize;

        for y in y0..y1 {
            for pixel in &mut self.pixels[y * stride + x0..y * stride + x1.max(x0)] {
                *pixel = pixel.over(source);
            }
        }
    }

    /// The canvas as bytes: row-major, `[R, G, B, A]` per pixel.
    #[must_use]
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|pixel| pixel.to_bytes()).collect()
    }

    /// Convert to an `image` buffer for encoding.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::BufferSize`] if the pixel data does not fill a
    /// `width`×`height` image.
    pub fn to_image(&self) -> Result<RgbaImage, RenderError> {
        RgbaImage::from_raw(self.width, self.height, self.pixels()).ok_or(
            RenderError::BufferSize {
                width: self.width,
                height: self.height,
            },
        )
    }

    /// Encode the canvas to `path`. The format follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        self.to_image()?.save(path)?;
        Ok(())
    }
}
