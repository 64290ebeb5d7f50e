//! Declaration values.
//!
//! [CSS Values Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Values are a closed set of variants with one canonical text form each.
//! Numbers print with at most six fractional digits and no trailing zeros,
//! so printing is a fixed point: parsing a printed value and printing it
//! again gives the same text.

use std::fmt;

use serde::Serialize;

/// A length unit suffix.
///
/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Only `px` has a defined meaning in layout. The others are carried through
/// the cascade and printed faithfully.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
pub enum Unit {
    /// Pixels.
    #[strum(serialize = "px")]
    #[serde(rename = "px")]
    Px,
    /// Relative to the element's font size.
    #[strum(serialize = "em")]
    #[serde(rename = "em")]
    Em,
    /// Relative to the root font size.
    #[strum(serialize = "rem")]
    #[serde(rename = "rem")]
    Rem,
    /// Percent of the viewport width.
    #[strum(serialize = "vw")]
    #[serde(rename = "vw")]
    Vw,
    /// Percent of the viewport height.
    #[strum(serialize = "vh")]
    #[serde(rename = "vh")]
    Vh,
    /// A percentage.
    #[strum(serialize = "%")]
    #[serde(rename = "%")]
    Percent,
}

impl Unit {
    /// Every unit, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Px,
        Self::Em,
        Self::Rem,
        Self::Vw,
        Self::Vh,
        Self::Percent,
    ];
}

/// An RGBA color.
///
/// [§ 4.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorValue {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
    /// Alpha. 1 is opaque.
    pub a: f64,
}

impl ColorValue {
    /// Create a color from channels and alpha.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_number(self.a)
        )
    }
}

/// A declaration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// A keyword or any other text, printed verbatim.
    Text(String),
    /// A number with a unit suffix.
    Unit(f64, Unit),
    /// A color.
    Color(ColorValue),
}

impl Value {
    /// A keyword value such as `auto` or `block`.
    #[must_use]
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A length in pixels.
    #[must_use]
    pub const fn px(magnitude: f64) -> Self {
        Self::Unit(magnitude, Unit::Px)
    }

    /// `0px`, the default for lengths nobody specified.
    #[must_use]
    pub const fn zero() -> Self {
        Self::px(0.0)
    }

    /// Canonical text form.
    ///
    /// ```
    /// use easel_css::{ColorValue, Unit, Value};
    ///
    /// assert_eq!(Value::Unit(15.4, Unit::Px).print(), "15.4px");
    /// assert_eq!(Value::Unit(1.0, Unit::Percent).print(), "1%");
    /// assert_eq!(Value::Color(ColorValue::new(1, 2, 3, 0.5)).print(), "rgba(1, 2, 3, 0.5)");
    /// ```
    #[must_use]
    pub fn print(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Unit(magnitude, unit) => format!("{}{unit}", format_number(*magnitude)),
            Self::Color(color) => color.to_string(),
        }
    }

    /// The magnitude of a unit value, 0 for anything else.
    #[must_use]
    pub const fn unit_value(&self) -> f64 {
        match self {
            Self::Unit(magnitude, _) => *magnitude,
            Self::Text(_) | Self::Color(_) => 0.0,
        }
    }

    /// True if the canonical form equals `text`.
    #[must_use]
    pub fn is(&self, text: &str) -> bool {
        self.print() == text
    }

    /// The color, if this is a color value.
    #[must_use]
    pub const fn as_color(&self) -> Option<ColorValue> {
        match self {
            Self::Color(color) => Some(*color),
            Self::Text(_) | Self::Unit(..) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

/// Print a number with up to six fractional digits, dropping trailing zeros
/// and a trailing decimal point.
///
/// ```
/// use easel_css::format_number;
///
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let fixed = format!("{value:.6}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
