//! Lengths that may be `auto`.

use easel_common::warning::warn_once;

use crate::values::{Unit, Value};

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// "Some properties can take the keyword 'auto' as a value. This keyword
/// allows the user agent to compute the value based on other properties."
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AutoOr {
    /// The value is 'auto' and must be resolved during layout.
    #[default]
    Auto,
    /// The value is a specific length in pixels.
    Length(f64),
}

impl AutoOr {
    /// Read a declared value. The keyword `auto` stays auto, anything else
    /// is a length (see [`to_px`]).
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        if value.is("auto") {
            Self::Auto
        } else {
            Self::Length(to_px(value))
        }
    }

    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The length, or `default` if auto.
    #[must_use]
    pub const fn to_px_or(&self, default: f64) -> f64 {
        match self {
            Self::Auto => default,
            Self::Length(px) => *px,
        }
    }
}

/// The pixel length of a declared value.
///
/// Units other than `px` are not resolved: their magnitude is used as is,
/// with a one-time warning. Non-length values count as 0.
#[must_use]
pub fn to_px(value: &Value) -> f64 {
    if let Value::Unit(magnitude, unit) = value {
        if *unit != Unit::Px {
            warn_once(
                "Layout",
                &format!("'{unit}' lengths are laid out as pixels"),
            );
        }
        *magnitude
    } else {
        0.0
    }
}
