use thiserror::Error;

/// Why a stylesheet or value could not be parsed.
///
/// Positions are byte offsets into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token was required but something else was found.
    #[error("expected {expected} at byte {position}")]
    Expected {
        /// Description of the missing token.
        expected: &'static str,
        /// Where it was expected.
        position: usize,
    },
    /// Input ended inside a rule.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was still required.
        expected: &'static str,
    },
    /// A character that cannot start any selector component.
    #[error("unexpected character {found:?} in selector at byte {position}")]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Where it was found.
        position: usize,
    },
    /// A numeric literal that does not parse as a number.
    #[error("invalid number {text:?} at byte {position}")]
    InvalidNumber {
        /// The literal text.
        text: String,
        /// Where it starts.
        position: usize,
    },
    /// A malformed `rgb()`, `rgba()`, or hex color.
    #[error("invalid color at byte {position}")]
    InvalidColor {
        /// Where the color starts.
        position: usize,
    },
    /// Text left over after a complete value.
    #[error("unexpected trailing input at byte {position}")]
    TrailingInput {
        /// Where the leftover text starts.
        position: usize,
    },
}
