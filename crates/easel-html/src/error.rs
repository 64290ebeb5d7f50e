use thiserror::Error;

/// Why a markup document could not be parsed.
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
    /// A comment was opened but never closed.
    #[error("unterminated comment starting at byte {position}")]
    UnterminatedComment {
        /// Where the comment started.
        position: usize,
    },
    /// A closing tag names a different element than the open one.
    #[error("closing tag </{found}> does not match <{expected}> at byte {position}")]
    MismatchedClosingTag {
        /// Tag name of the open element.
        expected: String,
        /// Tag name in the closing tag.
        found: String,
        /// Where the closing tag name starts.
        position: usize,
    },
    /// A closing tag appeared with no element open.
    #[error("unexpected closing tag at byte {position}")]
    UnexpectedClosingTag {
        /// Where the closing tag starts.
        position: usize,
    },
}
