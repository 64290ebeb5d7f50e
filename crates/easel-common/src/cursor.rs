//! Character cursor shared by the markup and stylesheet parsers.
//!
//! The cursor only moves forward. Positions are byte offsets into the input
//! and are what parse errors report.

/// A forward-only scanner over a borrowed string.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// True once every character has been consumed.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// The unconsumed tail of the input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// The input consumed since byte offset `start`.
    ///
    /// `start` must be a position previously reported by this cursor.
    #[must_use]
    pub fn since(&self, start: usize) -> &'a str {
        self.input.get(start..self.position).unwrap_or_default()
    }

    /// Look at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// True if the next character satisfies `predicate`.
    pub fn peek_is(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.peek().is_some_and(predicate)
    }

    /// True if the unconsumed input starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume and return the next character.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consume the next character, if any.
    pub fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    /// Consume `expected` if the input starts with it.
    ///
    /// Returns whether anything was consumed.
    pub fn eat(&mut self, expected: &str) -> bool {
        if self.starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    /// Consume characters while `predicate` holds and return them.
    pub fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(rest.len(), |(i, _)| i);
        self.position += len;
        &rest[..len]
    }

    /// Consume everything up to (not including) `terminator`, or to the end
    /// of input if it never appears.
    pub fn consume_until(&mut self, terminator: &str) -> &'a str {
        let rest = self.rest();
        let len = rest.find(terminator).unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }

    /// Skip any whitespace.
    pub fn skip_whitespace(&mut self) {
        let _ = self.consume_while(char::is_whitespace);
    }
}
