use easel_common::Cursor;
use easel_dom::{AttributesMap, Node};

use crate::ParseError;

/// Parses a markup document into a [`Node`] tree.
///
/// The grammar is a strict subset of HTML: every element must be closed by
/// a matching end tag and attribute values must be double-quoted. Text and
/// comment contents lose their surrounding whitespace.
///
/// ```
/// use easel_html::HTMLParser;
///
/// let root = HTMLParser::new("<div id=\"a\">hi</div>").parse().unwrap();
/// assert!(root.is("html"));
/// assert!(root.children[0].is("div"));
/// ```
pub struct HTMLParser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> HTMLParser<'a> {
    /// Create a parser over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Parse the whole document.
    ///
    /// A document consisting of exactly one `html` element is returned as is.
    /// Anything else is wrapped in a synthetic `html` element.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for malformed tags, unterminated comments,
    /// or closing tags that do not match their element.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        let mut nodes = self.parse_children()?;
        if !self.cursor.is_eof() {
            return Err(ParseError::UnexpectedClosingTag {
                position: self.cursor.position(),
            });
        }
        tracing::debug!(top_level = nodes.len(), "parsed markup");

        if nodes.len() == 1 && nodes[0].is("html") {
            if let Some(root) = nodes.pop() {
                return Ok(root);
            }
        }
        Ok(Node::element("html", AttributesMap::new(), nodes))
    }

    /// Parse sibling nodes until end of input or the next closing tag.
    fn parse_children(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() || self.cursor.starts_with("</") {
                return Ok(nodes);
            }
            nodes.push(self.parse_node()?);
        }
    }

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        if self.cursor.starts_with("<!--") {
            self.parse_comment()
        } else if self.cursor.starts_with("<") {
            self.parse_element()
        } else {
            Ok(self.parse_text())
        }
    }

    fn parse_text(&mut self) -> Node {
        let text = self.cursor.consume_until("<");
        Node::text(text.trim_end())
    }

    fn parse_comment(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let _ = self.cursor.eat("<!--");
        self.cursor.skip_whitespace();
        let text = self.cursor.consume_until("-->");
        if !self.cursor.eat("-->") {
            return Err(ParseError::UnterminatedComment { position: start });
        }
        Ok(Node::comment(text.trim_end()))
    }

    fn parse_element(&mut self) -> Result<Node, ParseError> {
        self.expect("<", "'<'")?;
        self.cursor.skip_whitespace();
        let tag_name = self.parse_tag_name()?;
        let attrs = self.parse_attributes()?;
        self.cursor.skip_whitespace();
        self.expect(">", "'>'")?;

        let children = self.parse_children()?;

        self.expect("</", "closing tag")?;
        self.cursor.skip_whitespace();
        let position = self.cursor.position();
        let closing = self.cursor.consume_while(char::is_alphanumeric);
        if closing != tag_name {
            return Err(ParseError::MismatchedClosingTag {
                expected: tag_name.to_string(),
                found: closing.to_string(),
                position,
            });
        }
        self.cursor.skip_whitespace();
        self.expect(">", "'>'")?;

        Ok(Node::element(tag_name, attrs, children))
    }

    fn parse_tag_name(&mut self) -> Result<&'a str, ParseError> {
        let position = self.cursor.position();
        let name = self.cursor.consume_while(char::is_alphanumeric);
        if name.is_empty() {
            return Err(ParseError::Expected {
                expected: "tag name",
                position,
            });
        }
        Ok(name)
    }

    fn parse_attributes(&mut self) -> Result<AttributesMap, ParseError> {
        let mut attrs = AttributesMap::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() || self.cursor.starts_with(">") {
                return Ok(attrs);
            }
            let position = self.cursor.position();
            let name = self
                .cursor
                .consume_while(|c| c.is_alphanumeric() || c == '-' || c == '_');
            if name.is_empty() {
                return Err(ParseError::Expected {
                    expected: "attribute name",
                    position,
                });
            }
            self.expect("=\"", "'=\"'")?;
            let value = self.cursor.consume_until("\"");
            self.expect("\"", "closing '\"'")?;
            let _ = attrs.insert(name, value);
        }
    }

    fn expect(&mut self, token: &str, expected: &'static str) -> Result<(), ParseError> {
        if self.cursor.eat(token) {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected,
                position: self.cursor.position(),
            })
        }
    }
}
