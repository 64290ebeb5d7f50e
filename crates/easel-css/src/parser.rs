//! Stylesheet parser.
//!
//! A small recursive-descent parser over [`Cursor`]. Whitespace and
//! `/* ... */` comments may appear between any two tokens.
//!
//! ```text
//! stylesheet  := rule*
//! rule        := selector ("," selector)* "{" declaration* "}"
//! selector    := ( tag | "#" ident | "." ident | "*" )*
//! declaration := name ":" value ";"?
//! value       := number unit? | "rgb(" ... ")" | "rgba(" ... ")" | "#" hex | ident
//! ```

use easel_common::Cursor;
use easel_common::warning::warn_once;

use crate::ParseError;
use crate::selector::Selector;
use crate::stylesheet::{Declaration, Rule, Stylesheet};
use crate::values::{ColorValue, Unit, Value};

/// Parses stylesheet text into a [`Stylesheet`].
///
/// Each rule's selectors are stored ordered by decreasing specificity, ties
/// keeping source order, so the first matching selector of a parsed rule is
/// also its most specific matching selector.
///
/// ```
/// use easel_css::CSSParser;
///
/// let sheet = CSSParser::new("span, #id.c { color: #ff0000 }").parse_stylesheet().unwrap();
/// assert_eq!(sheet.to_string(), "#id.c, span {\n\tcolor: rgba(255, 0, 0, 1);\n}\n\n");
/// ```
pub struct CSSParser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> CSSParser<'a> {
    /// Create a parser over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Parse every rule in the input.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first malformed selector, declaration,
    /// or value.
    pub fn parse_stylesheet(mut self) -> Result<Stylesheet, ParseError> {
        let mut rules = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            if self.cursor.is_eof() {
                break;
            }
            rules.push(self.parse_rule()?);
        }
        tracing::debug!(rules = rules.len(), "parsed stylesheet");
        Ok(Stylesheet::new(rules))
    }

    fn parse_rule(&mut self) -> Result<Rule, ParseError> {
        let selectors = self.parse_selectors()?;
        let declarations = self.parse_declarations()?;
        Ok(Rule::new(selectors, declarations))
    }

    /// Parse a comma separated selector list, up to but not including `{`.
    fn parse_selectors(&mut self) -> Result<Vec<Selector>, ParseError> {
        let mut selectors = Vec::new();
        let mut current = Selector::universal();
        let mut pending = false;
        loop {
            self.skip_whitespace_and_comments();
            let position = self.cursor.position();
            match self.cursor.peek() {
                None => return Err(ParseError::UnexpectedEof { expected: "{" }),
                Some('{') => break,
                Some(',') => {
                    self.cursor.bump();
                    selectors.push(std::mem::take(&mut current));
                    pending = false;
                    continue;
                }
                Some('#') => {
                    self.cursor.bump();
                    current.set_id(self.parse_identifier("id")?);
                }
                Some('.') => {
                    self.cursor.bump();
                    current.add_class(self.parse_identifier("class name")?);
                }
                Some('*') => self.cursor.bump(),
                Some(c) if is_identifier_char(c) => {
                    current.set_tag(self.parse_identifier("tag name")?);
                }
                Some(found) => return Err(ParseError::UnexpectedChar { found, position }),
            }
            pending = true;
        }
        if pending {
            selectors.push(current);
        }

        // Stable, so equally specific selectors keep their source order.
        selectors.sort_by(|a, b| b.specificity().cmp(&a.specificity()));
        Ok(selectors)
    }

    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        self.expect("{")?;
        let mut declarations = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            if self.cursor.eat("}") {
                return Ok(declarations);
            }
            if self.cursor.is_eof() {
                return Err(ParseError::UnexpectedEof { expected: "}" });
            }
            declarations.push(self.parse_declaration()?);
        }
    }

    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let position = self.cursor.position();
        let name = self
            .cursor
            .consume_while(|c| c.is_ascii_alphabetic() || c == '-');
        if name.is_empty() {
            return Err(ParseError::Expected {
                expected: "property name",
                position,
            });
        }
        self.skip_whitespace_and_comments();
        self.expect(":")?;
        self.skip_whitespace_and_comments();
        let value = self.parse_value()?;
        self.skip_whitespace_and_comments();
        if !self.cursor.eat(";") && !self.cursor.starts_with("}") {
            return Err(ParseError::Expected {
                expected: ";",
                position: self.cursor.position(),
            });
        }
        Ok(Declaration::new(name, value))
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let position = self.cursor.position();
        if self.at_number() {
            self.parse_length()
        } else if self.cursor.starts_with("rgb") {
            self.parse_rgb()
        } else if self.cursor.starts_with("#") {
            self.parse_hex_color()
        } else {
            let text = self.cursor.consume_while(is_identifier_char);
            if text.is_empty() {
                return Err(ParseError::Expected {
                    expected: "value",
                    position,
                });
            }
            Ok(Value::keyword(text))
        }
    }

    fn at_number(&self) -> bool {
        let mut chars = self.cursor.rest().chars();
        match chars.next() {
            Some('-' | '+') => chars.next().is_some_and(|c| c.is_ascii_digit() || c == '.'),
            Some(c) => c.is_ascii_digit() || c == '.',
            None => false,
        }
    }

    /// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
    ///
    /// A missing unit reads as `px`. An unknown unit warns and also reads as
    /// `px`, keeping the magnitude.
    fn parse_length(&mut self) -> Result<Value, ParseError> {
        let magnitude = self.parse_number()?;
        let suffix = self
            .cursor
            .consume_while(|c| c.is_ascii_alphabetic() || c == '%');
        let unit = if suffix.is_empty() {
            Unit::Px
        } else {
            suffix.parse().unwrap_or_else(|_| {
                warn_once("CSS", &format!("unknown unit '{suffix}' read as px"));
                Unit::Px
            })
        };
        Ok(Value::Unit(magnitude, unit))
    }

    fn parse_number(&mut self) -> Result<f64, ParseError> {
        let start = self.cursor.position();
        if !self.cursor.eat("-") {
            let _ = self.cursor.eat("+");
        }
        let _ = self
            .cursor
            .consume_while(|c| c.is_ascii_digit() || c == '.');
        let text = self.cursor.since(start);
        text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            text: text.to_string(),
            position: start,
        })
    }

    /// [§ 4.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    ///
    /// `rgb(r, g, b)` is opaque. `rgba(r, g, b, a)` takes a fractional alpha.
    /// Channels above 255 clamp.
    fn parse_rgb(&mut self) -> Result<Value, ParseError> {
        let position = self.cursor.position();
        let has_alpha = self.cursor.eat("rgba");
        if !has_alpha {
            let _ = self.cursor.eat("rgb");
        }
        self.skip_whitespace_and_comments();
        self.expect("(")?;

        let mut channels = [0_u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            self.skip_whitespace_and_comments();
            let digits = self.cursor.consume_while(|c| c.is_ascii_digit());
            let value = digits
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidColor { position })?;
            *channel = u8::try_from(value).unwrap_or(u8::MAX);
            self.skip_whitespace_and_comments();
            if i < 2 || has_alpha {
                self.expect(",")?;
            }
        }

        let alpha = if has_alpha {
            self.skip_whitespace_and_comments();
            self.parse_number()?
        } else {
            1.0
        };
        self.skip_whitespace_and_comments();
        self.expect(")")?;

        let [r, g, b] = channels;
        Ok(Value::Color(ColorValue::new(r, g, b, alpha)))
    }

    /// `#rgb` or `#rrggbb`, always opaque.
    fn parse_hex_color(&mut self) -> Result<Value, ParseError> {
        let position = self.cursor.position();
        let _ = self.cursor.eat("#");
        let digits = self.cursor.consume_while(|c| c.is_ascii_alphanumeric());
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(ParseError::InvalidColor { position }),
        };
        let rgb = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ParseError::InvalidColor { position })?;
        let [_, r, g, b] = rgb.to_be_bytes();
        Ok(Value::Color(ColorValue::rgb(r, g, b)))
    }

    fn parse_identifier(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        let position = self.cursor.position();
        let ident = self.cursor.consume_while(is_identifier_char);
        if ident.is_empty() {
            return Err(ParseError::Expected { expected, position });
        }
        Ok(ident)
    }

    fn expect(&mut self, token: &'static str) -> Result<(), ParseError> {
        if self.cursor.eat(token) {
            Ok(())
        } else if self.cursor.is_eof() {
            Err(ParseError::UnexpectedEof { expected: token })
        } else {
            Err(ParseError::Expected {
                expected: token,
                position: self.cursor.position(),
            })
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.skip_whitespace();
            if !self.cursor.eat("/*") {
                return;
            }
            let _ = self.cursor.consume_until("*/");
            let _ = self.cursor.eat("*/");
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Parse a single value, such as `12.5px`, `rgba(1, 2, 3, 0.5)`, `#fff`, or
/// `block`.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is not exactly one value.
pub fn parse_value(input: &str) -> Result<Value, ParseError> {
    let mut parser = CSSParser::new(input);
    parser.skip_whitespace_and_comments();
    let value = parser.parse_value()?;
    parser.skip_whitespace_and_comments();
    if !parser.cursor.is_eof() {
        return Err(ParseError::TrailingInput {
            position: parser.cursor.position(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_forms() {
        assert_eq!(parse_value("1.0em"), Ok(Value::Unit(1.0, Unit::Em)));
        assert_eq!(parse_value("-.5vh"), Ok(Value::Unit(-0.5, Unit::Vh)));
        assert_eq!(parse_value("+3"), Ok(Value::px(3.0)));
        assert_eq!(parse_value("50%"), Ok(Value::Unit(50.0, Unit::Percent)));
    }

    #[test]
    fn test_bad_number() {
        assert!(matches!(
            parse_value("1.2.3px"),
            Err(ParseError::InvalidNumber { position: 0, .. })
        ));
    }

    #[test]
    fn test_identifier_starting_with_dash_is_text() {
        assert_eq!(parse_value("-webkit-box"), Ok(Value::keyword("-webkit-box")));
    }

    #[test]
    fn test_rgb_requires_three_channels() {
        assert_eq!(
            parse_value("rgb(1, 2)"),
            Err(ParseError::Expected {
                expected: ",",
                position: 8
            })
        );
        assert_eq!(
            parse_value("rgb(1, 2,)"),
            Err(ParseError::InvalidColor { position: 0 })
        );
    }
}
