//! Minimal markup parser for the Easel renderer.
//!
//! # Scope
//!
//! This crate implements a strict, well-formed subset of HTML:
//! - Elements with `name="value"` attributes and explicit closing tags
//! - Text runs and `<!-- ... -->` comments
//! - An implicit `<html>` root when the document does not provide exactly one
//!
//! # Not Supported
//!
//! - Void or self-closing elements
//! - Unquoted or single-quoted attribute values
//! - Character references
//! - DOCTYPE and error recovery

/// Parse errors.
pub mod error;
/// Recursive-descent markup parser.
pub mod parser;

pub use error::ParseError;
pub use parser::HTMLParser;
