//! Common utilities for the Easel renderer.
//!
//! This crate provides shared infrastructure used by every pipeline stage:
//! - **Warning System** - colored, deduplicated terminal output for input the
//!   renderer accepts but does not fully honor
//! - **Cursor** - the character scanner behind the markup and stylesheet parsers

pub mod cursor;
pub mod warning;

pub use cursor::Cursor;
