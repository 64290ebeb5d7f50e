//! Renderer warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the stylesheet parser and the layout engine to report input that
//! is accepted but approximated.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about approximated input (prints once per unique message).
///
/// Every call is also forwarded to `tracing` at WARN level, so subscribers see
/// repeats that the terminal output suppresses.
///
/// # Example
/// ```
/// easel_common::warning::warn_once("CSS", "unknown unit 'pt' read as px");
/// ```
pub fn warn_once(component: &str, message: &str) {
    tracing::warn!(component, "{message}");

    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[Easel {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before rendering a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Number of distinct warnings printed since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map_or(0, HashSet::len)
}
