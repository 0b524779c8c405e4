//! Deduplicated warnings for unsupported input.
//!
//! The engine never fails on input it cannot express (attribute selectors,
//! child combinators, ...). It reports them once through the `log` facade
//! so repeated rules do not spam the output.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about unsupported input (emits once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("CSS", "child combinator in 'ul > li' is not supported");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        log::warn!(target: "plume", "[{component}] {message}");
    }
}

/// Clear all recorded warnings (call before processing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
