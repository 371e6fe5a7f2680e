//! Recoverable conditions reported on stderr.
//!
//! The markup engine warns rather than fails in two places: a `TagSpec`
//! naming an element outside the known tag set, and a specialized rule whose
//! pattern does not compile (the rewrite is then skipped). Bulk rewrites hit
//! the same condition once per pass, so each message is printed only once.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Keys of every warning printed since the last [`clear_warnings`].
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Build the deduplication key for a warning.
fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Print `message` under `component` unless the same pair was already
/// printed.
///
/// # Example
/// ```ignore
/// warn_once("Tags", "`widget` is not a known HTML tag; matching it literally");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = warning_key(component, message);
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[Quill {component}] ⚠ {message}{RESET}");
    }
}

/// Returns true if this exact warning has been emitted since the last clear.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Forget every printed warning, so each may be reported again.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_warnings_forgets_messages() {
        warn_once("Test", "cleared");
        assert!(has_warned("Test", "cleared"));
        clear_warnings();
        assert!(!has_warned("Test", "cleared"));
    }
}
