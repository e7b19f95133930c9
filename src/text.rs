//! Text scanning helpers built on [`regex`].

use regex::{Captures, Regex};

/// Matches `pattern` against `input` and converts the captures with `pull`, or returns `None` if not matched.
pub fn pull_out<'h, T>(
    input: &'h str,
    pattern: &Regex,
    pull: impl FnOnce(&Captures<'h>) -> T,
) -> Option<T> {
    pattern.captures(input).map(|captures| pull(&captures))
}

/// Returns the named group if it matched a non-empty text.
pub fn named<'h>(captures: &Captures<'h>, name: &str) -> Option<&'h str> {
    captures
        .name(name)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}
