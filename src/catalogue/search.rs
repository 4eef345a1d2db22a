//! Search string filtering for catalogue name lookups

use crate::io::configuration::SEARCH_EXTRA_CHARACTERS;
use std::cmp::Ordering;

fn is_search_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || SEARCH_EXTRA_CHARACTERS.contains(&c)
}

/// Longest prefix of `search` made only of permitted characters
///
/// Filtering stops at the first character outside `[A-Za-z0-9 _.-]`.
pub fn sanitize_search(search: &str) -> &str {
    let end = search
        .char_indices()
        .find(|&(_, c)| !is_search_character(c))
        .map_or(search.len(), |(index, _)| index);
    search.get(..end).unwrap_or_default()
}

/// Whether a catalogue name is selected by a search string
///
/// An empty search, or one whose sanitized prefix is empty, selects every
/// name. Otherwise names must start with the sanitized prefix, ignoring ASCII
/// case.
pub fn matches(name: &str, search: &str) -> bool {
    let prefix = sanitize_search(search);
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Order catalogue names ignoring ASCII case, falling back to byte order
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
        .then_with(|| a.cmp(b))
}
