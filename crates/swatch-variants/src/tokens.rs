//! Class token merging.
//!
//! A class string is a whitespace-separated list of tokens. The styling
//! engine resolves conflicting utilities by source order, so merging keeps the
//! *last* occurrence of each token: a later fragment or a caller override that
//! repeats a token moves it to the later position.
//!
//! Deduplication compares raw token text only. Two tokens that spell
//! different values for the same CSS property (`px-4` and `px-0`) are both
//! kept, and the later one wins when the stylesheet is applied.

use std::collections::HashSet;

/// Merges class fragments into one deduplicated class string.
///
/// Every part is split on whitespace; empty parts contribute nothing.
///
/// # Example
///
/// ```rust
/// use swatch_variants::merge_tokens;
///
/// assert_eq!(merge_tokens(["btn px-4", "px-4 py-2", ""]), "btn px-4 py-2");
/// assert_eq!(merge_tokens(["a b", "a"]), "b a");
/// ```
pub fn merge_tokens<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&str> = parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect();

    // Walk backwards so the first sighting is the last occurrence.
    let mut seen = HashSet::with_capacity(tokens.len());
    let mut kept: Vec<&str> = tokens
        .iter()
        .rev()
        .filter(|token| seen.insert(**token))
        .copied()
        .collect();
    kept.reverse();
    kept.join(" ")
}

/// Slice form of [`merge_tokens`], handy for ad-hoc class composition.
///
/// ```rust
/// use swatch_variants::class_names;
///
/// assert_eq!(class_names(&["card", "  mt-4 ", "card"]), "mt-4 card");
/// ```
pub fn class_names(parts: &[&str]) -> String {
    merge_tokens(parts.iter().copied())
}

/// Splits a class string into owned tokens.
pub(crate) fn split_tokens(source: &str) -> Vec<String> {
    source.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge_empty() {
        assert_eq!(merge_tokens(std::iter::empty()), "");
        assert_eq!(merge_tokens(["", "   "]), "");
    }

    #[test]
    fn test_merge_collapses_whitespace() {
        assert_eq!(merge_tokens(["  a\tb\n", "c  "]), "a b c");
    }

    #[test]
    fn test_merge_keeps_last_position() {
        assert_eq!(merge_tokens(["a b c", "a"]), "b c a");
        assert_eq!(merge_tokens(["px-4 py-3 text-sm", "px-4 py-3"]), "text-sm px-4 py-3");
    }

    #[test]
    fn test_merge_keeps_conflicting_spellings() {
        // Same property, different tokens: both survive, later wins in CSS.
        assert_eq!(merge_tokens(["px-4", "px-0"]), "px-4 px-0");
    }

    #[test]
    fn test_class_names() {
        assert_eq!(class_names(&["x", "y", "x"]), "y x");
    }

    proptest! {
        #[test]
        fn prop_merge_has_no_duplicates(parts in proptest::collection::vec("[a-c ]{0,8}", 0..6)) {
            let merged = merge_tokens(parts.iter().map(String::as_str));
            let tokens: Vec<&str> = merged.split(' ').filter(|t| !t.is_empty()).collect();
            let unique: HashSet<&str> = tokens.iter().copied().collect();
            prop_assert_eq!(tokens.len(), unique.len());
        }

        #[test]
        fn prop_merge_is_idempotent(parts in proptest::collection::vec("[a-d ]{0,8}", 0..6)) {
            let once = merge_tokens(parts.iter().map(String::as_str));
            let twice = merge_tokens([once.as_str()]);
            prop_assert_eq!(once, twice);
        }
    }
}
