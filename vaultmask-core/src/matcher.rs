// vaultmask-core/src/matcher.rs
//! Locates prepared vault candidates inside free-form text.
//!
//! Matching happens entirely in canonical space, so obfuscated spellings
//! ("J.o.h.n", fullwidth or Cyrillic look-alikes, zero-width padding) line up
//! with the canonical candidate. Candidates are tried longest-first and every
//! accepted match claims its canonical indices, so a shorter candidate can
//! never re-match text already covered by a longer, more specific one.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::canonical::{canonicalize, is_boundary_before, is_ignorable, is_separator, is_word_boundary};
use crate::preparer::CanonicalPiiEntry;
use crate::redaction_match::{log_pii_match_debug, loggable, PiiMatch};

/// Finds non-overlapping, word-boundary-aligned occurrences of `prepared`
/// in `text`, sorted by original start offset.
///
/// `prepared` is expected in the order produced by
/// [`prepare_pii_entries`](crate::preparer::prepare_pii_entries); that order is
/// the precedence order when candidates compete for the same text.
pub fn find_pii_matches(text: &str, prepared: &[CanonicalPiiEntry]) -> Vec<PiiMatch> {
    if text.is_empty() || prepared.is_empty() {
        return Vec::new();
    }

    let canon = canonicalize(text);
    let haystack = canon.chars();
    let mut claimed = vec![false; haystack.len()];
    let mut matches = Vec::new();

    for entry in prepared {
        let needle = entry.canonical_chars();
        if needle.is_empty() || needle.len() > haystack.len() {
            continue;
        }

        let mut cursor = 0;
        while let Some(found) = find_from(haystack, needle, cursor) {
            cursor = found + 1;
            let range = found..found + needle.len();

            if claimed[range.clone()].iter().any(|c| *c) {
                continue;
            }
            let Some(span) = canon.source_span(range.clone()) else {
                continue;
            };
            let Some((start, end)) = expand_to_boundaries(text, span.start, span.end) else {
                debug!(
                    "Rejected in-word occurrence of '{}' at {}..{}.",
                    loggable(entry.value()),
                    span.start,
                    span.end
                );
                continue;
            };

            claimed[range.clone()].iter_mut().for_each(|c| *c = true);
            let m = PiiMatch {
                pii: entry.clone(),
                original_start: start,
                original_end: end,
                original_text: text[start..end].to_string(),
                canonical_start: range.start,
                canonical_end: range.end,
            };
            log_pii_match_debug(module_path!(), &m);
            matches.push(m);
        }
    }

    matches.sort_by_key(|m| (m.original_start, m.canonical_start));
    matches
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Grows `[start, end)` over adjacent ignorable characters, then checks that
/// both edges sit on a word boundary. `None` means the occurrence is part of
/// a longer word.
fn expand_to_boundaries(text: &str, mut start: usize, mut end: usize) -> Option<(usize, usize)> {
    while let Some(prev) = text[..start].chars().next_back() {
        if is_separator(prev) || !is_ignorable(prev) {
            break;
        }
        start -= prev.len_utf8();
    }
    while let Some(next) = text[end..].chars().next() {
        if is_separator(next) || !is_ignorable(next) {
            break;
        }
        end += next.len_utf8();
    }

    if is_boundary_before(text, start) && is_word_boundary(text, end) {
        Some((start, end))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PiiCategory, PiiEntry};
    use crate::preparer::prepare_pii_entries;

    fn matches_for(text: &str, entries: &[PiiEntry]) -> Vec<PiiMatch> {
        find_pii_matches(text, &prepare_pii_entries(entries))
    }

    fn name(value: &str) -> PiiEntry {
        PiiEntry::new(PiiCategory::Name, value)
    }

    #[test]
    fn does_not_match_inside_longer_words() {
        let text = "Contact Johnson about John";
        let found = matches_for(text, &[name("John")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].original_text, "John");
        assert_eq!((found[0].original_start, found[0].original_end), (22, 26));
    }

    #[test]
    fn longer_candidates_claim_text_first() {
        let text = "John Smith met Smith and John.";
        let found = matches_for(text, &[name("John Smith")]);
        let spans: Vec<(&str, &str)> = found
            .iter()
            .map(|m| (m.original_text.as_str(), m.pii.canonical()))
            .collect();
        assert_eq!(
            spans,
            vec![("John Smith", "johnsmith"), ("Smith", "smith"), ("John", "john")]
        );
    }

    #[test]
    fn detects_obfuscated_spellings() {
        let entries = [name("John")];
        for text in [
            "ask \u{FF2A}ohn now",
            "ask J\u{043E}hn now",
            "ask J.o.h.n now",
            "ask Jo\u{200B}hn now",
            "ask JOHN now",
        ] {
            let found = matches_for(text, &entries);
            assert_eq!(found.len(), 1, "text: {text:?}");
            assert!(found[0].original_text.len() >= 4);
            assert_eq!(&text[..found[0].original_start], "ask ");
        }
    }

    #[test]
    fn punctuation_is_a_boundary() {
        let found = matches_for("(John)'s file, John's desk", &[name("John")]);
        let texts: Vec<&str> = found.iter().map(|m| m.original_text.as_str()).collect();
        assert_eq!(texts, vec!["John", "John"]);
    }

    #[test]
    fn zero_width_padding_is_absorbed_into_the_span() {
        let text = "hi \u{200B}John\u{200D} there";
        let found = matches_for(text, &[name("John")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].original_text, "\u{200B}John\u{200D}");
    }

    #[test]
    fn zero_width_glue_does_not_create_a_boundary() {
        let found = matches_for("John\u{200B}son", &[name("John")]);
        assert!(found.is_empty());
    }

    #[test]
    fn matches_never_overlap_in_canonical_space() {
        let found = matches_for(
            "Reach ada.king@analytical.io or Ada King at analytical.io",
            &[
                PiiEntry::new(PiiCategory::Email, "ada.king@analytical.io"),
                name("Ada King"),
            ],
        );
        for pair in found.windows(2) {
            assert!(pair[0].canonical_end <= pair[1].canonical_start);
            assert!(pair[0].original_end <= pair[1].original_start);
        }
        let categories: Vec<PiiCategory> = found.iter().map(|m| m.pii.category()).collect();
        assert_eq!(
            categories,
            vec![PiiCategory::Email, PiiCategory::Name, PiiCategory::Custom]
        );
    }

    #[test]
    fn repeated_occurrences_are_all_found() {
        let found = matches_for("555-867-5309 / 555 867 5309", &[PiiEntry::new(PiiCategory::Phone, "5558675309")]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].original_text, "555 867 5309");
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(matches_for("", &[name("John")]).is_empty());
        assert!(find_pii_matches("John", &[]).is_empty());
    }
}
