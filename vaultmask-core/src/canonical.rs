// vaultmask-core/src/canonical.rs
//! Comparison-only canonical form of arbitrary text.
//!
//! Canonicalization folds away the cheap tricks used to slip a known value
//! past a literal matcher: compatibility forms (fullwidth letters, ligatures),
//! invisible characters, Cyrillic/Greek look-alikes, case, and any whitespace
//! or punctuation sprinkled between letters. The canonical string is never
//! displayed; it only exists to be searched, so every canonical character
//! carries the byte span of the original text it was produced from.
//!
//! NFKC is applied per normalization chunk (a starter plus its trailing
//! combining characters) rather than over the whole string. This keeps a
//! many-to-one map from canonical characters back to valid byte offsets of
//! the caller's text even when normalization changes the character count.
//!
//! License: MIT OR APACHE 2.0

use std::ops::Range;

use unicode_normalization::char::{canonical_combining_class, is_combining_mark};
use unicode_normalization::UnicodeNormalization;

/// A half-open byte range `[start, end)` of the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

/// The canonical form of a text plus its position map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalText {
    /// The canonical string, used for matching only.
    pub canonical: String,
    /// `position_map[i]` is the original byte span canonical char `i` came from.
    pub position_map: Vec<SourceSpan>,
    chars: Vec<char>,
}

impl CanonicalText {
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in canonical characters (not bytes).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Maps a range of canonical indices back to the smallest original byte
    /// span covering every source chunk in it.
    pub fn source_span(&self, range: Range<usize>) -> Option<SourceSpan> {
        if range.start >= range.end || range.end > self.position_map.len() {
            return None;
        }
        let first = self.position_map[range.start];
        let last = self.position_map[range.end - 1];
        Some(SourceSpan { start: first.start, end: last.end })
    }

    fn push(&mut self, c: char, span: SourceSpan) {
        self.chars.push(c);
        self.position_map.push(span);
    }
}

/// Canonicalizes `text` and records where each canonical character came from.
pub fn canonicalize(text: &str) -> CanonicalText {
    let mut out = CanonicalText::default();

    for span in normalization_chunks(text) {
        for c in text[span.start..span.end].nfkc() {
            if is_invisible(c) {
                continue;
            }
            let c = confusable_to_ascii(c).unwrap_or(c);
            if is_separator(c) || is_combining_mark(c) {
                continue;
            }
            for lower in c.to_lowercase() {
                if is_combining_mark(lower) {
                    continue;
                }
                out.push(confusable_to_ascii(lower).unwrap_or(lower), span);
            }
        }
    }

    out.canonical = out.chars.iter().collect();
    out
}

/// Shorthand for callers that only need the canonical string.
pub fn canonical_form(text: &str) -> String {
    canonicalize(text).canonical
}

/// True at the end of the string (`index >= text.len()`) or when the
/// character starting at byte `index` is whitespace or punctuation.
pub fn is_word_boundary(text: &str, index: usize) -> bool {
    if index >= text.len() {
        return true;
    }
    match text.get(index..).and_then(|rest| rest.chars().next()) {
        Some(c) => is_separator(c),
        None => false,
    }
}

/// True at the start of the string or when the character ending right before
/// byte `index` is whitespace or punctuation.
pub fn is_boundary_before(text: &str, index: usize) -> bool {
    if index == 0 {
        return true;
    }
    match text.get(..index).and_then(|head| head.chars().next_back()) {
        Some(c) => is_separator(c),
        None => false,
    }
}

/// Characters that vanish from the canonical form without acting as word
/// separators. The matcher lets a match span absorb these.
pub fn is_ignorable(c: char) -> bool {
    is_invisible(c) || is_combining_mark(c)
}

pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c as u32,
            0x00A1 | 0x00A7 | 0x00AB | 0x00B6 | 0x00B7 | 0x00BB | 0x00BF
                | 0x037E
                | 0x0387
                | 0x055A..=0x055F
                | 0x2010..=0x2027
                | 0x2030..=0x205E
                | 0x3001..=0x3003
                | 0x3008..=0x3011
                | 0x3014..=0x301F
                | 0xFE10..=0xFE19
                | 0xFE30..=0xFE6B
                | 0xFF01..=0xFF0F
                | 0xFF1A..=0xFF20
                | 0xFF3B..=0xFF40
                | 0xFF5B..=0xFF65
        )
}

fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}' // soft hyphen
        | '\u{034F}' // combining grapheme joiner
        | '\u{180E}' // mongolian vowel separator
        | '\u{200B}' // zero-width space
        | '\u{200C}' // zero-width non-joiner
        | '\u{200D}' // zero-width joiner
        | '\u{200E}' | '\u{200F}' // directional marks
        | '\u{202A}'..='\u{202E}' // bidi embeddings and overrides
        | '\u{2060}'..='\u{2064}' // word joiner and invisible operators
        | '\u{FE00}'..='\u{FE0F}' // variation selectors
        | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

/// Fixed look-alike table: Cyrillic and Greek homoglyphs plus fullwidth
/// ASCII forms.
fn confusable_to_ascii(c: char) -> Option<char> {
    let mapped = match c {
        // Cyrillic lowercase
        '\u{0430}' => 'a',
        '\u{0441}' => 'c',
        '\u{0501}' => 'd',
        '\u{0435}' => 'e',
        '\u{04BB}' => 'h',
        '\u{0456}' => 'i',
        '\u{0458}' => 'j',
        '\u{04CF}' => 'l',
        '\u{043E}' => 'o',
        '\u{0440}' => 'p',
        '\u{051B}' => 'q',
        '\u{0455}' => 's',
        '\u{051D}' => 'w',
        '\u{0445}' => 'x',
        '\u{0443}' => 'y',
        // Cyrillic uppercase
        '\u{0410}' => 'A',
        '\u{0412}' => 'B',
        '\u{0421}' => 'C',
        '\u{0415}' => 'E',
        '\u{041D}' => 'H',
        '\u{0406}' | '\u{04C0}' => 'I',
        '\u{0408}' => 'J',
        '\u{041A}' => 'K',
        '\u{041C}' => 'M',
        '\u{041E}' => 'O',
        '\u{0420}' => 'P',
        '\u{0405}' => 'S',
        '\u{0422}' => 'T',
        '\u{0425}' => 'X',
        '\u{0423}' => 'Y',
        // Greek uppercase
        '\u{0391}' => 'A',
        '\u{0392}' => 'B',
        '\u{0395}' => 'E',
        '\u{0396}' => 'Z',
        '\u{0397}' => 'H',
        '\u{0399}' => 'I',
        '\u{039A}' => 'K',
        '\u{039C}' => 'M',
        '\u{039D}' => 'N',
        '\u{039F}' => 'O',
        '\u{03A1}' => 'P',
        '\u{03A4}' => 'T',
        '\u{03A5}' => 'Y',
        '\u{03A7}' => 'X',
        // Greek lowercase
        '\u{03B1}' => 'a',
        '\u{03B9}' => 'i',
        '\u{03BA}' => 'k',
        '\u{03BD}' => 'v',
        '\u{03BF}' => 'o',
        '\u{03C1}' => 'p',
        '\u{03C5}' => 'u',
        '\u{03F2}' => 'c',
        '\u{03F3}' => 'j',
        // Fullwidth digits and letters
        '\u{FF10}'..='\u{FF19}' => char::from(b'0' + (c as u32 - 0xFF10) as u8),
        '\u{FF21}'..='\u{FF3A}' => char::from(b'A' + (c as u32 - 0xFF21) as u8),
        '\u{FF41}'..='\u{FF5A}' => char::from(b'a' + (c as u32 - 0xFF41) as u8),
        _ => return None,
    };
    Some(mapped)
}

/// Splits `text` into NFKC-independent chunks: each starter character
/// together with the combining characters that follow it.
fn normalization_chunks(text: &str) -> Vec<SourceSpan> {
    let mut chunks: Vec<SourceSpan> = Vec::new();
    for (idx, c) in text.char_indices() {
        let end = idx + c.len_utf8();
        match chunks.last_mut() {
            Some(last) if canonical_combining_class(c) != 0 => last.end = end,
            _ => chunks.push(SourceSpan { start: idx, end }),
        }
    }
    chunks
}
