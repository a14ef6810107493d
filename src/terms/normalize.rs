//! Text normalization and field parsing for bibliographic records.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Punctuation stripped during normalization. Quotes cover the curly
/// variants that survey exports copied out of word processors.
const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '{', '}', '[', ']', '"', '\'', '`', '\u{b4}',
    '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}',
];

/// Normalizes free text for matching: lowercase, strip diacritics and
/// punctuation, collapse whitespace runs, trim.
///
/// Total over all inputs; the empty string maps to itself.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}

/// Case- and diacritic-folds a string without touching punctuation or
/// spacing. This is the comparison key for locale-style ordering, where
/// "análise" sorts with "analise" rather than after "azul".
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Splits a delimited author field on `;` or `,` into trimmed names.
/// Preserves order and duplicates; absent or blank input yields nothing.
pub fn parse_authors(raw: &str) -> Vec<String> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a delimited keyword field on `;` or `,` into trimmed,
/// lowercased tokens. Absent or blank input yields nothing.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split([';', ','])
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Case-insensitive substring presence test. Empty text or an empty term
/// never matches.
pub fn has_term(text: &str, term: &str) -> bool {
    if text.is_empty() || term.is_empty() {
        return false;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}
