//! Match highlighting for rendered table cells.

use regex::RegexBuilder;

/// Wraps every case-insensitive occurrence of `term` in `text` with
/// `<mark>` tags.
///
/// The term is escaped before the pattern is built, so metacharacters in
/// user-selected terms ("c++", "p=0.05") match literally instead of being
/// interpreted. Empty text yields an empty string and an empty term leaves
/// the text untouched; a pattern failure falls back to the unhighlighted
/// text rather than surfacing an error to the renderer.
pub fn highlight(text: &str, term: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    if term.is_empty() {
        return text.to_string();
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    else {
        return text.to_string();
    };
    pattern
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("<mark>{}</mark>", &caps[0])
        })
        .into_owned()
}
