//! Term extraction from the article collection.
//!
//! Two distinct extractions live here and must stay distinct: the keyword
//! dictionary draws only on the keyword field, while the trending tally
//! also counts long title words. The tally feeds the dashboard's "top
//! keyword" aggregates and never the dictionary or containment views.

use ahash::{AHashMap, AHashSet};

use crate::article::Article;

use super::normalize::parse_keywords;

/// Title words at or below this length are noise (articles, prepositions)
/// and stay out of the trending tally.
pub const MIN_TITLE_WORD_LEN: usize = 3;

/// Collects the unique keyword tokens across the collection, in discovery
/// order. This ordering is load-bearing downstream: containment lists use
/// it as the stable tie-break.
pub fn extract_terms(articles: &[Article]) -> Vec<String> {
    let mut seen = AHashSet::new();
    let mut terms = Vec::new();
    for article in articles {
        for token in parse_keywords(&article.keywords) {
            if seen.insert(token.clone()) {
                terms.push(token);
            }
        }
    }
    terms
}

/// Keyword-token count per article, positionally aligned with the input.
pub fn keywords_per_article(articles: &[Article]) -> Vec<usize> {
    articles
        .iter()
        .map(|a| parse_keywords(&a.keywords).len())
        .collect()
}

/// Occurrence tally over keyword tokens plus title words longer than
/// `min_title_word_len`, lowercased. Counts occurrences, not distinct
/// articles; a keyword repeated across fields counts each time.
pub fn tally_keywords(articles: &[Article], min_title_word_len: usize) -> AHashMap<String, usize> {
    let mut tally = AHashMap::new();
    for article in articles {
        let title_words = article
            .title
            .to_lowercase()
            .split_whitespace()
            .filter(|w| w.len() > min_title_word_len)
            .map(str::to_string)
            .collect::<Vec<_>>();

        for token in title_words.into_iter().chain(parse_keywords(&article.keywords)) {
            *tally.entry(token).or_insert(0) += 1;
        }
    }
    tally
}
