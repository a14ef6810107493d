//! Per-term field frequency indexing.
//!
//! For every extracted term the indexer scans every article and counts the
//! distinct articles whose title, keyword list, or abstract match. The scan
//! is O(|terms| × |articles|), which is fine at literature-survey scale
//! (hundreds to low thousands of articles); the counts are the contract,
//! so any future inverted-index shortcut has to reproduce them exactly.

use serde::Serialize;

use crate::article::Article;

use super::normalize::{has_term, parse_keywords};

/// Field-level hit flags for one (term, article) pair.
///
/// Title and abstract match on case-insensitive substring containment;
/// keywords match only on exact token membership, so "learning" does not
/// hit an article whose only keyword is "deep learning".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFlags {
    pub in_title: bool,
    pub in_keywords: bool,
    pub in_abstract: bool,
}

impl MatchFlags {
    /// Probes one article for one term across the three fields.
    pub fn probe(article: &Article, term: &str) -> Self {
        Self {
            in_title: has_term(&article.title, term),
            in_keywords: parse_keywords(&article.keywords)
                .iter()
                .any(|token| token == term),
            in_abstract: has_term(&article.abstract_text, term),
        }
    }

    pub fn any(self) -> bool {
        self.in_title || self.in_keywords || self.in_abstract
    }

    /// Number of fields hit; 2 or more makes a multi-field match.
    pub fn fields_hit(self) -> usize {
        usize::from(self.in_title) + usize::from(self.in_keywords) + usize::from(self.in_abstract)
    }
}

/// Distinct-article counts for one term across the three fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermFrequencyRow {
    pub in_title: usize,
    pub in_keywords: usize,
    pub in_abstract: usize,
}

impl TermFrequencyRow {
    /// Aggregate frequency used for the default dictionary ordering and
    /// for ranking superterms.
    pub fn total(self) -> usize {
        self.in_title + self.in_keywords + self.in_abstract
    }
}

/// Builds the frequency row for every term, positionally aligned with the
/// input term list.
pub fn build_frequency_index(articles: &[Article], terms: &[String]) -> Vec<TermFrequencyRow> {
    terms
        .iter()
        .map(|term| {
            let mut row = TermFrequencyRow::default();
            for article in articles {
                let flags = MatchFlags::probe(article, term);
                if flags.in_title {
                    row.in_title += 1;
                }
                if flags.in_keywords {
                    row.in_keywords += 1;
                }
                if flags.in_abstract {
                    row.in_abstract += 1;
                }
            }
            row
        })
        .collect()
}

/// Collection-level dictionary metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionarySummary {
    pub unique_terms: usize,
    pub avg_terms_per_article: f64,
    pub max_terms_per_article: usize,
}

/// Summarizes the term set against the collection. An empty collection
/// yields zeros, never a division by zero.
#[allow(clippy::cast_precision_loss)]
pub fn summarize(terms: &[String], keywords_per_article: &[usize]) -> DictionarySummary {
    let avg = if keywords_per_article.is_empty() {
        0.0
    } else {
        keywords_per_article.iter().sum::<usize>() as f64 / keywords_per_article.len() as f64
    };
    DictionarySummary {
        unique_terms: terms.len(),
        avg_terms_per_article: avg,
        max_terms_per_article: keywords_per_article.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn article(title: &str, keywords: &str, abstract_text: &str) -> Article {
        Article {
            title: title.to_string(),
            keywords: keywords.to_string(),
            abstract_text: abstract_text.to_string(),
            ..Article::default()
        }
    }

    #[test]
    fn keyword_match_is_exact_token_membership() {
        // "learning" is a substring of the keyword token but not a token
        // itself, so only the title may hit.
        let a = article("Learning to rank", "deep learning", "");
        let flags = MatchFlags::probe(&a, "learning");
        check!(flags.in_title);
        check!(!flags.in_keywords);
        check!(!flags.in_abstract);
    }

    #[test]
    fn title_and_abstract_match_substrings_case_insensitively() {
        let a = article("Systems for ML", "", "a survey of deep learning systems");
        let flags = MatchFlags::probe(&a, "systems");
        check!(flags.in_title);
        check!(flags.in_abstract);
        check!(flags.fields_hit() == 2);
    }

    #[test]
    fn counts_are_distinct_articles_per_field() {
        let articles = vec![
            article("Deep Learning Systems", "deep learning; neural networks", ""),
            article(
                "Systems for ML",
                "deep learning; systems",
                "a survey of deep learning systems",
            ),
        ];
        let terms = vec!["deep learning".to_string(), "systems".to_string()];
        let rows = build_frequency_index(&articles, &terms);

        check!(rows[0] == TermFrequencyRow { in_title: 1, in_keywords: 2, in_abstract: 1 });
        check!(rows[1] == TermFrequencyRow { in_title: 2, in_keywords: 1, in_abstract: 1 });
    }

    #[test]
    fn summary_degrades_to_zero_on_empty_collection() {
        let summary = summarize(&[], &[]);
        check!(summary.unique_terms == 0);
        check!(summary.avg_terms_per_article == 0.0);
        check!(summary.max_terms_per_article == 0);
    }

    #[test]
    fn summary_averages_keyword_counts() {
        let terms = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let summary = summarize(&terms, &[3, 0, 3]);
        check!(summary.unique_terms == 3);
        check!((summary.avg_terms_per_article - 2.0).abs() < f64::EPSILON);
        check!(summary.max_terms_per_article == 3);
    }
}
