//! Per-year trending terms.
//!
//! The timeline scans one global, normalized term set against every
//! year's articles, so a term's badge counts are comparable across years.
//! Matching is whole-word over the normalized concatenation of title,
//! keywords, and abstract, which keeps "art" from trending because of
//! "artificial".

use std::collections::BTreeMap;

use ahash::AHashSet;
use regex::Regex;
use serde::Serialize;

use crate::article::Article;
use crate::dashboard::LabelCount;
use crate::terms::normalize::{normalize, parse_keywords};

/// Normalized keyword tokens shorter than this are dropped from the
/// timeline term set.
const MIN_TERM_LEN: usize = 3;

/// One year of the timeline: its article count and trending terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearTrend {
    /// Raw year label as stored; unparseable years group under their own
    /// label rather than disappearing.
    pub year: String,
    pub article_count: usize,
    pub top_terms: Vec<LabelCount>,
}

/// The global timeline term set: normalized keyword tokens of the whole
/// collection, alphabetical.
pub fn timeline_terms(articles: &[Article]) -> Vec<String> {
    let mut seen = AHashSet::new();
    for article in articles {
        for token in parse_keywords(&article.keywords) {
            let term = normalize(&token);
            if term.len() >= MIN_TERM_LEN {
                seen.insert(term);
            }
        }
    }
    let mut terms: Vec<String> = seen.into_iter().collect();
    terms.sort();
    terms
}

/// Builds the timeline: years ascending by label, each with its `top_n`
/// trending terms (distinct-article counts, ties alphabetical).
pub fn build_timeline(articles: &[Article], top_n: usize) -> Vec<YearTrend> {
    let terms = timeline_terms(articles);

    // One compiled whole-word pattern per term for the whole build. The
    // escaped pattern cannot fail to compile; skip the term if it somehow
    // does rather than aborting the view.
    let patterns: Vec<(usize, Regex)> = terms
        .iter()
        .enumerate()
        .filter_map(|(i, term)| {
            Regex::new(&format!(r"\b{}\b", regex::escape(term)))
                .ok()
                .map(|rx| (i, rx))
        })
        .collect();

    let mut by_year: BTreeMap<&str, Vec<&Article>> = BTreeMap::new();
    for article in articles {
        by_year.entry(article.year.as_str()).or_default().push(article);
    }

    by_year
        .into_iter()
        .map(|(year, year_articles)| {
            let mut counts = vec![0usize; terms.len()];
            for article in &year_articles {
                let combined = normalize(&format!(
                    "{} {} {}",
                    article.title, article.keywords, article.abstract_text
                ));
                for (i, pattern) in &patterns {
                    if pattern.is_match(&combined) {
                        counts[*i] += 1;
                    }
                }
            }

            let mut top_terms: Vec<LabelCount> = terms
                .iter()
                .zip(&counts)
                .filter(|&(_, &count)| count > 0)
                .map(|(term, &count)| LabelCount {
                    label: term.clone(),
                    count,
                })
                .collect();
            top_terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
            top_terms.truncate(top_n);

            YearTrend {
                year: year.to_string(),
                article_count: year_articles.len(),
                top_terms,
            }
        })
        .collect()
}
