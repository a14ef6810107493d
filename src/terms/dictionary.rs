//! The keyword dictionary: a built snapshot of the term analytics over one
//! article collection.

use serde::Serialize;

use crate::article::Article;

use super::containment::{ContainmentEntry, build_containment};
use super::extract::{extract_terms, keywords_per_article};
use super::frequency::{
    DictionarySummary, TermFrequencyRow, build_frequency_index, summarize,
};
use super::query::{TermMatches, match_articles};
use super::sort::{Direction, collate};

/// One dictionary entry: a term, its per-field article counts, and the
/// superterms that contain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryRow {
    pub term: String,
    #[serde(flatten)]
    pub freq: TermFrequencyRow,
    pub included: Vec<ContainmentEntry>,
    pub included_count: usize,
}

/// Sortable columns of the dictionary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictColumn {
    Term,
    InTitle,
    InKeywords,
    InAbstract,
    IncludedCount,
    /// Aggregate of the three field counts; the default ordering.
    Total,
}

/// A fully built term dictionary over a snapshot of the collection.
///
/// Building is total and idempotent: the same articles always produce the
/// same dictionary, and a changed collection means building a fresh one —
/// entries are never patched in place. Rows are kept in term discovery
/// order; the accessors apply the presentation orderings.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    articles: Vec<Article>,
    rows: Vec<DictionaryRow>,
    summary: DictionarySummary,
}

impl TermDictionary {
    /// Builds the dictionary: extracts keyword terms, indexes per-field
    /// frequencies, and resolves containment.
    pub fn build(articles: &[Article]) -> Self {
        let start = std::time::Instant::now();

        let terms = extract_terms(articles);
        let freq_rows = build_frequency_index(articles, &terms);
        let containment = build_containment(&terms, &freq_rows);
        let summary = summarize(&terms, &keywords_per_article(articles));

        let rows = terms
            .into_iter()
            .zip(freq_rows)
            .zip(containment)
            .map(|((term, freq), included)| DictionaryRow {
                term,
                freq,
                included_count: included.len(),
                included,
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Built term dictionary: {} terms over {} articles in {:?}",
            rows.len(),
            articles.len(),
            start.elapsed()
        );

        Self {
            articles: articles.to_vec(),
            rows,
            summary,
        }
    }

    /// Dictionary entries in the default order: total frequency
    /// descending, discovery order on ties.
    pub fn rows(&self) -> Vec<&DictionaryRow> {
        self.sorted_rows(DictColumn::Total, Direction::Descending)
    }

    /// Dictionary entries ordered by a clicked column.
    pub fn sorted_rows(&self, column: DictColumn, direction: Direction) -> Vec<&DictionaryRow> {
        let mut rows: Vec<&DictionaryRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| {
            let ord = match column {
                DictColumn::Term => collate(&a.term, &b.term),
                DictColumn::InTitle => a.freq.in_title.cmp(&b.freq.in_title),
                DictColumn::InKeywords => a.freq.in_keywords.cmp(&b.freq.in_keywords),
                DictColumn::InAbstract => a.freq.in_abstract.cmp(&b.freq.in_abstract),
                DictColumn::IncludedCount => a.included_count.cmp(&b.included_count),
                DictColumn::Total => a.freq.total().cmp(&b.freq.total()),
            };
            direction.apply(ord)
        });
        rows
    }

    pub fn summary(&self) -> DictionarySummary {
        self.summary
    }

    /// Looks up one entry by its exact term.
    pub fn entry(&self, term: &str) -> Option<&DictionaryRow> {
        self.rows.iter().find(|row| row.term == term)
    }

    /// Drill-down: the matching articles for a term, computed on demand
    /// against the snapshot. Works for any term, not only dictionary
    /// entries; an unknown term simply matches nothing.
    pub fn articles_for(&self, term: &str) -> TermMatches {
        match_articles(&self.articles, term)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
