//! The bibliographic record and the main-table operations over it.

use serde::{Deserialize, Serialize};

use crate::terms::sort::{Direction, collate};

/// A single article as supplied by the persisted collection.
///
/// Every field is free text straight from the survey export; absent columns
/// deserialize to the empty string. Identity is positional within the
/// collection, so there is no id field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub authors: String,
    pub year: String,
    pub keywords: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl Article {
    /// Parses the year field as a leading integer, the way the browser
    /// table coerced it. `"2020"` and `"2020 (preprint)"` both give 2020;
    /// blank or non-numeric years give `None`.
    pub fn year_number(&self) -> Option<i32> {
        let trimmed = self.year.trim();
        let digits: String = trimmed
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

/// Sortable columns of the main article table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Title,
    Authors,
    Year,
    Keywords,
}

/// Filters the collection to articles where any field contains the query,
/// case-insensitively. An empty query keeps everything.
pub fn filter_articles<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|a| {
            needle.is_empty()
                || [&a.title, &a.authors, &a.year, &a.keywords, &a.abstract_text]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sorts the main table in place. Year compares numerically with
/// unparseable years coerced to 0 (the table keeps them at the numeric
/// bottom rather than segregating them); text columns compare with
/// diacritic-folded ordering.
pub fn sort_articles(articles: &mut [Article], column: TableColumn, direction: Direction) {
    articles.sort_by(|a, b| {
        let ord = match column {
            TableColumn::Title => collate(&a.title, &b.title),
            TableColumn::Authors => collate(&a.authors, &b.authors),
            TableColumn::Keywords => collate(&a.keywords, &b.keywords),
            TableColumn::Year => a
                .year_number()
                .unwrap_or(0)
                .cmp(&b.year_number().unwrap_or(0)),
        };
        direction.apply(ord)
    });
}
