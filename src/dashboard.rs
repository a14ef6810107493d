//! Collection-level aggregates behind the dashboard cards and bar charts.

use ahash::AHashMap;
use serde::Serialize;

use crate::article::Article;
use crate::terms::normalize::parse_authors;
use crate::terms::extract::{MIN_TITLE_WORD_LEN, tally_keywords};

/// Headline numbers for the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total_articles: usize,
    pub total_authors: usize,
    /// Min and max parseable year, `None` when no article has one.
    pub year_range: Option<(i32, i32)>,
    /// Most frequent entry of the keyword tally (long title words plus
    /// keyword tokens).
    pub top_keyword: Option<String>,
}

/// A labelled count, the row shape every chart consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

pub fn collection_stats(articles: &[Article]) -> CollectionStats {
    let mut authors = ahash::AHashSet::new();
    for article in articles {
        authors.extend(parse_authors(&article.authors));
    }

    let years: Vec<i32> = articles.iter().filter_map(Article::year_number).collect();
    let year_range = match (years.iter().min(), years.iter().max()) {
        (Some(&min), Some(&max)) => Some((min, max)),
        _ => None,
    };

    CollectionStats {
        total_articles: articles.len(),
        total_authors: authors.len(),
        year_range,
        top_keyword: top_keywords(articles, 1).into_iter().next().map(|e| e.label),
    }
}

/// Article counts per raw year label, labels ascending. Unparseable years
/// keep their raw label and group together like any other.
pub fn publications_by_year(articles: &[Article]) -> Vec<LabelCount> {
    let mut counts: AHashMap<String, usize> = AHashMap::new();
    for article in articles {
        *counts.entry(article.year.clone()).or_insert(0) += 1;
    }
    let mut series: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    series.sort_by(|a, b| a.label.cmp(&b.label));
    series
}

/// Top keyword-tally entries, count descending with alphabetical ties.
pub fn top_keywords(articles: &[Article], limit: usize) -> Vec<LabelCount> {
    top_of_tally(tally_keywords(articles, MIN_TITLE_WORD_LEN), limit)
}

/// Most published authors, count descending with alphabetical ties.
pub fn top_authors(articles: &[Article], limit: usize) -> Vec<LabelCount> {
    let mut counts: AHashMap<String, usize> = AHashMap::new();
    for article in articles {
        for author in parse_authors(&article.authors) {
            *counts.entry(author).or_insert(0) += 1;
        }
    }
    top_of_tally(counts, limit)
}

fn top_of_tally(tally: AHashMap<String, usize>, limit: usize) -> Vec<LabelCount> {
    let mut entries: Vec<LabelCount> = tally
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn collection() -> Vec<Article> {
        vec![
            Article {
                title: "Deep Learning Survey".to_string(),
                authors: "Silva, A.; Costa, B.".to_string(),
                year: "2020".to_string(),
                keywords: "deep learning".to_string(),
                ..Article::default()
            },
            Article {
                title: "Edge Survey".to_string(),
                authors: "Costa, B.".to_string(),
                year: "2018".to_string(),
                keywords: "edge computing".to_string(),
                ..Article::default()
            },
        ]
    }

    #[test]
    fn stats_over_small_collection() {
        let stats = collection_stats(&collection());
        check!(stats.total_articles == 2);
        // "Silva", "A.", "Costa", "B."
        check!(stats.total_authors == 4);
        check!(stats.year_range == Some((2018, 2020)));
        check!(stats.top_keyword == Some("survey".to_string()));
    }

    #[test]
    fn stats_degrade_on_empty_collection() {
        let stats = collection_stats(&[]);
        check!(stats == CollectionStats::default());
    }

    #[test]
    fn publications_group_by_raw_year_label() {
        let mut articles = collection();
        articles.push(Article {
            year: "2020".to_string(),
            ..Article::default()
        });
        let series = publications_by_year(&articles);
        let labels: Vec<_> = series.iter().map(|e| e.label.as_str()).collect();
        check!(labels == vec!["2018", "2020"]);
        check!(series[1].count == 2);
    }

    #[test]
    fn top_authors_ranked_by_publication_count() {
        let top = top_authors(&collection(), 2);
        check!(top[0].label == "B.");
        check!(top[0].count == 2);
    }
}
