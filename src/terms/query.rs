//! Drill-down from a term to its matching articles.

use serde::Serialize;

use crate::article::Article;

use super::frequency::MatchFlags;
use super::sort::{Direction, cmp_year_none_last, collate};

/// One matching article for a selected term, with field-level hit flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMatch {
    pub year: Option<i32>,
    pub title: String,
    pub keywords: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub authors: String,
    #[serde(flatten)]
    pub flags: MatchFlags,
}

impl ArticleMatch {
    pub fn fields_hit(&self) -> usize {
        self.flags.fields_hit()
    }
}

/// Aggregate counts over a term's matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermMatchSummary {
    pub term: String,
    pub in_title: usize,
    pub in_keywords: usize,
    pub in_abstract: usize,
    /// Articles hit in two or more fields.
    pub multi_field: usize,
    pub total: usize,
}

/// A term's matching articles plus their summary, a snapshot computed when
/// the term is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermMatches {
    pub rows: Vec<ArticleMatch>,
    pub summary: TermMatchSummary,
}

/// Sortable columns of the per-term article table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchColumn {
    Year,
    Title,
    Keywords,
    Abstract,
    Authors,
}

/// Scans the collection for articles matching `term` in any field.
///
/// Rows come back year-descending with unknown years after all numeric
/// ones. A term with no matches (including one absent from the
/// dictionary) yields empty rows and zero counts; that is a valid result.
pub fn match_articles(articles: &[Article], term: &str) -> TermMatches {
    let mut summary = TermMatchSummary {
        term: term.to_string(),
        ..TermMatchSummary::default()
    };
    let mut rows = Vec::new();

    for article in articles {
        let flags = MatchFlags::probe(article, term);
        if !flags.any() {
            continue;
        }
        summary.in_title += usize::from(flags.in_title);
        summary.in_keywords += usize::from(flags.in_keywords);
        summary.in_abstract += usize::from(flags.in_abstract);
        if flags.fields_hit() >= 2 {
            summary.multi_field += 1;
        }
        rows.push(ArticleMatch {
            year: article.year_number(),
            title: article.title.clone(),
            keywords: article.keywords.clone(),
            abstract_text: article.abstract_text.clone(),
            authors: article.authors.clone(),
            flags,
        });
    }

    summary.total = rows.len();
    sort_matches(&mut rows, MatchColumn::Year, Direction::Descending);
    TermMatches { rows, summary }
}

/// Re-sorts a match list by a clicked column. Year compares numerically
/// with unknown years pinned last in either direction; text columns use
/// folded collation.
pub fn sort_matches(rows: &mut [ArticleMatch], column: MatchColumn, direction: Direction) {
    rows.sort_by(|a, b| match column {
        MatchColumn::Year => cmp_year_none_last(a.year, b.year, direction),
        MatchColumn::Title => direction.apply(collate(&a.title, &b.title)),
        MatchColumn::Keywords => direction.apply(collate(&a.keywords, &b.keywords)),
        MatchColumn::Abstract => direction.apply(collate(&a.abstract_text, &b.abstract_text)),
        MatchColumn::Authors => direction.apply(collate(&a.authors, &b.authors)),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn article(title: &str, keywords: &str, abstract_text: &str, year: &str) -> Article {
        Article {
            title: title.to_string(),
            keywords: keywords.to_string(),
            abstract_text: abstract_text.to_string(),
            year: year.to_string(),
            ..Article::default()
        }
    }

    #[test]
    fn unknown_term_yields_empty_result_not_error() {
        let articles = vec![article("Some title", "kw", "", "2020")];
        let matches = match_articles(&articles, "absent-term");
        check!(matches.rows.is_empty());
        check!(matches.summary.total == 0);
        check!(matches.summary.multi_field == 0);
    }

    #[test]
    fn default_order_is_year_descending_nulls_last() {
        let articles = vec![
            article("old term paper", "", "", "1999"),
            article("undated term paper", "", "", ""),
            article("new term paper", "", "", "2021"),
        ];
        let matches = match_articles(&articles, "term paper");
        let years: Vec<_> = matches.rows.iter().map(|r| r.year).collect();
        check!(years == vec![Some(2021), Some(1999), None]);
    }

    #[test]
    fn summary_counts_fields_and_multi_field() {
        let articles = vec![
            article("Deep Learning Systems", "deep learning; neural networks", "", "2020"),
            article(
                "Systems for ML",
                "deep learning; systems",
                "a survey of deep learning systems",
                "2019",
            ),
            article("Unrelated", "iot", "", "2018"),
        ];
        let matches = match_articles(&articles, "deep learning");

        check!(matches.summary.in_title == 1);
        check!(matches.summary.in_keywords == 2);
        check!(matches.summary.in_abstract == 1);
        check!(matches.summary.total == 2);

        // multi_field must equal the count of rows with >= 2 flags set.
        let by_rows = matches.rows.iter().filter(|r| r.fields_hit() >= 2).count();
        check!(matches.summary.multi_field == by_rows);
        check!(matches.summary.multi_field == 2);
    }

    #[test]
    fn resort_by_title_uses_collation() {
        let articles = vec![
            article("último recurso", "x", "", "2001"),
            article("Análise x", "x", "", "2002"),
            article("banco x", "x", "", "2003"),
        ];
        let mut matches = match_articles(&articles, "x");
        sort_matches(&mut matches.rows, MatchColumn::Title, Direction::Ascending);
        let titles: Vec<_> = matches.rows.iter().map(|r| r.title.as_str()).collect();
        check!(titles == vec!["Análise x", "banco x", "último recurso"]);
    }

    #[test]
    fn resort_year_ascending_keeps_nulls_last() {
        let articles = vec![
            article("a term", "", "", ""),
            article("b term", "", "", "2005"),
            article("c term", "", "", "1998"),
        ];
        let mut matches = match_articles(&articles, "term");
        sort_matches(&mut matches.rows, MatchColumn::Year, Direction::Ascending);
        let years: Vec<_> = matches.rows.iter().map(|r| r.year).collect();
        check!(years == vec![Some(1998), Some(2005), None]);
    }
}
