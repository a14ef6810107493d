//! Shared fixtures for integration tests.

use bibscope::Article;
use rstest::fixture;

fn article(title: &str, authors: &str, year: &str, keywords: &str, abstract_text: &str) -> Article {
    Article {
        title: title.to_string(),
        authors: authors.to_string(),
        year: year.to_string(),
        keywords: keywords.to_string(),
        abstract_text: abstract_text.to_string(),
    }
}

/// The two-article survey slice used across the drill-down tests.
#[fixture]
pub fn ml_survey() -> Vec<Article> {
    vec![
        article(
            "Deep Learning Systems",
            "Silva, A.; Costa, B.",
            "2020",
            "deep learning; neural networks",
            "",
        ),
        article(
            "Systems for ML",
            "Costa, B.; Mendes, C.",
            "2019",
            "deep learning; systems",
            "a survey of deep learning systems",
        ),
    ]
}

/// A messier collection: duplicate keywords under different casing,
/// missing years, keyword tokens embedded in longer tokens.
#[fixture]
pub fn messy_survey() -> Vec<Article> {
    vec![
        article(
            "Survey of networks",
            "Almeida, D.",
            "2021",
            "Networks; Neural Networks",
            "",
        ),
        article("Undated notes", "", "", "networks, graph theory", ""),
        article("Subnetworks analysis", "Braga, E.", "2015", "subnetworks", ""),
    ]
}
