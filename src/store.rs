//! Persistence of the article collection.
//!
//! The store is deliberately dumb: one JSON file holding the article
//! array, loaded whole and saved whole. Everything interesting is derived
//! in memory from the loaded snapshot.

use std::path::Path;

use crate::article::Article;
use crate::error::StoreError;

/// Loads the persisted collection. A missing file is [`StoreError::NotFound`]
/// so callers can redirect to ingestion instead of failing.
pub fn load_articles(path: &Path) -> Result<Vec<Article>, StoreError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let articles: Vec<Article> = serde_json::from_str(&data).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded {} articles from {}", articles.len(), path.display());
    Ok(articles)
}

/// Saves the collection, replacing whatever was there.
pub fn save_articles(path: &Path, articles: &[Article]) -> Result<(), StoreError> {
    let data = serde_json::to_string_pretty(articles).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Saved {} articles to {}", articles.len(), path.display());
    Ok(())
}

/// Whether a collection has been saved at `path`.
pub fn has_data(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn round_trips_a_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");

        let articles = vec![Article {
            title: "Stored".to_string(),
            year: "2020".to_string(),
            ..Article::default()
        }];

        check!(!has_data(&path));
        save_articles(&path, &articles).unwrap();
        check!(has_data(&path));

        let loaded = load_articles(&path).unwrap();
        check!(loaded == articles);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_articles(&dir.path().join("absent.json"));
        check!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let result = load_articles(&path);
        check!(matches!(result, Err(StoreError::Parse { .. })));
    }
}
