//! Term analytics over a bibliographic collection.
//!
//! This is the analytical core of bibscope: it turns the raw article
//! records into the keyword dictionary, per-term frequency counts,
//! term-containment lists, and per-term article drill-downs that the
//! exploration surfaces render.
//!
//! The pipeline is a chain of pure derivations over an immutable snapshot:
//!
//! ```text
//! Articles → extract (term set) → frequency (term × field counts)
//!          → containment (term × term) / query (term → articles)
//! ```
//!
//! Nothing here mutates the collection or keeps hidden state; a changed
//! collection means rebuilding the whole [`TermDictionary`].

pub mod containment;
pub mod dictionary;
pub mod extract;
pub mod frequency;
pub mod highlight;
pub mod normalize;
pub mod query;
pub mod sort;

pub use containment::ContainmentEntry;
pub use dictionary::{DictColumn, DictionaryRow, TermDictionary};
pub use frequency::{DictionarySummary, MatchFlags, TermFrequencyRow};
pub use highlight::highlight;
pub use query::{ArticleMatch, MatchColumn, TermMatchSummary, TermMatches, match_articles};
pub use sort::{Direction, SortState};
