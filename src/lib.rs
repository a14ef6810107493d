pub mod article;
pub mod cli;
pub mod dashboard;
pub mod error;
pub mod network;
pub mod store;
pub mod terms;
pub mod timeline;
pub mod trace;

pub use article::Article;
pub use terms::{TermDictionary, highlight};
