use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bibscope")]
#[command(about = "Explore a bibliographic survey collection", long_about = None)]
pub struct Cli {
    /// Path to the saved article collection.
    #[arg(short, long, default_value = "articles.json")]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collection headline stats and chart series.
    Dashboard,
    /// The keyword dictionary with per-field counts and superterms.
    Dictionary {
        #[arg(short = 'n', long, default_value = "25")]
        limit: usize,
    },
    /// Articles matching one term, with highlighted fields.
    Term {
        term: String,
        /// Wrap matches in the title/keywords/abstract columns with
        /// <mark> tags.
        #[arg(long)]
        highlight: bool,
    },
    /// Trending terms per publication year.
    Timeline {
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
    /// Co-authorship graph data.
    Network {
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}
