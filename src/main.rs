use anyhow::Context;
use clap::Parser;
use serde_json::json;

use bibscope::cli::{Cli, Commands};
use bibscope::dashboard;
use bibscope::network::CoauthorGraph;
use bibscope::store;
use bibscope::terms::{TermDictionary, highlight};
use bibscope::timeline;
use bibscope::trace;

fn main() -> anyhow::Result<()> {
    trace::init();
    let cli = Cli::parse();

    let articles = store::load_articles(&cli.data)
        .with_context(|| format!("cannot load collection from {}", cli.data.display()))?;
    tracing::info!("Exploring {} articles", articles.len());

    let output = match cli.command {
        Commands::Dashboard => json!({
            "stats": dashboard::collection_stats(&articles),
            "publicationsByYear": dashboard::publications_by_year(&articles),
            "topKeywords": dashboard::top_keywords(&articles, 10),
            "topAuthors": dashboard::top_authors(&articles, 10),
        }),
        Commands::Dictionary { limit } => {
            let dict = TermDictionary::build(&articles);
            let rows: Vec<_> = dict.rows().into_iter().take(limit).collect();
            json!({
                "summary": dict.summary(),
                "rows": rows,
            })
        }
        Commands::Term { term, highlight: mark } => {
            let dict = TermDictionary::build(&articles);
            let matches = dict.articles_for(&term);
            if mark {
                let rows: Vec<_> = matches
                    .rows
                    .iter()
                    .map(|r| {
                        json!({
                            "year": r.year,
                            "title": highlight(&r.title, &term),
                            "keywords": highlight(&r.keywords, &term),
                            "abstract": highlight(&r.abstract_text, &term),
                            "authors": r.authors,
                            "inTitle": r.flags.in_title,
                            "inKeywords": r.flags.in_keywords,
                            "inAbstract": r.flags.in_abstract,
                        })
                    })
                    .collect();
                json!({ "summary": matches.summary, "rows": rows })
            } else {
                json!(matches)
            }
        }
        Commands::Timeline { top } => json!(timeline::build_timeline(&articles, top)),
        Commands::Network { top } => {
            let graph = CoauthorGraph::build(&articles);
            json!({
                "topAuthors": graph.top_authors(top),
                "topCollaborations": graph.top_collaborations(top),
                "graph": graph,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
