//! Co-authorship graph data.
//!
//! Produces the nodes and weighted links the network view renders; layout,
//! physics, and interaction belong to the renderer.

use ahash::AHashMap;
use serde::Serialize;

use crate::article::Article;
use crate::dashboard::LabelCount;
use crate::terms::normalize::parse_authors;

/// Display radius for an author node, sub-linear in the publication count
/// so prolific authors do not swallow the canvas.
#[allow(clippy::cast_precision_loss)]
fn node_radius(count: usize) -> f64 {
    (count as f64).sqrt() * 5.0 + 5.0
}

/// An author node, sized by publication count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorNode {
    pub id: String,
    pub count: usize,
    pub radius: f64,
}

/// An undirected co-authorship link weighted by shared articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaboration {
    pub source: String,
    pub target: String,
    pub strength: usize,
}

/// The co-authorship graph for one collection snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoauthorGraph {
    pub nodes: Vec<AuthorNode>,
    pub links: Vec<Collaboration>,
}

impl CoauthorGraph {
    /// Builds the graph: one node per distinct author name, one link per
    /// unordered author pair sharing at least one article. Nodes come out
    /// count-descending, links strength-descending, alphabetical on ties.
    pub fn build(articles: &[Article]) -> Self {
        let mut author_counts: AHashMap<String, usize> = AHashMap::new();
        let mut pair_counts: AHashMap<(String, String), usize> = AHashMap::new();

        for article in articles {
            let authors = parse_authors(&article.authors);
            for author in &authors {
                *author_counts.entry(author.clone()).or_insert(0) += 1;
            }
            for i in 0..authors.len() {
                for j in (i + 1)..authors.len() {
                    let mut pair = [authors[i].clone(), authors[j].clone()];
                    pair.sort();
                    let [a, b] = pair;
                    *pair_counts.entry((a, b)).or_insert(0) += 1;
                }
            }
        }

        let mut nodes: Vec<AuthorNode> = author_counts
            .into_iter()
            .map(|(id, count)| AuthorNode {
                radius: node_radius(count),
                id,
                count,
            })
            .collect();
        nodes.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));

        let mut links: Vec<Collaboration> = pair_counts
            .into_iter()
            .map(|((source, target), strength)| Collaboration {
                source,
                target,
                strength,
            })
            .collect();
        links.sort_by(|a, b| {
            b.strength
                .cmp(&a.strength)
                .then_with(|| (&a.source, &a.target).cmp(&(&b.source, &b.target)))
        });

        Self { nodes, links }
    }

    /// Most published authors, for the side list.
    pub fn top_authors(&self, limit: usize) -> Vec<LabelCount> {
        self.nodes
            .iter()
            .take(limit)
            .map(|n| LabelCount {
                label: n.id.clone(),
                count: n.count,
            })
            .collect()
    }

    /// Strongest collaborations, labelled "A & B".
    pub fn top_collaborations(&self, limit: usize) -> Vec<LabelCount> {
        self.links
            .iter()
            .take(limit)
            .map(|l| LabelCount {
                label: format!("{} & {}", l.source, l.target),
                count: l.strength,
            })
            .collect()
    }
}
