//! Superterm resolution: which terms contain which other terms.

use serde::Serialize;

use super::frequency::TermFrequencyRow;

/// One superterm of a dictionary entry, carrying the superterm's own
/// frequency counts for display next to the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainmentEntry {
    pub term: String,
    #[serde(flatten)]
    pub freq: TermFrequencyRow,
}

/// For every term, lists the other terms that contain it as a substring,
/// ranked by total frequency descending. Ties keep the term list's
/// discovery order (the sort is stable). The relation is irreflexive: a
/// term never lists itself.
///
/// This walks every pair, O(|terms|²). At a few thousand unique keywords
/// that is well under the interactive budget; a prefix/suffix index would
/// only be worth it far beyond survey scale.
///
/// `rows` must be positionally aligned with `terms`. Terms arrive
/// lowercased from keyword parsing, so plain `contains` is already the
/// case-insensitive containment test.
pub fn build_containment(
    terms: &[String],
    rows: &[TermFrequencyRow],
) -> Vec<Vec<ContainmentEntry>> {
    debug_assert_eq!(terms.len(), rows.len());

    terms
        .iter()
        .map(|term| {
            let mut included: Vec<ContainmentEntry> = terms
                .iter()
                .zip(rows)
                .filter(|(other, _)| *other != term && other.contains(term.as_str()))
                .map(|(other, freq)| ContainmentEntry {
                    term: other.clone(),
                    freq: *freq,
                })
                .collect();
            included.sort_by(|a, b| b.freq.total().cmp(&a.freq.total()));
            included
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn freq(in_title: usize, in_keywords: usize, in_abstract: usize) -> TermFrequencyRow {
        TermFrequencyRow {
            in_title,
            in_keywords,
            in_abstract,
        }
    }

    #[test]
    fn finds_superterms_and_never_itself() {
        let terms: Vec<String> = ["learning", "deep learning", "machine learning", "iot"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let rows = vec![freq(1, 1, 0), freq(0, 2, 1), freq(2, 3, 1), freq(0, 1, 0)];

        let containment = build_containment(&terms, &rows);

        let learning: Vec<_> = containment[0].iter().map(|e| e.term.as_str()).collect();
        check!(learning == vec!["machine learning", "deep learning"]);
        check!(containment[1].is_empty());
        check!(containment[3].is_empty());
    }

    #[test]
    fn ranking_is_total_descending_with_stable_ties() {
        let terms: Vec<String> = ["net", "networks", "subnet", "net zero"]
            .iter()
            .map(ToString::to_string)
            .collect();
        // "networks" and "subnet" tie on total; discovery order must hold.
        let rows = vec![freq(0, 1, 0), freq(1, 1, 0), freq(0, 2, 0), freq(3, 1, 0)];

        let containment = build_containment(&terms, &rows);
        let net: Vec<_> = containment[0].iter().map(|e| e.term.as_str()).collect();
        check!(net == vec!["net zero", "networks", "subnet"]);
    }

    #[test]
    fn empty_term_set() {
        check!(build_containment(&[], &[]).is_empty());
    }
}
