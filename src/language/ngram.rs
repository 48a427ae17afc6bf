// Trigram frequency models and rank distance.
//
// A sample's trigrams are counted, ranked by frequency, and compared against
// a reference rank table per candidate language. The closer the rankings, the
// smaller the distance.

use std::collections::HashMap;

/// How many ranked trigrams a model keeps and a comparison inspects.
pub const MAX_GRAMS: usize = 300;

/// Samples shorter than this (in characters) are too small to rank.
pub const MIN_LENGTH: usize = 20;

/// Count lowercase trigrams and order them by descending count, breaking ties
/// by ascending trigram so the order is deterministic.
pub fn ordered_model(sample: &str) -> Vec<String> {
    let chars: Vec<char> = sample.to_lowercase().chars().collect();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for window in chars.windows(3) {
        *counts.entry(window.iter().collect()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().map(|(gram, _)| gram).collect()
}

/// Rank table for one language, built from its reference text.
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    ranks: HashMap<String, usize>,
}

impl ReferenceModel {
    /// Build from an already-normalized reference text, keeping the top
    /// `MAX_GRAMS` trigrams.
    pub fn from_text(text: &str) -> Self {
        let ranks = ordered_model(text)
            .into_iter()
            .take(MAX_GRAMS)
            .enumerate()
            .map(|(rank, gram)| (gram, rank))
            .collect();
        Self { ranks }
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn rank(&self, gram: &str) -> Option<usize> {
        self.ranks.get(gram).copied()
    }
}

/// Out-of-place distance between a sample model and a reference.
///
/// Each of the first `MAX_GRAMS` sample trigrams contributes the absolute
/// difference of its ranks, or `MAX_GRAMS` when the reference lacks it.
pub fn distance(sample: &[String], reference: &ReferenceModel) -> usize {
    sample
        .iter()
        .take(MAX_GRAMS)
        .enumerate()
        .map(|(i, gram)| match reference.rank(gram) {
            Some(rank) => i.abs_diff(rank),
            None => MAX_GRAMS,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_model_ranks_by_count_then_text() {
        // "aaaa" has trigram "aaa" twice; "bcd" style grams once each
        let model = ordered_model("aaaa bc");
        assert_eq!(model[0], "aaa");
        // Remaining single-count grams sort lexicographically
        let rest = &model[1..];
        let mut sorted = rest.to_vec();
        sorted.sort();
        assert_eq!(rest, sorted.as_slice());
    }

    #[test]
    fn test_ordered_model_lowercases() {
        assert_eq!(ordered_model("ABC"), vec!["abc".to_string()]);
    }

    #[test]
    fn test_identical_text_has_zero_distance() {
        let text = "the quick brown fox jumps over the lazy dog";
        let reference = ReferenceModel::from_text(text);
        assert_eq!(distance(&ordered_model(text), &reference), 0);
    }

    #[test]
    fn test_missing_trigrams_cost_max() {
        let reference = ReferenceModel::from_text("abcdef");
        let sample = ordered_model("xyz");
        assert_eq!(distance(&sample, &reference), MAX_GRAMS);
    }
}
