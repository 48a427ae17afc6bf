// TF-IDF weighting.
//
// weight(t, d) = count(t, d) * ln(N / df(t)), or the raw count when IDF is
// off. Terms are n-grams of consecutive tokens joined by a space. Document
// frequency limits and a vocabulary cap decide which terms become columns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::matrix::{ModelContext, TermDocumentMatrix};
use super::vocabulary::Vocabulary;
use crate::corpus::Corpus;
use crate::error::AnalysisError;

/// Weighting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingConfig {
    /// Drop terms found in a larger fraction of documents than this.
    pub max_df: f64,
    /// Drop terms found in a smaller fraction of documents than this.
    pub min_df: f64,
    /// Keep at most this many terms (highest corpus frequency first).
    pub max_features: usize,
    /// Multiply term counts by inverse document frequency.
    pub use_idf: bool,
    /// Inclusive n-gram lengths, e.g. (1, 2) for unigrams and bigrams.
    pub ngram_range: (usize, usize),
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            max_df: 1.0,
            min_df: 0.0,
            max_features: 200_000,
            use_idf: true,
            ngram_range: (1, 1),
        }
    }
}

impl WeightingConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(self.min_df) || !in_unit(self.max_df) || self.min_df > self.max_df {
            return Err(AnalysisError::InvalidThreshold {
                min_df: self.min_df,
                max_df: self.max_df,
            });
        }
        let (min, max) = self.ngram_range;
        if min == 0 || min > max {
            return Err(AnalysisError::InvalidNgramRange { min, max });
        }
        Ok(())
    }
}

/// All n-grams of the configured lengths, in order of appearance.
pub fn ngrams(tokens: &[String], range: (usize, usize)) -> Vec<String> {
    let (min, max) = range;
    let mut grams = Vec::new();
    for n in min.max(1)..=max {
        grams.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    grams
}

/// Build the vocabulary and weighted matrix for a corpus.
pub fn build_weighted_matrix(
    corpus: &Corpus,
    config: &WeightingConfig,
) -> Result<(ModelContext, TermDocumentMatrix), AnalysisError> {
    if corpus.is_empty() {
        return Err(AnalysisError::EmptyCorpus);
    }
    config.validate()?;

    let n_docs = corpus.len();
    let mut counts: Vec<HashMap<String, usize>> = Vec::with_capacity(n_docs);
    let mut doc_freq: HashMap<String, usize> = HashMap::new();
    let mut total_freq: HashMap<String, usize> = HashMap::new();

    for (_, bag) in corpus.iter() {
        let mut doc_counts: HashMap<String, usize> = HashMap::new();
        for gram in ngrams(bag, config.ngram_range) {
            *doc_counts.entry(gram).or_insert(0) += 1;
        }
        for (gram, count) in &doc_counts {
            *doc_freq.entry(gram.clone()).or_insert(0) += 1;
            *total_freq.entry(gram.clone()).or_insert(0) += count;
        }
        counts.push(doc_counts);
    }

    let mut kept: Vec<(&String, usize)> = doc_freq
        .iter()
        .filter(|(_, df)| {
            let fraction = **df as f64 / n_docs as f64;
            fraction >= config.min_df && fraction <= config.max_df
        })
        .map(|(term, _)| (term, total_freq.get(term).copied().unwrap_or(0)))
        .collect();

    if kept.len() > config.max_features {
        kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        kept.truncate(config.max_features);
    }

    if kept.is_empty() {
        return Err(AnalysisError::EmptyVocabulary {
            min_df: config.min_df,
            max_df: config.max_df,
            max_features: config.max_features,
        });
    }

    let vocabulary = Vocabulary::from_terms(kept.iter().map(|(term, _)| term.as_str()));

    let rows: Vec<Vec<(usize, f64)>> = counts
        .iter()
        .map(|doc_counts| {
            doc_counts
                .iter()
                .filter_map(|(term, count)| {
                    let col = vocabulary.index_of(term)?;
                    let weight = if config.use_idf {
                        let df = doc_freq.get(term).copied().unwrap_or(1).max(1);
                        *count as f64 * (n_docs as f64 / df as f64).ln()
                    } else {
                        *count as f64
                    };
                    Some((col, weight))
                })
                .collect()
        })
        .collect();

    let matrix = TermDocumentMatrix::from_rows(rows, vocabulary.len())?;
    let context = ModelContext {
        documents: corpus.all_documents().into_iter().map(str::to_string).collect(),
        vocabulary,
    };

    if matrix.nnz() == 0 {
        debug!("Every weight is zero, terms occur in all documents");
    }
    info!(
        documents = context.documents.len(),
        terms = context.vocabulary.len(),
        nonzero = matrix.nnz(),
        use_idf = config.use_idf,
        "Built term-document matrix"
    );

    Ok((context, matrix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngrams_unigram_and_bigram() {
        let tokens: Vec<String> = ["a", "b", "c"].iter().map(|t| t.to_string()).collect();
        assert_eq!(ngrams(&tokens, (1, 2)), vec!["a", "b", "c", "a b", "b c"]);
        assert!(ngrams(&tokens, (4, 4)).is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        let config = WeightingConfig {
            min_df: 0.8,
            max_df: 0.2,
            ..WeightingConfig::default()
        };
        assert!(matches!(config.validate(), Err(AnalysisError::InvalidThreshold { .. })));

        let config = WeightingConfig {
            ngram_range: (0, 1),
            ..WeightingConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(AnalysisError::InvalidNgramRange { min: 0, max: 1 })
        );
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let corpus: Corpus = [
            ("a", vec!["x", "x", "y", "z"]),
            ("b", vec!["x", "y", "w"]),
        ]
        .into_iter()
        .collect();
        let config = WeightingConfig {
            max_features: 2,
            use_idf: false,
            ..WeightingConfig::default()
        };
        let (context, _) = build_weighted_matrix(&corpus, &config).expect("non-empty corpus");
        assert_eq!(context.vocabulary.terms(), &["x", "y"]);
    }

    #[test]
    fn test_idf_zero_weights_are_not_stored() {
        let corpus: Corpus = [("a", vec!["x", "y"]), ("b", vec!["x"])].into_iter().collect();
        let (context, matrix) =
            build_weighted_matrix(&corpus, &WeightingConfig::default()).expect("valid corpus");
        let x = context.vocabulary.index_of("x").expect("x in vocabulary");
        let y = context.vocabulary.index_of("y").expect("y in vocabulary");
        assert_eq!(matrix.get(0, x), 0.0);
        let stored = matrix.row(0).expect("row 0");
        assert!(stored.indices().iter().all(|col| *col != x));
        assert!((matrix.get(0, y) - 2f64.ln()).abs() < 1e-12);
    }
}
