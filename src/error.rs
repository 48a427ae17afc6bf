// Failure taxonomy for the analysis core.
//
// Only configuration problems are errors. Indeterminate classification,
// unsupported normalizers and degenerate numerics all have explicit fallback
// values and never surface here.

/// Reasons the core refuses to compute a result.
///
/// These are distinct from "no topics found": an `AnalysisError` means the
/// request itself cannot be answered with the given inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Weighting or clustering was asked to run over zero documents.
    #[error("Corpus is empty - cannot build a term-document model")]
    EmptyCorpus,

    /// Every term was cut by the document-frequency or feature limits.
    #[error(
        "No terms survived weighting thresholds (min_df={min_df}, max_df={max_df}, max_features={max_features})"
    )]
    EmptyVocabulary {
        min_df: f64,
        max_df: f64,
        max_features: usize,
    },

    /// k is zero or larger than the number of documents.
    #[error("Invalid cluster count: k={k} for {documents} documents")]
    InvalidClusterCount { k: usize, documents: usize },

    /// A document-frequency threshold outside [0, 1], or min above max.
    #[error("Invalid document-frequency thresholds: min_df={min_df}, max_df={max_df}")]
    InvalidThreshold { min_df: f64, max_df: f64 },

    /// An n-gram span that starts at zero or runs backwards.
    #[error("Invalid n-gram range: ({min}, {max})")]
    InvalidNgramRange { min: usize, max: usize },

    /// Matrix dimensions disagree with the context they were built for.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The k-means backend rejected its parameters or failed to converge.
    #[error("K-Means fit failed: {0}")]
    Clustering(String),
}
