// Corpus analysis pipeline: documents -> bags -> weights -> distances -> clusters.
//
// Each stage consumes the complete output of the previous one. The progress
// bar over documents is a side effect only and is hidden in quiet mode.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cluster::{self, Cluster, ClusterConfig};
use crate::corpus::{BuildSummary, Corpus, CorpusBuilder, Document};
use crate::error::AnalysisError;
use crate::language::Language;
use crate::model::{build_weighted_matrix, ModelContext, TermDocumentMatrix, WeightingConfig};
use crate::normalize::{apply_steps, standard_steps, Lemmatizer, NormalizeStep, PunctuationSet};
use crate::similarity::{pairwise_distance, DistanceMatrix};

/// Everything the standard analysis needs besides the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub weighting: WeightingConfig,
    pub cluster: ClusterConfig,
    pub lemmatizer: Lemmatizer,
    /// Language for stopwords and lemmatization; `None` means English lists.
    pub language: Option<Language>,
    /// Extra words dropped after stopword removal.
    pub excluded: Vec<String>,
    #[serde(skip)]
    pub punctuation: PunctuationSet,
}

impl AnalysisConfig {
    /// The standard normalization sequence, using this config's punctuation
    /// marks.
    pub fn steps(&self) -> Vec<NormalizeStep> {
        let mut steps = standard_steps(self.language, self.lemmatizer, &self.excluded);
        for step in &mut steps {
            if let NormalizeStep::RemovePunctuation(marks) = step {
                *marks = self.punctuation.clone();
            }
        }
        steps
    }
}

/// Results of one analysis run. Every artifact shares `context`'s document
/// and term ordering.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub context: ModelContext,
    pub matrix: TermDocumentMatrix,
    pub distances: DistanceMatrix,
    pub clusters: Vec<Cluster>,
}

impl Analysis {
    /// Pretty-printed JSON of every artifact.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Turn raw documents into a corpus, showing a progress bar unless `quiet`.
pub fn build_corpus(
    documents: &[Document],
    mut builder: CorpusBuilder,
    quiet: bool,
) -> (Corpus, BuildSummary) {
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(documents.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Documents [{bar:30}] {pos}/{len} ({eta})")
            .expect("static progress template"),
    );

    for document in documents {
        builder.push(document);
        pb.inc(1);
    }
    pb.finish_and_clear();

    builder.finish()
}

/// Apply the configured normalization sequence.
pub fn normalize(corpus: &Corpus, config: &AnalysisConfig) -> Corpus {
    apply_steps(corpus, &config.steps())
}

/// Normalize, weight, compare and cluster a corpus of raw bags.
pub fn analyze(corpus: &Corpus, config: &AnalysisConfig) -> Result<Analysis, AnalysisError> {
    if corpus.is_empty() {
        return Err(AnalysisError::EmptyCorpus);
    }

    let normalized = normalize(corpus, config);
    info!(
        documents = normalized.len(),
        tokens_before = corpus.token_count(),
        tokens_after = normalized.token_count(),
        "Normalized corpus"
    );

    let (context, matrix) = build_weighted_matrix(&normalized, &config.weighting)?;
    let distances = pairwise_distance(&matrix);
    let clusters = cluster::cluster(&context, &matrix, &config.cluster)?;

    Ok(Analysis {
        context,
        matrix,
        distances,
        clusters,
    })
}
