// Batch pipelines that chain the core stages.

pub mod analyze;

pub use analyze::{analyze, build_corpus, normalize, Analysis, AnalysisConfig};
