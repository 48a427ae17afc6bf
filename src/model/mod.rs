// Term-document model: vocabulary, sparse weight matrix, TF-IDF builder.

pub mod matrix;
pub mod tfidf;
pub mod vocabulary;

pub use matrix::{ModelContext, TermDocumentMatrix};
pub use tfidf::{build_weighted_matrix, ngrams, WeightingConfig};
pub use vocabulary::Vocabulary;
