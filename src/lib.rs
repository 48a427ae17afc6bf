// topicmill: multilingual corpus analysis
//
// This is the library root. Each module is one stage of the analysis
// pipeline: language detection, tokenization, bag normalization, term
// weighting, document similarity and clustering, plus reporting.

pub mod cluster;
pub mod config;
pub mod corpus;
pub mod error;
pub mod language;
pub mod model;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod similarity;
pub mod tokenize;

pub use error::AnalysisError;
