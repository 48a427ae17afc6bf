use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::cluster::ClusterConfig;
use crate::corpus::builder::DEFAULT_MIN_CONFIDENCE;
use crate::language::Language;
use crate::model::WeightingConfig;
use crate::normalize::Lemmatizer;
use crate::pipeline::AnalysisConfig;

/// Central configuration loaded from environment variables.
///
/// Every field has a default, so an empty environment is a valid setup.
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Documents detected below this confidence are skipped (0 disables).
    pub min_confidence: f64,
    /// Language filter; `None` (`*`) keeps every language.
    pub language: Option<Language>,
    /// Extra words removed after stopwords (TOPICMILL_EXCLUDE_WORDS, comma-separated).
    pub exclude_words: Vec<String>,
    pub lemmatizer: Lemmatizer,
    pub clusters: usize,
    pub top_terms: usize,
    pub seed: u64,
    /// Minimum cosine distance for an edge to be reported.
    pub edge_threshold: f64,
    pub output_dir: PathBuf,
    pub max_df: f64,
    pub min_df: f64,
    pub max_features: usize,
    pub use_idf: bool,
    /// Longest n-gram counted as a term (1 = unigrams only).
    pub ngram_max: usize,
}

impl Default for Config {
    fn default() -> Self {
        let weighting = WeightingConfig::default();
        let cluster = ClusterConfig::default();
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            language: None,
            exclude_words: Vec::new(),
            lemmatizer: Lemmatizer::None,
            clusters: cluster.k,
            top_terms: cluster.top_terms,
            seed: cluster.seed,
            edge_threshold: 0.0,
            output_dir: PathBuf::from("./output"),
            max_df: weighting.max_df,
            min_df: weighting.min_df,
            max_features: weighting.max_features,
            use_idf: weighting.use_idf,
            ngram_max: weighting.ngram_range.1,
        }
    }
}

/// Parse an env var when set, keeping `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{name}={raw:?} is not valid: {e}")),
        _ => Ok(default),
    }
}

/// Parse a boolean switch: true/false, 1/0 or yes/no, any case.
pub fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => anyhow::bail!("{name}={raw:?} is not valid: expected true/false, 1/0 or yes/no"),
    }
}

/// Boolean env var; unset or blank keeps `default`.
fn flag_var(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => parse_flag(name, &raw),
        _ => Ok(default),
    }
}

/// `*` or an empty value means no language filter.
pub fn parse_language_filter(raw: &str) -> Option<Language> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return None;
    }
    Some(Language::from_tag(raw))
}

/// Split a comma-separated word list, dropping blanks.
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            min_confidence: parse_var("TOPICMILL_MIN_CONFIDENCE", defaults.min_confidence)?,
            language: env::var("TOPICMILL_LANGUAGE")
                .ok()
                .and_then(|raw| parse_language_filter(&raw)),
            exclude_words: env::var("TOPICMILL_EXCLUDE_WORDS")
                .map(|raw| parse_word_list(&raw))
                .unwrap_or_default(),
            lemmatizer: parse_var("TOPICMILL_LEMMATIZER", defaults.lemmatizer)?,
            clusters: parse_var("TOPICMILL_CLUSTERS", defaults.clusters)?,
            top_terms: parse_var("TOPICMILL_TOP_TERMS", defaults.top_terms)?,
            seed: parse_var("TOPICMILL_SEED", defaults.seed)?,
            edge_threshold: parse_var("TOPICMILL_EDGE_THRESHOLD", defaults.edge_threshold)?,
            output_dir: env::var("TOPICMILL_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            max_df: parse_var("TOPICMILL_MAX_DF", defaults.max_df)?,
            min_df: parse_var("TOPICMILL_MIN_DF", defaults.min_df)?,
            max_features: parse_var("TOPICMILL_MAX_FEATURES", defaults.max_features)?,
            use_idf: flag_var("TOPICMILL_USE_IDF", defaults.use_idf)?,
            ngram_max: parse_var("TOPICMILL_NGRAM_MAX", defaults.ngram_max)?,
        })
    }

    /// Check that the document-frequency limits, confidence and n-gram span
    /// make sense together. Call this before running an analysis.
    pub fn require_valid_thresholds(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            anyhow::bail!(
                "TOPICMILL_MIN_CONFIDENCE must be between 0 and 1 (got {}).",
                self.min_confidence
            );
        }
        if self.ngram_max == 0 {
            anyhow::bail!("TOPICMILL_NGRAM_MAX must be at least 1.");
        }
        self.weighting().validate().with_context(|| {
            format!(
                "Check TOPICMILL_MIN_DF ({}) and TOPICMILL_MAX_DF ({}): both must lie in [0, 1] with MIN_DF <= MAX_DF",
                self.min_df, self.max_df
            )
        })?;
        Ok(())
    }

    /// Check that a cluster count was configured.
    pub fn require_clusters(&self) -> Result<()> {
        if self.clusters == 0 {
            anyhow::bail!("TOPICMILL_CLUSTERS must be at least 1.");
        }
        Ok(())
    }

    pub fn weighting(&self) -> WeightingConfig {
        WeightingConfig {
            max_df: self.max_df,
            min_df: self.min_df,
            max_features: self.max_features,
            use_idf: self.use_idf,
            ngram_range: (1, self.ngram_max),
        }
    }

    pub fn cluster(&self) -> ClusterConfig {
        ClusterConfig {
            k: self.clusters,
            top_terms: self.top_terms,
            seed: self.seed,
            ..ClusterConfig::default()
        }
    }

    /// Pipeline settings derived from this configuration.
    pub fn analysis(&self) -> AnalysisConfig {
        AnalysisConfig {
            weighting: self.weighting(),
            cluster: self.cluster(),
            lemmatizer: self.lemmatizer,
            language: self.language,
            excluded: self.exclude_words.clone(),
            ..AnalysisConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.min_confidence, 0.25);
        assert_eq!(config.language, None);
        assert_eq!(config.clusters, 5);
        assert_eq!(config.top_terms, 10);
        assert_eq!(config.seed, 42);
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert!(config.require_valid_thresholds().is_ok());
    }

    #[test]
    fn test_language_filter_star_means_any() {
        assert_eq!(parse_language_filter("*"), None);
        assert_eq!(parse_language_filter(" "), None);
        assert_eq!(parse_language_filter("de"), Some(Language::German));
    }

    #[test]
    fn test_word_list_drops_blanks() {
        assert_eq!(parse_word_list("reuters, ap,,  "), vec!["reuters", "ap"]);
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn test_flag_accepts_common_spellings() {
        for raw in ["1", "true", "YES", " True "] {
            assert!(parse_flag("TOPICMILL_USE_IDF", raw).expect(raw));
        }
        for raw in ["0", "false", "No"] {
            assert!(!parse_flag("TOPICMILL_USE_IDF", raw).expect(raw));
        }
    }

    #[test]
    fn test_flag_rejects_unknown_values() {
        let err = parse_flag("TOPICMILL_USE_IDF", "maybe").expect_err("not a boolean");
        assert!(err.to_string().contains("TOPICMILL_USE_IDF"));
    }

    #[test]
    fn test_require_valid_thresholds_rejects_inverted_df() {
        let config = Config {
            min_df: 0.9,
            max_df: 0.1,
            ..Config::default()
        };
        let err = config.require_valid_thresholds().expect_err("inverted limits");
        assert!(err.to_string().contains("TOPICMILL_MIN_DF"));
    }

    #[test]
    fn test_require_clusters() {
        let config = Config {
            clusters: 0,
            ..Config::default()
        };
        assert!(config.require_clusters().is_err());
    }

    #[test]
    fn test_analysis_carries_overrides() {
        let config = Config {
            clusters: 3,
            seed: 7,
            ngram_max: 2,
            exclude_words: vec!["reuters".into()],
            ..Config::default()
        };
        let analysis = config.analysis();
        assert_eq!(analysis.cluster.k, 3);
        assert_eq!(analysis.cluster.seed, 7);
        assert_eq!(analysis.weighting.ngram_range, (1, 2));
        assert_eq!(analysis.excluded, vec!["reuters".to_string()]);
    }
}
