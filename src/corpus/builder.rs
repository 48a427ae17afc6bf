// Corpus builder: raw documents in, bags of words out.
//
// For each document: detect the language (unless the collector already did),
// apply the confidence threshold and language filter, tokenize every present
// field in order, and keep the document only if it produced tokens.

use serde::Serialize;
use tracing::{debug, info};

use super::{Corpus, Document};
use crate::language::{classify, Detection, Language};
use crate::tokenize::tokenize;

/// Default minimum detection confidence for a document to be kept.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.25;

/// What happened to one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildOutcome {
    Kept(Detection),
    SkippedConfidence(Detection),
    SkippedLanguage(Detection),
    SkippedEmpty(Detection),
}

/// Per-run counts of kept and skipped documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub kept: usize,
    pub skipped_confidence: usize,
    pub skipped_language: usize,
    pub skipped_empty: usize,
}

impl BuildSummary {
    pub fn total(&self) -> usize {
        self.kept + self.skipped_confidence + self.skipped_language + self.skipped_empty
    }
}

/// Accumulates documents into a corpus.
///
/// Use [`CorpusBuilder::push`] for per-document control (progress bars,
/// logging), or [`CorpusBuilder::build`] for a whole batch.
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    min_confidence: f64,
    language: Option<Language>,
    corpus: Corpus,
    summary: BuildSummary,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            language: None,
            corpus: Corpus::new(),
            summary: BuildSummary::default(),
        }
    }
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents detected with lower confidence are skipped. `0.0` keeps all.
    pub fn min_confidence(mut self, threshold: f64) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Keep only documents whose claimed or detected language is `lang`.
    /// `None` keeps every language.
    pub fn language(mut self, lang: Option<Language>) -> Self {
        self.language = lang;
        self
    }

    /// Detection for a document: the collector's, or a fresh classification
    /// of its concatenated fields.
    pub fn detect(document: &Document) -> Detection {
        document
            .detected
            .unwrap_or_else(|| classify(&document.sample_text()))
    }

    /// Language whose tokenizer applies: detected, else claimed, else unknown.
    fn tokenizer_language(document: &Document, detection: &Detection) -> Language {
        if !detection.is_unknown() {
            return detection.language;
        }
        document.claimed_language.unwrap_or(Language::Unknown)
    }

    fn matches_language(&self, document: &Document, detection: &Detection) -> bool {
        match self.language {
            None => true,
            Some(wanted) => {
                detection.language == wanted || document.claimed_language == Some(wanted)
            }
        }
    }

    /// Process one document.
    pub fn push(&mut self, document: &Document) -> BuildOutcome {
        let detection = Self::detect(document);

        if self.min_confidence > 0.0 && detection.confidence < self.min_confidence {
            debug!(
                id = %document.id,
                language = %detection.language,
                confidence = detection.confidence,
                "Skipping low-confidence document"
            );
            self.summary.skipped_confidence += 1;
            return BuildOutcome::SkippedConfidence(detection);
        }

        if !self.matches_language(document, &detection) {
            self.summary.skipped_language += 1;
            return BuildOutcome::SkippedLanguage(detection);
        }

        let lang = Self::tokenizer_language(document, &detection);
        let tokens: Vec<String> = document
            .fields()
            .flat_map(|field| tokenize(lang, field))
            .collect();

        if tokens.is_empty() {
            self.summary.skipped_empty += 1;
            return BuildOutcome::SkippedEmpty(detection);
        }

        self.corpus.insert(document.id.clone(), tokens);
        self.summary.kept += 1;
        BuildOutcome::Kept(detection)
    }

    /// Finish and return the corpus with its summary.
    pub fn finish(self) -> (Corpus, BuildSummary) {
        info!(
            kept = self.summary.kept,
            skipped_confidence = self.summary.skipped_confidence,
            skipped_language = self.summary.skipped_language,
            skipped_empty = self.summary.skipped_empty,
            "Built corpus"
        );
        (self.corpus, self.summary)
    }

    /// Process a batch and finish.
    pub fn build<'a, I>(mut self, documents: I) -> (Corpus, BuildSummary)
    where
        I: IntoIterator<Item = &'a Document>,
    {
        for document in documents {
            self.push(document);
        }
        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(id: &str, lang: Language, confidence: f64) -> Document {
        let mut doc = Document::new(id);
        doc.detected = Some(Detection {
            language: lang,
            confidence,
        });
        doc
    }

    #[test]
    fn test_fields_tokenized_in_order() {
        let doc = preset("d", Language::English, 1.0)
            .with_keyword("Keyword")
            .with_title("The Title")
            .with_body("Body text");
        let (corpus, summary) = CorpusBuilder::new().build([&doc]);
        assert_eq!(summary.kept, 1);
        assert_eq!(
            corpus.get("d").map(|b| b.to_vec()),
            Some(vec![
                "the".to_string(),
                "title".to_string(),
                "body".to_string(),
                "text".to_string(),
                "keyword".to_string(),
            ])
        );
    }

    #[test]
    fn test_low_confidence_is_skipped() {
        let doc = preset("d", Language::English, 0.1).with_body("words here");
        let (corpus, summary) = CorpusBuilder::new().build([&doc]);
        assert!(corpus.is_empty());
        assert_eq!(summary.skipped_confidence, 1);

        let (corpus, _) = CorpusBuilder::new().min_confidence(0.0).build([&doc]);
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_language_filter_accepts_claimed_or_detected() {
        let detected = preset("a", Language::French, 1.0).with_body("bonjour");
        let claimed = preset("b", Language::Unknown, 1.0)
            .with_claimed_language(Language::French)
            .with_body("salut");
        let other = preset("c", Language::English, 1.0).with_body("hello");

        let (corpus, summary) = CorpusBuilder::new()
            .language(Some(Language::French))
            .build([&detected, &claimed, &other]);
        assert_eq!(corpus.all_documents(), vec!["a", "b"]);
        assert_eq!(summary.skipped_language, 1);
    }

    #[test]
    fn test_documents_without_text_are_omitted() {
        let doc = preset("d", Language::English, 1.0).with_title("   ");
        let (corpus, summary) = CorpusBuilder::new().build([&doc]);
        assert!(corpus.is_empty());
        assert_eq!(summary.skipped_empty, 1);
        assert_eq!(summary.total(), 1);
    }
}
