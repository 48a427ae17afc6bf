// Bag normalization.
//
// Every stage takes a corpus and returns a new one; nothing is mutated in
// place. `NormalizeStep` describes a stage as a value so callers can assemble
// and reorder sequences.

pub mod filters;
pub mod join;
pub mod lemmatize;
pub mod punctuation;
pub mod stopwords;

pub use filters::{is_numeric_token, remove_numeric_tokens, remove_words};
pub use join::join_token_sequence;
pub use lemmatize::{english_lemma, lemmatize, snowball_algorithm, Lemmatizer};
pub use punctuation::{remove_punctuation, PunctuationSet};
pub use stopwords::{remove_stopwords, stopword_list};

use tracing::debug;

use crate::corpus::Corpus;
use crate::language::Language;

/// One normalization stage.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeStep {
    RemovePunctuation(PunctuationSet),
    RemoveStopwords(Option<Language>),
    RemoveNumeric,
    RemoveWords(Vec<String>),
    Lemmatize(Lemmatizer, Option<Language>),
    Join { parts: Vec<String>, whole: String },
}

impl NormalizeStep {
    pub fn name(&self) -> &'static str {
        match self {
            NormalizeStep::RemovePunctuation(_) => "remove_punctuation",
            NormalizeStep::RemoveStopwords(_) => "remove_stopwords",
            NormalizeStep::RemoveNumeric => "remove_numeric",
            NormalizeStep::RemoveWords(_) => "remove_words",
            NormalizeStep::Lemmatize(..) => "lemmatize",
            NormalizeStep::Join { .. } => "join",
        }
    }

    pub fn apply(&self, corpus: &Corpus) -> Corpus {
        match self {
            NormalizeStep::RemovePunctuation(marks) => remove_punctuation(corpus, marks),
            NormalizeStep::RemoveStopwords(lang) => remove_stopwords(corpus, *lang),
            NormalizeStep::RemoveNumeric => remove_numeric_tokens(corpus),
            NormalizeStep::RemoveWords(words) => remove_words(corpus, words),
            NormalizeStep::Lemmatize(lemmatizer, lang) => lemmatize(corpus, *lemmatizer, *lang),
            NormalizeStep::Join { parts, whole } => join_token_sequence(corpus, parts, whole),
        }
    }
}

/// The standard order: punctuation, lemmatization, stopwords, numeric tokens,
/// excluded words.
pub fn standard_steps(
    lang: Option<Language>,
    lemmatizer: Lemmatizer,
    excluded: &[String],
) -> Vec<NormalizeStep> {
    let mut steps = vec![
        NormalizeStep::RemovePunctuation(PunctuationSet::default()),
        NormalizeStep::Lemmatize(lemmatizer, lang),
        NormalizeStep::RemoveStopwords(lang),
        NormalizeStep::RemoveNumeric,
    ];
    if !excluded.is_empty() {
        steps.push(NormalizeStep::RemoveWords(excluded.to_vec()));
    }
    steps
}

/// Run `steps` in order.
pub fn apply_steps(corpus: &Corpus, steps: &[NormalizeStep]) -> Corpus {
    steps.iter().fold(corpus.clone(), |current, step| {
        let next = step.apply(&current);
        debug!(
            step = step.name(),
            tokens_before = current.token_count(),
            tokens_after = next.token_count(),
            "Applied normalization step"
        );
        next
    })
}
