// Per-language tokenization policy.
//
// Each language maps to a segmentation strategy and a case-fold flag, plus the
// stopword list and Snowball algorithm the normalizer should use for it.
// Languages without an entry get the default policy: word boundaries, case
// folding, no stopword list, English stemming.

use std::collections::HashMap;
use std::sync::OnceLock;

use rust_stemmers::Algorithm;
use stop_words::LANGUAGE;

use crate::language::Language;

/// How raw text is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segmentation {
    /// Unicode word boundaries.
    WordBoundary,
    /// Western runs by word boundaries, everything else by dictionary.
    MixedScript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePolicy {
    pub language: Language,
    pub segmentation: Segmentation,
    pub case_fold: bool,
}

impl LanguagePolicy {
    pub fn word_boundary(language: Language) -> Self {
        Self {
            language,
            segmentation: Segmentation::WordBoundary,
            case_fold: true,
        }
    }

    pub fn case_sensitive(mut self) -> Self {
        self.case_fold = false;
        self
    }

    pub fn mixed_script(mut self) -> Self {
        self.segmentation = Segmentation::MixedScript;
        self
    }

    /// Stopword list from the `stop-words` crate, when one exists.
    pub fn stop_words_language(&self) -> Option<LANGUAGE> {
        Some(match self.language {
            Language::Arabic => LANGUAGE::Arabic,
            Language::Danish => LANGUAGE::Danish,
            Language::Dutch => LANGUAGE::Dutch,
            Language::English => LANGUAGE::English,
            Language::Finnish => LANGUAGE::Finnish,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Greek => LANGUAGE::Greek,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Italian => LANGUAGE::Italian,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Romanian => LANGUAGE::Romanian,
            Language::Russian => LANGUAGE::Russian,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Turkish => LANGUAGE::Turkish,
            _ => return None,
        })
    }

    /// Snowball algorithm for this language, when one exists.
    pub fn stemming_algorithm(&self) -> Option<Algorithm> {
        Some(match self.language {
            Language::Arabic => Algorithm::Arabic,
            Language::Danish => Algorithm::Danish,
            Language::Dutch => Algorithm::Dutch,
            Language::English => Algorithm::English,
            Language::Finnish => Algorithm::Finnish,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Greek => Algorithm::Greek,
            Language::Hungarian => Algorithm::Hungarian,
            Language::Italian => Algorithm::Italian,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Romanian => Algorithm::Romanian,
            Language::Russian => Algorithm::Russian,
            Language::Spanish => Algorithm::Spanish,
            Language::Swedish => Algorithm::Swedish,
            Language::Tamil => Algorithm::Tamil,
            Language::Turkish => Algorithm::Turkish,
            _ => return None,
        })
    }
}

/// Lookup table of language policies with a fallback for unlisted tags.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    policies: HashMap<Language, LanguagePolicy>,
}

impl PolicyTable {
    pub fn empty() -> Self {
        Self {
            policies: HashMap::new(),
        }
    }

    /// The built-in table. German, Danish and Dutch keep case; Chinese uses
    /// mixed-script segmentation.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        for lang in Language::all() {
            table.register(LanguagePolicy::word_boundary(*lang));
        }
        for lang in [Language::German, Language::Danish, Language::Dutch] {
            table.register(LanguagePolicy::word_boundary(lang).case_sensitive());
        }
        table.register(LanguagePolicy::word_boundary(Language::Chinese).mixed_script());
        table
    }

    /// Add or replace the policy for `policy.language`.
    pub fn register(&mut self, policy: LanguagePolicy) {
        self.policies.insert(policy.language, policy);
    }

    pub fn get(&self, lang: Language) -> LanguagePolicy {
        self.policies
            .get(&lang)
            .copied()
            .unwrap_or_else(|| LanguagePolicy::word_boundary(lang))
    }
}

static STANDARD: OnceLock<PolicyTable> = OnceLock::new();

/// Policy for a language from the built-in table.
pub fn policy_for(lang: Language) -> LanguagePolicy {
    STANDARD.get_or_init(PolicyTable::standard).get(lang)
}
