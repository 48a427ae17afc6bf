// Language classification from script blocks and trigram distance.
//
// Scripts that belong to exactly one language decide immediately with full
// confidence. Shared scripts narrow the field to a candidate list, and the
// candidate whose reference trigram ranking is closest to the sample wins.

use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use super::ngram::{distance, ordered_model, MIN_LENGTH};
use super::profiles::{self, ALL_LATIN, ARABIC, CYRILLIC, DEVANAGARI, EXTENDED_LATIN};
use super::script::{find_runs, Script};
use super::tag::Language;

/// Samples shorter than this after normalization carry no usable signal.
const MIN_SAMPLE_CHARS: usize = 3;

/// Blocks used by a single language in practice.
const SINGLETONS: &[(Script, Language)] = &[
    (Script::Armenian, Language::Armenian),
    (Script::Hebrew, Language::Hebrew),
    (Script::Bengali, Language::Bengali),
    (Script::Gurmukhi, Language::Punjabi),
    (Script::Gujarati, Language::Gujarati),
    (Script::Tamil, Language::Tamil),
    (Script::Telugu, Language::Telugu),
    (Script::Kannada, Language::Kannada),
    (Script::Malayalam, Language::Malayalam),
    (Script::Thai, Language::Thai),
    (Script::Lao, Language::Lao),
    (Script::Georgian, Language::Georgian),
    (Script::Khmer, Language::Khmer),
];

/// A language guess with a confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub language: Language,
    pub confidence: f64,
}

impl Detection {
    /// The indeterminate result: `(unknown, 0.0)`.
    pub fn unknown() -> Self {
        Self {
            language: Language::Unknown,
            confidence: 0.0,
        }
    }

    /// A script-level decision that needs no scoring.
    pub fn certain(language: Language) -> Self {
        Self {
            language,
            confidence: 1.0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.language.is_unknown()
    }
}

/// Prepare text for script analysis: NFC, every non-alphabetic code point
/// replaced by a space, whitespace collapsed and trimmed.
pub fn normalize_sample(text: &str) -> String {
    let spaced: String = text
        .nfc()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classify a text sample.
///
/// Never fails: insufficient or unrecognized input yields
/// [`Detection::unknown`].
pub fn classify(text: &str) -> Detection {
    let sample = normalize_sample(text);
    if sample.chars().count() < MIN_SAMPLE_CHARS {
        return Detection::unknown();
    }

    let runs = find_runs(&sample);
    let has = |script: Script| runs.contains(&script);

    if has(Script::Hangul) {
        return Detection::certain(Language::Korean);
    }
    if has(Script::Greek) {
        return Detection::certain(Language::Greek);
    }
    if has(Script::Kana) {
        return Detection::certain(Language::Japanese);
    }
    if has(Script::Han) {
        return Detection::certain(Language::Chinese);
    }
    if has(Script::Cyrillic) {
        return check(&sample, CYRILLIC);
    }
    if has(Script::Arabic) {
        return check(&sample, ARABIC);
    }
    if has(Script::Devanagari) {
        return check(&sample, DEVANAGARI);
    }
    if let Some((_, lang)) = SINGLETONS.iter().find(|(script, _)| has(*script)) {
        return Detection::certain(*lang);
    }
    if has(Script::LatinExtendedAdditional) {
        return Detection::certain(Language::Vietnamese);
    }
    if has(Script::ExtendedLatin) {
        return check(&sample, EXTENDED_LATIN);
    }
    if has(Script::BasicLatin) {
        return check(&sample, ALL_LATIN);
    }

    Detection::unknown()
}

/// Score a normalized sample against each candidate's reference model.
///
/// Confidence is `1 - min/max` over the distances observed in this call, so
/// it measures how clearly the winner separates from the other candidates.
fn check(sample: &str, candidates: &[Language]) -> Detection {
    if sample.chars().count() < MIN_LENGTH {
        return Detection::unknown();
    }

    let model = ordered_model(sample);
    let scores: Vec<(Language, usize)> = candidates
        .iter()
        .filter_map(|lang| {
            profiles::reference_model(*lang).map(|reference| (*lang, distance(&model, reference)))
        })
        .collect();

    // min_by_key keeps the first minimum, so candidate order breaks ties
    let Some(&(best, min)) = scores.iter().min_by_key(|(_, d)| *d) else {
        return Detection::unknown();
    };
    let max = scores.iter().map(|(_, d)| *d).max().unwrap_or(0);

    let confidence = if max == 0 {
        debug!(language = %best, "All candidate distances are zero, confidence defaults to 0");
        0.0
    } else {
        1.0 - (min as f64 / max as f64)
    };

    Detection {
        language: best,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sample_strips_non_letters() {
        assert_eq!(normalize_sample("  Hello,\n\tworld!! 42 "), "Hello world");
        assert_eq!(normalize_sample("1234"), "");
    }

    #[test]
    fn test_short_sample_is_unknown() {
        assert_eq!(classify("ab"), Detection::unknown());
        assert_eq!(classify("a.b"), Detection::unknown());
    }

    #[test]
    fn test_latin_below_min_length_is_unknown() {
        // Letters enough to pass the 3-char gate, not enough to rank trigrams
        assert_eq!(classify("hello there"), Detection::unknown());
    }

    #[test]
    fn test_single_candidate_gives_zero_confidence() {
        let detection = check("this is a sample that is long enough", &[Language::English]);
        assert_eq!(detection.language, Language::English);
        assert_eq!(detection.confidence, 0.0);
    }

    #[test]
    fn test_candidates_without_models_are_skipped() {
        let detection = check("this is a sample that is long enough", &[Language::Korean]);
        assert_eq!(detection, Detection::unknown());
    }
}
