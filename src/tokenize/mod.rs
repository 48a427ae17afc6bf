// Tokenizer dispatch.
//
// `tokenize` looks up the language's policy, segments with the matching
// strategy, and case-folds unless the language keeps case. Punctuation and
// stopwords are left in place; removing them is the normalizer's job.

pub mod latin;
pub mod logographic;
pub mod mixed;
pub mod registry;
pub mod traits;

pub use latin::WordBoundarySegmenter;
pub use logographic::DictionarySegmenter;
pub use mixed::{is_western, split_runs, MixedScriptSegmenter};
pub use registry::{policy_for, LanguagePolicy, PolicyTable, Segmentation};
pub use traits::WordSegmenter;

use crate::language::Language;

/// Tokenize `text` with the built-in policy for `lang`.
pub fn tokenize(lang: Language, text: &str) -> Vec<String> {
    tokenize_with(&policy_for(lang), text)
}

/// Tokenize `text` with an explicit policy.
pub fn tokenize_with(policy: &LanguagePolicy, text: &str) -> Vec<String> {
    let tokens = match policy.segmentation {
        Segmentation::WordBoundary => WordBoundarySegmenter.segment(text),
        Segmentation::MixedScript => <MixedScriptSegmenter>::default().segment(text),
    };

    if policy.case_fold {
        tokens.into_iter().map(|t| t.to_lowercase()).collect()
    } else {
        tokens
    }
}
