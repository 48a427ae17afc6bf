// Language identification.
//
// `classify` maps a text sample to a `Detection` (language tag plus
// confidence). Script blocks decide first; shared scripts fall through to a
// trigram distance comparison against bundled reference texts.

pub mod classifier;
pub mod ngram;
pub mod profiles;
pub mod script;
pub mod tag;

pub use classifier::{classify, normalize_sample, Detection};
pub use tag::Language;
