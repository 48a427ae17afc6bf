// Token filters: numeric tokens and caller-supplied exclusions.

use std::collections::HashSet;

use crate::corpus::Corpus;

/// True when the token is non-empty and every character is numeric.
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}

/// Drop tokens made entirely of digits.
pub fn remove_numeric_tokens(corpus: &Corpus) -> Corpus {
    corpus.retain_tokens(|token| !is_numeric_token(token))
}

/// Drop tokens that exactly match a member of `excluded`.
pub fn remove_words<S: AsRef<str>>(corpus: &Corpus, excluded: &[S]) -> Corpus {
    if excluded.is_empty() {
        return corpus.clone();
    }
    let excluded: HashSet<&str> = excluded.iter().map(|word| word.as_ref()).collect();
    corpus.retain_tokens(|token| !excluded.contains(token))
}
