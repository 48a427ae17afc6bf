// Stopword removal.
//
// Lists come from the `stop-words` crate via the language policy table.
// Languages without a list remove nothing; no language at all means English.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::corpus::Corpus;
use crate::language::Language;
use crate::tokenize::policy_for;

/// Stopwords for a language. `None` selects the English list; a language
/// without a list yields an empty set.
pub fn stopword_list(lang: Option<Language>) -> HashSet<String> {
    let source = match lang {
        None => Some(LANGUAGE::English),
        Some(lang) => policy_for(lang).stop_words_language(),
    };

    match source {
        Some(list) => get(list).into_iter().collect(),
        None => {
            debug!(language = ?lang.map(|l| l.code()), "No stopword list, removing nothing");
            HashSet::new()
        }
    }
}

/// Drop tokens found in the language's stopword list.
pub fn remove_stopwords(corpus: &Corpus, lang: Option<Language>) -> Corpus {
    let stopwords = stopword_list(lang);
    if stopwords.is_empty() {
        return corpus.clone();
    }
    corpus.retain_tokens(|token| !stopwords.contains(token))
}
