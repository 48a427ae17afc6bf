// Punctuation removal.

use std::collections::HashSet;

use crate::corpus::Corpus;

const ASCII_MARKS: &[&str] = &[
    ",", ".", "!", "?", ";", ":", "/", "\\", "'", "\"", "`", "``", "''", "(", ")", "[", "]",
    "{", "}", "%", "$", "*", "&", "^", "-", "+", "=",
];

const FULL_WIDTH_MARKS: &[&str] = &[
    "\u{ff1a}", "\u{ff1b}", "\u{ff0c}", "\u{3002}", "\u{ff01}", "\u{ff1f}", "\u{201c}",
    "\u{201d}", "\u{3001}", "\u{300a}", "\u{300b}", "\u{3008}", "\u{3009}", "\u{ff08}",
    "\u{ff09}",
];

/// Set of tokens treated as punctuation. Matching is by whole token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationSet {
    marks: HashSet<String>,
}

impl Default for PunctuationSet {
    fn default() -> Self {
        ASCII_MARKS
            .iter()
            .chain(FULL_WIDTH_MARKS)
            .map(|m| m.to_string())
            .collect()
    }
}

impl PunctuationSet {
    /// An empty set, for callers that build their own list.
    pub fn empty() -> Self {
        Self {
            marks: HashSet::new(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.marks.contains(token)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Add marks to the set.
    pub fn with<I, S>(mut self, marks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.marks.extend(marks.into_iter().map(Into::into));
        self
    }
}

impl FromIterator<String> for PunctuationSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            marks: iter.into_iter().collect(),
        }
    }
}

/// Drop every token that is a member of `marks`.
pub fn remove_punctuation(corpus: &Corpus, marks: &PunctuationSet) -> Corpus {
    corpus.retain_tokens(|token| !marks.contains(token))
}
