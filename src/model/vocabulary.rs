// Vocabulary: the sorted, duplicate-free term list that indexes matrix columns.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::corpus::Corpus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from any terms; duplicates collapse and the result is sorted.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        let terms: Vec<String> = sorted.into_iter().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self { terms, index }
    }

    /// Every distinct token in the corpus.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self::from_terms(corpus.all_words())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}
