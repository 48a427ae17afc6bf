// Bag-of-words corpus.
//
// A corpus maps document identifiers to token sequences. Iteration follows
// identifier order, which fixes the row order of every matrix built from it.

pub mod builder;
pub mod document;

pub use builder::{BuildOutcome, BuildSummary, CorpusBuilder};
pub use document::{document_id, parse_documents, Document};

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// Separator used by the stored form of a bag.
pub const BAG_SEPARATOR: &str = "\t";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    bags: BTreeMap<String, Vec<String>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document's bag.
    pub fn insert(&mut self, id: impl Into<String>, tokens: Vec<String>) {
        self.bags.insert(id.into(), tokens);
    }

    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.bags.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.bags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bags.is_empty()
    }

    /// Documents and their bags in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.bags.iter().map(|(id, bag)| (id.as_str(), bag.as_slice()))
    }

    /// Identifiers in iteration order.
    pub fn all_documents(&self) -> Vec<&str> {
        self.bags.keys().map(String::as_str).collect()
    }

    /// Distinct tokens in first-seen order.
    pub fn all_words(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.bags
            .values()
            .flatten()
            .map(String::as_str)
            .filter(|token| seen.insert(*token))
            .collect()
    }

    /// Total tokens across all bags.
    pub fn token_count(&self) -> usize {
        self.bags.values().map(Vec::len).sum()
    }

    /// Apply `f` to every bag, producing a new corpus. Documents are kept even
    /// when their bag becomes empty.
    pub fn map_bags<F>(&self, mut f: F) -> Corpus
    where
        F: FnMut(&str, &[String]) -> Vec<String>,
    {
        let bags = self
            .bags
            .iter()
            .map(|(id, bag)| (id.clone(), f(id, bag)))
            .collect();
        Corpus { bags }
    }

    /// Keep only tokens for which `keep` returns true.
    pub fn retain_tokens<F>(&self, mut keep: F) -> Corpus
    where
        F: FnMut(&str) -> bool,
    {
        self.map_bags(|_, bag| bag.iter().filter(|t| keep(t)).cloned().collect())
    }

    /// Rebuild a corpus from stored bags (tokens joined by tabs).
    pub fn from_tab_separated<I, K, V>(stored: I) -> Corpus
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        stored
            .into_iter()
            .map(|(id, joined)| {
                let id: String = id.into();
                let tokens: Vec<String> = joined
                    .as_ref()
                    .split(BAG_SEPARATOR)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
                (id, tokens)
            })
            .collect()
    }

    /// Stored form of every bag: tokens joined by tabs.
    pub fn to_tab_separated(&self) -> BTreeMap<String, String> {
        self.bags
            .iter()
            .map(|(id, bag)| (id.clone(), bag.join(BAG_SEPARATOR)))
            .collect()
    }

    /// Parse a bag file: one `id<TAB>tok<TAB>tok...` line per document.
    /// Blank lines are ignored; a line with only an id yields an empty bag.
    pub fn parse_bag_lines(text: &str) -> Corpus {
        let stored: Vec<(&str, &str)> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split_once(BAG_SEPARATOR).unwrap_or((line, "")))
            .collect();
        Corpus::from_tab_separated(stored)
    }

    /// Render as bag-file lines, the inverse of [`Corpus::parse_bag_lines`].
    pub fn to_bag_lines(&self) -> String {
        let mut out = String::new();
        for (id, joined) in self.to_tab_separated() {
            out.push_str(&id);
            if !joined.is_empty() {
                out.push_str(BAG_SEPARATOR);
                out.push_str(&joined);
            }
            out.push('\n');
        }
        out
    }
}

impl FromIterator<(String, Vec<String>)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Corpus {
            bags: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, Vec<&'a str>)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (&'a str, Vec<&'a str>)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(id, bag)| {
                let bag: Vec<String> = bag.into_iter().map(str::to_string).collect();
                (id.to_string(), bag)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Corpus {
        [
            ("b", vec!["gamma", "alpha"]),
            ("a", vec!["alpha", "beta", "alpha"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_iteration_is_identifier_order() {
        assert_eq!(sample().all_documents(), vec!["a", "b"]);
    }

    #[test]
    fn test_all_words_first_seen_order() {
        assert_eq!(sample().all_words(), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_tab_separated_round_trip() {
        let corpus = sample();
        let stored = corpus.to_tab_separated();
        assert_eq!(stored["a"], "alpha\tbeta\talpha");
        assert_eq!(Corpus::from_tab_separated(stored), corpus);
    }

    #[test]
    fn test_parse_bag_lines() {
        let corpus = Corpus::parse_bag_lines("d1\tx\ty\n\nd2\n");
        assert_eq!(corpus.get("d1"), Some(&["x".to_string(), "y".to_string()][..]));
        assert_eq!(corpus.get("d2").map(|b| b.len()), Some(0));
        assert_eq!(Corpus::parse_bag_lines(&corpus.to_bag_lines()), corpus);
    }

    #[test]
    fn test_map_bags_keeps_emptied_documents() {
        let emptied = sample().retain_tokens(|_| false);
        assert_eq!(emptied.len(), 2);
        assert_eq!(emptied.token_count(), 0);
    }
}
