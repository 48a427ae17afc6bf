// Raw document records as handed over by a collector.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::language::{Detection, Language};

/// A raw record: identifier, optional text fields, language metadata.
///
/// Any text field may be missing. `detected` is normally filled in by the
/// corpus builder; a collector that already ran detection can supply it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "content")]
    pub body: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default, alias = "lang")]
    pub claimed_language: Option<Language>,
    #[serde(default)]
    pub detected: Option<Detection>,
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_claimed_language(mut self, lang: Language) -> Self {
        self.claimed_language = Some(lang);
        self
    }

    /// Present, non-blank text fields in tokenization order:
    /// title, body, summary, keyword.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [&self.title, &self.body, &self.summary, &self.keyword]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .filter(|text| !text.trim().is_empty())
    }

    /// All present fields joined by newlines, used as the detection sample.
    pub fn sample_text(&self) -> String {
        self.fields().collect::<Vec<_>>().join("\n")
    }
}

/// Parse documents from a JSON array or from JSON Lines (one object per
/// line, blank lines ignored).
pub fn parse_documents(text: &str) -> serde_json::Result<Vec<Document>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text);
    }
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str)
        .collect()
}

/// Build a document identifier: `<source>-<key>`, e.g. `articles-1234`.
pub fn document_id(source: &str, key: impl Display) -> String {
    format!("{source}-{key}")
}
