// Language tags: the closed set of languages the pipeline knows about.
//
// Tags render as ISO-639-1 codes. Regional variants collapse onto their base
// language (pt_BR and pt-PT are both Portuguese) because no stage downstream
// of detection treats them differently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A detected or claimed document language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Arabic,
    Armenian,
    Bengali,
    Bulgarian,
    Chinese,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    Georgian,
    German,
    Greek,
    Gujarati,
    Hebrew,
    Hindi,
    Hungarian,
    Italian,
    Japanese,
    Kannada,
    Kazakh,
    Khmer,
    Korean,
    Lao,
    Malayalam,
    Nepali,
    Norwegian,
    Persian,
    Polish,
    Portuguese,
    Punjabi,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Telugu,
    Thai,
    Turkish,
    Ukrainian,
    Urdu,
    Vietnamese,
    /// No usable signal. A valid terminal classification, not an error.
    Unknown,
}

const ALL: &[Language] = &[
    Language::Arabic,
    Language::Armenian,
    Language::Bengali,
    Language::Bulgarian,
    Language::Chinese,
    Language::Danish,
    Language::Dutch,
    Language::English,
    Language::Finnish,
    Language::French,
    Language::Georgian,
    Language::German,
    Language::Greek,
    Language::Gujarati,
    Language::Hebrew,
    Language::Hindi,
    Language::Hungarian,
    Language::Italian,
    Language::Japanese,
    Language::Kannada,
    Language::Kazakh,
    Language::Khmer,
    Language::Korean,
    Language::Lao,
    Language::Malayalam,
    Language::Nepali,
    Language::Norwegian,
    Language::Persian,
    Language::Polish,
    Language::Portuguese,
    Language::Punjabi,
    Language::Romanian,
    Language::Russian,
    Language::Spanish,
    Language::Swedish,
    Language::Tamil,
    Language::Telugu,
    Language::Thai,
    Language::Turkish,
    Language::Ukrainian,
    Language::Urdu,
    Language::Vietnamese,
];

impl Language {
    /// ISO-639-1 code, or `"unknown"`.
    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::Armenian => "hy",
            Language::Bengali => "bn",
            Language::Bulgarian => "bg",
            Language::Chinese => "zh",
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::Georgian => "ka",
            Language::German => "de",
            Language::Greek => "el",
            Language::Gujarati => "gu",
            Language::Hebrew => "he",
            Language::Hindi => "hi",
            Language::Hungarian => "hu",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Kannada => "kn",
            Language::Kazakh => "kk",
            Language::Khmer => "km",
            Language::Korean => "ko",
            Language::Lao => "lo",
            Language::Malayalam => "ml",
            Language::Nepali => "ne",
            Language::Norwegian => "no",
            Language::Persian => "fa",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::Punjabi => "pa",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swedish => "sv",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Thai => "th",
            Language::Turkish => "tr",
            Language::Ukrainian => "uk",
            Language::Urdu => "ur",
            Language::Vietnamese => "vi",
            Language::Unknown => "unknown",
        }
    }

    /// Every known language, excluding `Unknown`.
    pub fn all() -> &'static [Language] {
        ALL
    }

    pub fn is_unknown(self) -> bool {
        self == Language::Unknown
    }

    /// Parse a tag, returning `Unknown` for anything unrecognized.
    ///
    /// Collector metadata is messy (`en-US`, `pt_BR`, `EN`), so this never
    /// fails; use `FromStr` when an unrecognized tag should be rejected.
    pub fn from_tag(tag: &str) -> Language {
        tag.parse().unwrap_or(Language::Unknown)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        // Strip region suffixes: pt_BR, en-US
        let base = lowered
            .split(['_', '-'])
            .next()
            .unwrap_or_default();

        if base == "unknown" || base.is_empty() {
            return Ok(Language::Unknown);
        }
        // Norwegian Bokmål is tagged nb by some feeds
        if base == "nb" || base == "nn" {
            return Ok(Language::Norwegian);
        }

        ALL.iter()
            .copied()
            .find(|lang| lang.code() == base)
            .ok_or_else(|| format!("Unrecognized language tag: {s}"))
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Language::from_tag(&raw))
    }
}
