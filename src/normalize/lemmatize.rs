// Lemmatization and stemming.
//
// Two strategies: Snowball stemming (any language with an algorithm, English
// otherwise) and an English dictionary lemmatizer built from an irregular-form
// table plus conservative plural rules. The dictionary lemmatizer is a no-op
// for other languages.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::corpus::Corpus;
use crate::language::Language;
use crate::tokenize::policy_for;

/// Which lemmatization to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lemmatizer {
    /// Leave tokens as they are.
    #[default]
    None,
    /// Snowball stemmer for the language.
    Snowball,
    /// English dictionary forms.
    Dictionary,
}

impl fmt::Display for Lemmatizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lemmatizer::None => "none",
            Lemmatizer::Snowball => "snowball",
            Lemmatizer::Dictionary => "dictionary",
        })
    }
}

impl FromStr for Lemmatizer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Lemmatizer::None),
            "snowball" | "stem" => Ok(Lemmatizer::Snowball),
            "dictionary" | "wordnet" | "lemma" => Ok(Lemmatizer::Dictionary),
            other => Err(format!(
                "Unknown lemmatizer '{other}' (expected none, snowball or dictionary)"
            )),
        }
    }
}

/// Replace every token with its lemma or stem.
///
/// `lang` is the corpus language; `None` means English.
pub fn lemmatize(corpus: &Corpus, lemmatizer: Lemmatizer, lang: Option<Language>) -> Corpus {
    match lemmatizer {
        Lemmatizer::None => corpus.clone(),
        Lemmatizer::Snowball => {
            let stemmer = Stemmer::create(snowball_algorithm(lang));
            corpus.map_bags(|_, bag| {
                bag.iter()
                    .map(|token| stemmer.stem(token).into_owned())
                    .collect()
            })
        }
        Lemmatizer::Dictionary => match lang {
            None | Some(Language::English) => corpus.map_bags(|_, bag| {
                bag.iter().map(|token| english_lemma(token)).collect()
            }),
            Some(other) => {
                warn!(
                    language = %other,
                    "Dictionary lemmatizer only supports English, leaving tokens unchanged"
                );
                corpus.clone()
            }
        },
    }
}

/// Snowball algorithm for a language, falling back to English.
pub fn snowball_algorithm(lang: Option<Language>) -> Algorithm {
    let lang = lang.unwrap_or(Language::English);
    policy_for(lang).stemming_algorithm().unwrap_or_else(|| {
        debug!(language = %lang, "No Snowball algorithm, using English");
        Algorithm::English
    })
}

/// Irregular forms mapped to their dictionary form.
const IRREGULAR: &[(&str, &str)] = &[
    // nouns
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("elves", "elf"),
    ("selves", "self"),
    ("leaves", "leaf"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("phenomena", "phenomenon"),
    ("criteria", "criterion"),
    // verbs
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("said", "say"),
    ("says", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("thought", "think"),
    ("told", "tell"),
    ("became", "become"),
    ("felt", "feel"),
    ("brought", "bring"),
    ("began", "begin"),
    ("begun", "begin"),
    ("kept", "keep"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("ran", "run"),
    ("paid", "pay"),
    ("sat", "sit"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("lost", "lose"),
    ("fallen", "fall"),
    ("sent", "send"),
    ("built", "build"),
    ("understood", "understand"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("broke", "break"),
    ("broken", "break"),
    ("spent", "spend"),
    ("risen", "rise"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("bought", "buy"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("fought", "fight"),
    ("sought", "seek"),
    ("struck", "strike"),
    ("fled", "flee"),
    ("sold", "sell"),
    ("hung", "hang"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("ate", "eat"),
    ("eaten", "eat"),
];

/// Words ending in "s" that are already in dictionary form.
const INVARIANT: &[&str] = &[
    "news", "series", "species", "means", "physics", "economics", "politics", "mathematics",
    "lens", "bus", "gas", "bias", "atlas", "chaos", "canvas", "always", "perhaps", "whereas",
    "towards", "afterwards", "besides", "sometimes",
];

static IRREGULAR_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn irregular() -> &'static HashMap<&'static str, &'static str> {
    IRREGULAR_MAP.get_or_init(|| IRREGULAR.iter().copied().collect())
}

/// Dictionary form of an English token.
///
/// Irregular forms come from a table; regular plurals are reduced by suffix
/// rules. Short tokens, non-alphabetic tokens and regular verb inflections are
/// left alone rather than guessed at.
pub fn english_lemma(token: &str) -> String {
    if let Some(base) = irregular().get(token) {
        return (*base).to_string();
    }
    if token.chars().count() <= 3
        || !token.chars().all(char::is_alphabetic)
        || INVARIANT.contains(&token)
    {
        return token.to_string();
    }

    if let Some(stem) = token.strip_suffix("ies") {
        // "ties" -> "tie", "cities" -> "city"
        if stem.chars().count() >= 2 {
            return format!("{stem}y");
        }
        return format!("{stem}ie");
    }
    if let Some(stem) = token.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    for suffix in ["ches", "shes", "xes", "zes"] {
        if let Some(stem) = token.strip_suffix(suffix) {
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix('s') {
        return stem.to_string();
    }

    token.to_string()
}
