// Bundled reference texts and the candidate sets that use them.
//
// The texts are compiled into the binary and turned into rank tables on first
// use. Scripts shared by several languages map to a candidate list; the
// classifier scores the sample against each candidate's table.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::classifier::normalize_sample;
use super::ngram::ReferenceModel;
use super::tag::Language;

/// Languages written in Cyrillic that have a reference text.
pub const CYRILLIC: &[Language] = &[
    Language::Russian,
    Language::Ukrainian,
    Language::Bulgarian,
    Language::Kazakh,
];

/// Arabic-script languages.
pub const ARABIC: &[Language] = &[Language::Arabic, Language::Persian, Language::Urdu];

/// Devanagari languages.
pub const DEVANAGARI: &[Language] = &[Language::Hindi, Language::Nepali];

/// Latin-alphabet languages whose orthography leans on Latin-1 and
/// Latin Extended-A/B letters.
pub const EXTENDED_LATIN: &[Language] = &[
    Language::Danish,
    Language::Dutch,
    Language::Finnish,
    Language::French,
    Language::German,
    Language::Hungarian,
    Language::Italian,
    Language::Norwegian,
    Language::Polish,
    Language::Portuguese,
    Language::Romanian,
    Language::Spanish,
    Language::Swedish,
    Language::Turkish,
];

/// Every Latin-alphabet candidate, English first.
pub const ALL_LATIN: &[Language] = &[
    Language::English,
    Language::Danish,
    Language::Dutch,
    Language::Finnish,
    Language::French,
    Language::German,
    Language::Hungarian,
    Language::Italian,
    Language::Norwegian,
    Language::Polish,
    Language::Portuguese,
    Language::Romanian,
    Language::Spanish,
    Language::Swedish,
    Language::Turkish,
];

const REFERENCE_TEXTS: &[(Language, &str)] = &[
    (Language::English, include_str!("profiles/en.txt")),
    (Language::German, include_str!("profiles/de.txt")),
    (Language::French, include_str!("profiles/fr.txt")),
    (Language::Spanish, include_str!("profiles/es.txt")),
    (Language::Italian, include_str!("profiles/it.txt")),
    (Language::Portuguese, include_str!("profiles/pt.txt")),
    (Language::Dutch, include_str!("profiles/nl.txt")),
    (Language::Danish, include_str!("profiles/da.txt")),
    (Language::Swedish, include_str!("profiles/sv.txt")),
    (Language::Norwegian, include_str!("profiles/no.txt")),
    (Language::Finnish, include_str!("profiles/fi.txt")),
    (Language::Hungarian, include_str!("profiles/hu.txt")),
    (Language::Romanian, include_str!("profiles/ro.txt")),
    (Language::Turkish, include_str!("profiles/tr.txt")),
    (Language::Polish, include_str!("profiles/pl.txt")),
    (Language::Russian, include_str!("profiles/ru.txt")),
    (Language::Ukrainian, include_str!("profiles/uk.txt")),
    (Language::Bulgarian, include_str!("profiles/bg.txt")),
    (Language::Kazakh, include_str!("profiles/kk.txt")),
    (Language::Arabic, include_str!("profiles/ar.txt")),
    (Language::Persian, include_str!("profiles/fa.txt")),
    (Language::Urdu, include_str!("profiles/ur.txt")),
    (Language::Hindi, include_str!("profiles/hi.txt")),
    (Language::Nepali, include_str!("profiles/ne.txt")),
];

static MODELS: OnceLock<HashMap<Language, ReferenceModel>> = OnceLock::new();

fn models() -> &'static HashMap<Language, ReferenceModel> {
    MODELS.get_or_init(|| {
        REFERENCE_TEXTS
            .iter()
            .map(|(lang, text)| (*lang, ReferenceModel::from_text(&normalize_sample(text))))
            .collect()
    })
}

/// The reference model for a language, if one is bundled.
pub fn reference_model(lang: Language) -> Option<&'static ReferenceModel> {
    models().get(&lang)
}

/// Languages with a bundled reference model.
pub fn languages_with_models() -> Vec<Language> {
    let mut langs: Vec<Language> = models().keys().copied().collect();
    langs.sort();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_candidate_has_a_model() {
        for lang in CYRILLIC
            .iter()
            .chain(ARABIC)
            .chain(DEVANAGARI)
            .chain(ALL_LATIN)
        {
            let model = reference_model(*lang);
            assert!(model.is_some(), "missing reference model for {lang}");
            assert!(!model.map(|m| m.is_empty()).unwrap_or(true));
        }
    }

    #[test]
    fn test_extended_latin_is_subset_of_all_latin() {
        for lang in EXTENDED_LATIN {
            assert!(ALL_LATIN.contains(lang));
        }
    }

    #[test]
    fn test_no_model_for_single_script_languages() {
        assert!(reference_model(Language::Korean).is_none());
        assert!(reference_model(Language::Unknown).is_none());
    }
}
