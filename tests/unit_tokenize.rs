// Unit tests for tokenizer dispatch.
//
// Tests the per-language policies through the public tokenize() entry point:
// case folding, punctuation retention, mixed-script segmentation and custom
// policy tables.

use topicmill::language::Language;
use topicmill::tokenize::{
    split_runs, tokenize, tokenize_with, LanguagePolicy, MixedScriptSegmenter, PolicyTable,
    WordSegmenter,
};

// ============================================================
// Word-boundary languages
// ============================================================

#[test]
fn english_is_lowercased_with_punctuation_kept() {
    assert_eq!(
        tokenize(Language::English, "The Senate voted, again."),
        vec!["the", "senate", "voted", ",", "again", "."]
    );
}

#[test]
fn german_keeps_case() {
    let tokens = tokenize(Language::German, "Die Bundesregierung hat Angst.");
    assert_eq!(tokens, vec!["Die", "Bundesregierung", "hat", "Angst", "."]);
}

#[test]
fn dutch_and_danish_keep_case() {
    assert_eq!(tokenize(Language::Dutch, "De Kamer"), vec!["De", "Kamer"]);
    assert_eq!(tokenize(Language::Danish, "Det Kongelige"), vec!["Det", "Kongelige"]);
}

#[test]
fn unknown_language_uses_default_policy() {
    assert_eq!(
        tokenize(Language::Unknown, "Hello World"),
        vec!["hello", "world"]
    );
}

#[test]
fn cyrillic_words_stay_whole() {
    assert_eq!(
        tokenize(Language::Russian, "Все люди рождаются"),
        vec!["все", "люди", "рождаются"]
    );
}

#[test]
fn empty_text_yields_no_tokens() {
    assert!(tokenize(Language::English, "").is_empty());
    assert!(tokenize(Language::Chinese, "   ").is_empty());
}

// ============================================================
// Mixed-script segmentation
// ============================================================

#[test]
fn embedded_latin_name_is_one_token() {
    let tokens = tokenize(Language::Chinese, "伊朗人Martin在北京");
    assert!(
        tokens.iter().any(|t| t == "martin"),
        "expected a single 'martin' token in {tokens:?}"
    );
    for letter in ["m", "a", "r", "t", "i", "n"] {
        assert!(
            !tokens.iter().any(|t| t == letter),
            "'Martin' was split into letters: {tokens:?}"
        );
    }
}

#[test]
fn logographic_runs_segment_independently() {
    let tokens = tokenize(Language::Chinese, "伊朗人Martin在北京");
    let position = tokens
        .iter()
        .position(|t| t == "martin")
        .expect("martin token present");
    // Everything before the Western run comes from the left logographic run
    assert_eq!(tokens[..position].concat(), "伊朗人");
    assert_eq!(tokens[position + 1..].concat(), "在北京");
}

#[test]
fn split_runs_preserves_text() {
    let text = "伊朗人Martin在北京";
    let runs = split_runs(text);
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[1].text, "Martin");
    assert!(runs[1].western);
    let rebuilt: String = runs.iter().map(|r| r.text).collect();
    assert_eq!(rebuilt, text);
}

struct Upper;

impl WordSegmenter for Upper {
    fn segment(&self, text: &str) -> Vec<String> {
        vec![text.to_uppercase()]
    }
}

struct Chars;

impl WordSegmenter for Chars {
    fn segment(&self, text: &str) -> Vec<String> {
        text.chars().map(String::from).collect()
    }
}

#[test]
fn mixed_segmenter_routes_runs_to_each_strategy() {
    let segmenter = MixedScriptSegmenter::new(Upper, Chars);
    assert_eq!(
        segmenter.segment("北京abc上"),
        vec!["北", "京", "ABC", "上"]
    );
}

// ============================================================
// Policy tables
// ============================================================

#[test]
fn custom_policy_table_overrides_defaults() {
    let mut table = PolicyTable::standard();
    table.register(LanguagePolicy::word_boundary(Language::French).case_sensitive());
    let policy = table.get(Language::French);
    assert_eq!(tokenize_with(&policy, "Paris Brûle"), vec!["Paris", "Brûle"]);
}

#[test]
fn mixed_script_policy_can_be_given_to_any_language() {
    let policy = LanguagePolicy::word_boundary(Language::Japanese).mixed_script();
    let tokens = tokenize_with(&policy, "東京Tower");
    assert!(tokens.contains(&"tower".to_string()), "{tokens:?}");
}
