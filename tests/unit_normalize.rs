// Unit tests for bag normalization.
//
// Each stage is a pure Corpus -> Corpus transformation, so every test builds
// a small corpus, applies one stage (or a composed sequence), and checks the
// resulting bags.

use topicmill::corpus::Corpus;
use topicmill::language::Language;
use topicmill::normalize::{
    apply_steps, english_lemma, is_numeric_token, join_token_sequence, lemmatize,
    remove_numeric_tokens, remove_punctuation, remove_stopwords, remove_words, standard_steps,
    Lemmatizer, NormalizeStep, PunctuationSet,
};

fn corpus(bags: Vec<(&str, Vec<&str>)>) -> Corpus {
    bags.into_iter().collect()
}

fn bag<'a>(c: &'a Corpus, id: &str) -> Vec<&'a str> {
    c.get(id)
        .map(|tokens| tokens.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

// ============================================================
// Punctuation
// ============================================================

#[test]
fn punctuation_removal_drops_whole_tokens_only() {
    let c = corpus(vec![("d", vec!["u.s.", ",", "hello", "。", "e-mail", "-"])]);
    let out = remove_punctuation(&c, &PunctuationSet::default());
    assert_eq!(bag(&out, "d"), vec!["u.s.", "hello", "e-mail"]);
}

#[test]
fn punctuation_removal_is_idempotent() {
    let c = corpus(vec![
        ("a", vec!["Hello", ",", "world", "!", "“", "quoted", "”"]),
        ("b", vec!["（", "中文", "）", "，", "。"]),
        ("c", vec![]),
    ]);
    let marks = PunctuationSet::default();
    let once = remove_punctuation(&c, &marks);
    let twice = remove_punctuation(&once, &marks);
    assert_eq!(once, twice);
}

#[test]
fn custom_punctuation_marks() {
    let c = corpus(vec![("d", vec!["#tag", "@user", "word"])]);
    let marks = PunctuationSet::empty().with(["#tag", "@user"]);
    assert_eq!(bag(&remove_punctuation(&c, &marks), "d"), vec!["word"]);
}

// ============================================================
// Stopwords
// ============================================================

#[test]
fn no_language_removes_english_stopwords() {
    let c = corpus(vec![("d", vec!["the", "senate", "and", "the", "house"])]);
    let out = remove_stopwords(&c, None);
    assert_eq!(bag(&out, "d"), vec!["senate", "house"]);
}

#[test]
fn chinese_removes_nothing() {
    let c = corpus(vec![("d", vec!["the", "的", "北京"])]);
    let out = remove_stopwords(&c, Some(Language::Chinese));
    assert_eq!(out, c);
}

#[test]
fn german_list_applies_to_german() {
    let c = corpus(vec![("d", vec!["und", "die", "Regierung"])]);
    let out = remove_stopwords(&c, Some(Language::German));
    assert_eq!(bag(&out, "d"), vec!["Regierung"]);
}

#[test]
fn unknown_language_removes_nothing() {
    let c = corpus(vec![("d", vec!["the", "and"])]);
    assert_eq!(remove_stopwords(&c, Some(Language::Unknown)), c);
}

// ============================================================
// Numeric tokens and excluded words
// ============================================================

#[test]
fn numeric_tokens_are_dropped() {
    assert!(is_numeric_token("2024"));
    assert!(is_numeric_token("٣"));
    assert!(!is_numeric_token("3.5"));
    assert!(!is_numeric_token("v2"));
    assert!(!is_numeric_token(""));

    let c = corpus(vec![("d", vec!["2024", "budget", "12", "v2"])]);
    assert_eq!(bag(&remove_numeric_tokens(&c), "d"), vec!["budget", "v2"]);
}

#[test]
fn excluded_words_are_dropped() {
    let c = corpus(vec![("d", vec!["reuters", "said", "ap", "budget"])]);
    let out = remove_words(&c, &["reuters", "ap", "said"]);
    assert_eq!(bag(&out, "d"), vec!["budget"]);
}

// ============================================================
// Lemmatization
// ============================================================

#[test]
fn english_dictionary_lemmas() {
    assert_eq!(english_lemma("wolves"), "wolf");
    assert_eq!(english_lemma("caught"), "catch");
    assert_eq!(english_lemma("policies"), "policy");
    assert_eq!(english_lemma("churches"), "church");
    assert_eq!(english_lemma("status"), "status");
    assert_eq!(english_lemma("bus"), "bus");
}

#[test]
fn dictionary_lemmatizer_rewrites_bags() {
    let c = corpus(vec![("d", vec!["wolves", "caught", "cats"])]);
    let out = lemmatize(&c, Lemmatizer::Dictionary, Some(Language::English));
    assert_eq!(bag(&out, "d"), vec!["wolf", "catch", "cat"]);
}

#[test]
fn dictionary_lemmatizer_is_noop_for_french() {
    let c = corpus(vec![("d", vec!["chevaux", "mangés"])]);
    assert_eq!(lemmatize(&c, Lemmatizer::Dictionary, Some(Language::French)), c);
}

#[test]
fn snowball_stems_by_language() {
    let c = corpus(vec![("d", vec!["running", "connections"])]);
    let out = lemmatize(&c, Lemmatizer::Snowball, None);
    assert_eq!(bag(&out, "d"), vec!["run", "connect"]);
}

#[test]
fn no_lemmatizer_changes_nothing() {
    let c = corpus(vec![("d", vec!["wolves"])]);
    assert_eq!(lemmatize(&c, Lemmatizer::None, None), c);
}

#[test]
fn lemmatizer_parses_from_names() {
    assert_eq!("wordnet".parse::<Lemmatizer>(), Ok(Lemmatizer::Dictionary));
    assert_eq!("stem".parse::<Lemmatizer>(), Ok(Lemmatizer::Snowball));
    assert_eq!("none".parse::<Lemmatizer>(), Ok(Lemmatizer::None));
    assert!("porter2000".parse::<Lemmatizer>().is_err());
}

// ============================================================
// Token-sequence joining
// ============================================================

#[test]
fn join_is_bounded_by_scarcest_part() {
    let c = corpus(vec![("d", vec!["u", ".", "s", ".", "s", ".", "s", ".", "r", "."])]);
    let out = join_token_sequence(&c, &["u", ".", "s", "."], "u.s.");
    let tokens = bag(&out, "d");
    assert_eq!(tokens.iter().filter(|t| **t == "u.s.").count(), 1);
    assert_eq!(tokens, vec!["u.s.", "s", ".", "s", ".", "r", "."]);
}

#[test]
fn join_replaces_every_complete_set() {
    let c = corpus(vec![("d", vec!["u", ".", "s", ".", "and", "u", ".", "s", "."])]);
    let out = join_token_sequence(&c, &["u", ".", "s", "."], "u.s.");
    assert_eq!(bag(&out, "d"), vec!["u.s.", "u.s.", "and"]);
}

#[test]
fn join_without_all_parts_is_noop() {
    let c = corpus(vec![("d", vec!["s", ".", "r", "."])]);
    assert_eq!(join_token_sequence(&c, &["u", ".", "s", "."], "u.s."), c);
}

// ============================================================
// Composition
// ============================================================

#[test]
fn stages_do_not_mutate_their_input() {
    let c = corpus(vec![("d", vec!["The", "wolves", ",", "2024"])]);
    let before = c.clone();
    let _ = apply_steps(&c, &standard_steps(None, Lemmatizer::Dictionary, &[]));
    assert_eq!(c, before);
}

#[test]
fn standard_sequence_cleans_a_bag() {
    let c = corpus(vec![("d", vec!["the", "wolves", ",", "caught", "2024", "bbc", "sheep"])]);
    let steps = standard_steps(None, Lemmatizer::Dictionary, &["bbc".to_string()]);
    let out = apply_steps(&c, &steps);
    assert_eq!(bag(&out, "d"), vec!["wolf", "catch", "sheep"]);
}

#[test]
fn custom_order_is_respected() {
    // Punctuation goes first, so the join finds no "." left
    let c = corpus(vec![("d", vec!["u", ".", "s", ".", "said"])]);
    let steps = vec![
        NormalizeStep::RemovePunctuation(PunctuationSet::default()),
        NormalizeStep::Join {
            parts: vec!["u".into(), ".".into(), "s".into(), ".".into()],
            whole: "u.s.".into(),
        },
        NormalizeStep::RemoveWords(vec!["said".into()]),
    ];
    assert_eq!(bag(&apply_steps(&c, &steps), "d"), vec!["u", "s"]);
}
