// Unicode script-block detection.
//
// Counts alphabetic characters per script block and reports which blocks
// make up a meaningful share of the sample. The classifier then decides on a
// language (or a candidate set for n-gram scoring) from the blocks present.

use std::collections::HashMap;

/// Script blocks the classifier distinguishes. Adjacent Unicode blocks that
/// never change the decision are folded together (Latin-1 Supplement and
/// Latin Extended-A/B are all `ExtendedLatin`; the three Hangul blocks are
/// `Hangul`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    BasicLatin,
    ExtendedLatin,
    LatinExtendedAdditional,
    Greek,
    Cyrillic,
    Armenian,
    Hebrew,
    Arabic,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Thai,
    Lao,
    Georgian,
    Khmer,
    Hangul,
    Kana,
    Han,
    Other,
}

/// Share of alphabetic characters a block needs before it counts.
const RUN_THRESHOLD_PCT: f64 = 40.0;
/// Basic Latin is often a minority inside otherwise non-Latin text (URLs,
/// brand names) but still decides the language when nothing else qualifies.
const BASIC_LATIN_THRESHOLD_PCT: f64 = 15.0;
/// Vietnamese diacritics live in Latin Extended Additional and are a small
/// fraction of any Vietnamese sentence.
const LATIN_EXTENDED_ADDITIONAL_THRESHOLD_PCT: f64 = 10.0;

/// Map a character to its script block.
pub fn script_of(c: char) -> Script {
    match c as u32 {
        0x0000..=0x007F => Script::BasicLatin,
        0x0080..=0x024F => Script::ExtendedLatin,
        0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
        0x0400..=0x052F => Script::Cyrillic,
        0x0530..=0x058F => Script::Armenian,
        0x0590..=0x05FF => Script::Hebrew,
        0x0600..=0x06FF | 0x0750..=0x077F | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF => Script::Arabic,
        0x0900..=0x097F => Script::Devanagari,
        0x0980..=0x09FF => Script::Bengali,
        0x0A00..=0x0A7F => Script::Gurmukhi,
        0x0A80..=0x0AFF => Script::Gujarati,
        0x0B80..=0x0BFF => Script::Tamil,
        0x0C00..=0x0C7F => Script::Telugu,
        0x0C80..=0x0CFF => Script::Kannada,
        0x0D00..=0x0D7F => Script::Malayalam,
        0x0E00..=0x0E7F => Script::Thai,
        0x0E80..=0x0EFF => Script::Lao,
        0x10A0..=0x10FF => Script::Georgian,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
        0x1780..=0x17FF => Script::Khmer,
        0x1E00..=0x1EFF => Script::LatinExtendedAdditional,
        0x3040..=0x30FF | 0x31F0..=0x31FF => Script::Kana,
        // Kangxi radicals, Bopomofo (+ extended), CJK ideographs (+ ext A, compat)
        0x2F00..=0x2FDF
        | 0x3100..=0x312F
        | 0x31A0..=0x31BF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xF900..=0xFAFF => Script::Han,
        _ => Script::Other,
    }
}

/// Count alphabetic characters per script block.
pub fn block_counts(text: &str) -> HashMap<Script, usize> {
    let mut counts = HashMap::new();
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        *counts.entry(script_of(c)).or_insert(0) += 1;
    }
    counts
}

/// The script blocks that carry a meaningful share of the sample.
///
/// Returns an empty list when the text has no alphabetic characters.
pub fn find_runs(text: &str) -> Vec<Script> {
    let counts = block_counts(text);
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut runs: Vec<Script> = counts
        .into_iter()
        .filter(|(script, count)| {
            let pct = (*count as f64 * 100.0) / total as f64;
            match script {
                Script::BasicLatin => pct >= BASIC_LATIN_THRESHOLD_PCT,
                Script::LatinExtendedAdditional => {
                    pct >= LATIN_EXTENDED_ADDITIONAL_THRESHOLD_PCT
                }
                _ => pct >= RUN_THRESHOLD_PCT,
            }
        })
        .map(|(script, _)| script)
        .collect();

    // HashMap order is arbitrary; keep the output stable for callers and logs
    runs.sort_by_key(|s| *s as u8);
    runs
}
