// Word-boundary segmentation for alphabetic scripts.
//
// Uses Unicode word boundaries (UAX #29). Every non-whitespace segment is a
// token, so "Hello, world!" yields ["Hello", ",", "world", "!"].

use unicode_segmentation::UnicodeSegmentation;

use super::traits::WordSegmenter;

#[derive(Debug, Clone, Copy, Default)]
pub struct WordBoundarySegmenter;

impl WordSegmenter for WordBoundarySegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}
