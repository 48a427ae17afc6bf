// Dictionary segmentation for logographic text.
//
// Chinese has no spaces between words, so segmentation needs a dictionary.
// jieba's default dictionary is large; it is loaded once per process on the
// first call.

use std::sync::OnceLock;

use jieba_rs::Jieba;

use super::traits::WordSegmenter;

static JIEBA: OnceLock<Jieba> = OnceLock::new();

fn jieba() -> &'static Jieba {
    JIEBA.get_or_init(Jieba::new)
}

/// jieba-backed segmenter (precise mode, no HMM for unseen words).
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionarySegmenter;

impl WordSegmenter for DictionarySegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        jieba()
            .cut(text, false)
            .into_iter()
            .filter(|word| !word.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}
