// Word segmenter trait.
//
// The policy table picks a segmentation strategy per language; each strategy
// implements this trait so the mixed-script segmenter can compose any Western
// segmenter with any logographic one.

/// Split raw text into tokens.
///
/// Implementations keep punctuation as separate tokens and drop whitespace.
/// Case folding is applied afterwards by the dispatcher, not here.
pub trait WordSegmenter {
    fn segment(&self, text: &str) -> Vec<String>;
}
