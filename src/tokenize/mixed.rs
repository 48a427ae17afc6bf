// Mixed-script segmentation.
//
// A logographic segmenter shreds embedded Latin words into single letters, so
// text is first split into alternating Western / non-Western runs. Western
// runs go to the word-boundary segmenter and the rest to the dictionary
// segmenter, each run on its own, output kept in left-to-right run order.

use super::latin::WordBoundarySegmenter;
use super::logographic::DictionarySegmenter;
use super::traits::WordSegmenter;

/// Code points treated as "Western": ASCII through spacing modifier letters,
/// Greek, Cyrillic (+ supplement) and Armenian letters.
pub fn is_western(c: char) -> bool {
    matches!(
        c as u32,
        0x0000..=0x02B8
            | 0x0370..=0x03FF
            | 0x0400..=0x052F
            | 0x0531..=0x0556
            | 0x0559..=0x055F
            | 0x0561..=0x0587
    )
}

/// A maximal slice of text whose characters share a Western/non-Western class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub western: bool,
}

/// Partition text into maximal runs, preserving order.
pub fn split_runs(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, c) in text.char_indices() {
        let western = is_western(c);
        match current {
            Some(class) if class != western => {
                runs.push(Run {
                    text: &text[start..idx],
                    western: class,
                });
                start = idx;
                current = Some(western);
            }
            None => current = Some(western),
            _ => {}
        }
    }
    if let Some(class) = current {
        runs.push(Run {
            text: &text[start..],
            western: class,
        });
    }
    runs
}

/// Composes a Western and a logographic segmenter over script runs.
#[derive(Debug, Clone, Default)]
pub struct MixedScriptSegmenter<W = WordBoundarySegmenter, L = DictionarySegmenter> {
    western: W,
    logographic: L,
}

impl<W: WordSegmenter, L: WordSegmenter> MixedScriptSegmenter<W, L> {
    pub fn new(western: W, logographic: L) -> Self {
        Self {
            western,
            logographic,
        }
    }
}

impl<W: WordSegmenter, L: WordSegmenter> WordSegmenter for MixedScriptSegmenter<W, L> {
    fn segment(&self, text: &str) -> Vec<String> {
        split_runs(text)
            .into_iter()
            .flat_map(|run| {
                if run.western {
                    self.western.segment(run.text)
                } else {
                    self.logographic.segment(run.text)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_western_ranges() {
        assert!(is_western('M'));
        assert!(is_western('é'));
        assert!(is_western('λ'));
        assert!(is_western('Ж'));
        assert!(is_western('Ա'));
        assert!(!is_western('北'));
        assert!(!is_western('，'));
    }

    #[test]
    fn test_split_runs_alternates() {
        let runs = split_runs("伊朗人Martin在北京");
        let texts: Vec<&str> = runs.iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["伊朗人", "Martin", "在北京"]);
        assert_eq!(
            runs.iter().map(|r| r.western).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn test_split_runs_empty() {
        assert!(split_runs("").is_empty());
    }

    /// Records which runs each side saw.
    struct Echo(&'static str);

    impl WordSegmenter for Echo {
        fn segment(&self, text: &str) -> Vec<String> {
            vec![format!("{}:{}", self.0, text)]
        }
    }

    #[test]
    fn test_runs_are_segmented_independently_in_order() {
        let segmenter = MixedScriptSegmenter::new(Echo("w"), Echo("l"));
        let tokens = segmenter.segment("伊朗人Martin在北京");
        assert_eq!(tokens, vec!["l:伊朗人", "w:Martin", "l:在北京"]);
    }
}
