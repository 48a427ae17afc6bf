// Token-sequence joining.
//
// Repairs abbreviations that tokenization split apart, e.g. "u", ".", "s", "."
// back into "u.s.". Only as many complete part sets as every part can supply
// are replaced, so stray letters belonging to other abbreviations survive.

use crate::corpus::Corpus;

/// Replace complete sets of `parts` with `whole` in every document.
///
/// The number of replacements in a document is the minimum, over all parts,
/// of how often that part occurs. Each round removes the first remaining
/// instance of every part; the replacements go where the first part was found
/// in the first round. An empty part list changes nothing.
pub fn join_token_sequence<S: AsRef<str>>(corpus: &Corpus, parts: &[S], whole: &str) -> Corpus {
    if parts.is_empty() {
        return corpus.clone();
    }
    let parts: Vec<&str> = parts.iter().map(|part| part.as_ref()).collect();
    corpus.map_bags(|_, bag| join_in_bag(bag, &parts, whole))
}

fn join_in_bag(bag: &[String], parts: &[&str], whole: &str) -> Vec<String> {
    let rounds = parts
        .iter()
        .map(|part| bag.iter().filter(|token| token == part).count())
        .min()
        .unwrap_or(0);
    if rounds == 0 {
        return bag.to_vec();
    }

    let mut tokens = bag.to_vec();
    let mut insert_at: Option<usize> = None;
    for _ in 0..rounds {
        for part in parts {
            if let Some(pos) = tokens.iter().position(|token| token == part) {
                if insert_at.is_none() {
                    insert_at = Some(pos);
                }
                tokens.remove(pos);
            }
        }
    }

    let at = insert_at.unwrap_or(0).min(tokens.len());
    tokens.splice(at..at, std::iter::repeat(whole.to_string()).take(rounds));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_replacement_bounded_by_scarcest_part() {
        let joined = join_in_bag(
            &bag(&["u", ".", "s", ".", "s", ".", "s", ".", "r", "."]),
            &["u", ".", "s", "."],
            "u.s.",
        );
        assert_eq!(joined, bag(&["u.s.", "s", ".", "s", ".", "r", "."]));
    }

    #[test]
    fn test_two_complete_sets() {
        let joined = join_in_bag(
            &bag(&["the", "u", ".", "s", ".", "and", "u", ".", "s", "."]),
            &["u", ".", "s", "."],
            "u.s.",
        );
        assert_eq!(joined, bag(&["the", "u.s.", "u.s.", "and"]));
    }

    #[test]
    fn test_missing_part_changes_nothing() {
        let original = bag(&["u", ".", "k"]);
        assert_eq!(join_in_bag(&original, &["u", ".", "s", "."], "u.s."), original);
    }

    #[test]
    fn test_empty_parts_is_noop() {
        let corpus: Corpus = [("d", vec!["u", "."])].into_iter().collect();
        let empty: [&str; 0] = [];
        assert_eq!(join_token_sequence(&corpus, &empty, "x"), corpus);
    }
}
