//! Frequency ranking and stop-word filtered top-K selection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::frequency::FrequencyMap;
use crate::lexicon::Lexicon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    /// Descending count, then ascending token. Total because tokens are unique keys.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Full ranked sequence of a frequency map.
pub fn rank(map: &FrequencyMap) -> Vec<RankedEntry> {
    let mut out: Vec<RankedEntry> = map
        .iter()
        .map(|(w, n)| RankedEntry {
            word: w.to_string(),
            count: n,
        })
        .collect();
    out.sort_by(RankedEntry::rank_cmp);
    out
}

/// First `k` ranked tokens that are not stop words. Shorter when fewer qualify.
pub fn top_words(ranked: &[RankedEntry], lexicon: &Lexicon, k: usize) -> Vec<String> {
    ranked
        .iter()
        .filter(|e| !lexicon.is_stop_word(&e.word))
        .take(k)
        .map(|e| e.word.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::tokenizer::tokens;

    fn map(text: &str) -> FrequencyMap {
        tokens(text).collect()
    }

    #[test]
    fn ties_break_alphabetically() {
        let r = rank(&map("good day good day"));
        let words: Vec<&str> = r.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["day", "good"]);
    }

    #[test]
    fn higher_count_first() {
        let r = rank(&map("b a b c b a"));
        assert_eq!(
            r,
            vec![
                RankedEntry { word: "b".into(), count: 3 },
                RankedEntry { word: "a".into(), count: 2 },
                RankedEntry { word: "c".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn top_words_skip_stop_words_and_do_not_pad() {
        let lx = Lexicon::default();
        let r = rank(&map("the the the cat and the dog"));
        assert_eq!(top_words(&r, &lx, 5), vec!["cat", "dog"]);
    }

    #[test]
    fn top_words_stop_at_k() {
        let lx = Lexicon::default();
        let r = rank(&map("alpha beta gamma delta epsilon zeta eta"));
        let top = top_words(&r, &lx, 5);
        assert_eq!(top, vec!["alpha", "beta", "delta", "epsilon", "eta"]);
    }

    #[test]
    fn empty_map_ranks_to_nothing() {
        let lx = Lexicon::default();
        let r = rank(&FrequencyMap::default());
        assert!(r.is_empty());
        assert!(top_words(&r, &lx, 5).is_empty());
    }
}
