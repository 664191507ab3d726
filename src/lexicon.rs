//! Word lists used by ranking and sentiment: stop words, positive and negative terms.
//!
//! A `Lexicon` is an immutable value owned by the `Analyzer`. The built-in sets are the
//! reference lists; configuration can replace any of them (see `config::LexiconConfig`).

use std::collections::HashSet;

use once_cell::sync::Lazy;

const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "a", "to", "of", "in", "is", "that", "it", "with", "for", "as", "on", "was",
    "be", "by", "at", "this", "an", "are", "not", "from", "but", "or", "have", "had", "has", "i",
    "you", "he", "she", "they", "we", "its", "my", "their", "our",
];

const DEFAULT_POSITIVE: &[&str] = &[
    "good", "great", "excellent", "wonderful", "happy", "positive", "best", "love", "beautiful",
    "nice", "amazing", "awesome", "fantastic", "perfect", "better",
];

const DEFAULT_NEGATIVE: &[&str] = &[
    "bad", "worst", "terrible", "horrible", "sad", "negative", "poor", "hate", "awful", "wrong",
    "worse", "difficult", "hard", "problem", "fail",
];

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    stop_words: to_set(DEFAULT_STOP_WORDS),
    positive: to_set(DEFAULT_POSITIVE),
    negative: to_set(DEFAULT_NEGATIVE),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        (*DEFAULT_LEXICON).clone()
    }
}

impl Lexicon {
    /// Build from arbitrary word lists. Words are trimmed and lowercased; empties dropped.
    pub fn new<S: AsRef<str>>(stop_words: &[S], positive: &[S], negative: &[S]) -> Self {
        Self {
            stop_words: normalize(stop_words),
            positive: normalize(positive),
            negative: normalize(negative),
        }
    }

    pub fn with_stop_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.stop_words = normalize(words);
        self
    }

    pub fn with_positive<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.positive = normalize(words);
        self
    }

    pub fn with_negative<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.negative = normalize(words);
        self
    }

    /// Same stop words, positive and negative lists exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            stop_words: self.stop_words.clone(),
            positive: self.negative.clone(),
            negative: self.positive.clone(),
        }
    }

    /// Tokens are already lowercase, so lookups are exact.
    #[inline]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    #[inline]
    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    #[inline]
    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn normalize<S: AsRef<str>>(words: &[S]) -> HashSet<String> {
    words
        .iter()
        .map(|w| w.as_ref().trim().to_ascii_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
