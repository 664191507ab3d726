//! Lexicon sentiment over a frequency map.
//!
//! positive_total = Σ count(t) for t in positive lexicon
//! negative_total = Σ count(t) for t in negative lexicon (only if not positive)
//!
//! Order of the map does not matter; the sums are commutative.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::frequency::FrequencyMap;
use crate::lexicon::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentScore {
    pub positive_total: u64,
    pub negative_total: u64,
}

impl SentimentScore {
    pub fn label(&self) -> SentimentLabel {
        use std::cmp::Ordering::*;
        match self.positive_total.cmp(&self.negative_total) {
            Greater => SentimentLabel::Positive,
            Less => SentimentLabel::Negative,
            Equal => SentimentLabel::Neutral,
        }
    }
}

/// Walk every (token, count) pair once. Positive membership wins on overlapping lexicons.
pub fn score(map: &FrequencyMap, lexicon: &Lexicon) -> SentimentScore {
    let mut s = SentimentScore::default();
    for (tok, n) in map.iter() {
        if lexicon.is_positive(tok) {
            s.positive_total += n;
        } else if lexicon.is_negative(tok) {
            s.negative_total += n;
        }
    }
    s
}
