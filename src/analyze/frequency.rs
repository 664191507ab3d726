//! Token → occurrence count.

use std::collections::HashMap;

use super::tokenizer;

/// Frozen once `FrequencyCounter::finish` returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyMap {
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. number of token occurrences scanned.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Accumulates tokens; stop words are counted like any other token.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn add_line(&mut self, line: &str) {
        for tok in tokenizer::tokens(line) {
            self.add(tok);
        }
    }

    pub fn finish(self) -> FrequencyMap {
        FrequencyMap {
            counts: self.counts,
            total: self.total,
        }
    }
}

impl FromIterator<String> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut c = FrequencyCounter::new();
        for tok in iter {
            c.add(tok);
        }
        c.finish()
    }
}
