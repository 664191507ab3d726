//! Per-file statistics: one line-by-line pass produces a `FileStats` record.

use serde::{Deserialize, Serialize};
use std::io::{self, BufRead};
use std::path::Path;
use tracing::debug;

use super::frequency::FrequencyCounter;
use super::sentiment::{self, SentimentLabel};
use super::{ranker, tokenizer, Analyzer};
use crate::error::{AnalysisError, Result};

/// Statistics of one analyzed text. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStats {
    pub file_name: String,
    /// Letter count, see `tokenizer::letter_count`.
    pub total_words: u64,
    pub total_lines: u64,
    pub total_sections: u64,
    pub avg_line_length: f64,
    pub sentiment: SentimentLabel,
    pub top_words: Vec<String>,
}

/// `round(words / sections, 2)`; `None` when there are no sections.
///
/// Rounding goes through the shortest two-decimal rendering of the quotient, which
/// rounds the exact binary value half-to-even.
pub fn average_line_length(total_words: u64, total_sections: u64) -> Option<f64> {
    if total_sections == 0 {
        return None;
    }
    let avg = total_words as f64 / total_sections as f64;
    Some(format!("{avg:.2}").parse().unwrap_or(avg))
}

/// Incremental accumulator; feed lines with `push_line`, then `finish`.
#[derive(Debug)]
pub struct FileStatsBuilder<'a> {
    analyzer: &'a Analyzer,
    words: u64,
    lines: u64,
    sections: u64,
    freq: FrequencyCounter,
}

impl<'a> FileStatsBuilder<'a> {
    pub fn new(analyzer: &'a Analyzer) -> Self {
        Self {
            analyzer,
            words: 0,
            lines: 0,
            sections: 0,
            freq: FrequencyCounter::new(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        if tokenizer::is_blank(line) {
            return;
        }
        self.lines += 1;
        self.words += tokenizer::letter_count(line) as u64;
        self.sections += tokenizer::section_count(line) as u64;
        self.freq.add_line(line);
    }

    pub fn finish(self, file_name: &str) -> Result<FileStats> {
        let avg = average_line_length(self.words, self.sections)
            .ok_or_else(|| AnalysisError::NoSections(file_name.to_string()))?;

        let map = self.freq.finish();
        let sentiment = sentiment::score(&map, &self.analyzer.lexicon).label();
        let ranked = ranker::rank(&map);
        let top_words = ranker::top_words(&ranked, &self.analyzer.lexicon, self.analyzer.top_k);

        debug!(
            file = file_name,
            words = self.words,
            lines = self.lines,
            sections = self.sections,
            distinct = map.len(),
            %sentiment,
            "file analyzed"
        );

        Ok(FileStats {
            file_name: file_name.to_string(),
            total_words: self.words,
            total_lines: self.lines,
            total_sections: self.sections,
            avg_line_length: avg,
            sentiment,
            top_words,
        })
    }
}

/// Drive `lines()` of a reader through `f`, mapping read failures onto the error taxonomy.
/// Invalid UTF-8 surfaces as `Decoding` under `name`; other read errors carry `source`.
/// No fallback codec is tried.
pub(crate) fn for_each_line<R, F>(
    name: &str,
    source: &Path,
    reader: R,
    mut f: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str),
{
    for (idx, line) in reader.lines().enumerate() {
        match line {
            Ok(l) => f(&l),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(AnalysisError::Decoding {
                    name: name.to_string(),
                    line: idx + 1,
                })
            }
            Err(e) => return Err(AnalysisError::from_io(source, e)),
        }
    }
    Ok(())
}
