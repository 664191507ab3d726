// src/analyze/mod.rs
//! Analysis pipeline: tokenizer → frequency map → (ranking, sentiment) → `FileStats`.
//!
//! `Analyzer` owns the immutable configuration (lexicon + top-K). It holds no mutable
//! state, so one instance can be shared across threads for parallel corpus runs.

pub mod file_stats;
pub mod frequency;
pub mod ranker;
pub mod sentiment;
pub mod tokenizer;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::lexicon::Lexicon;

// Re-export convenient types.
pub use crate::analyze::file_stats::{average_line_length, FileStats, FileStatsBuilder};
pub use crate::analyze::frequency::{FrequencyCounter, FrequencyMap};
pub use crate::analyze::ranker::RankedEntry;
pub use crate::analyze::sentiment::{SentimentLabel, SentimentScore};

pub const DEFAULT_TOP_K: usize = 5;

#[derive(Debug, Clone)]
pub struct Analyzer {
    pub(crate) lexicon: Lexicon,
    pub(crate) top_k: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::default(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Analyzer {
    /// `top_k` must be at least 1.
    pub fn new(lexicon: Lexicon, top_k: usize) -> Result<Self> {
        if top_k == 0 {
            return Err(AnalysisError::InvalidArgument(
                "top_k must be at least 1".into(),
            ));
        }
        Ok(Self { lexicon, top_k })
    }

    pub fn from_config(cfg: &AnalyzerConfig) -> Result<Self> {
        Self::new(cfg.lexicon.build(), cfg.top_k)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Analyze an in-memory text.
    pub fn analyze_text(&self, name: &str, text: &str) -> Result<FileStats> {
        let mut b = FileStatsBuilder::new(self);
        for line in text.lines() {
            b.push_line(line);
        }
        b.finish(name)
    }

    /// Analyze any line-iterable UTF-8 source.
    pub fn analyze_reader<R: BufRead>(&self, name: &str, reader: R) -> Result<FileStats> {
        self.analyze_source(name, Path::new(name), reader)
    }

    /// Open `path` and analyze it; the record is keyed by the file name component.
    pub fn analyze_file(&self, path: &Path) -> Result<FileStats> {
        let reader = open_text(path)?;
        self.analyze_source(&display_name(path), path, reader)
    }

    fn analyze_source<R: BufRead>(
        &self,
        name: &str,
        source: &Path,
        reader: R,
    ) -> Result<FileStats> {
        let mut b = FileStatsBuilder::new(self);
        file_stats::for_each_line(name, source, reader, |l| b.push_line(l))?;
        b.finish(name)
    }

    /// Frequency map of an in-memory text (blank lines skipped).
    pub fn frequencies(&self, text: &str) -> FrequencyMap {
        let mut c = FrequencyCounter::new();
        for line in text.lines().filter(|l| !tokenizer::is_blank(l)) {
            c.add_line(line);
        }
        c.finish()
    }

    /// Full ranked word listing of a file, stop words included.
    pub fn ranked_words_in_file(&self, path: &Path) -> Result<Vec<RankedEntry>> {
        let reader = open_text(path)?;
        let mut c = FrequencyCounter::new();
        file_stats::for_each_line(&display_name(path), path, reader, |l| {
            if !tokenizer::is_blank(l) {
                c.add_line(l);
            }
        })?;
        Ok(ranker::rank(&c.finish()))
    }

    /// Top-K non-stop-word tokens of a map under this analyzer's lexicon.
    pub fn top_words(&self, map: &FrequencyMap) -> Vec<String> {
        ranker::top_words(&ranker::rank(map), &self.lexicon, self.top_k)
    }

    pub fn sentiment(&self, map: &FrequencyMap) -> SentimentScore {
        sentiment::score(map, &self.lexicon)
    }
}

/// Open a text file for line reading. Empty paths are `NotFound`.
pub fn open_text(path: &Path) -> Result<BufReader<File>> {
    if path.as_os_str().is_empty() {
        return Err(AnalysisError::NotFound(path.to_path_buf()));
    }
    let f = File::open(path).map_err(|e| AnalysisError::from_io(path, e))?;
    Ok(BufReader::new(f))
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
