//! # Corpus Aggregator
//! Runs the per-file analysis over every text file of a directory and collects the
//! records in listing order.
//!
//! Policy: by default the first failing file aborts the run (`FailurePolicy::Abort`).
//! `FailurePolicy::Isolate` records the failure and moves on to the next file.

use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::analyze::{display_name, Analyzer, FileStats};
use crate::error::{AnalysisError, Result};
use crate::metrics::{
    ensure_metrics_described, CORPUS_RUNS, FILES_ANALYZED, FILE_ANALYZE_MS, FILE_FAILURES,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    #[default]
    Abort,
    Isolate,
}

/// A file skipped under `FailurePolicy::Isolate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub file_name: String,
    pub kind: String,
    pub message: String,
}

impl FileFailure {
    fn new(file_name: &str, err: &AnalysisError) -> Self {
        Self {
            file_name: file_name.to_string(),
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub files: Vec<FileStats>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
}

impl CorpusReport {
    pub fn get(&self, file_name: &str) -> Option<&FileStats> {
        self.files.iter().find(|f| f.file_name == file_name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn absorb(&mut self, name: &str, res: Result<FileStats>, policy: FailurePolicy) -> Result<()> {
        match res {
            Ok(stats) => {
                self.files.push(stats);
                Ok(())
            }
            Err(e) => {
                counter!(FILE_FAILURES, "kind" => e.kind()).increment(1);
                match policy {
                    FailurePolicy::Abort => Err(e),
                    FailurePolicy::Isolate => {
                        warn!(file = name, kind = e.kind(), error = %e, "file skipped");
                        self.failures.push(FileFailure::new(name, &e));
                        Ok(())
                    }
                }
            }
        }
    }
}

/// Files directly inside `dir` whose extension matches (case-insensitive), sorted by name.
/// Subdirectories are not descended into.
pub fn list_text_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if dir.as_os_str().is_empty() {
        return Err(AnalysisError::NotFound(dir.to_path_buf()));
    }
    let entries = std::fs::read_dir(dir).map_err(|e| AnalysisError::from_io(dir, e))?;
    let mut out = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| AnalysisError::from_io(dir, e))?.path();
        let ext_ok = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.eq_ignore_ascii_case(extension));
        if ext_ok && path.is_file() {
            out.push(path);
        }
    }
    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

/// Fold `(name, result)` pairs into a report. Lazy input means `Abort` stops consuming
/// (and therefore analyzing) at the first failure.
fn collect<I>(results: I, policy: FailurePolicy) -> Result<CorpusReport>
where
    I: IntoIterator<Item = (String, Result<FileStats>)>,
{
    let mut report = CorpusReport::default();
    for (name, res) in results {
        report.absorb(&name, res, policy)?;
    }
    info!(
        files = report.files.len(),
        failures = report.failures.len(),
        "corpus analyzed"
    );
    Ok(report)
}

/// Core composition: analyze each named source in order. `open` yields a line source
/// for a name.
pub fn analyze_sources<F, R>(
    analyzer: &Analyzer,
    names: &[String],
    mut open: F,
    policy: FailurePolicy,
) -> Result<CorpusReport>
where
    F: FnMut(&str) -> Result<R>,
    R: BufRead,
{
    ensure_metrics_described();
    counter!(CORPUS_RUNS).increment(1);

    let results = names.iter().map(|name| {
        let res = timed(|| open(name).and_then(|r| analyzer.analyze_reader(name, r)));
        (name.clone(), res)
    });
    collect(results, policy)
}

/// Analyze the given paths sequentially, keyed by file name.
pub fn analyze_paths(
    analyzer: &Analyzer,
    paths: &[PathBuf],
    policy: FailurePolicy,
) -> Result<CorpusReport> {
    ensure_metrics_described();
    counter!(CORPUS_RUNS).increment(1);

    let results = paths
        .iter()
        .map(|p| (display_name(p), timed(|| analyzer.analyze_file(p))));
    collect(results, policy)
}

/// List `dir` and analyze every matching file.
pub fn analyze_directory(
    analyzer: &Analyzer,
    dir: &Path,
    extension: &str,
    policy: FailurePolicy,
) -> Result<CorpusReport> {
    let paths = list_text_files(dir, extension)?;
    info!(dir = %dir.display(), files = paths.len(), "scanning corpus");
    analyze_paths(analyzer, &paths, policy)
}

/// Same result as `analyze_paths`, with files analyzed on blocking worker threads.
/// Each result lands in the slot of its listing index, so ordering is unchanged; under
/// `Abort` the first failure in listing order is returned.
pub async fn analyze_paths_parallel(
    analyzer: Arc<Analyzer>,
    paths: Vec<PathBuf>,
    policy: FailurePolicy,
) -> Result<CorpusReport> {
    ensure_metrics_described();
    counter!(CORPUS_RUNS).increment(1);

    let mut set = JoinSet::new();
    for (idx, path) in paths.iter().cloned().enumerate() {
        let analyzer = Arc::clone(&analyzer);
        set.spawn_blocking(move || (idx, timed(|| analyzer.analyze_file(&path))));
    }

    let mut slots: Vec<Option<Result<FileStats>>> = (0..paths.len()).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (idx, res) = joined?;
        slots[idx] = Some(res);
    }

    let results = paths.iter().zip(slots).map(|(path, slot)| {
        let name = display_name(path);
        let res = slot.unwrap_or_else(|| {
            Err(AnalysisError::InvalidArgument(format!("{name}: no result produced")))
        });
        (name, res)
    });
    collect(results, policy)
}

fn timed<F>(f: F) -> Result<FileStats>
where
    F: FnOnce() -> Result<FileStats>,
{
    let started = Instant::now();
    let res = f();
    histogram!(FILE_ANALYZE_MS).record(started.elapsed().as_secs_f64() * 1000.0);
    if res.is_ok() {
        counter!(FILES_ANALYZED).increment(1);
    }
    res
}
