//! Report serialization: tabular CSV and structured JSON.
//!
//! CSV columns, in order:
//! `file_name,total_words,total_lines,total_sections,avg_line_length,sentiment,top_word_1..top_word_K`
//! The average is always written with two decimals; missing top words are empty cells.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::analyze::{FileStats, SentimentLabel};
use crate::corpus::{CorpusReport, FileFailure};
use crate::error::{AnalysisError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(AnalysisError::InvalidArgument(format!(
                "unknown report format: {other}"
            ))),
        }
    }
}

impl ReportFormat {
    /// Guess from an output path's extension; CSV unless it ends in `.json`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Totals over all analyzed files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    pub files: usize,
    pub failed_files: usize,
    pub total_words: u64,
    pub total_lines: u64,
    pub total_sections: u64,
    pub positive_files: usize,
    pub negative_files: usize,
    pub neutral_files: usize,
}

impl CorpusSummary {
    pub fn from_report(report: &CorpusReport) -> Self {
        let mut s = report.files.iter().fold(Self::default(), |mut acc, f| {
            acc.files += 1;
            acc.total_words += f.total_words;
            acc.total_lines += f.total_lines;
            acc.total_sections += f.total_sections;
            match f.sentiment {
                SentimentLabel::Positive => acc.positive_files += 1,
                SentimentLabel::Negative => acc.negative_files += 1,
                SentimentLabel::Neutral => acc.neutral_files += 1,
            }
            acc
        });
        s.failed_files = report.failures.len();
        s
    }
}

pub fn csv_header(top_k: usize) -> Vec<String> {
    let mut h: Vec<String> = [
        "file_name",
        "total_words",
        "total_lines",
        "total_sections",
        "avg_line_length",
        "sentiment",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    h.extend((1..=top_k).map(|i| format!("top_word_{i}")));
    h
}

pub fn csv_row(stats: &FileStats, top_k: usize) -> Vec<String> {
    let mut row = vec![
        stats.file_name.clone(),
        stats.total_words.to_string(),
        stats.total_lines.to_string(),
        stats.total_sections.to_string(),
        format!("{:.2}", stats.avg_line_length),
        stats.sentiment.to_string(),
    ];
    row.extend((0..top_k).map(|i| stats.top_words.get(i).cloned().unwrap_or_default()));
    row
}

/// Write the CSV table. `top_k` fixes the number of top-word columns.
pub fn write_csv<W: Write>(report: &CorpusReport, top_k: usize, out: W) -> Result<usize> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(csv_header(top_k))?;
    for f in &report.files {
        w.write_record(csv_row(f, top_k))?;
    }
    w.flush()
        .map_err(|e| AnalysisError::Csv(csv::Error::from(e)))?;
    Ok(report.files.len())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    summary: CorpusSummary,
    files: &'a [FileStats],
    failures: &'a [FileFailure],
}

pub fn write_json<W: Write>(report: &CorpusReport, mut out: W) -> Result<usize> {
    let doc = JsonReport {
        generated_at: Utc::now(),
        summary: CorpusSummary::from_report(report),
        files: &report.files,
        failures: &report.failures,
    };
    serde_json::to_writer_pretty(&mut out, &doc)?;
    out.flush().map_err(serde_json::Error::io)?;
    Ok(report.files.len())
}

/// Write `report` to `path`, creating parent directories. Returns data rows written.
pub fn generate_report(
    report: &CorpusReport,
    path: &Path,
    format: ReportFormat,
    top_k: usize,
) -> Result<usize> {
    if path.as_os_str().is_empty() {
        return Err(AnalysisError::InvalidArgument(
            "report output path is empty".into(),
        ));
    }
    if top_k == 0 {
        return Err(AnalysisError::InvalidArgument(
            "top_k must be at least 1".into(),
        ));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AnalysisError::from_io(parent, e))?;
    }
    let file = fs::File::create(path).map_err(|e| AnalysisError::from_io(path, e))?;
    let out = std::io::BufWriter::new(file);
    let rows = match format {
        ReportFormat::Csv => write_csv(report, top_k, out)?,
        ReportFormat::Json => write_json(report, out)?,
    };
    info!(path = %path.display(), rows, ?format, "report written");
    Ok(rows)
}
