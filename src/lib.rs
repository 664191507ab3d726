// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod report;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{Analyzer, FileStats, FrequencyMap, RankedEntry, SentimentLabel};
pub use crate::api::router;
pub use crate::config::AnalyzerConfig;
pub use crate::corpus::{
    analyze_directory, analyze_paths, analyze_paths_parallel, analyze_sources, CorpusReport,
    FailurePolicy, FileFailure,
};
pub use crate::error::{AnalysisError, Result};
pub use crate::lexicon::Lexicon;
pub use crate::report::{generate_report, CorpusSummary, ReportFormat};
