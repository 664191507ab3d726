//! Error taxonomy for the statistics engine.
//!
//! Every failure a caller may want to branch on has its own variant; in particular
//! `NoSections` (a file without any `.`) is distinct so a corpus run can skip the file
//! and continue instead of treating it as a generic arithmetic fault.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Empty or missing file/directory path.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Content is not valid UTF-8. `line` is 1-based.
    #[error("{name}: invalid UTF-8 content at line {line}")]
    Decoding { name: String, line: usize },

    /// Average line length is words / sections; zero sections has no defined value.
    #[error("{0}: file contains no sentence-terminating punctuation")]
    NoSections(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AnalysisError {
    /// Short machine-readable kind, used in HTTP error bodies and failure records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Decoding { .. } => "decoding",
            Self::NoSections(_) => "no_sections",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Io { .. } => "io",
            Self::Csv(_) => "csv",
            Self::Json(_) => "json",
            Self::Task(_) => "task",
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 2,
            Self::Decoding { .. } => 3,
            Self::NoSections(_) => 4,
            Self::InvalidArgument(_) => 5,
            _ => 1,
        }
    }

    /// Map an `io::Error` raised while opening/reading `path` onto the taxonomy.
    pub(crate) fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Io { path, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_maps_to_not_found() {
        let e = AnalysisError::from_io("missing.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(e, AnalysisError::NotFound(_)));
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn other_io_errors_keep_path() {
        let e = AnalysisError::from_io(
            "locked.txt",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(e.kind(), "io");
        assert!(e.to_string().contains("locked.txt"));
    }

    #[test]
    fn no_sections_message_names_file() {
        let e = AnalysisError::NoSections("a.txt".into());
        assert_eq!(
            e.to_string(),
            "a.txt: file contains no sentence-terminating punctuation"
        );
        assert_eq!(e.exit_code(), 4);
    }

    #[test]
    fn exit_codes_per_variant() {
        assert_eq!(AnalysisError::NotFound("a".into()).exit_code(), 2);
        let dec = AnalysisError::Decoding { name: "a".into(), line: 3 };
        assert_eq!(dec.exit_code(), 3);
        assert_eq!(AnalysisError::InvalidArgument("k".into()).exit_code(), 5);
        let io = AnalysisError::from_io("a", io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(io.exit_code(), 1);
    }
}
