use axum::{routing::get, Router};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub const FILES_ANALYZED: &str = "corpus_files_analyzed_total";
pub const FILE_FAILURES: &str = "corpus_file_failures_total";
pub const FILE_ANALYZE_MS: &str = "corpus_file_analyze_ms";
pub const CORPUS_RUNS: &str = "corpus_runs_total";

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(FILES_ANALYZED, "Files that produced a statistics record.");
        describe_counter!(FILE_FAILURES, "Files whose analysis failed, by error kind.");
        describe_histogram!(FILE_ANALYZE_MS, "Per-file analysis time in milliseconds.");
        describe_counter!(CORPUS_RUNS, "Directory-wide analysis runs.");
    });
}

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder. Fails if another recorder is already installed.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
