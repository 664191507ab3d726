//! corpus-stats — Binary Entrypoint
//! `analyze` a directory into a CSV/JSON report, list `words` of one file, or `serve`
//! the analyzer over HTTP.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use text_corpus_stats::{
    analyze::Analyzer,
    api::{self, AppState},
    config::{self, AnalyzerConfig},
    corpus::{self, FailurePolicy},
    metrics::Metrics,
    report::{self, CorpusSummary, ReportFormat},
    AnalysisError,
};

#[derive(Parser)]
#[command(name = "corpus-stats")]
#[command(version)]
#[command(about = "Word frequency, sentiment and line statistics over a directory of text files")]
struct Cli {
    /// Analyzer config (TOML or JSON). Defaults to $CORPUS_STATS_CONFIG_PATH, then config/corpus_stats.{toml,json}
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze every text file of a directory and write a report
    Analyze {
        dir: PathBuf,

        /// Report path; format inferred from extension unless --format is given
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// csv or json
        #[arg(long)]
        format: Option<String>,

        /// Skip failing files instead of aborting the run
        #[arg(long)]
        isolate: bool,

        /// Analyze files on worker threads
        #[arg(long)]
        parallel: bool,

        /// Override the number of top words per file
        #[arg(long)]
        top_k: Option<usize>,
    },
    /// Print the full ranked word-frequency listing of one file
    ///
    /// Uses the statistics token rule: apostrophes and inner hyphens stay inside a
    /// word, so `don't` is one entry rather than `don` and `t`.
    Words { file: PathBuf },
    /// Serve the analyzer over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

/// Logs go to stderr; stdout is reserved for reports and word listings.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("text_corpus_stats=info,warn"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "corpus-stats failed");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Typed analysis errors choose their own code; anything else (config, bind) is 1.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<AnalysisError>()
        .map(AnalysisError::exit_code)
        .unwrap_or(1)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut cfg = config::load(cli.config.as_deref()).context("loading analyzer config")?;

    match cli.command {
        Command::Analyze {
            dir,
            out,
            format,
            isolate,
            parallel,
            top_k,
        } => {
            if let Some(k) = top_k {
                cfg.top_k = k;
            }
            let policy = if isolate {
                FailurePolicy::Isolate
            } else {
                FailurePolicy::Abort
            };
            let format = match format {
                Some(f) => Some(f.parse::<ReportFormat>()?),
                None => None,
            };
            analyze(&cfg, &dir, out.as_deref(), format, policy, parallel).await
        }
        Command::Words { file } => {
            let analyzer = Analyzer::from_config(&cfg)?;
            for e in analyzer.ranked_words_in_file(&file)? {
                println!("{}: {}", e.word, e.count);
            }
            Ok(())
        }
        Command::Serve { addr } => serve(&cfg, addr).await,
    }
}

async fn analyze(
    cfg: &AnalyzerConfig,
    dir: &Path,
    out: Option<&Path>,
    format: Option<ReportFormat>,
    policy: FailurePolicy,
    parallel: bool,
) -> anyhow::Result<()> {
    let analyzer = Analyzer::from_config(cfg)?;
    let report = if parallel {
        let paths = corpus::list_text_files(dir, &cfg.extension)?;
        corpus::analyze_paths_parallel(Arc::new(analyzer), paths, policy).await?
    } else {
        corpus::analyze_directory(&analyzer, dir, &cfg.extension, policy)?
    };

    match out {
        Some(path) => {
            let format = format.unwrap_or_else(|| ReportFormat::from_path(path));
            report::generate_report(&report, path, format, cfg.top_k)?;
        }
        None => match format.unwrap_or_default() {
            ReportFormat::Csv => {
                report::write_csv(&report, cfg.top_k, std::io::stdout().lock())?;
            }
            ReportFormat::Json => {
                report::write_json(&report, std::io::stdout().lock())?;
                println!();
            }
        },
    }

    let s = CorpusSummary::from_report(&report);
    info!(
        files = s.files,
        failed = s.failed_files,
        words = s.total_words,
        lines = s.total_lines,
        sections = s.total_sections,
        positive = s.positive_files,
        negative = s.negative_files,
        neutral = s.neutral_files,
        "analysis complete"
    );
    for f in &report.failures {
        eprintln!("skipped {}: {}", f.file_name, f.message);
    }
    Ok(())
}

async fn serve(cfg: &AnalyzerConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let analyzer = Analyzer::from_config(cfg)?;
    let metrics = Metrics::init()?;
    let app = api::router(AppState::new(analyzer)).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "serving");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_kind() {
        let cases = [
            (AnalysisError::NotFound("x".into()), 2),
            (AnalysisError::Decoding { name: "x".into(), line: 1 }, 3),
            (AnalysisError::NoSections("x".into()), 4),
            (AnalysisError::InvalidArgument("x".into()), 5),
            (
                AnalysisError::Io {
                    path: "x".into(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                },
                1,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(exit_code_for(&anyhow::Error::from(err)), code);
        }
    }

    #[test]
    fn context_keeps_typed_exit_code() {
        let res: Result<(), AnalysisError> = Err(AnalysisError::NoSections("a.txt".into()));
        let err = res.context("analyzing corpus").unwrap_err();
        assert_eq!(exit_code_for(&err), 4);
    }

    #[test]
    fn untyped_errors_exit_with_one() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("bind failed")), 1);
    }
}
