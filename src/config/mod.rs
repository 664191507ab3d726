// src/config/mod.rs
//! Analyzer configuration (TOML or JSON).
//!
//! Shape:
//! ```toml
//! top_k = 5
//! extension = "txt"
//!
//! [lexicon]
//! stop_words = ["the", "and"]
//! positive_words = ["good"]
//! negative_words = ["bad"]
//! ```
//! Every key is optional; a missing lexicon list keeps the built-in one.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyze::DEFAULT_TOP_K;
use crate::lexicon::Lexicon;

pub const ENV_CONFIG_PATH: &str = "CORPUS_STATS_CONFIG_PATH";
pub const DEFAULT_TOML_PATH: &str = "config/corpus_stats.toml";
pub const DEFAULT_JSON_PATH: &str = "config/corpus_stats.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub top_k: usize,
    /// File extension (without the dot) picked up by directory scans.
    pub extension: String,
    pub lexicon: LexiconConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            extension: "txt".to_string(),
            lexicon: LexiconConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub stop_words: Option<Vec<String>>,
    pub positive_words: Option<Vec<String>>,
    pub negative_words: Option<Vec<String>>,
}

impl LexiconConfig {
    /// Built-in lists, with each configured list replacing its counterpart.
    pub fn build(&self) -> Lexicon {
        let mut lx = Lexicon::default();
        if let Some(v) = &self.stop_words {
            lx = lx.with_stop_words(v.as_slice());
        }
        if let Some(v) = &self.positive_words {
            lx = lx.with_positive(v.as_slice());
        }
        if let Some(v) = &self.negative_words {
            lx = lx.with_negative(v.as_slice());
        }
        lx
    }
}

impl AnalyzerConfig {
    fn validated(mut self) -> Result<Self> {
        if self.top_k == 0 {
            bail!("top_k must be at least 1");
        }
        self.extension = self.extension.trim().trim_start_matches('.').to_string();
        if self.extension.is_empty() {
            bail!("extension must not be empty");
        }
        Ok(self)
    }
}

/// Load from an explicit path. Format by extension, falling back to content sniffing.
pub fn load_from(path: &Path) -> Result<AnalyzerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading analyzer config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_config(&content, ext.as_str())
        .with_context(|| format!("parsing analyzer config {}", path.display()))
}

/// Load using env var + fallbacks:
/// 1) $CORPUS_STATS_CONFIG_PATH
/// 2) config/corpus_stats.toml
/// 3) config/corpus_stats.json
/// 4) built-in defaults
pub fn load_default() -> Result<AnalyzerConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_from(&pb);
        }
        return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
    }
    let toml_p = PathBuf::from(DEFAULT_TOML_PATH);
    if toml_p.exists() {
        return load_from(&toml_p);
    }
    let json_p = PathBuf::from(DEFAULT_JSON_PATH);
    if json_p.exists() {
        return load_from(&json_p);
    }
    Ok(AnalyzerConfig::default())
}

/// Explicit path wins; otherwise the default chain.
pub fn load(explicit: Option<&Path>) -> Result<AnalyzerConfig> {
    match explicit {
        Some(p) => load_from(p),
        None => load_default(),
    }
}

fn parse_config(s: &str, hint_ext: &str) -> Result<AnalyzerConfig> {
    let looks_json = s.trim_start().starts_with('{');
    let cfg = match hint_ext {
        "toml" => toml::from_str::<AnalyzerConfig>(s)?,
        "json" => serde_json::from_str::<AnalyzerConfig>(s)?,
        _ if looks_json => serde_json::from_str::<AnalyzerConfig>(s)?,
        _ => toml::from_str::<AnalyzerConfig>(s)?,
    };
    cfg.validated()
}
