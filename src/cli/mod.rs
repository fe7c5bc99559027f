// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzline command-line interface.
//!
//! Two subcommands: `search` runs a query against a directory of text files,
//! `distance` prints the edit distance and similarity of two words. Flags on
//! `search` override the config file, which overrides the built-in defaults.

pub mod display;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use fuzzline::{InclusionMode, Rendered, ScoreMode, SearchConfig, SearchResult, DEFAULT_PREAMBLE};

#[derive(Parser)]
#[command(
    name = "fuzzline",
    about = "Fuzzy word-level line retrieval over plain-text documents",
    version
)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find lines that fuzzily answer a query
    Search(SearchArgs),

    /// Print the edit distance and similarity of two words
    Distance {
        a: String,
        b: String,
    },
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Directory holding the documents
    #[arg(short, long, env = "FUZZLINE_CORPUS")]
    pub corpus: PathBuf,

    /// Query text (read from stdin when omitted)
    #[arg(long)]
    pub query: Option<String>,

    /// Return ranked lines, or whole documents that contain a match
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Lines of context shown on each side of a match
    #[arg(long)]
    pub context_lines: Option<usize>,

    /// Fraction of distinct query words a line must satisfy
    #[arg(long)]
    pub ratio: Option<f64>,

    /// Minimum word similarity for a fuzzy pair
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Gate keyword (repeatable; replaces the built-in list)
    #[arg(long = "keyword", short = 'k')]
    pub keywords: Vec<String>,

    /// Accept every query
    #[arg(long, conflicts_with = "keywords")]
    pub no_gate: bool,

    /// How pair similarities combine into a line score
    #[arg(long, value_enum)]
    pub score_mode: Option<ScoreModeArg>,

    /// Emit JSON instead of the human display
    #[arg(long)]
    pub json: bool,

    /// JSON config file (camelCase keys, every key optional)
    #[arg(long, env = "FUZZLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stop starting new documents after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Include files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Put the standard instruction line before document-mode output
    #[arg(long)]
    pub preamble: bool,
}

impl SearchArgs {
    /// Defaults, then the config file, then flags.
    pub fn build_config(&self) -> anyhow::Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SearchConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if let Some(n) = self.context_lines {
            config.context_lines = n;
        }
        if let Some(ratio) = self.ratio {
            config.min_word_match_ratio = ratio;
        }
        if let Some(threshold) = self.threshold {
            config.similarity_threshold = threshold;
        }
        if let Some(score_mode) = self.score_mode {
            config.score_mode = score_mode.into();
        }
        if !self.keywords.is_empty() {
            config.keywords = self.keywords.clone();
        }
        if self.no_gate {
            config = config.without_gate();
        }
        // a preamble from the config file wins over the stock one
        if self.preamble && config.preamble.is_none() {
            config.preamble = Some(DEFAULT_PREAMBLE.to_string());
        }

        config.validate()?;
        Ok(config)
    }
}

/// `--json` payload: the whole result, plus the framed text in document mode.
pub fn json_output(result: &SearchResult, rendered: &Rendered) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(result)?;
    if let (Rendered::Documents(text), Value::Object(map)) = (rendered, &mut value) {
        map.insert("text".to_string(), Value::String(text.clone()));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Lines,
    Documents,
}

impl From<ModeArg> for InclusionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Lines => InclusionMode::Lines,
            ModeArg::Documents => InclusionMode::Documents,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoreModeArg {
    AllPairs,
    BestPerWord,
}

impl From<ScoreModeArg> for ScoreMode {
    fn from(mode: ScoreModeArg) -> Self {
        match mode {
            ScoreModeArg::AllPairs => ScoreMode::AllPairs,
            ScoreModeArg::BestPerWord => ScoreMode::BestPerQueryWord,
        }
    }
}
