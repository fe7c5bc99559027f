// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every knob has a default, so `SearchConfig::default()` is a working setup
//! and a JSON config file only needs the keys it wants to change:
//!
//! ```json
//! { "contextLines": 1, "minWordMatchRatio": 0.75, "mode": "documents" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};
use crate::fuzzy::DEFAULT_SIMILARITY_THRESHOLD;
use crate::gate::DEFAULT_KEYWORDS;
use crate::scoring::ScoreMode;

/// Lines of context on each side of a match.
pub const DEFAULT_CONTEXT_LINES: usize = 2;

/// Fraction of query words a line must satisfy.
pub const DEFAULT_MIN_WORD_MATCH_RATIO: f64 = 0.6;

/// Instruction text that can precede whole-document output, for consumers
/// that feed the blob to a language model.
pub const DEFAULT_PREAMBLE: &str = "I'm giving you a list of files with their content. You can use this information to answer questions about the files, after the answer point to the file name and the line number where the answer is from.";

/// What a scan hands back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InclusionMode {
    /// Individual line matches, best first.
    #[default]
    Lines,
    /// Every document with at least one match, framed and verbatim.
    Documents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub context_lines: usize,
    pub min_word_match_ratio: f64,
    pub similarity_threshold: f64,
    /// Query gate keywords. Empty accepts every query.
    pub keywords: Vec<String>,
    pub mode: InclusionMode,
    pub score_mode: ScoreMode,
    /// Printed before the framed documents in `Documents` mode.
    pub preamble: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            min_word_match_ratio: DEFAULT_MIN_WORD_MATCH_RATIO,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            mode: InclusionMode::Lines,
            score_mode: ScoreMode::AllPairs,
            preamble: None,
        }
    }
}

impl SearchConfig {
    /// Check that ratio and threshold are fractions. NaN fails both.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_word_match_ratio) {
            return Err(ConfigError::RatioOutOfRange(self.min_word_match_ratio));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.similarity_threshold));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Accept every query, skipping the keyword gate.
    pub fn without_gate(mut self) -> Self {
        self.keywords.clear();
        self
    }
}
