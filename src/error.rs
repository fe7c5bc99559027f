// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only things a caller can act on are errors. A single unreadable document
//! is not one of them: the scan records a diagnostic and moves on (see
//! [`DocumentDiagnostic`](crate::DocumentDiagnostic)). Broken invariants are
//! not errors either; they panic in [`contracts`](crate::contracts).

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A problem getting text out of the corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("cannot read document {id}: {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("document {id} is not valid UTF-8")]
    InvalidUtf8 { id: String },

    #[error("no document with id {id}")]
    UnknownDocument { id: String },

    #[error("corpus root {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

/// A configuration value outside its legal range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("minWordMatchRatio must be within [0, 1], got {0}")]
    RatioOutOfRange(f64),

    #[error("similarityThreshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
}
