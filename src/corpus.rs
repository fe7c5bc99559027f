// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where documents come from.
//!
//! The scanner only needs three things from a corpus: how many documents
//! there are, what each one is called, and its text on demand. Loading is
//! per document and fallible, so one unreadable file costs one diagnostic
//! rather than the whole scan.
//!
//! Documents are addressed by position. Position order is the canonical scan
//! order and the tie-breaker for equal scores, so implementations must keep
//! it stable across calls.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::CorpusError;
use crate::types::{Document, DocumentDiagnostic};

pub trait Corpus: Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identifier of the document at `index`. `index < len()`.
    fn id(&self, index: usize) -> &str;

    /// Read the document at `index`. `index < len()`.
    fn load(&self, index: usize) -> Result<Document, CorpusError>;
}

/// Documents already in memory, scanned in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCorpus {
    documents: Vec<Document>,
}

impl InMemoryCorpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn push(&mut self, id: impl Into<String>, content: impl Into<String>) {
        self.documents.push(Document::new(id, content));
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

impl FromIterator<Document> for InMemoryCorpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Corpus for InMemoryCorpus {
    fn len(&self) -> usize {
        self.documents.len()
    }

    fn id(&self, index: usize) -> &str {
        &self.documents[index].id
    }

    fn load(&self, index: usize) -> Result<Document, CorpusError> {
        self.documents
            .get(index)
            .cloned()
            .ok_or_else(|| CorpusError::UnknownDocument {
                id: index.to_string(),
            })
    }
}

/// Regular files under a directory, read lazily during the scan.
///
/// Ids are paths relative to the root with `/` separators, and documents are
/// ordered by id so the scan order does not depend on the filesystem.
///
/// Symlinked directories are not descended, so a link back up the tree
/// cannot list a file twice. Entries the walk cannot read are left out and
/// reported by [`skipped`](Self::skipped).
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
    entries: Vec<(String, PathBuf)>,
    skipped: Vec<DocumentDiagnostic>,
}

impl DirectoryCorpus {
    /// Files directly inside `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, CorpusError> {
        Self::build(root.as_ref(), false)
    }

    /// Files anywhere below `root`.
    pub fn open_recursive(root: impl AsRef<Path>) -> Result<Self, CorpusError> {
        Self::build(root.as_ref(), true)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory entries the walk could not read while opening.
    pub fn skipped(&self) -> &[DocumentDiagnostic] {
        &self.skipped
    }

    fn build(root: &Path, recursive: bool) -> Result<Self, CorpusError> {
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut walker = WalkDir::new(root).follow_links(false).min_depth(1);
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut entries = Vec::new();
        let mut skipped = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let id = err
                        .path()
                        .map_or_else(|| root.display().to_string(), |p| relative_id(root, p));
                    warn!(%id, error = %err, "skipping unreadable corpus entry");
                    skipped.push(DocumentDiagnostic {
                        id,
                        message: err.to_string(),
                    });
                    continue;
                }
            };

            // Symlinked files count; symlinked directories are never entered
            let path = entry.path();
            if path.is_file() {
                entries.push((relative_id(root, path), path.to_path_buf()));
            }
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(Self {
            root: root.to_path_buf(),
            entries,
            skipped,
        })
    }
}

fn relative_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

impl Corpus for DirectoryCorpus {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn id(&self, index: usize) -> &str {
        &self.entries[index].0
    }

    fn load(&self, index: usize) -> Result<Document, CorpusError> {
        let (id, path) = &self.entries[index];
        let bytes = fs::read(path).map_err(|source| CorpusError::Io {
            id: id.clone(),
            source,
        })?;
        let content =
            String::from_utf8(bytes).map_err(|_| CorpusError::InvalidUtf8 { id: id.clone() })?;
        Ok(Document::new(id.clone(), content))
    }
}
