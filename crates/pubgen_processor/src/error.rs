/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::io;
use std::path::PathBuf;

use pubgen_core::MissingField;
use thiserror::Error;

/// Failure to build the document for a single entry.
///
/// Scoped to that entry: the pipeline reports it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("missing expected field '{field}' from entry {entry_id}")]
    MissingField { field: String, entry_id: String },
}

impl BuildError {
    pub(crate) fn missing(entry_id: &str, err: MissingField) -> Self {
        BuildError::MissingField {
            field: err.field,
            entry_id: entry_id.to_string(),
        }
    }
}

/// Failures that abort a whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read citation database {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {filename}: {source}")]
    Write { filename: String, source: io::Error },
}
