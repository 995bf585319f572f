/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Destinations for generated documents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Somewhere a named document can be persisted.
pub trait DocumentSink {
    /// Store `content` under `filename`, replacing any previous document of
    /// the same name.
    fn persist(&mut self, filename: &str, content: &str) -> io::Result<()>;
}

/// Writes documents as files in a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSink for DirectorySink {
    fn persist(&mut self, filename: &str, content: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(filename), content)
    }
}

/// Keeps documents in memory, in the order they were first persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    documents: IndexMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.documents.get(filename).map(String::as_str)
    }

    pub fn documents(&self) -> &IndexMap<String, String> {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSink for MemorySink {
    fn persist(&mut self, filename: &str, content: &str) -> io::Result<()> {
        self.documents
            .insert(filename.to_string(), content.to_string());
        Ok(())
    }
}
