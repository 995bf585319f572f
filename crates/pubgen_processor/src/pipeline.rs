/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Batch conversion of configured sources.

use std::fmt;
use std::fs;

use pubgen_core::{Config, SourceConfig};
use tracing::info;

use crate::document::DocumentBuilder;
use crate::error::{BuildError, PipelineError};
use crate::extract::FieldParser;
use crate::sink::DocumentSink;

const WRITTEN_TITLE_WIDTH: usize = 60;
const SKIPPED_TITLE_WIDTH: usize = 30;

/// What happened to one attempted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Written {
        source: String,
        entry_id: String,
        title: String,
        filename: String,
    },
    Skipped {
        source: String,
        entry_id: String,
        title: String,
        field: String,
    },
}

impl EntryOutcome {
    pub fn entry_id(&self) -> &str {
        match self {
            EntryOutcome::Written { entry_id, .. } | EntryOutcome::Skipped { entry_id, .. } => {
                entry_id
            }
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, EntryOutcome::Written { .. })
    }
}

impl fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryOutcome::Written {
                entry_id, title, ..
            } => write!(
                f,
                "SUCCESSFULLY PARSED {}: \"{}\"",
                entry_id,
                truncate_title(title, WRITTEN_TITLE_WIDTH)
            ),
            EntryOutcome::Skipped {
                entry_id,
                title,
                field,
                ..
            } => write!(
                f,
                "WARNING Missing Expected Field '{}' from entry {}: \"{}\"",
                field,
                entry_id,
                truncate_title(title, SKIPPED_TITLE_WIDTH)
            ),
        }
    }
}

/// The first `width` characters of `title`, with `...` when cut.
pub fn truncate_title(title: &str, width: usize) -> String {
    let mut shown: String = title.chars().take(width).collect();
    if title.chars().count() > width {
        shown.push_str("...");
    }
    shown
}

/// Every outcome of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<EntryOutcome>,
}

impl RunReport {
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.written()
    }
}

/// Converts every source in a [`Config`], one after another.
pub struct Pipeline<'a> {
    config: &'a Config,
    parser: FieldParser,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            parser: FieldParser::default(),
        }
    }

    /// Run all sources into `sink`, calling `observe` as each entry is
    /// attempted.
    ///
    /// Entries missing a required field are reported and skipped. Reading a
    /// database or writing a document failing ends the run.
    pub fn run<F>(&self, sink: &mut dyn DocumentSink, mut observe: F) -> Result<RunReport, PipelineError>
    where
        F: FnMut(&EntryOutcome),
    {
        let mut report = RunReport::default();
        for source in &self.config.sources {
            self.run_source(source, sink, &mut |outcome: EntryOutcome| {
                observe(&outcome);
                report.outcomes.push(outcome);
            })?;
        }
        Ok(report)
    }

    fn run_source(
        &self,
        source: &SourceConfig,
        sink: &mut dyn DocumentSink,
        emit: &mut dyn FnMut(EntryOutcome),
    ) -> Result<(), PipelineError> {
        let content = fs::read_to_string(&source.file).map_err(|e| PipelineError::Read {
            path: source.file.clone(),
            source: e,
        })?;
        let database = self.parser.extract(&content);
        info!(
            source = %source.name,
            file = %source.file.display(),
            entries = database.len(),
            "processing source"
        );

        let builder = DocumentBuilder::new(source);
        for (entry_id, fields) in &database {
            let title = fields.get("title").unwrap_or_default().to_string();
            match builder.build(entry_id, fields) {
                Ok(doc) => {
                    sink.persist(&doc.filename, &doc.content)
                        .map_err(|e| PipelineError::Write {
                            filename: doc.filename.clone(),
                            source: e,
                        })?;
                    emit(EntryOutcome::Written {
                        source: source.name.clone(),
                        entry_id: entry_id.clone(),
                        title,
                        filename: doc.filename,
                    });
                }
                Err(BuildError::MissingField { field, entry_id }) => {
                    info!(source = %source.name, entry = %entry_id, field = %field, "skipping entry");
                    emit(EntryOutcome::Skipped {
                        source: source.name.clone(),
                        entry_id,
                        title,
                        field,
                    });
                }
            }
        }
        Ok(())
    }
}
