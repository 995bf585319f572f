/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! pubgen processor
//!
//! Turns BibTeX databases into one Markdown page per entry, each with
//! front matter for a static-site publications collection.
//!
//! Extraction is tolerant rather than strict: entries are split on lines
//! and fields are matched with a single pattern, so unusual input loses
//! fields instead of failing. Entries that end up without a `year` or
//! `title` are skipped and reported; everything else becomes a page.
//!
//! # Example
//!
//! ```rust
//! use pubgen_core::SourceConfig;
//! use pubgen_processor::{extract, DocumentBuilder};
//!
//! let database = extract(
//!     "@article{doe2020, title={A Study of X}, author={Doe, J.}, journal={Journal of Y}, year={2020}}",
//! );
//! let source = SourceConfig::new("journal", "pubs.bib", "journal");
//! let doc = DocumentBuilder::new(&source)
//!     .build("doe2020", &database["doe2020"])
//!     .unwrap();
//!
//! assert_eq!(doc.filename, "2020-01-01-A-Study-of-X.md");
//! assert_eq!(doc.citation, r#"Doe, J., "A Study of X." Journal of Y, 2020."#);
//! ```

pub mod document;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod sink;

pub use document::{DocumentBuilder, OutputDocument};
pub use error::{BuildError, PipelineError};
pub use extract::{extract, extract_file, EntrySplitter, FieldParser, RawEntry};
pub use pipeline::{EntryOutcome, Pipeline, RunReport};
pub use sink::{DirectorySink, DocumentSink, MemorySink};
