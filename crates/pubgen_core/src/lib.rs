/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! pubgen core
//!
//! Shared data model for turning BibTeX databases into static-site
//! publication pages: the per-entry [`FieldSet`] produced by extraction and
//! the [`Config`] describing each source database and its output collection.

pub mod config;
pub mod error;
pub mod fields;

pub use config::{Collection, Config, SourceConfig};
pub use error::CoreError;
pub use fields::{Database, FieldSet, MissingField};
