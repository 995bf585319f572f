/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-source output conventions.
//!
//! A [`Config`] lists the BibTeX databases to convert, in processing order,
//! along with where the generated pages go. It is plain data: callers build
//! one (or load one from disk) and hand it to the pipeline.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Directory the generated documents are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

/// Settings for one citation database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceConfig {
    /// Label used in log output.
    pub name: String,

    pub file: PathBuf,

    /// Field holding the publication outlet, e.g. `journal` or `booktitle`.
    pub venue_key: String,

    /// Literal text placed before the venue, e.g. "In the proceedings of ".
    #[serde(default)]
    pub venue_pretext: String,

    #[serde(default)]
    pub collection: Collection,
}

/// Static-site collection the generated pages belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default = "default_collection_name")]
    pub name: String,

    /// URL prefix the page filename is appended to.
    #[serde(default = "default_permalink")]
    pub permalink: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            sources: Vec::new(),
        }
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            name: default_collection_name(),
            permalink: default_permalink(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("_publications")
}

fn default_collection_name() -> String {
    "publications".to_string()
}

fn default_permalink() -> String {
    "/publication/".to_string()
}

impl SourceConfig {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>, venue_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            venue_key: venue_key.into(),
            venue_pretext: String::new(),
            collection: Collection::default(),
        }
    }

    pub fn with_pretext(mut self, pretext: impl Into<String>) -> Self {
        self.venue_pretext = pretext.into();
        self
    }

    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.collection = collection;
        self
    }
}

impl Config {
    /// The academicpages default: conference papers keyed on `booktitle` and
    /// journal articles keyed on `journal`, both read from the sample database.
    pub fn sample() -> Self {
        let file = PathBuf::from("files/bibtex1.bib");
        Self {
            output_dir: default_output_dir(),
            sources: vec![
                SourceConfig::new("proceeding", file.clone(), "booktitle")
                    .with_pretext("In the proceedings of "),
                SourceConfig::new("journal", file, "journal"),
            ],
        }
    }

    /// Load a configuration file, choosing the format by extension.
    ///
    /// Relative paths inside the file are resolved against the file's own
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

        let parsed = match ext {
            "toml" => toml::from_str::<Config>(&content).map_err(|e| e.to_string()),
            "yaml" | "yml" => serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string()),
            "json" => serde_json::from_str::<Config>(&content).map_err(|e| e.to_string()),
            other => return Err(CoreError::UnsupportedFormat(other.to_string())),
        };

        let mut config = parsed.map_err(|message| CoreError::Config {
            path: path.to_path_buf(),
            message,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Rebase relative source and output paths onto `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        for source in &mut self.sources {
            if source.file.is_relative() {
                source.file = base.join(&source.file);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_two_sources() {
        let config = Config::sample();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].venue_key, "booktitle");
        assert_eq!(config.sources[0].venue_pretext, "In the proceedings of ");
        assert_eq!(config.sources[1].venue_key, "journal");
        assert_eq!(config.sources[1].venue_pretext, "");
        assert_eq!(config.sources[1].collection.permalink, "/publication/");
    }

    #[test]
    fn test_toml_defaults() {
        let config: Config = toml::from_str(
            r#"
[[sources]]
name = "journal"
file = "pubs.bib"
venue-key = "journal"
"#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("_publications"));
        let source = &config.sources[0];
        assert_eq!(source.venue_pretext, "");
        assert_eq!(source.collection, Collection::default());
    }

    #[test]
    fn test_resolve_relative_paths() {
        let mut config = Config::sample();
        config.sources[1].file = PathBuf::from("/abs/pubs.bib");
        config.resolve_relative_to(Path::new("site"));

        assert_eq!(config.output_dir, PathBuf::from("site/_publications"));
        assert_eq!(config.sources[0].file, PathBuf::from("site/files/bibtex1.bib"));
        assert_eq!(config.sources[1].file, PathBuf::from("/abs/pubs.bib"));
    }
}
