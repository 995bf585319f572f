/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use gray_matter::engine::YAML;
use gray_matter::Matter;
use pubgen_core::{Config, SourceConfig};

/// A small database mixing conference papers, a journal article, and an
/// entry with no year.
pub const PUBLICATIONS_BIB: &str = r#"% Publications

@inproceedings{smith2019neural,
  title={Neural Parsing for the Masses},
  author={Smith, Jane and Lee, Kim},
  booktitle={Proceedings of the Conference on Things},
  year={2019},
  month={Dec},
  url={https://example.org/smith2019.pdf}
}

@article{doe2020,
  title = "A Study of X",
  author = "Doe, J.",
  journal = "Journal of Y",
  year = 2020,
  month = 3,
  day = 15,
  note = {Selected for oral presentation}
}

@misc{undated,
  title={An Undated Manuscript},
  author={Nobody}
}
"#;

pub fn write_bib(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("fixture should be writable");
    path
}

pub fn journal_source(file: &Path) -> SourceConfig {
    SourceConfig::new("journal", file, "journal")
}

pub fn proceeding_source(file: &Path) -> SourceConfig {
    SourceConfig::new("proceeding", file, "booktitle").with_pretext("In the proceedings of ")
}

pub fn config_with(output_dir: &Path, sources: Vec<SourceConfig>) -> Config {
    Config {
        output_dir: output_dir.to_path_buf(),
        sources,
    }
}

/// Parse a generated document's front matter the way a site generator would.
pub fn front_matter(content: &str) -> (HashMap<String, serde_json::Value>, String) {
    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(content);
    let data = parsed
        .data
        .expect("document should have front matter")
        .deserialize()
        .expect("front matter should deserialize");
    (data, parsed.content)
}
