/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Title slugs and output filenames.

use lazy_static::lazy_static;
use regex::Regex;

use super::text::strip_formatting;

lazy_static! {
    // A bracketed run (greedy) or any character outside the slug alphabet.
    static ref UNSLUGGABLE: Regex = Regex::new(r"\[.*\]|[^a-zA-Z0-9_-]").unwrap();
}

/// A title reduced to a filename-safe identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug {
    /// Title without formatting characters, spaces turned into dashes.
    pub clean_title: String,
    pub url_slug: String,
}

impl Slug {
    pub fn from_title(title: &str) -> Self {
        let clean_title = strip_formatting(title).replace(' ', "-");
        let url_slug = collapse_dashes(&UNSLUGGABLE.replace_all(&clean_title, ""));
        Self {
            clean_title,
            url_slug,
        }
    }

    /// The page name without extension, as used in the permalink.
    pub fn html_filename(&self, date: &str) -> String {
        collapse_dashes(&format!("{}-{}", date, self.url_slug))
    }

    /// The on-disk document name.
    pub fn md_filename(&self, date: &str) -> String {
        collapse_dashes(&format!("{}-{}.md", date, self.url_slug))
    }
}

/// One left-to-right pass of `--` to `-`. Runs of three or more dashes are
/// only partly collapsed.
pub fn collapse_dashes(text: &str) -> String {
    text.replace("--", "-")
}
