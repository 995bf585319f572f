/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Publication page assembly.
//!
//! Each entry becomes one Markdown page: a front-matter block the site
//! generator reads (title, permalink, date, venue, citation) followed by a
//! short body that either links the paper or points at a scholar search.

use pubgen_core::{FieldSet, SourceConfig};

use crate::error::BuildError;
use crate::normalize::{html_escape, html_escape_full, strip_formatting, PubDate, Slug};

/// Notes and URLs this short or shorter are treated as placeholders.
const MIN_OPTIONAL_LEN: usize = 5;

const SCHOLAR_SEARCH: &str = "https://scholar.google.com/scholar?q=";

/// A finished page for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub entry_id: String,
    /// `<date>-<slug>.md`
    pub filename: String,
    /// The filename without extension, as used in the permalink.
    pub html_filename: String,
    pub date: String,
    /// The citation line before front-matter escaping.
    pub citation: String,
    pub content: String,
}

/// Builds pages for the entries of one source database.
pub struct DocumentBuilder<'a> {
    source: &'a SourceConfig,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(source: &'a SourceConfig) -> Self {
        Self { source }
    }

    pub fn build(&self, entry_id: &str, fields: &FieldSet) -> Result<OutputDocument, BuildError> {
        let date = PubDate::from_fields(fields).map_err(|e| BuildError::missing(entry_id, e))?;
        let title = fields
            .require("title")
            .map_err(|e| BuildError::missing(entry_id, e))?;

        let pub_date = date.to_string();
        let slug = Slug::from_title(title);
        let html_filename = slug.html_filename(&pub_date);
        let filename = basename(&slug.md_filename(&pub_date)).to_string();

        let display_title = strip_formatting(title);
        let venue = self.venue(fields);
        let citation = citation(fields.get("author"), &display_title, &venue, &date.year);

        let note = fields
            .get("note")
            .filter(|n| n.chars().count() > MIN_OPTIONAL_LEN);
        let url = fields
            .get("url")
            .filter(|u| u.chars().count() > MIN_OPTIONAL_LEN);

        let collection = &self.source.collection;
        let mut front_matter = vec![
            "---".to_string(),
            format!("title: \"{}\"", html_escape(&display_title)),
            format!("collection: {}", collection.name),
            format!("permalink: {}{}", collection.permalink, html_filename),
        ];
        if let Some(note) = note {
            front_matter.push(format!("excerpt: '{}'", html_escape(note)));
        }
        front_matter.push(format!("date: {}", pub_date));
        front_matter.push(format!("venue: '{}'", html_escape(&venue)));
        if let Some(url) = url {
            front_matter.push(format!("paperurl: '{}'", url));
        }
        front_matter.push(format!("citation: '{}'", html_escape(&citation)));
        front_matter.push("---".to_string());

        let mut content = front_matter.join("\n");
        if let Some(note) = note {
            content.push_str(&format!("\n{}\n", html_escape(note)));
        }
        match url {
            Some(url) => {
                content.push_str(&format!(
                    "\n[Access paper here]({}){{:target=\"_blank\"}}\n",
                    url
                ));
            }
            None => {
                let query = html_escape_full(&slug.clean_title.replace('-', "+"));
                content.push_str(&format!(
                    "\nUse [Google Scholar]({}{}){{:target=\"_blank\"}} for full citation",
                    SCHOLAR_SEARCH, query
                ));
            }
        }

        Ok(OutputDocument {
            entry_id: entry_id.to_string(),
            filename,
            html_filename,
            date: pub_date,
            citation,
            content,
        })
    }

    /// Configured pretext followed by the venue field, formatting removed.
    /// A missing venue field leaves just the pretext.
    fn venue(&self, fields: &FieldSet) -> String {
        let value = fields.get(&self.source.venue_key).unwrap_or_default();
        format!("{}{}", self.source.venue_pretext, strip_formatting(value))
    }
}

/// `Authors, "Title." Venue, Year.` with the title and venue escaped.
pub fn citation(author: Option<&str>, title: &str, venue: &str, year: &str) -> String {
    let mut citation = String::new();
    if let Some(author) = author.filter(|a| !a.is_empty()) {
        citation.push_str(author);
        citation.push_str(", ");
    }
    citation.push('"');
    citation.push_str(&html_escape(title));
    citation.push_str(".\"");
    citation.push(' ');
    citation.push_str(&html_escape(venue));
    citation.push_str(", ");
    citation.push_str(year);
    citation.push('.');
    citation
}

fn basename(filename: &str) -> &str {
    filename.rsplit('/').next().unwrap_or(filename)
}
