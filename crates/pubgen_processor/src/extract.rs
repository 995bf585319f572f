/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Line-oriented BibTeX entry extraction.
//!
//! This is deliberately not a grammar. Entries are found by scanning lines:
//! a line starting with `@` opens an entry, a line ending in `}` closes it,
//! and a new `@` or the end of the input closes whatever is still open.
//! Fields are then pulled out of each entry's text with a single pattern.
//! Anything the pattern does not recognise is dropped; nothing here fails.

use std::fs;
use std::path::Path;
use std::str::SplitInclusive;

use pubgen_core::{Database, FieldSet};
use regex::Regex;
use tracing::debug;

/// The unparsed lines of one entry, opening line included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub id: String,
    pub lines: Vec<String>,
}

impl RawEntry {
    /// The entry text with original line terminators.
    pub fn body(&self) -> String {
        self.lines.concat()
    }
}

/// What caused an entry to be finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Close {
    NextEntry,
    ClosingBrace,
    EndOfInput,
}

#[derive(Debug)]
enum State {
    Idle,
    InEntry { id: String, lines: Vec<String> },
}

/// Splits database text into [`RawEntry`] blocks.
pub struct EntrySplitter<'a> {
    lines: SplitInclusive<'a, char>,
    state: State,
}

impl<'a> EntrySplitter<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.split_inclusive('\n'),
            state: State::Idle,
        }
    }

    fn close(&mut self, trigger: Close) -> Option<RawEntry> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => None,
            State::InEntry { id, lines } => {
                debug!(id = %id, lines = lines.len(), ?trigger, "closed entry");
                Some(RawEntry { id, lines })
            }
        }
    }
}

impl Iterator for EntrySplitter<'_> {
    type Item = RawEntry;

    fn next(&mut self) -> Option<RawEntry> {
        while let Some(line) = self.lines.next() {
            let trimmed = line.trim();

            if trimmed.starts_with('@') {
                let finished = self.close(Close::NextEntry);
                let id = entry_id(trimmed);
                if id.is_empty() {
                    debug!(line = trimmed, "entry opening without a citation key");
                } else {
                    self.state = State::InEntry {
                        id,
                        lines: vec![line.to_string()],
                    };
                }
                if finished.is_some() {
                    return finished;
                }
                continue;
            }

            if let State::InEntry { lines, .. } = &mut self.state {
                lines.push(line.to_string());
                if trimmed.ends_with('}') {
                    return self.close(Close::ClosingBrace);
                }
            }
        }

        self.close(Close::EndOfInput)
    }
}

/// The citation key on an opening line: the text between the first `{` and
/// the next `,`, trimmed. Empty when the line has no `{`.
fn entry_id(opening: &str) -> String {
    match opening.split_once('{') {
        Some((_, rest)) => rest
            .split_once(',')
            .map_or(rest, |(id, _)| id)
            .trim()
            .to_string(),
        None => String::new(),
    }
}

/// Pattern-based field extraction from an entry body.
pub struct FieldParser {
    field_regex: Regex,
}

impl Default for FieldParser {
    fn default() -> Self {
        Self {
            // name = {braced} | "quoted" | bare run up to a comma or newline
            field_regex: Regex::new(r#"(\w+)\s*=\s*(\{[^}]*\}|"[^"]*"|[^,\n]+)"#).unwrap(),
        }
    }
}

impl FieldParser {
    pub fn parse_fields(&self, body: &str) -> FieldSet {
        let mut fields = FieldSet::new();
        for cap in self.field_regex.captures_iter(body) {
            let (_, [name, value]) = cap.extract();
            fields.insert(name, clean_value(value));
        }
        fields
    }

    /// Split `input` into entries and extract the fields of each.
    pub fn extract(&self, input: &str) -> Database {
        let mut database = Database::new();
        for entry in EntrySplitter::new(input) {
            let fields = self.parse_fields(&entry.body());
            debug!(id = %entry.id, fields = fields.len(), "extracted entry");
            database.insert(entry.id, fields);
        }
        database
    }
}

/// Trim, drop one trailing comma, then peel one layer of braces and one
/// layer of quotes.
fn clean_value(raw: &str) -> &str {
    let value = raw.trim();
    let value = value.strip_suffix(',').unwrap_or(value);
    let value = strip_enclosing(value, '{', '}');
    strip_enclosing(value, '"', '"')
}

fn strip_enclosing(value: &str, open: char, close: char) -> &str {
    if !(value.starts_with(open) && value.ends_with(close)) {
        return value;
    }
    // A lone `"` both opens and closes.
    if value.len() == 1 {
        ""
    } else {
        &value[1..value.len() - 1]
    }
}

/// Extract every entry in `input` with the default field pattern.
pub fn extract(input: &str) -> Database {
    FieldParser::default().extract(input)
}

/// Read a database file and extract every entry in it.
pub fn extract_file(path: &Path) -> std::io::Result<Database> {
    let content = fs::read_to_string(path)?;
    Ok(extract(&content))
}
