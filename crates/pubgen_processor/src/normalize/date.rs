/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Publication date assembly.
//!
//! The year is required. Month and day fall back to `01`. None of the parts
//! are validated: a month that is neither short nor a recognised name is
//! kept as written, and the resulting date string is simply odd.

use std::fmt;

use pubgen_core::{FieldSet, MissingField};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DEFAULT_MONTH: &str = "01";
const DEFAULT_DAY: &str = "01";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl PubDate {
    pub fn from_fields(fields: &FieldSet) -> Result<Self, MissingField> {
        let year = fields.require("year")?.to_string();
        let month = fields
            .get("month")
            .map_or_else(|| DEFAULT_MONTH.to_string(), normalize_month);
        let day = fields.get("day").unwrap_or(DEFAULT_DAY).to_string();
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for PubDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Turn a BibTeX month into two digits where possible.
///
/// Values under three characters are zero-padded to two. Longer values are
/// matched on their first three characters against `Jan`..`Dec`
/// (case-sensitive); anything else is returned as is.
pub fn normalize_month(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() < 3 {
        let padded: Vec<char> = std::iter::once('0').chain(chars).collect();
        return padded[padded.len().saturating_sub(2)..].iter().collect();
    }

    let prefix: String = chars[..3].iter().collect();
    match MONTH_ABBREVIATIONS.iter().position(|m| *m == prefix) {
        Some(index) => format!("{:02}", index + 1),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_short_months_are_padded() {
        assert_eq!(normalize_month("3"), "03");
        assert_eq!(normalize_month("12"), "12");
        assert_eq!(normalize_month("07"), "07");
        assert_eq!(normalize_month(""), "0");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(normalize_month("December"), "12");
        assert_eq!(normalize_month("Jan"), "01");
        assert_eq!(normalize_month("Sept."), "09");
    }

    #[test]
    fn test_unrecognised_month_kept() {
        assert_eq!(normalize_month("jan"), "jan");
        assert_eq!(normalize_month("Spring"), "Spring");
        assert_eq!(normalize_month("003"), "003");
    }

    #[test]
    fn test_defaults() {
        let date = PubDate::from_fields(&fields(&[("year", "2020"), ("month", "3")])).unwrap();
        assert_eq!(date.to_string(), "2020-03-01");

        let date = PubDate::from_fields(&fields(&[("year", "1999")])).unwrap();
        assert_eq!(date.to_string(), "1999-01-01");
    }

    #[test]
    fn test_day_verbatim() {
        let date = PubDate::from_fields(&fields(&[
            ("year", "2021"),
            ("month", "October"),
            ("day", "5"),
        ]))
        .unwrap();
        assert_eq!(date.to_string(), "2021-10-5");
    }

    #[test]
    fn test_year_required() {
        let err = PubDate::from_fields(&fields(&[("month", "May")])).unwrap_err();
        assert_eq!(err.field, "year");
    }
}
