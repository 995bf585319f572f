/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use pubgen_processor::{extract, extract_file};

#[test]
fn test_every_entry_keyed_by_id() {
    let database = extract(PUBLICATIONS_BIB);
    let ids: Vec<&str> = database.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["smith2019neural", "doe2020", "undated"]);
}

#[test]
fn test_fields_of_fixture() {
    let database = extract(PUBLICATIONS_BIB);

    let smith = &database["smith2019neural"];
    assert_eq!(smith.get("title"), Some("Neural Parsing for the Masses"));
    assert_eq!(smith.get("booktitle"), Some("Proceedings of the Conference on Things"));
    assert_eq!(smith.get("month"), Some("Dec"));
    assert_eq!(smith.get("url"), Some("https://example.org/smith2019.pdf"));

    let doe = &database["doe2020"];
    assert_eq!(doe.get("title"), Some("A Study of X"));
    assert_eq!(doe.get("author"), Some("Doe, J."));
    assert_eq!(doe.get("year"), Some("2020"));
    assert_eq!(doe.get("day"), Some("15"));
    assert_eq!(doe.get("note"), Some("Selected for oral presentation"));

    let undated = &database["undated"];
    assert_eq!(undated.get("year"), None);
    assert_eq!(undated.len(), 2);
}

#[test]
fn test_missing_terminator_before_next_entry() {
    let input = "\
@article{first,
  title = {First},
  year = 2001,
@article{second,
  title = {Second},
  year = 2002,
}
";
    let database = extract(input);
    assert_eq!(database.len(), 2);
    assert_eq!(database["first"].get("year"), Some("2001"));
    assert_eq!(database["second"].get("title"), Some("Second"));
}

#[test]
fn test_missing_terminator_at_end_of_input() {
    let database = extract("@article{last,\n  title = {Last},\n  year = 2003,\n");
    assert_eq!(database["last"].get("year"), Some("2003"));
}

#[test]
fn test_duplicate_id_keeps_first_position() {
    let input = "\
@article{a,
  title = {Old},
}
@article{b,
  title = {B},
}
@article{a,
  title = {New},
}
";
    let database = extract(input);
    let ids: Vec<&str> = database.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(database["a"].get("title"), Some("New"));
}

#[test]
fn test_keys_are_case_sensitive() {
    let database = extract("@article{Doe,\n title={Upper},\n}\n@article{doe,\n title={Lower},\n}\n");
    assert_eq!(database.len(), 2);
    assert_eq!(database["Doe"].get("title"), Some("Upper"));
}

#[test]
fn test_nested_braces_lose_tail() {
    let database = extract("@article{rna,\n  title = {The {RNA} World},\n  year = 1986,\n}\n");
    assert_eq!(database["rna"].get("title"), Some("The {RNA"));
    assert_eq!(database["rna"].get("year"), Some("1986"));
}

#[test]
fn test_garbage_does_not_panic() {
    let inputs = [
        "",
        "@",
        "@@@\n}}}\n",
        "@article{x, title = {unterminated\n",
        "@article{y,\n = {no name},\n title =\n}\n",
        "{\"}\n@book{z,\n\"\n",
    ];
    for input in inputs {
        let _ = extract(input);
    }
}

#[test]
fn test_extract_file_missing_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(extract_file(&dir.path().join("missing.bib")).is_err());

    let path = write_bib(dir.path(), "pubs.bib", PUBLICATIONS_BIB);
    assert_eq!(extract_file(&path).unwrap().len(), 3);
}
