/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Normalization of irregular field values for display.

pub mod date;
pub mod slug;
pub mod text;

pub use date::{normalize_month, PubDate};
pub use slug::Slug;
pub use text::{html_escape, html_escape_full, strip_formatting};
