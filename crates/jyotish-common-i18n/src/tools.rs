// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized strings for tool categories and tools.

use tracing::trace;

use crate::table::Translations;

/// Per-tool fields the directory renders.
pub const TOOL_FIELDS: [&str; 2] = ["shortTitle", "description"];

/// Resolve `category_key.tool_key.field`, or return `fallback`.
///
/// Missing keys are routine: most tools are untranslated in most locales.
/// A present but zero-length string also yields `fallback`. Whitespace-only
/// strings count as present and are returned unchanged.
///
/// # Example
///
/// ```
/// use jyotish_common_i18n::{get_tool_translation, TranslationTable};
///
/// let table = TranslationTable::from_json_str(
///     r#"{ "astrology": { "kundli": { "shortTitle": "कुंडली", "description": "" } } }"#,
/// ).unwrap();
///
/// assert_eq!(get_tool_translation(&table, "astrology", "kundli", "shortTitle", "Kundli"), "कुंडली");
/// assert_eq!(get_tool_translation(&table, "astrology", "kundli", "description", "Birth chart"), "Birth chart");
/// ```
pub fn get_tool_translation<'a, T>(
	translations: &'a T,
	category_key: &str,
	tool_key: &str,
	field: &str,
	fallback: &'a str,
) -> &'a str
where
	T: Translations + ?Sized,
{
	non_empty_or(
		translations.lookup(&[category_key, tool_key, field]),
		fallback,
		|| trace!(category_key, tool_key, field, "tool translation missing, using fallback"),
	)
}

/// Resolve a category-level field such as `title` or `description`.
///
/// Same fallback rules as [`get_tool_translation`].
pub fn get_category_translation<'a, T>(
	translations: &'a T,
	category_key: &str,
	field: &str,
	fallback: &'a str,
) -> &'a str
where
	T: Translations + ?Sized,
{
	non_empty_or(
		translations.lookup(&[category_key, field]),
		fallback,
		|| trace!(category_key, field, "category translation missing, using fallback"),
	)
}

fn non_empty_or<'a>(found: Option<&'a str>, fallback: &'a str, on_miss: impl FnOnce()) -> &'a str {
	match found {
		Some(value) if !value.is_empty() => value,
		_ => {
			on_miss();
			fallback
		}
	}
}
