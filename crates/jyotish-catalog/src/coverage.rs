// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation coverage of the catalog's tool fields.

use jyotish_common_i18n::{Translations, TOOL_FIELDS};
use serde::Serialize;

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageEntry {
	pub category: String,
	pub slug: String,
	/// Dotted lookup path, e.g. `numerology.lucky-number.shortTitle`.
	pub path: String,
	pub translated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
	pub entries: Vec<CoverageEntry>,
}

impl CoverageReport {
	pub fn missing(&self) -> impl Iterator<Item = &CoverageEntry> {
		self.entries.iter().filter(|e| !e.translated)
	}

	pub fn translated_count(&self) -> usize {
		self.entries.iter().filter(|e| e.translated).count()
	}

	/// Fraction of fields translated; an empty report counts as complete.
	pub fn ratio(&self) -> f64 {
		if self.entries.is_empty() {
			return 1.0;
		}
		self.translated_count() as f64 / self.entries.len() as f64
	}
}

/// Check every tool field in `catalog` against `translations`.
///
/// Uses the same rule as the resolver: only a non-empty string counts.
pub fn coverage<T>(catalog: &Catalog, translations: &T) -> CoverageReport
where
	T: Translations + ?Sized,
{
	let entries = catalog
		.tools()
		.flat_map(|(category, tool)| {
			TOOL_FIELDS.into_iter().map(move |field| {
				let path = [
					category.translation_key.as_str(),
					tool.translation_key.as_str(),
					field,
				];
				CoverageEntry {
					category: category.id.clone(),
					slug: tool.slug.clone(),
					path: path.join("."),
					translated: translations.lookup(&path).is_some_and(|s| !s.is_empty()),
				}
			})
		})
		.collect();

	CoverageReport { entries }
}

#[cfg(test)]
mod tests {
	use super::*;
	use jyotish_common_i18n::TranslationTable;
	use serde_json::json;

	#[test]
	fn test_empty_table_has_nothing_translated() {
		let report = coverage(Catalog::builtin(), &TranslationTable::empty());
		assert_eq!(report.entries.len(), Catalog::builtin().tools().count() * TOOL_FIELDS.len());
		assert_eq!(report.translated_count(), 0);
		assert_eq!(report.ratio(), 0.0);
	}

	#[test]
	fn test_counts_only_non_empty_strings() {
		let table = TranslationTable::from_value(json!({
			"vastu": {
				"room-advisor": { "shortTitle": "कक्ष सलाहकार", "description": "" }
			}
		}))
		.unwrap();
		let report = coverage(Catalog::builtin(), &table);
		assert_eq!(report.translated_count(), 1);

		let missing: Vec<_> = report.missing().map(|e| e.path.as_str()).collect();
		assert!(missing.contains(&"vastu.room-advisor.description"));
		assert!(!missing.contains(&"vastu.room-advisor.shortTitle"));
	}

	#[test]
	fn test_empty_report_ratio() {
		assert_eq!(CoverageReport::default().ratio(), 1.0);
	}
}
