// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message documents on disk, one JSON file per locale.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::I18nError;
use crate::locale::Locale;
use crate::table::TranslationTable;

/// Loads `<dir>/<locale>.json` and scopes it to one namespace.
#[derive(Debug, Clone)]
pub struct MessageStore {
	dir: PathBuf,
	namespace: String,
}

impl MessageStore {
	pub fn new(dir: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
		Self {
			dir: dir.into(),
			namespace: namespace.into(),
		}
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	pub fn path_for(&self, locale: Locale) -> PathBuf {
		self.dir.join(format!("{}.json", locale.code()))
	}

	/// Load the namespaced table for `locale`.
	///
	/// A missing file is not an error; it yields an empty table so every
	/// lookup falls back.
	#[instrument(skip(self), fields(namespace = %self.namespace))]
	pub fn load(&self, locale: Locale) -> Result<TranslationTable, I18nError> {
		let path = self.path_for(locale);
		if !path.exists() {
			debug!(path = %path.display(), "message file not found, using empty table");
			return Ok(TranslationTable::empty());
		}

		let content = std::fs::read_to_string(&path).map_err(|source| I18nError::Read {
			path: path.clone(),
			source,
		})?;
		let value: serde_json::Value = serde_json::from_str(&content)
			.map_err(|e| I18nError::parse(path.display().to_string(), e))?;
		let table = TranslationTable::from_value(value)?.scoped(&self.namespace);

		debug!(path = %path.display(), empty = table.is_empty(), "loaded messages");
		Ok(table)
	}

	/// Load tables for every supported locale.
	pub fn load_all(&self) -> Result<BTreeMap<Locale, TranslationTable>, I18nError> {
		Locale::ALL
			.into_iter()
			.map(|locale| self.load(locale).map(|table| (locale, table)))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::table::Translations;
	use tempfile::TempDir;

	fn write(dir: &TempDir, name: &str, content: &str) {
		std::fs::write(dir.path().join(name), content).unwrap();
	}

	#[test]
	fn test_load_scopes_namespace() {
		let dir = TempDir::new().unwrap();
		write(
			&dir,
			"hi.json",
			r#"{ "tools": { "astrology": { "kundli": { "shortTitle": "कुंडली" } } }, "blog": {} }"#,
		);

		let store = MessageStore::new(dir.path(), "tools");
		let table = store.load(Locale::Hi).unwrap();
		assert_eq!(table.lookup(&["astrology", "kundli", "shortTitle"]), Some("कुंडली"));
	}

	#[test]
	fn test_missing_file_is_empty_table() {
		let dir = TempDir::new().unwrap();
		let store = MessageStore::new(dir.path(), "tools");
		assert!(store.load(Locale::Hi).unwrap().is_empty());
	}

	#[test]
	fn test_missing_namespace_is_empty_table() {
		let dir = TempDir::new().unwrap();
		write(&dir, "en.json", r#"{ "blog": { "title": "Blog" } }"#);
		let store = MessageStore::new(dir.path(), "tools");
		assert!(store.load(Locale::En).unwrap().is_empty());
	}

	#[test]
	fn test_invalid_json_is_error() {
		let dir = TempDir::new().unwrap();
		write(&dir, "en.json", "{ not json");
		let store = MessageStore::new(dir.path(), "tools");
		let err = store.load(Locale::En).unwrap_err();
		assert!(matches!(err, I18nError::Parse { .. }));
		assert!(err.to_string().contains("en.json"));
	}

	#[test]
	fn test_load_all_covers_every_locale() {
		let dir = TempDir::new().unwrap();
		write(&dir, "en.json", r#"{ "tools": { "x": "y" } }"#);
		let store = MessageStore::new(dir.path(), "tools");
		let tables = store.load_all().unwrap();
		assert_eq!(tables.len(), Locale::ALL.len());
		assert!(!tables[&Locale::En].is_empty());
		assert!(tables[&Locale::Hi].is_empty());
	}
}
