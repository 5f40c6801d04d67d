// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Nested translation tables.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::I18nError;

/// Read-only accessor over localized messages for one locale and namespace.
///
/// A lookup walks `path` one segment at a time. Absence at any level yields
/// `None`; so does a path that ends on something other than a string.
pub trait Translations {
	fn lookup(&self, path: &[&str]) -> Option<&str>;
}

/// Message tree parsed from a JSON document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
	root: Map<String, Value>,
}

impl TranslationTable {
	/// A table with no messages. Every lookup misses.
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn from_value(value: Value) -> Result<Self, I18nError> {
		match value {
			Value::Object(root) => Ok(Self { root }),
			other => Err(I18nError::NotAnObject(json_kind(&other))),
		}
	}

	pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
		let value: Value =
			serde_json::from_str(json).map_err(|e| I18nError::parse("<inline>", e))?;
		Self::from_value(value)
	}

	/// Narrow the table to the subtree under `namespace`.
	///
	/// A missing namespace, or one that is not an object, gives an empty table.
	pub fn scoped(&self, namespace: &str) -> TranslationTable {
		match self.root.get(namespace) {
			Some(Value::Object(subtree)) => TranslationTable {
				root: subtree.clone(),
			},
			_ => TranslationTable::empty(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.root.is_empty()
	}
}

impl Translations for TranslationTable {
	fn lookup(&self, path: &[&str]) -> Option<&str> {
		let (last, parents) = path.split_last()?;
		let mut node = &self.root;
		for segment in parents {
			node = node.get(*segment)?.as_object()?;
		}
		node.get(*last)?.as_str()
	}
}

/// Flat tables keyed by the dot-joined path, e.g. `numerology.lucky-number.shortTitle`.
impl Translations for BTreeMap<String, String> {
	fn lookup(&self, path: &[&str]) -> Option<&str> {
		if path.is_empty() {
			return None;
		}
		self.get(&path.join(".")).map(String::as_str)
	}
}

impl<T: Translations + ?Sized> Translations for &T {
	fn lookup(&self, path: &[&str]) -> Option<&str> {
		(**self).lookup(path)
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
