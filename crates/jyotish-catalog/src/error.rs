// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog loading and validation errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("failed to read catalog {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML parse error in catalog {origin}: {source}")]
	TomlParse {
		origin: String,
		#[source]
		source: toml::de::Error,
	},

	#[error("duplicate category id '{0}'")]
	DuplicateCategory(String),

	#[error("duplicate tool slug '{0}'")]
	DuplicateSlug(String),

	#[error("empty translation key on {0}")]
	EmptyTranslationKey(String),

	#[error("catalog defines no categories")]
	NoCategories,
}
