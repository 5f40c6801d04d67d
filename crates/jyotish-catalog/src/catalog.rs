// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::builtin;
use crate::error::CatalogError;
use crate::model::{ToolCategory, ToolRecord};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
	categories: builtin::categories(),
});

/// Ordered, immutable set of tool categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
	pub categories: Vec<ToolCategory>,
}

impl Catalog {
	/// The catalog compiled into the binary, built on first use.
	pub fn builtin() -> &'static Catalog {
		&BUILTIN
	}

	pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
		Self::parse(content, "<inline>")
	}

	/// Load and validate a catalog file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let path = path.as_ref();
		debug!(path = %path.display(), "loading catalog file");
		let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let catalog = Self::parse(&content, &path.display().to_string())?;
		info!(
			path = %path.display(),
			categories = catalog.categories.len(),
			tools = catalog.tools().count(),
			"catalog loaded"
		);
		Ok(catalog)
	}

	fn parse(content: &str, origin: &str) -> Result<Self, CatalogError> {
		let catalog: Catalog =
			toml::from_str(content).map_err(|source| CatalogError::TomlParse {
				origin: origin.to_string(),
				source,
			})?;
		catalog.validate()?;
		Ok(catalog)
	}

	/// Check identifier uniqueness and that every translation key is set.
	pub fn validate(&self) -> Result<(), CatalogError> {
		if self.categories.is_empty() {
			return Err(CatalogError::NoCategories);
		}

		let mut ids = HashSet::new();
		let mut slugs = HashSet::new();
		for category in &self.categories {
			if !ids.insert(category.id.as_str()) {
				return Err(CatalogError::DuplicateCategory(category.id.clone()));
			}
			if category.translation_key.is_empty() {
				return Err(CatalogError::EmptyTranslationKey(format!(
					"category '{}'",
					category.id
				)));
			}
			for tool in &category.tools {
				if !slugs.insert(tool.slug.as_str()) {
					return Err(CatalogError::DuplicateSlug(tool.slug.clone()));
				}
				if tool.translation_key.is_empty() {
					return Err(CatalogError::EmptyTranslationKey(format!(
						"tool '{}'",
						tool.slug
					)));
				}
			}
		}
		Ok(())
	}

	pub fn category(&self, id: &str) -> Option<&ToolCategory> {
		self.categories.iter().find(|c| c.id == id)
	}

	/// Every tool with its owning category, in catalog order.
	pub fn tools(&self) -> impl Iterator<Item = (&ToolCategory, &ToolRecord)> {
		self.categories
			.iter()
			.flat_map(|category| category.tools.iter().map(move |tool| (category, tool)))
	}

	pub fn find_tool(&self, slug: &str) -> Option<(&ToolCategory, &ToolRecord)> {
		self.tools().find(|(_, tool)| tool.slug == slug)
	}

	pub fn premium_tools(&self) -> impl Iterator<Item = &ToolRecord> {
		self.tools().map(|(_, tool)| tool).filter(|tool| tool.premium)
	}
}
