// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tool catalog source.

use std::path::PathBuf;

use serde::Deserialize;

/// Catalog configuration (runtime, fully resolved).
///
/// With no `path` the built-in catalog is used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogConfig {
	pub path: Option<PathBuf>,
}

/// Catalog configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogConfigLayer {
	#[serde(default)]
	pub path: Option<PathBuf>,
}

impl CatalogConfigLayer {
	pub fn merge(&mut self, other: CatalogConfigLayer) {
		if other.path.is_some() {
			self.path = other.path;
		}
	}

	pub fn finalize(self) -> CatalogConfig {
		CatalogConfig { path: self.path }
	}
}
