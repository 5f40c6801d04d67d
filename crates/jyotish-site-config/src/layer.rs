// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration as produced by a single source.

use serde::Deserialize;

use crate::sections::{CatalogConfigLayer, I18nConfigLayer, LoggingConfigLayer};

/// One source's view of the site configuration. Unset sections are `None`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SiteConfigLayer {
	#[serde(default)]
	pub i18n: Option<I18nConfigLayer>,
	#[serde(default)]
	pub catalog: Option<CatalogConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl SiteConfigLayer {
	/// Overlay `other` onto `self`; set fields in `other` win.
	pub fn merge(&mut self, other: SiteConfigLayer) {
		merge_section(&mut self.i18n, other.i18n, I18nConfigLayer::merge);
		merge_section(&mut self.catalog, other.catalog, CatalogConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(existing), Some(other)) => merge(existing, other),
		(None, Some(other)) => *base = Some(other),
		(_, None) => {}
	}
}
