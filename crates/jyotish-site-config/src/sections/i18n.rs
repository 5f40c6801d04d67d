// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization configuration.

use std::path::PathBuf;

use jyotish_common_i18n::Locale;
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_MESSAGES_DIR: &str = "messages";
pub const DEFAULT_NAMESPACE: &str = "tools";

/// Localization configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
	pub default_locale: Locale,
	pub messages_dir: PathBuf,
	pub namespace: String,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_locale: Locale::DEFAULT,
			messages_dir: PathBuf::from(DEFAULT_MESSAGES_DIR),
			namespace: DEFAULT_NAMESPACE.to_string(),
		}
	}
}

/// Localization configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub messages_dir: Option<PathBuf>,
	#[serde(default)]
	pub namespace: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: I18nConfigLayer) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.messages_dir.is_some() {
			self.messages_dir = other.messages_dir;
		}
		if other.namespace.is_some() {
			self.namespace = other.namespace;
		}
	}

	/// Resolve the layer, rejecting an unsupported default locale.
	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let default_locale = match self.default_locale {
			Some(code) => Locale::parse(&code).ok_or_else(|| {
				ConfigError::invalid_value(
					"i18n.default_locale",
					format!("unsupported locale '{code}'"),
				)
			})?,
			None => Locale::DEFAULT,
		};

		let namespace = self
			.namespace
			.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
		if namespace.trim().is_empty() {
			return Err(ConfigError::invalid_value(
				"i18n.namespace",
				"namespace must not be empty",
			));
		}

		Ok(I18nConfig {
			default_locale,
			messages_dir: self
				.messages_dir
				.unwrap_or_else(|| PathBuf::from(DEFAULT_MESSAGES_DIR)),
			namespace,
		})
	}
}
