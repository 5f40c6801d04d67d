// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::borrow::Cow;

use anyhow::{Context, Result};
use jyotish_catalog::Catalog;
use jyotish_common_i18n::{resolve_locale, Locale, MessageStore, TranslationTable};
use jyotish_site_config::SiteConfig;
use tracing::debug;

/// Catalog and message store resolved from configuration.
pub struct Site {
	pub catalog: Cow<'static, Catalog>,
	pub messages: MessageStore,
	pub default_locale: Locale,
}

impl Site {
	pub fn load(config: &SiteConfig) -> Result<Self> {
		let catalog = match &config.catalog.path {
			Some(path) => Cow::Owned(
				Catalog::load(path)
					.with_context(|| format!("failed to load catalog {}", path.display()))?,
			),
			None => {
				debug!("using built-in catalog");
				Cow::Borrowed(Catalog::builtin())
			}
		};

		Ok(Self {
			catalog,
			messages: MessageStore::new(&config.i18n.messages_dir, config.i18n.namespace.clone()),
			default_locale: config.i18n.default_locale,
		})
	}

	/// Resolve a requested locale segment against the site default.
	pub fn locale(&self, requested: Option<&str>) -> Locale {
		resolve_locale(requested, self.default_locale.code())
	}

	pub fn translations(&self, locale: Locale) -> Result<TranslationTable> {
		self.messages
			.load(locale)
			.with_context(|| format!("failed to load {locale} messages"))
	}
}
