// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jyotish_common_i18n::Locale;
use serde::{Deserialize, Serialize};

/// Text carried by the catalog itself, with an optional Hindi rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
	pub en: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hi: Option<String>,
}

impl LocalizedText {
	pub fn new(en: impl Into<String>, hi: impl Into<String>) -> Self {
		Self {
			en: en.into(),
			hi: Some(hi.into()),
		}
	}

	pub fn english(en: impl Into<String>) -> Self {
		Self {
			en: en.into(),
			hi: None,
		}
	}

	/// Text for `locale`, using English when no non-empty rendering exists.
	pub fn get(&self, locale: Locale) -> &str {
		match locale {
			Locale::En => &self.en,
			Locale::Hi => self.hi.as_deref().filter(|s| !s.is_empty()).unwrap_or(&self.en),
		}
	}
}

/// A group of related calculators, e.g. numerology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
	pub id: String,
	pub translation_key: String,
	pub name: LocalizedText,
	pub description: LocalizedText,
	/// Presentation token, passed through to the renderer untouched.
	#[serde(default)]
	pub style: String,
	#[serde(default)]
	pub tools: Vec<ToolRecord>,
}

/// One calculator page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
	pub slug: String,
	pub translation_key: String,
	/// Presentation token, passed through to the renderer untouched.
	#[serde(default)]
	pub icon: String,
	#[serde(default)]
	pub premium: bool,
	pub title: String,
	pub short_title: String,
	pub description: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_localized_text_prefers_locale() {
		let text = LocalizedText::new("Numerology", "अंक ज्योतिष");
		assert_eq!(text.get(Locale::En), "Numerology");
		assert_eq!(text.get(Locale::Hi), "अंक ज्योतिष");
	}

	#[test]
	fn test_localized_text_falls_back_to_english() {
		assert_eq!(LocalizedText::english("Vastu").get(Locale::Hi), "Vastu");

		let blank = LocalizedText::new("Muhurat", "");
		assert_eq!(blank.get(Locale::Hi), "Muhurat");
	}
}
