// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The localized view rendered by the tools directory page.

use jyotish_common_i18n::{get_category_translation, get_tool_translation, Locale, Translations};
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::filter::{filter_categories, normalize_category_param};
use crate::model::{ToolCategory, ToolRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directory {
	pub locale: Locale,
	pub active_category: Option<String>,
	pub sections: Vec<CategorySection>,
}

impl Directory {
	pub fn tool_count(&self) -> usize {
		self.sections.iter().map(|s| s.tools.len()).sum()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection {
	pub id: String,
	pub title: String,
	pub description: String,
	pub style: String,
	pub tools: Vec<ToolCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCard {
	pub slug: String,
	pub short_title: String,
	pub description: String,
	pub icon: String,
	pub premium: bool,
}

/// Build the directory for `locale`, optionally narrowed to one category.
///
/// `translations` must already be scoped to the tools namespace. Category
/// text falls back to the catalog's own rendering for `locale`; tool text
/// falls back to the catalog's English defaults.
pub fn build_directory<T>(
	catalog: &Catalog,
	translations: &T,
	locale: Locale,
	active_category: Option<&str>,
) -> Directory
where
	T: Translations + ?Sized,
{
	let active = normalize_category_param(active_category);
	let sections: Vec<_> = filter_categories(&catalog.categories, active)
		.into_iter()
		.map(|category| section(category, translations, locale))
		.collect();

	debug!(
		%locale,
		active = active.unwrap_or("all"),
		sections = sections.len(),
		"built tools directory"
	);

	Directory {
		locale,
		active_category: active.map(str::to_string),
		sections,
	}
}

fn section<T>(category: &ToolCategory, translations: &T, locale: Locale) -> CategorySection
where
	T: Translations + ?Sized,
{
	let key = category.translation_key.as_str();
	CategorySection {
		id: category.id.clone(),
		title: get_category_translation(translations, key, "title", category.name.get(locale))
			.to_string(),
		description: get_category_translation(
			translations,
			key,
			"description",
			category.description.get(locale),
		)
		.to_string(),
		style: category.style.clone(),
		tools: category
			.tools
			.iter()
			.map(|tool| card(key, tool, translations))
			.collect(),
	}
}

fn card<T>(category_key: &str, tool: &ToolRecord, translations: &T) -> ToolCard
where
	T: Translations + ?Sized,
{
	let key = tool.translation_key.as_str();
	ToolCard {
		slug: tool.slug.clone(),
		short_title: get_tool_translation(translations, category_key, key, "shortTitle", &tool.short_title)
			.to_string(),
		description: get_tool_translation(translations, category_key, key, "description", &tool.description)
			.to_string(),
		icon: tool.icon.clone(),
		premium: tool.premium,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use jyotish_common_i18n::TranslationTable;
	use serde_json::json;

	fn hindi() -> TranslationTable {
		TranslationTable::from_value(json!({
			"astrology": {
				"title": "वैदिक ज्योतिष",
				"kundli": { "shortTitle": "कुंडली", "description": "अपनी जन्म कुंडली बनाएं।" },
				"lagna": { "shortTitle": "" }
			}
		}))
		.unwrap()
	}

	#[test]
	fn test_all_categories_without_filter() {
		let directory = build_directory(Catalog::builtin(), &TranslationTable::empty(), Locale::En, None);
		assert_eq!(directory.sections.len(), 4);
		assert_eq!(directory.active_category, None);
		let total: usize = Catalog::builtin().categories.iter().map(|c| c.tools.len()).sum();
		assert_eq!(directory.tool_count(), total);
	}

	#[test]
	fn test_english_uses_catalog_defaults() {
		let directory =
			build_directory(Catalog::builtin(), &TranslationTable::empty(), Locale::En, Some("numerology"));
		let section = &directory.sections[0];
		assert_eq!(section.title, "Numerology");
		assert_eq!(section.tools[0].short_title, "Lucky Number");
	}

	#[test]
	fn test_hindi_translations_override() {
		let table = hindi();
		let directory = build_directory(Catalog::builtin(), &table, Locale::Hi, Some("astrology"));
		assert_eq!(directory.active_category.as_deref(), Some("astrology"));

		let section = &directory.sections[0];
		assert_eq!(section.title, "वैदिक ज्योतिष");
		// No translated description: catalog's Hindi text.
		assert_eq!(section.description, "वैदिक ज्योतिष से जन्म कुंडली, नक्षत्र और योग।");

		let kundli = section.tools.iter().find(|t| t.slug == "kundli").unwrap();
		assert_eq!(kundli.short_title, "कुंडली");
		assert_eq!(kundli.description, "अपनी जन्म कुंडली बनाएं।");
	}

	#[test]
	fn test_empty_translation_falls_back_to_default() {
		let table = hindi();
		let directory = build_directory(Catalog::builtin(), &table, Locale::Hi, Some("astrology"));
		let lagna = directory.sections[0]
			.tools
			.iter()
			.find(|t| t.slug == "lagna-calculator")
			.unwrap();
		assert_eq!(lagna.short_title, "Lagna");
	}

	#[test]
	fn test_unknown_category_is_empty() {
		let directory =
			build_directory(Catalog::builtin(), &TranslationTable::empty(), Locale::En, Some("tarot"));
		assert!(directory.sections.is_empty());
		assert_eq!(directory.active_category.as_deref(), Some("tarot"));
	}

	#[test]
	fn test_blank_category_param_means_all() {
		let directory =
			build_directory(Catalog::builtin(), &TranslationTable::empty(), Locale::En, Some("  "));
		assert_eq!(directory.sections.len(), 4);
		assert_eq!(directory.active_category, None);
	}

	#[test]
	fn test_premium_flag_carried() {
		let directory =
			build_directory(Catalog::builtin(), &TranslationTable::empty(), Locale::En, Some("astrology"));
		let raj_yoga = directory.sections[0]
			.tools
			.iter()
			.find(|t| t.slug == "raj-yoga")
			.unwrap();
		assert!(raj_yoga.premium);
	}

	#[test]
	fn test_serializes_locale_code() {
		let directory =
			build_directory(Catalog::builtin(), &TranslationTable::empty(), Locale::Hi, Some("vastu"));
		let value = serde_json::to_value(&directory).unwrap();
		assert_eq!(value["locale"], "hi");
		assert_eq!(value["sections"][0]["id"], "vastu");
	}
}
