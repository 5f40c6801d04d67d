// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales and their metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A locale the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Hi,
}

impl Locale {
	/// Locale used whenever an input cannot be matched.
	pub const DEFAULT: Locale = Locale::En;

	/// Every supported locale, in the order pages are generated.
	pub const ALL: [Locale; 2] = [Locale::En, Locale::Hi];

	/// Returns the locale whose code is exactly `code`.
	///
	/// Matching is case-sensitive and does not trim; `"EN"` and `" en"` are
	/// not locale codes.
	pub fn parse(code: &str) -> Option<Locale> {
		match code {
			"en" => Some(Locale::En),
			"hi" => Some(Locale::Hi),
			_ => None,
		}
	}

	pub fn code(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Hi => "hi",
		}
	}

	pub fn info(self) -> &'static LocaleInfo {
		match self {
			Locale::En => &LOCALES[0],
			Locale::Hi => &LOCALES[1],
		}
	}
}

impl Default for Locale {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// Text direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

/// Display metadata for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
	pub code: &'static str,
	pub name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
}

/// Metadata for every supported locale, indexed in [`Locale::ALL`] order.
pub static LOCALES: [LocaleInfo; 2] = [
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "hi",
		name: "Hindi",
		native_name: "हिन्दी",
		direction: Direction::Ltr,
	},
];

/// Returns true if `code` names a supported locale exactly.
pub fn is_supported(code: &str) -> bool {
	Locale::parse(code).is_some()
}

/// Returns metadata for every supported locale.
pub fn available_locales() -> &'static [LocaleInfo] {
	&LOCALES
}

/// Returns metadata for `code`, if supported.
pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	Locale::parse(code).map(Locale::info)
}

/// Returns true if `code` is a supported right-to-left locale.
pub fn is_rtl(code: &str) -> bool {
	locale_info(code).is_some_and(|info| info.direction == Direction::Rtl)
}
