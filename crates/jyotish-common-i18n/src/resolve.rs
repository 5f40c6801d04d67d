// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use tracing::trace;

use crate::locale::Locale;

/// Normalize an untrusted locale string (usually a URL path segment).
///
/// Returns the matching [`Locale`] when `input` is exactly a supported code,
/// and [`Locale::DEFAULT`] for everything else, including the empty string,
/// differently-cased codes and unknown codes.
///
/// # Example
///
/// ```
/// use jyotish_common_i18n::{validate_locale, Locale};
///
/// assert_eq!(validate_locale("hi"), Locale::Hi);
/// assert_eq!(validate_locale("fr"), Locale::En);
/// assert_eq!(validate_locale("HI"), Locale::En);
/// ```
pub fn validate_locale(input: &str) -> Locale {
	match Locale::parse(input) {
		Some(locale) => locale,
		None => {
			trace!(input, default = %Locale::DEFAULT, "unsupported locale, using default");
			Locale::DEFAULT
		}
	}
}

/// Resolve the effective locale from a visitor preference and the site default.
///
/// Resolution order (highest to lowest priority):
/// 1. Visitor preference (if valid)
/// 2. Site default from configuration (if valid)
/// 3. [`Locale::DEFAULT`]
///
/// # Example
///
/// ```
/// use jyotish_common_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("hi"), "en"), Locale::Hi);
/// assert_eq!(resolve_locale(None, "hi"), Locale::Hi);
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), Locale::En);
/// ```
pub fn resolve_locale(preferred: Option<&str>, site_default: &str) -> Locale {
	preferred
		.and_then(Locale::parse)
		.or_else(|| Locale::parse(site_default))
		.unwrap_or(Locale::DEFAULT)
}

/// Pick a locale from an `Accept-Language` header value.
///
/// Entries are compared by their `q` weight; ties keep header order. Only the
/// primary language subtag is matched (`hi-IN` selects `hi`), case-insensitively.
/// Malformed entries and entries with `q=0` are skipped. Returns `fallback`
/// when nothing matches.
pub fn negotiate_locale(accept_language: &str, fallback: Locale) -> Locale {
	let mut best: Option<(Locale, f32)> = None;

	for entry in accept_language.split(',') {
		let mut parts = entry.split(';');
		let tag = parts.next().unwrap_or_default().trim();
		if tag.is_empty() {
			continue;
		}

		let mut weight = 1.0_f32;
		let mut malformed = false;
		for param in parts {
			if let Some(value) = param.trim().strip_prefix("q=") {
				match value.trim().parse::<f32>() {
					Ok(q) if (0.0..=1.0).contains(&q) => weight = q,
					_ => malformed = true,
				}
			}
		}
		if malformed || weight == 0.0 {
			continue;
		}

		let primary = tag.split('-').next().unwrap_or_default().to_ascii_lowercase();
		let Some(locale) = Locale::parse(&primary) else {
			continue;
		};

		match best {
			Some((_, current)) if weight <= current => {}
			_ => best = Some((locale, weight)),
		}
	}

	best.map_or(fallback, |(locale, _)| locale)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_validate_supported_codes() {
		assert_eq!(validate_locale("en"), Locale::En);
		assert_eq!(validate_locale("hi"), Locale::Hi);
	}

	#[test]
	fn test_validate_unknown_code_uses_default() {
		assert_eq!(validate_locale("fr"), Locale::En);
		assert_eq!(validate_locale("xx"), Locale::En);
	}

	#[test]
	fn test_validate_empty_string_uses_default() {
		assert_eq!(validate_locale(""), Locale::En);
	}

	#[test]
	fn test_validate_is_case_sensitive() {
		assert_eq!(validate_locale("HI"), Locale::En);
		assert_eq!(validate_locale("Hi"), Locale::En);
	}

	#[test]
	fn test_user_preference_takes_priority() {
		assert_eq!(resolve_locale(Some("hi"), "en"), Locale::Hi);
		assert_eq!(resolve_locale(Some("en"), "hi"), Locale::En);
	}

	#[test]
	fn test_site_default_when_no_preference() {
		assert_eq!(resolve_locale(None, "hi"), Locale::Hi);
	}

	#[test]
	fn test_site_default_when_preference_invalid() {
		assert_eq!(resolve_locale(Some("fr"), "hi"), Locale::Hi);
		assert_eq!(resolve_locale(Some(""), "hi"), Locale::Hi);
	}

	#[test]
	fn test_fallback_when_both_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), Locale::En);
		assert_eq!(resolve_locale(None, ""), Locale::En);
	}

	#[test]
	fn test_negotiate_prefers_highest_weight() {
		assert_eq!(negotiate_locale("en;q=0.5, hi;q=0.9", Locale::En), Locale::Hi);
		assert_eq!(negotiate_locale("hi;q=0.4, en", Locale::Hi), Locale::En);
	}

	#[test]
	fn test_negotiate_matches_primary_subtag() {
		assert_eq!(negotiate_locale("hi-IN,en-US;q=0.8", Locale::En), Locale::Hi);
		assert_eq!(negotiate_locale("HI-in", Locale::En), Locale::Hi);
	}

	#[test]
	fn test_negotiate_ties_keep_header_order() {
		assert_eq!(negotiate_locale("hi, en", Locale::En), Locale::Hi);
		assert_eq!(negotiate_locale("en, hi", Locale::Hi), Locale::En);
	}

	#[test]
	fn test_negotiate_skips_unsupported_and_malformed() {
		assert_eq!(negotiate_locale("fr, de;q=0.9", Locale::Hi), Locale::Hi);
		assert_eq!(negotiate_locale("hi;q=abc, en;q=0.1", Locale::Hi), Locale::En);
		assert_eq!(negotiate_locale("hi;q=0", Locale::En), Locale::En);
		assert_eq!(negotiate_locale("", Locale::Hi), Locale::Hi);
		assert_eq!(negotiate_locale(",,;", Locale::En), Locale::En);
	}

	proptest! {
		/// Every input normalizes to a supported locale.
		#[test]
		fn validate_is_total(input in ".*") {
			let locale = validate_locale(&input);
			prop_assert!(Locale::ALL.contains(&locale));
		}

		/// Anything that is not exactly a supported code maps to the default.
		#[test]
		fn validate_unknown_maps_to_default(input in "[a-zA-Z-]{0,8}") {
			prop_assume!(input != "en" && input != "hi");
			prop_assert_eq!(validate_locale(&input), Locale::DEFAULT);
		}

		/// Resolution never produces an unsupported locale.
		#[test]
		fn resolve_is_total(preferred in proptest::option::of(".*"), site_default in ".*") {
			let locale = resolve_locale(preferred.as_deref(), &site_default);
			prop_assert!(Locale::ALL.contains(&locale));
		}

		/// Negotiation never panics on arbitrary header values.
		#[test]
		fn negotiate_is_total(header in ".*") {
			let locale = negotiate_locale(&header, Locale::DEFAULT);
			prop_assert!(Locale::ALL.contains(&locale));
		}
	}

	#[test]
	fn test_validate_is_identity_on_supported() {
		for locale in Locale::ALL {
			assert_eq!(validate_locale(locale.code()), locale);
		}
	}
}
