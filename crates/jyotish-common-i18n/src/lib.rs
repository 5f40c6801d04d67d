// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the Jyotish tools directory.
//!
//! This crate covers the two lookups every rendered page performs:
//!
//! - normalizing the locale segment of a request path into a supported
//!   [`Locale`], falling back to [`Locale::DEFAULT`] for anything else
//! - resolving localized tool strings from a nested message table, falling
//!   back to a caller-supplied default when a translation is absent or empty
//!
//! # Message Layout
//!
//! Messages are JSON documents, one per locale, keyed by namespace and then
//! by dot-separated path segments:
//!
//! ```json
//! { "tools": { "numerology": { "lucky-number": { "shortTitle": "भाग्यांक" } } } }
//! ```
//!
//! # Example
//!
//! ```
//! use jyotish_common_i18n::{get_tool_translation, validate_locale, Locale, TranslationTable};
//!
//! assert_eq!(validate_locale("fr"), Locale::En);
//! assert_eq!(validate_locale("hi"), Locale::Hi);
//!
//! let table = TranslationTable::empty();
//! let title = get_tool_translation(&table, "numerology", "lucky-number", "shortTitle", "Lucky Number");
//! assert_eq!(title, "Lucky Number");
//! ```

mod error;
mod locale;
mod resolve;
mod store;
mod table;
mod tools;

pub use error::I18nError;
pub use locale::{
	available_locales, is_rtl, is_supported, locale_info, Direction, Locale, LocaleInfo, LOCALES,
};
pub use resolve::{negotiate_locale, resolve_locale, validate_locale};
pub use store::MessageStore;
pub use table::{TranslationTable, Translations};
pub use tools::{get_category_translation, get_tool_translation, TOOL_FIELDS};
