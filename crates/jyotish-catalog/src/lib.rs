// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tool catalog for the Jyotish tools directory.
//!
//! The catalog is an ordered list of [`ToolCategory`] entries, each holding
//! its [`ToolRecord`]s. It is built once (see [`Catalog::builtin`]) or loaded
//! from a TOML file, and is never mutated afterwards.
//!
//! On top of the catalog this crate provides:
//! - [`filter_categories`]: narrow the catalog to an optional active category
//! - [`build_directory`]: the localized view a directory page renders
//! - [`coverage`]: which tool fields are translated for a locale

mod builtin;
mod catalog;
mod coverage;
mod directory;
mod error;
mod filter;
mod model;

pub use catalog::Catalog;
pub use coverage::{coverage, CoverageEntry, CoverageReport};
pub use directory::{build_directory, CategorySection, Directory, ToolCard};
pub use error::CatalogError;
pub use filter::{filter_categories, normalize_category_param};
pub use model::{LocalizedText, ToolCategory, ToolRecord};
