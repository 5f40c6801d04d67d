// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::model::ToolCategory;

/// Narrow `all` to the categories whose id equals `active`.
///
/// With no active category every entry is returned. Relative order is kept,
/// and an unknown id yields an empty list.
pub fn filter_categories<'a>(all: &'a [ToolCategory], active: Option<&str>) -> Vec<&'a ToolCategory> {
	match active {
		None => all.iter().collect(),
		Some(id) => all.iter().filter(|category| category.id == id).collect(),
	}
}

/// Treat an empty or blank `?category=` query value as no selection.
pub fn normalize_category_param(raw: Option<&str>) -> Option<&str> {
	raw.map(str::trim).filter(|s| !s.is_empty())
}
