// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

/// Errors raised while loading message documents.
///
/// Lookups never fail; these only surface when a message file exists but
/// cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("failed to read messages from {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid message JSON in {origin}: {source}")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("message document root must be an object, found {0}")]
	NotAnObject(&'static str),
}

impl I18nError {
	pub fn parse(origin: impl Into<String>, source: serde_json::Error) -> Self {
		Self::Parse {
			origin: origin.into(),
			source,
		}
	}
}
