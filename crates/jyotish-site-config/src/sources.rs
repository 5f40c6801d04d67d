// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files and environment variables.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::SiteConfigLayer;
use crate::sections::{CatalogConfigLayer, I18nConfigLayer, LoggingConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<SiteConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(SiteConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file contributes nothing.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/jyotish/site.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(SiteConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: SiteConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: JYOTISH_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(layer_from_vars(|name| std::env::var(name).ok()))
	}
}

fn layer_from_vars(get: impl Fn(&str) -> Option<String>) -> SiteConfigLayer {
	let var = |name: &str| get(name).filter(|s| !s.is_empty());

	SiteConfigLayer {
		i18n: Some(I18nConfigLayer {
			default_locale: var("JYOTISH_DEFAULT_LOCALE"),
			messages_dir: var("JYOTISH_MESSAGES_DIR").map(PathBuf::from),
			namespace: var("JYOTISH_I18N_NAMESPACE"),
		}),
		catalog: Some(CatalogConfigLayer {
			path: var("JYOTISH_CATALOG_PATH").map(PathBuf::from),
		}),
		logging: Some(LoggingConfigLayer {
			level: var("JYOTISH_LOG_LEVEL"),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name: &str| map.get(name).cloned()
	}

	#[test]
	fn test_precedence_order() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn test_env_layer_reads_all_fields() {
		let layer = layer_from_vars(vars(&[
			("JYOTISH_DEFAULT_LOCALE", "hi"),
			("JYOTISH_MESSAGES_DIR", "/srv/messages"),
			("JYOTISH_I18N_NAMESPACE", "calculators"),
			("JYOTISH_CATALOG_PATH", "/srv/catalog.toml"),
			("JYOTISH_LOG_LEVEL", "debug"),
		]));

		let i18n = layer.i18n.unwrap();
		assert_eq!(i18n.default_locale.as_deref(), Some("hi"));
		assert_eq!(i18n.messages_dir, Some(PathBuf::from("/srv/messages")));
		assert_eq!(i18n.namespace.as_deref(), Some("calculators"));
		assert_eq!(
			layer.catalog.unwrap().path,
			Some(PathBuf::from("/srv/catalog.toml"))
		);
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));
	}

	#[test]
	fn test_env_empty_values_ignored() {
		let layer = layer_from_vars(vars(&[("JYOTISH_DEFAULT_LOCALE", "")]));
		assert!(layer.i18n.unwrap().default_locale.is_none());
	}

	#[test]
	fn test_toml_source_missing_file() {
		let layer = TomlSource::new("/nonexistent/site.toml").load().unwrap();
		assert_eq!(layer, SiteConfigLayer::default());
	}

	#[test]
	fn test_toml_source_parses_sections() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
[i18n]
default_locale = "hi"

[catalog]
path = "/srv/catalog.toml"
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(
			layer.i18n.unwrap().default_locale.as_deref(),
			Some("hi")
		);
		assert!(layer.logging.is_none());
	}

	#[test]
	fn test_toml_source_parse_error() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "[i18n\ndefault_locale = ").unwrap();
		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}
}
