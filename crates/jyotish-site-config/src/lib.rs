// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Jyotish tools directory.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`JYOTISH_*`)
//!
//! # Usage
//!
//! ```ignore
//! use jyotish_site_config::load_config;
//!
//! let config = load_config()?;
//! println!("default locale: {}", config.i18n.default_locale);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::SiteConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved site configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
	pub i18n: I18nConfig,
	pub catalog: CatalogConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`JYOTISH_*`)
/// 2. Config file (`/etc/jyotish/site.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<SiteConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<SiteConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge `sources` in precedence order and resolve the result.
pub fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<SiteConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = SiteConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: SiteConfigLayer) -> Result<SiteConfig, ConfigError> {
	let i18n = layer.i18n.unwrap_or_default().finalize()?;
	let catalog = layer.catalog.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	info!(
		default_locale = %i18n.default_locale,
		messages_dir = %i18n.messages_dir.display(),
		namespace = %i18n.namespace,
		builtin_catalog = catalog.path.is_none(),
		"Site configuration loaded"
	);

	Ok(SiteConfig {
		i18n,
		catalog,
		logging,
	})
}
