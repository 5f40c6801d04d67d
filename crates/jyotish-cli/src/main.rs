// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Jyotish tools directory command-line host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod site;

/// Jyotish - localized directory of astrology and numerology tools.
#[derive(Parser, Debug)]
#[command(name = "jyotish", about = "Jyotish tools directory", version)]
struct Args {
	/// Site config file (defaults to /etc/jyotish/site.toml)
	#[arg(long, global = true, env = "JYOTISH_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the locale a path segment resolves to
	Locale {
		/// Raw locale segment, e.g. from `/hi/tools`
		input: String,
	},
	/// Pick a locale from an Accept-Language header value
	Negotiate {
		accept_language: String,
	},
	/// List supported locales
	Locales,
	/// Print the tools directory
	Tools {
		/// Locale segment; unsupported values use the site default
		#[arg(long)]
		locale: Option<String>,
		/// Only show this category
		#[arg(long)]
		category: Option<String>,
		/// Emit JSON instead of text
		#[arg(long)]
		json: bool,
	},
	/// Report which tool fields are translated for a locale
	CheckTranslations {
		#[arg(long)]
		locale: Option<String>,
		#[arg(long)]
		json: bool,
	},
}

fn main() -> Result<()> {
	let args = Args::parse();

	let config = match &args.config {
		Some(path) => jyotish_site_config::load_config_with_file(path.clone()),
		None => jyotish_site_config::load_config(),
	}
	.context("failed to load site configuration")?;

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let stdout = std::io::stdout();
	let mut out = stdout.lock();

	match args.command {
		Command::Locale { input } => commands::locale(&mut out, &input),
		Command::Negotiate { accept_language } => {
			commands::negotiate(&mut out, &accept_language, config.i18n.default_locale)
		}
		Command::Locales => commands::locales(&mut out),
		Command::Tools {
			locale,
			category,
			json,
		} => {
			let site = site::Site::load(&config)?;
			commands::tools(&mut out, &site, locale.as_deref(), category.as_deref(), json)
		}
		Command::CheckTranslations { locale, json } => {
			let site = site::Site::load(&config)?;
			commands::check_translations(&mut out, &site, locale.as_deref(), json)
		}
	}
}
