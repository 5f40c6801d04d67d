// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::Write;

use anyhow::Result;
use jyotish_catalog::{build_directory, coverage, Directory};
use jyotish_common_i18n::{available_locales, negotiate_locale, validate_locale, Locale};

use crate::site::Site;

pub fn locale(out: &mut impl Write, input: &str) -> Result<()> {
	writeln!(out, "{}", validate_locale(input))?;
	Ok(())
}

pub fn negotiate(out: &mut impl Write, accept_language: &str, fallback: Locale) -> Result<()> {
	writeln!(out, "{}", negotiate_locale(accept_language, fallback))?;
	Ok(())
}

pub fn locales(out: &mut impl Write) -> Result<()> {
	for info in available_locales() {
		writeln!(out, "{}\t{}\t{}", info.code, info.name, info.native_name)?;
	}
	Ok(())
}

pub fn tools(
	out: &mut impl Write,
	site: &Site,
	locale: Option<&str>,
	category: Option<&str>,
	json: bool,
) -> Result<()> {
	let locale = site.locale(locale);
	let translations = site.translations(locale)?;
	let directory = build_directory(&site.catalog, &translations, locale, category);

	if json {
		serde_json::to_writer_pretty(&mut *out, &directory)?;
		writeln!(out)?;
	} else {
		render_directory(out, &directory)?;
	}
	Ok(())
}

fn render_directory(out: &mut impl Write, directory: &Directory) -> Result<()> {
	if directory.sections.is_empty() {
		if let Some(category) = &directory.active_category {
			writeln!(out, "no tools in category '{category}'")?;
		}
		return Ok(());
	}

	for (i, section) in directory.sections.iter().enumerate() {
		if i > 0 {
			writeln!(out)?;
		}
		writeln!(out, "{} ({})", section.title, section.id)?;
		writeln!(out, "  {}", section.description)?;
		for tool in &section.tools {
			let badge = if tool.premium { " [premium]" } else { "" };
			writeln!(out, "  - {}{}: {}", tool.short_title, badge, tool.description)?;
		}
	}
	Ok(())
}

pub fn check_translations(
	out: &mut impl Write,
	site: &Site,
	locale: Option<&str>,
	json: bool,
) -> Result<()> {
	let locale = site.locale(locale);
	let translations = site.translations(locale)?;
	let report = coverage(&site.catalog, &translations);

	if json {
		serde_json::to_writer_pretty(&mut *out, &report)?;
		writeln!(out)?;
		return Ok(());
	}

	writeln!(
		out,
		"{locale}: {}/{} tool fields translated ({:.0}%)",
		report.translated_count(),
		report.entries.len(),
		report.ratio() * 100.0
	)?;
	for entry in report.missing() {
		writeln!(out, "  missing {}", entry.path)?;
	}
	Ok(())
}
