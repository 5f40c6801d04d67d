// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod catalog;
mod i18n;
mod logging;

pub use catalog::{CatalogConfig, CatalogConfigLayer};
pub use i18n::{I18nConfig, I18nConfigLayer, DEFAULT_MESSAGES_DIR, DEFAULT_NAMESPACE};
pub use logging::{LoggingConfig, LoggingConfigLayer};
