// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Metadata for the locales shipped with the viewer.
//!
//! The set of locales a [`TranslationTable`](crate::TranslationTable) can
//! serve is whatever it was built with; this list only describes the
//! built-in catalogs.

/// Metadata about a built-in locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// ISO 639-1 language code (e.g., "en", "it")
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
}

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: &str = "en";

/// Preference key the selected locale is stored under.
pub const LOCALE_PREFERENCE_KEY: &str = "ov_locale_id";

/// Locales with a catalog compiled into the crate.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
	},
	LocaleInfo {
		code: "it",
		name: "Italian",
		native_name: "Italiano",
	},
];

/// Get metadata for a built-in locale.
///
/// Returns `None` for locales loaded from disk or not known at all.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == locale)
}

/// Get all built-in locales.
pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}
