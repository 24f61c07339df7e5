// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::catalog::TranslationTable;
use crate::empty::is_not_empty;

/// Stored value left behind when a preference was written from an unset
/// variable.
const UNDEFINED: &str = "undefined";

/// Whether `locale` can be served by `table`.
///
/// Empty strings and the literal `"undefined"` are never valid.
pub fn is_supported(table: &TranslationTable, locale: &str) -> bool {
	is_not_empty(locale) && locale != UNDEFINED && table.contains(locale)
}

/// Resolve the effective locale from a stored preference.
///
/// Resolution order (highest to lowest priority):
/// 1. The stored preference (if valid)
/// 2. The configured default locale
///
/// The second slot is `true` when the preference was unusable and the caller
/// should write the default back.
///
/// # Example
///
/// ```
/// use ov_common_i18n::{resolve_locale, TranslationTable};
///
/// let table = TranslationTable::builtin();
///
/// assert_eq!(resolve_locale(&table, Some("it"), "en"), ("it", false));
/// assert_eq!(resolve_locale(&table, Some("fr"), "en"), ("en", true));
/// assert_eq!(resolve_locale(&table, None, "en"), ("en", true));
/// ```
pub fn resolve_locale<'a>(
	table: &TranslationTable,
	stored: Option<&'a str>,
	default_locale: &'a str,
) -> (&'a str, bool) {
	match stored {
		Some(locale) if is_supported(table, locale) => (locale, false),
		_ => (default_locale, true),
	}
}
