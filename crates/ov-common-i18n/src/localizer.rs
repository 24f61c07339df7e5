// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Preference-aware localization.
//!
//! [`Localizer`] is what presentation code holds: it reads the user's locale
//! from the injected [`PreferenceStore`] on every call. [`Locale`] pins an
//! explicit locale for components that should not follow the preference.

use std::fmt;
use std::sync::Arc;

use crate::catalog::TranslationTable;
use crate::config::I18nConfig;
use crate::empty::is_not_empty;
use crate::encoded::encode_escape_params;
use crate::error::Result;
use crate::resolve::resolve_locale;
use crate::store::{FileStore, MemoryStore, PreferenceStore};
use crate::translate::{decode_string_and_translate, localize_with};

/// Translates message ids using the locale stored in a preference store.
#[derive(Clone)]
pub struct Localizer {
	table: Arc<TranslationTable>,
	store: Arc<dyn PreferenceStore>,
	default_locale: String,
	preference_key: String,
}

impl fmt::Debug for Localizer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Localizer")
			.field("locales", &self.table.locales())
			.field("default_locale", &self.default_locale)
			.field("preference_key", &self.preference_key)
			.finish_non_exhaustive()
	}
}

impl Localizer {
	/// Build a localizer over `table`, reading preferences from `store`.
	///
	/// Fails when the configured default locale is not in the table.
	pub fn new(
		table: Arc<TranslationTable>,
		store: Arc<dyn PreferenceStore>,
		config: &I18nConfig,
	) -> Result<Self> {
		config.validate(&table)?;
		Ok(Self {
			table,
			store,
			default_locale: config.default_locale.clone(),
			preference_key: config.preference_key.clone(),
		})
	}

	/// Build the table and store described by `config`.
	pub fn from_config(config: &I18nConfig) -> Result<Self> {
		let table = config.load_table()?;
		let store: Arc<dyn PreferenceStore> = match &config.preference_file {
			Some(path) => Arc::new(FileStore::open_or_empty(path)),
			None => Arc::new(MemoryStore::new()),
		};
		Self::new(table, store, config)
	}

	pub fn table(&self) -> &Arc<TranslationTable> {
		&self.table
	}

	pub fn default_locale(&self) -> &str {
		&self.default_locale
	}

	/// Normalize `locale` against the table without touching the store.
	pub fn normalize(&self, locale: &str) -> String {
		resolve_locale(&self.table, Some(locale), &self.default_locale)
			.0
			.to_string()
	}

	/// The stored locale, reset to the default (and written back) when it is
	/// missing, `"undefined"` or not in the table.
	pub fn current_locale(&self) -> String {
		let stored = self.store.get(&self.preference_key, "");
		let (locale, reset) =
			resolve_locale(&self.table, Some(stored.as_str()), &self.default_locale);
		if reset {
			tracing::debug!(stored = %stored, locale, "resetting locale preference");
			self.store.set(&self.preference_key, locale);
		}
		locale.to_string()
	}

	/// Store a new locale preference. Invalid codes store the default.
	///
	/// Returns the code actually stored.
	pub fn set_locale(&self, locale: &str) -> String {
		let locale = self.normalize(locale);
		self.store.set(&self.preference_key, &locale);
		locale
	}

	/// Translate `message_id` for the current locale.
	///
	/// Without parameters the template is returned as stored. With parameters
	/// the id and values go through the encoded message round trip so values
	/// are decoded and escaped exactly as if they had arrived encoded. Falls
	/// back to `default` and then to `message_id`.
	pub fn localize(
		&self,
		message_id: &str,
		default: Option<&str>,
		params: &[(&str, &str)],
	) -> String {
		let locale = self.current_locale();

		let translated = if params.is_empty() {
			self.table.lookup(&locale, message_id).map(str::to_string)
		} else {
			let encoded = encode_escape_params(message_id, params);
			let translation = decode_string_and_translate(&self.table, &locale, &encoded, default);
			Some(translation.translated_str)
		};

		match translated {
			Some(tr) if is_not_empty(tr.as_str()) => tr,
			_ => match default {
				Some(d) if is_not_empty(d) => d.to_string(),
				_ => message_id.to_string(),
			},
		}
	}

	/// An explicit locale context starting at the current preference.
	pub fn locale(&self) -> Locale {
		Locale {
			locale: self.current_locale(),
			localizer: self.clone(),
		}
	}
}

/// Explicit, non-global locale context.
#[derive(Debug, Clone)]
pub struct Locale {
	localizer: Localizer,
	locale: String,
}

impl Locale {
	/// A context for `locale`, normalized against the table. Unlike
	/// [`Locale::set_locale`] this does not write the preference.
	pub fn new(localizer: Localizer, locale: &str) -> Self {
		let locale = localizer.normalize(locale);
		Self { localizer, locale }
	}

	/// Switch to `locale` (the default locale when invalid) and persist it.
	pub fn set_locale(&mut self, locale: &str) {
		self.locale = self.localizer.set_locale(locale);
	}

	pub fn get_locale(&self) -> &str {
		&self.locale
	}

	/// Translate `message_id` in this context's locale.
	pub fn localize(
		&self,
		message_id: &str,
		default: Option<&str>,
		params: &[(&str, &str)],
	) -> String {
		let table = &self.localizer.table;
		if is_not_empty(params) {
			let encoded = encode_escape_params(message_id, params);
			let translation = decode_string_and_translate(table, &self.locale, &encoded, default);
			return translation.translated_str;
		}
		localize_with(table, &self.locale, message_id, default, params)
	}
}
