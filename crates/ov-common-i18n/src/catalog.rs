// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation tables: locale code to message-id to template.
//!
//! A table is built once and never mutated afterwards. Consumers share it
//! through an [`Arc`]. The table performs no locale fallback of its own;
//! callers normalize to a locale it contains before looking anything up.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{I18nError, Result};

/// Message-id to template string for a single locale.
pub type Dictionary = HashMap<String, String>;

const EN_JSON: &str = include_str!("../locales/en.json");
const IT_JSON: &str = include_str!("../locales/it.json");

static BUILTIN: Lazy<Arc<TranslationTable>> = Lazy::new(|| {
	let mut locales = HashMap::new();

	match serde_json::from_str::<Dictionary>(EN_JSON) {
		Ok(dict) => {
			locales.insert("en".to_string(), dict);
		}
		Err(e) => tracing::error!(error = %e, "Failed to parse English translation catalog"),
	}

	match serde_json::from_str::<Dictionary>(IT_JSON) {
		Ok(dict) => {
			locales.insert("it".to_string(), dict);
		}
		Err(e) => tracing::warn!(error = %e, "Failed to parse Italian translation catalog"),
	}

	Arc::new(TranslationTable { locales })
});

/// Immutable mapping from locale code to its message dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
	locales: HashMap<String, Dictionary>,
}

impl TranslationTable {
	/// Start building a table from scratch.
	pub fn builder() -> TranslationTableBuilder {
		TranslationTableBuilder::default()
	}

	/// The English and Italian catalogs compiled into the crate.
	///
	/// Parsed on first use and shared afterwards.
	pub fn builtin() -> Arc<TranslationTable> {
		Arc::clone(&BUILTIN)
	}

	/// Load every `<code>.json` file in `dir` as the dictionary for `<code>`.
	///
	/// Files with other extensions are ignored.
	pub fn from_json_dir(dir: impl AsRef<Path>) -> Result<Self> {
		let dir = dir.as_ref();
		let mut builder = Self::builder();

		for entry in std::fs::read_dir(dir)? {
			let path = entry?.path();
			if path.extension().and_then(|e| e.to_str()) != Some("json") {
				continue;
			}
			let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
				continue;
			};

			let contents = std::fs::read_to_string(&path)?;
			let dict: Dictionary =
				serde_json::from_str(&contents).map_err(|source| I18nError::JsonParse {
					path: path.clone(),
					source,
				})?;
			tracing::debug!(
				locale = code,
				messages = dict.len(),
				path = %path.display(),
				"loaded catalog"
			);
			builder = builder.locale(code, dict);
		}

		builder.build()
	}

	/// Dictionary for `locale`, if the table has one.
	pub fn get(&self, locale: &str) -> Option<&Dictionary> {
		self.locales.get(locale)
	}

	/// Template for `message_id` in `locale`.
	pub fn lookup(&self, locale: &str, message_id: &str) -> Option<&str> {
		self.get(locale)?.get(message_id).map(String::as_str)
	}

	/// Whether the table has a dictionary for `locale`.
	pub fn contains(&self, locale: &str) -> bool {
		self.locales.contains_key(locale)
	}

	/// Supported locale codes, sorted.
	pub fn locales(&self) -> Vec<&str> {
		let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
		codes.sort_unstable();
		codes
	}
}

/// Builder for [`TranslationTable`].
#[derive(Debug, Default)]
pub struct TranslationTableBuilder {
	locales: HashMap<String, Dictionary>,
}

impl TranslationTableBuilder {
	/// Register the dictionary for `code`, replacing any earlier one.
	pub fn locale<K, V>(
		mut self,
		code: impl Into<String>,
		entries: impl IntoIterator<Item = (K, V)>,
	) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		let dict = entries
			.into_iter()
			.map(|(k, v)| (k.into(), v.into()))
			.collect();
		self.locales.insert(code.into(), dict);
		self
	}

	/// Register the dictionary for `code` from a JSON object.
	pub fn json(self, code: impl Into<String>, json: &str) -> Result<Self> {
		let code = code.into();
		let dict: Dictionary = serde_json::from_str(json).map_err(|source| I18nError::JsonParse {
			path: format!("<{code}>").into(),
			source,
		})?;
		Ok(self.locale(code, dict))
	}

	/// Finish the table. Fails when no locale was registered or a locale has
	/// no messages.
	pub fn build(self) -> Result<TranslationTable> {
		if self.locales.is_empty() {
			return Err(I18nError::EmptyCatalog);
		}
		if let Some((code, _)) = self.locales.iter().find(|(_, dict)| dict.is_empty()) {
			return Err(I18nError::EmptyDictionary(code.clone()));
		}
		Ok(TranslationTable {
			locales: self.locales,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locale::LOCALES;

	#[test]
	fn test_builtin_has_all_locales() {
		let table = TranslationTable::builtin();
		assert_eq!(table.locales(), vec!["en", "it"]);
		for info in LOCALES {
			assert!(table.contains(info.code));
		}
	}

	#[test]
	fn test_builtin_lookup() {
		let table = TranslationTable::builtin();
		assert_eq!(table.lookup("en", "cancel"), Some("Cancel"));
		assert_eq!(table.lookup("it", "cancel"), Some("Annulla"));
		assert_eq!(table.lookup("it", "nonexistent"), None);
		assert_eq!(table.lookup("fr", "cancel"), None);
	}

	#[test]
	fn test_builtin_catalogs_share_keys() {
		let table = TranslationTable::builtin();
		let en = table.get("en").unwrap();
		let it = table.get("it").unwrap();
		assert_eq!(en.len(), it.len());
		for key in en.keys() {
			assert!(it.contains_key(key), "missing Italian translation for {key}");
		}
	}

	#[test]
	fn test_builder_rejects_empty_table() {
		assert!(matches!(
			TranslationTable::builder().build(),
			Err(I18nError::EmptyCatalog)
		));
	}

	#[test]
	fn test_builder_rejects_empty_dictionary() {
		let result = TranslationTable::builder()
			.locale("en", [("a", "A")])
			.locale("de", Vec::<(String, String)>::new())
			.build();
		assert!(matches!(result, Err(I18nError::EmptyDictionary(code)) if code == "de"));
	}

	#[test]
	fn test_builder_json() {
		let table = TranslationTable::builder()
			.json("en", r#"{"greet": "Hello {$name}"}"#)
			.unwrap()
			.build()
			.unwrap();
		assert_eq!(table.lookup("en", "greet"), Some("Hello {$name}"));
	}

	#[test]
	fn test_builder_json_invalid() {
		let result = TranslationTable::builder().json("en", "[1, 2]");
		assert!(matches!(result, Err(I18nError::JsonParse { .. })));
	}

	#[test]
	fn test_from_json_dir() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("en.json"), r#"{"hello": "Hello"}"#).unwrap();
		std::fs::write(dir.path().join("de.json"), r#"{"hello": "Hallo"}"#).unwrap();
		std::fs::write(dir.path().join("README.md"), "ignored").unwrap();

		let table = TranslationTable::from_json_dir(dir.path()).unwrap();
		assert_eq!(table.locales(), vec!["de", "en"]);
		assert_eq!(table.lookup("de", "hello"), Some("Hallo"));
	}

	#[test]
	fn test_from_json_dir_reports_bad_file() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("en.json"), "{ not json").unwrap();

		let err = TranslationTable::from_json_dir(dir.path()).unwrap_err();
		assert!(matches!(err, I18nError::JsonParse { path, .. } if path.ends_with("en.json")));
	}

	#[test]
	fn test_from_json_dir_empty() {
		let dir = tempfile::tempdir().unwrap();
		assert!(matches!(
			TranslationTable::from_json_dir(dir.path()),
			Err(I18nError::EmptyCatalog)
		));
	}
}
