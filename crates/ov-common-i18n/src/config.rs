// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Engine configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, a TOML
//! file, and `OV_*` environment variables.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::TranslationTable;
use crate::error::{I18nError, Result};
use crate::locale::{DEFAULT_LOCALE, LOCALE_PREFERENCE_KEY};

/// Environment variable overriding [`I18nConfig::default_locale`].
pub const ENV_DEFAULT_LOCALE: &str = "OV_DEFAULT_LOCALE";
/// Environment variable overriding [`I18nConfig::preference_key`].
pub const ENV_PREFERENCE_KEY: &str = "OV_LOCALE_PREFERENCE_KEY";
/// Environment variable overriding [`I18nConfig::catalog_dir`].
pub const ENV_CATALOG_DIR: &str = "OV_CATALOG_DIR";
/// Environment variable overriding [`I18nConfig::preference_file`].
pub const ENV_PREFERENCE_FILE: &str = "OV_PREFERENCE_FILE";

/// Localization engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
	/// Locale used when the stored preference is missing or invalid.
	pub default_locale: String,
	/// Key the locale preference is stored under.
	pub preference_key: String,
	/// Directory of `<code>.json` catalogs. Built-in catalogs when unset.
	pub catalog_dir: Option<PathBuf>,
	/// File backing the preference store. In-memory when unset.
	pub preference_file: Option<PathBuf>,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LOCALE.to_string(),
			preference_key: LOCALE_PREFERENCE_KEY.to_string(),
			catalog_dir: None,
			preference_file: None,
		}
	}
}

impl I18nConfig {
	/// Parse a TOML file. Missing keys keep their defaults.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path)?;
		toml::from_str(&contents).map_err(|source| I18nError::TomlParse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Load from an optional file, then apply environment overrides.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let config = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		Ok(config.with_env_overrides(|var| std::env::var(var).ok()))
	}

	/// Apply overrides looked up through `lookup`. Empty values are ignored.
	pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
		let get = |var: &str| lookup(var).filter(|v| !v.is_empty());

		if let Some(locale) = get(ENV_DEFAULT_LOCALE) {
			self.default_locale = locale;
		}
		if let Some(key) = get(ENV_PREFERENCE_KEY) {
			self.preference_key = key;
		}
		if let Some(dir) = get(ENV_CATALOG_DIR) {
			self.catalog_dir = Some(PathBuf::from(dir));
		}
		if let Some(file) = get(ENV_PREFERENCE_FILE) {
			self.preference_file = Some(PathBuf::from(file));
		}
		self
	}

	/// The translation table this configuration points at.
	pub fn load_table(&self) -> Result<Arc<TranslationTable>> {
		match &self.catalog_dir {
			Some(dir) => Ok(Arc::new(TranslationTable::from_json_dir(dir)?)),
			None => Ok(TranslationTable::builtin()),
		}
	}

	/// Check the configuration against the table it will be used with.
	pub fn validate(&self, table: &TranslationTable) -> Result<()> {
		if !table.contains(&self.default_locale) {
			return Err(I18nError::UnsupportedLocale(self.default_locale.clone()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	#[test]
	fn test_defaults() {
		let config = I18nConfig::default();
		assert_eq!(config.default_locale, "en");
		assert_eq!(config.preference_key, "ov_locale_id");
		assert!(config.catalog_dir.is_none());
		assert!(config.preference_file.is_none());
	}

	#[test]
	fn test_from_file_partial() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("i18n.toml");
		std::fs::write(&path, "default_locale = \"it\"\n").unwrap();

		let config = I18nConfig::from_file(&path).unwrap();
		assert_eq!(config.default_locale, "it");
		assert_eq!(config.preference_key, "ov_locale_id");
	}

	#[test]
	fn test_from_file_invalid() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("i18n.toml");
		std::fs::write(&path, "default_locale = [").unwrap();

		assert!(matches!(
			I18nConfig::from_file(&path),
			Err(I18nError::TomlParse { .. })
		));
	}

	#[test]
	fn test_env_overrides_win() {
		let env: HashMap<&str, &str> = [
			(ENV_DEFAULT_LOCALE, "it"),
			(ENV_PREFERENCE_KEY, "lang"),
			(ENV_PREFERENCE_FILE, "/tmp/prefs.toml"),
			(ENV_CATALOG_DIR, ""),
		]
		.into_iter()
		.collect();

		let config = I18nConfig::default()
			.with_env_overrides(|var| env.get(var).map(|v| v.to_string()));
		assert_eq!(config.default_locale, "it");
		assert_eq!(config.preference_key, "lang");
		assert_eq!(config.preference_file, Some(PathBuf::from("/tmp/prefs.toml")));
		assert!(config.catalog_dir.is_none());
	}

	#[test]
	fn test_validate() {
		let table = TranslationTable::builtin();
		assert!(I18nConfig::default().validate(&table).is_ok());

		let config = I18nConfig {
			default_locale: "fr".to_string(),
			..Default::default()
		};
		assert!(matches!(
			config.validate(&table),
			Err(I18nError::UnsupportedLocale(code)) if code == "fr"
		));
	}

	#[test]
	fn test_load_table_builtin() {
		let table = I18nConfig::default().load_table().unwrap();
		assert!(table.contains("it"));
	}
}
