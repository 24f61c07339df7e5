// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Preference stores holding the user's locale choice.
//!
//! The engine only needs `get` and `set` on string values. Neither call can
//! fail at the trait boundary: a store that cannot read returns the default,
//! and a store that cannot write logs and moves on.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::{I18nError, Result};

/// String key-value store persisted across sessions.
pub trait PreferenceStore: Send + Sync {
	/// Value stored under `key`, or `default` when there is none.
	fn get(&self, key: &str, default: &str) -> String;

	/// Store `value` under `key`.
	fn set(&self, key: &str, value: &str);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
	values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store pre-seeded with a single value.
	pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
		let store = Self::new();
		lock(&store.values).insert(key.into(), value.into());
		store
	}
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str, default: &str) -> String {
		lock(&self.values)
			.get(key)
			.cloned()
			.unwrap_or_else(|| default.to_string())
	}

	fn set(&self, key: &str, value: &str) {
		lock(&self.values).insert(key.to_string(), value.to_string());
	}
}

/// Store backed by a TOML file of string values, one entry per key.
///
/// The file is read once when the store is opened and rewritten on every
/// `set`.
#[derive(Debug)]
pub struct FileStore {
	path: PathBuf,
	values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
	/// Open the store at `path`. A missing file is an empty store.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
		let path = path.into();
		let values = if path.exists() {
			let contents = std::fs::read_to_string(&path)?;
			toml::from_str(&contents).map_err(|source| I18nError::TomlParse {
				path: path.clone(),
				source,
			})?
		} else {
			BTreeMap::new()
		};

		tracing::debug!(path = %path.display(), entries = values.len(), "opened preference store");
		Ok(Self {
			path,
			values: Mutex::new(values),
		})
	}

	/// Open the store, falling back to an empty one if the file is unreadable.
	pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		match Self::open(&path) {
			Ok(store) => store,
			Err(e) => {
				tracing::warn!(
					path = %path.display(),
					error = %e,
					"preference file unreadable, starting empty"
				);
				Self {
					path,
					values: Mutex::new(BTreeMap::new()),
				}
			}
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
		if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
			std::fs::create_dir_all(parent)?;
		}
		let contents = toml::to_string(values)?;
		std::fs::write(&self.path, contents)?;
		Ok(())
	}
}

impl PreferenceStore for FileStore {
	fn get(&self, key: &str, default: &str) -> String {
		lock(&self.values)
			.get(key)
			.cloned()
			.unwrap_or_else(|| default.to_string())
	}

	fn set(&self, key: &str, value: &str) {
		let mut values = lock(&self.values);
		values.insert(key.to_string(), value.to_string());
		if let Err(e) = self.persist(&values) {
			tracing::warn!(
				path = %self.path.display(),
				key,
				error = %e,
				"failed to persist preference"
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_memory_store_default() {
		let store = MemoryStore::new();
		assert_eq!(store.get("ov_locale_id", "en"), "en");
	}

	#[test]
	fn test_memory_store_set_get() {
		let store = MemoryStore::new();
		store.set("ov_locale_id", "it");
		assert_eq!(store.get("ov_locale_id", "en"), "it");
	}

	#[test]
	fn test_memory_store_with_value() {
		let store = MemoryStore::with_value("k", "v");
		assert_eq!(store.get("k", ""), "v");
		assert_eq!(store.get("other", "d"), "d");
	}

	#[test]
	fn test_file_store_missing_file_is_empty() {
		let dir = tempfile::tempdir().unwrap();
		let store = FileStore::open(dir.path().join("prefs.toml")).unwrap();
		assert_eq!(store.get("ov_locale_id", "en"), "en");
	}

	#[test]
	fn test_file_store_persists_across_instances() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("prefs.toml");

		let store = FileStore::open(&path).unwrap();
		store.set("ov_locale_id", "it");
		drop(store);

		let reopened = FileStore::open(&path).unwrap();
		assert_eq!(reopened.get("ov_locale_id", "en"), "it");
	}

	#[test]
	fn test_file_store_rejects_garbage() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("prefs.toml");
		std::fs::write(&path, "this is = = not toml").unwrap();

		assert!(matches!(FileStore::open(&path), Err(I18nError::TomlParse { .. })));

		let store = FileStore::open_or_empty(&path);
		assert_eq!(store.get("ov_locale_id", "en"), "en");
	}
}
