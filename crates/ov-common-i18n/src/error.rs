// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types.
//!
//! Translation itself never fails; these errors only come out of catalog
//! loading and configuration.

use std::path::PathBuf;

/// Result type alias for catalog and configuration operations.
pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors raised while building a translation table or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	/// I/O error reading a catalog or config file
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// TOML parsing error
	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// TOML serialization error
	#[error("TOML serialize error: {0}")]
	TomlSerialize(#[from] toml::ser::Error),

	/// JSON catalog parsing error
	#[error("JSON parse error in {path}: {source}")]
	JsonParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// No locale was loaded at all
	#[error("translation table contains no locales")]
	EmptyCatalog,

	/// A locale was registered with no messages
	#[error("locale '{0}' has an empty dictionary")]
	EmptyDictionary(String),

	/// A configured locale is missing from the translation table
	#[error("locale '{0}' is not present in the translation table")]
	UnsupportedLocale(String),
}

/// Why an encoded message could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
	/// A parameter piece had no `=` separator
	#[error("parameter '{0}' has no value separator")]
	MissingSeparator(String),

	/// A `%` was not followed by two hex digits
	#[error("malformed percent escape in '{0}'")]
	MalformedEscape(String),

	/// Percent-decoded bytes were not valid UTF-8
	#[error("percent-decoded text is not valid UTF-8: '{0}'")]
	InvalidUtf8(String),

	/// The locale has no dictionary in the translation table
	#[error("no dictionary for locale '{0}'")]
	UnknownLocale(String),
}
