// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the Online Viewer.
//!
//! This crate resolves display strings for the viewer's dialogs and panels.
//! Translations live in an immutable [`TranslationTable`] keyed by locale
//! code; the user's locale choice lives in an injected [`PreferenceStore`].
//!
//! # Templates
//!
//! Templates may contain `{$name}` placeholders, replaced literally by
//! parameter values.
//!
//! # Encoded messages
//!
//! A message id and its parameters can travel as a single string:
//! `messageId?name=value&other=value`, values percent-encoded. See
//! [`encode_escape_params`] and [`decode_string_and_translate`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ov_common_i18n::{I18nConfig, Localizer, MemoryStore, TranslationTable};
//!
//! let localizer = Localizer::new(
//!     TranslationTable::builtin(),
//!     Arc::new(MemoryStore::new()),
//!     &I18nConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(localizer.localize("cancel", Some("Cancel"), &[]), "Cancel");
//!
//! localizer.set_locale("it");
//! assert_eq!(localizer.localize("cancel", Some("Cancel"), &[]), "Annulla");
//! ```

mod catalog;
mod config;
mod empty;
mod encoded;
mod error;
mod html;
mod locale;
mod localizer;
pub mod messages;
mod resolve;
mod store;
mod translate;

pub use catalog::{Dictionary, TranslationTable, TranslationTableBuilder};
pub use config::{
	I18nConfig, ENV_CATALOG_DIR, ENV_DEFAULT_LOCALE, ENV_PREFERENCE_FILE, ENV_PREFERENCE_KEY,
};
pub use empty::{is_not_empty, IsNotEmpty};
pub use encoded::{
	encode_escape_params, parse_params, percent_decode, split_encoded, EncodedParts, BLANK_VALUE,
};
pub use error::{DecodeError, I18nError, Result};
pub use html::{escape_html, unescape_html};
pub use locale::{available_locales, locale_info, LocaleInfo};
pub use localizer::{Locale, Localizer};
pub use resolve::{is_supported, resolve_locale};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use translate::{decode_string_and_translate, localize_with, substitute, Outcome, Translation};

pub use locale::{DEFAULT_LOCALE, LOCALES, LOCALE_PREFERENCE_KEY};
