// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use ov_common_i18n::{
	decode_string_and_translate, encode_escape_params, escape_html, messages, unescape_html,
	I18nConfig, Locale, Localizer, MemoryStore, Outcome, PreferenceStore, TranslationTable,
	LOCALE_PREFERENCE_KEY,
};
use proptest::prelude::*;

fn greet_table() -> Arc<TranslationTable> {
	Arc::new(
		TranslationTable::builder()
			.locale("en", [("greet", "Hello {$name}"), ("plain", "Plain text")])
			.locale("it", [("greet", "Ciao {$name}"), ("plain", "Testo semplice")])
			.build()
			.unwrap(),
	)
}

fn localizer(table: Arc<TranslationTable>, store: Arc<MemoryStore>) -> Localizer {
	Localizer::new(table, store, &I18nConfig::default()).unwrap()
}

#[test]
fn test_encode_then_decode() {
	let encoded = encode_escape_params("greet", &[("name", "A&B")]);
	assert_eq!(encoded, "greet?name=A%26B");

	let tr = decode_string_and_translate(&greet_table(), "en", &encoded, Some("hi"));
	assert_eq!(tr.translated_str, "Hello A&B");
	assert_eq!(tr.outcome, Outcome::Resolved);
}

#[test]
fn test_wire_format_matches_uri_component_encoding() {
	let encoded = encode_escape_params("greet", &[("name", "it's (ok)!*~")]);
	assert_eq!(encoded, "greet?name=it's%20(ok)!*~");

	let tr = decode_string_and_translate(&greet_table(), "en", &encoded, None);
	assert_eq!(tr.translated_str, "Hello it's (ok)!*~");
}

#[test]
fn test_repeated_parameter_keeps_last_value() {
	let tr = decode_string_and_translate(&greet_table(), "en", "greet?name=A&name=B", None);
	assert_eq!(tr.translated_str, "Hello B");
	assert_eq!(tr.params.as_deref(), Some("name=A&name=B"));
}

#[test]
fn test_stored_templates_are_returned_unchanged() {
	let table = TranslationTable::builtin();
	for code in table.locales() {
		let store = Arc::new(MemoryStore::with_value(LOCALE_PREFERENCE_KEY, code));
		let l10n = localizer(table.clone(), store);
		for (id, template) in table.get(code).unwrap() {
			assert_eq!(&l10n.localize(id, Some("default"), &[]), template);
		}
	}
}

#[test]
fn test_unsupported_preference_falls_back_and_is_overwritten() {
	let store = Arc::new(MemoryStore::with_value(LOCALE_PREFERENCE_KEY, "fr"));
	let l10n = localizer(greet_table(), store.clone());

	assert_eq!(l10n.localize("plain", None, &[]), "Plain text");
	assert_eq!(store.get(LOCALE_PREFERENCE_KEY, ""), "en");
}

#[test]
fn test_absent_message_falls_back() {
	let l10n = localizer(greet_table(), Arc::new(MemoryStore::new()));
	assert_eq!(l10n.localize("absent", Some("Fallback"), &[]), "Fallback");
	assert_eq!(l10n.localize("absent", None, &[]), "absent");
}

#[test]
fn test_malformed_input_never_raises() {
	let tr = decode_string_and_translate(&greet_table(), "en", "greet?name", None);
	assert_eq!(tr.translated_str, "ERROR in decoding and translating greet?name");
	assert!(tr.is_malformed());
}

#[test]
fn test_viewer_messages_follow_preference() {
	let store = Arc::new(MemoryStore::new());
	let l10n = localizer(TranslationTable::builtin(), store.clone());

	assert_eq!(messages::OPEN_MODEL_FROM_URL.localize(&l10n), "Open Model from Url");
	store.set(LOCALE_PREFERENCE_KEY, "it");
	assert_eq!(messages::OPEN_MODEL_FROM_URL.localize(&l10n), "Apri modello da url");
}

#[test]
fn test_explicit_locale_ignores_preference() {
	let store = Arc::new(MemoryStore::with_value(LOCALE_PREFERENCE_KEY, "en"));
	let l10n = localizer(greet_table(), store);
	let locale = Locale::new(l10n, "it");
	assert_eq!(locale.localize("greet", None, &[("name", "Ada")]), "Ciao Ada");
}

proptest! {
	#[test]
	fn every_placeholder_occurrence_is_replaced(
		name in "[a-z]{1,8}",
		value in "[A-Za-z0-9 ]{1,16}",
	) {
		let template = format!("{{${name}}} / {{${name}}} / {{$other}}");
		let table = Arc::new(
			TranslationTable::builder()
				.locale("en", [("msg", template.as_str())])
				.build()
				.unwrap(),
		);
		let l10n = localizer(table, Arc::new(MemoryStore::new()));
		let expected = if name == "other" {
			format!("{value} / {value} / {value}")
		} else {
			format!("{value} / {value} / {{$other}}")
		};
		prop_assert_eq!(l10n.localize("msg", None, &[(name.as_str(), value.as_str())]), expected);
	}

	#[test]
	fn escape_round_trips_printable_ascii(s in "[ -~]{0,64}") {
		prop_assume!(!["&amp;", "&lt;", "&gt;", "&quot;", "&#039;", "&percnt;"]
			.iter()
			.any(|e| s.contains(e)));
		prop_assert_eq!(unescape_html(&escape_html(&s)), s);
	}

	#[test]
	fn parameter_values_survive_the_round_trip(value in "\\PC{1,24}") {
		let l10n = localizer(greet_table(), Arc::new(MemoryStore::new()));
		let out = l10n.localize("greet", None, &[("name", value.as_str())]);
		prop_assert_eq!(out, format!("Hello {value}"));
	}
}
