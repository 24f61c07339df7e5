// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Template resolution and the decode-and-translate operation.

use serde::Serialize;

use crate::catalog::TranslationTable;
use crate::empty::is_not_empty;
use crate::encoded::{parse_params, percent_decode, split_encoded};
use crate::error::DecodeError;
use crate::html::unescape_html;

/// How a [`Translation`] was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// The message id was found in the locale's dictionary.
	Resolved,
	/// No template was found; the default text or the message id was used.
	FallbackUsed,
	/// The input could not be decoded.
	Malformed(DecodeError),
}

/// Result of [`decode_string_and_translate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
	/// The display string: resolved, percent-decoded and HTML-unescaped.
	pub translated_str: String,
	/// The extracted message id.
	pub code: Option<String>,
	/// The raw, still-encoded parameter block.
	pub params: Option<String>,
	/// The HTML-unescaped default text, when one was given.
	pub message: Option<String>,
	#[serde(skip)]
	pub outcome: Outcome,
}

impl Translation {
	/// Whether the input failed to decode.
	pub fn is_malformed(&self) -> bool {
		matches!(self.outcome, Outcome::Malformed(_))
	}
}

/// Replace every `{$name}` in `template` with the matching parameter.
///
/// Substitution is a single literal pass: inserted values are never scanned
/// for further placeholders, and placeholders without a parameter are kept
/// verbatim. When a name appears twice in `params` the last one wins.
///
/// # Example
///
/// ```
/// use ov_common_i18n::substitute;
///
/// assert_eq!(
///     substitute("{$a} and {$b}", &[("a", "{$b}")]),
///     "{$b} and {$b}"
/// );
/// ```
pub fn substitute<K, V>(template: &str, params: &[(K, V)]) -> String
where
	K: AsRef<str>,
	V: AsRef<str>,
{
	if params.is_empty() {
		return template.to_string();
	}

	let mut out = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(start) = rest.find("{$") {
		out.push_str(&rest[..start]);
		let tail = &rest[start..];
		let replacement = tail[2..].find('}').and_then(|end| {
			let name = &tail[2..2 + end];
			params
				.iter()
				.rev()
				.find(|(k, _)| k.as_ref() == name)
				.map(|(_, v)| (v.as_ref(), 2 + end + 1))
		});
		match replacement {
			Some((value, consumed)) => {
				out.push_str(value);
				rest = &tail[consumed..];
			}
			None => {
				out.push_str("{$");
				rest = &tail[2..];
			}
		}
	}
	out.push_str(rest);
	out
}

fn fallback<'a>(message_id: &'a str, default: Option<&'a str>) -> &'a str {
	match default {
		Some(d) if is_not_empty(d) => d,
		_ => message_id,
	}
}

/// Resolve the template for `message_id` against a locale dictionary.
///
/// Returns the substituted template, or `None` when the dictionary has no
/// non-empty entry for the id.
fn resolve_template<K, V>(
	table: &TranslationTable,
	locale: &str,
	message_id: &str,
	params: &[(K, V)],
) -> Result<Option<String>, DecodeError>
where
	K: AsRef<str>,
	V: AsRef<str>,
{
	let dict = table
		.get(locale)
		.ok_or_else(|| DecodeError::UnknownLocale(locale.to_string()))?;
	Ok(dict
		.get(message_id)
		.filter(|tr| is_not_empty(tr.as_str()))
		.map(|tr| substitute(tr, params)))
}

/// Look up `message_id` in `locale` and substitute `params`.
///
/// Falls back to `default` (when non-empty) and then to the message id
/// itself. A locale missing from the table also falls back.
pub fn localize_with(
	table: &TranslationTable,
	locale: &str,
	message_id: &str,
	default: Option<&str>,
	params: &[(&str, &str)],
) -> String {
	match resolve_template(table, locale, message_id, params) {
		Ok(Some(tr)) => tr,
		Ok(None) => {
			tracing::debug!(locale, message_id, "no translation, using fallback");
			fallback(message_id, default).to_string()
		}
		Err(e) => {
			tracing::warn!(locale, message_id, error = %e, "cannot localize");
			fallback(message_id, default).to_string()
		}
	}
}

/// Decode an encoded message and translate it for `locale`.
///
/// `input` is either a plain message id or
/// `messageId?name=value&...` with percent-encoded values. Never fails:
/// malformed input yields `"ERROR in decoding and translating <input>"`.
///
/// # Example
///
/// ```
/// use ov_common_i18n::{decode_string_and_translate, TranslationTable};
///
/// let table = TranslationTable::builder()
///     .locale("en", [("greet", "Hello {$name}")])
///     .build()
///     .unwrap();
///
/// let tr = decode_string_and_translate(&table, "en", "greet?name=A%26B", Some("hi"));
/// assert_eq!(tr.translated_str, "Hello A&B");
/// assert_eq!(tr.code.as_deref(), Some("greet"));
/// ```
pub fn decode_string_and_translate(
	table: &TranslationTable,
	locale: &str,
	input: &str,
	default: Option<&str>,
) -> Translation {
	let message = default.map(unescape_html);

	if !is_not_empty(input) {
		return Translation {
			translated_str: default.map(unescape_html).unwrap_or_default(),
			code: None,
			params: None,
			message,
			outcome: Outcome::FallbackUsed,
		};
	}

	match decode(table, locale, input, default) {
		Ok((translated_str, code, params, outcome)) => Translation {
			translated_str,
			code,
			params,
			message,
			outcome,
		},
		Err(e) => {
			tracing::warn!(locale, input, error = %e, "failed to decode message");
			Translation {
				translated_str: format!("ERROR in decoding and translating {input}"),
				code: None,
				params: None,
				message,
				outcome: Outcome::Malformed(e),
			}
		}
	}
}

type Decoded = (String, Option<String>, Option<String>, Outcome);

fn decode(
	table: &TranslationTable,
	locale: &str,
	input: &str,
	default: Option<&str>,
) -> Result<Decoded, DecodeError> {
	let Some(parts) = split_encoded(input) else {
		tracing::debug!(input, "no message id in input, using fallback");
		// Without a message id there is no encoded text; only a default is decoded.
		let translated = match default {
			Some(d) if is_not_empty(d) => unescape_html(&percent_decode(d)?),
			_ => input.to_string(),
		};
		return Ok((translated, None, None, Outcome::FallbackUsed));
	};

	let pairs = parse_params(parts.params)?;

	let (template, outcome) = match resolve_template(table, locale, parts.code, &pairs)? {
		Some(tr) => (tr, Outcome::Resolved),
		None => {
			tracing::debug!(locale, message_id = parts.code, "no translation, using fallback");
			(fallback(parts.code, default).to_string(), Outcome::FallbackUsed)
		}
	};

	let translated = unescape_html(&percent_decode(&template)?);
	Ok((
		translated,
		Some(parts.code.to_string()),
		Some(parts.params.to_string()),
		outcome,
	))
}
