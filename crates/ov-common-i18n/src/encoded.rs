// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The encoded message wire format.
//!
//! An encoded message carries a message id and its parameters in a single
//! string so it can travel through a URL or an attribute:
//!
//! ```text
//! messageId?name1=value1&name2=value2&...&nameN=valueN
//! ```
//!
//! Values are percent-encoded URI components.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::empty::is_not_empty;
use crate::error::DecodeError;
use crate::html::escape_html;

/// Stand-in for a parameter whose value is empty.
pub const BLANK_VALUE: &str = "%20";

/// Characters a URI component leaves unescaped: alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

static ENCODED_MESSAGE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?P<code>[0-9A-Za-z_]+)\?*(?P<params>[^ ]*)")
		.expect("encoded message pattern is valid")
});

/// Build an encoded message from a message id and ordered parameters.
///
/// Empty values are sent as [`BLANK_VALUE`] so the key is kept. Returns the
/// id unchanged when there are no parameters.
///
/// # Example
///
/// ```
/// use ov_common_i18n::encode_escape_params;
///
/// assert_eq!(encode_escape_params("greet", &[("name", "A&B")]), "greet?name=A%26B");
/// assert_eq!(encode_escape_params("greet", &[("v", "(ok)!")]), "greet?v=(ok)!");
/// assert_eq!(encode_escape_params("greet", &[]), "greet");
/// ```
pub fn encode_escape_params(message_id: &str, params: &[(&str, &str)]) -> String {
	let mut out = String::from(message_id);

	for (i, (key, value)) in params.iter().enumerate() {
		let encoded = utf8_percent_encode(value, URI_COMPONENT).to_string();
		let value = if is_not_empty(encoded.as_str()) {
			encoded.as_str()
		} else {
			BLANK_VALUE
		};
		out.push(if i == 0 { '?' } else { '&' });
		out.push_str(key);
		out.push('=');
		out.push_str(value);
	}

	out
}

/// Message id and raw parameter block split out of an encoded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedParts<'a> {
	/// The leading run of word characters.
	pub code: &'a str,
	/// Everything after the id (leading `?` stripped) up to the first space,
	/// still percent-encoded. Empty when there is nothing there.
	pub params: &'a str,
}

/// Split an encoded message into its id and raw parameter block.
///
/// Leading non-word characters are skipped. Returns `None` when the input
/// contains no word character at all.
pub fn split_encoded(input: &str) -> Option<EncodedParts<'_>> {
	let caps = ENCODED_MESSAGE.captures(input)?;
	let code = caps.name("code")?.as_str();
	let params = caps.name("params").map_or("", |m| m.as_str());
	Some(EncodedParts { code, params })
}

/// Parse a raw parameter block into `(name, html-escaped value)` pairs.
///
/// Pieces are separated by `&` and split on the first `=`. Values are
/// percent-decoded and then HTML-escaped. Pairs with an empty name or value
/// are dropped, as are empty pieces. A non-empty piece without `=` is
/// malformed.
pub fn parse_params(block: &str) -> Result<Vec<(String, String)>, DecodeError> {
	let mut pairs = Vec::new();

	for piece in block.split('&') {
		if piece.is_empty() {
			continue;
		}
		let (name, raw) = piece
			.split_once('=')
			.ok_or_else(|| DecodeError::MissingSeparator(piece.to_string()))?;
		let value = escape_html(&percent_decode(raw)?);

		if is_not_empty(name) && is_not_empty(value.as_str()) {
			pairs.push((name.to_string(), value));
		} else {
			tracing::debug!(param = piece, "dropping empty parameter");
		}
	}

	Ok(pairs)
}

/// Strict URI-component decoding.
///
/// Every `%` must start a two-digit hex escape and the decoded bytes must be
/// valid UTF-8; anything else is malformed.
pub fn percent_decode(input: &str) -> Result<String, DecodeError> {
	let bytes = input.as_bytes();
	let mut i = 0;
	while i < bytes.len() {
		if bytes[i] == b'%' {
			let well_formed = bytes
				.get(i + 1..i + 3)
				.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
			if !well_formed {
				return Err(DecodeError::MalformedEscape(input.to_string()));
			}
			i += 3;
		} else {
			i += 1;
		}
	}

	urlencoding::decode(input)
		.map(Cow::into_owned)
		.map_err(|_| DecodeError::InvalidUtf8(input.to_string()))
}
