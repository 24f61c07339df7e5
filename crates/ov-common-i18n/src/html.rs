// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTML entity escaping for parameter values.
//!
//! Only six characters are handled: `&`, `<`, `>`, `"`, `'` and `%`. The
//! percent sign is escaped so that an escaped value survives a later
//! percent-decoding pass untouched.

use crate::empty::is_not_empty;

const ENTITIES: &[(char, &str)] = &[
	('&', "&amp;"),
	('<', "&lt;"),
	('>', "&gt;"),
	('"', "&quot;"),
	('\'', "&#039;"),
	('%', "&percnt;"),
];

/// Escape the six HTML metacharacters in a single left-to-right pass.
///
/// Returns an empty string for empty input. Escaping is not idempotent:
/// `&amp;` becomes `&amp;amp;`.
///
/// # Example
///
/// ```
/// use ov_common_i18n::escape_html;
///
/// assert_eq!(escape_html("<b>50%</b>"), "&lt;b&gt;50&percnt;&lt;/b&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
	if !is_not_empty(input) {
		return String::new();
	}

	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ENTITIES.iter().find(|(c, _)| *c == ch) {
			Some((_, entity)) => out.push_str(entity),
			None => out.push(ch),
		}
	}
	out
}

/// Replace the six entities produced by [`escape_html`] with their characters.
///
/// Single pass: `&amp;lt;` becomes `&lt;`, not `<`. Any other entity is left
/// as-is.
pub fn unescape_html(input: &str) -> String {
	if !is_not_empty(input) {
		return String::new();
	}

	let mut out = String::with_capacity(input.len());
	let mut rest = input;
	while let Some(pos) = rest.find('&') {
		out.push_str(&rest[..pos]);
		let tail = &rest[pos..];
		match ENTITIES
			.iter()
			.find(|(_, entity)| tail.starts_with(entity))
		{
			Some((ch, entity)) => {
				out.push(*ch);
				rest = &tail[entity.len()..];
			}
			None => {
				out.push('&');
				rest = &tail[1..];
			}
		}
	}
	out.push_str(rest);
	out
}
