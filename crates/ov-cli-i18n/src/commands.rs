// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subcommands of the `ov-i18n` binary.

use std::io::Write;

use clap::Subcommand;
use serde::Serialize;

use ov_common_i18n::{
	decode_string_and_translate, encode_escape_params, escape_html, locale_info, unescape_html,
	Localizer,
};

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Translate a message id for the stored locale
	Localize {
		/// Message id to translate
		message_id: String,
		/// Text used when no translation exists
		#[arg(long)]
		default: Option<String>,
		/// Template parameter (repeatable: -p KEY=VALUE)
		#[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_param)]
		params: Vec<(String, String)>,
	},
	/// Build an encoded message from an id and parameters
	Encode {
		/// Message id
		message_id: String,
		/// Parameter (repeatable: -p KEY=VALUE)
		#[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_param)]
		params: Vec<(String, String)>,
	},
	/// Decode and translate an encoded message, printing the result as JSON
	Decode {
		/// Encoded message, e.g. `greet?name=A%26B`
		input: String,
		/// Locale to translate into (defaults to the stored locale)
		#[arg(long)]
		locale: Option<String>,
		/// Text used when no translation exists
		#[arg(long)]
		default: Option<String>,
	},
	/// List the locales the translation table can serve
	Locales {
		/// Output as JSON
		#[arg(long)]
		json: bool,
	},
	/// Print the stored locale preference
	GetLocale,
	/// Store a new locale preference
	SetLocale {
		/// Locale code; unsupported codes store the default locale
		locale: String,
	},
	/// HTML-escape text
	Escape { text: String },
	/// Reverse `escape`
	Unescape { text: String },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
	s.split_once('=')
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{s}`"))
}

fn borrow_params(params: &[(String, String)]) -> Vec<(&str, &str)> {
	params
		.iter()
		.map(|(k, v)| (k.as_str(), v.as_str()))
		.collect()
}

#[derive(Serialize)]
struct LocaleEntry<'a> {
	code: &'a str,
	name: Option<&'static str>,
	native_name: Option<&'static str>,
	default: bool,
}

pub fn run(command: Command, localizer: &Localizer, out: &mut impl Write) -> anyhow::Result<()> {
	match command {
		Command::Localize {
			message_id,
			default,
			params,
		} => {
			let params = borrow_params(&params);
			let text = localizer.localize(&message_id, default.as_deref(), &params);
			writeln!(out, "{text}")?;
		}
		Command::Encode { message_id, params } => {
			let params = borrow_params(&params);
			writeln!(out, "{}", encode_escape_params(&message_id, &params))?;
		}
		Command::Decode {
			input,
			locale,
			default,
		} => {
			let locale = match locale {
				Some(code) => localizer.normalize(&code),
				None => localizer.current_locale(),
			};
			let translation =
				decode_string_and_translate(localizer.table(), &locale, &input, default.as_deref());
			writeln!(out, "{}", serde_json::to_string_pretty(&translation)?)?;
		}
		Command::Locales { json } => {
			let table = localizer.table();
			let entries: Vec<LocaleEntry<'_>> = table
				.locales()
				.into_iter()
				.map(|code| {
					let info = locale_info(code);
					LocaleEntry {
						code,
						name: info.map(|i| i.name),
						native_name: info.map(|i| i.native_name),
						default: code == localizer.default_locale(),
					}
				})
				.collect();

			if json {
				writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
			} else {
				for entry in entries {
					let marker = if entry.default { " (default)" } else { "" };
					match entry.native_name {
						Some(native) => writeln!(out, "{}\t{native}{marker}", entry.code)?,
						None => writeln!(out, "{}{marker}", entry.code)?,
					}
				}
			}
		}
		Command::GetLocale => {
			writeln!(out, "{}", localizer.current_locale())?;
		}
		Command::SetLocale { locale } => {
			let stored = localizer.set_locale(&locale);
			if stored != locale {
				tracing::info!(
					requested = %locale,
					stored = %stored,
					"unsupported locale, stored default"
				);
			}
			writeln!(out, "{stored}")?;
		}
		Command::Escape { text } => {
			writeln!(out, "{}", escape_html(&text))?;
		}
		Command::Unescape { text } => {
			writeln!(out, "{}", unescape_html(&text))?;
		}
	}

	Ok(())
}
