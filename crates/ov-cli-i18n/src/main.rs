// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ov_common_i18n::{I18nConfig, Localizer};

mod commands;

use commands::Command;

/// Online Viewer localization tool
#[derive(Parser, Debug)]
#[command(name = "ov-i18n", version, about, long_about = None)]
struct Args {
	/// Path to an i18n TOML configuration file
	#[arg(short, long, env = "OV_I18N_CONFIG")]
	config: Option<PathBuf>,

	/// Log level used when RUST_LOG is not set
	#[arg(short, long, default_value = "info")]
	log_level: String,

	/// Output logs as JSON
	#[arg(long)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

fn init_tracing(log_level: &str, json: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(format!("ov_i18n={log_level},ov_common_i18n={log_level}"))
	});

	if json {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().compact().with_writer(std::io::stderr))
			.init();
	}
}

fn load_localizer(config_path: Option<&std::path::Path>) -> anyhow::Result<Localizer> {
	let config = I18nConfig::load(config_path).context("failed to load i18n configuration")?;
	tracing::debug!(?config, "loaded configuration");
	Localizer::from_config(&config).context("failed to initialize localizer")
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	init_tracing(&args.log_level, args.json_logs);

	let localizer = load_localizer(args.config.as_deref())?;
	let stdout = std::io::stdout();
	commands::run(args.command, &localizer, &mut stdout.lock())
}
