// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser as _;

mod util;
util::mod_days![01, 02, 03, 04, 05];


#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Stage {
	Stage1,
	Stage2,
}

/// Advent of Code 2021 solvers.
#[derive(Debug, clap::Parser)]
struct Options {
	/// Puzzle day to solve
	day: u8,
	/// Data file provided by the challenge
	data: PathBuf,
	/// Stage of the puzzle to run
	#[arg(short, long, value_enum, default_value_t = Stage::Stage1)]
	stage: Stage,
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
		.init();

	let options = Options::parse();
	let input = std::fs::read_to_string(&options.data)
		.with_context(|| format!("reading data file {}", options.data.display()))?;
	tracing::debug!(day = options.day, stage = ?options.stage, bytes = input.len(), "dispatching");

	println!("{}", run_day(options.day, options.stage, &input)?);
	Ok(())
}
