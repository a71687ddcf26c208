use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use apifix_cli::endpoints::DEFAULT_ROOT;
use apifix_cli::scan::scan;

#[derive(Parser)]
#[command(name = "apifix")]
#[command(
	author,
	version,
	about = "Rewrite hardcoded API paths into API_ENDPOINTS references"
)]
struct Cli {
	/// Root directory of the frontend source tree to rewrite
	#[arg(value_name = "ROOT", default_value = DEFAULT_ROOT)]
	root: PathBuf,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let summary = scan(&cli.root)
		.with_context(|| format!("Failed to rewrite tree at {}", cli.root.display()))?;

	println!(
		"done: fixed {} endpoints across {} files",
		summary.replacements, summary.files_changed
	);

	Ok(ExitCode::SUCCESS)
}
