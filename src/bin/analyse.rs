use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use gpib_daq_tools::analysis::{analyse_file, means_output_path};
use gpib_daq_tools::cli::{init_logging, AnalyseArgs, USAGE_EXIT_CODE};

fn run(input: &Path, output: &Path) -> Result<()> {
    let report = analyse_file(input, output)
        .with_context(|| format!("analysing {}", input.display()))?;
    info!(
        "Summarized {} rows into {} steps in {}",
        report.rows_read,
        report.summaries.len(),
        output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = AnalyseArgs::parse();
    init_logging();

    info!("Will analyse file \"{}\"", args.file.display());
    let output = match means_output_path(&args.file) {
        Ok(path) => path,
        Err(err) => {
            error!("{err}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };
    match run(&args.file, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
