use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use gpib_daq_tools::cli::{init_logging, ConvertArgs};
use gpib_daq_tools::convert::{convert_file, csv_output_path};

fn main() -> Result<()> {
    let args = ConvertArgs::parse();
    init_logging();

    let output = csv_output_path(&args.file);
    info!("Will convert file \"{}\" to CSV", args.file.display());
    let report = convert_file(&args.file, &output, &args.options())
        .with_context(|| format!("converting {}", args.file.display()))?;
    info!(
        "Wrote {} rows to {} ({} diagnostic lines skipped)",
        report.rows_written,
        output.display(),
        report.lines_discarded
    );
    if let Some(line) = report.stopped_at_blank {
        info!("Reached a blank line at line {line}, stopped reading");
    }
    Ok(())
}
