use anyhow::Result;
use clap::Parser;

use gpib_daq_tools::cli::{init_logging, RtdArgs};
use gpib_daq_tools::rtd::RtdCalibration;

fn main() -> Result<()> {
    let args = RtdArgs::parse();
    init_logging();

    let temperature = RtdCalibration::default().temperature_c(args.resistance)?;
    println!(
        "Temperature is {temperature:.6} corresponding to {:.6}",
        args.resistance
    );
    Ok(())
}
