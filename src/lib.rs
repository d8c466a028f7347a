//! Offline post-processing for GPIB voltage-sweep acquisitions.
//!
//! `log-to-csv` reshapes the acquisition program's console log into a CSV
//! table, `analyse` reduces that table to per-step means with standard errors
//! and the derived resistance, and `r-to-t` converts a Pt100 reading into a
//! temperature.
pub mod analysis;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod recorder;
pub mod rtd;
pub mod types;

pub use analysis::{analyse_file, analyse_reader, means_output_path, AnalysisReport};
pub use config::{ConvertOptions, LogColumns};
pub use convert::{convert_file, convert_reader, csv_output_path, ConvertReport};
pub use error::{DaqError, Result};
pub use rtd::RtdCalibration;
pub use types::{LogRecord, MeasurementRow, StepId, StepSummary};
