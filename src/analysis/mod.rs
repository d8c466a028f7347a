//! Per-step statistics over a converted measurement table.
pub mod buffer;
pub mod source;
pub mod stats;

pub use buffer::{StepBuffer, StepSamples};
pub use source::{CsvSource, ManualSource, MeasurementSource};
pub use stats::{mean, population_std_dev, standard_error, summarize};

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{DaqError, Result};
use crate::recorder::CsvRecorder;
use crate::types::{StepSummary, MEANS_CSV_HEADER};

/// Outcome of one analysis run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisReport {
    pub rows_read: usize,
    /// One entry per distinct step, in first-seen order.
    pub summaries: Vec<StepSummary>,
}

/// Drains `source` and summarizes every step it mentions.
pub fn analyse_source<S: MeasurementSource>(mut source: S) -> Result<AnalysisReport> {
    let mut buffer = StepBuffer::new();
    let mut rows_read = 0;
    while let Some(row) = source.next_row()? {
        buffer.push(&row);
        rows_read += 1;
    }
    if buffer.is_empty() {
        warn!("no measurement rows found");
    } else {
        debug!("grouped {rows_read} rows into {} steps", buffer.len());
    }
    let summaries = buffer
        .steps()
        .iter()
        .map(summarize)
        .collect::<Result<Vec<_>>>()?;
    for s in &summaries {
        debug!(
            "step {}: V = {:.6} +/- {:.6}, I = {:.6} +/- {:.6}, R = {:.6} +/- {:.6}",
            s.step_label, s.v_mean, s.v_stderr, s.i_mean, s.i_stderr, s.r_ohm, s.r_err
        );
    }
    Ok(AnalysisReport {
        rows_read,
        summaries,
    })
}

/// Writes the summary table (header plus one row per step).
pub fn write_summaries<W: Write>(writer: W, summaries: &[StepSummary]) -> Result<usize> {
    let mut recorder = CsvRecorder::new(writer, &MEANS_CSV_HEADER)?;
    for summary in summaries {
        recorder.write_fields(summary.to_fields())?;
    }
    recorder.finish()
}

/// Reads a measurement CSV from `reader` and writes the summary to `writer`.
pub fn analyse_reader<R: Read, W: Write>(reader: R, writer: W) -> Result<AnalysisReport> {
    let report = analyse_source(CsvSource::new(reader))?;
    write_summaries(writer, &report.summaries)?;
    Ok(report)
}

/// Analyses the table at `input` and writes the summary to `output`.
/// The output file is only created once every step has been summarized.
pub fn analyse_file(input: &Path, output: &Path) -> Result<AnalysisReport> {
    let file = File::open(input).map_err(|e| DaqError::io(input, e))?;
    let report = analyse_source(CsvSource::new(BufReader::new(file)))?;
    let out = File::create(output).map_err(|e| DaqError::io(output, e))?;
    write_summaries(out, &report.summaries)?;
    Ok(report)
}

/// Summary file name: everything before the first `.csv`, plus `_means.csv`.
pub fn means_output_path(input: &Path) -> Result<PathBuf> {
    let not_csv = || DaqError::NotCsv {
        path: input.to_path_buf(),
    };
    let name = input.to_str().ok_or_else(not_csv)?;
    let pos = name.find(".csv").ok_or_else(not_csv)?;
    Ok(PathBuf::from(format!("{}_means.csv", &name[..pos])))
}
