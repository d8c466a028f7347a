// src/types.rs
use std::fmt;

use serde::Serialize;

/// Header of the converted measurement table.
pub const LOG_CSV_HEADER: [&str; 7] = [
    "NMEAS",
    "NSTEP",
    "NSAMPLE",
    "TIMESTAMP(s)",
    "TIME_ERR(ms)",
    "VOLTAGE(V)",
    "CURRENT(A)",
];

/// Header of the per-step summary table.
pub const MEANS_CSV_HEADER: [&str; 7] = [
    "VSTEP", "VOLT(V)", "V_ERR(V)", "CURR(A)", "I_ERR(A)", "R(V/I)", "R_ERR",
];

/// Index of a voltage step in a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub i64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One retained acquisition log line, reshaped into the CSV column order.
///
/// Fields keep the token text as printed by the acquisition program; the
/// converter does not interpret numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub nmeas: String,
    pub nstep: String,
    pub nsample: String,
    pub timestamp: String,
    pub time_err: String,
    pub voltage: String,
    pub current: String,
}

/// The columns of a converted row that the statistics need.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementRow {
    pub step: StepId,
    /// NSTEP exactly as written in the table, echoed into the summary.
    pub step_label: String,
    pub voltage: f64,
    pub current: f64,
}

impl MeasurementRow {
    pub fn new(step: i64, voltage: f64, current: f64) -> Self {
        Self {
            step: StepId(step),
            step_label: step.to_string(),
            voltage,
            current,
        }
    }
}

/// Aggregated statistics for one voltage step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSummary {
    pub step: StepId,
    pub step_label: String,
    pub v_mean: f64,
    pub v_stderr: f64,
    pub i_mean: f64,
    pub i_stderr: f64,
    pub r_ohm: f64,
    pub r_err: f64,
}

impl StepSummary {
    /// Fields in `MEANS_CSV_HEADER` order, floats fixed to 6 decimals.
    pub fn to_fields(&self) -> [String; 7] {
        [
            self.step_label.clone(),
            format!("{:.6}", self.v_mean),
            format!("{:.6}", self.v_stderr),
            format!("{:.6}", self.i_mean),
            format!("{:.6}", self.i_stderr),
            format!("{:.6}", self.r_ohm),
            format!("{:.6}", self.r_err),
        ]
    }
}
