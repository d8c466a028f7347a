// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::StepId;

#[derive(Debug, Error)]
pub enum DaqError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Stream(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },
    #[error("line {line}: column {column} is not a valid number: {value:?}")]
    Parse {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("step {step}: mean {quantity} is zero, resistance is undefined")]
    ZeroMean {
        step: StepId,
        quantity: &'static str,
    },
    #[error("not a CSV file: {}", path.display())]
    NotCsv { path: PathBuf },
    #[error("resistance {resistance_ohm} ohm is outside the calibrated range")]
    OutOfRange { resistance_ohm: f64 },
}

impl DaqError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DaqError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DaqError>;
