use std::collections::HashMap;

use crate::types::{MeasurementRow, StepId};

/// Every voltage and current sample recorded at one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSamples {
    pub step: StepId,
    /// Label of the first row seen for this step.
    pub label: String,
    pub voltages: Vec<f64>,
    pub currents: Vec<f64>,
}

impl StepSamples {
    pub fn new(step: StepId, label: impl Into<String>) -> Self {
        Self {
            step,
            label: label.into(),
            voltages: Vec::new(),
            currents: Vec::new(),
        }
    }
}

/// Groups measurement rows by step, keeping steps in first-seen order.
#[derive(Debug, Default)]
pub struct StepBuffer {
    index: HashMap<StepId, usize>, // step -> position in `steps`
    steps: Vec<StepSamples>,
}

impl StepBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: &MeasurementRow) {
        let steps = &mut self.steps;
        let slot = *self.index.entry(row.step).or_insert_with(|| {
            steps.push(StepSamples::new(row.step, row.step_label.as_str()));
            steps.len() - 1
        });
        let samples = &mut self.steps[slot];
        samples.voltages.push(row.voltage);
        samples.currents.push(row.current);
    }

    pub fn steps(&self) -> &[StepSamples] {
        &self.steps
    }

    pub fn get(&self, step: StepId) -> Option<&StepSamples> {
        self.index.get(&step).map(|&slot| &self.steps[slot])
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
