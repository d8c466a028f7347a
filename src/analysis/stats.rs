use crate::analysis::buffer::StepSamples;
use crate::error::{DaqError, Result};
use crate::types::StepSummary;

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn population_std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mean = mean(data);
    let variance = data
        .iter()
        .map(|v| {
            let delta = v - mean;
            delta * delta
        })
        .sum::<f64>()
        / data.len() as f64;
    variance.sqrt()
}

/// Standard error of the mean: population std dev over `sqrt(n)`.
pub fn standard_error(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    population_std_dev(data) / (data.len() as f64).sqrt()
}

/// Means, standard errors and the derived resistance of one step.
///
/// The resistance error is the first-order propagation for a ratio of two
/// means: `(v_err / v + i_err / i) * R`. A zero mean voltage or current makes
/// that undefined and is reported as [`DaqError::ZeroMean`].
pub fn summarize(samples: &StepSamples) -> Result<StepSummary> {
    let v_mean = mean(&samples.voltages);
    let i_mean = mean(&samples.currents);
    if i_mean == 0.0 {
        return Err(DaqError::ZeroMean {
            step: samples.step,
            quantity: "current",
        });
    }
    if v_mean == 0.0 {
        return Err(DaqError::ZeroMean {
            step: samples.step,
            quantity: "voltage",
        });
    }
    let v_stderr = standard_error(&samples.voltages);
    let i_stderr = standard_error(&samples.currents);
    let r_ohm = v_mean / i_mean;
    let r_err = (v_stderr / v_mean + i_stderr / i_mean) * r_ohm;
    Ok(StepSummary {
        step: samples.step,
        step_label: samples.label.clone(),
        v_mean,
        v_stderr,
        i_mean,
        i_stderr,
        r_ohm,
        r_err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StepId;

    fn step(voltages: &[f64], currents: &[f64]) -> StepSamples {
        StepSamples {
            step: StepId(0),
            label: "0".into(),
            voltages: voltages.to_vec(),
            currents: currents.to_vec(),
        }
    }

    #[test]
    fn constant_samples_have_zero_error() {
        let data = [0.25; 9];
        assert_eq!(mean(&data), 0.25);
        assert_eq!(standard_error(&data), 0.0);
    }

    #[test]
    fn single_sample_has_zero_error() {
        let summary = summarize(&step(&[1.5], &[0.003])).unwrap();
        assert_eq!(summary.v_mean, 1.5);
        assert_eq!(summary.v_stderr, 0.0);
        assert_eq!(summary.i_stderr, 0.0);
        assert_eq!(summary.r_err, 0.0);
        assert!((summary.r_ohm - 500.0).abs() < 1e-9);
    }

    #[test]
    fn uses_population_deviation() {
        // Sample std dev would be sqrt(2) here.
        assert!((population_std_dev(&[1.0, 3.0]) - 1.0).abs() < 1e-12);
        assert!((standard_error(&[1.0, 3.0]) - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn resistance_error_propagation() {
        let summary = summarize(&step(&[1.0, 3.0], &[2.0, 2.0])).unwrap();
        assert_eq!(summary.v_mean, 2.0);
        assert_eq!(summary.i_mean, 2.0);
        assert_eq!(summary.i_stderr, 0.0);
        assert_eq!(summary.r_ohm, 1.0);
        let v_stderr = 1.0 / 2.0_f64.sqrt();
        assert!((summary.v_stderr - v_stderr).abs() < 1e-12);
        assert!((summary.r_err - v_stderr / 2.0).abs() < 1e-12);
        assert_eq!(summary.to_fields()[2], "0.707107");
        assert_eq!(summary.to_fields()[6], "0.353553");
    }

    #[test]
    fn zero_mean_current_is_rejected() {
        let err = summarize(&step(&[1.0, 1.0], &[-0.5, 0.5])).unwrap_err();
        assert!(matches!(
            err,
            DaqError::ZeroMean {
                quantity: "current",
                ..
            }
        ));
    }

    #[test]
    fn zero_mean_voltage_is_rejected() {
        let err = summarize(&step(&[0.0], &[0.1])).unwrap_err();
        assert!(matches!(
            err,
            DaqError::ZeroMean {
                quantity: "voltage",
                ..
            }
        ));
    }
}
