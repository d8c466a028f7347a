//! Pt100 resistance-to-temperature conversion for the cryostat sensor.
//!
//! The sensor follows the Callendar–Van Dusen form above 0 °C,
//! `R(T) = Rz * (1 + a*T + b*T^2) + Rs`, with `Rs` the lead resistance
//! measured for this setup. Inverting the quadratic gives
//! `T = (-a + sqrt(a^2 - 4b(1 - rn))) / 2b` with `rn = (R - Rs) / Rz`.
use crate::error::{DaqError, Result};

/// Linear coefficient (1/°C).
pub const PT100_A: f64 = 3.90802e-3;
/// Quadratic coefficient (1/°C²).
pub const PT100_B: f64 = -5.80195e-7;
/// Lead resistance in series with the element (ohms).
pub const SERIES_RESISTANCE_OHMS: f64 = 0.561556;
/// Element resistance at 0 °C (ohms).
pub const ZERO_RESISTANCE_OHMS: f64 = 99.9105;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RtdCalibration {
    pub a: f64,
    pub b: f64,
    pub rs_ohm: f64,
    pub rz_ohm: f64,
}

impl Default for RtdCalibration {
    fn default() -> Self {
        Self {
            a: PT100_A,
            b: PT100_B,
            rs_ohm: SERIES_RESISTANCE_OHMS,
            rz_ohm: ZERO_RESISTANCE_OHMS,
        }
    }
}

impl RtdCalibration {
    /// Temperature in °C for a measured resistance.
    pub fn temperature_c(&self, resistance_ohm: f64) -> Result<f64> {
        let rn = (resistance_ohm - self.rs_ohm) / self.rz_ohm;
        let discriminant = self.a * self.a - 4.0 * self.b * (1.0 - rn);
        if !discriminant.is_finite() || discriminant < 0.0 {
            return Err(DaqError::OutOfRange { resistance_ohm });
        }
        Ok((-self.a + discriminant.sqrt()) / (2.0 * self.b))
    }

    /// Expected resistance in ohms at `temperature_c`.
    pub fn resistance_ohm(&self, temperature_c: f64) -> f64 {
        let t = temperature_c;
        self.rz_ohm * (1.0 + self.a * t + self.b * t * t) + self.rs_ohm
    }
}
