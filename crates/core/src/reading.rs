//! Telemetry reading payload and its validating constructor.
//!
//! Helmet devices report samples over two transports sharing one payload
//! shape. [`ReadingPayload`] is the raw wire form; [`NewReading`] is the
//! validated form that the rule engine and persistence layer accept.
//! A metric field left out of a sample means "not reported", which is
//! distinct from a reported zero.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Raw ingestion payload, identical on the HTTP and hardware channels.
///
/// Every field is optional at the serde level so that a missing required
/// field surfaces as a validation failure rather than a parse failure;
/// the hardware channel distinguishes the two in its reply tokens.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingPayload {
    pub user_id: Option<DbId>,
    pub device_id: Option<DbId>,
    /// Carbon monoxide concentration from the MQ-7 sensor (ppm).
    pub mq7: Option<f64>,
    /// Heart rate (bpm).
    pub pulse: Option<i32>,
    /// Body temperature (°C).
    pub body_temp: Option<f64>,
    /// Accelerometer axes (m/s²).
    pub ax: Option<f64>,
    pub ay: Option<f64>,
    pub az: Option<f64>,
    /// Gyroscope axes (rad/s).
    pub gx: Option<f64>,
    pub gy: Option<f64>,
    pub gz: Option<f64>,
}

/// A validated telemetry sample. Only constructible through
/// [`ReadingPayload::validate`], so the rule engine never sees
/// out-of-range values.
#[derive(Debug, Clone)]
pub struct NewReading {
    pub user_id: DbId,
    pub device_id: DbId,
    pub mq7: Option<f64>,
    pub pulse: Option<i32>,
    pub body_temp: Option<f64>,
    pub ax: Option<f64>,
    pub ay: Option<f64>,
    pub az: Option<f64>,
    pub gx: Option<f64>,
    pub gy: Option<f64>,
    pub gz: Option<f64>,
}

impl ReadingPayload {
    /// Validate the payload and produce an immutable [`NewReading`].
    ///
    /// Required: `user_id` and `device_id`, both positive. Optional
    /// metric fields must fall within their sensor's physical range:
    /// `mq7` 0–10000 ppm, `pulse` 0–300 bpm, acceleration axes ±20 m/s²,
    /// angular-rate axes ±10 rad/s. `body_temp` has no hard bound.
    pub fn validate(self) -> Result<NewReading, CoreError> {
        let user_id = match self.user_id {
            Some(id) if id > 0 => id,
            _ => return Err(CoreError::Validation("user_id missing or not positive".into())),
        };
        let device_id = match self.device_id {
            Some(id) if id > 0 => id,
            _ => {
                return Err(CoreError::Validation(
                    "device_id missing or not positive".into(),
                ))
            }
        };

        if let Some(mq7) = self.mq7 {
            check_range(mq7, 0.0, 10_000.0, "mq7")?;
        }
        if let Some(pulse) = self.pulse {
            if !(0..=300).contains(&pulse) {
                return Err(CoreError::Validation(format!(
                    "pulse out of range (0-300 bpm), got {pulse}"
                )));
            }
        }
        for (value, name) in [(self.ax, "ax"), (self.ay, "ay"), (self.az, "az")] {
            if let Some(v) = value {
                check_range(v, -20.0, 20.0, name)?;
            }
        }
        for (value, name) in [(self.gx, "gx"), (self.gy, "gy"), (self.gz, "gz")] {
            if let Some(v) = value {
                check_range(v, -10.0, 10.0, name)?;
            }
        }

        Ok(NewReading {
            user_id,
            device_id,
            mq7: self.mq7,
            pulse: self.pulse,
            body_temp: self.body_temp,
            ax: self.ax,
            ay: self.ay,
            az: self.az,
            gx: self.gx,
            gy: self.gy,
            gz: self.gz,
        })
    }
}

/// Validate that a value falls within `[min, max]`, naming the field in
/// the error.
fn check_range(value: f64, min: f64, max: f64, name: &str) -> Result<(), CoreError> {
    if !(min..=max).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} out of range ({min} to {max}), got {value}"
        )));
    }
    Ok(())
}
