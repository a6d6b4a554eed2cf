//! Threshold rule engine.
//!
//! Pure logic, no database access and no history: each reading is judged
//! on its own, metric by metric. A single reading can therefore produce
//! several candidate alerts, one per breached metric. There is no
//! cooldown or deduplication; operators see every breaching sample.

use crate::alert::{AlertKind, CandidateAlert, EngineSeverity};
use crate::reading::NewReading;

/// Body temperature above this is a critical breach (°C).
pub const BODY_TEMP_CRITICAL: f64 = 39.2;
/// Body temperature above this (up to the critical bound) is a warning (°C).
pub const BODY_TEMP_WARNING: f64 = 38.4;

/// Pulse above this is a critical breach (bpm).
pub const PULSE_HIGH_CRITICAL: i32 = 140;
/// Pulse above this (up to the critical bound) is a warning (bpm).
pub const PULSE_HIGH_WARNING: i32 = 130;
/// Pulse below this is a critical breach (bpm).
pub const PULSE_LOW_CRITICAL: i32 = 45;
/// Pulse below this (down to the critical bound) is a warning (bpm).
pub const PULSE_LOW_WARNING: i32 = 50;

/// Gas concentration above this is a critical breach (ppm).
pub const GAS_CRITICAL: f64 = 100.0;
/// Gas concentration above this (up to the critical bound) is a warning (ppm).
pub const GAS_WARNING: f64 = 50.0;

/// Evaluate one validated reading against the fixed safety thresholds.
///
/// Candidates are returned in a fixed metric order (temperature, pulse,
/// gas); downstream broadcast preserves this order within one reading.
pub fn evaluate(reading: &NewReading) -> Vec<CandidateAlert> {
    let mut candidates = Vec::new();

    if let Some(temp) = reading.body_temp {
        if temp > BODY_TEMP_CRITICAL {
            candidates.push(candidate(
                AlertKind::HighBodyTemperature,
                EngineSeverity::Critical,
                temp,
                format!("Body temperature {temp:.1} °C above critical threshold {BODY_TEMP_CRITICAL} °C"),
            ));
        } else if temp > BODY_TEMP_WARNING {
            candidates.push(candidate(
                AlertKind::HighBodyTemperature,
                EngineSeverity::Warning,
                temp,
                format!("Body temperature {temp:.1} °C above warning threshold {BODY_TEMP_WARNING} °C"),
            ));
        }
    }

    if let Some(pulse) = reading.pulse {
        if pulse > PULSE_HIGH_CRITICAL {
            candidates.push(candidate(
                AlertKind::HeartRateHigh,
                EngineSeverity::Critical,
                f64::from(pulse),
                format!("Heart rate {pulse} bpm above critical threshold {PULSE_HIGH_CRITICAL} bpm"),
            ));
        } else if pulse > PULSE_HIGH_WARNING {
            candidates.push(candidate(
                AlertKind::HeartRateHigh,
                EngineSeverity::Warning,
                f64::from(pulse),
                format!("Heart rate {pulse} bpm above warning threshold {PULSE_HIGH_WARNING} bpm"),
            ));
        } else if pulse < PULSE_LOW_CRITICAL {
            candidates.push(candidate(
                AlertKind::HeartRateLow,
                EngineSeverity::Critical,
                f64::from(pulse),
                format!("Heart rate {pulse} bpm below critical threshold {PULSE_LOW_CRITICAL} bpm"),
            ));
        } else if pulse < PULSE_LOW_WARNING {
            candidates.push(candidate(
                AlertKind::HeartRateLow,
                EngineSeverity::Warning,
                f64::from(pulse),
                format!("Heart rate {pulse} bpm below warning threshold {PULSE_LOW_WARNING} bpm"),
            ));
        }
    }

    if let Some(gas) = reading.mq7 {
        if gas > GAS_CRITICAL {
            candidates.push(candidate(
                AlertKind::ToxicGas,
                EngineSeverity::Critical,
                gas,
                format!("Gas concentration {gas:.1} ppm above critical threshold {GAS_CRITICAL} ppm"),
            ));
        } else if gas > GAS_WARNING {
            candidates.push(candidate(
                AlertKind::ToxicGas,
                EngineSeverity::Warning,
                gas,
                format!("Gas concentration {gas:.1} ppm above warning threshold {GAS_WARNING} ppm"),
            ));
        }
    }

    candidates
}

fn candidate(
    kind: AlertKind,
    severity: EngineSeverity,
    value: f64,
    message: String,
) -> CandidateAlert {
    CandidateAlert {
        kind,
        severity,
        value,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::ReadingPayload;

    fn reading(payload: ReadingPayload) -> NewReading {
        ReadingPayload {
            user_id: Some(1),
            device_id: Some(1),
            ..payload
        }
        .validate()
        .expect("test reading should validate")
    }

    fn single(reading: &NewReading) -> CandidateAlert {
        let mut candidates = evaluate(reading);
        assert_eq!(candidates.len(), 1, "expected exactly one candidate");
        candidates.remove(0)
    }

    #[test]
    fn nominal_reading_produces_nothing() {
        let r = reading(ReadingPayload {
            body_temp: Some(36.8),
            pulse: Some(72),
            mq7: Some(12.0),
            ..Default::default()
        });
        assert!(evaluate(&r).is_empty());
    }

    #[test]
    fn empty_reading_produces_nothing() {
        let r = reading(ReadingPayload::default());
        assert!(evaluate(&r).is_empty());
    }

    #[test]
    fn body_temp_bands() {
        // At the warning bound: no alert.
        let r = reading(ReadingPayload {
            body_temp: Some(38.4),
            ..Default::default()
        });
        assert!(evaluate(&r).is_empty());

        // Inside (38.4, 39.2]: warning.
        let r = reading(ReadingPayload {
            body_temp: Some(38.5),
            ..Default::default()
        });
        let c = single(&r);
        assert_eq!(c.kind, AlertKind::HighBodyTemperature);
        assert_eq!(c.severity, EngineSeverity::Warning);

        // At the critical bound: still warning.
        let r = reading(ReadingPayload {
            body_temp: Some(39.2),
            ..Default::default()
        });
        assert_eq!(single(&r).severity, EngineSeverity::Warning);

        // Above 39.2: critical.
        let r = reading(ReadingPayload {
            body_temp: Some(39.3),
            ..Default::default()
        });
        let c = single(&r);
        assert_eq!(c.severity, EngineSeverity::Critical);
        assert_eq!(c.value, 39.3);
    }

    #[test]
    fn pulse_high_bands() {
        let r = reading(ReadingPayload {
            pulse: Some(130),
            ..Default::default()
        });
        assert!(evaluate(&r).is_empty());

        let r = reading(ReadingPayload {
            pulse: Some(131),
            ..Default::default()
        });
        let c = single(&r);
        assert_eq!(c.kind, AlertKind::HeartRateHigh);
        assert_eq!(c.severity, EngineSeverity::Warning);

        let r = reading(ReadingPayload {
            pulse: Some(140),
            ..Default::default()
        });
        assert_eq!(single(&r).severity, EngineSeverity::Warning);

        let r = reading(ReadingPayload {
            pulse: Some(141),
            ..Default::default()
        });
        let c = single(&r);
        assert_eq!(c.kind, AlertKind::HeartRateHigh);
        assert_eq!(c.severity, EngineSeverity::Critical);
    }

    #[test]
    fn pulse_low_bands() {
        let r = reading(ReadingPayload {
            pulse: Some(50),
            ..Default::default()
        });
        assert!(evaluate(&r).is_empty());

        let r = reading(ReadingPayload {
            pulse: Some(49),
            ..Default::default()
        });
        let c = single(&r);
        assert_eq!(c.kind, AlertKind::HeartRateLow);
        assert_eq!(c.severity, EngineSeverity::Warning);

        let r = reading(ReadingPayload {
            pulse: Some(45),
            ..Default::default()
        });
        assert_eq!(single(&r).severity, EngineSeverity::Warning);

        let r = reading(ReadingPayload {
            pulse: Some(44),
            ..Default::default()
        });
        let c = single(&r);
        assert_eq!(c.kind, AlertKind::HeartRateLow);
        assert_eq!(c.severity, EngineSeverity::Critical);
    }

    #[test]
    fn gas_bands() {
        let r = reading(ReadingPayload {
            mq7: Some(50.0),
            ..Default::default()
        });
        assert!(evaluate(&r).is_empty());

        let r = reading(ReadingPayload {
            mq7: Some(50.1),
            ..Default::default()
        });
        let c = single(&r);
        assert_eq!(c.kind, AlertKind::ToxicGas);
        assert_eq!(c.severity, EngineSeverity::Warning);

        let r = reading(ReadingPayload {
            mq7: Some(100.0),
            ..Default::default()
        });
        assert_eq!(single(&r).severity, EngineSeverity::Warning);

        let r = reading(ReadingPayload {
            mq7: Some(120.0),
            ..Default::default()
        });
        let c = single(&r);
        assert_eq!(c.severity, EngineSeverity::Critical);
        assert_eq!(c.value, 120.0);
    }

    #[test]
    fn multiple_breaches_stay_independent() {
        let r = reading(ReadingPayload {
            pulse: Some(150),
            mq7: Some(120.0),
            body_temp: Some(39.5),
            ..Default::default()
        });
        let candidates = evaluate(&r);
        assert_eq!(candidates.len(), 3);

        // Fixed metric order: temperature, pulse, gas.
        assert_eq!(candidates[0].kind, AlertKind::HighBodyTemperature);
        assert_eq!(candidates[1].kind, AlertKind::HeartRateHigh);
        assert_eq!(candidates[2].kind, AlertKind::ToxicGas);
        assert!(candidates
            .iter()
            .all(|c| c.severity == EngineSeverity::Critical));
    }

    #[test]
    fn zero_values_are_judged_not_skipped() {
        // pulse 0 is a reported value and breaches the low band.
        let r = reading(ReadingPayload {
            pulse: Some(0),
            ..Default::default()
        });
        let c = single(&r);
        assert_eq!(c.kind, AlertKind::HeartRateLow);
        assert_eq!(c.severity, EngineSeverity::Critical);
    }

    #[test]
    fn messages_carry_the_observed_value() {
        let r = reading(ReadingPayload {
            pulse: Some(148),
            ..Default::default()
        });
        let c = single(&r);
        assert!(c.message.contains("148"));
        assert_eq!(c.value, 148.0);
    }
}
