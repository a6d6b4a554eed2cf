//! Alert taxonomy and severity scales.
//!
//! Two scales exist on purpose. The rule engine judges a metric as
//! `warning` or `critical`, and that scale is what dashboards see on the
//! broadcast wire. Persisted alert rows use the collaborator-facing
//! `low|medium|high` scale. The single mapping between them lives in
//! [`AlertSeverity::from`]; no call site defines its own.

use serde::Serialize;

/// The fixed set of alert kinds a reading can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    HeartRateHigh,
    HeartRateLow,
    HighBodyTemperature,
    ToxicGas,
}

impl AlertKind {
    /// Canonical string form, used both in persisted rows and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::HeartRateHigh => "heart_rate_high",
            AlertKind::HeartRateLow => "heart_rate_low",
            AlertKind::HighBodyTemperature => "high_body_temperature",
            AlertKind::ToxicGas => "toxic_gas",
        }
    }
}

/// Severity as judged by the rule engine and broadcast to dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineSeverity {
    /// Value crossed the warning threshold but not the critical one.
    Warning,
    /// Value crossed the critical threshold.
    Critical,
}

impl EngineSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineSeverity::Warning => "warning",
            EngineSeverity::Critical => "critical",
        }
    }
}

/// Severity scale of persisted alert records.
///
/// `Low` is part of the collaborator contract but is never produced by
/// the engine mapping below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

impl AlertSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
        }
    }
}

impl From<EngineSeverity> for AlertSeverity {
    /// The one place the engine scale maps to the persisted scale.
    fn from(severity: EngineSeverity) -> Self {
        match severity {
            EngineSeverity::Warning => AlertSeverity::Medium,
            EngineSeverity::Critical => AlertSeverity::High,
        }
    }
}

/// A threshold breach produced by the rule engine for one metric of one
/// reading. Not yet persisted; the alert store stamps identity, the
/// reading reference, and the denormalized worker id.
#[derive(Debug, Clone)]
pub struct CandidateAlert {
    pub kind: AlertKind,
    pub severity: EngineSeverity,
    /// The metric value that crossed the threshold.
    pub value: f64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_scale_maps_to_persisted_scale() {
        assert_eq!(
            AlertSeverity::from(EngineSeverity::Warning),
            AlertSeverity::Medium
        );
        assert_eq!(
            AlertSeverity::from(EngineSeverity::Critical),
            AlertSeverity::High
        );
    }

    #[test]
    fn kind_strings_match_the_wire_contract() {
        assert_eq!(AlertKind::HeartRateHigh.as_str(), "heart_rate_high");
        assert_eq!(AlertKind::HeartRateLow.as_str(), "heart_rate_low");
        assert_eq!(
            AlertKind::HighBodyTemperature.as_str(),
            "high_body_temperature"
        );
        assert_eq!(AlertKind::ToxicGas.as_str(), "toxic_gas");
    }

    #[test]
    fn serde_forms_match_as_str() {
        let json = serde_json::to_string(&AlertKind::ToxicGas).unwrap();
        assert_eq!(json, "\"toxic_gas\"");

        let json = serde_json::to_string(&EngineSeverity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");

        let json = serde_json::to_string(&AlertSeverity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
