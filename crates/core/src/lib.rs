//! Domain types and pure logic for the MineGuard telemetry core.
//!
//! This crate holds everything that needs no I/O: the validated reading
//! type, the alert taxonomy with its two severity scales, and the
//! threshold rule engine. Persistence and transports live in the `db`
//! and `api` crates.

pub mod alert;
pub mod error;
pub mod reading;
pub mod rules;
pub mod types;

pub use alert::{AlertKind, AlertSeverity, CandidateAlert, EngineSeverity};
pub use error::CoreError;
pub use reading::{NewReading, ReadingPayload};
