//! In-process alert event plumbing.
//!
//! Persistence publishes an [`AlertEvent`] for every alert it creates;
//! the broadcast relay consumes them. This keeps fan-out fully
//! decoupled from ingestion: a slow or failing dashboard observer can
//! never delay or fail the pipeline that acknowledged the device.

pub mod bus;

pub use bus::{AlertBus, AlertEvent};
