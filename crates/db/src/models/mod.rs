pub mod alert;
pub mod reading;
pub mod worker;

pub use alert::{AlertRecord, CreateAlert};
pub use reading::ReadingRecord;
pub use worker::WorkerInfo;
