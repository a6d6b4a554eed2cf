pub mod alert_repo;
pub mod reading_repo;
pub mod worker_repo;

pub use alert_repo::AlertRepo;
pub use reading_repo::ReadingRepo;
pub use worker_repo::WorkerRepo;
